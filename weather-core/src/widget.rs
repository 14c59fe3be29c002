//! The widget: owns the view model and runs lookups in the background.
//!
//! Each search spawns one tokio task. Finished lookups come back over a
//! channel and are applied in the order they resolve. Nothing is cancelled
//! when a newer search is issued, so under [`ResponseOrdering::LastResolvedWins`]
//! the slowest response decides what is shown.
//!
//! [`ResponseOrdering::LastResolvedWins`]: crate::state::ResponseOrdering::LastResolvedWins

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    provider::WeatherProvider,
    render::WidgetView,
    state::{Completion, WidgetState},
};

#[derive(Debug)]
pub struct Widget {
    provider: Arc<dyn WeatherProvider>,
    state: WidgetState,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl Widget {
    pub fn new(provider: Arc<dyn WeatherProvider>, state: WidgetState) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            provider,
            state,
            tx,
            rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn view(&self) -> WidgetView {
        WidgetView::from_state(&self.state)
    }

    /// Number of lookups issued but not yet applied.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Issue a lookup for `text`. Returns its sequence number, or `None` if
    /// the text was empty and nothing happened.
    ///
    /// Must be called from within a tokio runtime.
    pub fn search(&mut self, text: &str) -> Option<u64> {
        let (state, ticket) = std::mem::take(&mut self.state).begin_search(text);
        self.state = state;
        let ticket = ticket?;

        info!(seq = ticket.seq, query = %ticket.query, "issuing lookup");

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = provider.current_weather(&ticket.query).await;
            // The receiver only goes away with the widget itself.
            let _ = tx.send(Completion {
                seq: ticket.seq,
                query: ticket.query,
                outcome,
            });
        });
        self.in_flight += 1;

        Some(ticket.seq)
    }

    pub fn toggle_units(&mut self) {
        self.state = std::mem::take(&mut self.state).apply_unit_toggle();
        debug!(unit = self.state.unit().as_str(), "display unit toggled");
    }

    /// Wait for the next lookup to finish and apply it. Returns the sequence
    /// number of the applied lookup, or `None` right away if none is pending.
    pub async fn next_completion(&mut self) -> Option<u64> {
        if self.in_flight == 0 {
            return None;
        }

        let completion = self.rx.recv().await?;
        self.in_flight -= 1;

        let seq = completion.seq;
        debug!(seq, ok = completion.outcome.is_ok(), "lookup resolved");
        self.state = std::mem::take(&mut self.state).apply_completion(completion);
        Some(seq)
    }

    /// Apply every pending lookup, in resolution order.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }
}
