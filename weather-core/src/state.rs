//! Widget view model.
//!
//! Every transition is a pure function taking the old state by value and
//! returning the new one. Network I/O lives in [`crate::widget`]; this module
//! only decides what a finished request does to the display.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    error::{LookupError, failure_message},
    model::{WeatherQuery, WeatherResult},
    units::DisplayUnit,
};

/// How to treat responses that arrive out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Apply every response as it arrives; the last one to resolve is shown.
    #[default]
    LastResolvedWins,
    /// Drop responses whose search has been superseded by a newer one.
    LatestIssuedOnly,
}

/// Handed out when a search is issued. `seq` increases by one per search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: WeatherQuery,
}

/// A finished lookup, tagged with the ticket it was issued under.
#[derive(Debug)]
pub struct Completion {
    pub seq: u64,
    pub query: WeatherQuery,
    pub outcome: Result<WeatherResult, LookupError>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetState {
    result: Option<WeatherResult>,
    error: Option<String>,
    unit: DisplayUnit,
    ordering: ResponseOrdering,
    last_issued: u64,
}

impl WidgetState {
    pub fn new(unit: DisplayUnit, ordering: ResponseOrdering) -> Self {
        Self {
            unit,
            ordering,
            ..Default::default()
        }
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn ordering(&self) -> ResponseOrdering {
        self.ordering
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    /// Start a search for `text`.
    ///
    /// Empty text leaves the state untouched and yields no ticket. Otherwise
    /// the error line is cleared and a new ticket is issued; the current
    /// result stays on screen until a response replaces it.
    pub fn begin_search(self, text: &str) -> (Self, Option<SearchTicket>) {
        let Some(query) = WeatherQuery::new(text) else {
            return (self, None);
        };

        let seq = self.last_issued + 1;
        let next = Self {
            error: None,
            last_issued: seq,
            ..self
        };
        (next, Some(SearchTicket { seq, query }))
    }

    /// Replace the result in full and clear the error line.
    pub fn apply_success(self, seq: u64, result: WeatherResult) -> Self {
        if !self.accepts(seq) {
            debug!(seq, last_issued = self.last_issued, "discarding superseded success");
            return self;
        }
        Self {
            result: Some(result),
            error: None,
            ..self
        }
    }

    /// Show the failure message for `query`. Any previous result is kept.
    pub fn apply_failure(self, seq: u64, query: &WeatherQuery) -> Self {
        if !self.accepts(seq) {
            debug!(seq, last_issued = self.last_issued, "discarding superseded failure");
            return self;
        }
        Self {
            error: Some(failure_message(query)),
            ..self
        }
    }

    pub fn apply_unit_toggle(self) -> Self {
        Self {
            unit: self.unit.toggle(),
            ..self
        }
    }

    pub fn apply_completion(self, completion: Completion) -> Self {
        let Completion {
            seq,
            query,
            outcome,
        } = completion;
        match outcome {
            Ok(result) => self.apply_success(seq, result),
            Err(err) => {
                debug!(seq, query = %query, error = %err, "lookup failed");
                self.apply_failure(seq, &query)
            }
        }
    }

    fn accepts(&self, seq: u64) -> bool {
        match self.ordering {
            ResponseOrdering::LastResolvedWins => true,
            ResponseOrdering::LatestIssuedOnly => seq == self.last_issued,
        }
    }
}
