//! Line-oriented front end for the widget.
//!
//! Input and lookup results are multiplexed with `tokio::select!`, so the
//! prompt keeps accepting commands while requests are outstanding.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;
use weather_core::Widget;

/// What a line of user input asks the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    Search(&'a str),
    ToggleUnits,
    Quit,
}

pub fn parse_input(line: &str) -> Input<'_> {
    match line {
        ":u" | ":units" => Input::ToggleUnits,
        ":q" | ":quit" => Input::Quit,
        city => Input::Search(city),
    }
}

pub async fn run(mut widget: Widget) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("Type a city and press Enter. `:u` toggles units, `:q` quits.");
    draw(&widget)?;

    loop {
        let pending = widget.in_flight() > 0;
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim_end_matches(['\r', '\n']);
                match parse_input(line) {
                    Input::Quit => break,
                    Input::ToggleUnits => {
                        widget.toggle_units();
                        draw(&widget)?;
                    }
                    Input::Search(city) => {
                        if let Some(seq) = widget.search(city) {
                            debug!(seq, "search submitted");
                            draw(&widget)?;
                        }
                    }
                }
            }
            Some(_) = widget.next_completion(), if pending => {
                draw(&widget)?;
            }
        }
    }

    Ok(())
}

fn draw(widget: &Widget) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(out)?;
    writeln!(out, "{}", widget.view())?;
    if widget.in_flight() > 0 {
        writeln!(out, "(loading...)")?;
    }
    write!(out, "> ")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_are_recognised() {
        assert_eq!(parse_input(":u"), Input::ToggleUnits);
        assert_eq!(parse_input(":units"), Input::ToggleUnits);
        assert_eq!(parse_input(":q"), Input::Quit);
        assert_eq!(parse_input(":quit"), Input::Quit);
    }

    #[test]
    fn everything_else_is_a_search() {
        assert_eq!(parse_input("London"), Input::Search("London"));
        assert_eq!(parse_input(""), Input::Search(""));
        assert_eq!(parse_input(" "), Input::Search(" "));
    }
}
