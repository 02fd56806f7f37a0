//! Headless script driver.
//!
//! Reads one command per line and writes one JSON object per state-changing
//! command (and per `show`). Useful for reproducing games and for driving the
//! session from other programs.
//!
//! ```text
//! select <slot>   reveal a card (alias: flip)
//! new             deal a new game (aliases: newgame, restart)
//! wait <ms>       advance the mismatch timer
//! show            print the current state
//! # comment       ignored, as are blank lines
//! ```
//!
//! Face-down cards are reported as `null`.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{DeckSource, GameSession, SessionSnapshot};
use crate::types::{GameAction, VisualState};

/// One parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Action(GameAction),
    Wait(u32),
    Show,
}

/// Parse one line; `Ok(None)` for blanks and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    if let Some(action) = GameAction::from_str(line) {
        return Ok(Some(Command::Action(action)));
    }

    let mut parts = line.split_whitespace();
    let cmd = match (parts.next(), parts.next(), parts.next()) {
        (Some("show"), None, None) => Command::Show,
        (Some("wait"), Some(ms), None) => Command::Wait(
            ms.parse()
                .with_context(|| format!("invalid wait duration `{ms}`"))?,
        ),
        _ => bail!("unknown command `{line}`"),
    };
    Ok(Some(cmd))
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    event: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    cards: Vec<Option<String>>,
    states: Vec<VisualState>,
    trials: u32,
    matched_pairs: u32,
    pair_count: usize,
    best_score: Option<u32>,
    generation: u32,
    reset_pending: bool,
    complete: bool,
}

impl<'a> Report<'a> {
    fn new(event: &'a str, snap: &SessionSnapshot) -> Self {
        Self {
            event,
            error: None,
            cards: snap
                .slots
                .iter()
                .map(|s| s.visible_card().map(|c| c.to_string()))
                .collect(),
            states: snap.slots.iter().map(|s| s.state).collect(),
            trials: snap.trials,
            matched_pairs: snap.matched_pairs,
            pair_count: snap.pair_count,
            best_score: snap.best_score,
            generation: snap.generation,
            reset_pending: snap.reset_pending,
            complete: snap.complete,
        }
    }
}

/// Run every command from `input` against `session`, reporting to `out`.
///
/// Session errors (e.g. an out-of-range slot) are reported as `"error"`
/// events and the script continues; malformed lines abort the run.
pub fn run<D, R, W>(session: &mut GameSession<D>, input: R, mut out: W) -> Result<()>
where
    D: DeckSource,
    R: BufRead,
    W: Write,
{
    let mut snap = SessionSnapshot::default();

    for (n, line) in input.lines().enumerate() {
        let line = line.context("failed to read script input")?;
        let Some(cmd) = parse_line(&line).with_context(|| format!("line {}", n + 1))? else {
            continue;
        };
        debug!(line = n + 1, ?cmd, "script command");

        let (event, error) = match cmd {
            Command::Action(action) => match session.apply_action(action) {
                Ok(outcome) => (outcome.as_str(), None),
                Err(err) => {
                    warn!(line = n + 1, %err, "command rejected");
                    ("error", Some(err.to_string()))
                }
            },
            Command::Wait(ms) => match session.tick(ms) {
                Some(outcome) => (outcome.as_str(), None),
                None => ("waited", None),
            },
            Command::Show => ("show", None),
        };

        session.snapshot_into(&mut snap);
        let mut report = Report::new(event, &snap);
        report.error = error;
        serde_json::to_writer(&mut out, &report)?;
        out.write_all(b"\n")?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            parse_line("select 3").unwrap(),
            Some(Command::Action(GameAction::Select(3)))
        );
        assert_eq!(
            parse_line("  new ").unwrap(),
            Some(Command::Action(GameAction::NewGame))
        );
        assert_eq!(parse_line("wait 250").unwrap(), Some(Command::Wait(250)));
        assert_eq!(parse_line("show").unwrap(), Some(Command::Show));
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("# note").unwrap(), None);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_line("jump").is_err());
        assert!(parse_line("wait").is_err());
        assert!(parse_line("wait soon").is_err());
        assert!(parse_line("show me").is_err());
    }
}
