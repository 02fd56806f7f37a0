//! Command-line configuration.
//!
//! Every option can also come from a `FLIP_CARDS_*` environment variable.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::{FixedDeck, SessionConfig};
use crate::logging::LogTarget;
use crate::types::{Card, DEFAULT_PAIR_COUNT, MISMATCH_DELAY_MS};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "flip-cards",
    version,
    about = "Memory-matching card game for the terminal"
)]
pub struct Args {
    /// Number of pairs on the board (1-52)
    #[arg(long, short = 'p', env = "FLIP_CARDS_PAIRS", default_value_t = DEFAULT_PAIR_COUNT)]
    pub pairs: usize,

    /// Seed for dealing; derived from the clock when omitted
    #[arg(long, env = "FLIP_CARDS_SEED")]
    pub seed: Option<u64>,

    /// How long a mismatched pair stays face-up, in milliseconds
    #[arg(long, env = "FLIP_CARDS_DELAY_MS", default_value_t = MISMATCH_DELAY_MS)]
    pub delay_ms: u32,

    /// Fixed layout replayed on every game, e.g. "AS,KH,KH,AS" (overrides --pairs/--seed)
    #[arg(long, value_delimiter = ',', value_parser = parse_card)]
    pub deck: Vec<Card>,

    /// Write logs to this file (the terminal UI logs nowhere otherwise)
    #[arg(long, env = "FLIP_CARDS_LOG")]
    pub log_file: Option<PathBuf>,

    /// Headless mode: read commands from stdin, write JSON lines to stdout
    #[arg(long)]
    pub script: bool,

    /// Show every card face-up
    #[arg(long, hide = true)]
    pub peek: bool,
}

impl Args {
    /// Session settings with the seed resolved.
    pub fn session_config(&self) -> SessionConfig {
        let seed = self.seed.unwrap_or_else(clock_seed);
        SessionConfig::new(self.pairs, seed).with_delay_ms(self.delay_ms)
    }

    /// The `--deck` layout, if one was given.
    pub fn fixed_deck(&self) -> anyhow::Result<Option<FixedDeck>> {
        if self.deck.is_empty() {
            return Ok(None);
        }
        Ok(Some(FixedDeck::new(self.deck.clone())?))
    }

    pub fn log_target(&self) -> LogTarget {
        match (&self.log_file, self.script) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Off,
        }
    }
}

fn parse_card(s: &str) -> Result<Card, String> {
    Card::parse(s).ok_or_else(|| format!("invalid card `{s}` (expected e.g. 10h, QS, A♣)"))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
