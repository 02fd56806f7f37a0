//! Flip Cards (workspace facade crate).
//!
//! Re-exports the workspace crates as `flip_cards::{core,input,term,types}` and
//! hosts the pieces shared by the binary and the integration tests: CLI
//! configuration, logging setup and the headless script driver.

pub use flip_cards_core as core;
pub use flip_cards_input as input;
pub use flip_cards_term as term;
pub use flip_cards_types as types;

pub mod cli;
pub mod logging;
pub mod script;
