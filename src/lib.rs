//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{core,input,term,types}` and hosts the
//! pieces that only the binary needs: command-line configuration and the high-score file.

pub mod cli;
pub mod highscore;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
