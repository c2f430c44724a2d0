//! Scoring module - line clear points
//!
//! Fixed lookup for one to four lines; larger simultaneous clears (unreachable
//! with tetrominoes on a standard board, but defined) pay a flat rate per line.

use crate::types::{LINE_SCORES, LONG_CLEAR_POINTS_PER_LINE};

/// Points for clearing `lines` rows with a single lock.
pub fn line_clear_score(lines: usize) -> u32 {
    match lines {
        0..=4 => LINE_SCORES[lines],
        n => (n as u32).saturating_mul(LONG_CLEAR_POINTS_PER_LINE),
    }
}
