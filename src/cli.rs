//! Command-line configuration and logger setup.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle, WriteMode};

use crate::core::DropTiming;
use crate::highscore::{self, HighScoreStore};
use crate::types::{DEFAULT_DROP_INTERVAL_SECS, FAST_DROP_INTERVAL_SECS};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Clear full rows to score."
)]
pub struct Args {
    /// Seed for the piece sequence. Derived from the clock when omitted.
    #[arg(long, value_name = "N")]
    pub seed: Option<u32>,

    /// Gravity interval in milliseconds.
    #[arg(long, default_value_t = (DEFAULT_DROP_INTERVAL_SECS * 1000.0) as u64, value_name = "MS")]
    pub drop_interval_ms: u64,

    /// Gravity interval while fast drop is held, in milliseconds.
    #[arg(long, default_value_t = (FAST_DROP_INTERVAL_SECS * 1000.0) as u64, value_name = "MS")]
    pub fast_drop_interval_ms: u64,

    /// High score file. Defaults to $XDG_CONFIG_HOME/blockfall/highscore.
    #[arg(long, value_name = "FILE")]
    pub high_score_file: Option<PathBuf>,

    /// Log level or filter spec (e.g. "debug", "blockfall_core=trace"). Falls back to
    /// RUST_LOG; logging is off when neither is set.
    #[arg(long, env = "RUST_LOG", value_name = "SPEC")]
    pub log_level: Option<String>,

    /// Directory for log files.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub log_dir: PathBuf,
}

impl Args {
    /// Explicit seed or one taken from the clock.
    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u32)
                .unwrap_or(1)
        })
    }

    pub fn timing(&self) -> Result<DropTiming> {
        ensure!(self.drop_interval_ms > 0, "--drop-interval-ms must be positive");
        ensure!(
            self.fast_drop_interval_ms > 0,
            "--fast-drop-interval-ms must be positive"
        );
        Ok(DropTiming {
            normal_secs: self.drop_interval_ms as f32 / 1000.0,
            fast_secs: self.fast_drop_interval_ms as f32 / 1000.0,
        })
    }

    pub fn high_score_store(&self) -> HighScoreStore {
        HighScoreStore::new(
            self.high_score_file
                .clone()
                .unwrap_or_else(highscore::default_path),
        )
    }

    /// Start file logging when a level was requested.
    ///
    /// The terminal is in raw mode while playing, so records never go to stderr.
    /// Keep the returned handle alive for the lifetime of the program.
    pub fn init_logger(&self) -> Result<Option<LoggerHandle>> {
        let Some(spec) = self.log_level.as_deref() else {
            return Ok(None);
        };
        let handle = Logger::try_with_str(spec)?
            .log_to_file(
                FileSpec::default()
                    .directory(self.log_dir.clone())
                    .basename("blockfall"),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .start()?;
        Ok(Some(handle))
    }
}
