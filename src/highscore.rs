//! Persist the best score to disk (XDG config or ~/.config/blockfall).
//!
//! The file holds a single decimal integer. A missing or unreadable file counts as 0.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

const APP_DIR: &str = "blockfall";
const FILENAME: &str = "highscore";

#[derive(Debug, Error)]
pub enum HighScoreError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Default location: `$XDG_CONFIG_HOME/blockfall/highscore`, falling back to
/// `$HOME/.config/blockfall/highscore`, then the working directory.
pub fn default_path() -> PathBuf {
    let base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => std::env::var("HOME")
            .map(|h| PathBuf::from(h).join(".config"))
            .unwrap_or_else(|_| PathBuf::from(".")),
    };
    base.join(APP_DIR).join(FILENAME)
}

/// File-backed best score.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored score, or 0 when the file is missing or does not parse.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(s) => s.trim().parse().unwrap_or_else(|_| {
                log::warn!("ignoring malformed high score file {}", self.path.display());
                0
            }),
            Err(_) => 0,
        }
    }

    /// Overwrite the stored score, creating parent directories as needed.
    pub fn save(&self, score: u32) -> Result<(), HighScoreError> {
        let io_err = |source| HighScoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).map_err(io_err)?;
            }
        }
        fs::write(&self.path, format!("{}\n", score)).map_err(io_err)
    }

    /// Save `score` if it beats the stored one. Returns whether it was written.
    pub fn record(&self, score: u32) -> Result<bool, HighScoreError> {
        if score <= self.load() {
            return Ok(false);
        }
        self.save(score)?;
        log::info!("new high score {}", score);
        Ok(true)
    }
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new(default_path())
    }
}
