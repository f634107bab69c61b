use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::Context;
use battleboats_core::BattleEngine;

pub const DEFAULT_SAVE_FILE: &str = "progressFile";

/// What a resume attempt found on disk.
#[derive(Debug)]
pub enum Progress {
    /// No game was ever saved here.
    Missing,
    /// The file exists but was wiped after a finished game.
    Empty,
    Saved(BattleEngine),
}

/// The progress file holding the four boards between runs.
#[derive(Clone, Debug)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the whole file with the current boards.
    pub fn save(&self, engine: &BattleEngine) -> anyhow::Result<()> {
        let text = engine
            .to_save_string()
            .context("Could not serialize the boards")?;
        fs::write(&self.path, text)
            .with_context(|| format!("Could not write {}", self.path.display()))?;
        log::debug!("progress saved to {}", self.path.display());
        Ok(())
    }

    /// Truncates the file so a finished game is never resumed.
    pub fn wipe(&self) -> anyhow::Result<()> {
        fs::write(&self.path, "")
            .with_context(|| format!("Could not wipe {}", self.path.display()))?;
        log::info!("progress wiped at {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> anyhow::Result<Progress> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no progress file at {}", self.path.display());
                return Ok(Progress::Missing);
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Could not read {}", self.path.display()));
            }
        };

        if text.trim().is_empty() {
            return Ok(Progress::Empty);
        }

        let engine = BattleEngine::from_save_str(&text)
            .with_context(|| format!("Saved game in {} is corrupt", self.path.display()))?;
        log::info!(
            "progress loaded from {} in state {:?}",
            self.path.display(),
            engine.state()
        );
        Ok(Progress::Saved(engine))
    }
}
