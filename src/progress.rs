//! Persisted player progress.
//!
//! A single JSON file recording the highest unlocked level and the set of
//! completed levels. Loading is forgiving: a missing or unreadable file
//! simply starts a fresh game, since losing progress should never prevent a
//! child from playing.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::level::MAX_LEVEL;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Highest level the player may enter.
    pub current_level: u32,
    /// Levels that have been completed at least once.
    pub completed_levels: BTreeSet<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Progress {
            current_level: 1,
            completed_levels: BTreeSet::new(),
        }
    }
}

impl Progress {
    /// Records a finished level and unlocks the next one, up to the last
    /// level of the game.
    pub fn complete_level(&mut self, level: u32) {
        self.completed_levels.insert(level);
        self.current_level = self.current_level.max(level + 1).min(MAX_LEVEL);
    }

    pub fn is_completed(&self, level: u32) -> bool {
        self.completed_levels.contains(&level)
    }

    /// Loads saved progress from the platform data directory, or starts
    /// fresh if there is nothing usable there.
    pub fn load() -> Self {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Progress::default(),
        }
    }

    /// Loads progress from `path`, falling back to a fresh game on any error.
    pub fn load_from(path: &Path) -> Self {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Progress::default(),
            Err(err) => {
                tracing::warn!(?path, %err, "could not read progress file, starting fresh");
                return Progress::default();
            }
        };
        match serde_json::from_str(&data) {
            Ok(progress) => progress,
            Err(err) => {
                tracing::warn!(?path, %err, "progress file is corrupt, starting fresh");
                Progress::default()
            }
        }
    }

    /// Saves progress to the platform data directory.
    pub fn save(&self) -> io::Result<()> {
        match default_path() {
            Some(path) => self.save_to(&path),
            None => Err(io::Error::other("no data directory available")),
        }
    }

    /// Saves progress as pretty-printed JSON at `path`, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, data)
    }
}

fn default_path() -> Option<PathBuf> {
    let dirs = ProjectDirs::from("", "", "mazequest")?;
    Some(dirs.data_dir().join("progress.json"))
}
