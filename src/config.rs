//! Save directory configuration.

use crate::core::constants::{SAVE_DIR_ENV_VAR, SAVE_DIR_NAME};
use crate::core::errors::GameResult;
use directories::ProjectDirs;
use std::env;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveConfig {
    save_dir: PathBuf,
}

impl SaveConfig {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    /// Resolves the save directory from the environment.
    ///
    /// `CHRONICLES_SAVE_DIR` wins when set and non-empty; otherwise saves live
    /// in the platform data directory (e.g. `~/.local/share/chronicles/save_games`).
    pub fn from_env() -> GameResult<Self> {
        if let Some(dir) = env::var_os(SAVE_DIR_ENV_VAR).filter(|dir| !dir.is_empty()) {
            return Ok(Self::new(dir));
        }

        let project_dirs = ProjectDirs::from("", "", "chronicles").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine data directory")
        })?;

        Ok(Self::new(project_dirs.data_dir().join(SAVE_DIR_NAME)))
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }
}
