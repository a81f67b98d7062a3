use super::codec::{decode, encode};
use crate::character::record::CharacterRecord;
use crate::character::validation::validate_name;
use crate::config::SaveConfig;
use crate::core::constants::SAVE_FILE_SUFFIX;
use crate::core::errors::{GameError, GameResult};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Reads and writes one save file per character inside a save directory.
pub struct CharacterManager {
    save_dir: PathBuf,
}

impl CharacterManager {
    pub fn new(config: &SaveConfig) -> Self {
        Self {
            save_dir: config.save_dir().to_path_buf(),
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Path of the save file for `name`, e.g. `<save_dir>/Aria_save.txt`.
    pub fn save_path(&self, name: &str) -> GameResult<PathBuf> {
        validate_name(name)?;
        Ok(self.save_dir.join(format!("{}{}", name, SAVE_FILE_SUFFIX)))
    }

    /// Writes the record to its save file, creating the directory if needed.
    /// Returns the path written.
    pub fn save_character(&self, record: &CharacterRecord) -> GameResult<PathBuf> {
        let contents = encode(record)?;
        let path = self.save_path(&record.name)?;

        fs::create_dir_all(&self.save_dir)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(contents.as_bytes())?;
        file.flush()?;

        info!("saved {} to {}", record.name, path.display());
        Ok(path)
    }

    pub fn load_character(&self, name: &str) -> GameResult<CharacterRecord> {
        let path = self.save_path(name)?;
        if !path.exists() {
            return Err(GameError::CharacterNotFound(name.to_string()));
        }

        let contents = fs::read_to_string(&path).map_err(|e| GameError::SaveFileCorrupted {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        // Every line is newline-terminated, so anything else was cut short mid-write
        if contents.is_empty() || !contents.ends_with('\n') {
            return Err(GameError::SaveFileCorrupted {
                path,
                reason: "file is truncated".to_string(),
            });
        }

        let record = decode(&contents)?;
        if record.name != name {
            return Err(GameError::InvalidSaveData(format!(
                "file for {} holds character {}",
                name, record.name
            )));
        }

        debug!("loaded {} from {}", name, path.display());
        Ok(record)
    }

    /// Names of all saved characters, sorted. Empty if the directory is missing.
    pub fn list_characters(&self) -> GameResult<Vec<String>> {
        if !self.save_dir.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.save_dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }

            let filename = entry.file_name();
            let name = filename
                .to_str()
                .and_then(|filename| filename.strip_suffix(SAVE_FILE_SUFFIX));
            if let Some(name) = name.filter(|name| !name.is_empty()) {
                names.push(name.to_string());
            }
        }

        names.sort();
        debug!("found {} saved character(s)", names.len());
        Ok(names)
    }

    pub fn delete_character(&self, name: &str) -> GameResult<()> {
        let path = self.save_path(name)?;
        if !path.exists() {
            return Err(GameError::CharacterNotFound(name.to_string()));
        }

        fs::remove_file(&path)?;
        info!("deleted {}", path.display());
        Ok(())
    }

    pub fn character_exists(&self, name: &str) -> bool {
        self.save_path(name)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}
