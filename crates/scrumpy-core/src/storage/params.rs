//! Per-board sprint parameters.
//!
//! One JSON object mapping board identifiers to the parameters last used for
//! that board, stored at `~/.config/scrumpy/params.json`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::data_dir;
use crate::error::{Result, StoreError};
use crate::sprint::UserInput;

#[derive(Debug, Clone)]
pub struct ParamStore {
    path: PathBuf,
    entries: BTreeMap<String, UserInput>,
}

impl ParamStore {
    /// Open the store in the data directory.
    pub fn open() -> Result<Self> {
        Self::open_at(data_dir()?.join("params.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), boards = entries.len(), "opened parameter store");
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, board_id: &str) -> Option<&UserInput> {
        self.entries.get(board_id)
    }

    /// Stored parameters for the board, or defaults starting yesterday.
    pub fn get_or_default(&self, board_id: &str, today: NaiveDate, default_duration: u32) -> UserInput {
        self.get(board_id)
            .cloned()
            .unwrap_or_else(|| UserInput::defaults(today, default_duration))
    }

    /// Store the parameters for a board and save.
    pub fn set(&mut self, board_id: &str, input: UserInput) -> Result<()> {
        self.entries.insert(board_id.to_string(), input);
        self.save()
    }

    /// Forget a board. Returns whether it was stored.
    pub fn remove(&mut self, board_id: &str) -> Result<bool> {
        let removed = self.entries.remove(board_id).is_some();
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn board_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Write the store. The new content goes to a sibling temp file that is
    /// then renamed over the store, so readers see either the old or the new
    /// file in full.
    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)?;
        let staging = self.staging_path();
        std::fs::write(&staging, content)
            .and_then(|()| std::fs::rename(&staging, &self.path))
            .map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
