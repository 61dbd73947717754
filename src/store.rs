use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hamekomi_core::snapshot::{apply_save_data, build_save_data, SaveData};
use hamekomi_core::Board;

pub const SAVE_FILE_NAME: &str = "puzzle_save.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("save file io failed: {0}")]
    Io(#[from] io::Error),
    #[error("save file decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Single-slot snapshot store: one fixed filename under a host-supplied
/// directory, fully overwritten on every save. Nothing here is fatal to the
/// session; every failure is logged and the in-memory state stays
/// authoritative.
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(SAVE_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Informational only; the load decides again on its own.
    pub fn initialize(&self) {
        log::info!("save file path: {}", self.path.display());
        if self.exists() {
            log::info!("save file found");
        } else {
            log::info!("no save file, starting fresh");
        }
    }

    /// Persists the current piece positions and placement flags. No-op once
    /// the puzzle is solved or when there is nothing to save. Write failures
    /// are logged and swallowed.
    pub fn save(&self, board: &Board) {
        if board.is_solved() || board.is_empty() {
            return;
        }
        let data = build_save_data(board);
        if let Err(err) = self.write_snapshot(&data) {
            log::warn!("save failed, progress kept in memory only: {err}");
        } else {
            log::debug!("saved {} pieces ({} placed)", board.len(), data.placed_count());
        }
    }

    fn write_snapshot(&self, data: &SaveData) -> Result<(), StoreError> {
        let json = serde_json::to_string(data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Restores a prior session into the board, if a snapshot exists.
    /// Returns `true` when a snapshot was applied. A missing file is benign;
    /// a malformed one is logged and skipped.
    pub fn load(&self, board: &mut Board) -> bool {
        if !self.exists() {
            log::info!("no save file to load");
            return false;
        }
        match self.read_snapshot() {
            Ok(data) => {
                if data.placed_positions.len() != board.len() {
                    log::warn!(
                        "save file holds {} pieces but board has {}, restoring overlap only",
                        data.placed_positions.len(),
                        board.len()
                    );
                }
                apply_save_data(board, &data);
                log::info!("game loaded, {} pieces placed", data.placed_count());
                true
            }
            Err(err) => {
                log::warn!("ignoring unreadable save file: {err}");
                false
            }
        }
    }

    fn read_snapshot(&self) -> Result<SaveData, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Reads the snapshot without touching a board; used by admin tooling.
    pub fn peek(&self) -> Option<SaveData> {
        if !self.exists() {
            return None;
        }
        match self.read_snapshot() {
            Ok(data) => Some(data),
            Err(err) => {
                log::warn!("ignoring unreadable save file: {err}");
                None
            }
        }
    }

    /// Removes the snapshot so a finished puzzle does not reload solved.
    pub fn delete(&self) {
        if !self.exists() {
            return;
        }
        if let Err(err) = fs::remove_file(&self.path) {
            log::warn!("failed to delete save file: {err}");
        } else {
            log::info!("save file deleted");
        }
    }
}
