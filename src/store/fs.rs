use super::StateStore;
use crate::error::{FacturierError, Result};
use crate::model::AppState;
use std::fs;
use std::path::PathBuf;

const DB_FILE: &str = "db.json";

/// File-backed store: the whole aggregate lives in one JSON file under
/// `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// OS-appropriate data directory for the application, via the
    /// `directories` crate. `None` when the platform exposes no home.
    pub fn default_root() -> Option<PathBuf> {
        directories::ProjectDirs::from("ma", "electrogim", "facturier")
            .map(|dirs| dirs.data_dir().to_path_buf())
    }

    pub fn db_path(&self) -> PathBuf {
        self.root.join(DB_FILE)
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }
}

impl StateStore for FileStore {
    fn load(&mut self) -> Result<AppState> {
        let path = self.db_path();
        if !path.exists() {
            let state = AppState::default();
            self.save(&state)?;
            return Ok(state);
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(FacturierError::CorruptState)
    }

    fn save(&mut self, state: &AppState) -> Result<()> {
        self.ensure_root()?;
        let raw = serde_json::to_string_pretty(state)?;
        fs::write(self.db_path(), raw)?;
        Ok(())
    }
}
