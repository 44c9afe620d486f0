//! JSON state file tracking which components are installed.
//!
//! Lives inside the plugin root as `.plugctl-state.json`. Writes go through
//! a sibling lock file (fs2 exclusive lock) and an atomic tmp+rename, so a
//! crashed run never leaves a half-written state behind.

use crate::core::types::ComponentId;
use crate::error::{PlugctlError, Result};
use chrono::{DateTime, Utc};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

pub const STATE_FILE: &str = ".plugctl-state.json";
const CURRENT_STATE_SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct State {
    pub schema_version: u8,
    #[serde(default)]
    pub components: HashMap<String, ComponentState>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_STATE_SCHEMA_VERSION,
            components: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentState {
    pub installed_at: DateTime<Utc>,
    pub version: Option<String>,
}

pub struct StateStore {
    path: PathBuf,
}

struct StateLock {
    _file: fs::File,
    path: PathBuf,
}

impl Drop for StateLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

impl StateStore {
    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(STATE_FILE),
        }
    }

    pub fn load(&self) -> Result<State> {
        if !self.path.exists() {
            return Ok(State::default());
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| PlugctlError::IoError {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Installed check for one component. An unreadable state file is
    /// reported, then treated as "not installed" so install flows can
    /// rewrite it; write paths surface the same corruption as a hard error.
    pub fn is_installed(&self, id: &ComponentId) -> bool {
        match self.load() {
            Ok(state) => state.components.contains_key(id.as_str()),
            Err(e) => {
                crate::ui::warning(&format!(
                    "Unreadable state file {}: {}",
                    self.path.display(),
                    e
                ));
                false
            }
        }
    }

    pub fn mark_installed(&self, id: &ComponentId, version: Option<String>) -> Result<()> {
        let _lock = self.acquire_lock()?;
        let mut state = self.load()?;
        state.components.insert(
            id.as_str().to_string(),
            ComponentState {
                installed_at: Utc::now(),
                version,
            },
        );
        self.save(&state)
    }

    pub fn mark_uninstalled(&self, id: &ComponentId) -> Result<()> {
        let _lock = self.acquire_lock()?;
        let mut state = self.load()?;
        state.components.remove(id.as_str());
        self.save(&state)
    }

    fn save(&self, state: &State) -> Result<()> {
        let dir = self.path.parent().ok_or_else(|| {
            PlugctlError::Other(format!(
                "Invalid state path (no parent directory): {}",
                self.path.display()
            ))
        })?;

        let content = serde_json::to_string_pretty(state)?;
        let tmp_path = dir.join(".plugctl-state.tmp");
        let mut tmp_file = fs::File::create(&tmp_path).map_err(|e| PlugctlError::IoError {
            path: tmp_path.clone(),
            source: e,
        })?;
        tmp_file.write_all(content.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path).map_err(|e| PlugctlError::IoError {
            path: self.path.clone(),
            source: e,
        })
    }

    fn acquire_lock(&self) -> Result<StateLock> {
        let lock_path = self.path.with_extension("lock");
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| PlugctlError::IoError {
                path: lock_path.clone(),
                source: e,
            })?;

        file.try_lock_exclusive().map_err(|_| {
            PlugctlError::LockError(format!(
                "Another plugctl process is running (lock file: {})",
                lock_path.display()
            ))
        })?;

        Ok(StateLock {
            _file: file,
            path: lock_path,
        })
    }
}
