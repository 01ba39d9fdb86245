use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the engine persists across sessions: the user allow-list and
/// the reported false positives. Both are plain domain strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(default)]
    pub trusted_domains: Vec<String>,
    #[serde(default)]
    pub false_positives: Vec<String>,
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "store I/O error: {}", e),
            StoreError::Format(e) => write!(f, "store format error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Format(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Format(e)
    }
}

/// Key-value persistence seam. The engine only ever loads the whole state
/// at startup and writes it back after a mutation, so the surface is two
/// calls. Failures are surfaced to the caller, who logs and carries on
/// with in-memory state.
pub trait StoreBackend {
    fn load(&self) -> Result<StoredState, StoreError>;
    fn save(&mut self, state: &StoredState) -> Result<(), StoreError>;
}

/// JSON file store. A missing file is an empty state, not an error.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl StoreBackend for JsonFileStore {
    fn load(&self) -> Result<StoredState, StoreError> {
        if !self.path.exists() {
            return Ok(StoredState::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&mut self, state: &StoredState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Session-only store for tests and for running without a trust file.
#[derive(Default)]
pub struct MemoryStore {
    state: StoredState,
    fail_saves: bool,
}

impl MemoryStore {
    /// Store whose writes always fail, for exercising the degraded path.
    pub fn failing() -> Self {
        Self {
            state: StoredState::default(),
            fail_saves: true,
        }
    }
}

impl StoreBackend for MemoryStore {
    fn load(&self) -> Result<StoredState, StoreError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &StoredState) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated store failure",
            )));
        }
        self.state = state.clone();
        Ok(())
    }
}
