#[cfg(test)]
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, warn};

/// Well-known key the theme preference lives under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("prefs file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize prefs: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Durable, synchronous, origin-scoped key-value store. Reads that fail for
/// any reason report the key as absent; only writes surface errors, and
/// callers are expected to treat those as non-fatal.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// TOML file-backed store, one flat table of string values.
///
/// Unreadable or unparsable files are treated as empty; a corrupt prefs file
/// must never break the interaction (it gets rewritten on the next toggle).
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load_table(&self) -> toml::Table {
        let Ok(s) = fs::read_to_string(&self.path) else {
            debug!(path = %self.path.display(), "prefs file absent");
            return toml::Table::new();
        };
        match toml::from_str::<toml::Table>(&s) {
            Ok(table) => table,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "parse prefs failed; treating as empty");
                toml::Table::new()
            }
        }
    }
}

impl PreferenceStore for FileStore {
    fn read(&self, key: &str) -> Option<String> {
        self.load_table()
            .get(key)
            .and_then(|v| v.as_str())
            .map(str::to_string)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut table = self.load_table();
        table.insert(key.to_string(), toml::Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string(&table)?)?;
        Ok(())
    }
}

/// In-process store backing the controller and UI-state tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a single key, for simulating pre-existing state.
    pub fn with(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.values.insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
