//! Key-value storage the cart is saved to between visits.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Key the cart is saved under.
pub const CART_STORAGE_KEY: &str = "heladeria-cart";

#[derive(Debug, Error)]
pub enum CartStoreError {
    #[error("cart storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cart could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

/// String values under string keys, in the manner of browser local storage.
pub trait CartStore {
    fn load(&self, key: &str) -> Result<Option<String>, CartStoreError>;

    fn save(&mut self, key: &str, value: String) -> Result<(), CartStoreError>;
}

/// Store that lives as long as the value does.
#[derive(Debug, Default, Clone)]
pub struct MemoryCartStore {
    entries: HashMap<String, String>,
}

impl MemoryCartStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStore for MemoryCartStore {
    fn load(&self, key: &str) -> Result<Option<String>, CartStoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: String) -> Result<(), CartStoreError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store keeping each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileCartStore {
    dir: PathBuf,
}

impl JsonFileCartStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CartStore for JsonFileCartStore {
    fn load(&self, key: &str) -> Result<Option<String>, CartStoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, key: &str, value: String) -> Result<(), CartStoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
