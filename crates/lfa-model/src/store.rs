//! Document store contract
//!
//! The engine never reads or writes a store; persistence belongs to the
//! hosting wizard. This module fixes the contract the host implements:
//! loading yields the empty document when nothing is stored, saving
//! replaces the single stored document wholesale.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::document::Document;

/// Opaque store holding at most one document
pub trait DocumentStore {
    /// Load the stored document, or [`Document::new`] if none is stored
    ///
    /// # Errors
    /// Returns [`StoreError`] if the backing medium is unreadable or the
    /// stored bytes do not deserialize.
    fn load(&self) -> Result<Document, StoreError>;

    /// Replace the stored document
    ///
    /// # Errors
    /// Returns [`StoreError`] if the document cannot be written.
    fn save(&self, document: &Document) -> Result<(), StoreError>;
}

/// In-memory store for hosts and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<Document>>,
}

impl MemoryStore {
    /// Create an empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> Result<Document, StoreError> {
        let slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.clone().unwrap_or_default())
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let mut slot = self.slot.lock().map_err(|_| StoreError::Poisoned)?;
        *slot = Some(document.clone());
        Ok(())
    }
}

/// Store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store at the given file path
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Document, StoreError> {
        if !self.path.exists() {
            return Ok(Document::new());
        }
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn save(&self, document: &Document) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Store failures
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing medium could not be read or written
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored bytes are not a valid document
    #[error("stored document is invalid: {0}")]
    Invalid(#[from] serde_json::Error),

    /// In-memory store lock was poisoned
    #[error("store lock poisoned")]
    Poisoned,
}
