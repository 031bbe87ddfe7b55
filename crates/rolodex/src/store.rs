//! Persistent storage for the customer collection.
//!
//! The store holds the whole collection as a single JSON blob (an array of
//! flat customer objects) at a filesystem path. There is no incremental
//! persistence: every mutation rewrites the full blob, and the collection
//! is loaded once per session.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::customer::Customer;
use crate::error::{Error, Result};

/// JSON-file-backed store for the customer collection.
#[derive(Debug)]
pub struct JsonStore {
    /// Path to the JSON blob.
    path: PathBuf,
}

impl JsonStore {
    /// Open a store at the given path, creating parent directories as
    /// needed. The blob itself is only created on the first save.
    ///
    /// # Errors
    ///
    /// Returns an error if a missing parent directory cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Using customer store at {}", path.display());
        Ok(Self { path })
    }

    /// Get the path to the store file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full customer collection.
    ///
    /// A missing file yields an empty collection. An unreadable or corrupt
    /// blob is also treated as empty: the problem is logged but never
    /// surfaced as an error, matching the registry's documented
    /// load-or-start-fresh behavior.
    #[must_use]
    pub fn load(&self) -> Vec<Customer> {
        if !self.path.exists() {
            debug!("No customer store at {}, starting empty", self.path.display());
            return Vec::new();
        }

        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    "Failed to read customer store at {}, starting empty: {e}",
                    self.path.display()
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(customers) => customers,
            Err(e) => {
                warn!(
                    "Corrupt customer store at {}, starting empty: {e}",
                    self.path.display()
                );
                Vec::new()
            }
        }
    }

    /// Persist the full customer collection, replacing any previous blob.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    /// The caller decides what to do with its in-memory state.
    pub fn save(&self, customers: &[Customer]) -> Result<()> {
        let blob = serde_json::to_string_pretty(customers)?;
        fs::write(&self.path, blob).map_err(|source| Error::StoreWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!("Persisted {} customer(s)", customers.len());
        Ok(())
    }
}
