//! Durable requirement numbering.
//!
//! Maps the identifier strings found in a source document to small stable
//! integers. Once a raw identifier has been assigned a number, that number
//! never changes for the lifetime of the store file, no matter how the
//! document is edited, reordered, or partially deleted around it.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk `raw identifier -> stable integer` mapping, stored as a single
/// JSON object. Single-process, single-writer; there is no locking.
pub struct IdentifierStore {
    path: PathBuf,
    entries: HashMap<String, u64>,
    max_id: u64,
}

impl IdentifierStore {
    /// Open the store at `path`, creating it on first write if absent.
    ///
    /// An unreadable or corrupt store file is fatal: numbering integrity
    /// cannot be guaranteed once the store is in an unknown state.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries: HashMap<String, u64> = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read identifier store {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("corrupt identifier store {}", path.display()))?
        } else {
            HashMap::new()
        };

        // The counter seeds at 1 for an empty store, so the first identifier
        // ever issued is 2. Store files in the wild are numbered from 2;
        // changing the seed would fork the numbering.
        let max_id = entries.values().copied().max().unwrap_or(1);

        Ok(Self {
            path,
            entries,
            max_id,
        })
    }

    /// Return the stable integer for `raw_id`, allocating the next one if
    /// this identifier has never been seen. New allocations are written
    /// through to disk before they are returned.
    pub fn resolve(&mut self, raw_id: &str) -> Result<u64> {
        if let Some(&id) = self.entries.get(raw_id) {
            return Ok(id);
        }

        let id = self.max_id + 1;
        self.entries.insert(raw_id.to_string(), id);
        self.max_id = id;
        self.save()?;
        Ok(id)
    }

    /// Flush and release the store. Taking `self` by value makes resolving
    /// against a closed store a compile error.
    pub fn close(self) -> Result<()> {
        self.save()
    }

    fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.entries)
            .context("failed to serialize identifier store")?;
        fs::write(&self.path, content)
            .with_context(|| format!("failed to write identifier store {}", self.path.display()))
    }
}
