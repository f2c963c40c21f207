//! Persistence for the expense collection.
//!
//! The entire collection lives in one JSON file, `$FARELOG_HOME/expenses.json`,
//! holding a single array of expense records. There are no partial updates:
//! every save rewrites the whole file, and the last writer wins.

use crate::backup::Backup;
use crate::model::Expense;
use crate::{utils, Config, Result};
use anyhow::Context;
use std::path::PathBuf;
use tracing::debug;

/// Reads and writes the expense collection as one blob.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    backup: Backup,
}

impl Store {
    /// Creates a new `Store` for the collection at the config's store path.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.store_path().to_path_buf(),
            backup: Backup::new(config),
        }
    }

    /// Loads the persisted collection.
    ///
    /// A missing store file is not an error; the first run starts empty. A
    /// store file that exists but fails to parse IS an error: callers get a
    /// distinguishable failure rather than silently losing the collection.
    pub async fn load(&self) -> Result<Vec<Expense>> {
        if !self.path.is_file() {
            debug!("No store file at '{}', starting empty", self.path.display());
            return Ok(Vec::new());
        }
        utils::deserialize(&self.path)
            .await
            .with_context(|| format!("The expense store at '{}' is corrupt", self.path.display()))
    }

    /// Serializes and persists the entire collection, replacing any prior
    /// value.
    ///
    /// The prior contents are snapshotted to the backups directory first, and
    /// the new contents are written to a temporary sibling and renamed into
    /// place so an interrupted write cannot clobber the previous store.
    pub async fn save(&self, records: &[Expense]) -> Result<()> {
        if self.path.is_file() {
            let prior = utils::read(&self.path).await?;
            let snapshot = self.backup.snapshot(&prior).await?;
            debug!("Backed up prior store to '{}'", snapshot.display());
        }

        let json = serde_json::to_string_pretty(records)
            .context("Failed to serialize the expense collection")?;

        let tmp = self.path.with_extension("json.tmp");
        utils::write(&tmp, json).await?;
        utils::rename(&tmp, &self.path).await
    }
}
