//! Backup management for the expense store.
//!
//! Before each rewrite of the store the prior contents are snapshotted to the
//! backups directory and old snapshots are rotated away.

use crate::{utils, Config, Result};
use anyhow::Context;
use chrono::Local;
use std::path::PathBuf;

/// Prefix for store snapshot files.
pub const STORE: &str = "expenses";

/// Manages backup file creation and rotation.
///
/// The `Backup` struct is immutable and owns copies of the paths and settings
/// it needs. Create a new instance via `Backup::new()`.
#[derive(Debug, Clone)]
pub struct Backup {
    backups_dir: PathBuf,
    backup_copies: u32,
}

impl Backup {
    /// Creates a new `Backup` instance from a `Config`.
    pub fn new(config: &Config) -> Self {
        Self {
            backups_dir: config.backups().to_path_buf(),
            backup_copies: config.backup_copies(),
        }
    }

    /// Saves the given store contents as a snapshot file.
    ///
    /// The filename format is `expenses.YYYY-MM-DD-NNN.json` where NNN is a
    /// sequence number. Automatically rotates old snapshots, keeping only
    /// `backup_copies` files.
    ///
    /// Returns the path to the created snapshot.
    pub async fn snapshot(&self, contents: &str) -> Result<PathBuf> {
        let date = today();
        let seq = self.next_sequence_number(&date).await?;
        let filename = format!("{STORE}.{date}-{seq:03}.json");
        let path = self.backups_dir.join(&filename);

        utils::write(&path, contents).await?;

        self.rotate().await?;

        Ok(path)
    }

    /// Scans the backups directory for existing snapshots with the given date
    /// and returns the next sequence number.
    async fn next_sequence_number(&self, date: &str) -> Result<u32> {
        let mut max_seq: u32 = 0;

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();

            if let Some(seq) = parse_sequence_number(&name, date) {
                max_seq = max_seq.max(seq);
            }
        }

        Ok(max_seq + 1)
    }

    /// Rotates old snapshot files, keeping only `backup_copies` files.
    async fn rotate(&self) -> Result<()> {
        // Collect all snapshot files
        let mut files: Vec<(PathBuf, String)> = Vec::new();

        let mut dir = utils::read_dir(&self.backups_dir).await?;
        while let Some(entry) = dir
            .next_entry()
            .await
            .context("Failed to read directory entry")?
        {
            let file_name = entry.file_name();
            let name = file_name.to_string_lossy().to_string();

            if is_snapshot_file(&name) {
                files.push((entry.path(), name));
            }
        }

        // Sort by filename (which sorts by date and sequence number due to format)
        files.sort_by(|a, b| a.1.cmp(&b.1));

        // Delete oldest files if we have more than backup_copies
        let to_delete = files.len().saturating_sub(self.backup_copies as usize);
        for (path, _) in files.into_iter().take(to_delete) {
            utils::remove(&path).await?;
        }

        Ok(())
    }
}

/// Returns today's date in YYYY-MM-DD format.
fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Parses the sequence number from a snapshot filename.
/// Returns None if the filename doesn't match the expected pattern.
fn parse_sequence_number(filename: &str, date: &str) -> Option<u32> {
    // Pattern: expenses.{date}-{NNN}.json
    let expected_start = format!("{STORE}.{date}-");
    let remainder = filename.strip_prefix(&expected_start)?;
    let seq_str = remainder.strip_suffix(".json")?;
    seq_str.parse().ok()
}

/// Checks if a filename is a store snapshot.
fn is_snapshot_file(filename: &str) -> bool {
    filename.starts_with(&format!("{STORE}.")) && filename.ends_with(".json")
}
