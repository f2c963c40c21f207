//! Init command handler.

use crate::commands::Out;
use crate::{Config, Result, Store};
use anyhow::Context;
use std::path::Path;

/// Creates the data directory and its contents:
/// - Creates an initial `config.json` file with default settings
/// - Creates the `.backups` subdirectory
/// - Creates an empty expense store, unless one already exists
///
/// Running `init` on an already-initialized home refreshes the directory
/// layout but never touches an existing store.
///
/// # Errors
/// - Returns an error if any file operations fail.
pub async fn init(home: &Path) -> Result<Out<()>> {
    let config = Config::create(home)
        .await
        .context("Unable to create the data directory and config")?;

    if !config.store_path().is_file() {
        let store = Store::new(&config);
        store.save(&[]).await?;
    }

    Ok(format!(
        "Initialized the farelog directory at '{}'",
        config.root().display()
    )
    .into())
}
