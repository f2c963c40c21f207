//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{Amount, Expense, PLACEHOLDER_IMAGE};
use crate::utils::generate_entry_id;
use crate::{Config, Result, Store};
use anyhow::{bail, Context};
use chrono::{DateTime, Local};

/// Records a new expense at the front of the collection.
///
/// The category pre-fills the title and image the same way the quick-select
/// buttons in the entry form do; an explicit `--title` or `--image-url`
/// overrides the pre-fill. A unique id is generated with an `exp-` prefix and
/// returned on success.
///
/// # Arguments
///
/// - `config` - The application configuration.
/// - `args` - The expense data. An amount is always required; a title is
///   required unless the category provides one.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message describing the recorded expense.
/// - The generated expense id.
///
/// # Errors
///
/// - Returns a validation error if the title or amount would be empty. The
///   store is not touched in that case.
/// - Returns an error if `--date` is not a valid RFC 3339 timestamp.
/// - Returns an error if the store cannot be read or written.
pub async fn add(config: Config, args: AddArgs) -> Result<Out<String>> {
    let title = args
        .title()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| args.category().default_title().to_string());
    if title.trim().is_empty() {
        bail!("An expense needs a title. Pass --title or pick a known --category.");
    }

    let amount = Amount::new(args.amount().unwrap_or_default().trim());
    if amount.is_empty() {
        bail!("An expense needs an amount. Pass --amount.");
    }

    let date = match args.date() {
        Some(given) => {
            // Reject garbage at the door; the store keeps the text as given.
            let _: DateTime<chrono::FixedOffset> = DateTime::parse_from_rfc3339(given.trim())
                .with_context(|| {
                    format!("'{given}' is not a valid RFC 3339 timestamp, e.g. 2023-10-25T14:30:00+07:00")
                })?;
            given.trim().to_string()
        }
        None => Local::now().to_rfc3339(),
    };

    let image_url = args
        .image_url()
        .map(str::to_string)
        .or_else(|| args.category().default_image_url().map(str::to_string))
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    let expense = Expense {
        id: generate_entry_id(),
        title,
        amount,
        image_url,
        date,
        category: args.category().clone(),
    };

    let store = Store::new(&config);
    let mut records = store.load().await?;
    // Newest entry goes first
    records.insert(0, expense.clone());
    store.save(&records).await?;

    let message = format!(
        "Recorded '{}' for {} with ID: {}",
        expense.title(),
        expense.amount(),
        expense.id()
    );
    Ok(Out::new(message, expense.id().to_string()))
}
