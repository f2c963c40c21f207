//! Export command handler.

use crate::aggregate::sorted_by_recency;
use crate::args::ExportArgs;
use crate::commands::Out;
use crate::{utils, Config, Result, Store};
use anyhow::Context;

/// Exports the full collection as CSV, most recent first.
///
/// The column headers match the store's wire format (`id`, `title`, `amount`,
/// `imageUrl`, `date`, `type`).
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message naming the output file.
/// - The number of exported records.
pub async fn export(config: Config, args: ExportArgs) -> Result<Out<usize>> {
    let store = Store::new(&config);
    let records = store.load().await?;
    let sorted = sorted_by_recency(&records);

    let mut writer = csv::Writer::from_writer(Vec::new());
    for expense in &sorted {
        writer
            .serialize(expense)
            .context("Failed to serialize an expense to CSV")?;
    }
    let data = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to finish writing CSV: {e}"))?;

    utils::write(args.output(), data).await?;

    let count = sorted.len();
    let message = format!(
        "Exported {} expense{} to '{}'",
        count,
        if count == 1 { "" } else { "s" },
        args.output().display()
    );
    Ok(Out::new(message, count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_export_writes_csv_most_recent_first() {
        let env = TestEnv::new().await;
        env.seed(&[
            TestEnv::expense("exp-old", "Songthaew", "20", "2023-10-23T08:00:00+07:00"),
            TestEnv::expense("exp-new", "Grab", "120", "2023-10-25T20:00:00+07:00"),
        ])
        .await;
        let output = env.config().root().join("export.csv");

        let out = export(env.config(), ExportArgs::new(&output)).await.unwrap();

        assert_eq!(out.structure().unwrap(), &2);
        assert!(out.message().contains("Exported 2 expenses"));

        let content = tokio::fs::read_to_string(&output).await.unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next().unwrap(), "id,title,amount,imageUrl,date,type");
        assert!(lines.next().unwrap().starts_with("exp-new,"));
        assert!(lines.next().unwrap().starts_with("exp-old,"));
    }

    #[tokio::test]
    async fn test_export_empty_store() {
        let env = TestEnv::new().await;
        let output = env.config().root().join("export.csv");

        let out = export(env.config(), ExportArgs::new(&output)).await.unwrap();

        assert_eq!(out.structure().unwrap(), &0);
        assert!(output.is_file());
    }
}
