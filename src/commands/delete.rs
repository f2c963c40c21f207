//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::{Config, Result, Store};

/// Deletes one or more expenses by id.
///
/// An id with no matching record is skipped, not an error, so re-running the
/// same delete is a no-op. The whole collection is rewritten without the
/// removed records; nothing is rewritten when no id matched.
///
/// # Returns
///
/// On success, returns an `Out` containing:
/// - A message saying how many expenses were deleted.
/// - The ids that were actually removed.
pub async fn delete(config: Config, args: DeleteArgs) -> Result<Out<Vec<String>>> {
    let store = Store::new(&config);
    let records = store.load().await?;

    let (removed, kept): (Vec<_>, Vec<_>) = records
        .into_iter()
        .partition(|e| args.ids().iter().any(|id| id == e.id()));

    if !removed.is_empty() {
        store.save(&kept).await?;
    }

    let deleted: Vec<String> = removed.iter().map(|e| e.id().to_string()).collect();
    let count = deleted.len();
    let message = format!(
        "Deleted {} expense{}",
        count,
        if count == 1 { "" } else { "s" }
    );
    Ok(Out::new(message, deleted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_delete_success() {
        let env = TestEnv::new().await;
        env.seed(&[
            TestEnv::expense("exp-1", "Songthaew", "20", "2023-10-25T08:00:00+07:00"),
            TestEnv::expense("exp-2", "Grab", "120", "2023-10-25T20:00:00+07:00"),
        ])
        .await;

        let result = delete(env.config(), DeleteArgs::new(vec!["exp-1"])).await;

        assert!(result.is_ok());
        let out = result.unwrap();
        assert!(out.message().contains("Deleted 1 expense"));
        assert_eq!(out.structure().unwrap(), &vec!["exp-1".to_string()]);

        let records = env.store().load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "exp-2");
    }

    #[tokio::test]
    async fn test_delete_multiple() {
        let env = TestEnv::new().await;
        env.seed(&[
            TestEnv::expense("exp-1", "Songthaew", "20", "2023-10-25T08:00:00+07:00"),
            TestEnv::expense("exp-2", "Grab", "120", "2023-10-25T20:00:00+07:00"),
            TestEnv::expense("exp-3", "Moto", "30", "2023-10-24T10:00:00+07:00"),
        ])
        .await;

        let out = delete(env.config(), DeleteArgs::new(vec!["exp-1", "exp-3"]))
            .await
            .unwrap();

        assert!(out.message().contains("Deleted 2 expenses"));
        let records = env.store().load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "exp-2");
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_a_no_op() {
        let env = TestEnv::new().await;
        env.seed(&[TestEnv::expense(
            "exp-1",
            "Songthaew",
            "20",
            "2023-10-25T08:00:00+07:00",
        )])
        .await;

        let out = delete(env.config(), DeleteArgs::new(vec!["exp-404"]))
            .await
            .unwrap();

        assert!(out.message().contains("Deleted 0 expenses"));
        assert!(out.structure().unwrap().is_empty());
        assert_eq!(env.store().load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let env = TestEnv::new().await;
        env.seed(&[
            TestEnv::expense("exp-1", "Songthaew", "20", "2023-10-25T08:00:00+07:00"),
            TestEnv::expense("exp-2", "Grab", "120", "2023-10-25T20:00:00+07:00"),
        ])
        .await;

        let first = delete(env.config(), DeleteArgs::new(vec!["exp-1"]))
            .await
            .unwrap();
        let second = delete(env.config(), DeleteArgs::new(vec!["exp-1"]))
            .await
            .unwrap();

        assert_eq!(first.structure().unwrap().len(), 1);
        assert!(second.structure().unwrap().is_empty());
        let records = env.store().load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id(), "exp-2");
    }
}
