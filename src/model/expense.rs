//! The persisted expense record.

use crate::model::{Amount, Category};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One logged trip.
///
/// The serialized form is the store's wire format: a JSON object with the
/// fields `id`, `title`, `amount`, `imageUrl`, `date` and `type`. All fields
/// default when absent so a partially-formed record still loads.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Expense {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) amount: Amount,
    pub(crate) image_url: String,
    /// RFC 3339 timestamp, kept as text so an unparsable value survives a
    /// load/save cycle instead of being destroyed.
    pub(crate) date: String,
    #[serde(rename = "type")]
    pub(crate) category: Category,
}

impl Expense {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Parses the stored date. `None` means the record carries a value that
    /// is not a valid RFC 3339 timestamp; such records sort last and land in
    /// the "Unknown date" group.
    pub fn timestamp(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.date.trim()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_field_names() {
        let expense = Expense {
            id: "exp-1".to_string(),
            title: "Songthaew".to_string(),
            amount: Amount::new("20"),
            image_url: "https://img.icons8.com/color/96/bus.png".to_string(),
            date: "2023-10-25T14:30:00.000Z".to_string(),
            category: Category::Songthaew,
        };
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "exp-1");
        assert_eq!(json["title"], "Songthaew");
        assert_eq!(json["amount"], "20");
        assert_eq!(json["imageUrl"], "https://img.icons8.com/color/96/bus.png");
        assert_eq!(json["date"], "2023-10-25T14:30:00.000Z");
        assert_eq!(json["type"], "songthaew");
    }

    #[test]
    fn test_partial_record_loads_with_defaults() {
        let json = r#"{"id": "exp-2", "title": "Ferry"}"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id(), "exp-2");
        assert_eq!(expense.title(), "Ferry");
        assert!(expense.amount().is_empty());
        assert_eq!(expense.category(), &Category::Other);
        assert!(expense.timestamp().is_none());
    }

    #[test]
    fn test_timestamp_parses_rfc3339() {
        let expense = Expense {
            date: "2023-10-25T14:30:00.000Z".to_string(),
            ..Default::default()
        };
        let ts = expense.timestamp().unwrap();
        assert_eq!(ts.to_rfc3339(), "2023-10-25T14:30:00+00:00");
    }

    #[test]
    fn test_timestamp_invalid_is_none() {
        let expense = Expense {
            date: "last tuesday".to_string(),
            ..Default::default()
        };
        assert!(expense.timestamp().is_none());
    }
}
