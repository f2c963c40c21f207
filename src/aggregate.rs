//! Day-grouped aggregation of the expense collection.
//!
//! This is a pure function from `(collection, now)` to a running total and an
//! ordered sequence of date-labeled groups, so every `list` render recomputes
//! from the store instead of carrying derived state between invocations.

use crate::model::Expense;
use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// The label a group of same-day expenses is displayed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupLabel {
    Today,
    Yesterday,
    /// Any other valid calendar day, rendered as e.g. `25 Oct 2023`.
    Day(NaiveDate),
    /// Records whose stored date fails to parse.
    Unknown,
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupLabel::Today => write!(f, "Today"),
            GroupLabel::Yesterday => write!(f, "Yesterday"),
            GroupLabel::Day(day) => write!(f, "{}", day.format("%-d %b %Y")),
            GroupLabel::Unknown => write!(f, "Unknown date"),
        }
    }
}

impl Serialize for GroupLabel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// A day's worth of expenses, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct Group {
    label: GroupLabel,
    entries: Vec<Expense>,
}

impl Group {
    pub fn label(&self) -> GroupLabel {
        self.label
    }

    pub fn entries(&self) -> &[Expense] {
        &self.entries
    }
}

/// The aggregate view of the whole collection: a running total and the
/// expenses bucketed into date-labeled groups.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    total: Decimal,
    groups: Vec<Group>,
}

impl Summary {
    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Computes the running total and the date-bucketed groups for a collection.
///
/// The collection is sorted by date descending; records whose date fails to
/// parse sort after every valid record and group under "Unknown date", the
/// same rule in the sort and in the labeling. Bucket order is first-seen
/// order over the sorted collection, so "Today" always leads when present.
/// Unparsable amounts contribute zero to the total.
pub fn summarize(records: &[Expense], now: DateTime<Local>) -> Summary {
    let sorted = sorted_by_recency(records);

    let total = records.iter().map(|e| e.amount().value()).sum();

    let today = now.date_naive();
    let yesterday = today.pred_opt();

    let mut groups: Vec<Group> = Vec::new();
    for expense in sorted {
        let label = match expense.timestamp() {
            Some(ts) => {
                let day = ts.with_timezone(&now.timezone()).date_naive();
                if day == today {
                    GroupLabel::Today
                } else if Some(day) == yesterday {
                    GroupLabel::Yesterday
                } else {
                    GroupLabel::Day(day)
                }
            }
            None => GroupLabel::Unknown,
        };

        match groups.iter_mut().find(|g| g.label == label) {
            Some(group) => group.entries.push(expense),
            None => groups.push(Group {
                label,
                entries: vec![expense],
            }),
        }
    }

    Summary { total, groups }
}

/// Returns a copy of the collection sorted by date descending. Records with
/// an unparsable date sort last, keeping their relative insertion order.
pub fn sorted_by_recency(records: &[Expense]) -> Vec<Expense> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match (a.timestamp(), b.timestamp()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}
