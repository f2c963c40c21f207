//! List command handler.

use crate::aggregate::{summarize, Summary};
use crate::commands::Out;
use crate::model::format_total;
use crate::{Config, Result, Store};
use chrono::Local;
use std::fmt::Write;

/// Shows every expense grouped by day, most recent first, with the running
/// total.
///
/// The view is recomputed from the store on every call; nothing derived is
/// carried between invocations.
pub async fn list(config: Config) -> Result<Out<Summary>> {
    let store = Store::new(&config);
    let records = store.load().await?;
    let summary = summarize(&records, Local::now());
    let message = render(&summary, config.currency());
    Ok(Out::new(message, summary))
}

/// Renders the day-grouped sections and the total as display text.
fn render(summary: &Summary, currency: &str) -> String {
    if summary.is_empty() {
        return "No trips recorded yet. Record one with 'farelog add'.".to_string();
    }

    let mut text = String::new();
    for group in summary.groups() {
        let _ = writeln!(text, "{}", group.label());
        for expense in group.entries() {
            let time = expense
                .timestamp()
                .map(|ts| ts.with_timezone(&Local).format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            let _ = writeln!(
                text,
                "  {time}  {:<24} -{:<10} {}",
                expense.title(),
                expense.amount(),
                expense.id()
            );
        }
    }
    let _ = write!(text, "Total: {}", format_total(summary.total(), currency));
    text
}
