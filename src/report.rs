//! Human-readable Markdown rendering of a day summary.
//!
//! Pure formatting, no side effects. The relay logs the rendered report;
//! the snapshot itself stays JSON.

use crate::summary::{DailySummary, UsageItem};

/// Render a Markdown report for the day, or `None` when no day was tracked.
///
/// The document has a dated title, a `Total:` line, and one bulleted
/// section per dimension (projects, languages, editors, categories).
pub fn daily_report(date: &str, days: &[DailySummary]) -> Option<String> {
    let day = days.first()?;

    let mut doc = format!("## WakaTime Daily Report ({date})\n");
    doc.push_str(&format!("Total: {}\n", day.grand_total.text));
    push_section(&mut doc, "Projects", &day.projects);
    push_section(&mut doc, "Languages", &day.languages);
    push_section(&mut doc, "Editors", &day.editors);
    push_section(&mut doc, "Categories", &day.categories);
    Some(doc)
}

fn push_section(doc: &mut String, title: &str, items: &[UsageItem]) {
    doc.push_str(&format!("\n#### {title}\n"));
    for item in items {
        doc.push_str(&format!("* {}: {}\n", item.name, item.text));
    }
}
