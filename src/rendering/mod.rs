//! Terminal rendering of records.
//!
//! Rendering only reads records; the stored text is never altered.

use crate::models::Record;

/// Suffix appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Returns the first `limit` characters of `text`, plus `...` if cut.
///
/// Counts Unicode scalar values, so multi-byte text is never split.
#[must_use]
pub fn preview(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Renders one list entry: `[id] title` followed by an indented preview.
#[must_use]
pub fn render_entry(record: &Record, preview_length: usize) -> Vec<String> {
    vec![
        format!("[{}] {}", record.id, record.title),
        format!("    {}", single_line(&preview(&record.text, preview_length))),
    ]
}

/// Renders a list of entries separated by blank lines.
#[must_use]
pub fn render_list(records: &[&Record], preview_length: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len() * 3);
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.extend(render_entry(record, preview_length));
    }
    lines
}

/// Renders a record in full.
#[must_use]
pub fn render_full(record: &Record) -> Vec<String> {
    vec![
        format!("ID:    {}", record.id),
        format!("Title: {}", record.title),
        String::new(),
        record.text.clone(),
    ]
}

// Previews are a single terminal line.
fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
