//! Typed rendering of a transcription snapshot into display rows

use crate::client::TranscriptionSet;

/// Shown when the backend has not produced any transcriptions yet
pub const EMPTY_PLACEHOLDER: &str = "No transcriptions yet...";

/// A single display row: one transcribed chunk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub filename: String,
    pub text: String,
}

/// Rendered form of a transcription snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Empty snapshot, shown as the placeholder message
    Empty,
    /// One row per filename, in sorted-key order
    Rows(Vec<Row>),
}

impl Listing {
    pub fn rows(&self) -> &[Row] {
        match self {
            Listing::Empty => &[],
            Listing::Rows(rows) => rows,
        }
    }

    /// Flatten to line-oriented terminal text, one line per row
    pub fn to_text(&self) -> String {
        match self {
            Listing::Empty => EMPTY_PLACEHOLDER.to_string(),
            Listing::Rows(rows) => rows
                .iter()
                .map(|row| format!("{}: {}", row.filename, row.text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Render a snapshot into a listing.
///
/// Pure and deterministic: equal snapshots always produce equal listings, so
/// repeated polls of an unchanged snapshot re-render identical content.
pub fn render(snapshot: &TranscriptionSet) -> Listing {
    if snapshot.is_empty() {
        return Listing::Empty;
    }

    let rows = snapshot
        .iter()
        .map(|(filename, text)| Row {
            filename: escape(filename),
            text: escape(text),
        })
        .collect();

    Listing::Rows(rows)
}

/// Escape control characters so one snapshot key is always exactly one row.
///
/// Transcript text can contain newlines; left unescaped they would break the
/// one-line-per-file layout of the listing.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:04x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}
