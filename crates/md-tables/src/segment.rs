//! Segment types - the stable output of a parse.

use serde::{Deserialize, Serialize};

/// One contiguous piece of a chat message, in source order.
///
/// Serializes to the `{"type": ..., "content": ...}` objects chat
/// frontends expect, with `type` either `"text"` or `"table"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "lowercase")]
pub enum Segment {
    /// Non-table prose, trimmed of leading and trailing blank lines.
    Text(String),

    /// Table rows. `rows[0]` is the header row, the rest are data
    /// rows. Rows are rectangular only by convention; nothing pads or
    /// truncates them.
    Table(Vec<Vec<String>>),
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text(content.into())
    }

    pub fn table(rows: Vec<Vec<String>>) -> Self {
        Segment::Table(rows)
    }

    pub fn is_table(&self) -> bool {
        matches!(self, Segment::Table(_))
    }
}
