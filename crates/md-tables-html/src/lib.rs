//! HTML rendering for chat message segments.
//!
//! Turns the limited markdown that [`md_tables::segment`] leaves in
//! text segments (headings, bold, italic, horizontal rules) into HTML,
//! and table segments into `<table>` markup. Every piece of literal
//! text is escaped on the way out; only markup generated here reaches
//! the output unescaped, so model-controlled content cannot inject
//! tags or script into the page.

mod escape;
mod table;
mod text;

pub use escape::escape_html;
pub use table::render_table;
pub use text::render_text;

use md_tables::Segment;

/// Render one segment as an HTML fragment.
pub fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text(content) => render_text(content),
        Segment::Table(rows) => render_table(rows),
    }
}
