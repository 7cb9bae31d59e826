//! Table segments to `<table>` markup.

use crate::escape::escape_html;

/// Render table rows as an HTML `<table>` fragment.
///
/// `rows[0]` becomes the header row, the rest the body, preserving row
/// and column order. Rows are emitted as-is; ragged rows stay ragged.
/// An empty row list renders to an empty string.
pub fn render_table(rows: &[Vec<String>]) -> String {
    let Some((headers, data)) = rows.split_first() else {
        return String::new();
    };

    let mut out = String::from("<table>\n<thead>\n<tr>");
    for header in headers {
        out.push_str("<th>");
        out.push_str(&escape_html(header));
        out.push_str("</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in data {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(&escape_html(cell));
            out.push_str("</td>");
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>");
    out
}
