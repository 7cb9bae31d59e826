//! Inline markdown to HTML for text segments.

use crate::escape::escape_html;

/// Heading prefixes checked longest first so `### ` wins over `## `.
const HEADING_PREFIXES: [(&str, &str); 3] = [("### ", "h3"), ("## ", "h2"), ("# ", "h1")];

/// Convert a text segment's markdown into an HTML fragment.
///
/// Handles exactly what chat prose needs: `#`/`##`/`###` headings,
/// `**bold**`, `*italic*`, and `---` horizontal rules. Each input line
/// maps to one output line; order and line breaks are preserved.
pub fn render_text(content: &str) -> String {
    content
        .split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    let trimmed = line.trim();

    for (prefix, tag) in HEADING_PREFIXES {
        if let Some(title) = trimmed.strip_prefix(prefix) {
            return format!("<{tag}>{}</{tag}>", render_emphasis(title));
        }
    }

    if trimmed == "---" {
        return "<hr />".to_string();
    }

    render_emphasis(line)
}

/// Replace `**bold**` and `*italic*` spans, escaping everything else.
///
/// Pairs match non-greedily left to right: at each `*` the scanner
/// first tries a `**...**` pair, then a `*...*` pair. Spans do not
/// nest; the inner text is emitted as escaped plain text.
fn render_emphasis(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(open) = rest.find('*') {
        let (before, marked) = rest.split_at(open);

        if let Some(inner) = marked.strip_prefix("**") {
            if let Some(close) = inner.find("**") {
                out.push_str(&escape_html(before));
                out.push_str("<strong>");
                out.push_str(&escape_html(&inner[..close]));
                out.push_str("</strong>");
                rest = &inner[close + 2..];
                continue;
            }
        }

        let inner = &marked[1..];
        if let Some(close) = inner.find('*') {
            out.push_str(&escape_html(before));
            out.push_str("<em>");
            out.push_str(&escape_html(&inner[..close]));
            out.push_str("</em>");
            rest = &inner[close + 1..];
            continue;
        }

        // Unpaired marker: emit it literally and keep scanning.
        out.push_str(&escape_html(before));
        out.push('*');
        rest = inner;
    }

    out.push_str(&escape_html(rest));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_heading_levels() {
        assert_eq!(render_text("# Big"), "<h1>Big</h1>");
        assert_eq!(render_text("## Medium"), "<h2>Medium</h2>");
        assert_eq!(render_text("### Small"), "<h3>Small</h3>");
    }

    #[test]
    fn test_heading_prefix_longest_match() {
        // "### x" must not be parsed as "# " heading with "## x" title.
        assert_eq!(render_text("### x"), "<h3>x</h3>");
    }

    #[test]
    fn test_heading_detected_after_indent() {
        assert_eq!(render_text("   ## Indented"), "<h2>Indented</h2>");
    }

    #[test]
    fn test_hash_without_space_is_not_heading() {
        assert_eq!(render_text("#hashtag"), "#hashtag");
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            render_text("some **bold** text"),
            "some <strong>bold</strong> text"
        );
    }

    #[test]
    fn test_italic() {
        assert_eq!(render_text("some *italic* text"), "some <em>italic</em> text");
    }

    #[test]
    fn test_bold_and_italic_same_line() {
        assert_eq!(
            render_text("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn test_emphasis_inside_heading() {
        assert_eq!(
            render_text("## A **strong** title"),
            "<h2>A <strong>strong</strong> title</h2>"
        );
    }

    #[test]
    fn test_unpaired_asterisk_is_literal() {
        assert_eq!(render_text("3 * 4"), "3 * 4");
    }

    #[test]
    fn test_double_asterisk_without_close_becomes_empty_emphasis() {
        // A lone "**" still pairs up as two single markers.
        assert_eq!(render_text("a ** b"), "a <em></em> b");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render_text("---"), "<hr />");
        assert_eq!(render_text("  ---  "), "<hr />");
    }

    #[test]
    fn test_four_dashes_is_not_a_rule() {
        assert_eq!(render_text("----"), "----");
    }

    #[test]
    fn test_multi_line_order_preserved() {
        assert_eq!(
            render_text("### Title\n**bold** and *italic*\n---"),
            "<h3>Title</h3>\n<strong>bold</strong> and <em>italic</em>\n<hr />"
        );
    }

    #[test]
    fn test_literal_text_is_escaped() {
        assert_eq!(
            render_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escaping_inside_emphasis() {
        assert_eq!(
            render_text("**a < b**"),
            "<strong>a &lt; b</strong>"
        );
    }
}
