//! Minimal HTML escaping for text we did not generate ourselves.

/// Escape `&`, `<`, `>` and `"` so literal text stays inert when the
/// fragment is injected into a page.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
