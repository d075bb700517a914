//! HTML escaping for text nodes and attribute values.
//!
//! Both escapers leave well-formed character references (`&amp;`, `&#38;`,
//! `&#x26;`) alone so values that were already escaped once are not mangled.

use regex::Regex;
use std::sync::LazyLock;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);")
        .expect("Invalid regex")
});

/// Escape a string for an HTML text node.
pub fn esc_html(input: &str) -> String {
    escape(input)
}

/// Escape a string for a double- or single-quoted HTML attribute value.
pub fn esc_attr(input: &str) -> String {
    escape(input)
}

fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for (i, c) in input.char_indices() {
        match c {
            '&' if ENTITY.is_match(&input[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}
