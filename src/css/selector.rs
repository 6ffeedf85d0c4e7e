use std::sync::LazyLock;

use regex::Regex;

static CLASS_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.(-?[_a-zA-Z][_a-zA-Z0-9-]*)").expect("Invalid regex")
});

/// Split a selector list on top-level commas (`:is(.a, .b)` stays whole).
#[must_use]
pub fn split_selector_list(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(selector[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(selector[start..].trim());
    parts.retain(|p| !p.is_empty());
    parts
}

/// Compound parts of one complex selector, split on whitespace and the
/// `>`, `+`, `~` combinators outside parentheses and brackets.
#[must_use]
pub fn selector_parts(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in selector.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && (c.is_whitespace() || matches!(c, '>' | '+' | '~')) => {
                parts.push(&selector[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts.retain(|p| !p.is_empty());
    parts
}

/// Class names referenced by a selector, without the leading dot.
///
/// Quoted attribute values are skipped so `a[href$=".pdf"]` yields nothing.
#[must_use]
pub fn class_tokens(selector: &str) -> Vec<String> {
    let unquoted = strip_quoted(selector);
    CLASS_TOKEN
        .captures_iter(&unquoted)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn strip_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for c in text.chars() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        if c == '"' || c == '\'' {
            quote = Some(c);
            out.push(' ');
            continue;
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[path = "selector_tests.rs"]
mod tests;
