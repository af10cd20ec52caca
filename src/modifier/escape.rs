/// Wrap `s` in plain double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

/// Escape `s` for a triple-quoted literal: backslashes doubled, newlines written as `\n`.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 6);
    out.push_str("\"\"\"");
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            other => out.push(other),
        }
    }
    out.push_str("\"\"\"");
    out
}

/// `^[A-Za-z_][0-9A-Za-z_]*$`
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "../../tests/unit/modifier/escape.rs"]
mod tests;
