//! Text utilities for emitted stub bodies.

/// Check whether a name is a valid Python identifier.
///
/// First character must be alphabetic or `_`; the rest alphanumeric or `_`.
/// Keyword collisions are not checked; introspected namespaces do not
/// produce keyword-named attributes in practice.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Check whether a name is uppercase by Python's `str.isupper` convention:
/// at least one cased character, and no lowercase ones.
pub fn is_upper_name(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

/// Indent a rendered declaration for inclusion in a class body.
///
/// Non-blank lines are indented four spaces and right-trimmed; blank lines
/// stay empty so the output carries no trailing whitespace.
pub fn indent_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("    {}", line).trim_end().to_string()
            }
        })
        .collect()
}
