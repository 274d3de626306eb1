//! Escaping of regex metacharacters.

/// Characters that must be backslash-escaped to match literally.
const CHARS_TO_ESCAPE: [char; 14] = [
    '|', '\\', '{', '}', '(', ')', '[', ']', '^', '$', '+', '*', '?', '.',
];

fn needs_escape(c: char) -> bool {
    CHARS_TO_ESCAPE.contains(&c)
}

/// Escape every metacharacter in a raw value.
pub(crate) fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if needs_escape(c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Reverse `escape`: drop the backslash in front of any escaped metacharacter.
///
/// Backslashes not followed by a metacharacter are kept as-is.
pub(crate) fn unescape(pattern: &str) -> String {
    let mut unescaped = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&next) = chars.peek() {
                if needs_escape(next) {
                    unescaped.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        unescaped.push(c);
    }
    unescaped
}
