//! ASCII-safe escaping for text embedded in `.properties` files.

/// Escape `s` so the result is pure printable ASCII.
///
/// Printable ASCII passes through, except `\` and `"` which are
/// backslash-escaped. Common control characters use their short escapes
/// (`\n`, `\t`, ...), other control bytes become `\xNN`, and everything
/// outside ASCII becomes `\uNNNN` or `\UNNNNNNNN` with lowercase hex.
/// No surrounding quotes are added.
pub fn to_ascii_escaped(s: &str) -> String {
    let mut out = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            ' '..='~' => out.push(c),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0b}' => out.push_str("\\v"),
            c if c.is_ascii() => out.push_str(&format!("\\x{:02x}", c as u32)),
            c if (c as u32) < 0x10000 => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push_str(&format!("\\U{:08x}", c as u32)),
        }
    }

    out
}
