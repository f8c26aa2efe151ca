use json_tree_buffers::Writer;

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Escape a string into a complete JSON string literal, surrounding quotes
/// included.
///
/// Escapes:
/// - Control characters (0x00-0x1F)
/// - Double quote (0x22)
/// - Backslash (0x5C)
///
/// Everything else, including non-ASCII text, passes through unescaped.
///
/// # Examples
///
/// ```
/// use json_tree_util::strings::escape;
///
/// assert_eq!(escape("hello"), "\"hello\"");
/// assert_eq!(escape("say \"hi\""), "\"say \\\"hi\\\"\"");
/// assert_eq!(escape("line1\nline2"), "\"line1\\nline2\"");
/// ```
pub fn escape(s: &str) -> String {
    let mut w = Writer::with_capacity(s.len() + 2);
    escape_into(&mut w, s);
    w.flush()
}

/// Escape `s` into `w` as a complete JSON string literal, quotes included.
///
/// Unescaped spans are copied through in one piece rather than char by char.
pub fn escape_into(w: &mut Writer, s: &str) {
    w.ensure_capacity(s.len() + 2);
    w.ch('"');
    let mut last = 0;
    for (i, c) in s.char_indices() {
        let short = match c {
            '\u{0008}' => Some("\\b"),
            '\t' => Some("\\t"),
            '\n' => Some("\\n"),
            '\u{000C}' => Some("\\f"),
            '\r' => Some("\\r"),
            '"' => Some("\\\""),
            '\\' => Some("\\\\"),
            _ => None,
        };
        if let Some(esc) = short {
            w.str(&s[last..i]);
            w.ascii(esc);
            last = i + c.len_utf8();
        } else if c < '\u{0020}' {
            // Control character without a short form
            w.str(&s[last..i]);
            let b = c as u32;
            w.ascii("\\u00");
            w.ch(char::from(HEX[(b >> 4) as usize]));
            w.ch(char::from(HEX[(b & 0x0f) as usize]));
            last = i + c.len_utf8();
        }
    }
    w.str(&s[last..]);
    w.ch('"');
}
