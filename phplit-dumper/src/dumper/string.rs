//! String literal rendering.
//!
//! Printable strings become single-quoted literals, where only `'` and a
//! few backslashes need escaping. Anything else (control characters, C1
//! code points, invalid UTF-8) becomes a double-quoted literal in which
//! every non-printable byte is hex-escaped, so the output is plain ASCII.

use std::sync::LazyLock;

/// Replacement text for each byte inside a double-quoted literal, `None`
/// meaning the byte is emitted as is.
static ESCAPES: LazyLock<[Option<Box<str>>; 256]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        let byte = i as u8;
        let escape = match byte {
            b'\\' => "\\\\".to_string(),
            b'\r' => "\\r".to_string(),
            b'\n' => "\\n".to_string(),
            b'\t' => "\\t".to_string(),
            b'$' => "\\$".to_string(),
            b'"' => "\\\"".to_string(),
            0x00..=0x1f | 0x7f..=0xff => format!("\\x{:02x}", byte),
            _ => return None,
        };
        Some(escape.into_boxed_str())
    })
});

pub(super) fn dump_string(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) if s.chars().all(is_printable) => single_quoted(s),
        _ => double_quoted(bytes),
    }
}

fn is_printable(c: char) -> bool {
    matches!(c, '\t' | '\u{20}'..='\u{7e}') || c >= '\u{a0}'
}

fn single_quoted(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for (i, c) in s.char_indices() {
        let escape = match c {
            '\'' => true,
            '\\' => matches!(bytes.get(i + 1), None | Some(b'\'' | b'\\')),
            _ => false,
        };
        if escape {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

fn double_quoted(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &byte in bytes {
        match &ESCAPES[usize::from(byte)] {
            Some(escape) => out.push_str(escape),
            None => out.push(char::from(byte)),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_strings_single_quoted() {
        assert_eq!(dump_string(b""), "''");
        assert_eq!(dump_string(b"hello"), "'hello'");
        assert_eq!(dump_string(b"tab\there"), "'tab\there'");
        assert_eq!(dump_string("žluťoučký kůň".as_bytes()), "'žluťoučký kůň'");
        assert_eq!(dump_string(b"$var \"q\""), "'$var \"q\"'");
    }

    #[test]
    fn test_single_quote_escapes() {
        assert_eq!(dump_string(b"it's"), r"'it\'s'");
        assert_eq!(dump_string(br"a\b"), r"'a\b'");
        assert_eq!(dump_string(br"a\\b"), r"'a\\\b'");
        assert_eq!(dump_string(br"end\"), r"'end\\'");
        assert_eq!(dump_string(br"\'"), r"'\\\''");
    }

    #[test]
    fn test_control_characters_double_quoted() {
        assert_eq!(dump_string(b"a\nb"), r#""a\nb""#);
        assert_eq!(dump_string(b"\r\n\t"), r#""\r\n\t""#);
        assert_eq!(dump_string(b"\x00\x1f\x7f"), r#""\x00\x1f\x7f""#);
        assert_eq!(dump_string(b"$x \"y\" \\\n"), r#""\$x \"y\" \\\n""#);
    }

    #[test]
    fn test_invalid_utf8_double_quoted() {
        assert_eq!(dump_string(b"\xff\xfe"), r#""\xff\xfe""#);
        assert_eq!(dump_string(b"ok\xc3"), r#""ok\xc3""#);
    }

    #[test]
    fn test_non_ascii_bytes_escaped_in_double_quoted_mode() {
        assert_eq!(dump_string("é\n".as_bytes()), r#""\xc3\xa9\n""#);
    }

    #[test]
    fn test_c1_code_points_force_double_quotes() {
        assert_eq!(dump_string("\u{85}".as_bytes()), r#""\xc2\x85""#);
        assert_eq!(dump_string("\u{a0}".as_bytes()), "'\u{a0}'");
    }
}
