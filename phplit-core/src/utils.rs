//! Shared string utilities for PHP code generation.

/// Check whether `name` is a valid PHP identifier.
///
/// PHP identifiers start with a letter, an underscore or a byte in
/// `0x7f..=0xff`, followed by any number of those or ASCII digits.
pub fn is_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();

    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b >= 0x7f => {}
        _ => return false,
    }

    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b >= 0x7f)
}

/// Indent every non-empty line of `text` by `levels` repetitions of `unit`.
///
/// Lines are separated by runs of `\r`/`\n`; a run of line breaks followed by
/// the end of input (or by nothing but more breaks) gets no indentation.
pub fn indent_lines(text: &str, levels: usize, unit: &str) -> String {
    if levels == 0 || unit.is_empty() {
        return text.to_string();
    }

    let prefix = unit.repeat(levels);
    let mut result = String::with_capacity(text.len());
    let mut at_line_start = true;

    for c in text.chars() {
        let is_break = c == '\r' || c == '\n';
        if at_line_start && !is_break {
            result.push_str(&prefix);
        }
        result.push(c);
        at_line_start = is_break;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("foo"));
        assert!(is_identifier("_bar"));
        assert!(is_identifier("Foo123"));
        assert!(is_identifier("žluťoučký"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1abc"));
        assert!(!is_identifier("foo-bar"));
        assert!(!is_identifier("foo bar"));
        assert!(!is_identifier("$foo"));
    }

    #[test]
    fn test_indent_lines() {
        assert_eq!(indent_lines("a\nb", 1, "\t"), "\ta\n\tb");
        assert_eq!(indent_lines("a\n\nb\n", 2, "  "), "    a\n\n    b\n");
        assert_eq!(indent_lines("a\r\nb", 1, "\t"), "\ta\r\n\tb");
        assert_eq!(indent_lines("\nx", 1, "\t"), "\n\tx");
    }

    #[test]
    fn test_indent_lines_noop() {
        assert_eq!(indent_lines("a\nb", 0, "\t"), "a\nb");
        assert_eq!(indent_lines("a\nb", 3, ""), "a\nb");
        assert_eq!(indent_lines("", 2, "\t"), "");
    }
}
