//! Line splitting and C string literal wrapping.

/// Split `text` on every line boundary: `\n`, `\r\n`, lone `\r`, vertical
/// tab, form feed, the file/group/record separators `\x1c`-`\x1e`, NEL
/// (U+0085), and the Unicode line and paragraph separators.
///
/// A trailing line terminator does not produce an empty final line, and an
/// empty input yields no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.peek().map(|&(_, next)| next) == Some('\n') {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Wrap a line as `"<line>\n"`, where `\n` is the two characters `\` and `n`.
///
/// The line text is copied verbatim.
///
/// # Example
///
/// ```rust
/// use dps_tools::format::quote_line;
///
/// assert_eq!(quote_line("ABCDEF"), r#""ABCDEF\n""#);
/// ```
pub fn quote_line(line: &str) -> String {
    format!("\"{line}\\n\"")
}

/// Split `text` into lines and quote each one.
pub fn format_text(text: &str) -> Vec<String> {
    split_lines(text).into_iter().map(quote_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_with_literal_backslash_n() {
        let quoted = quote_line("ABCDEF");
        assert_eq!(quoted, "\"ABCDEF\\n\"");
        assert_eq!(quoted.len(), "ABCDEF".len() + 4);
        assert!(!quoted.contains('\n'));
    }

    #[test]
    fn quotes_empty_line() {
        assert_eq!(quote_line(""), r#""\n""#);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        assert_eq!(split_lines("a\nb\n"), ["a", "b"]);
    }

    #[test]
    fn missing_trailing_newline_keeps_last_line() {
        assert_eq!(split_lines("a\nb"), ["a", "b"]);
    }

    #[test]
    fn splits_crlf_and_lone_cr() {
        assert_eq!(split_lines("a\r\nb\rc\n"), ["a", "b", "c"]);
    }

    #[test]
    fn splits_on_control_and_unicode_separators() {
        assert_eq!(
            split_lines("a\x0bb\x0cc\x1cd\x1de\x1ef\u{85}g\u{2028}h\u{2029}i\n"),
            ["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
    }

    #[test]
    fn crlf_split_across_non_ascii_text() {
        assert_eq!(split_lines("é\r\nü\rß"), ["é", "ü", "ß"]);
    }

    #[test]
    fn keeps_interior_blank_lines() {
        assert_eq!(split_lines("a\n\nb\n"), ["a", "", "b"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(split_lines("").is_empty());
        assert!(format_text("").is_empty());
    }

    #[test]
    fn lone_newline_is_one_empty_line() {
        assert_eq!(split_lines("\n"), [""]);
    }

    #[test]
    fn formats_pem_block_in_order() {
        let pem = "-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n";
        assert_eq!(
            format_text(pem),
            [
                r#""-----BEGIN CERTIFICATE-----\n""#,
                r#""MIIB\n""#,
                r#""-----END CERTIFICATE-----\n""#,
            ]
        );
    }
}
