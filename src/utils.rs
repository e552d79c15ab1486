/// Calculates the byte offset of a 1-based line and column in the source text.
/// Columns count bytes, as the JSON parser reports them.
/// Used only on the error path, to turn a JSON parser position into a span.
/// Positions past the end clamp to the end of the source.
pub fn get_offset(source: &str, line: usize, column: usize) -> usize {
    let mut current_line = 1;
    let mut current_column = 1;
    for (i, c) in source.char_indices() {
        if current_line == line && current_column == column {
            return i;
        }
        if c == '\n' {
            if current_line == line {
                return i;
            }
            current_line += 1;
            current_column = 1;
        } else {
            current_column += c.len_utf8();
        }
    }
    source.len()
}

/// Escapes text for HTML text and attribute contexts.
///
/// Covers `& < > " '`, so the result is safe inside both double- and
/// single-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
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

/// Upper-cases the first character, the way platform names are labelled.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#039;Jerry&#039;&lt;/a&gt;"
        );
        assert_eq!(escape_html("#FFFFFF"), "#FFFFFF");
    }

    #[test]
    fn test_get_offset() {
        let source = "{\n  \"a\": x\n}";
        assert_eq!(get_offset(source, 1, 1), 0);
        assert_eq!(get_offset(source, 2, 8), 9);
        assert_eq!(get_offset(source, 9, 1), source.len());
    }

    #[test]
    fn test_get_offset_counts_bytes() {
        let source = "{\"t\": \"ééééé\" x}";
        assert_eq!(get_offset(source, 1, 20), 19);
        assert_eq!(&source[19..20], "x");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("github"), "Github");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
