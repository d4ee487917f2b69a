//! Sanitizers for text embedded in generated source
//!
//! Summaries come straight from the Swagger document and may hold line
//! breaks, tabs or quotes that would break a string literal.

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapses every whitespace run into a single space and trims the ends
pub fn collapse_whitespace(input: &str) -> String {
    WHITESPACE.replace_all(input.trim(), " ").into_owned()
}

/// Escapes text for use inside a Java string literal (without the quotes)
///
/// # Examples
/// ```
/// use service_creator::generation::sanitizers::escape_java_string;
///
/// assert_eq!(escape_java_string("Say \"hi\""), "Say \\\"hi\\\"");
/// ```
pub fn escape_java_string(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04x}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Text ready to be placed between the quotes of a string literal
pub fn java_literal_text(input: &str) -> String {
    escape_java_string(&collapse_whitespace(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Find   pet\n by ID\t"), "Find pet by ID");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_escape_java_string() {
        assert_eq!(escape_java_string("plain"), "plain");
        assert_eq!(escape_java_string("C:\\temp"), "C:\\\\temp");
        assert_eq!(escape_java_string("a\"b"), "a\\\"b");
        assert_eq!(escape_java_string("line\nbreak"), "line\\nbreak");
        assert_eq!(escape_java_string("\u{1}"), "\\u0001");
    }

    #[test]
    fn test_java_literal_text() {
        assert_eq!(
            java_literal_text("Returns a \"single\"\n  pet"),
            "Returns a \\\"single\\\" pet"
        );
    }
}
