//! Comment parsing.

use std::path::Path;

use crate::dtd::Comment;
use crate::scanning::Sentence;

/// Extract the comment text: the raw sequence with the bracket pair and the
/// `!--`/`--` wrapper stripped, trimmed.
pub fn parse(sentence: &Sentence, source: &Path) -> Comment {
    let raw = sentence.raw();
    let inner = raw
        .strip_prefix('<')
        .unwrap_or(raw)
        .strip_suffix('>')
        .unwrap_or(raw);
    let text = inner.trim_matches(|c| c == '!' || c == '-' || c == ' ');
    Comment {
        text: text.to_string(),
        source: source.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse_str(input: &str) -> Comment {
        let mut s = Sentence::new();
        for c in input.chars() {
            s.scan(c);
        }
        parse(&s, &PathBuf::from("test.dtd"))
    }

    #[test]
    fn strips_wrapper_and_trims() {
        assert_eq!(parse_str("<!-- note -->").text, "note");
    }

    #[test]
    fn tight_comment() {
        assert_eq!(parse_str("<!--note-->").text, "note");
    }

    #[test]
    fn inner_hyphens_survive() {
        assert_eq!(
            parse_str("<!-- multi-word comment text -->").text,
            "multi-word comment text"
        );
    }

    #[test]
    fn multi_line_comment_keeps_inner_text() {
        assert_eq!(parse_str("<!-- a\n   b -->").text, "a\n   b");
    }
}
