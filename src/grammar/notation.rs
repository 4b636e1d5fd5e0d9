//! Notation parsing.

use std::path::Path;

use crate::dtd::{DeclarationKind, Notation};
use crate::grammar::error::GrammarError;
use crate::scanning::Sentence;

fn malformed(detail: &str) -> GrammarError {
    GrammarError::Malformed {
        kind: DeclarationKind::Notation,
        detail: detail.into(),
    }
}

/// `<!NOTATION name (SYSTEM "sysid" | PUBLIC "pubid" ["sysid"])>`.
/// The keyword decides which identifiers the remaining words carry.
pub fn parse(sentence: &Sentence, source: &Path) -> Result<Notation, GrammarError> {
    let words = sentence.words(true);
    if words.len() < 2 {
        return Err(malformed("missing notation name"));
    }
    let mut notation = Notation {
        name: words[1].read().to_string(),
        source: source.to_path_buf(),
        ..Default::default()
    };

    let mut keyword_at = None;
    for (i, word) in words.iter().enumerate() {
        match word.read() {
            "PUBLIC" => {
                notation.public = true;
                keyword_at = Some(i);
            }
            "SYSTEM" => {
                notation.system = true;
                keyword_at = Some(i);
            }
            _ => {}
        }
    }
    let Some(idx) = keyword_at else {
        return Err(malformed("expected PUBLIC or SYSTEM"));
    };

    if notation.system {
        notation.system_id = words
            .get(idx + 1)
            .ok_or_else(|| malformed("SYSTEM without a system identifier"))?
            .read()
            .to_string();
    } else {
        notation.public_id = words
            .get(idx + 1)
            .ok_or_else(|| malformed("PUBLIC without a public identifier"))?
            .read()
            .to_string();
        if let Some(word) = words.get(idx + 2) {
            notation.system_id = word.read().to_string();
        }
    }
    Ok(notation)
}
