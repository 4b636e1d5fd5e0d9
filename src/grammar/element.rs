//! Element parsing.

use std::path::Path;

use crate::dtd::{DeclarationKind, Element};
use crate::grammar::error::GrammarError;
use crate::scanning::Sentence;

/// `<!ELEMENT name contentspec>`. The name is the second word, everything
/// after it joins into the verbatim content-model string.
pub fn parse(sentence: &Sentence, source: &Path) -> Result<Element, GrammarError> {
    let words = sentence.words(true);
    if words.len() < 2 {
        return Err(GrammarError::Malformed {
            kind: DeclarationKind::Element,
            detail: "missing element name".into(),
        });
    }
    let content_model = words[2..]
        .iter()
        .map(|w| w.read())
        .collect::<Vec<_>>()
        .join(" ");
    Ok(Element {
        name: words[1].read().to_string(),
        content_model,
        source: source.to_path_buf(),
    })
}
