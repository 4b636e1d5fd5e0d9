//! Declaration-kind classification.

use crate::dtd::DeclarationKind;
use crate::scanning::Sentence;

/// Determine the declaration kind from the first word of a sentence.
///
/// Comments are matched on the `<!--` prefix because `<!--note-->` scans as
/// a single word. Anything unrecognized classifies `Unidentified`, which the
/// caller treats as a skippable declaration, not a fatal condition.
pub fn classify(sentence: &Sentence) -> DeclarationKind {
    let words = sentence.words(true);
    let first = words.first().map(|w| w.read()).unwrap_or("");
    if first.starts_with("<!--") {
        DeclarationKind::Comment
    } else if first == "<!ATTLIST" {
        DeclarationKind::Attlist
    } else if first == "<!ELEMENT" {
        DeclarationKind::Element
    } else if first == "<!NOTATION" {
        DeclarationKind::Notation
    } else if first == "<!ENTITY" {
        DeclarationKind::Entity
    } else {
        DeclarationKind::Unidentified
    }
}
