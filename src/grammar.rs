//! Per-declaration grammar parsers.
//!
//! A completed [`Sentence`](crate::scanning::Sentence) is classified from
//! its first word and handed to the parser for that declaration kind. Each
//! parser consumes the sentence's word list and produces a typed record;
//! nothing partial ever escapes. ATTLIST bodies additionally go through the
//! attribute sub-grammar in [`attributes`], which re-splits the body so
//! quoted defaults and parenthesized enumerations survive as single tokens.

pub mod attlist;
pub mod attributes;
pub mod classifier;
pub mod comment;
pub mod element;
pub mod entity;
pub mod error;
pub mod notation;

use std::path::Path;

use crate::dtd::{Declaration, DeclarationKind};
use crate::scanning::Sentence;

pub use classifier::classify;
pub use error::GrammarError;

/// Parse a classified sentence into its declaration record, dispatching on
/// the kind the classifier stamped onto it.
pub fn parse_declaration(
    sentence: &Sentence,
    source: &Path,
) -> Result<Declaration, GrammarError> {
    match sentence.kind() {
        DeclarationKind::Comment => Ok(Declaration::Comment(comment::parse(sentence, source))),
        DeclarationKind::Element => element::parse(sentence, source).map(Declaration::Element),
        DeclarationKind::Attlist => attlist::parse(sentence, source).map(Declaration::Attlist),
        DeclarationKind::Notation => notation::parse(sentence, source).map(Declaration::Notation),
        DeclarationKind::Entity => entity::parse(sentence, source).map(Declaration::Entity),
        DeclarationKind::Unidentified => Err(GrammarError::Malformed {
            kind: DeclarationKind::Unidentified,
            detail: "declaration kind could not be identified".into(),
        }),
    }
}
