//! Entity parsing.

use std::path::Path;

use crate::dtd::{DeclarationKind, Entity};
use crate::grammar::error::GrammarError;
use crate::scanning::Sentence;

fn malformed(detail: String) -> GrammarError {
    GrammarError::Malformed {
        kind: DeclarationKind::Entity,
        detail,
    }
}

/// `<!ENTITY [%] name (value | SYSTEM "url" | PUBLIC "pubid" "url")>`.
///
/// A lone `%` word marks a parameter entity; `PUBLIC`/`SYSTEM` mark an
/// external one. Where the value and URL sit depends on which of those are
/// present.
pub fn parse(sentence: &Sentence, source: &Path) -> Result<Entity, GrammarError> {
    let words: Vec<&str> = sentence.words(true).iter().map(|w| w.read()).collect();
    let mut entity = Entity {
        source: source.to_path_buf(),
        ..Default::default()
    };

    let mut percent_at = None;
    let mut keyword_at = 0;
    for (i, word) in words.iter().enumerate() {
        match *word {
            "%" => {
                entity.parameter = true;
                percent_at = Some(i);
            }
            "PUBLIC" => {
                entity.public = true;
                entity.external = true;
                keyword_at = i;
            }
            "SYSTEM" => {
                entity.system = true;
                entity.external = true;
                keyword_at = i;
            }
            _ => {}
        }
    }

    let name_at = match percent_at {
        Some(i) => i + 1,
        None => 1,
    };
    entity.name = words
        .get(name_at)
        .copied()
        .ok_or_else(|| malformed("missing entity name".into()))?
        .to_string();

    if entity.system {
        entity.url = words
            .get(keyword_at + 1)
            .copied()
            .ok_or_else(|| malformed(format!("SYSTEM entity '{}' has no URL", entity.name)))?
            .to_string();
    } else if entity.public {
        entity.value = words
            .get(keyword_at + 1)
            .copied()
            .ok_or_else(|| {
                malformed(format!("PUBLIC entity '{}' has no public identifier", entity.name))
            })?
            .to_string();
        entity.url = words
            .get(keyword_at + 2)
            .copied()
            .ok_or_else(|| malformed(format!("PUBLIC entity '{}' has no URL", entity.name)))?
            .to_string();
    } else if entity.parameter {
        entity.value = words
            .get(3)
            .copied()
            .ok_or_else(|| malformed(format!("parameter entity '{}' has no value", entity.name)))?
            .to_string();
    } else {
        entity.value = words
            .last()
            .copied()
            .filter(|_| words.len() >= 3)
            .ok_or_else(|| malformed(format!("entity '{}' has no value", entity.name)))?
            .to_string();
    }

    Ok(entity)
}
