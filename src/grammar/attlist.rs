//! Attribute-list parsing.

use std::path::Path;

use crate::dtd::{Attlist, DeclarationKind};
use crate::grammar::attributes;
use crate::grammar::error::GrammarError;
use crate::scanning::Sentence;

/// `<!ATTLIST element attdef*>`. The element name is the second token of
/// the normalized body; everything after it goes through the attribute
/// sub-grammar.
pub fn parse(sentence: &Sentence, source: &Path) -> Result<Attlist, GrammarError> {
    let body = attributes::normalize_space(sentence.body());
    let tokens = attributes::seek_words(&body);
    if tokens.len() < 2 {
        return Err(GrammarError::Malformed {
            kind: DeclarationKind::Attlist,
            detail: "missing element name".into(),
        });
    }
    let element_name = tokens[1].clone();
    let attributes = attributes::parse(&element_name, &tokens[2..])?;
    Ok(Attlist {
        element_name,
        attributes,
        source: source.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtd::AttributeType;
    use std::path::PathBuf;

    fn parse_str(input: &str) -> Result<Attlist, GrammarError> {
        let mut s = Sentence::new();
        for c in input.chars() {
            s.scan(c);
        }
        parse(&s, &PathBuf::from("test.dtd"))
    }

    #[test]
    fn two_attribute_declaration() {
        let a = parse_str("<!ATTLIST person id ID #REQUIRED name CDATA #IMPLIED>").unwrap();
        assert_eq!(a.element_name, "person");
        assert_eq!(a.attributes.len(), 2);
        assert_eq!(a.attributes[0].name, "id");
        assert!(a.attributes[0].required);
        assert_eq!(a.attributes[1].attr_type, Some(AttributeType::Cdata));
        assert!(a.attributes[1].implied);
    }

    #[test]
    fn multi_line_declaration_normalizes() {
        let a = parse_str("<!ATTLIST task\n  id     ID    #REQUIRED\n  state  (open | done) \"open\"\n>")
            .unwrap();
        assert_eq!(a.element_name, "task");
        assert_eq!(a.attributes.len(), 2);
        assert_eq!(a.attributes[1].value, "(open | done)");
        assert_eq!(a.attributes[1].default_value, "open");
    }

    #[test]
    fn entity_reference_fragment() {
        let a = parse_str("<!ATTLIST image %image.atts;>").unwrap();
        assert_eq!(a.attributes.len(), 1);
        assert!(a.attributes[0].entity_reference);
        assert_eq!(a.attributes[0].value, "%image.atts;");
    }

    #[test]
    fn empty_attlist_is_malformed() {
        assert!(parse_str("<!ATTLIST>").is_err());
    }
}
