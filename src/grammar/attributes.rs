//! The attribute sub-grammar of ATTLIST declarations.
//!
//! Attribute definitions are re-tokenized from the normalized declaration
//! body rather than taken from the sentence's words: a quoted default
//! (`"a b"`) and a parenthesized enumeration (`(a | b)`) must each stay one
//! token regardless of inner whitespace.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::dtd::{Attribute, AttributeType};
use crate::grammar::error::GrammarError;

/// One token per quoted literal, parenthesized group (with optional
/// occurrence suffix) or whitespace-free run.
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)"|\((.*?)\)[+?*]?|(\S+)"#).expect("word regex"));

static LINE_BREAKS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n|\t").expect("line-break regex"));

static SPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("space regex"));

/// Collapse line breaks, tabs and space runs into single spaces.
pub fn normalize_space(s: &str) -> String {
    let unbroken = LINE_BREAKS.replace_all(s, " ");
    SPACE_RUNS.replace_all(&unbroken, " ").trim().to_string()
}

/// Split a normalized attribute body into tokens.
pub fn seek_words(s: &str) -> Vec<String> {
    WORD.find_iter(s).map(|m| m.as_str().to_string()).collect()
}

fn trim_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(s)
}

/// Interpret the token stream that follows the element name.
///
/// Each pass of the loop consumes one attribute definition: name, type,
/// default-value declaration. A `%name;` token instead records a placeholder
/// standing in for a whole attribute-list fragment. An unknown type word
/// aborts the parse; the cursor position after it would be meaningless.
pub fn parse(element: &str, tokens: &[String]) -> Result<Vec<Attribute>, GrammarError> {
    let mut attributes = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i].as_str();
        if token.is_empty() {
            i += 1;
            continue;
        }

        if token.starts_with('%') {
            attributes.push(Attribute {
                value: token.to_string(),
                entity_reference: true,
                ..Default::default()
            });
            i += 1;
            continue;
        }

        let name = token.to_string();
        i += 1;
        let Some(type_token) = tokens.get(i) else {
            return Err(GrammarError::Malformed {
                kind: crate::dtd::DeclarationKind::Attlist,
                detail: format!("attribute '{name}' of '{element}' has no type"),
            });
        };

        let attr_type = if type_token.starts_with('(') {
            AttributeType::ValueEnum
        } else {
            AttributeType::from_keyword(type_token).ok_or_else(|| {
                GrammarError::UnknownAttributeType {
                    element: element.to_string(),
                    attribute: name.clone(),
                    token: type_token.to_string(),
                }
            })?
        };

        let mut attr = Attribute {
            name,
            attr_type: Some(attr_type),
            ..Default::default()
        };

        match attr_type {
            AttributeType::ValueEnum => {
                attr.value = type_token.to_string();
                i += 1;
            }
            AttributeType::NotationEnum => {
                i += 1;
                let Some(group) = tokens.get(i) else {
                    return Err(GrammarError::Malformed {
                        kind: crate::dtd::DeclarationKind::Attlist,
                        detail: format!(
                            "NOTATION attribute '{}' of '{element}' has no enumeration",
                            attr.name
                        ),
                    });
                };
                attr.value = group.to_string();
                i += 1;
            }
            _ => {
                i += 1;
            }
        }

        // default-value declaration
        if let Some(word) = tokens.get(i) {
            match word.as_str() {
                "#REQUIRED" => {
                    attr.required = true;
                    i += 1;
                }
                "#IMPLIED" => {
                    attr.implied = true;
                    i += 1;
                }
                "#FIXED" => {
                    attr.fixed = true;
                    i += 1;
                    let Some(value) = tokens.get(i) else {
                        return Err(GrammarError::Malformed {
                            kind: crate::dtd::DeclarationKind::Attlist,
                            detail: format!(
                                "#FIXED attribute '{}' of '{element}' has no value",
                                attr.name
                            ),
                        });
                    };
                    attr.default_value = trim_quotes(value).to_string();
                    i += 1;
                }
                other => {
                    attr.default_value = trim_quotes(other).to_string();
                    i += 1;
                }
            }
        }

        attributes.push(attr);
    }

    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_space_collapses_runs() {
        assert_eq!(normalize_space("a\n\tb   c\r\n d"), "a b c d");
    }

    #[test]
    fn seek_words_keeps_quoted_and_grouped_tokens() {
        let tokens = seek_words("id ID #REQUIRED status (a | b) \"a b\"");
        assert_eq!(
            tokens,
            vec!["id", "ID", "#REQUIRED", "status", "(a | b)", "\"a b\""]
        );
    }

    #[test]
    fn seek_words_is_not_greedy_across_groups() {
        let tokens = seek_words("x (a|b) y (c|d)");
        assert_eq!(tokens, vec!["x", "(a|b)", "y", "(c|d)"]);
    }

    fn parse_str(body: &str) -> Result<Vec<Attribute>, GrammarError> {
        let tokens = seek_words(&normalize_space(body));
        parse("test", &tokens)
    }

    #[test]
    fn required_and_implied() {
        let attrs = parse_str("id ID #REQUIRED name CDATA #IMPLIED").unwrap();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].name, "id");
        assert_eq!(attrs[0].attr_type, Some(AttributeType::Id));
        assert!(attrs[0].required && !attrs[0].implied && !attrs[0].fixed);
        assert_eq!(attrs[1].name, "name");
        assert_eq!(attrs[1].attr_type, Some(AttributeType::Cdata));
        assert!(attrs[1].implied && !attrs[1].required);
    }

    #[test]
    fn fixed_consumes_its_literal() {
        let attrs = parse_str("version CDATA #FIXED \"1.0\"").unwrap();
        assert_eq!(attrs.len(), 1);
        assert!(attrs[0].fixed);
        assert_eq!(attrs[0].default_value, "1.0");
    }

    #[test]
    fn plain_default_value() {
        let attrs = parse_str("lang NMTOKEN \"en\"").unwrap();
        assert!(!attrs[0].required && !attrs[0].implied && !attrs[0].fixed);
        assert_eq!(attrs[0].default_value, "en");
    }

    #[test]
    fn value_enumeration_with_default() {
        let attrs = parse_str("status (active | retired) \"active\"").unwrap();
        assert_eq!(attrs[0].attr_type, Some(AttributeType::ValueEnum));
        assert_eq!(attrs[0].value, "(active | retired)");
        assert_eq!(attrs[0].default_value, "active");
    }

    #[test]
    fn notation_enumeration() {
        let attrs = parse_str("format NOTATION (gif | png) #IMPLIED").unwrap();
        assert_eq!(attrs[0].attr_type, Some(AttributeType::NotationEnum));
        assert_eq!(attrs[0].value, "(gif | png)");
        assert!(attrs[0].implied);
    }

    #[test]
    fn entity_reference_placeholder() {
        let attrs = parse_str("%global.atts; id ID #IMPLIED").unwrap();
        assert_eq!(attrs.len(), 2);
        assert!(attrs[0].entity_reference);
        assert_eq!(attrs[0].value, "%global.atts;");
        assert!(attrs[0].attr_type.is_none());
    }

    #[test]
    fn unknown_type_is_fatal() {
        let err = parse_str("id BOGUS #REQUIRED").unwrap_err();
        assert!(matches!(err, GrammarError::UnknownAttributeType { .. }));
    }

    #[test]
    fn default_exclusivity_holds() {
        let attrs =
            parse_str("a CDATA #REQUIRED b CDATA #IMPLIED c CDATA #FIXED \"x\" d CDATA \"y\"")
                .unwrap();
        for attr in &attrs {
            let set = [attr.required, attr.implied, attr.fixed]
                .iter()
                .filter(|b| **b)
                .count();
            assert!(set <= 1);
            if attr.fixed {
                assert!(!attr.default_value.is_empty());
            }
        }
    }
}
