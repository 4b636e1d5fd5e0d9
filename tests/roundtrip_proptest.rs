//! Property-based round-trip tests.
//!
//! For generated declarations of each kind, parsing the rendered form must
//! reproduce the same record. Generated names and values avoid the
//! characters that are structural in DTD source (quotes, brackets, `%`)
//! and the PUBLIC/SYSTEM keywords, which change the declaration's shape.

use std::path::Path;

use proptest::prelude::*;

use dtdparse::dtd::Declaration;
use dtdparse::pipeline::{DtdParser, ParseContext, ParserOptions};

fn parse_one(source: &str) -> Declaration {
    let mut context = ParseContext::new();
    let parser = DtdParser::parse_source(
        source,
        Path::new("memory.dtd"),
        ParserOptions {
            ignore_external: true,
            ..Default::default()
        },
        &mut context,
    )
    .expect("generated declaration should parse");
    assert_eq!(parser.declarations().len(), 1);
    parser.declarations()[0].clone()
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9._-]{0,10}"
        .prop_filter("keywords change the declaration shape", |s| {
            s != "PUBLIC" && s != "SYSTEM"
        })
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 .,:;=+/-]{0,20}[A-Za-z0-9]"
        .prop_filter("keywords change the declaration shape", |s| {
            !s.contains("PUBLIC") && !s.contains("SYSTEM")
        })
}

fn url_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9/-]{0,12}\\.(ent|dtd)").unwrap()
}

proptest! {
    #[test]
    fn general_entity_round_trips(name in name_strategy(), value in value_strategy()) {
        let source = format!("<!ENTITY {name} \"{value}\">");
        let first = parse_one(&source);

        if let Declaration::Entity(entity) = &first {
            prop_assert_eq!(&entity.name, &name);
            prop_assert_eq!(&entity.value, &value);
            prop_assert!(!entity.parameter && !entity.external);
        } else {
            prop_assert!(false, "expected entity");
        }

        let second = parse_one(&first.render());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn system_parameter_entity_round_trips(name in name_strategy(), url in url_strategy()) {
        let source = format!("<!ENTITY % {name} SYSTEM \"{url}\">");
        let first = parse_one(&source);

        if let Declaration::Entity(entity) = &first {
            prop_assert!(entity.parameter && entity.system && entity.external);
            prop_assert_eq!(&entity.url, &url);
            prop_assert!(!entity.url.is_empty());
        } else {
            prop_assert!(false, "expected entity");
        }

        let second = parse_one(&first.render());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn element_round_trips(name in name_strategy(), children in proptest::collection::vec(name_strategy(), 1..4)) {
        let model = format!("({})", children.join(" | "));
        let source = format!("<!ELEMENT {name} {model}>");
        let first = parse_one(&source);

        if let Declaration::Element(element) = &first {
            prop_assert_eq!(&element.name, &name);
            prop_assert_eq!(&element.content_model, &model);
        } else {
            prop_assert!(false, "expected element");
        }

        let second = parse_one(&first.render());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn attlist_round_trips(
        element in name_strategy(),
        attrs in proptest::collection::vec(
            (name_strategy(), 0..4usize, proptest::option::of(value_strategy())),
            1..4,
        ),
    ) {
        let keywords = ["CDATA", "ID", "NMTOKEN", "IDREFS"];
        let mut body = String::new();
        for (name, type_idx, default) in &attrs {
            body.push_str(&format!("\n  {name} {}", keywords[*type_idx]));
            match default {
                Some(value) => body.push_str(&format!(" \"{value}\"")),
                None => body.push_str(" #IMPLIED"),
            }
        }
        let source = format!("<!ATTLIST {element}{body}>");
        let first = parse_one(&source);

        if let Declaration::Attlist(attlist) = &first {
            prop_assert_eq!(&attlist.element_name, &element);
            prop_assert_eq!(attlist.attributes.len(), attrs.len());
            for (attr, (name, _, default)) in attlist.attributes.iter().zip(&attrs) {
                prop_assert_eq!(&attr.name, name);
                match default {
                    Some(value) => prop_assert_eq!(&attr.default_value, value),
                    None => prop_assert!(attr.implied),
                }
            }
        } else {
            prop_assert!(false, "expected attlist");
        }

        let second = parse_one(&first.render());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn comment_round_trips(text in value_strategy()) {
        let source = format!("<!-- {text} -->");
        let first = parse_one(&source);

        if let Declaration::Comment(comment) = &first {
            prop_assert_eq!(&comment.text, &text);
        } else {
            prop_assert!(false, "expected comment");
        }

        let second = parse_one(&first.render());
        prop_assert_eq!(first, second);
    }
}
