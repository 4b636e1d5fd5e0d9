//! JSON output of the parser tree.

use std::path::Path;

use serde::Serialize;

use crate::dtd::Declaration;
use crate::formats::registry::{FormatError, Formatter};
use crate::pipeline::DtdParser;

/// One parsed file and its resolved children, borrowed for serialization.
#[derive(Serialize)]
struct FileNode<'a> {
    file: &'a Path,
    declarations: &'a [Declaration],
    children: Vec<FileNode<'a>>,
}

fn node(parser: &DtdParser) -> FileNode<'_> {
    FileNode {
        file: parser.path(),
        declarations: parser.declarations(),
        children: parser.children().iter().map(node).collect(),
    }
}

/// Pretty-printed JSON of the whole tree: per file its path, ordered
/// declaration records and children.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, parser: &DtdParser) -> Result<String, FormatError> {
        serde_json::to_string_pretty(&node(parser))
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "parser tree with provenance as JSON"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{ParseContext, ParserOptions};

    #[test]
    fn serializes_declarations_with_kind_tags() {
        let mut context = ParseContext::new();
        let parser = DtdParser::parse_source(
            "<!ELEMENT a EMPTY>\n<!ENTITY % e SYSTEM \"missing.ent\">\n",
            Path::new("t.dtd"),
            ParserOptions {
                ignore_external: true,
                ..Default::default()
            },
            &mut context,
        )
        .unwrap();

        let out = JsonFormatter.serialize(&parser).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["file"], "t.dtd");
        assert_eq!(value["declarations"][0]["kind"], "element");
        assert_eq!(value["declarations"][1]["kind"], "entity");
        assert_eq!(value["declarations"][1]["url"], "missing.ent");
        assert!(value["children"].as_array().unwrap().is_empty());
    }
}
