//! Entity declarations.

use std::path::PathBuf;

use serde::Serialize;

/// A parsed `<!ENTITY>` declaration.
///
/// `parameter` distinguishes `%`-entities from general entities. An external
/// entity (`PUBLIC` or `SYSTEM`) always carries the referenced location in
/// `url`; a `PUBLIC` entity additionally keeps its public identifier in
/// `value`. `exported` is set when a trailing `%name;` marker follows the
/// declaration in the source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Entity {
    pub name: String,
    pub value: String,
    pub parameter: bool,
    pub public: bool,
    pub system: bool,
    pub external: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    pub exported: bool,
    pub source: PathBuf,
}

impl Entity {
    /// Serialize back to declaration text, including the trailing export
    /// marker when set.
    pub fn render(&self) -> String {
        let mut out = String::from("<!ENTITY ");
        if self.parameter {
            out.push_str("% ");
        }
        out.push_str(&self.name);
        if self.public {
            out.push_str(" PUBLIC \"");
            out.push_str(&self.value);
            out.push('"');
            if !self.url.is_empty() {
                out.push_str(" \"");
                out.push_str(&self.url);
                out.push('"');
            }
        } else if self.system {
            out.push_str(" SYSTEM \"");
            out.push_str(&self.url);
            out.push('"');
        } else {
            out.push_str(" \"");
            out.push_str(&self.value);
            out.push('"');
        }
        out.push('>');
        if self.exported {
            out.push_str("\n%");
            out.push_str(&self.name);
            out.push(';');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_internal_general_entity() {
        let e = Entity {
            name: "copy".into(),
            value: "&#169;".into(),
            ..Default::default()
        };
        assert_eq!(e.render(), "<!ENTITY copy \"&#169;\">");
    }

    #[test]
    fn render_system_parameter_entity() {
        let e = Entity {
            name: "types".into(),
            parameter: true,
            system: true,
            external: true,
            url: "types.ent".into(),
            ..Default::default()
        };
        assert_eq!(e.render(), "<!ENTITY % types SYSTEM \"types.ent\">");
    }

    #[test]
    fn render_exported_public_entity() {
        let e = Entity {
            name: "concept-dec".into(),
            parameter: true,
            public: true,
            external: true,
            value: "-//OASIS//ENTITIES DITA 1.2 Concept//EN".into(),
            url: "concept.ent".into(),
            exported: true,
            ..Default::default()
        };
        assert_eq!(
            e.render(),
            "<!ENTITY % concept-dec PUBLIC \"-//OASIS//ENTITIES DITA 1.2 Concept//EN\" \"concept.ent\">\n%concept-dec;"
        );
    }
}
