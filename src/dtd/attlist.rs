//! Attribute-list declarations.

use std::path::PathBuf;

use serde::Serialize;

use crate::dtd::attribute::Attribute;

/// A parsed `<!ATTLIST>` declaration: the element it applies to plus its
/// attribute definitions in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attlist {
    pub element_name: String,
    pub attributes: Vec<Attribute>,
    pub source: PathBuf,
}

impl Attlist {
    /// Serialize back to declaration text, one attribute definition per line.
    pub fn render(&self) -> String {
        let mut out = String::from("<!ATTLIST ");
        out.push_str(&self.element_name);
        for attr in &self.attributes {
            out.push_str("\n  ");
            out.push_str(&attr.render());
        }
        out.push('>');
        out
    }
}
