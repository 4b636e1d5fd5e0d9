//! Notation declarations.

use std::path::PathBuf;

use serde::Serialize;

/// A parsed `<!NOTATION>` declaration.
///
/// Three source forms exist: `SYSTEM "sysid"`, `PUBLIC "pubid"` and
/// `PUBLIC "pubid" "sysid"`. At least one of the two identifiers is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Notation {
    pub name: String,
    pub public: bool,
    pub system: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub public_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub system_id: String,
    pub source: PathBuf,
}

impl Notation {
    pub fn render(&self) -> String {
        let mut out = String::from("<!NOTATION ");
        out.push_str(&self.name);
        if self.public {
            out.push_str(" PUBLIC \"");
            out.push_str(&self.public_id);
            out.push('"');
            if !self.system_id.is_empty() {
                out.push_str(" \"");
                out.push_str(&self.system_id);
                out.push('"');
            }
        } else if self.system {
            out.push_str(" SYSTEM \"");
            out.push_str(&self.system_id);
            out.push('"');
        }
        out.push('>');
        out
    }
}
