//! Element declarations.

use std::path::PathBuf;

use serde::Serialize;

/// A parsed `<!ELEMENT>` declaration.
///
/// The content model (`EMPTY`, `ANY`, mixed or children form) is captured
/// verbatim, not interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Element {
    pub name: String,
    pub content_model: String,
    pub source: PathBuf,
}

impl Element {
    pub fn render(&self) -> String {
        format!("<!ELEMENT {} {}>", self.name, self.content_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_keeps_content_model_verbatim() {
        let e = Element {
            name: "section".into(),
            content_model: "(title, para*)".into(),
            ..Default::default()
        };
        assert_eq!(e.render(), "<!ELEMENT section (title, para*)>");
    }
}
