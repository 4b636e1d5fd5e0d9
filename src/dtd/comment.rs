//! Comment declarations.

use std::path::PathBuf;

use serde::Serialize;

/// A `<!-- ... -->` block, with the wrapper stripped and the inner text
/// trimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Comment {
    pub text: String,
    pub source: PathBuf,
}

impl Comment {
    pub fn render(&self) -> String {
        format!("<!-- {} -->", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_wraps_text() {
        let c = Comment {
            text: "attribute pool".into(),
            ..Default::default()
        };
        assert_eq!(c.render(), "<!-- attribute pool -->");
    }
}
