//! Grammar-level failures.

use std::fmt;

use crate::dtd::DeclarationKind;

/// Failure while interpreting one declaration's word list.
///
/// `Malformed` is recoverable: the file parser skips the declaration and
/// keeps going. `UnknownAttributeType` is not: an attribute list whose type
/// word falls outside the type table leaves the cursor position meaningless,
/// so the whole file parse aborts.
#[derive(Debug, Clone)]
pub enum GrammarError {
    Malformed {
        kind: DeclarationKind,
        detail: String,
    },
    UnknownAttributeType {
        element: String,
        attribute: String,
        token: String,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::Malformed { kind, detail } => {
                write!(f, "malformed {kind} declaration: {detail}")
            }
            GrammarError::UnknownAttributeType {
                element,
                attribute,
                token,
            } => write!(
                f,
                "unknown attribute type '{token}' for attribute '{attribute}' of element '{element}'"
            ),
        }
    }
}

impl std::error::Error for GrammarError {}
