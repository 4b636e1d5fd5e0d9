//! Parse-run failures.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::grammar::GrammarError;

/// Conditions that abort a file's parse.
///
/// Everything milder (an unidentified declaration, an unmatched export
/// marker, a malformed declaration) is logged and skipped instead.
#[derive(Debug)]
pub enum ParseError {
    /// The input file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// A declaration's grammar could not be continued from (unresolvable
    /// attribute type).
    Grammar {
        path: PathBuf,
        line: usize,
        source: GrammarError,
    },
    /// A declaration ran to end of input without terminating.
    UnterminatedDeclaration { path: PathBuf, line: usize },
    /// An external DTD referenced by an entity does not exist and ignore
    /// mode is off.
    MissingExternal {
        url: String,
        declared_in: PathBuf,
        entity: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            ParseError::Grammar { path, line, source } => {
                write!(f, "{}:{line}: {source}", path.display())
            }
            ParseError::UnterminatedDeclaration { path, line } => write!(
                f,
                "{}:{line}: declaration runs to end of input",
                path.display()
            ),
            ParseError::MissingExternal {
                url,
                declared_in,
                entity,
            } => write!(
                f,
                "external DTD '{url}' not found, declared in '{}', entity '{entity}'",
                declared_in.display()
            ),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io { source, .. } => Some(source),
            ParseError::Grammar { source, .. } => Some(source),
            _ => None,
        }
    }
}
