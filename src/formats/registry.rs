//! Format registry for parsed-tree serialization.
//!
//! Each output format implements the `Formatter` trait and can be registered
//! with `FormatRegistry`, which hands serialization requests to the format
//! named by the caller.

use std::collections::HashMap;
use std::fmt;

use crate::pipeline::DtdParser;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for parser-tree formatters
///
/// Implementors serialize a parsed DTD tree to a string representation.
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "dtd", "json")
    fn name(&self) -> &str;

    /// Serialize a parsed tree to this format
    fn serialize(&self, parser: &DtdParser) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of parser-tree formatters
///
/// Provides a centralized registry for all available serialization formats.
/// Formats can be registered and retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a parsed tree using the specified format
    pub fn serialize(&self, parser: &DtdParser, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(parser)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::DtdFormatter);
        registry.register(super::JsonFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{ParseContext, ParserOptions};
    use std::path::Path;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(&self, parser: &DtdParser) -> Result<String, FormatError> {
            Ok(format!("{} blocks", parser.declarations().len()))
        }
    }

    fn empty_parser() -> DtdParser {
        let mut context = ParseContext::new();
        DtdParser::parse_source("", Path::new("t.dtd"), ParserOptions::default(), &mut context)
            .unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        assert!(registry.has("test"));
        assert!(!registry.has("missing"));
        let out = registry.serialize(&empty_parser(), "test").unwrap();
        assert_eq!(out, "0 blocks");
    }

    #[test]
    fn missing_format_is_an_error() {
        let registry = FormatRegistry::new();
        let err = registry.serialize(&empty_parser(), "nope").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("nope".into()));
    }

    #[test]
    fn defaults_are_sorted() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["dtd", "json"]);
    }
}
