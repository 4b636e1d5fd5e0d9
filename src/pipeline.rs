//! File-level orchestration.
//!
//! [`DtdParser`](parser::DtdParser) drives the scan loop over one file,
//! collects the produced declaration records in order, recursively parses
//! external DTDs referenced by entities, and applies trailing export
//! markers. A parse run threads a single [`ParseContext`](context::ParseContext)
//! through the recursion: it carries the cross-file element/attribute and
//! entity maps plus the visited-path set that keeps circular references from
//! recursing forever.

pub mod context;
pub mod error;
pub mod options;
pub mod parser;

pub use context::ParseContext;
pub use error::ParseError;
pub use options::ParserOptions;
pub use parser::DtdParser;
