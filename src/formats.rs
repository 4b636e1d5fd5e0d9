//! Output format implementations for parsed DTD trees.
//!
//! This module contains the serialization side of the tool:
//! - `dtd` re-serializes declarations back to DTD text
//! - `json` emits the parser tree with provenance as pretty-printed JSON
//!
//! Formats implement the [`Formatter`](registry::Formatter) trait and are
//! looked up by name through a [`FormatRegistry`](registry::FormatRegistry).

pub mod dtd;
pub mod json;
pub mod registry;

pub use dtd::{render_to_directory, DtdFormatter};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
