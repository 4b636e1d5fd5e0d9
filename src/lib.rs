//! # dtdparse
//!
//! A parser for XML Document Type Definitions.
//!
//! DTD source is scanned character by character into declarations, each
//! declaration is interpreted by the grammar for its kind, and the typed
//! records are collected per file. Entities that reference external DTDs are
//! resolved transitively, producing a tree of per-file results that keeps
//! track of which file contributed which declarations. The `formats` module
//! serializes a parsed tree back out as DTD text or JSON.
//!
//! ```no_run
//! use dtdparse::pipeline::{DtdParser, ParserOptions};
//!
//! let parser = DtdParser::parse("catalog.dtd", ParserOptions::default())?;
//! for declaration in parser.declarations() {
//!     println!("{}", declaration.render());
//! }
//! # Ok::<(), dtdparse::pipeline::ParseError>(())
//! ```

pub mod dtd;
pub mod formats;
pub mod grammar;
pub mod pipeline;
pub mod scanning;
