//! The per-file parser and the parser tree it builds.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::dtd::{Declaration, DeclarationKind, Entity};
use crate::grammar::{self, GrammarError};
use crate::pipeline::context::ParseContext;
use crate::pipeline::error::ParseError;
use crate::pipeline::options::ParserOptions;
use crate::scanning::{DeclarationScanner, ScanError, ScanEvent};

/// One parsed DTD file: its declarations in source order plus a child
/// parser per external DTD resolved from it.
///
/// The tree keeps provenance: a declaration always lives in the node of the
/// file it was read from, never merged upward.
#[derive(Debug)]
pub struct DtdParser {
    path: PathBuf,
    options: ParserOptions,
    collection: Vec<Declaration>,
    children: Vec<DtdParser>,
}

impl DtdParser {
    /// Parse a DTD file and, transitively, every external DTD its entities
    /// reference.
    pub fn parse(path: impl AsRef<Path>, options: ParserOptions) -> Result<DtdParser, ParseError> {
        let mut context = ParseContext::new();
        DtdParser::parse_with_context(path.as_ref(), options, &mut context)
    }

    /// Like [`parse`](DtdParser::parse), but threading a caller-owned
    /// context so the cross-file maps remain available afterwards.
    pub fn parse_with_context(
        path: &Path,
        options: ParserOptions,
        context: &mut ParseContext,
    ) -> Result<DtdParser, ParseError> {
        let content = fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        context.mark_visited(canonical);
        info!(path = %path.display(), bytes = content.len(), "parsing");

        DtdParser::parse_source(&content, path, options, context)
    }

    /// Parse DTD source held in memory. `path` provides provenance and the
    /// base directory for resolving external references.
    pub fn parse_source(
        source: &str,
        path: &Path,
        options: ParserOptions,
        context: &mut ParseContext,
    ) -> Result<DtdParser, ParseError> {
        let mut parser = DtdParser {
            path: path.to_path_buf(),
            options,
            collection: Vec::new(),
            children: Vec::new(),
        };

        let mut scanner = DeclarationScanner::new(source);
        while let Some(event) = scanner.next() {
            let line = scanner.line();
            match event {
                Err(ScanError::UnterminatedDeclaration { line }) => {
                    return Err(ParseError::UnterminatedDeclaration {
                        path: parser.path,
                        line,
                    });
                }
                Ok(ScanEvent::ExportMarker(name)) => {
                    parser.mark_exported(&name, context);
                }
                Ok(ScanEvent::Declaration(mut sentence)) => {
                    let kind = grammar::classify(&sentence);
                    sentence.set_kind(kind);
                    if kind == DeclarationKind::Unidentified {
                        warn!(
                            path = %parser.path.display(),
                            line,
                            raw = sentence.raw(),
                            "skipping unidentified declaration"
                        );
                        continue;
                    }
                    if kind == DeclarationKind::Comment && !parser.options.include_comments {
                        continue;
                    }
                    match grammar::parse_declaration(&sentence, &parser.path) {
                        Ok(declaration) => {
                            debug!(kind = %kind, name = ?declaration.name(), "declaration parsed");
                            parser.collect(declaration, context)?;
                        }
                        Err(source @ GrammarError::UnknownAttributeType { .. }) => {
                            return Err(ParseError::Grammar {
                                path: parser.path,
                                line,
                                source,
                            });
                        }
                        Err(err) => {
                            warn!(path = %parser.path.display(), line, %err, "skipping declaration");
                        }
                    }
                }
            }
        }

        info!(
            path = %parser.path.display(),
            blocks = parser.collection.len(),
            "parsed"
        );
        Ok(parser)
    }

    /// Append a record, index it, and resolve it if it references an
    /// external DTD.
    fn collect(
        &mut self,
        declaration: Declaration,
        context: &mut ParseContext,
    ) -> Result<(), ParseError> {
        context.record(&declaration);
        let external = match &declaration {
            Declaration::Entity(e) if e.external => Some(e.clone()),
            _ => None,
        };
        self.collection.push(declaration);
        if let Some(entity) = external {
            self.resolve_external(&entity, context)?;
        }
        Ok(())
    }

    /// Parse the external DTD an entity points at, relative to this file's
    /// directory. Already-visited files are treated as resolved; a missing
    /// file is fatal unless ignore mode is on.
    fn resolve_external(
        &mut self,
        entity: &Entity,
        context: &mut ParseContext,
    ) -> Result<(), ParseError> {
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        let target = base.join(&entity.url);

        if !target.exists() {
            if self.options.ignore_external {
                warn!(
                    url = %entity.url,
                    declared_in = %self.path.display(),
                    entity = %entity.name,
                    "external DTD not found, skipping"
                );
                return Ok(());
            }
            return Err(ParseError::MissingExternal {
                url: entity.url.clone(),
                declared_in: self.path.clone(),
                entity: entity.name.clone(),
            });
        }

        let canonical = target.canonicalize().map_err(|source| ParseError::Io {
            path: target.clone(),
            source,
        })?;
        if context.was_visited(&canonical) {
            debug!(path = %canonical.display(), "external DTD already parsed");
            return Ok(());
        }

        let child = DtdParser::parse_with_context(&target, self.options.clone(), context)?;
        self.children.push(child);
        Ok(())
    }

    /// Set the exported flag on the named entity. Unknown names only warn;
    /// marking twice is a no-op.
    fn mark_exported(&mut self, name: &str, context: &mut ParseContext) {
        for declaration in &mut self.collection {
            if let Declaration::Entity(entity) = declaration {
                if entity.name == name {
                    entity.exported = true;
                    context.set_exported(name);
                    debug!(name, "entity marked exported");
                    return;
                }
            }
        }
        warn!(
            name,
            path = %self.path.display(),
            "export marker does not match any entity"
        );
    }

    /// The file this parser read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// This file's declarations, in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.collection
    }

    /// One child per external DTD resolved from this file, in resolution
    /// order.
    pub fn children(&self) -> &[DtdParser] {
        &self.children
    }
}
