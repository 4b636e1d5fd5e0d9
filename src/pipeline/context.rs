//! Shared state threaded through a parse run.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::dtd::{Attlist, Attribute, Declaration, Element, Entity};
use crate::grammar::attributes;

/// Cross-file lookup state for one parse run.
///
/// Holds the most recently seen element and attribute-list declaration per
/// element name, every entity by name, and the set of canonical file paths
/// already parsed. The maps only grow during a run.
#[derive(Debug, Default)]
pub struct ParseContext {
    elements: HashMap<String, Element>,
    attlists: HashMap<String, Attlist>,
    entities: HashMap<String, Entity>,
    visited: HashSet<PathBuf>,
}

impl ParseContext {
    pub fn new() -> ParseContext {
        ParseContext::default()
    }

    /// Index a freshly parsed declaration. Later declarations of the same
    /// name replace earlier ones.
    pub fn record(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Element(e) => {
                self.elements.insert(e.name.clone(), e.clone());
            }
            Declaration::Attlist(a) => {
                self.attlists.insert(a.element_name.clone(), a.clone());
            }
            Declaration::Entity(e) => {
                self.entities.insert(e.name.clone(), e.clone());
            }
            Declaration::Notation(_) | Declaration::Comment(_) => {}
        }
    }

    pub fn element(&self, name: &str) -> Option<&Element> {
        self.elements.get(name)
    }

    pub fn attlist(&self, element_name: &str) -> Option<&Attlist> {
        self.attlists.get(element_name)
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    /// Record a canonical path as parsed; returns false if it already was.
    pub fn mark_visited(&mut self, path: PathBuf) -> bool {
        self.visited.insert(path)
    }

    pub fn was_visited(&self, path: &Path) -> bool {
        self.visited.contains(path)
    }

    pub(crate) fn set_exported(&mut self, name: &str) {
        if let Some(entity) = self.entities.get_mut(name) {
            entity.exported = true;
        }
    }

    /// The attribute list of an ATTLIST with entity-reference placeholders
    /// substituted.
    ///
    /// Each `%name;` placeholder is replaced by the attribute definitions
    /// parsed from that parameter entity's value. A reference to an unknown
    /// entity, or one whose value does not parse as attribute definitions,
    /// is kept verbatim.
    pub fn merged_attributes(&self, attlist: &Attlist) -> Vec<Attribute> {
        let mut merged = Vec::with_capacity(attlist.attributes.len());
        for attr in &attlist.attributes {
            if !attr.entity_reference {
                merged.push(attr.clone());
                continue;
            }
            let name = attr
                .value
                .trim_start_matches('%')
                .trim_end_matches(';');
            let Some(entity) = self.entities.get(name) else {
                warn!(name, element = %attlist.element_name, "attribute entity reference not declared");
                merged.push(attr.clone());
                continue;
            };
            let tokens = attributes::seek_words(&attributes::normalize_space(&entity.value));
            match attributes::parse(&attlist.element_name, &tokens) {
                Ok(fragment) => merged.extend(fragment),
                Err(err) => {
                    warn!(name, %err, "attribute entity value does not parse as attribute definitions");
                    merged.push(attr.clone());
                }
            }
        }
        merged
    }
}
