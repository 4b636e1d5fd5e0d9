//! The tagged union over all declaration kinds.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::dtd::{Attlist, Comment, Element, Entity, Notation};

/// Declaration kind, as determined from the first word of a scanned
/// declaration. `Unidentified` never reaches a collection; it marks
/// sentences the classifier could not place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclarationKind {
    Entity,
    Element,
    Attlist,
    Notation,
    Comment,
    Unidentified,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeclarationKind::Entity => "ENTITY",
            DeclarationKind::Element => "ELEMENT",
            DeclarationKind::Attlist => "ATTLIST",
            DeclarationKind::Notation => "NOTATION",
            DeclarationKind::Comment => "COMMENT",
            DeclarationKind::Unidentified => "UNIDENTIFIED",
        };
        f.write_str(name)
    }
}

/// One fully parsed declaration. A record is only constructed once its
/// grammar parser succeeded, so every variant is complete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Declaration {
    Entity(Entity),
    Element(Element),
    Attlist(Attlist),
    Notation(Notation),
    Comment(Comment),
}

impl Declaration {
    pub fn kind(&self) -> DeclarationKind {
        match self {
            Declaration::Entity(_) => DeclarationKind::Entity,
            Declaration::Element(_) => DeclarationKind::Element,
            Declaration::Attlist(_) => DeclarationKind::Attlist,
            Declaration::Notation(_) => DeclarationKind::Notation,
            Declaration::Comment(_) => DeclarationKind::Comment,
        }
    }

    /// The declared name. Comments have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            Declaration::Entity(e) => Some(&e.name),
            Declaration::Element(e) => Some(&e.name),
            Declaration::Attlist(a) => Some(&a.element_name),
            Declaration::Notation(n) => Some(&n.name),
            Declaration::Comment(_) => None,
        }
    }

    /// The file this declaration was parsed from.
    pub fn source(&self) -> &Path {
        match self {
            Declaration::Entity(e) => &e.source,
            Declaration::Element(e) => &e.source,
            Declaration::Attlist(a) => &a.source,
            Declaration::Notation(n) => &n.source,
            Declaration::Comment(c) => &c.source,
        }
    }

    /// Serialize back to declaration text.
    pub fn render(&self) -> String {
        match self {
            Declaration::Entity(e) => e.render(),
            Declaration::Element(e) => e.render(),
            Declaration::Attlist(a) => a.render(),
            Declaration::Notation(n) => n.render(),
            Declaration::Comment(c) => c.render(),
        }
    }
}
