//! Typed DTD declaration records.
//!
//! One file per declaration kind, mirroring the declaration forms of the DTD
//! grammar (`<!ENTITY>`, `<!ELEMENT>`, `<!ATTLIST>`, `<!NOTATION>`,
//! `<!--...-->`). Each record keeps the path of the source file it was parsed
//! from and can re-serialize itself to declaration text through `render()`.
//! The [`Declaration`](declaration::Declaration) enum ties the kinds together
//! so collections stay ordered and callers match exhaustively instead of
//! probing for the variant they hope for.

pub mod attlist;
pub mod attribute;
pub mod comment;
pub mod declaration;
pub mod element;
pub mod entity;
pub mod notation;

pub use attlist::Attlist;
pub use attribute::{Attribute, AttributeType};
pub use comment::Comment;
pub use declaration::{Declaration, DeclarationKind};
pub use element::Element;
pub use entity::Entity;
pub use notation::Notation;
