//! Attribute definitions carried by an ATTLIST declaration.

use serde::Serialize;

/// Attribute type, resolved from the type word of an attribute definition.
///
/// `NotationEnum` and `ValueEnum` are the two enumerated forms; their
/// parenthesized group text lives in the owning [`Attribute`]'s `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttributeType {
    #[serde(rename = "CDATA")]
    Cdata,
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "IDREF")]
    IdRef,
    #[serde(rename = "IDREFS")]
    IdRefs,
    #[serde(rename = "ENTITY")]
    Entity,
    #[serde(rename = "ENTITIES")]
    Entities,
    #[serde(rename = "NMTOKEN")]
    NmToken,
    #[serde(rename = "NMTOKENS")]
    NmTokens,
    #[serde(rename = "NOTATION")]
    NotationEnum,
    #[serde(rename = "ENUMERATION")]
    ValueEnum,
}

impl AttributeType {
    /// Resolve a type keyword. Parenthesized value enumerations are
    /// recognized by the caller from the token shape, not from this table.
    pub fn from_keyword(word: &str) -> Option<AttributeType> {
        match word {
            "CDATA" => Some(AttributeType::Cdata),
            "ID" => Some(AttributeType::Id),
            "IDREF" => Some(AttributeType::IdRef),
            "IDREFS" => Some(AttributeType::IdRefs),
            "ENTITY" => Some(AttributeType::Entity),
            "ENTITIES" => Some(AttributeType::Entities),
            "NMTOKEN" => Some(AttributeType::NmToken),
            "NMTOKENS" => Some(AttributeType::NmTokens),
            "NOTATION" => Some(AttributeType::NotationEnum),
            _ => None,
        }
    }

    /// Keyword used when re-serializing. A value enumeration has no keyword;
    /// it renders its group text instead.
    pub fn keyword(&self) -> &'static str {
        match self {
            AttributeType::Cdata => "CDATA",
            AttributeType::Id => "ID",
            AttributeType::IdRef => "IDREF",
            AttributeType::IdRefs => "IDREFS",
            AttributeType::Entity => "ENTITY",
            AttributeType::Entities => "ENTITIES",
            AttributeType::NmToken => "NMTOKEN",
            AttributeType::NmTokens => "NMTOKENS",
            AttributeType::NotationEnum => "NOTATION",
            AttributeType::ValueEnum => "",
        }
    }
}

/// One attribute definition inside an ATTLIST.
///
/// An entity-reference placeholder (`%name;` standing in for a whole
/// attribute-list fragment) has `entity_reference` set and carries only the
/// raw reference text in `value`. At most one of `required`/`implied`/`fixed`
/// is set; a fixed attribute always carries its literal in `default_value`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub attr_type: Option<AttributeType>,
    /// Enumeration group text, or the raw `%name;` reference.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_value: String,
    pub required: bool,
    pub implied: bool,
    pub fixed: bool,
    pub entity_reference: bool,
}

impl Attribute {
    /// Serialize back to the attribute-definition form used inside an
    /// ATTLIST declaration.
    pub fn render(&self) -> String {
        if self.entity_reference {
            return self.value.clone();
        }
        let mut out = self.name.clone();
        match self.attr_type {
            Some(AttributeType::ValueEnum) => {
                out.push(' ');
                out.push_str(&self.value);
            }
            Some(AttributeType::NotationEnum) => {
                out.push_str(" NOTATION ");
                out.push_str(&self.value);
            }
            Some(t) => {
                out.push(' ');
                out.push_str(t.keyword());
            }
            None => {}
        }
        if self.required {
            out.push_str(" #REQUIRED");
        } else if self.implied {
            out.push_str(" #IMPLIED");
        } else if self.fixed {
            out.push_str(" #FIXED \"");
            out.push_str(&self.default_value);
            out.push('"');
        } else if !self.default_value.is_empty() {
            out.push_str(" \"");
            out.push_str(&self.default_value);
            out.push('"');
        }
        out
    }
}
