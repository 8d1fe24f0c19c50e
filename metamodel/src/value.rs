//! Values: scalar literals, entity instances and collections.

use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

use crate::model::{ComplexTypeId, ElementBase, EntityInstanceId, PropertyId};
use crate::types::{Scalar, Type};

/// A typed value, as used for enumeration values, example values, range
/// bounds and entity instance assertions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Value {
    /// A literal with its scalar type.
    Scalar(ScalarValue),
    /// A reference to an entity instance element.
    Entity(EntityInstanceId),
    /// An ordered or unordered group of values.
    Collection(CollectionValue),
}

impl Value {
    /// Returns the scalar value, if this is one.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Value::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Returns the entity instance id, if this is one.
    #[must_use]
    pub fn as_entity(&self) -> Option<EntityInstanceId> {
        match self {
            Value::Entity(id) => Some(*id),
            _ => None,
        }
    }
}

/// A literal paired with the scalar type it was declared with.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScalarValue {
    /// The parsed literal.
    pub literal: LiteralValue,
    /// The literal's datatype.
    pub scalar_type: Scalar,
}

/// The parsed content of a literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralValue {
    /// `xsd:string` and other string-like types kept verbatim.
    String(String),
    /// A localized string (`rdf:langString`).
    LangString {
        /// Text content.
        text: String,
        /// BCP 47 language tag.
        language: String,
    },
    /// `xsd:boolean`.
    Boolean(bool),
    /// Any integer-valued XSD type.
    Integer(i128),
    /// `xsd:decimal`.
    Decimal(BigDecimal),
    /// `xsd:float` and `xsd:double`.
    Float(f64),
    /// Temporal, binary, URI and CURIE types, kept in lexical form.
    Lexical(String),
}

impl LiteralValue {
    /// Returns the value's lexical representation.
    #[must_use]
    pub fn lexical_form(&self) -> String {
        match self {
            LiteralValue::String(s) | LiteralValue::Lexical(s) => s.clone(),
            LiteralValue::LangString { text, .. } => text.clone(),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Integer(i) => i.to_string(),
            LiteralValue::Decimal(d) => d.to_string(),
            LiteralValue::Float(f) => f.to_string(),
        }
    }
}

/// A concrete value of an Entity: one value per asserted property.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EntityInstance {
    /// Base attributes.
    pub base: ElementBase,
    /// The instantiated Entity.
    pub entity_type: ComplexTypeId,
    /// Asserted values, keyed by the same property elements the entity
    /// lists.
    pub assertions: BTreeMap<PropertyId, Value>,
}

/// A list or set of values sharing one element type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CollectionValue {
    /// Member values in source order.
    pub elements: Vec<Value>,
    /// The common element type, when known.
    pub element_type: Option<Type>,
}
