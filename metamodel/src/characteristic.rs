//! Characteristics: how a property's raw datatype is to be interpreted.

use crate::model::{CharacteristicId, ConstraintId, ElementBase, PropertyId, UnitId};
use crate::types::Type;
use crate::value::Value;

/// A resolved Characteristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Characteristic {
    /// Base attributes.
    pub base: ElementBase,
    /// The declared or inherited datatype. `None` for Trait (delegates to its
    /// base characteristic) and Either (has two sides instead).
    pub data_type: Option<Type>,
    /// The concrete characteristic class and its class-specific attributes.
    pub kind: CharacteristicKind,
}

impl Characteristic {
    /// Returns true if this characteristic belongs to the collection family.
    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self.kind, CharacteristicKind::Collection { .. })
    }

    /// Returns the collection kind for collection-family characteristics.
    #[must_use]
    pub fn collection_kind(&self) -> Option<CollectionKind> {
        match self.kind {
            CharacteristicKind::Collection { collection, .. } => Some(collection),
            _ => None,
        }
    }

    /// Returns the meta-model class name of this characteristic.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        self.kind.name()
    }
}

/// The concrete characteristic classes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CharacteristicKind {
    /// `samm:Characteristic`.
    Plain,
    /// `samm-c:Trait`: a base characteristic refined by constraints.
    Trait {
        /// The constrained characteristic.
        base_characteristic: CharacteristicId,
        /// Constraints, in declaration order.
        constraints: Vec<ConstraintId>,
    },
    /// The collection family (`Collection`, `List`, `Set`, `SortedSet`, `TimeSeries`).
    Collection {
        /// Which collection class.
        collection: CollectionKind,
        /// Optional characteristic describing each element.
        element_characteristic: Option<CharacteristicId>,
    },
    /// `samm-c:Enumeration`.
    Enumeration {
        /// Permitted values, in declaration order.
        values: Vec<Value>,
    },
    /// `samm-c:State`: an enumeration with a default.
    State {
        /// Permitted values, in declaration order.
        values: Vec<Value>,
        /// The default value; not checked against `values`.
        default_value: Value,
    },
    /// `samm-c:Quantifiable`.
    Quantifiable {
        /// Unit of the quantity.
        unit: Option<UnitId>,
    },
    /// `samm-c:Measurement`.
    Measurement {
        /// Unit of the measurement.
        unit: Option<UnitId>,
    },
    /// `samm-c:Duration`.
    Duration {
        /// Unit of the duration.
        unit: Option<UnitId>,
    },
    /// `samm-c:SingleEntity`.
    SingleEntity,
    /// `samm-c:Either`: one of two alternatives.
    Either {
        /// Left alternative.
        left: CharacteristicId,
        /// Right alternative.
        right: CharacteristicId,
    },
    /// `samm-c:Code`.
    Code,
    /// `samm-c:StructuredValue`.
    StructuredValue {
        /// Regular expression splitting the value into its parts.
        deconstruction_rule: String,
        /// Literal separators and properties, in order.
        elements: Vec<StructuredValueElement>,
    },
}

impl CharacteristicKind {
    /// Returns the meta-model class name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CharacteristicKind::Plain => "Characteristic",
            CharacteristicKind::Trait { .. } => "Trait",
            CharacteristicKind::Collection { collection, .. } => collection.name(),
            CharacteristicKind::Enumeration { .. } => "Enumeration",
            CharacteristicKind::State { .. } => "State",
            CharacteristicKind::Quantifiable { .. } => "Quantifiable",
            CharacteristicKind::Measurement { .. } => "Measurement",
            CharacteristicKind::Duration { .. } => "Duration",
            CharacteristicKind::SingleEntity => "SingleEntity",
            CharacteristicKind::Either { .. } => "Either",
            CharacteristicKind::Code => "Code",
            CharacteristicKind::StructuredValue { .. } => "StructuredValue",
        }
    }

    /// Returns the unit of quantifiable characteristics.
    #[must_use]
    pub fn unit(&self) -> Option<UnitId> {
        match self {
            CharacteristicKind::Quantifiable { unit }
            | CharacteristicKind::Measurement { unit }
            | CharacteristicKind::Duration { unit } => *unit,
            _ => None,
        }
    }

    /// Returns enumeration values for Enumeration and State.
    #[must_use]
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            CharacteristicKind::Enumeration { values } | CharacteristicKind::State { values, .. } => {
                Some(values)
            }
            _ => None,
        }
    }
}

/// The concrete collection classes, each with fixed ordering and uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CollectionKind {
    /// Unordered, duplicates allowed.
    Collection,
    /// Ordered, duplicates allowed.
    List,
    /// Unordered, unique.
    Set,
    /// Ordered, unique.
    SortedSet,
    /// Ordered, unique, elements are timestamped entities.
    TimeSeries,
}

impl CollectionKind {
    /// Returns true if element order is significant.
    #[must_use]
    pub fn is_ordered(self) -> bool {
        matches!(
            self,
            CollectionKind::List | CollectionKind::SortedSet | CollectionKind::TimeSeries
        )
    }

    /// Returns true if elements must be unique.
    #[must_use]
    pub fn is_unique(self) -> bool {
        matches!(
            self,
            CollectionKind::Set | CollectionKind::SortedSet | CollectionKind::TimeSeries
        )
    }

    /// Returns the meta-model class name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CollectionKind::Collection => "Collection",
            CollectionKind::List => "List",
            CollectionKind::Set => "Set",
            CollectionKind::SortedSet => "SortedSet",
            CollectionKind::TimeSeries => "TimeSeries",
        }
    }
}

/// One part of a StructuredValue's `elements` list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StructuredValueElement {
    /// A literal separator.
    Literal(String),
    /// A property receiving one capture group.
    Property(PropertyId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_semantics() {
        assert!(!CollectionKind::Set.is_ordered());
        assert!(CollectionKind::Set.is_unique());
        assert!(CollectionKind::SortedSet.is_ordered());
        assert!(CollectionKind::SortedSet.is_unique());
        assert!(CollectionKind::List.is_ordered());
        assert!(!CollectionKind::List.is_unique());
        assert!(!CollectionKind::Collection.is_ordered());
        assert!(!CollectionKind::Collection.is_unique());
        assert!(CollectionKind::TimeSeries.is_ordered());
        assert!(CollectionKind::TimeSeries.is_unique());
    }
}
