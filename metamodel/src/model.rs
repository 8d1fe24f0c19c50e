//! Core element graph types.
//!
//! Every element lives in a per-kind arena inside [`AspectModel`] and is
//! referenced by a typed index. References between elements are indices, so
//! cyclic models (an entity whose property's characteristic points back at
//! the entity, an abstract entity listing its extenders) carry no ownership
//! cycles. The top-level entry point is the resolver crate, which builds an
//! `AspectModel` in one pass; the model is immutable afterwards.

use std::collections::{BTreeMap, HashMap};

use crate::characteristic::{Characteristic, CharacteristicKind};
use crate::constraint::Constraint;
use crate::types::{MetaModelVersion, Type};
use crate::value::{EntityInstance, Value};

macro_rules! element_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(usize);

        impl $name {
            /// Wraps an arena index.
            #[must_use]
            pub fn new(index: usize) -> Self {
                Self(index)
            }

            /// Returns the arena index.
            #[must_use]
            pub fn index(self) -> usize {
                self.0
            }
        }
    };
}

element_id!(
    /// Index of an [`Aspect`].
    AspectId
);
element_id!(
    /// Index of a [`Property`].
    PropertyId
);
element_id!(
    /// Index of a [`Characteristic`].
    CharacteristicId
);
element_id!(
    /// Index of a [`Constraint`].
    ConstraintId
);
element_id!(
    /// Index of a [`ComplexType`].
    ComplexTypeId
);
element_id!(
    /// Index of a [`Unit`].
    UnitId
);
element_id!(
    /// Index of a [`QuantityKind`].
    QuantityKindId
);
element_id!(
    /// Index of an [`Operation`].
    OperationId
);
element_id!(
    /// Index of an [`Event`].
    EventId
);
element_id!(
    /// Index of an [`EntityInstance`].
    EntityInstanceId
);

/// Attributes common to every model element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ElementBase {
    /// The element's URN; `None` for anonymous elements.
    pub urn: Option<String>,
    /// Local name, or a deterministic synthetic name for anonymous elements.
    pub name: String,
    /// Whether `name` was synthesized.
    pub has_synthetic_name: bool,
    /// Preferred names keyed by language tag.
    pub preferred_names: BTreeMap<String, String>,
    /// Descriptions keyed by language tag.
    pub descriptions: BTreeMap<String, String>,
    /// `samm:see` references, in source order.
    pub see: Vec<String>,
    /// The source the element's statements were loaded from.
    pub source: Option<String>,
}

impl ElementBase {
    /// Returns true if the element has no URN.
    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.urn.is_none()
    }

    /// Returns the preferred name for a language tag.
    #[must_use]
    pub fn preferred_name(&self, language: &str) -> Option<&str> {
        self.preferred_names.get(language).map(String::as_str)
    }

    /// Returns the description for a language tag.
    #[must_use]
    pub fn description(&self, language: &str) -> Option<&str> {
        self.descriptions.get(language).map(String::as_str)
    }
}

/// The root of a model: a set of properties, operations and events.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Aspect {
    /// Base attributes.
    pub base: ElementBase,
    /// Properties, in declaration order.
    pub properties: Vec<PropertyId>,
    /// Operations, in declaration order.
    pub operations: Vec<OperationId>,
    /// Events, in declaration order.
    pub events: Vec<EventId>,
    /// True iff exactly one property's characteristic is a collection.
    pub is_collection_aspect: bool,
}

/// A named feature with a characteristic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Property {
    /// Base attributes. A property usage carries its target's attributes.
    pub base: ElementBase,
    /// The characteristic; absent only for abstract properties.
    pub characteristic: Option<CharacteristicId>,
    /// Optional example value.
    pub example_value: Option<Value>,
    /// Whether the property may be absent from a payload.
    pub optional: bool,
    /// Whether the property is excluded from the payload.
    pub not_in_payload: bool,
    /// Name used in payloads; defaults to the property's name.
    pub payload_name: String,
    /// The more general property this one refines (`samm:extends`).
    pub refines: Option<PropertyId>,
    /// Whether this is a `samm:AbstractProperty`.
    pub is_abstract: bool,
    /// For anonymous property usages: the named property being decorated.
    pub usage_of: Option<PropertyId>,
}

/// A function offered by an aspect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Operation {
    /// Base attributes.
    pub base: ElementBase,
    /// Input properties, in order.
    pub input: Vec<PropertyId>,
    /// Optional output property.
    pub output: Option<PropertyId>,
}

/// An occurrence emitted by an aspect.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    /// Base attributes.
    pub base: ElementBase,
    /// Parameter properties, in order.
    pub parameters: Vec<PropertyId>,
}

/// An Entity or AbstractEntity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComplexType {
    /// Base attributes.
    pub base: ElementBase,
    /// Own properties, in declaration order.
    pub properties: Vec<PropertyId>,
    /// The complex type this one extends.
    pub extends: Option<ComplexTypeId>,
    /// Entity or abstract entity.
    pub kind: ComplexTypeKind,
}

impl ComplexType {
    /// Returns true for `samm:AbstractEntity`.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        matches!(self.kind, ComplexTypeKind::AbstractEntity { .. })
    }

    /// Returns the ids of the complex types extending this abstract entity.
    /// Empty for plain entities.
    #[must_use]
    pub fn extending_elements(&self) -> &[ComplexTypeId] {
        match &self.kind {
            ComplexTypeKind::Entity => &[],
            ComplexTypeKind::AbstractEntity { extending_elements } => extending_elements,
        }
    }
}

/// Distinguishes entities from abstract entities.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ComplexTypeKind {
    /// `samm:Entity`.
    Entity,
    /// `samm:AbstractEntity`.
    AbstractEntity {
        /// Every complex type whose `extends` is this entity. Identities only;
        /// look the elements up through [`AspectModel::complex_type`].
        extending_elements: Vec<ComplexTypeId>,
    },
}

/// A unit of measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unit {
    /// Base attributes.
    pub base: ElementBase,
    /// Display symbol, e.g. `km/h`.
    pub symbol: Option<String>,
    /// UN/CEFACT common code.
    pub code: Option<String>,
    /// Unit this one is converted to.
    pub reference_unit: Option<UnitId>,
    /// Conversion expression to the reference unit.
    pub conversion_factor: Option<String>,
    /// Quantity kinds this unit measures (no duplicates).
    pub quantity_kinds: Vec<QuantityKindId>,
}

/// A kind of quantity, e.g. velocity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuantityKind {
    /// Base attributes.
    pub base: ElementBase,
}

/// Pseudo-element exposing every top-level element of a model that has no
/// single aspect root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Namespace {
    /// Common URN prefix of the elements (up to and including `#`).
    pub urn_prefix: String,
    /// The top-level elements, in graph order.
    pub elements: Vec<ElementRef>,
}

/// A reference to any element in an [`AspectModel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ElementRef {
    /// An aspect.
    Aspect(AspectId),
    /// A property.
    Property(PropertyId),
    /// A characteristic.
    Characteristic(CharacteristicId),
    /// A constraint.
    Constraint(ConstraintId),
    /// An entity or abstract entity.
    ComplexType(ComplexTypeId),
    /// A unit.
    Unit(UnitId),
    /// A quantity kind.
    QuantityKind(QuantityKindId),
    /// An operation.
    Operation(OperationId),
    /// An event.
    Event(EventId),
    /// An entity instance.
    EntityInstance(EntityInstanceId),
}

/// Per-kind element arenas, indexed by the typed ids.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Elements {
    /// All aspects.
    pub aspects: Vec<Aspect>,
    /// All properties, including anonymous usages.
    pub properties: Vec<Property>,
    /// All characteristics.
    pub characteristics: Vec<Characteristic>,
    /// All constraints.
    pub constraints: Vec<Constraint>,
    /// All entities and abstract entities.
    pub complex_types: Vec<ComplexType>,
    /// All units.
    pub units: Vec<Unit>,
    /// All quantity kinds.
    pub quantity_kinds: Vec<QuantityKind>,
    /// All operations.
    pub operations: Vec<Operation>,
    /// All events.
    pub events: Vec<Event>,
    /// All entity instances.
    pub entity_instances: Vec<EntityInstance>,
}

/// A fully resolved, immutable element graph.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AspectModel {
    /// Meta-model version the model was resolved against.
    pub meta_model_version: MetaModelVersion,
    /// The elements resolution was asked for, in request order.
    pub roots: Vec<ElementRef>,
    /// Set when the whole namespace was resolved.
    pub namespace: Option<Namespace>,
    elements: Elements,
    #[cfg_attr(feature = "serde", serde(skip))]
    urn_index: HashMap<String, ElementRef>,
}

impl AspectModel {
    /// Assembles a model from finished arenas and indexes named elements by URN.
    ///
    /// Anonymous property usages share their target's URN; the index keeps
    /// the named element.
    #[must_use]
    pub fn new(
        meta_model_version: MetaModelVersion,
        elements: Elements,
        roots: Vec<ElementRef>,
        namespace: Option<Namespace>,
    ) -> Self {
        let mut model = Self {
            meta_model_version,
            roots,
            namespace,
            elements,
            urn_index: HashMap::new(),
        };
        let named: Vec<(String, ElementRef)> = model
            .element_refs()
            .filter_map(|element| {
                let base = model.base(element);
                let is_usage = matches!(
                    element,
                    ElementRef::Property(id) if model.property(id).usage_of.is_some()
                );
                match (&base.urn, is_usage) {
                    (Some(urn), false) => Some((urn.clone(), element)),
                    _ => None,
                }
            })
            .collect();
        model.urn_index.extend(named);
        model
    }

    /// Returns the raw arenas.
    #[must_use]
    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Returns the aspect with the given id.
    #[must_use]
    pub fn aspect(&self, id: AspectId) -> &Aspect {
        &self.elements.aspects[id.index()]
    }

    /// Returns the property with the given id.
    #[must_use]
    pub fn property(&self, id: PropertyId) -> &Property {
        &self.elements.properties[id.index()]
    }

    /// Returns the characteristic with the given id.
    #[must_use]
    pub fn characteristic(&self, id: CharacteristicId) -> &Characteristic {
        &self.elements.characteristics[id.index()]
    }

    /// Returns the constraint with the given id.
    #[must_use]
    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.elements.constraints[id.index()]
    }

    /// Returns the complex type with the given id.
    #[must_use]
    pub fn complex_type(&self, id: ComplexTypeId) -> &ComplexType {
        &self.elements.complex_types[id.index()]
    }

    /// Returns the unit with the given id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.elements.units[id.index()]
    }

    /// Returns the quantity kind with the given id.
    #[must_use]
    pub fn quantity_kind(&self, id: QuantityKindId) -> &QuantityKind {
        &self.elements.quantity_kinds[id.index()]
    }

    /// Returns the operation with the given id.
    #[must_use]
    pub fn operation(&self, id: OperationId) -> &Operation {
        &self.elements.operations[id.index()]
    }

    /// Returns the event with the given id.
    #[must_use]
    pub fn event(&self, id: EventId) -> &Event {
        &self.elements.events[id.index()]
    }

    /// Returns the entity instance with the given id.
    #[must_use]
    pub fn entity_instance(&self, id: EntityInstanceId) -> &EntityInstance {
        &self.elements.entity_instances[id.index()]
    }

    /// Returns the base attributes of any element.
    #[must_use]
    pub fn base(&self, element: ElementRef) -> &ElementBase {
        match element {
            ElementRef::Aspect(id) => &self.aspect(id).base,
            ElementRef::Property(id) => &self.property(id).base,
            ElementRef::Characteristic(id) => &self.characteristic(id).base,
            ElementRef::Constraint(id) => &self.constraint(id).base,
            ElementRef::ComplexType(id) => &self.complex_type(id).base,
            ElementRef::Unit(id) => &self.unit(id).base,
            ElementRef::QuantityKind(id) => &self.quantity_kind(id).base,
            ElementRef::Operation(id) => &self.operation(id).base,
            ElementRef::Event(id) => &self.event(id).base,
            ElementRef::EntityInstance(id) => &self.entity_instance(id).base,
        }
    }

    /// Looks up a named element by its URN. Returns `None` if not found.
    #[must_use]
    pub fn lookup(&self, urn: &str) -> Option<ElementRef> {
        self.urn_index.get(urn).copied()
    }

    /// Iterates the root aspects.
    pub fn aspects(&self) -> impl Iterator<Item = (AspectId, &Aspect)> + '_ {
        self.roots.iter().filter_map(move |root| match root {
            ElementRef::Aspect(id) => Some((*id, self.aspect(*id))),
            _ => None,
        })
    }

    /// Iterates every element in the model, kind by kind.
    pub fn element_refs(&self) -> impl Iterator<Item = ElementRef> + '_ {
        let e = &self.elements;
        (0..e.aspects.len())
            .map(|i| ElementRef::Aspect(AspectId::new(i)))
            .chain((0..e.properties.len()).map(|i| ElementRef::Property(PropertyId::new(i))))
            .chain(
                (0..e.characteristics.len())
                    .map(|i| ElementRef::Characteristic(CharacteristicId::new(i))),
            )
            .chain((0..e.constraints.len()).map(|i| ElementRef::Constraint(ConstraintId::new(i))))
            .chain(
                (0..e.complex_types.len()).map(|i| ElementRef::ComplexType(ComplexTypeId::new(i))),
            )
            .chain((0..e.units.len()).map(|i| ElementRef::Unit(UnitId::new(i))))
            .chain(
                (0..e.quantity_kinds.len())
                    .map(|i| ElementRef::QuantityKind(QuantityKindId::new(i))),
            )
            .chain((0..e.operations.len()).map(|i| ElementRef::Operation(OperationId::new(i))))
            .chain((0..e.events.len()).map(|i| ElementRef::Event(EventId::new(i))))
            .chain(
                (0..e.entity_instances.len())
                    .map(|i| ElementRef::EntityInstance(EntityInstanceId::new(i))),
            )
    }

    /// Returns the total number of elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        let e = &self.elements;
        e.aspects.len()
            + e.properties.len()
            + e.characteristics.len()
            + e.constraints.len()
            + e.complex_types.len()
            + e.units.len()
            + e.quantity_kinds.len()
            + e.operations.len()
            + e.events.len()
            + e.entity_instances.len()
    }

    /// Returns the effective datatype of a characteristic.
    ///
    /// A Trait delegates to its base characteristic; every other kind returns
    /// its own declared or inherited datatype.
    #[must_use]
    pub fn data_type(&self, id: CharacteristicId) -> Option<&Type> {
        let mut current = id;
        // Trait chains are acyclic; the bound only caps the walk.
        for _ in 0..=self.elements.characteristics.len() {
            let characteristic = self.characteristic(current);
            match &characteristic.kind {
                CharacteristicKind::Trait {
                    base_characteristic,
                    ..
                } if characteristic.data_type.is_none() => current = *base_characteristic,
                _ => return characteristic.data_type.as_ref(),
            }
        }
        None
    }

    /// Returns the characteristic a Trait ultimately constrains, or the
    /// characteristic itself when it is not a Trait.
    #[must_use]
    pub fn effective_characteristic(&self, id: CharacteristicId) -> CharacteristicId {
        let mut current = id;
        for _ in 0..=self.elements.characteristics.len() {
            match &self.characteristic(current).kind {
                CharacteristicKind::Trait {
                    base_characteristic,
                    ..
                } => current = *base_characteristic,
                _ => break,
            }
        }
        current
    }

    /// Iterates the complex types that extend an abstract entity.
    pub fn extending_elements(
        &self,
        id: ComplexTypeId,
    ) -> impl Iterator<Item = (ComplexTypeId, &ComplexType)> + '_ {
        self.complex_type(id)
            .extending_elements()
            .iter()
            .map(move |e| (*e, self.complex_type(*e)))
    }

    /// Returns a complex type's own properties followed by those inherited
    /// through its `extends` chain, nearest ancestor first.
    #[must_use]
    pub fn all_properties(&self, id: ComplexTypeId) -> Vec<PropertyId> {
        let mut properties = Vec::new();
        let mut seen = Vec::new();
        let mut current = Some(id);
        while let Some(ct) = current {
            if seen.contains(&ct) {
                break;
            }
            seen.push(ct);
            let complex = self.complex_type(ct);
            properties.extend(complex.properties.iter().copied());
            current = complex.extends;
        }
        properties
    }

    /// Returns the number of named elements.
    #[must_use]
    pub fn named_element_count(&self) -> usize {
        self.urn_index.len()
    }
}
