//! Aspect Meta Model element graph encoded as typed Rust data.
//!
//! The `aspect-meta-model` crate holds the strongly typed element graph that
//! the resolver produces from a triple graph: aspects, properties,
//! characteristics, constraints, entities, units, quantity kinds and their
//! values. Elements live in per-kind arenas inside an [`AspectModel`] and
//! refer to each other through typed ids, so cyclic models are
//! representable without shared ownership.
//!
//! # Entry Point
//!
//! ```
//! use aspect_meta_model::{AspectModel, Elements, MetaModelVersion};
//!
//! let model = AspectModel::new(MetaModelVersion::LATEST, Elements::default(), vec![], None);
//! assert_eq!(model.element_count(), 0);
//! assert!(model.lookup("urn:samm:org.example:1.0.0#Missing").is_none());
//! ```
//!
//! # Serialization
//!
//! With the `serializers` feature (on by default), [`serializer::json`]
//! renders a model as a JSON document keyed by element URN.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod characteristic;
pub mod constraint;
pub mod iris;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;
pub mod types;
pub mod value;
pub mod visitor;

pub use characteristic::{Characteristic, CharacteristicKind, CollectionKind, StructuredValueElement};
pub use constraint::{BoundDefinition, Constraint, ConstraintKind};
pub use model::{
    Aspect, AspectId, AspectModel, CharacteristicId, ComplexType, ComplexTypeId, ComplexTypeKind,
    ConstraintId, ElementBase, ElementRef, Elements, EntityInstanceId, Event, EventId, Namespace,
    Operation, OperationId, Property, PropertyId, QuantityKind, QuantityKindId, Unit, UnitId,
};
pub use types::{MetaModelVersion, Scalar, Type, UnknownVersion};
pub use value::{CollectionValue, EntityInstance, LiteralValue, ScalarValue, Value};
pub use visitor::Visitor;

#[cfg(test)]
mod tests {
    use super::*;

    fn named(urn: &str) -> ElementBase {
        ElementBase {
            urn: Some(urn.to_owned()),
            name: iris::local_name(urn).to_owned(),
            ..ElementBase::default()
        }
    }

    fn string_type() -> Type {
        Type::Scalar(Scalar::new(iris::XSD_STRING, MetaModelVersion::LATEST))
    }

    fn property(base: ElementBase, characteristic: CharacteristicId) -> Property {
        let payload_name = base.name.clone();
        Property {
            base,
            characteristic: Some(characteristic),
            example_value: None,
            optional: false,
            not_in_payload: false,
            payload_name,
            refines: None,
            is_abstract: false,
            usage_of: None,
        }
    }

    /// Base (abstract) <- Inner, with a trait over a plain characteristic.
    fn sample() -> AspectModel {
        let elements = Elements {
            characteristics: vec![
                Characteristic {
                    base: named("urn:samm:org.example:1.0.0#Text"),
                    data_type: Some(string_type()),
                    kind: CharacteristicKind::Plain,
                },
                Characteristic {
                    base: named("urn:samm:org.example:1.0.0#ShortText"),
                    data_type: None,
                    kind: CharacteristicKind::Trait {
                        base_characteristic: CharacteristicId::new(0),
                        constraints: vec![ConstraintId::new(0)],
                    },
                },
            ],
            constraints: vec![Constraint {
                base: named("urn:samm:org.example:1.0.0#MaxLength"),
                kind: ConstraintKind::Length {
                    min_value: None,
                    max_value: Some(10),
                },
            }],
            properties: vec![
                property(
                    named("urn:samm:org.example:1.0.0#baseProp"),
                    CharacteristicId::new(0),
                ),
                property(
                    named("urn:samm:org.example:1.0.0#innerProp"),
                    CharacteristicId::new(1),
                ),
                Property {
                    usage_of: Some(PropertyId::new(0)),
                    optional: true,
                    ..property(
                        named("urn:samm:org.example:1.0.0#baseProp"),
                        CharacteristicId::new(0),
                    )
                },
            ],
            complex_types: vec![
                ComplexType {
                    base: named("urn:samm:org.example:1.0.0#Base"),
                    properties: vec![PropertyId::new(0)],
                    extends: None,
                    kind: ComplexTypeKind::AbstractEntity {
                        extending_elements: vec![ComplexTypeId::new(1)],
                    },
                },
                ComplexType {
                    base: named("urn:samm:org.example:1.0.0#Inner"),
                    properties: vec![PropertyId::new(1)],
                    extends: Some(ComplexTypeId::new(0)),
                    kind: ComplexTypeKind::Entity,
                },
            ],
            ..Elements::default()
        };
        AspectModel::new(MetaModelVersion::LATEST, elements, vec![], None)
    }

    #[test]
    fn lookup_skips_property_usages() {
        let model = sample();
        assert_eq!(
            model.lookup("urn:samm:org.example:1.0.0#baseProp"),
            Some(ElementRef::Property(PropertyId::new(0)))
        );
        assert_eq!(model.named_element_count(), 7);
        assert_eq!(model.element_count(), 8);
    }

    #[test]
    fn trait_delegates_data_type() {
        let model = sample();
        assert_eq!(model.data_type(CharacteristicId::new(1)), Some(&string_type()));
        assert_eq!(
            model.effective_characteristic(CharacteristicId::new(1)),
            CharacteristicId::new(0)
        );
    }

    #[test]
    fn inheritance_is_walkable_both_ways() {
        let model = sample();
        let inner = ComplexTypeId::new(1);
        assert_eq!(
            model.all_properties(inner),
            vec![PropertyId::new(1), PropertyId::new(0)]
        );
        let extenders: Vec<_> = model
            .extending_elements(ComplexTypeId::new(0))
            .map(|(_, ct)| ct.base.name.as_str())
            .collect();
        assert_eq!(extenders, ["Inner"]);
        assert!(model.extending_elements(inner).next().is_none());
    }
}
