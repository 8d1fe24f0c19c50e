//! Polymorphic dispatch over element kinds.
//!
//! [`Visitor`] has one method per concrete kind. Every method has a default
//! that falls back to the kind's family method (e.g. `visit_state` →
//! `visit_enumeration` → `visit_characteristic`), and every family method
//! falls back to [`Visitor::visit_base`], the only required method. A
//! visitor therefore implements just the kinds it cares about.
//!
//! ```
//! use aspect_meta_model::{AspectModel, ElementRef, Visitor};
//!
//! struct Names;
//!
//! impl Visitor<String> for Names {
//!     fn visit_base(&mut self, model: &AspectModel, element: ElementRef) -> String {
//!         model.base(element).name.clone()
//!     }
//! }
//! ```

use crate::characteristic::{CharacteristicKind, CollectionKind};
use crate::constraint::ConstraintKind;
use crate::model::{
    AspectId, AspectModel, CharacteristicId, ComplexTypeId, ComplexTypeKind, ConstraintId,
    ElementRef, EntityInstanceId, EventId, OperationId, PropertyId, QuantityKindId, UnitId,
};

/// A visitor over model elements, producing a `T` per element.
#[allow(unused_variables)]
pub trait Visitor<T> {
    /// Generic fallback for every element.
    fn visit_base(&mut self, model: &AspectModel, element: ElementRef) -> T;

    /// Visits an aspect.
    fn visit_aspect(&mut self, model: &AspectModel, id: AspectId) -> T {
        self.visit_base(model, ElementRef::Aspect(id))
    }

    /// Visits a property.
    fn visit_property(&mut self, model: &AspectModel, id: PropertyId) -> T {
        self.visit_base(model, ElementRef::Property(id))
    }

    /// Visits an operation.
    fn visit_operation(&mut self, model: &AspectModel, id: OperationId) -> T {
        self.visit_base(model, ElementRef::Operation(id))
    }

    /// Visits an event.
    fn visit_event(&mut self, model: &AspectModel, id: EventId) -> T {
        self.visit_base(model, ElementRef::Event(id))
    }

    /// Visits a unit.
    fn visit_unit(&mut self, model: &AspectModel, id: UnitId) -> T {
        self.visit_base(model, ElementRef::Unit(id))
    }

    /// Visits a quantity kind.
    fn visit_quantity_kind(&mut self, model: &AspectModel, id: QuantityKindId) -> T {
        self.visit_base(model, ElementRef::QuantityKind(id))
    }

    /// Visits an entity instance.
    fn visit_entity_instance(&mut self, model: &AspectModel, id: EntityInstanceId) -> T {
        self.visit_base(model, ElementRef::EntityInstance(id))
    }

    // Characteristics

    /// Family method for all characteristics; also visits plain ones.
    fn visit_characteristic(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_base(model, ElementRef::Characteristic(id))
    }

    /// Visits a Trait.
    fn visit_trait(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Family method for collections; also visits `samm-c:Collection`.
    fn visit_collection(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits a List.
    fn visit_list(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_collection(model, id)
    }

    /// Visits a Set.
    fn visit_set(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_collection(model, id)
    }

    /// Visits a SortedSet.
    fn visit_sorted_set(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_collection(model, id)
    }

    /// Visits a TimeSeries. Falls back to `visit_sorted_set`.
    fn visit_time_series(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_sorted_set(model, id)
    }

    /// Visits an Enumeration.
    fn visit_enumeration(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits a State. Falls back to `visit_enumeration`.
    fn visit_state(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_enumeration(model, id)
    }

    /// Visits a Quantifiable.
    fn visit_quantifiable(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits a Measurement. Falls back to `visit_quantifiable`.
    fn visit_measurement(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_quantifiable(model, id)
    }

    /// Visits a Duration. Falls back to `visit_quantifiable`.
    fn visit_duration(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_quantifiable(model, id)
    }

    /// Visits a SingleEntity.
    fn visit_single_entity(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits an Either.
    fn visit_either(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits a Code.
    fn visit_code(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    /// Visits a StructuredValue.
    fn visit_structured_value(&mut self, model: &AspectModel, id: CharacteristicId) -> T {
        self.visit_characteristic(model, id)
    }

    // Constraints

    /// Family method for all constraints; also visits generic ones.
    fn visit_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_base(model, ElementRef::Constraint(id))
    }

    /// Visits a RangeConstraint.
    fn visit_range_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits a LengthConstraint.
    fn visit_length_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits an EncodingConstraint.
    fn visit_encoding_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits a LanguageConstraint.
    fn visit_language_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits a LocaleConstraint.
    fn visit_locale_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits a RegularExpressionConstraint.
    fn visit_regular_expression_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    /// Visits a FixedPointConstraint.
    fn visit_fixed_point_constraint(&mut self, model: &AspectModel, id: ConstraintId) -> T {
        self.visit_constraint(model, id)
    }

    // Complex types

    /// Family method for entities and abstract entities.
    fn visit_complex_type(&mut self, model: &AspectModel, id: ComplexTypeId) -> T {
        self.visit_base(model, ElementRef::ComplexType(id))
    }

    /// Visits an Entity.
    fn visit_entity(&mut self, model: &AspectModel, id: ComplexTypeId) -> T {
        self.visit_complex_type(model, id)
    }

    /// Visits an AbstractEntity.
    fn visit_abstract_entity(&mut self, model: &AspectModel, id: ComplexTypeId) -> T {
        self.visit_complex_type(model, id)
    }
}

impl AspectModel {
    /// Dispatches `element` to the visitor method for its concrete kind.
    pub fn accept<T, V>(&self, element: ElementRef, visitor: &mut V) -> T
    where
        V: Visitor<T> + ?Sized,
    {
        match element {
            ElementRef::Aspect(id) => visitor.visit_aspect(self, id),
            ElementRef::Property(id) => visitor.visit_property(self, id),
            ElementRef::Operation(id) => visitor.visit_operation(self, id),
            ElementRef::Event(id) => visitor.visit_event(self, id),
            ElementRef::Unit(id) => visitor.visit_unit(self, id),
            ElementRef::QuantityKind(id) => visitor.visit_quantity_kind(self, id),
            ElementRef::EntityInstance(id) => visitor.visit_entity_instance(self, id),
            ElementRef::Characteristic(id) => match &self.characteristic(id).kind {
                CharacteristicKind::Plain => visitor.visit_characteristic(self, id),
                CharacteristicKind::Trait { .. } => visitor.visit_trait(self, id),
                CharacteristicKind::Collection { collection, .. } => match collection {
                    CollectionKind::Collection => visitor.visit_collection(self, id),
                    CollectionKind::List => visitor.visit_list(self, id),
                    CollectionKind::Set => visitor.visit_set(self, id),
                    CollectionKind::SortedSet => visitor.visit_sorted_set(self, id),
                    CollectionKind::TimeSeries => visitor.visit_time_series(self, id),
                },
                CharacteristicKind::Enumeration { .. } => visitor.visit_enumeration(self, id),
                CharacteristicKind::State { .. } => visitor.visit_state(self, id),
                CharacteristicKind::Quantifiable { .. } => visitor.visit_quantifiable(self, id),
                CharacteristicKind::Measurement { .. } => visitor.visit_measurement(self, id),
                CharacteristicKind::Duration { .. } => visitor.visit_duration(self, id),
                CharacteristicKind::SingleEntity => visitor.visit_single_entity(self, id),
                CharacteristicKind::Either { .. } => visitor.visit_either(self, id),
                CharacteristicKind::Code => visitor.visit_code(self, id),
                CharacteristicKind::StructuredValue { .. } => {
                    visitor.visit_structured_value(self, id)
                }
            },
            ElementRef::Constraint(id) => match &self.constraint(id).kind {
                ConstraintKind::Generic => visitor.visit_constraint(self, id),
                ConstraintKind::Range { .. } => visitor.visit_range_constraint(self, id),
                ConstraintKind::Length { .. } => visitor.visit_length_constraint(self, id),
                ConstraintKind::Encoding { .. } => visitor.visit_encoding_constraint(self, id),
                ConstraintKind::Language { .. } => visitor.visit_language_constraint(self, id),
                ConstraintKind::Locale { .. } => visitor.visit_locale_constraint(self, id),
                ConstraintKind::RegularExpression { .. } => {
                    visitor.visit_regular_expression_constraint(self, id)
                }
                ConstraintKind::FixedPoint { .. } => {
                    visitor.visit_fixed_point_constraint(self, id)
                }
            },
            ElementRef::ComplexType(id) => match self.complex_type(id).kind {
                ComplexTypeKind::Entity => visitor.visit_entity(self, id),
                ComplexTypeKind::AbstractEntity { .. } => visitor.visit_abstract_entity(self, id),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characteristic::Characteristic;
    use crate::model::{ElementBase, Elements};
    use crate::types::{MetaModelVersion, Scalar, Type};

    fn characteristic(kind: CharacteristicKind) -> Characteristic {
        Characteristic {
            base: ElementBase {
                name: kind.name().to_owned(),
                ..ElementBase::default()
            },
            data_type: Some(Type::Scalar(Scalar::new(
                crate::iris::XSD_STRING,
                MetaModelVersion::LATEST,
            ))),
            kind,
        }
    }

    struct Tagger;

    impl Visitor<&'static str> for Tagger {
        fn visit_base(&mut self, _: &AspectModel, _: ElementRef) -> &'static str {
            "base"
        }

        fn visit_characteristic(&mut self, _: &AspectModel, _: CharacteristicId) -> &'static str {
            "characteristic"
        }

        fn visit_enumeration(&mut self, _: &AspectModel, _: CharacteristicId) -> &'static str {
            "enumeration"
        }
    }

    #[test]
    fn dispatch_falls_back_through_family() {
        let elements = Elements {
            characteristics: vec![
                characteristic(CharacteristicKind::State {
                    values: vec![],
                    default_value: crate::value::Value::Collection(
                        crate::value::CollectionValue {
                            elements: vec![],
                            element_type: None,
                        },
                    ),
                }),
                characteristic(CharacteristicKind::Collection {
                    collection: CollectionKind::List,
                    element_characteristic: None,
                }),
                characteristic(CharacteristicKind::Code),
            ],
            ..Elements::default()
        };
        let model = AspectModel::new(MetaModelVersion::LATEST, elements, vec![], None);
        let mut tagger = Tagger;

        // State → Enumeration
        assert_eq!(
            model.accept(
                ElementRef::Characteristic(CharacteristicId::new(0)),
                &mut tagger
            ),
            "enumeration"
        );
        // List → Collection → Characteristic
        assert_eq!(
            model.accept(
                ElementRef::Characteristic(CharacteristicId::new(1)),
                &mut tagger
            ),
            "characteristic"
        );
        assert_eq!(
            model.accept(
                ElementRef::Characteristic(CharacteristicId::new(2)),
                &mut tagger
            ),
            "characteristic"
        );
    }
}
