//! Identity cache and element arenas for one resolution run.
//!
//! Construction follows a register-then-fill discipline: an element's arena
//! slot and cache entry are created before any of its references are
//! resolved, so a reference back to an element under construction finds
//! the reserved id instead of recursing. The slot is filled when
//! construction finishes.

use std::collections::HashMap;

use aspect_meta_model::{
    Aspect, AspectId, Characteristic, CharacteristicId, ComplexType, ComplexTypeId, Constraint,
    ConstraintId, Elements, EntityInstance, EntityInstanceId, Event, EventId,
    Operation, OperationId, Property, PropertyId, QuantityKind, QuantityKindId, Unit, UnitId,
};

use crate::error::{ResolutionError, Result};
use crate::graph::Term;

/// The element families, one per arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Family {
    Aspect,
    Property,
    Characteristic,
    Constraint,
    ComplexType,
    Unit,
    QuantityKind,
    Operation,
    Event,
    EntityInstance,
}

/// Arena slots; `None` while the element is under construction.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    items: Vec<Option<T>>,
    resources: Vec<Term>,
}

impl<T> Default for Slots<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            resources: Vec::new(),
        }
    }
}

impl<T> Slots<T> {
    fn reserve(&mut self, resource: Term) -> usize {
        self.items.push(None);
        self.resources.push(resource);
        self.items.len() - 1
    }

    fn fill(&mut self, index: usize, element: T) {
        self.items[index] = Some(element);
    }

    /// Unwraps every slot, failing on the first one never filled.
    fn finish(self) -> Result<Vec<T>> {
        self.items
            .into_iter()
            .zip(self.resources)
            .map(|(item, resource)| {
                item.ok_or_else(|| ResolutionError::Incomplete {
                    resource: resource.to_string(),
                })
            })
            .collect()
    }
}

/// An element type stored in an [`Arena`].
pub(crate) trait Arenaed: Sized {
    type Id: Copy;
    const FAMILY: Family;

    fn slots(arena: &mut Arena) -> &mut Slots<Self>;
    fn id(index: usize) -> Self::Id;
    fn index(id: Self::Id) -> usize;
}

macro_rules! arenaed {
    ($($element:ty => $id:ident, $family:ident, $field:ident;)*) => {
        /// Per-family slots plus the identity cache.
        #[derive(Debug, Default)]
        pub(crate) struct Arena {
            cache: HashMap<(Family, Term), usize>,
            $($field: Slots<$element>,)*
        }

        $(
            impl Arenaed for $element {
                type Id = $id;
                const FAMILY: Family = Family::$family;

                fn slots(arena: &mut Arena) -> &mut Slots<Self> {
                    &mut arena.$field
                }

                fn id(index: usize) -> $id {
                    $id::new(index)
                }

                fn index(id: $id) -> usize {
                    id.index()
                }
            }
        )*

        impl Arena {
            /// Turns the filled arenas into the model's element tables.
            pub(crate) fn finish(self) -> Result<Elements> {
                Ok(Elements {
                    $($field: self.$field.finish()?,)*
                })
            }

            /// Number of reserved elements.
            pub(crate) fn len(&self) -> usize {
                0 $(+ self.$field.items.len())*
            }
        }
    };
}

arenaed! {
    Aspect => AspectId, Aspect, aspects;
    Property => PropertyId, Property, properties;
    Characteristic => CharacteristicId, Characteristic, characteristics;
    Constraint => ConstraintId, Constraint, constraints;
    ComplexType => ComplexTypeId, ComplexType, complex_types;
    Unit => UnitId, Unit, units;
    QuantityKind => QuantityKindId, QuantityKind, quantity_kinds;
    Operation => OperationId, Operation, operations;
    Event => EventId, Event, events;
    EntityInstance => EntityInstanceId, EntityInstance, entity_instances;
}

impl Arena {
    /// Returns the cached index of `(T, resource)`.
    pub(crate) fn lookup<T: Arenaed>(&self, resource: &Term) -> Option<T::Id> {
        self.cache
            .get(&(T::FAMILY, resource.clone()))
            .map(|&index| T::id(index))
    }

    /// Registers a placeholder for `resource` and returns its id.
    pub(crate) fn reserve<T: Arenaed>(&mut self, resource: &Term) -> T::Id {
        let index = T::slots(self).reserve(resource.clone());
        self.cache.insert((T::FAMILY, resource.clone()), index);
        T::id(index)
    }

    /// Finalizes the placeholder `id`.
    pub(crate) fn fill<T: Arenaed>(&mut self, id: T::Id, element: T) {
        T::slots(self).fill(T::index(id), element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_meta_model::{ElementBase, QuantityKind};

    #[test]
    fn placeholder_is_shared_until_filled() {
        let mut arena = Arena::default();
        let term = Term::iri("urn:x#velocity");
        let id = arena.reserve::<QuantityKind>(&term);
        assert_eq!(arena.lookup::<QuantityKind>(&term), Some(id));
        assert_eq!(arena.lookup::<Unit>(&term), None);
        arena.fill(
            id,
            QuantityKind {
                base: ElementBase::default(),
            },
        );
        assert_eq!(arena.len(), 1);
        let elements = arena.finish();
        assert!(elements.is_ok_and(|e| e.quantity_kinds.len() == 1));
    }

    #[test]
    fn unfilled_placeholder_is_incomplete() {
        let mut arena = Arena::default();
        arena.reserve::<QuantityKind>(&Term::iri("urn:x#velocity"));
        assert_eq!(
            arena.finish().err(),
            Some(ResolutionError::Incomplete {
                resource: "<urn:x#velocity>".to_owned()
            })
        );
    }
}
