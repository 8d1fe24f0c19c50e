//! The model element factory: one entry point per element family.
//!
//! Every `resolve_*` method follows the same steps:
//!
//! 1. return the cached id if `(family, resource)` was seen before;
//! 2. determine the most specific kind from the resource's statements;
//! 3. reserve a placeholder id and cache it;
//! 4. build the element with the kind's instantiator, which re-enters the
//!    factory for every nested reference;
//! 5. fill the placeholder.
//!
//! Nesting, including nested list values, is bounded by
//! [`ResolverConfig::max_depth`].

use aspect_meta_model::{
    iris, AspectId, AspectModel, CharacteristicId, ComplexTypeId, ConstraintId, ElementBase,
    ElementRef, EntityInstanceId, EventId, Namespace, OperationId, PropertyId, QuantityKindId,
    UnitId,
};

use crate::attributes;
use crate::cache::{Arena, Arenaed};
use crate::config::ResolverConfig;
use crate::diagnostics::{Diagnostics, Severity};
use crate::error::{ResolutionError, Result};
use crate::graph::Term;
use crate::instantiator::{self, PropertyShape, UnitShape};
use crate::lookup::Lookup;
use crate::shapes;
use crate::vocabulary::{CharacteristicClass, ConstraintClass, Vocabulary};
use crate::ResolvedModel;

/// Builds elements for one resolution run. Owns the identity cache.
pub(crate) struct Factory<'r> {
    pub(crate) lookup: Lookup<'r>,
    pub(crate) vocab: &'r Vocabulary,
    config: &'r ResolverConfig,
    arena: Arena,
    diagnostics: Diagnostics,
    depth: usize,
}

impl<'r> Factory<'r> {
    pub(crate) fn new(lookup: Lookup<'r>, vocab: &'r Vocabulary, config: &'r ResolverConfig) -> Self {
        Self {
            lookup,
            vocab,
            config,
            arena: Arena::default(),
            diagnostics: Diagnostics::default(),
            depth: 0,
        }
    }

    /// Assembles the immutable model from the filled arenas.
    pub(crate) fn finish(
        self,
        roots: Vec<ElementRef>,
        namespace: Option<Namespace>,
    ) -> Result<ResolvedModel> {
        log::debug!("resolved {} elements", self.arena.len());
        let elements = self.arena.finish()?;
        Ok(ResolvedModel {
            model: AspectModel::new(self.vocab.version, elements, roots, namespace),
            diagnostics: self.diagnostics.into_vec(),
        })
    }

    /// Reads the base attributes of `resource`.
    pub(crate) fn base(&mut self, resource: &Term, label: &str) -> ElementBase {
        attributes::extract(self.lookup, self.vocab, &mut self.diagnostics, resource, label)
    }

    pub(crate) fn warn(&mut self, resource: &Term, message: String) {
        self.diagnostics
            .push(Severity::Warning, resource.to_string(), message);
    }

    pub(crate) fn info(&mut self, resource: &Term, message: String) {
        self.diagnostics
            .push(Severity::Info, resource.to_string(), message);
    }

    fn resolve_with<T, K>(
        &mut self,
        resource: &Term,
        classify: impl FnOnce(&Self, &Term) -> Result<K>,
        build: impl FnOnce(&mut Self, &Term, K, T::Id) -> Result<T>,
    ) -> Result<T::Id>
    where
        T: Arenaed,
    {
        if let Some(id) = self.arena.lookup::<T>(resource) {
            return Ok(id);
        }
        let kind = classify(self, resource)?;
        self.check_depth(resource)?;
        let id = self.arena.reserve::<T>(resource);
        log::trace!("{:>depth$}{:?} {resource}", "", T::FAMILY, depth = self.depth);
        self.depth += 1;
        let built = build(self, resource, kind, id);
        self.depth -= 1;
        self.arena.fill(id, built?);
        Ok(id)
    }

    fn check_depth(&self, resource: &Term) -> Result<()> {
        if self.depth >= self.config.max_depth {
            return Err(ResolutionError::RecursionLimitExceeded {
                resource: resource.to_string(),
                limit: self.config.max_depth,
            });
        }
        Ok(())
    }

    /// Runs `step` one nesting level below the current one. Used by
    /// recursive builders that produce no element, such as list values.
    pub(crate) fn nested<T>(
        &mut self,
        resource: &Term,
        step: impl FnOnce(&mut Self) -> Result<T>,
    ) -> Result<T> {
        self.check_depth(resource)?;
        self.depth += 1;
        let result = step(self);
        self.depth -= 1;
        result
    }

    pub(crate) fn resolve_aspect(&mut self, resource: &Term) -> Result<AspectId> {
        self.resolve_with(
            resource,
            |f, r| f.expect_type(r, &f.vocab.samm.aspect, "a samm:Aspect"),
            |f, r, (), _| instantiator::aspect::aspect(f, r),
        )
    }

    pub(crate) fn resolve_operation(&mut self, resource: &Term) -> Result<OperationId> {
        self.resolve_with(
            resource,
            |f, r| f.expect_type(r, &f.vocab.samm.operation, "a samm:Operation"),
            |f, r, (), _| instantiator::aspect::operation(f, r),
        )
    }

    pub(crate) fn resolve_event(&mut self, resource: &Term) -> Result<EventId> {
        self.resolve_with(
            resource,
            |f, r| f.expect_type(r, &f.vocab.samm.event, "a samm:Event"),
            |f, r, (), _| instantiator::aspect::event(f, r),
        )
    }

    pub(crate) fn resolve_property(&mut self, resource: &Term) -> Result<PropertyId> {
        self.resolve_with(
            resource,
            |f, r| f.property_shape(r),
            |f, r, shape, _| instantiator::property::property(f, r, shape),
        )
    }

    pub(crate) fn resolve_characteristic(&mut self, resource: &Term) -> Result<CharacteristicId> {
        self.resolve_with(
            resource,
            |f, r| f.characteristic_class(r),
            |f, r, class, _| instantiator::characteristic::characteristic(f, r, class),
        )
    }

    pub(crate) fn resolve_constraint(&mut self, resource: &Term) -> Result<ConstraintId> {
        self.resolve_with(
            resource,
            |f, r| f.constraint_class(r),
            |f, r, class, _| instantiator::constraint::constraint(f, r, class),
        )
    }

    /// Resolves an Entity or AbstractEntity; the resource's own type wins
    /// over the generic request.
    pub(crate) fn resolve_complex_type(&mut self, resource: &Term) -> Result<ComplexTypeId> {
        self.resolve_with(
            resource,
            |f, r| {
                shapes::complex_class(f.lookup, f.vocab, r)
                    .ok_or_else(|| ResolutionError::unsupported(r, "a samm:Entity or samm:AbstractEntity"))
            },
            instantiator::complex::complex_type,
        )
    }

    pub(crate) fn resolve_entity_instance(&mut self, resource: &Term) -> Result<EntityInstanceId> {
        self.resolve_with(
            resource,
            |f, r| {
                shapes::entity_type_of(f.lookup, f.vocab, r)
                    .ok_or_else(|| ResolutionError::unsupported(r, "an instance of a samm:Entity"))
            },
            |f, r, entity, _| instantiator::complex::entity_instance(f, r, entity),
        )
    }

    pub(crate) fn resolve_unit(&mut self, resource: &Term) -> Result<UnitId> {
        self.resolve_with(
            resource,
            |f, r| f.unit_shape(r, &f.vocab.samm.unit_class, "a samm:Unit"),
            |f, r, shape, _| instantiator::unit::unit(f, r, shape),
        )
    }

    pub(crate) fn resolve_quantity_kind(&mut self, resource: &Term) -> Result<QuantityKindId> {
        self.resolve_with(
            resource,
            |f, r| f.unit_shape(r, &f.vocab.samm.quantity_kind_class, "a samm:QuantityKind"),
            |f, r, shape, _| instantiator::unit::quantity_kind(f, r, shape),
        )
    }

    /// Resolves a resource of any family, chosen by its declared type.
    pub(crate) fn resolve_element(&mut self, resource: &Term) -> Result<ElementRef> {
        let vocab = self.vocab;
        let samm = &vocab.samm;
        let types = self.lookup.types(resource);
        let typed = |class: &str| types.contains(&class);
        if typed(&samm.aspect) {
            self.resolve_aspect(resource).map(ElementRef::Aspect)
        } else if typed(&samm.property_class) || typed(&samm.abstract_property) {
            self.resolve_property(resource).map(ElementRef::Property)
        } else if shapes::characteristic_class(self.lookup, self.vocab, resource).is_some() {
            self.resolve_characteristic(resource)
                .map(ElementRef::Characteristic)
        } else if shapes::constraint_class(self.lookup, self.vocab, resource).is_some() {
            self.resolve_constraint(resource).map(ElementRef::Constraint)
        } else if shapes::complex_class(self.lookup, self.vocab, resource).is_some() {
            self.resolve_complex_type(resource)
                .map(ElementRef::ComplexType)
        } else if typed(&samm.unit_class) {
            self.resolve_unit(resource).map(ElementRef::Unit)
        } else if typed(&samm.quantity_kind_class) {
            self.resolve_quantity_kind(resource)
                .map(ElementRef::QuantityKind)
        } else if typed(&samm.operation) {
            self.resolve_operation(resource).map(ElementRef::Operation)
        } else if typed(&samm.event) {
            self.resolve_event(resource).map(ElementRef::Event)
        } else if shapes::entity_type_of(self.lookup, self.vocab, resource).is_some() {
            self.resolve_entity_instance(resource)
                .map(ElementRef::EntityInstance)
        } else {
            Err(ResolutionError::unsupported(
                resource,
                "a resource typed with a meta-model element class",
            ))
        }
    }

    // Classification

    fn expect_type(&self, resource: &Term, class: &str, expected: &str) -> Result<()> {
        if self.lookup.has_type(resource, class) {
            Ok(())
        } else {
            Err(ResolutionError::unsupported(resource, expected))
        }
    }

    fn property_shape(&self, resource: &Term) -> Result<PropertyShape<'r>> {
        let samm = &self.vocab.samm;
        if self.lookup.has_type(resource, &samm.abstract_property) {
            return Ok(PropertyShape::Abstract);
        }
        if self.lookup.has_type(resource, &samm.property_class) {
            return Ok(PropertyShape::Named);
        }
        if resource.is_blank() {
            if let Some(target) = self.lookup.object(resource, &samm.property) {
                return Ok(PropertyShape::Usage(target));
            }
            if let Some(general) = self.lookup.object(resource, &samm.extends) {
                return Ok(PropertyShape::Refinement(general));
            }
        }
        Err(ResolutionError::unsupported(
            resource,
            "a samm:Property, a samm:AbstractProperty, or an anonymous node with samm:property or samm:extends",
        ))
    }

    fn characteristic_class(&self, resource: &Term) -> Result<CharacteristicClass> {
        shapes::characteristic_class(self.lookup, self.vocab, resource).ok_or_else(|| {
            if self.lookup.has_statements(resource) {
                ResolutionError::unsupported(resource, "a resource typed with a characteristic class")
            } else {
                ResolutionError::unsupported(resource, "a characteristic defined in the model")
            }
        })
    }

    fn constraint_class(&self, resource: &Term) -> Result<ConstraintClass> {
        shapes::constraint_class(self.lookup, self.vocab, resource)
            .ok_or_else(|| ResolutionError::unsupported(resource, "a resource typed with a constraint class"))
    }

    /// Typed resources are full definitions; untyped, statement-less IRIs in
    /// the unit catalog namespace resolve to bare elements.
    fn unit_shape(&self, resource: &Term, class: &str, expected: &str) -> Result<UnitShape> {
        if self.lookup.has_type(resource, class) {
            return Ok(UnitShape::Defined);
        }
        match resource.as_iri() {
            Some(iri)
                if self.vocab.is_unit_catalog_term(iri) && !self.lookup.has_statements(resource) =>
            {
                Ok(UnitShape::Bare)
            }
            _ => Err(ResolutionError::unsupported(resource, expected)),
        }
    }

    // Shared readers used by several instantiators

    /// Resolves every member of the list at `(subject, predicate)` as a
    /// property. A missing list is `MissingRequiredAttribute` when
    /// `required`, empty otherwise.
    pub(crate) fn property_list(
        &mut self,
        subject: &Term,
        predicate: &str,
        required: bool,
    ) -> Result<Vec<PropertyId>> {
        let members = match self.lookup.list_of(subject, predicate)? {
            Some(members) => members,
            None if required => {
                return Err(ResolutionError::missing(
                    subject,
                    predicate,
                    "an rdf:List of properties",
                ))
            }
            None => Vec::new(),
        };
        members
            .into_iter()
            .map(|member| self.resolve_property(member))
            .collect()
    }

    /// Returns the type IRI used in error messages for `resource`.
    pub(crate) fn describe(&self, resource: &Term) -> String {
        let types = self.lookup.types(resource);
        match types.first() {
            Some(class) => format!("{resource} a {}", iris::local_name(class)),
            None => resource.to_string(),
        }
    }
}
