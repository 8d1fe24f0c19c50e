//! Entities, abstract entities and entity instances.

use std::collections::BTreeMap;

use aspect_meta_model::{ComplexType, ComplexTypeId, ComplexTypeKind, EntityInstance};

use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::Term;
use crate::shapes;
use crate::values;

/// Builds an Entity or AbstractEntity.
///
/// `extends` is resolved before the own properties. An abstract entity then
/// scans the graph for every complex type extending it; those already
/// under construction (including the one that led here) resolve to their
/// reserved ids, so the scan terminates and both sides of the relation
/// agree whatever the discovery order.
pub(crate) fn complex_type(
    f: &mut Factory<'_>,
    resource: &Term,
    is_abstract: bool,
    id: ComplexTypeId,
) -> Result<ComplexType> {
    let vocab = f.vocab;
    let samm = &vocab.samm;
    let base = f.base(resource, if is_abstract { "AbstractEntity" } else { "Entity" });
    let extends = match f.lookup.object(resource, &samm.extends) {
        Some(general) => Some(f.resolve_complex_type(general)?),
        None => None,
    };
    if extends == Some(id) {
        return Err(ResolutionError::unsupported(
            resource,
            "a complex type that does not extend itself",
        ));
    }
    let properties = f.property_list(resource, &samm.properties, true)?;
    let kind = if is_abstract {
        let mut extending_elements = Vec::new();
        for extender in f.lookup.subjects(&samm.extends, resource) {
            if shapes::complex_class(f.lookup, vocab, extender).is_none() {
                continue;
            }
            let extender = f.resolve_complex_type(extender)?;
            if !extending_elements.contains(&extender) {
                extending_elements.push(extender);
            }
        }
        log::debug!("{resource} is extended by {} complex types", extending_elements.len());
        ComplexTypeKind::AbstractEntity { extending_elements }
    } else {
        ComplexTypeKind::Entity
    };
    Ok(ComplexType {
        base,
        properties,
        extends,
        kind,
    })
}

/// Builds an instance of `entity`, asserting a value for each of the
/// entity's properties, own and inherited.
///
/// Assertions are keyed by the same property ids the entity lists. The
/// statement predicate is the named property behind each reference.
pub(crate) fn entity_instance<'r>(
    f: &mut Factory<'r>,
    resource: &Term,
    entity: &'r Term,
) -> Result<EntityInstance> {
    let vocab = f.vocab;
    let base = f.base(resource, "EntityInstance");
    let entity_type = f.resolve_complex_type(entity)?;
    let mut assertions = BTreeMap::new();
    for property in shapes::all_property_refs(f.lookup, vocab, entity)? {
        let id = f.resolve_property(property)?;
        let payload = shapes::payload_property(f.lookup, vocab, property);
        let predicate = payload.as_iri().ok_or_else(|| {
            ResolutionError::unsupported(property, "a property with a URN to assert a value for")
        })?;
        let node = match f.lookup.object(resource, predicate) {
            Some(node) => node,
            None if f.lookup.flag(property, &vocab.samm.optional)?
                || f.lookup.flag(property, &vocab.samm.not_in_payload)?
                || f.lookup.has_type(property, &vocab.samm.abstract_property) =>
            {
                continue
            }
            None => {
                return Err(ResolutionError::missing(
                    resource,
                    predicate,
                    "a value for every non-optional property of the entity",
                ))
            }
        };
        let expected = shapes::property_data_type(f.lookup, vocab, property);
        if let Some(value) = values::build_value(f, resource, node, expected)? {
            assertions.insert(id, value);
        }
    }
    Ok(EntityInstance {
        base,
        entity_type,
        assertions,
    })
}
