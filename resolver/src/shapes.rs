//! Graph-level shape queries.
//!
//! These read statements only, never constructed elements, so they are safe
//! to call while the elements they ask about are still placeholders.

use std::collections::HashSet;

use crate::graph::Term;
use crate::lookup::Lookup;
use crate::vocabulary::{CharacteristicClass, ConstraintClass, Vocabulary};

/// The most specific characteristic class `resource` is typed with.
pub(crate) fn characteristic_class(
    lookup: Lookup<'_>,
    vocab: &Vocabulary,
    resource: &Term,
) -> Option<CharacteristicClass> {
    let types = lookup.types(resource);
    vocab
        .characteristic_classes()
        .into_iter()
        .find(|(class, _)| types.contains(class))
        .map(|(_, class)| class)
}

/// The most specific constraint class `resource` is typed with.
pub(crate) fn constraint_class(
    lookup: Lookup<'_>,
    vocab: &Vocabulary,
    resource: &Term,
) -> Option<ConstraintClass> {
    let types = lookup.types(resource);
    vocab
        .constraint_classes()
        .into_iter()
        .find(|(class, _)| types.contains(class))
        .map(|(_, class)| class)
}

/// Returns `Some(is_abstract)` if `resource` is an Entity or AbstractEntity.
pub(crate) fn complex_class(lookup: Lookup<'_>, vocab: &Vocabulary, resource: &Term) -> Option<bool> {
    if lookup.has_type(resource, &vocab.samm.abstract_entity) {
        Some(true)
    } else if lookup.has_type(resource, &vocab.samm.entity) {
        Some(false)
    } else {
        None
    }
}

/// The Entity a resource is an instance of, if any.
pub(crate) fn entity_type_of<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    resource: &Term,
) -> Option<&'r Term> {
    lookup
        .objects(resource, aspect_meta_model::iris::RDF_TYPE)
        .find(|t| lookup.has_type(t, &vocab.samm.entity))
}

/// The `samm:dataType` reference that applies to a characteristic resource:
/// its own, or the one of its Trait base or collection element
/// characteristic.
pub(crate) fn data_type_ref<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    characteristic: &Term,
) -> Option<&'r Term> {
    let mut seen = HashSet::new();
    let mut current = characteristic.clone();
    while seen.insert(current.clone()) {
        if let Some(data_type) = lookup.object(&current, &vocab.samm.data_type) {
            return Some(data_type);
        }
        let next = lookup
            .object(&current, &vocab.samm_c.base_characteristic)
            .or_else(|| lookup.object(&current, &vocab.samm_c.element_characteristic))?;
        current = next.clone();
    }
    None
}

/// The characteristic a Trait ultimately constrains.
fn untraited(lookup: Lookup<'_>, vocab: &Vocabulary, characteristic: &Term) -> Term {
    let mut seen = HashSet::new();
    let mut current = characteristic.clone();
    while seen.insert(current.clone()) {
        match lookup.object(&current, &vocab.samm_c.base_characteristic) {
            Some(base) if lookup.has_type(&current, &vocab.samm_c.trait_) => {
                current = base.clone();
            }
            _ => break,
        }
    }
    current
}

/// The named property a property reference stands for: the target of a
/// usage, the abstract property of a refinement, or the reference itself.
pub(crate) fn payload_property<'a>(
    lookup: Lookup<'a>,
    vocab: &Vocabulary,
    property: &'a Term,
) -> &'a Term {
    if property.is_blank() {
        if let Some(target) = lookup
            .object(property, &vocab.samm.property)
            .or_else(|| lookup.object(property, &vocab.samm.extends))
        {
            return target;
        }
    }
    property
}

/// The characteristic resource behind a property reference.
pub(crate) fn characteristic_of<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    property: &Term,
) -> Option<&'r Term> {
    lookup
        .object(property, &vocab.samm.characteristic)
        .or_else(|| {
            let target = payload_property(lookup, vocab, property);
            lookup.object(target, &vocab.samm.characteristic)
        })
}

/// Returns true if the property's characteristic, seen through any Trait,
/// is in the collection family.
pub(crate) fn has_collection_characteristic<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    property: &Term,
) -> bool {
    characteristic_of(lookup, vocab, property).is_some_and(|characteristic| {
        let effective = untraited(lookup, vocab, characteristic);
        matches!(
            characteristic_class(lookup, vocab, &effective),
            Some(CharacteristicClass::Collection(_))
        )
    })
}

/// The `samm:dataType` reference that applies to a property's values.
pub(crate) fn property_data_type<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    property: &Term,
) -> Option<&'r Term> {
    characteristic_of(lookup, vocab, property)
        .and_then(|characteristic| data_type_ref(lookup, vocab, characteristic))
}

/// The properties of a complex type, own first and then inherited through
/// `samm:extends`. An inherited property that an own property refines or
/// uses is dropped.
pub(crate) fn all_property_refs<'r>(
    lookup: Lookup<'r>,
    vocab: &Vocabulary,
    complex_type: &'r Term,
) -> crate::error::Result<Vec<&'r Term>> {
    let mut properties: Vec<&'r Term> = Vec::new();
    let mut payloads: HashSet<&'r Term> = HashSet::new();
    let mut visited = HashSet::new();
    let mut current = Some(complex_type);
    while let Some(ct) = current {
        if !visited.insert(ct) {
            break;
        }
        for property in lookup
            .list_of(ct, &vocab.samm.properties)?
            .unwrap_or_default()
        {
            if payloads.insert(payload_property(lookup, vocab, property)) {
                properties.push(property);
            }
        }
        current = lookup.object(ct, &vocab.samm.extends);
    }
    Ok(properties)
}
