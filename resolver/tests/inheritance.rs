//! Abstract entities and the extends relation.

mod fixtures;

use std::collections::BTreeSet;

use aspect_meta_model::{AspectModel, ComplexTypeId};
use fixtures::{complex_type, resolve_aspects};

fn extenders(model: &AspectModel, abstract_entity: ComplexTypeId) -> BTreeSet<String> {
    model
        .extending_elements(abstract_entity)
        .map(|(_, e)| e.base.name.clone())
        .collect()
}

/// Every `E.extends == A` is mirrored by `A.extending_elements ∋ E`, and
/// vice versa.
fn assert_consistent(model: &AspectModel) {
    for (index, complex) in model.elements().complex_types.iter().enumerate() {
        let id = ComplexTypeId::new(index);
        if let Some(general) = complex.extends {
            let general = model.complex_type(general);
            if general.is_abstract() {
                assert!(general.extending_elements().contains(&id));
            }
        }
        for extender in complex.extending_elements() {
            assert_eq!(model.complex_type(*extender).extends, Some(id));
        }
    }
}

#[test]
fn extenders_found_when_resolved_from_an_extender() {
    let resolved = resolve_aspects(fixtures::INHERITANCE_INNER_FIRST);
    let model = &resolved.model;
    let base = complex_type(model, "Base");
    assert!(model.complex_type(base).is_abstract());
    assert_eq!(
        extenders(model, base),
        BTreeSet::from(["Inner".to_owned(), "Other".to_owned()])
    );
    assert_consistent(model);
}

#[test]
fn extenders_found_when_resolved_from_the_abstract_entity() {
    let resolved = resolve_aspects(fixtures::INHERITANCE_BASE_FIRST);
    let model = &resolved.model;
    let base = complex_type(model, "Base");
    assert_eq!(
        extenders(model, base),
        BTreeSet::from(["Inner".to_owned(), "Other".to_owned()])
    );
    assert_eq!(model.complex_type(base).extending_elements().len(), 2);
    assert_consistent(model);
}

#[test]
fn inherited_properties_follow_own_properties() {
    let resolved = resolve_aspects(fixtures::INHERITANCE_INNER_FIRST);
    let model = &resolved.model;
    let inner = complex_type(model, "Inner");
    let names: Vec<_> = model
        .all_properties(inner)
        .into_iter()
        .map(|p| model.property(p).base.name.clone())
        .collect();
    assert_eq!(names, ["depth", "id"]);
    assert_eq!(
        model.complex_type(inner).extends,
        Some(complex_type(model, "Base"))
    );
}

#[test]
fn plain_entity_has_no_extenders() {
    let resolved = resolve_aspects(fixtures::INHERITANCE_INNER_FIRST);
    let model = &resolved.model;
    let other = complex_type(model, "Other");
    assert!(!model.complex_type(other).is_abstract());
    assert_eq!(model.extending_elements(other).count(), 0);
    assert!(model.complex_type(other).properties.is_empty());
}
