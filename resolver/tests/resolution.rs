//! End-to-end resolution: identity, cycles, usages and base attributes.

mod fixtures;

use aspect_meta_model::{
    iris, AspectId, CharacteristicKind, ElementRef, LiteralValue, MetaModelVersion, Scalar, Type,
    Value,
};
use aspect_model_resolver::{Resolver, Term};
use fixtures::{characteristic, property, resolve_aspects, urn};

fn xsd(local: &str) -> Type {
    Type::Scalar(Scalar::new(
        format!("{}{local}", iris::XSD),
        MetaModelVersion::V2_1_0,
    ))
}

#[test]
fn single_text_property_aspect() {
    let resolved = resolve_aspects(fixtures::MOVEMENT);
    let model = &resolved.model;
    assert_eq!(model.meta_model_version, MetaModelVersion::V2_1_0);

    let aspects: Vec<_> = model.aspects().collect();
    assert_eq!(aspects.len(), 1);
    let (_, aspect) = aspects[0];
    assert_eq!(aspect.properties.len(), 1);
    assert!(!aspect.is_collection_aspect);
    assert!(aspect.operations.is_empty());
    assert!(aspect.events.is_empty());

    let name = model.property(aspect.properties[0]);
    let text = model.characteristic(name.characteristic.expect("has a characteristic"));
    assert_eq!(text.base.urn.as_deref(), Some(
        "urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#Text"
    ));
    assert_eq!(text.data_type, Some(xsd("string")));
    assert_eq!(name.payload_name, "name");
    assert!(!name.optional);
    assert_eq!(
        name.example_value,
        Some(Value::Scalar(aspect_meta_model::ScalarValue {
            literal: LiteralValue::String("Vehicle 7".to_owned()),
            scalar_type: Scalar::new(iris::XSD_STRING, MetaModelVersion::V2_1_0),
        }))
    );
}

#[test]
fn base_attributes_are_read() {
    let resolved = resolve_aspects(fixtures::MOVEMENT);
    let (_, aspect) = resolved.model.aspects().next().expect("one aspect");
    let base = &aspect.base;
    assert_eq!(base.urn.as_deref(), Some(urn("Movement").as_str()));
    assert_eq!(base.name, "Movement");
    assert!(!base.has_synthetic_name);
    assert_eq!(base.preferred_name("en"), Some("movement"));
    assert_eq!(base.preferred_name("de"), Some("Bewegung"));
    assert_eq!(base.description("en"), Some("Aspect for movement information"));
    assert_eq!(base.see, vec!["https://example.org/movement".to_owned()]);
    assert_eq!(base.source.as_deref(), Some("fixture.ttl"));
    assert!(resolved.diagnostics.is_empty());
}

#[test]
fn shared_resources_resolve_once() {
    let resolved = resolve_aspects(fixtures::CONSTRAINTS);
    let model = &resolved.model;
    let pressure = characteristic(model, "Pressure");
    for trait_ in ["BoundedPressure", "FixedCode"] {
        match &model.characteristic(characteristic(model, trait_)).kind {
            CharacteristicKind::Trait {
                base_characteristic,
                ..
            } => assert_eq!(*base_characteristic, pressure),
            other => panic!("{trait_} is not a trait: {other:?}"),
        }
    }
    let pressures = model
        .elements()
        .characteristics
        .iter()
        .filter(|c| c.base.name == "Pressure")
        .count();
    assert_eq!(pressures, 1);
}

#[test]
fn every_shared_element_resolves_once() {
    let resolved = resolve_aspects(fixtures::SHARED);
    let model = &resolved.model;
    let aspects: Vec<_> = model.aspects().map(|(_, aspect)| aspect).collect();
    let [fleet, depot] = aspects[..] else {
        panic!("expected two aspects, found {}", aspects.len());
    };

    let speed = property(model, "speed");
    assert_eq!(fleet.properties[0], speed);
    assert_eq!(depot.properties[0], speed);
    assert_eq!(fleet.operations, depot.operations);
    assert_eq!(fleet.events, depot.events);
    let reset = model.operation(fleet.operations[0]);
    assert_eq!(reset.input, [speed]);
    assert_eq!(model.event(fleet.events[0]).parameters, [speed]);
    assert_eq!(reset.output, Some(property(model, "status")));

    let constraints = ["Speed", "TopSpeed"].map(|name| {
        match &model.characteristic(characteristic(model, name)).kind {
            CharacteristicKind::Trait { constraints, .. } => constraints.clone(),
            other => panic!("{name} is not a trait: {other:?}"),
        }
    });
    assert_eq!(constraints[0].len(), 1);
    assert_eq!(constraints[0], constraints[1]);

    let units = ["SpeedValue", "TopSpeedValue"].map(|name| {
        match &model.characteristic(characteristic(model, name)).kind {
            CharacteristicKind::Measurement { unit, .. } => *unit,
            other => panic!("{name} is not a measurement: {other:?}"),
        }
    });
    assert!(units[0].is_some());
    assert_eq!(units[0], units[1]);

    let values = ["Status", "LastStatus"].map(|name| {
        match &model.characteristic(characteristic(model, name)).kind {
            CharacteristicKind::Enumeration { values } => values.clone(),
            other => panic!("{name} is not an enumeration: {other:?}"),
        }
    });
    assert!(matches!(values[0][1], Value::Entity(_)));
    assert_eq!(values[0][1], values[1][0]);

    let elements = model.elements();
    assert_eq!(elements.units.len(), 1);
    assert_eq!(elements.constraints.len(), 1);
    assert_eq!(elements.entity_instances.len(), 2);
    assert_eq!(elements.operations.len(), 1);
    assert_eq!(elements.events.len(), 1);

    let mut urns: Vec<&str> = model
        .element_refs()
        .filter_map(|element| model.base(element).urn.as_deref())
        .collect();
    let total = urns.len();
    urns.sort_unstable();
    urns.dedup();
    assert_eq!(urns.len(), total, "an element was resolved twice");
}

#[test]
fn self_referencing_entity_terminates() {
    let resolved = resolve_aspects(fixtures::RECURSIVE);
    let model = &resolved.model;
    let root = model.property(property(model, "root"));
    let child = model.property(property(model, "child"));
    assert_eq!(root.characteristic, child.characteristic);

    let node_characteristic = characteristic(model, "NodeCharacteristic");
    let node = match model.data_type(node_characteristic) {
        Some(Type::Complex(id)) => *id,
        other => panic!("NodeCharacteristic has no entity type: {other:?}"),
    };
    let usage = model.complex_type(node).properties[1];
    let usage = model.property(usage);
    assert_eq!(usage.usage_of, Some(property(model, "child")));
    assert_eq!(usage.characteristic, Some(node_characteristic));
    assert!(usage.optional);
    assert_eq!(model.elements().complex_types.len(), 1);
}

#[test]
fn property_usage_decorates_named_property() {
    let resolved = resolve_aspects(fixtures::PROPERTIES);
    let model = &resolved.model;
    let (_, aspect) = model.aspects().next().expect("one aspect");
    let weight = property(model, "weight");
    let usage = model.property(aspect.properties[0]);

    assert_eq!(usage.usage_of, Some(weight));
    assert!(usage.optional);
    assert_eq!(usage.payload_name, "w");
    assert_eq!(usage.base.name, "weight");
    assert_eq!(usage.characteristic, model.property(weight).characteristic);
    assert!(!model.property(weight).optional);
    assert_eq!(model.lookup(&urn("weight")), Some(ElementRef::Property(weight)));
}

#[test]
fn anonymous_refinement_takes_abstract_name() {
    let resolved = resolve_aspects(fixtures::PROPERTIES);
    let model = &resolved.model;
    let label = property(model, "label");
    assert!(model.property(label).is_abstract);
    assert_eq!(model.property(label).characteristic, None);

    let parcel = fixtures::complex_type(model, "Parcel");
    let refinement = model.property(model.complex_type(parcel).properties[0]);
    assert_eq!(refinement.refines, Some(label));
    assert_eq!(refinement.base.name, "label");
    assert!(refinement.base.is_anonymous());
    assert!(!refinement.is_abstract);
    assert!(refinement.characteristic.is_some());
}

#[test]
fn independent_runs_do_not_share_elements() {
    let graph = fixtures::load(fixtures::SHARED);
    let resolver = Resolver::new(&graph, Default::default());
    let depot = [Term::iri(urn("Depot"))];
    resolver
        .resolve(&[Term::iri(urn("Fleet"))])
        .expect("resolves");
    let after_fleet = resolver.resolve(&depot).expect("resolves");

    // Identifiers restart at zero and nothing from the first run remains.
    assert_eq!(after_fleet.model.roots, [ElementRef::Aspect(AspectId::new(0))]);
    assert_eq!(after_fleet.model.lookup(&urn("Fleet")), None);
    assert_eq!(after_fleet.model.lookup(&urn("topSpeed")), None);
    assert_eq!(after_fleet.model.elements().aspects.len(), 1);

    let fresh = Resolver::new(&graph, Default::default())
        .resolve(&depot)
        .expect("resolves");
    assert_eq!(after_fleet.model.elements(), fresh.model.elements());
}
