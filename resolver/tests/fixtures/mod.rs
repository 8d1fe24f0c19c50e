//! Aspect Model fixtures for resolution tests.
//!
//! Each constant holds a Turtle document against meta model 2.1.0 in the
//! `urn:samm:org.example:1.0.0#` namespace.

#![allow(dead_code)]

use aspect_meta_model::{
    AspectModel, CharacteristicId, ComplexTypeId, ConstraintId, ElementRef, PropertyId,
};
use aspect_model_resolver::{ResolvedModel, Resolver, ResolverConfig, TripleGraph};

mod collections;
mod constraints;
mod enumerations;
mod inheritance;
mod movement;
mod properties;
mod recursive;
mod shared;
mod units;

pub use collections::{COLLECTIONS, TWO_COLLECTIONS};
pub use constraints::CONSTRAINTS;
pub use enumerations::ENUMERATIONS;
pub use inheritance::{INHERITANCE_BASE_FIRST, INHERITANCE_INNER_FIRST};
pub use movement::MOVEMENT;
pub use properties::PROPERTIES;
pub use recursive::RECURSIVE;
pub use shared::SHARED;
pub use units::UNITS;

/// Prefixes shared by every fixture.
pub const PREFIXES: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix xsd:    <http://www.w3.org/2001/XMLSchema#> .
@prefix samm:   <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
@prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
@prefix samm-e: <urn:samm:org.eclipse.esmf.samm:entity:2.1.0#> .
@prefix unit:   <urn:samm:org.eclipse.esmf.samm:unit:2.1.0#> .
@prefix :       <urn:samm:org.example:1.0.0#> .
"#;

/// The example namespace.
pub const NS: &str = "urn:samm:org.example:1.0.0#";

/// Returns the URN of a local name in the example namespace.
pub fn urn(local: &str) -> String {
    format!("{NS}{local}")
}

/// Prepends [`PREFIXES`] to a document body.
pub fn document(body: &str) -> String {
    format!("{PREFIXES}{body}")
}

/// Parses a fixture body.
pub fn load(body: &str) -> TripleGraph {
    let mut graph = TripleGraph::new();
    graph
        .load_turtle(&document(body), "fixture.ttl")
        .expect("fixture parses");
    graph
}

/// Resolves every aspect of a fixture body with the default configuration.
pub fn resolve_aspects(body: &str) -> ResolvedModel {
    let graph = load(body);
    Resolver::new(&graph, ResolverConfig::default())
        .resolve_aspects()
        .expect("fixture resolves")
}

/// Resolves the whole namespace of a fixture body.
pub fn resolve_namespace(body: &str) -> ResolvedModel {
    let graph = load(body);
    Resolver::new(&graph, ResolverConfig::default())
        .resolve_namespace()
        .expect("fixture resolves")
}

/// The named property `local`.
pub fn property(model: &AspectModel, local: &str) -> PropertyId {
    match model.lookup(&urn(local)) {
        Some(ElementRef::Property(id)) => id,
        other => panic!("{local} is not a property: {other:?}"),
    }
}

/// The named characteristic `local`.
pub fn characteristic(model: &AspectModel, local: &str) -> CharacteristicId {
    match model.lookup(&urn(local)) {
        Some(ElementRef::Characteristic(id)) => id,
        other => panic!("{local} is not a characteristic: {other:?}"),
    }
}

/// The named constraint `local`.
pub fn constraint(model: &AspectModel, local: &str) -> ConstraintId {
    match model.lookup(&urn(local)) {
        Some(ElementRef::Constraint(id)) => id,
        other => panic!("{local} is not a constraint: {other:?}"),
    }
}

/// The named entity or abstract entity `local`.
pub fn complex_type(model: &AspectModel, local: &str) -> ComplexTypeId {
    match model.lookup(&urn(local)) {
        Some(ElementRef::ComplexType(id)) => id,
        other => panic!("{local} is not a complex type: {other:?}"),
    }
}
