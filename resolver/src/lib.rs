//! Aspect Model resolution: from a triple graph to a typed element graph.
//!
//! The `aspect-model-resolver` crate turns the statements of an Aspect Model
//! into an [`AspectModel`]: every resource becomes exactly one element,
//! shared by every reference to it, and cyclic structures (an entity whose
//! property's characteristic refers back to the entity, an abstract entity
//! listing its extenders) resolve without unbounded recursion.
//!
//! # Entry Point
//!
//! ```
//! use aspect_model_resolver::{Resolver, ResolverConfig, TripleGraph};
//!
//! let turtle = r#"
//! @prefix samm: <urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#> .
//! @prefix samm-c: <urn:samm:org.eclipse.esmf.samm:characteristic:2.1.0#> .
//! @prefix : <urn:samm:org.example:1.0.0#> .
//!
//! :Movement a samm:Aspect ;
//!    samm:properties ( :speed ) ;
//!    samm:operations ( ) ;
//!    samm:events ( ) .
//!
//! :speed a samm:Property ;
//!    samm:characteristic samm-c:Text .
//! "#;
//!
//! let mut graph = TripleGraph::new();
//! graph.load_turtle(turtle, "movement.ttl").unwrap();
//! let resolver = Resolver::new(&graph, ResolverConfig::default());
//! let resolved = resolver.resolve_aspects().unwrap();
//! let (_, aspect) = resolved.model.aspects().next().unwrap();
//! assert_eq!(aspect.base.name, "Movement");
//! assert_eq!(aspect.properties.len(), 1);
//! ```
//!
//! # Failures and diagnostics
//!
//! Resolution either returns a complete model or the first
//! [`ResolutionError`]; it never returns a partial model. Recoverable
//! findings, such as a preferred name with a malformed language tag, are
//! returned as [`Diagnostic`]s next to the model and mirrored to the `log`
//! facade.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod attributes;
mod cache;
pub mod config;
mod datatype;
pub mod diagnostics;
pub mod error;
mod factory;
pub mod graph;
mod instantiator;
mod lexical;
mod lookup;
mod predefined;
mod shapes;
mod values;
pub mod vocabulary;

use aspect_meta_model::{iris, AspectModel, ElementRef, MetaModelVersion, Namespace};

pub use config::{ResolverConfig, DEFAULT_MAX_DEPTH};
pub use diagnostics::{Diagnostic, Severity};
pub use error::{LoadError, ResolutionError, Result};
pub use graph::{GraphBuilder, GraphError, ListError, Literal, Term, Triple, TripleGraph};
pub use vocabulary::{detect_version, Vocabulary};

use crate::factory::Factory;
use crate::lookup::Lookup;
use crate::shapes::entity_type_of;

/// A resolved model plus the recoverable findings collected on the way.
#[derive(Debug, Clone)]
pub struct ResolvedModel {
    /// The element graph.
    pub model: AspectModel,
    /// Diagnostics, in the order they were found.
    pub diagnostics: Vec<Diagnostic>,
}

/// Resolves elements of one triple graph.
///
/// Every `resolve*` call is an independent run with its own identity cache:
/// elements are shared within one returned model, never across models.
#[derive(Debug)]
pub struct Resolver<'g> {
    graph: &'g TripleGraph,
    builtin: Option<TripleGraph>,
    vocab: Vocabulary,
    config: ResolverConfig,
}

impl<'g> Resolver<'g> {
    /// Prepares resolution of `graph`.
    ///
    /// The meta-model version is taken from `config` if set, else detected
    /// from the graph, else the latest supported version.
    #[must_use]
    pub fn new(graph: &'g TripleGraph, config: ResolverConfig) -> Self {
        let version = config
            .meta_model_version
            .or_else(|| detect_version(graph))
            .unwrap_or(MetaModelVersion::LATEST);
        log::debug!("resolving against meta model {}", version.as_str());
        let vocab = Vocabulary::new(version);
        let builtin = config
            .predefined_characteristics
            .then(|| predefined::builtin_graph(&vocab));
        Self {
            graph,
            builtin,
            vocab,
            config,
        }
    }

    /// The meta-model version in use.
    #[must_use]
    pub fn meta_model_version(&self) -> MetaModelVersion {
        self.vocab.version
    }

    /// The vocabulary of the meta-model version in use.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }

    fn factory(&self) -> Factory<'_> {
        Factory::new(
            Lookup::new(self.graph, self.builtin.as_ref()),
            &self.vocab,
            &self.config,
        )
    }

    /// Resolves `roots` and everything reachable from them. Each root is
    /// resolved as the element kind its declared type names.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolutionError`] met; no model is returned then.
    pub fn resolve(&self, roots: &[Term]) -> Result<ResolvedModel> {
        let mut factory = self.factory();
        let roots = roots
            .iter()
            .map(|root| factory.resolve_element(root))
            .collect::<Result<Vec<_>>>()?;
        factory.finish(roots, None)
    }

    /// Resolves every `samm:Aspect` defined in the graph, in graph order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolutionError`] met.
    pub fn resolve_aspects(&self) -> Result<ResolvedModel> {
        let aspect = Term::iri(self.vocab.samm.aspect.as_str());
        let roots: Vec<Term> = self
            .graph
            .subjects(iris::RDF_TYPE, &aspect)
            .cloned()
            .collect();
        self.resolve(&roots)
    }

    /// Resolves every named top-level element of the graph, i.e. every IRI
    /// subject typed with a meta-model element class or with an Entity, and
    /// exposes them as the model's [`Namespace`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ResolutionError`] met.
    pub fn resolve_namespace(&self) -> Result<ResolvedModel> {
        let lookup = Lookup::new(self.graph, self.builtin.as_ref());
        let members: Vec<&Term> = self
            .graph
            .subject_terms()
            .filter(|subject| subject.as_iri().is_some())
            .filter(|subject| {
                lookup
                    .types(subject)
                    .iter()
                    .any(|class| self.vocab.is_element_class(class))
                    || entity_type_of(lookup, &self.vocab, subject).is_some()
            })
            .collect();
        let urn_prefix = members
            .first()
            .and_then(|first| first.as_iri())
            .and_then(iris::namespace_of)
            .unwrap_or_default()
            .to_owned();

        let mut factory = self.factory();
        let elements = members
            .into_iter()
            .map(|member| factory.resolve_element(member))
            .collect::<Result<Vec<ElementRef>>>()?;
        log::debug!("namespace {urn_prefix} has {} elements", elements.len());
        let namespace = Namespace {
            urn_prefix,
            elements: elements.clone(),
        };
        factory.finish(elements, Some(namespace))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aspect_meta_model::{CharacteristicKind, Type};

    fn ex(local: &str) -> Term {
        Term::iri(format!("urn:samm:org.example:1.0.0#{local}"))
    }

    fn vocab() -> Vocabulary {
        Vocabulary::new(MetaModelVersion::LATEST)
    }

    fn aspect_with_text_property(v: &Vocabulary) -> TripleGraph {
        GraphBuilder::new()
            .triple(ex("Movement"), iris::RDF_TYPE, Term::iri(v.samm.aspect.as_str()))
            .list(ex("Movement"), v.samm.properties.as_str(), [ex("name")])
            .triple(ex("name"), iris::RDF_TYPE, Term::iri(v.samm.property_class.as_str()))
            .triple(
                ex("name"),
                v.samm.characteristic.as_str(),
                Term::iri(v.samm_c.text.as_str()),
            )
            .build()
    }

    #[test]
    fn resolves_predefined_characteristic_from_builtin_graph() {
        let v = vocab();
        let graph = aspect_with_text_property(&v);
        let resolver = Resolver::new(&graph, ResolverConfig::default());
        let model = resolver.resolve(&[ex("Movement")]).expect("resolves").model;
        let (_, aspect) = model.aspects().next().unwrap();
        assert!(!aspect.is_collection_aspect);
        let property = model.property(aspect.properties[0]);
        let characteristic = model.characteristic(property.characteristic.unwrap());
        assert_eq!(characteristic.kind, CharacteristicKind::Plain);
        assert_eq!(characteristic.base.name, "Text");
        assert_eq!(
            characteristic.data_type,
            Some(Type::Scalar(aspect_meta_model::Scalar::new(
                iris::XSD_STRING,
                MetaModelVersion::LATEST
            )))
        );
    }

    #[test]
    fn predefined_characteristics_can_be_disabled() {
        let v = vocab();
        let graph = aspect_with_text_property(&v);
        let config = ResolverConfig::default().with_predefined_characteristics(false);
        let resolver = Resolver::new(&graph, config);
        let err = resolver.resolve(&[ex("Movement")]).err();
        assert!(matches!(err, Some(ResolutionError::UnsupportedShape { .. })));
    }

    #[test]
    fn unknown_root_is_unsupported() {
        let graph = TripleGraph::new();
        let resolver = Resolver::new(&graph, ResolverConfig::default());
        assert!(matches!(
            resolver.resolve(&[ex("Nothing")]),
            Err(ResolutionError::UnsupportedShape { .. })
        ));
    }

    #[test]
    fn version_comes_from_config_then_graph() {
        let graph = TripleGraph::new();
        let resolver = Resolver::new(&graph, ResolverConfig::default());
        assert_eq!(resolver.meta_model_version(), MetaModelVersion::LATEST);
        let forced = ResolverConfig::default().with_meta_model_version(MetaModelVersion::V2_0_0);
        let resolver = Resolver::new(&graph, forced);
        assert_eq!(resolver.meta_model_version(), MetaModelVersion::V2_0_0);
    }
}
