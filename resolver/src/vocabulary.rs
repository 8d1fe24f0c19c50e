//! Versioned meta-model vocabulary.
//!
//! Every term the resolver looks up is precomputed once per resolution from
//! the meta-model version, so instantiators compare plain strings.

use aspect_meta_model::characteristic::CollectionKind;
use aspect_meta_model::{iris, MetaModelVersion};

use crate::graph::TripleGraph;

macro_rules! terms {
    ($(#[$meta:meta])* $name:ident { $($field:ident = $local:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $(
                #[doc = concat!("`", $local, "`")]
                pub $field: String,
            )*
        }

        impl $name {
            fn new(namespace: &str) -> Self {
                Self {
                    $($field: format!("{namespace}{}", $local),)*
                }
            }
        }
    };
}

terms!(
    /// Core meta-model terms (`samm:`).
    Samm {
        aspect = "Aspect",
        property_class = "Property",
        abstract_property = "AbstractProperty",
        characteristic_class = "Characteristic",
        constraint_class = "Constraint",
        entity = "Entity",
        abstract_entity = "AbstractEntity",
        operation = "Operation",
        event = "Event",
        unit_class = "Unit",
        quantity_kind_class = "QuantityKind",
        curie = "curie",
        preferred_name = "preferredName",
        description = "description",
        see = "see",
        properties = "properties",
        operations = "operations",
        events = "events",
        property = "property",
        characteristic = "characteristic",
        data_type = "dataType",
        example_value = "exampleValue",
        optional = "optional",
        not_in_payload = "notInPayload",
        payload_name = "payloadName",
        extends = "extends",
        input = "input",
        output = "output",
        parameters = "parameters",
        value = "value",
        symbol = "symbol",
        common_code = "commonCode",
        reference_unit = "referenceUnit",
        conversion_factor = "conversionFactor",
        quantity_kind = "quantityKind",
    }
);

terms!(
    /// Characteristic and constraint terms (`samm-c:`).
    SammC {
        trait_ = "Trait",
        collection = "Collection",
        list = "List",
        set = "Set",
        sorted_set = "SortedSet",
        time_series = "TimeSeries",
        enumeration = "Enumeration",
        state = "State",
        quantifiable = "Quantifiable",
        measurement = "Measurement",
        duration = "Duration",
        single_entity = "SingleEntity",
        either = "Either",
        code = "Code",
        structured_value = "StructuredValue",
        range_constraint = "RangeConstraint",
        length_constraint = "LengthConstraint",
        encoding_constraint = "EncodingConstraint",
        language_constraint = "LanguageConstraint",
        locale_constraint = "LocaleConstraint",
        regular_expression_constraint = "RegularExpressionConstraint",
        fixed_point_constraint = "FixedPointConstraint",
        base_characteristic = "baseCharacteristic",
        constraint = "constraint",
        element_characteristic = "elementCharacteristic",
        values = "values",
        default_value = "defaultValue",
        unit = "unit",
        left = "left",
        right = "right",
        deconstruction_rule = "deconstructionRule",
        elements = "elements",
        min_value = "minValue",
        max_value = "maxValue",
        lower_bound_definition = "lowerBoundDefinition",
        upper_bound_definition = "upperBoundDefinition",
        language_code = "languageCode",
        locale_code = "localeCode",
        scale = "scale",
        integer = "integer",
        text = "Text",
        boolean = "Boolean",
        timestamp = "Timestamp",
        multi_language_text = "MultiLanguageText",
        locale = "Locale",
        language = "Language",
        unit_reference = "UnitReference",
        resource_path = "ResourcePath",
        mime_type = "MimeType",
    }
);

terms!(
    /// Shared entity terms (`samm-e:`).
    SammE {
        time_series_entity = "TimeSeriesEntity",
        timestamp = "timestamp",
        value = "value",
    }
);

/// Characteristic classes, as distinguished by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharacteristicClass {
    Plain,
    Trait,
    Collection(CollectionKind),
    Enumeration,
    State,
    Quantifiable,
    Measurement,
    Duration,
    SingleEntity,
    Either,
    Code,
    StructuredValue,
}

impl CharacteristicClass {
    pub(crate) fn label(self) -> &'static str {
        match self {
            CharacteristicClass::Plain => "Characteristic",
            CharacteristicClass::Trait => "Trait",
            CharacteristicClass::Collection(kind) => kind.name(),
            CharacteristicClass::Enumeration => "Enumeration",
            CharacteristicClass::State => "State",
            CharacteristicClass::Quantifiable => "Quantifiable",
            CharacteristicClass::Measurement => "Measurement",
            CharacteristicClass::Duration => "Duration",
            CharacteristicClass::SingleEntity => "SingleEntity",
            CharacteristicClass::Either => "Either",
            CharacteristicClass::Code => "Code",
            CharacteristicClass::StructuredValue => "StructuredValue",
        }
    }
}

/// Constraint classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConstraintClass {
    Generic,
    Range,
    Length,
    Encoding,
    Language,
    Locale,
    RegularExpression,
    FixedPoint,
}

impl ConstraintClass {
    pub(crate) fn label(self) -> &'static str {
        match self {
            ConstraintClass::Generic => "Constraint",
            ConstraintClass::Range => "RangeConstraint",
            ConstraintClass::Length => "LengthConstraint",
            ConstraintClass::Encoding => "EncodingConstraint",
            ConstraintClass::Language => "LanguageConstraint",
            ConstraintClass::Locale => "LocaleConstraint",
            ConstraintClass::RegularExpression => "RegularExpressionConstraint",
            ConstraintClass::FixedPoint => "FixedPointConstraint",
        }
    }
}

/// All terms of one meta-model version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// The version the terms belong to.
    pub version: MetaModelVersion,
    /// `samm:` terms.
    pub samm: Samm,
    /// `samm-c:` terms.
    pub samm_c: SammC,
    /// `samm-e:` terms.
    pub samm_e: SammE,
    /// The unit catalog namespace.
    pub unit_namespace: String,
}

impl Vocabulary {
    /// Builds the vocabulary of `version`.
    #[must_use]
    pub fn new(version: MetaModelVersion) -> Self {
        Self {
            version,
            samm: Samm::new(&version.samm_namespace()),
            samm_c: SammC::new(&version.characteristic_namespace()),
            samm_e: SammE::new(&version.entity_namespace()),
            unit_namespace: version.unit_namespace(),
        }
    }

    /// Characteristic classes, most specific first. A resource typed with
    /// several of them resolves to the first match.
    pub(crate) fn characteristic_classes(&self) -> [(&str, CharacteristicClass); 16] {
        let c = &self.samm_c;
        [
            (c.state.as_str(), CharacteristicClass::State),
            (c.enumeration.as_str(), CharacteristicClass::Enumeration),
            (c.measurement.as_str(), CharacteristicClass::Measurement),
            (c.duration.as_str(), CharacteristicClass::Duration),
            (c.quantifiable.as_str(), CharacteristicClass::Quantifiable),
            (
                c.time_series.as_str(),
                CharacteristicClass::Collection(CollectionKind::TimeSeries),
            ),
            (
                c.sorted_set.as_str(),
                CharacteristicClass::Collection(CollectionKind::SortedSet),
            ),
            (c.list.as_str(), CharacteristicClass::Collection(CollectionKind::List)),
            (c.set.as_str(), CharacteristicClass::Collection(CollectionKind::Set)),
            (
                c.collection.as_str(),
                CharacteristicClass::Collection(CollectionKind::Collection),
            ),
            (c.trait_.as_str(), CharacteristicClass::Trait),
            (c.single_entity.as_str(), CharacteristicClass::SingleEntity),
            (c.either.as_str(), CharacteristicClass::Either),
            (c.code.as_str(), CharacteristicClass::Code),
            (c.structured_value.as_str(), CharacteristicClass::StructuredValue),
            (self.samm.characteristic_class.as_str(), CharacteristicClass::Plain),
        ]
    }

    /// Constraint classes, concrete first.
    pub(crate) fn constraint_classes(&self) -> [(&str, ConstraintClass); 8] {
        let c = &self.samm_c;
        [
            (c.range_constraint.as_str(), ConstraintClass::Range),
            (c.length_constraint.as_str(), ConstraintClass::Length),
            (c.encoding_constraint.as_str(), ConstraintClass::Encoding),
            (c.language_constraint.as_str(), ConstraintClass::Language),
            (c.locale_constraint.as_str(), ConstraintClass::Locale),
            (
                c.regular_expression_constraint.as_str(),
                ConstraintClass::RegularExpression,
            ),
            (c.fixed_point_constraint.as_str(), ConstraintClass::FixedPoint),
            (self.samm.constraint_class.as_str(), ConstraintClass::Generic),
        ]
    }

    /// Returns true if `iri` names a class whose instances are model
    /// elements.
    #[must_use]
    pub fn is_element_class(&self, iri: &str) -> bool {
        let s = &self.samm;
        [
            &s.aspect,
            &s.property_class,
            &s.abstract_property,
            &s.entity,
            &s.abstract_entity,
            &s.operation,
            &s.event,
            &s.unit_class,
            &s.quantity_kind_class,
        ]
        .into_iter()
        .any(|class| class == iri)
            || self.characteristic_classes().iter().any(|(c, _)| *c == iri)
            || self.constraint_classes().iter().any(|(c, _)| *c == iri)
    }

    /// Returns true if `iri` names a datatype usable as a scalar.
    #[must_use]
    pub fn is_scalar_type(&self, iri: &str) -> bool {
        iris::XSD_SCALAR_TYPES.contains(&iri) || iri == iris::RDF_LANG_STRING || iri == self.samm.curie
    }

    /// Returns true if `iri` lies in the unit catalog namespace.
    #[must_use]
    pub fn is_unit_catalog_term(&self, iri: &str) -> bool {
        iri.starts_with(&self.unit_namespace)
    }
}

/// Detects the meta-model version from the first versioned `samm:`
/// namespace used in `graph`. Unsupported versions are skipped.
#[must_use]
pub fn detect_version(graph: &TripleGraph) -> Option<MetaModelVersion> {
    graph.triples().find_map(|t| {
        [t.predicate.as_str()]
            .into_iter()
            .chain(t.object.as_iri())
            .find_map(version_of)
    })
}

fn version_of(iri: &str) -> Option<MetaModelVersion> {
    let rest = iri.strip_prefix(iris::SAMM_META_MODEL)?;
    let (version, _) = rest.split_once('#')?;
    version.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, Term};

    #[test]
    fn terms_follow_version() {
        let vocab = Vocabulary::new(MetaModelVersion::V2_0_0);
        assert_eq!(
            vocab.samm.aspect,
            "urn:samm:org.eclipse.esmf.samm:meta-model:2.0.0#Aspect"
        );
        assert_eq!(
            vocab.samm_c.trait_,
            "urn:samm:org.eclipse.esmf.samm:characteristic:2.0.0#Trait"
        );
        assert_eq!(
            vocab.samm_e.time_series_entity,
            "urn:samm:org.eclipse.esmf.samm:entity:2.0.0#TimeSeriesEntity"
        );
        assert!(vocab.is_unit_catalog_term("urn:samm:org.eclipse.esmf.samm:unit:2.0.0#metre"));
    }

    #[test]
    fn state_is_matched_before_enumeration() {
        let vocab = Vocabulary::new(MetaModelVersion::LATEST);
        let classes = vocab.characteristic_classes();
        let state = classes.iter().position(|(_, c)| *c == CharacteristicClass::State);
        let enumeration = classes
            .iter()
            .position(|(_, c)| *c == CharacteristicClass::Enumeration);
        assert!(state < enumeration);
        assert!(vocab.is_element_class(&vocab.samm_c.time_series));
        assert!(!vocab.is_element_class(&vocab.samm_c.values));
    }

    #[test]
    fn scalar_types() {
        let vocab = Vocabulary::new(MetaModelVersion::LATEST);
        assert!(vocab.is_scalar_type(iris::XSD_DATE_TIME));
        assert!(vocab.is_scalar_type(iris::RDF_LANG_STRING));
        assert!(vocab.is_scalar_type(&vocab.samm.curie));
        assert!(!vocab.is_scalar_type("http://www.w3.org/2001/XMLSchema#NOTATION"));
    }

    #[test]
    fn version_is_detected_from_namespaces() {
        let graph = GraphBuilder::new()
            .triple(
                Term::iri("urn:samm:org.example:1.0.0#A"),
                iris::RDF_TYPE,
                Term::iri("urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#Aspect"),
            )
            .build();
        assert_eq!(detect_version(&graph), Some(MetaModelVersion::V2_1_0));
        assert_eq!(detect_version(&TripleGraph::new()), None);
    }

    #[test]
    fn unsupported_versions_are_ignored() {
        let graph = GraphBuilder::new()
            .triple(
                Term::iri("urn:samm:org.example:1.0.0#A"),
                iris::RDF_TYPE,
                Term::iri("urn:samm:org.eclipse.esmf.samm:meta-model:1.0.0#Aspect"),
            )
            .build();
        assert_eq!(detect_version(&graph), None);
    }
}
