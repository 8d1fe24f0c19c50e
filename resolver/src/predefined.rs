//! The meta model's predefined elements as a built-in graph.
//!
//! Models reference predefined characteristics such as `samm-c:Text` and the
//! shared `samm-e:TimeSeriesEntity` without defining them. The built-in graph
//! supplies their statements so they resolve through the regular
//! instantiators.

use aspect_meta_model::iris;

use crate::graph::{GraphBuilder, Term, TripleGraph};
use crate::vocabulary::Vocabulary;

/// Builds the statements of the predefined elements for `vocab`'s version.
pub(crate) fn builtin_graph(vocab: &Vocabulary) -> TripleGraph {
    let c = &vocab.samm_c;
    let s = &vocab.samm;
    let e = &vocab.samm_e;
    let characteristics = [
        (&c.text, iris::XSD_STRING),
        (&c.boolean, iris::XSD_BOOLEAN),
        (&c.timestamp, iris::XSD_DATE_TIME),
        (&c.multi_language_text, iris::RDF_LANG_STRING),
        (&c.locale, iris::XSD_STRING),
        (&c.language, iris::XSD_STRING),
        (&c.unit_reference, s.curie.as_str()),
        (&c.resource_path, iris::XSD_ANY_URI),
        (&c.mime_type, iris::XSD_STRING),
    ];

    let mut builder = GraphBuilder::new();
    for (characteristic, data_type) in characteristics {
        let subject = Term::iri(characteristic.as_str());
        builder = builder
            .triple(
                subject.clone(),
                iris::RDF_TYPE,
                Term::iri(s.characteristic_class.as_str()),
            )
            .triple(subject.clone(), s.data_type.as_str(), Term::iri(data_type))
            .triple(
                subject.clone(),
                s.preferred_name.as_str(),
                Term::lang_string(spaced(iris::local_name(characteristic)), "en"),
            );
    }

    let entity = Term::iri(e.time_series_entity.as_str());
    let timestamp = Term::iri(e.timestamp.as_str());
    let value = Term::iri(e.value.as_str());
    builder
        .triple(entity.clone(), iris::RDF_TYPE, Term::iri(s.abstract_entity.as_str()))
        .triple(
            entity.clone(),
            s.preferred_name.as_str(),
            Term::lang_string("Time Series Entity", "en"),
        )
        .list(entity, s.properties.as_str(), [timestamp.clone(), value.clone()])
        .triple(timestamp.clone(), iris::RDF_TYPE, Term::iri(s.property_class.as_str()))
        .triple(timestamp, s.characteristic.as_str(), Term::iri(c.timestamp.as_str()))
        .triple(value, iris::RDF_TYPE, Term::iri(s.abstract_property.as_str()))
        .build()
}

/// `MultiLanguageText` → `Multi Language Text`.
fn spaced(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}
