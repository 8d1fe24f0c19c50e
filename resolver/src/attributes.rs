//! Base attributes shared by every element.

use std::collections::{BTreeMap, HashSet};
use std::sync::OnceLock;

use aspect_meta_model::{iris, ElementBase};
use regex::Regex;

use crate::diagnostics::{Diagnostics, Severity};
use crate::graph::Term;
use crate::lookup::Lookup;
use crate::vocabulary::Vocabulary;

const LANGUAGE_TAG_PATTERN: &str = "^[A-Za-z]{1,8}(-[A-Za-z0-9]{1,8})*$";

/// Nesting bound for the content digest of anonymous resources.
const DIGEST_DEPTH: usize = 8;

/// Returns true if `tag` has the shape of a BCP 47 language tag.
pub(crate) fn is_language_tag(tag: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(LANGUAGE_TAG_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(tag))
}

/// Reads urn, name, localized texts, `samm:see` and source of `subject`.
///
/// `label` prefixes the synthetic name of anonymous resources, e.g.
/// `AnonymousCharacteristic1f2e3d4c`.
pub(crate) fn extract(
    lookup: Lookup<'_>,
    vocab: &Vocabulary,
    diagnostics: &mut Diagnostics,
    subject: &Term,
    label: &str,
) -> ElementBase {
    let (urn, name, has_synthetic_name) = match subject {
        Term::Iri(iri) => (Some(iri.clone()), iris::local_name(iri).to_owned(), false),
        _ => (None, synthetic_name(lookup, subject, label), true),
    };
    ElementBase {
        urn,
        name,
        has_synthetic_name,
        preferred_names: localized(lookup, diagnostics, subject, &vocab.samm.preferred_name),
        descriptions: localized(lookup, diagnostics, subject, &vocab.samm.description),
        see: lookup
            .objects(subject, &vocab.samm.see)
            .map(|see| match see {
                Term::Iri(iri) => iri.clone(),
                Term::Literal(literal) => literal.lexical.clone(),
                Term::Blank(id) => id.clone(),
            })
            .collect(),
        source: lookup.origin(subject).map(str::to_owned),
    }
}

fn localized(
    lookup: Lookup<'_>,
    diagnostics: &mut Diagnostics,
    subject: &Term,
    predicate: &str,
) -> BTreeMap<String, String> {
    let mut texts = BTreeMap::new();
    let attribute = iris::local_name(predicate);
    for object in lookup.objects(subject, predicate) {
        let literal = match object.as_literal() {
            Some(literal) => literal,
            None => {
                diagnostics.push(
                    Severity::Warning,
                    subject.to_string(),
                    format!("{attribute} {object} is not a literal; dropped"),
                );
                continue;
            }
        };
        let language = match &literal.language {
            Some(tag) if is_language_tag(tag) => tag.to_ascii_lowercase(),
            Some(tag) => {
                diagnostics.push(
                    Severity::Warning,
                    subject.to_string(),
                    format!("{attribute} {object} has malformed language tag `{tag}`; dropped"),
                );
                continue;
            }
            None => {
                diagnostics.push(
                    Severity::Warning,
                    subject.to_string(),
                    format!("{attribute} {object} has no language tag; dropped"),
                );
                continue;
            }
        };
        if texts.contains_key(&language) {
            diagnostics.push(
                Severity::Warning,
                subject.to_string(),
                format!("duplicate {attribute} for language `{language}`; keeping the first"),
            );
            continue;
        }
        texts.insert(language, literal.lexical.clone());
    }
    texts
}

/// A deterministic name for an anonymous resource: the label plus the first
/// eight hex digits of a digest over the resource's statements.
///
/// The digest ignores blank node labels, so the name is stable across loads
/// of the same document. Anonymous resources with identical content share a
/// name but stay distinct elements.
pub(crate) fn synthetic_name(lookup: Lookup<'_>, subject: &Term, label: &str) -> String {
    let digest = content_digest(lookup, subject, &mut HashSet::new(), DIGEST_DEPTH);
    format!("Anonymous{label}{}", &digest[..8])
}

fn content_digest(
    lookup: Lookup<'_>,
    subject: &Term,
    visiting: &mut HashSet<Term>,
    depth: usize,
) -> String {
    visiting.insert(subject.clone());
    let mut lines: Vec<String> = lookup
        .statements(subject)
        .map(|(predicate, object)| {
            let object = match object {
                Term::Blank(_) if depth == 0 || visiting.contains(object) => "_:".to_owned(),
                Term::Blank(_) => {
                    format!("_:{}", content_digest(lookup, object, visiting, depth - 1))
                }
                other => other.to_string(),
            };
            format!("{predicate} {object}")
        })
        .collect();
    visiting.remove(subject);
    lines.sort();
    let mut hasher = blake3::Hasher::new();
    for line in &lines {
        hasher.update(line.as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphBuilder, TripleGraph};
    use aspect_meta_model::MetaModelVersion;

    fn vocab() -> Vocabulary {
        Vocabulary::new(MetaModelVersion::LATEST)
    }

    #[test]
    fn language_tags() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("de-DE"));
        assert!(is_language_tag("zh-Hant-TW"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("en_US"));
        assert!(!is_language_tag("toolonglanguage"));
    }

    #[test]
    fn named_resource_attributes() {
        let v = vocab();
        let s = Term::iri("urn:samm:org.example:1.0.0#speed");
        let graph = GraphBuilder::new()
            .source("speed.ttl")
            .triple(s.clone(), v.samm.preferred_name.as_str(), Term::lang_string("Speed", "en"))
            .triple(s.clone(), v.samm.preferred_name.as_str(), Term::lang_string("Tempo", "de"))
            .triple(s.clone(), v.samm.description.as_str(), Term::lang_string("How fast", "en"))
            .triple(s.clone(), v.samm.see.as_str(), Term::iri("https://example.org/speed"))
            .build();
        let mut diagnostics = Diagnostics::default();
        let base = extract(Lookup::new(&graph, None), &v, &mut diagnostics, &s, "Property");
        assert_eq!(base.urn.as_deref(), Some("urn:samm:org.example:1.0.0#speed"));
        assert_eq!(base.name, "speed");
        assert!(!base.has_synthetic_name);
        assert_eq!(base.preferred_name("de"), Some("Tempo"));
        assert_eq!(base.description("en"), Some("How fast"));
        assert_eq!(base.see, ["https://example.org/speed"]);
        assert_eq!(base.source.as_deref(), Some("speed.ttl"));
        assert!(diagnostics.into_vec().is_empty());
    }

    #[test]
    fn bad_locale_entries_are_dropped_with_diagnostic() {
        let v = vocab();
        let s = Term::iri("urn:samm:org.example:1.0.0#speed");
        let graph = GraphBuilder::new()
            .triple(s.clone(), v.samm.preferred_name.as_str(), Term::lang_string("Speed", "en"))
            .triple(
                s.clone(),
                v.samm.preferred_name.as_str(),
                Term::lang_string("Bad", "englishlanguage"),
            )
            .triple(s.clone(), v.samm.preferred_name.as_str(), Term::string("Untagged"))
            .triple(s.clone(), v.samm.preferred_name.as_str(), Term::lang_string("Again", "EN"))
            .build();
        let mut diagnostics = Diagnostics::default();
        let base = extract(Lookup::new(&graph, None), &v, &mut diagnostics, &s, "Property");
        assert_eq!(base.preferred_names.len(), 1);
        assert_eq!(base.preferred_name("en"), Some("Speed"));
        assert_eq!(diagnostics.into_vec().len(), 3);
    }

    #[test]
    fn synthetic_names_depend_on_content_not_labels() {
        let v = vocab();
        let one = GraphBuilder::new()
            .triple(Term::blank("a"), v.samm.data_type.as_str(), Term::iri(iris::XSD_STRING))
            .build();
        let two = GraphBuilder::new()
            .triple(Term::blank("zz"), v.samm.data_type.as_str(), Term::iri(iris::XSD_STRING))
            .build();
        let other = GraphBuilder::new()
            .triple(Term::blank("a"), v.samm.data_type.as_str(), Term::iri(iris::XSD_INT))
            .build();
        let name = |g: &TripleGraph, b: &str| {
            synthetic_name(Lookup::new(g, None), &Term::blank(b), "Characteristic")
        };
        assert_eq!(name(&one, "a"), name(&two, "zz"));
        assert_ne!(name(&one, "a"), name(&other, "a"));
        assert!(name(&one, "a").starts_with("AnonymousCharacteristic"));
        assert_eq!(name(&one, "a").len(), "AnonymousCharacteristic".len() + 8);
    }
}
