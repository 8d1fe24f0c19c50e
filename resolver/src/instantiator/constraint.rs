//! Constraints.

use std::collections::HashSet;

use aspect_meta_model::{iris, BoundDefinition, Constraint, ConstraintKind, ScalarValue};

use crate::attributes;
use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::Term;
use crate::lookup::Lookup;
use crate::shapes;
use crate::values;
use crate::vocabulary::ConstraintClass;

pub(crate) fn constraint(
    f: &mut Factory<'_>,
    resource: &Term,
    class: ConstraintClass,
) -> Result<Constraint> {
    let vocab = f.vocab;
    let c = &vocab.samm_c;
    let base = f.base(resource, class.label());
    let kind = match class {
        ConstraintClass::Generic => ConstraintKind::Generic,
        ConstraintClass::Range => {
            let min_value = bound_value(f, resource, &c.min_value)?;
            let max_value = bound_value(f, resource, &c.max_value)?;
            let lower_bound_definition = bound_definition(
                f,
                resource,
                &c.lower_bound_definition,
                min_value.is_some(),
                BoundDefinition::AtLeast,
            )?;
            let upper_bound_definition = bound_definition(
                f,
                resource,
                &c.upper_bound_definition,
                max_value.is_some(),
                BoundDefinition::AtMost,
            )?;
            ConstraintKind::Range {
                min_value,
                max_value,
                lower_bound_definition,
                upper_bound_definition,
            }
        }
        ConstraintClass::Length => ConstraintKind::Length {
            min_value: f.lookup.unsigned(resource, &c.min_value)?,
            max_value: f.lookup.unsigned(resource, &c.max_value)?,
        },
        ConstraintClass::Encoding => {
            let value = f
                .lookup
                .required(resource, &vocab.samm.value, "a character encoding")?;
            let charset = match value {
                Term::Iri(iri) => iris::local_name(iri).to_owned(),
                Term::Literal(literal) => literal.lexical.clone(),
                Term::Blank(_) => {
                    return Err(ResolutionError::unsupported(
                        value,
                        "a named character encoding",
                    ))
                }
            };
            ConstraintKind::Encoding { charset }
        }
        ConstraintClass::Language => ConstraintKind::Language {
            language_code: language_tag(f, resource, &c.language_code)?,
        },
        ConstraintClass::Locale => ConstraintKind::Locale {
            locale_code: language_tag(f, resource, &c.locale_code)?,
        },
        ConstraintClass::RegularExpression => ConstraintKind::RegularExpression {
            pattern: required_string(f, resource, &vocab.samm.value, "a regular expression")?,
        },
        ConstraintClass::FixedPoint => ConstraintKind::FixedPoint {
            scale: required_unsigned(f, resource, &c.scale)?,
            integer: required_unsigned(f, resource, &c.integer)?,
        },
    };
    Ok(Constraint { base, kind })
}

/// A range bound, typed by the datatype of the Trait the constraint is
/// attached to.
fn bound_value(f: &Factory<'_>, resource: &Term, predicate: &str) -> Result<Option<ScalarValue>> {
    let node = match f.lookup.object(resource, predicate) {
        Some(node) => node,
        None => return Ok(None),
    };
    let literal = node.as_literal().ok_or_else(|| {
        ResolutionError::unsupported(resource, format!("a literal as {predicate}, found {node}"))
    })?;
    let expected = owning_traits(f.lookup, &f.vocab.samm_c.constraint, resource)
        .into_iter()
        .find_map(|owner| shapes::data_type_ref(f.lookup, f.vocab, owner));
    values::scalar(f, resource, literal, expected)
}

/// Subjects of `(?, predicate, constraint)`, including owners that hold the
/// constraint as a member of an `rdf:List`.
fn owning_traits<'r>(lookup: Lookup<'r>, predicate: &str, constraint: &Term) -> Vec<&'r Term> {
    let mut owners = lookup.subjects(predicate, constraint);
    for cell in lookup.subjects(iris::RDF_FIRST, constraint) {
        let mut head = cell;
        let mut walked = HashSet::new();
        while walked.insert(head) {
            match lookup.subjects(iris::RDF_REST, head).into_iter().next() {
                Some(previous) => head = previous,
                None => break,
            }
        }
        owners.extend(lookup.subjects(predicate, head));
    }
    owners
}

/// An explicit bound marker, or the default: `inclusive` when the bound
/// value is present and OPEN otherwise.
fn bound_definition(
    f: &Factory<'_>,
    resource: &Term,
    predicate: &str,
    has_value: bool,
    inclusive: BoundDefinition,
) -> Result<BoundDefinition> {
    let marker = match f.lookup.object(resource, predicate) {
        None if has_value => return Ok(inclusive),
        None => return Ok(BoundDefinition::Open),
        Some(marker) => marker,
    };
    let name = match marker {
        Term::Iri(iri) => iris::local_name(iri),
        Term::Literal(literal) => literal.lexical.as_str(),
        Term::Blank(_) => "",
    };
    BoundDefinition::from_name(name).ok_or_else(|| {
        ResolutionError::unsupported(
            marker,
            format!("one of OPEN, AT_LEAST, GREATER_THAN, LESS_THAN, AT_MOST as {predicate}"),
        )
    })
}

/// A required language or locale tag. A tag of the wrong shape is kept as
/// written and reported.
fn language_tag(f: &mut Factory<'_>, resource: &Term, predicate: &str) -> Result<String> {
    let tag = required_string(f, resource, predicate, "a BCP 47 language tag")?;
    if !attributes::is_language_tag(&tag) {
        f.warn(
            resource,
            format!("`{tag}` is not a well-formed language tag"),
        );
    }
    Ok(tag)
}

fn required_string(
    f: &Factory<'_>,
    resource: &Term,
    predicate: &str,
    expected: &str,
) -> Result<String> {
    f.lookup
        .string(resource, predicate)?
        .ok_or_else(|| ResolutionError::missing(resource, predicate, expected))
}

fn required_unsigned(f: &Factory<'_>, resource: &Term, predicate: &str) -> Result<u64> {
    f.lookup
        .unsigned(resource, predicate)?
        .ok_or_else(|| ResolutionError::missing(resource, predicate, "a non-negative integer"))
}
