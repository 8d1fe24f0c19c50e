//! Value building: literals and value resources to typed [`Value`]s.

use std::str::FromStr;

use aspect_meta_model::{iris, CollectionValue, LiteralValue, Scalar, ScalarValue, Type, Value};
use bigdecimal::BigDecimal;

use crate::datatype;
use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::{Literal, Term};
use crate::lexical;
use crate::shapes;

/// Builds the value at `node`, found on `owner`.
///
/// `expected` is the datatype reference that applies to the value, if
/// known. Plain `xsd:string` literals are reinterpreted against an expected
/// scalar type. Returns `Ok(None)` for a literal with an empty language tag.
pub(crate) fn build_value<'r>(
    f: &mut Factory<'r>,
    owner: &Term,
    node: &'r Term,
    expected: Option<&'r Term>,
) -> Result<Option<Value>> {
    match node {
        Term::Literal(literal) => Ok(scalar(f, owner, literal, expected)?.map(Value::Scalar)),
        _ if shapes::entity_type_of(f.lookup, f.vocab, node).is_some() => {
            f.resolve_entity_instance(node).map(|id| Some(Value::Entity(id)))
        }
        _ if f.lookup.is_list(node) => collection(f, owner, node, expected).map(Some),
        Term::Iri(iri) if accepts_iri(f, expected) => {
            let datatype = expected
                .and_then(Term::as_iri)
                .unwrap_or(iris::XSD_ANY_URI);
            Ok(Some(Value::Scalar(ScalarValue {
                literal: LiteralValue::Lexical(iri.clone()),
                scalar_type: Scalar::new(datatype, f.vocab.version),
            })))
        }
        _ => Err(ResolutionError::unsupported(
            node,
            format!(
                "a literal, an entity instance or an rdf:List as value of {}",
                f.describe(owner)
            ),
        )),
    }
}

/// Builds a scalar value; `Ok(None)` for an empty language tag.
pub(crate) fn scalar(
    f: &Factory<'_>,
    owner: &Term,
    literal: &Literal,
    expected: Option<&Term>,
) -> Result<Option<ScalarValue>> {
    if let Some(language) = &literal.language {
        if language.is_empty() {
            return Ok(None);
        }
        return Ok(Some(ScalarValue {
            literal: LiteralValue::LangString {
                text: literal.lexical.clone(),
                language: language.clone(),
            },
            scalar_type: Scalar::new(iris::RDF_LANG_STRING, f.vocab.version),
        }));
    }
    let datatype = match expected.and_then(Term::as_iri) {
        Some(expected)
            if literal.datatype == iris::XSD_STRING
                && expected != iris::RDF_LANG_STRING
                && f.vocab.is_scalar_type(expected) =>
        {
            expected
        }
        _ => literal.datatype.as_str(),
    };
    Ok(Some(ScalarValue {
        literal: parse_literal(owner, &literal.lexical, datatype)?,
        scalar_type: Scalar::new(datatype, f.vocab.version),
    }))
}

fn accepts_iri(f: &Factory<'_>, expected: Option<&Term>) -> bool {
    match expected.and_then(Term::as_iri) {
        None => true,
        Some(datatype) => datatype == iris::XSD_ANY_URI || datatype == f.vocab.samm.curie,
    }
}

fn collection<'r>(
    f: &mut Factory<'r>,
    owner: &Term,
    head: &'r Term,
    expected: Option<&'r Term>,
) -> Result<Value> {
    f.nested(head, |f| {
        let mut elements = Vec::new();
        for member in f.lookup.list(head)? {
            if let Some(value) = build_value(f, owner, member, expected)? {
                elements.push(value);
            }
        }
        let element_type = match expected {
            Some(type_ref) => Some(datatype::resolve_type(f, owner, type_ref)?),
            None => common_scalar_type(&elements),
        };
        Ok(Value::Collection(CollectionValue {
            elements,
            element_type,
        }))
    })
}

fn common_scalar_type(elements: &[Value]) -> Option<Type> {
    let mut types = elements.iter().map(|e| e.as_scalar().map(|s| &s.scalar_type));
    let first = types.next()??;
    types
        .all(|t| t == Some(first))
        .then(|| Type::Scalar(first.clone()))
}

/// Integer datatypes with their inclusive bounds.
const INTEGER_BOUNDS: &[(&str, i128, i128)] = &[
    (iris::XSD_BYTE, i8::MIN as i128, i8::MAX as i128),
    (iris::XSD_SHORT, i16::MIN as i128, i16::MAX as i128),
    (iris::XSD_INT, i32::MIN as i128, i32::MAX as i128),
    (iris::XSD_LONG, i64::MIN as i128, i64::MAX as i128),
    (iris::XSD_UNSIGNED_BYTE, 0, u8::MAX as i128),
    (iris::XSD_UNSIGNED_SHORT, 0, u16::MAX as i128),
    (iris::XSD_UNSIGNED_INT, 0, u32::MAX as i128),
    (iris::XSD_UNSIGNED_LONG, 0, u64::MAX as i128),
    (iris::XSD_POSITIVE_INTEGER, 1, i128::MAX),
    (iris::XSD_NON_NEGATIVE_INTEGER, 0, i128::MAX),
    (iris::XSD_NEGATIVE_INTEGER, i128::MIN, -1),
    (iris::XSD_NON_POSITIVE_INTEGER, i128::MIN, 0),
    (iris::XSD_INTEGER, i128::MIN, i128::MAX),
];

/// Parses `lexical` against `datatype`.
pub(crate) fn parse_literal(owner: &Term, lexical: &str, datatype: &str) -> Result<LiteralValue> {
    let malformed = || ResolutionError::malformed(owner, lexical, &format!("a valid {datatype}"));
    let trimmed = lexical.trim();
    if let Some((_, min, max)) = INTEGER_BOUNDS.iter().find(|(dt, _, _)| *dt == datatype) {
        let value: i128 = trimmed
            .strip_prefix('+')
            .unwrap_or(trimmed)
            .parse()
            .map_err(|_| malformed())?;
        return if (*min..=*max).contains(&value) {
            Ok(LiteralValue::Integer(value))
        } else {
            Err(malformed())
        };
    }
    match datatype {
        iris::XSD_STRING => Ok(LiteralValue::String(lexical.to_owned())),
        iris::XSD_BOOLEAN => match trimmed {
            "true" | "1" => Ok(LiteralValue::Boolean(true)),
            "false" | "0" => Ok(LiteralValue::Boolean(false)),
            _ => Err(malformed()),
        },
        iris::XSD_DECIMAL => BigDecimal::from_str(trimmed)
            .map(LiteralValue::Decimal)
            .map_err(|_| malformed()),
        iris::XSD_FLOAT | iris::XSD_DOUBLE => match trimmed {
            "INF" | "+INF" => Ok(LiteralValue::Float(f64::INFINITY)),
            "-INF" => Ok(LiteralValue::Float(f64::NEG_INFINITY)),
            "NaN" => Ok(LiteralValue::Float(f64::NAN)),
            // Rust also accepts "inf"/"nan", which XSD does not.
            _ if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
                Err(malformed())
            }
            _ => trimmed
                .parse()
                .map(LiteralValue::Float)
                .map_err(|_| malformed()),
        },
        _ if lexical::is_valid(datatype, lexical) => Ok(LiteralValue::Lexical(lexical.to_owned())),
        _ => Err(malformed()),
    }
}
