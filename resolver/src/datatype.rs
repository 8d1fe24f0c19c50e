//! Type resolution: `samm:dataType` references to scalars or complex types.

use aspect_meta_model::{Scalar, Type};

use crate::error::{ResolutionError, Result};
use crate::factory::Factory;
use crate::graph::Term;
use crate::shapes;

/// Resolves `type_ref`, declared on `referrer`, to a scalar or a complex
/// type.
///
/// A scalar's identity is its datatype IRI plus the meta-model version. A
/// complex type is resolved through the factory, so it is shared with every
/// other reference to the same entity.
pub(crate) fn resolve_type(f: &mut Factory<'_>, referrer: &Term, type_ref: &Term) -> Result<Type> {
    if let Term::Iri(iri) = type_ref {
        if f.vocab.is_scalar_type(iri) {
            return Ok(Type::Scalar(Scalar::new(iri.as_str(), f.vocab.version)));
        }
    }
    if shapes::complex_class(f.lookup, f.vocab, type_ref).is_some() {
        return f.resolve_complex_type(type_ref).map(Type::Complex);
    }
    Err(ResolutionError::unresolved_type(referrer, type_ref))
}

/// Resolves the optional datatype reference of `referrer` at `predicate`.
pub(crate) fn resolve_optional_type(
    f: &mut Factory<'_>,
    referrer: &Term,
    predicate: &str,
) -> Result<Option<Type>> {
    match f.lookup.object(referrer, predicate) {
        Some(type_ref) => resolve_type(f, referrer, type_ref).map(Some),
        None => Ok(None),
    }
}
