//! Error types.

use crate::graph::Term;

/// A resolution failure. Resolution stops at the first failure and returns
/// no model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// A required predicate is absent.
    #[error("{resource}: missing required attribute `{attribute}` ({expected})")]
    MissingRequiredAttribute {
        /// The resource being constructed.
        resource: String,
        /// The missing predicate.
        attribute: String,
        /// What the resource should have looked like.
        expected: String,
    },
    /// A `samm:dataType` (or equivalent) reference names neither a known
    /// scalar nor an Entity.
    #[error("{resource}: cannot resolve type {type_ref}")]
    UnresolvedType {
        /// The referencing resource.
        resource: String,
        /// The offending type reference.
        type_ref: String,
    },
    /// A literal does not parse against its datatype.
    #[error("{resource}: malformed literal {literal} ({expected})")]
    MalformedLiteral {
        /// The resource the literal belongs to.
        resource: String,
        /// The literal as written.
        literal: String,
        /// The expected lexical space.
        expected: String,
    },
    /// The resource's statements match no element kind.
    #[error("{resource}: unsupported shape, expected {expected}")]
    UnsupportedShape {
        /// The offending resource.
        resource: String,
        /// What was expected.
        expected: String,
    },
    /// Construction nested deeper than the configured ceiling.
    #[error("{resource}: recursion depth limit of {limit} exceeded")]
    RecursionLimitExceeded {
        /// The resource whose construction hit the limit.
        resource: String,
        /// The configured limit.
        limit: usize,
    },
    /// An element was referenced but its construction never finished.
    #[error("{resource}: element was referenced but never constructed")]
    Incomplete {
        /// The unfinished element.
        resource: String,
    },
}

impl ResolutionError {
    pub(crate) fn missing(resource: &Term, attribute: &str, expected: &str) -> Self {
        ResolutionError::MissingRequiredAttribute {
            resource: resource.to_string(),
            attribute: attribute.to_owned(),
            expected: expected.to_owned(),
        }
    }

    pub(crate) fn unresolved_type(resource: &Term, type_ref: &Term) -> Self {
        ResolutionError::UnresolvedType {
            resource: resource.to_string(),
            type_ref: type_ref.to_string(),
        }
    }

    pub(crate) fn malformed(resource: &Term, literal: &str, expected: &str) -> Self {
        ResolutionError::MalformedLiteral {
            resource: resource.to_string(),
            literal: literal.to_owned(),
            expected: expected.to_owned(),
        }
    }

    pub(crate) fn unsupported(resource: &Term, expected: impl Into<String>) -> Self {
        ResolutionError::UnsupportedShape {
            resource: resource.to_string(),
            expected: expected.into(),
        }
    }

    /// Returns the offending resource.
    #[must_use]
    pub fn resource(&self) -> &str {
        match self {
            ResolutionError::MissingRequiredAttribute { resource, .. }
            | ResolutionError::UnresolvedType { resource, .. }
            | ResolutionError::MalformedLiteral { resource, .. }
            | ResolutionError::UnsupportedShape { resource, .. }
            | ResolutionError::RecursionLimitExceeded { resource, .. }
            | ResolutionError::Incomplete { resource } => resource,
        }
    }
}

/// Result alias for resolution.
pub type Result<T, E = ResolutionError> = std::result::Result<T, E>;

/// A failure while loading a Turtle source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The document is not valid Turtle.
    #[error("{origin}: Turtle syntax error: {message}")]
    Syntax {
        /// Source name.
        origin: String,
        /// Parser message.
        message: String,
    },
    /// The document uses a term the triple graph cannot hold.
    #[error("{origin}: unsupported term {term}")]
    UnsupportedTerm {
        /// Source name.
        origin: String,
        /// The offending term.
        term: String,
    },
}
