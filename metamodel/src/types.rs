//! Data types: meta-model versions, scalars and the scalar/complex split.

use std::fmt;
use std::str::FromStr;

use crate::iris;
use crate::model::ComplexTypeId;

/// A released version of the Aspect Meta Model.
///
/// The version selects the namespaces of the `samm`, `samm-c`, `samm-e` and
/// `unit` vocabularies and is part of every [`Scalar`]'s identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaModelVersion {
    /// `2.0.0`.
    #[cfg_attr(feature = "serde", serde(rename = "2.0.0"))]
    V2_0_0,
    /// `2.1.0`.
    #[cfg_attr(feature = "serde", serde(rename = "2.1.0"))]
    V2_1_0,
    /// `2.2.0`.
    #[cfg_attr(feature = "serde", serde(rename = "2.2.0"))]
    V2_2_0,
}

impl MetaModelVersion {
    /// All supported versions, oldest first.
    pub const ALL: [MetaModelVersion; 3] = [
        MetaModelVersion::V2_0_0,
        MetaModelVersion::V2_1_0,
        MetaModelVersion::V2_2_0,
    ];

    /// The newest supported version.
    pub const LATEST: MetaModelVersion = MetaModelVersion::V2_2_0;

    /// Returns the dotted version string, e.g. `"2.1.0"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MetaModelVersion::V2_0_0 => "2.0.0",
            MetaModelVersion::V2_1_0 => "2.1.0",
            MetaModelVersion::V2_2_0 => "2.2.0",
        }
    }

    /// Returns the core meta-model namespace for this version,
    /// e.g. `urn:samm:org.eclipse.esmf.samm:meta-model:2.1.0#`.
    #[must_use]
    pub fn samm_namespace(self) -> String {
        format!("{}{}#", iris::SAMM_META_MODEL, self.as_str())
    }

    /// Returns the characteristic/constraint namespace for this version.
    #[must_use]
    pub fn characteristic_namespace(self) -> String {
        format!("{}{}#", iris::SAMM_CHARACTERISTIC, self.as_str())
    }

    /// Returns the shared entity namespace for this version.
    #[must_use]
    pub fn entity_namespace(self) -> String {
        format!("{}{}#", iris::SAMM_ENTITY, self.as_str())
    }

    /// Returns the unit catalog namespace for this version.
    #[must_use]
    pub fn unit_namespace(self) -> String {
        format!("{}{}#", iris::SAMM_UNIT, self.as_str())
    }
}

impl Default for MetaModelVersion {
    fn default() -> Self {
        MetaModelVersion::LATEST
    }
}

impl fmt::Display for MetaModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported meta-model version.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported meta model version `{0}` (supported: 2.0.0, 2.1.0, 2.2.0)")]
pub struct UnknownVersion(pub String);

impl FromStr for MetaModelVersion {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MetaModelVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownVersion(s.to_owned()))
    }
}

/// A scalar datatype, identified by its datatype IRI and meta-model version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Scalar {
    /// Datatype IRI, e.g. `http://www.w3.org/2001/XMLSchema#string`.
    pub urn: String,
    /// Meta-model version the scalar was resolved against.
    pub meta_model_version: MetaModelVersion,
}

impl Scalar {
    /// Creates a scalar for the given datatype IRI.
    pub fn new(urn: impl Into<String>, meta_model_version: MetaModelVersion) -> Self {
        Self {
            urn: urn.into(),
            meta_model_version,
        }
    }

    /// Returns the datatype's local name, e.g. `"string"`.
    #[must_use]
    pub fn name(&self) -> &str {
        iris::local_name(&self.urn)
    }
}

/// The resolved target of a `samm:dataType` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Type {
    /// A scalar datatype.
    Scalar(Scalar),
    /// An Entity or AbstractEntity.
    Complex(ComplexTypeId),
}

impl Type {
    /// Returns the scalar if this is a scalar type.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Type::Scalar(scalar) => Some(scalar),
            Type::Complex(_) => None,
        }
    }

    /// Returns the complex type id if this is a complex type.
    #[must_use]
    pub fn as_complex(&self) -> Option<ComplexTypeId> {
        match self {
            Type::Scalar(_) => None,
            Type::Complex(id) => Some(*id),
        }
    }

    /// Returns true for scalar types.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Type::Scalar(_))
    }
}
