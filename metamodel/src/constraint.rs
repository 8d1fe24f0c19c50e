//! Constraints attached to characteristics through a Trait.

use crate::model::ElementBase;
use crate::value::ScalarValue;

/// A resolved Constraint.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Constraint {
    /// Base attributes.
    pub base: ElementBase,
    /// The concrete constraint class and its attributes.
    pub kind: ConstraintKind,
}

/// The concrete constraint classes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ConstraintKind {
    /// `samm:Constraint` with no class-specific attributes.
    Generic,
    /// `samm-c:RangeConstraint`.
    Range {
        /// Lower bound value.
        min_value: Option<ScalarValue>,
        /// Upper bound value.
        max_value: Option<ScalarValue>,
        /// How the lower bound is interpreted.
        lower_bound_definition: BoundDefinition,
        /// How the upper bound is interpreted.
        upper_bound_definition: BoundDefinition,
    },
    /// `samm-c:LengthConstraint`.
    Length {
        /// Minimum length.
        min_value: Option<u64>,
        /// Maximum length.
        max_value: Option<u64>,
    },
    /// `samm-c:EncodingConstraint`.
    Encoding {
        /// Character set name, e.g. `UTF-8`.
        charset: String,
    },
    /// `samm-c:LanguageConstraint`.
    Language {
        /// ISO 639-1 language code.
        language_code: String,
    },
    /// `samm-c:LocaleConstraint`.
    Locale {
        /// BCP 47 locale code.
        locale_code: String,
    },
    /// `samm-c:RegularExpressionConstraint`.
    RegularExpression {
        /// The regular expression.
        pattern: String,
    },
    /// `samm-c:FixedPointConstraint`.
    FixedPoint {
        /// Digits after the decimal point.
        scale: u64,
        /// Digits before the decimal point.
        integer: u64,
    },
}

impl ConstraintKind {
    /// Returns the meta-model class name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ConstraintKind::Generic => "Constraint",
            ConstraintKind::Range { .. } => "RangeConstraint",
            ConstraintKind::Length { .. } => "LengthConstraint",
            ConstraintKind::Encoding { .. } => "EncodingConstraint",
            ConstraintKind::Language { .. } => "LanguageConstraint",
            ConstraintKind::Locale { .. } => "LocaleConstraint",
            ConstraintKind::RegularExpression { .. } => "RegularExpressionConstraint",
            ConstraintKind::FixedPoint { .. } => "FixedPointConstraint",
        }
    }
}

/// Interpretation of one side of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoundDefinition {
    /// No bound on this side.
    Open,
    /// Value must be greater than or equal to the bound.
    AtLeast,
    /// Value must be strictly greater than the bound.
    GreaterThan,
    /// Value must be strictly less than the bound.
    LessThan,
    /// Value must be less than or equal to the bound.
    AtMost,
}

impl BoundDefinition {
    /// Returns the meta-model individual name, e.g. `AT_LEAST`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            BoundDefinition::Open => "OPEN",
            BoundDefinition::AtLeast => "AT_LEAST",
            BoundDefinition::GreaterThan => "GREATER_THAN",
            BoundDefinition::LessThan => "LESS_THAN",
            BoundDefinition::AtMost => "AT_MOST",
        }
    }

    /// Parses a meta-model individual name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "OPEN" => Some(BoundDefinition::Open),
            "AT_LEAST" => Some(BoundDefinition::AtLeast),
            "GREATER_THAN" => Some(BoundDefinition::GreaterThan),
            "LESS_THAN" => Some(BoundDefinition::LessThan),
            "AT_MOST" => Some(BoundDefinition::AtMost),
            _ => None,
        }
    }
}
