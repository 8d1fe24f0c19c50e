//! Per-family element construction.
//!
//! Each function builds one element from a resource's statements once the
//! factory has classified it and reserved its id. Nested references go back
//! through the factory, so shared resources resolve to shared ids.

pub(crate) mod aspect;
pub(crate) mod characteristic;
pub(crate) mod complex;
pub(crate) mod constraint;
pub(crate) mod property;
pub(crate) mod unit;

use crate::graph::Term;

/// The ways a resource can stand for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PropertyShape<'r> {
    /// A `samm:Property`.
    Named,
    /// A `samm:AbstractProperty`.
    Abstract,
    /// An anonymous node decorating the named property it points to.
    Usage(&'r Term),
    /// An anonymous node refining an abstract property.
    Refinement(&'r Term),
}

/// Units and quantity kinds are either defined in a graph or referenced
/// bare from the unit catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UnitShape {
    Defined,
    Bare,
}
