//! Serializers for resolved aspect models.
//!
//! - **JSON** ([`json`]): one node per element, references rendered as URNs
//!   or `_:`-prefixed synthetic names.

pub mod json;
