//! Upstream-to-entity transformations.

pub(crate) mod drug;
