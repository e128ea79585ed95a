//! Mangle polygon masks: parsing and spherical-cap containment.
//!
//! A mask is a union of polygons; each polygon is an intersection of caps. A point is contained
//! in the mask when at least one polygon contains it, whatever that polygon's weight.

pub(crate) mod parse;
pub mod polygon;
