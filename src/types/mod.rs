//! Strongly-typed domain types.
//!
//! - [`CellIndex`]: index of a host cell in auxiliary memory
//! - [`SpatialDim`]: number of active gradient components

mod dimension;
mod indices;

pub use dimension::SpatialDim;
pub use indices::CellIndex;
