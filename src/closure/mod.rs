//! Phase-change closure models.
//!
//! - [`NucleationDensityModel`]: site density from pressure and superheat
//! - [`AreaDensityModel`]: interface metric from ∇α_v · ∇T
//! - [`PhaseChangeRateModel`]: mass and energy rate for any [`ClosureStrategy`]

mod area_density;
mod nucleation;
mod rate;

pub use area_density::AreaDensityModel;
pub use nucleation::{NucleationDensityModel, pressure_exponent};
pub use rate::{ClosureStrategy, PhaseChangeRateModel, TransferRate};
