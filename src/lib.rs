//! # boil-rs
//!
//! Phase-change closure for boiling in two-phase volume-of-fluid solvers.
//!
//! For every cell of the host mesh this crate computes the rate at which
//! liquid turns into vapor and adds it to the host's conservation equations
//! as explicit source terms:
//! - Nucleation site density correlation (pressure and wall superheat)
//! - Constant reference site density
//! - Interfacial-area closure from ∇α_v · ∇T, cached across passes
//! - Signed routing to vapor mass, liquid mass and energy
//! - Per-step aggregation and reporting of the transferred mass
//!
//! # Example
//!
//! ```
//! use boil_rs::{
//!     AuxiliaryCellMemory, CellState, ClosureParameters, ClosureStrategy, SourceContext,
//!     TransferAggregator, build_source, evaluate_cells,
//! };
//!
//! let source = build_source(ClosureStrategy::Correlation, ClosureParameters::water()).unwrap();
//! let ctx = SourceContext::default().with_operating_pressure(101_325.0);
//! let states = vec![CellState::new(0.3, 0.7, 375.0, 0.0); 4];
//!
//! let mut memory = AuxiliaryCellMemory::new(states.len());
//! let mut agg = TransferAggregator::new();
//! let sources = evaluate_cells(source.as_ref(), &ctx, &states, &mut memory, &mut agg).unwrap();
//!
//! assert!(sources.iter().all(|s| s.net_mass() == 0.0));
//! assert!(agg.end_of_step().has_transfer());
//! ```

pub mod closure;
pub mod equations;
pub mod error;
pub mod memory;
pub mod solver;
pub mod source;
pub mod types;

// Re-export main types for convenience
pub use closure::{
    AreaDensityModel, ClosureStrategy, NucleationDensityModel, PhaseChangeRateModel, TransferRate,
};
pub use equations::ClosureParameters;
pub use error::ClosureError;
pub use memory::{AuxiliaryCellMemory, CellCache, Slot};
pub use solver::{
    CellState, GradientAvailability, TransferAggregator, TransferReport, evaluate_cells,
    evaluate_equation, prepare_cells,
};
pub use source::{
    CellSources, Equation, InterfacialAreaSource, NucleateBoilingSource, PhaseChangeSource,
    SourceContext, SourceContribution, SourceTermRouter, build_source,
};
pub use types::{CellIndex, SpatialDim};

#[cfg(feature = "parallel")]
pub use solver::evaluate_cells_parallel;
