//! Abstract source term interface.
//!
//! - [`PhaseChangeSource`]: per-cell, per-equation evaluation
//! - [`SourceContext`]: host run parameters
//! - [`SourceContribution`], [`CellSources`]: routed results

mod phase_change;

pub use phase_change::{CellSources, Equation, PhaseChangeSource, SourceContext, SourceContribution};
