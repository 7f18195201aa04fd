//! Host-facing evaluation layer.
//!
//! # Submodules
//!
//! - [`state`]: Cell state supplied by the host ([`CellState`])
//! - [`diagnostics`]: Per-step transfer totals and gradient availability
//! - [`evaluate`]: Batch drivers over all cells of one iteration

pub mod diagnostics;
pub mod evaluate;
pub mod state;

pub use diagnostics::{GradientAvailability, TransferAggregator, TransferReport};
pub use evaluate::{evaluate_cells, evaluate_equation, prepare_cells};
pub use state::CellState;

#[cfg(feature = "parallel")]
pub use evaluate::evaluate_cells_parallel;
