//! Runtime diagnostics.
//!
//! - [`TransferAggregator`]: per-step phase-change totals and report
//! - [`GradientAvailability`]: check that the gradient closure can run

mod aggregator;
mod gradients;

pub use aggregator::{TransferAggregator, TransferReport};
pub use gradients::GradientAvailability;
