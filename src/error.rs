//! Error types for the phase-change closure.
//!
//! The closure arithmetic itself is infallible: out-of-domain states are
//! gated to a zero rate before any correlation is evaluated. Errors are
//! reserved for misuse of the call interface (bad parameters, broken
//! evaluation order, missing host data).

use thiserror::Error;

use crate::memory::Slot;
use crate::types::CellIndex;

/// Errors that can occur while configuring or evaluating the closure.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClosureError {
    /// A closure parameter is outside its physical range.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Cell index is not covered by the auxiliary memory.
    #[error("Cell {cell} out of range (memory holds {n_cells} cells)")]
    CellOutOfRange { cell: CellIndex, n_cells: usize },

    /// A cached slot was read before it was written in this iteration.
    #[error("Slot {slot:?} of cell {cell} read before it was written in iteration {iteration}")]
    SlotNotWritten {
        cell: CellIndex,
        slot: Slot,
        iteration: u64,
    },

    /// A cached slot was written twice in the same iteration.
    #[error("Slot {slot:?} of cell {cell} already written in iteration {iteration}")]
    SlotAlreadyWritten {
        cell: CellIndex,
        slot: Slot,
        iteration: u64,
    },

    /// The gradient closure needs a gradient the host did not supply.
    #[error("Cell {cell} has no {field} gradient")]
    MissingGradient { cell: CellIndex, field: &'static str },

    /// The gradient closure was asked for a rate without an interface metric.
    #[error("Gradient closure requires an interface metric")]
    MissingInterfaceMetric,

    /// Batch inputs disagree in length.
    #[error("Length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl ClosureError {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Whether this error is an evaluation-order violation on the cache.
    pub fn is_order_violation(&self) -> bool {
        matches!(
            self,
            Self::SlotNotWritten { .. } | Self::SlotAlreadyWritten { .. }
        )
    }
}
