//! Host-supplied cell state.

mod cell;

pub use cell::CellState;
