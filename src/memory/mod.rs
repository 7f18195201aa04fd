//! Auxiliary per-cell memory for multi-pass closures.
//!
//! - [`AuxiliaryCellMemory`]: slot storage for all cells, one iteration at a time
//! - [`CellCache`]: write-once/read-many view of one cell
//! - [`Slot`]: interface metric, phase source, energy source

mod interface_cache;

pub use interface_cache::{AuxiliaryCellMemory, CellCache, CellSlots, N_SLOTS, Slot};
