//! Per-cell intermediate results shared between evaluation passes.
//!
//! The gradient closure evaluates one cell in several passes within a
//! solver iteration:
//!
//! 1. interfacial-area pass: writes [`Slot::InterfaceMetric`]
//! 2. vapor-mass pass: reads the metric, writes [`Slot::PhaseSource`] and
//!    [`Slot::EnergySource`]
//! 3. liquid-mass and energy passes: read the cached sources
//!
//! Each slot is write-once/read-many per iteration. Every write is stamped
//! with the current iteration; a read of a slot not stamped in the current
//! iteration is an evaluation-order error, as is a second write.
//! [`AuxiliaryCellMemory::begin_iteration`] invalidates all slots at once
//! without touching the stored values.

use crate::error::ClosureError;
use crate::types::CellIndex;

/// Number of slots per cell.
pub const N_SLOTS: usize = 3;

/// Auxiliary slot of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Interface metric ∇α_v · ∇T
    InterfaceMetric = 0,
    /// Phase (mass) source magnitude ṁ
    PhaseSource = 1,
    /// Energy source magnitude
    EnergySource = 2,
}

impl Slot {
    /// All slots in storage order.
    pub const ALL: [Slot; N_SLOTS] = [Slot::InterfaceMetric, Slot::PhaseSource, Slot::EnergySource];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// Stored values and iteration stamps of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSlots {
    values: [f64; N_SLOTS],
    /// Iteration in which each slot was last written (0 = never)
    stamps: [u64; N_SLOTS],
}

/// Mutable view of one cell's slots during the current iteration.
#[derive(Debug)]
pub struct CellCache<'a> {
    cell: CellIndex,
    iteration: u64,
    slots: &'a mut CellSlots,
}

impl<'a> CellCache<'a> {
    fn new(cell: CellIndex, iteration: u64, slots: &'a mut CellSlots) -> Self {
        Self {
            cell,
            iteration,
            slots,
        }
    }

    /// Cell this view refers to.
    pub fn cell(&self) -> CellIndex {
        self.cell
    }

    /// Whether the slot holds a value from the current iteration.
    #[inline]
    pub fn is_written(&self, slot: Slot) -> bool {
        self.slots.stamps[slot.index()] == self.iteration
    }

    /// Store a value; fails if the slot was already written this iteration.
    pub fn write(&mut self, slot: Slot, value: f64) -> Result<(), ClosureError> {
        if self.is_written(slot) {
            return Err(ClosureError::SlotAlreadyWritten {
                cell: self.cell,
                slot,
                iteration: self.iteration,
            });
        }
        let i = slot.index();
        self.slots.values[i] = value;
        self.slots.stamps[i] = self.iteration;
        Ok(())
    }

    /// Read a value written earlier in this iteration.
    pub fn read(&self, slot: Slot) -> Result<f64, ClosureError> {
        if !self.is_written(slot) {
            return Err(ClosureError::SlotNotWritten {
                cell: self.cell,
                slot,
                iteration: self.iteration,
            });
        }
        Ok(self.slots.values[slot.index()])
    }
}

/// Auxiliary per-cell memory for one solver iteration.
///
/// # Example
///
/// ```
/// use boil_rs::memory::{AuxiliaryCellMemory, Slot};
/// use boil_rs::types::CellIndex;
///
/// let mut memory = AuxiliaryCellMemory::new(4);
/// let cell = CellIndex::new(2);
///
/// memory.cell(cell).unwrap().write(Slot::InterfaceMetric, 12.5).unwrap();
/// assert_eq!(memory.value(cell, Slot::InterfaceMetric).unwrap(), 12.5);
///
/// // Next iteration: the cached value is no longer readable
/// memory.begin_iteration();
/// assert!(memory.value(cell, Slot::InterfaceMetric).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct AuxiliaryCellMemory {
    cells: Vec<CellSlots>,
    iteration: u64,
}

impl AuxiliaryCellMemory {
    /// Allocate slots for `n_cells` cells, ready for the first iteration.
    pub fn new(n_cells: usize) -> Self {
        Self {
            cells: vec![CellSlots::default(); n_cells],
            iteration: 1,
        }
    }

    /// Number of cells covered.
    pub fn n_cells(&self) -> usize {
        self.cells.len()
    }

    /// Current iteration stamp.
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    /// Start a new solver iteration, invalidating every slot.
    pub fn begin_iteration(&mut self) {
        self.iteration += 1;
    }

    /// Mutable view of one cell's slots.
    pub fn cell(&mut self, cell: CellIndex) -> Result<CellCache<'_>, ClosureError> {
        let n_cells = self.cells.len();
        let iteration = self.iteration;
        let slots = self
            .cells
            .get_mut(cell.get())
            .ok_or(ClosureError::CellOutOfRange { cell, n_cells })?;
        Ok(CellCache::new(cell, iteration, slots))
    }

    /// Read one slot of one cell.
    pub fn value(&self, cell: CellIndex, slot: Slot) -> Result<f64, ClosureError> {
        let slots = self.cells.get(cell.get()).ok_or(ClosureError::CellOutOfRange {
            cell,
            n_cells: self.cells.len(),
        })?;
        if slots.stamps[slot.index()] != self.iteration {
            return Err(ClosureError::SlotNotWritten {
                cell,
                slot,
                iteration: self.iteration,
            });
        }
        Ok(slots.values[slot.index()])
    }

    /// Views of all cells in index order.
    pub fn cells_mut(&mut self) -> impl ExactSizeIterator<Item = CellCache<'_>> {
        let iteration = self.iteration;
        self.cells
            .iter_mut()
            .enumerate()
            .map(move |(i, slots)| CellCache::new(CellIndex::new(i), iteration, slots))
    }

    /// Parallel views of all cells.
    #[cfg(feature = "parallel")]
    pub fn par_cells_mut(
        &mut self,
    ) -> impl rayon::iter::IndexedParallelIterator<Item = CellCache<'_>> {
        use rayon::prelude::*;

        let iteration = self.iteration;
        self.cells
            .par_iter_mut()
            .enumerate()
            .map(move |(i, slots)| CellCache::new(CellIndex::new(i), iteration, slots))
    }
}
