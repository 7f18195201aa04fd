//! Strongly-typed cell index.
//!
//! The host solver owns mesh traversal; the closure only ever refers to a
//! cell through this index when it touches per-cell auxiliary memory.

use std::fmt;

/// Index of a fluid cell in the host mesh.
///
/// # Example
///
/// ```
/// use boil_rs::types::CellIndex;
///
/// let cell = CellIndex::new(42);
/// assert_eq!(cell.get(), 42);
/// assert_eq!(cell.to_string(), "C42");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CellIndex(usize);

impl CellIndex {
    /// First cell (0).
    pub const ZERO: Self = Self(0);

    /// Create a new index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Create an iterator over [0, n) cell indices.
    pub fn iter(n: usize) -> impl ExactSizeIterator<Item = CellIndex> {
        (0..n).map(CellIndex)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index() {
        let idx = CellIndex::new(42);
        assert_eq!(idx.get(), 42);
        assert_eq!(CellIndex::new(0), CellIndex::ZERO);
        assert!(CellIndex::new(3) < CellIndex::new(4));
    }

    #[test]
    fn test_cell_index_iter() {
        let indices: Vec<_> = CellIndex::iter(4).collect();
        assert_eq!(indices.len(), 4);
        assert_eq!(indices[0], CellIndex::ZERO);
        assert_eq!(indices[3].get(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CellIndex::new(9)), "C9");
    }
}
