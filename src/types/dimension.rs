//! Spatial dimensionality of the host mesh.

/// Number of active spatial components in gradient vectors.
///
/// Gradients are always stored as `[f64; 3]`; in 2-D runs the third
/// component is ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpatialDim {
    /// Planar or axisymmetric mesh: x and y components.
    Two,
    /// Full 3-D mesh: x, y and z components.
    #[default]
    Three,
}

impl SpatialDim {
    /// Number of active components.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            SpatialDim::Two => 2,
            SpatialDim::Three => 3,
        }
    }

    /// Dot product restricted to the active components.
    #[inline]
    pub fn dot(self, a: &[f64; 3], b: &[f64; 3]) -> f64 {
        a.iter()
            .zip(b.iter())
            .take(self.components())
            .map(|(x, y)| x * y)
            .sum()
    }
}
