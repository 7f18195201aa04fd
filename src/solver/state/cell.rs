//! Per-cell state snapshot supplied by the host solver.
//!
//! A `CellState` is built fresh for every evaluation call and dropped
//! afterwards. The closure never stores it.

/// Local two-phase state of one cell.
///
/// Volume fractions are taken as given: `alpha_v + alpha_l = 1` is the
/// host's invariant and is not checked here.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellState {
    /// Vapor volume fraction α_v ∈ [0, 1]
    pub alpha_v: f64,
    /// Liquid volume fraction α_l ∈ [0, 1]
    pub alpha_l: f64,
    /// Mixture temperature T (K)
    pub temperature: f64,
    /// Mixture gauge pressure p (host units, typically Pa)
    pub pressure: f64,
    /// Gradient of the vapor volume fraction ∇α_v (1/m)
    pub grad_alpha_v: Option<[f64; 3]>,
    /// Gradient of the temperature ∇T (K/m)
    pub grad_t: Option<[f64; 3]>,
}

impl CellState {
    /// Create a state without gradients.
    #[inline]
    pub fn new(alpha_v: f64, alpha_l: f64, temperature: f64, pressure: f64) -> Self {
        Self {
            alpha_v,
            alpha_l,
            temperature,
            pressure,
            grad_alpha_v: None,
            grad_t: None,
        }
    }

    /// Attach reconstructed gradients of α_v and T.
    #[inline]
    pub fn with_gradients(mut self, grad_alpha_v: [f64; 3], grad_t: [f64; 3]) -> Self {
        self.grad_alpha_v = Some(grad_alpha_v);
        self.grad_t = Some(grad_t);
        self
    }

    /// Absolute pressure: gauge pressure plus the host's operating pressure.
    #[inline]
    pub fn absolute_pressure(&self, operating_pressure: f64) -> f64 {
        self.pressure + operating_pressure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_pressure() {
        let state = CellState::new(0.3, 0.7, 375.0, -1325.0);
        assert!((state.absolute_pressure(101_325.0) - 100_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_volume_fractions_not_normalized() {
        let state = CellState::new(0.6, 0.6, 375.0, 0.0);
        assert!((state.alpha_v + state.alpha_l - 1.2).abs() < 1e-14);
    }

    #[test]
    fn test_with_gradients_sets_both() {
        let state = CellState::new(0.3, 0.7, 375.0, 0.0)
            .with_gradients([1.0, 2.0, 3.0], [4.0, 5.0, 6.0]);
        assert_eq!(state.grad_alpha_v, Some([1.0, 2.0, 3.0]));
        assert_eq!(state.grad_t, Some([4.0, 5.0, 6.0]));
    }
}
