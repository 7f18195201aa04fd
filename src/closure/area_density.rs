//! Interfacial area density from gradient alignment.
//!
//! The interface metric is the dot product of the vapor volume-fraction
//! gradient and the temperature gradient, restricted to the active spatial
//! dimensions:
//!
//! IM = ∇α_v · ∇T
//!
//! It is large where the interface is sharp and heat flows across it.
//! Gradients are reconstructed by the host and are expensive, so the
//! metric is computed once per cell per iteration and cached (see
//! [`crate::memory`]).

use crate::types::SpatialDim;

/// Interface metric model for the gradient closure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AreaDensityModel {
    dim: SpatialDim,
}

impl AreaDensityModel {
    /// Create a model for the given mesh dimensionality.
    pub fn new(dim: SpatialDim) -> Self {
        Self { dim }
    }

    /// Active dimensionality.
    pub fn dim(&self) -> SpatialDim {
        self.dim
    }

    /// Interface metric ∇α_v · ∇T.
    ///
    /// A zero vector on either side gives exactly `0.0`.
    #[inline]
    pub fn interface_metric(&self, grad_alpha_v: &[f64; 3], grad_t: &[f64; 3]) -> f64 {
        self.dim.dot(grad_alpha_v, grad_t)
    }
}
