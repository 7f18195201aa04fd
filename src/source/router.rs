//! Routing of a cell's transfer rate to the conservation equations.
//!
//! | Equation    | Contribution |
//! |-------------|--------------|
//! | vapor mass  | +ṁ           |
//! | liquid mass | -ṁ           |
//! | energy      | +energy      |
//!
//! Vapor and liquid contributions are exact negations of the same value, so
//! their sum is exactly zero for every cell.

use crate::closure::TransferRate;

use super::{CellSources, Equation, SourceContribution};

/// Maps a [`TransferRate`] to signed explicit contributions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceTermRouter;

impl SourceTermRouter {
    /// Contribution of `rate` to `equation`.
    #[inline]
    pub fn route(rate: &TransferRate, equation: Equation) -> SourceContribution {
        let value = match equation {
            Equation::VaporMass => rate.m_dot,
            Equation::LiquidMass => -rate.m_dot,
            Equation::Energy => rate.energy,
        };
        SourceContribution::explicit(value)
    }

    /// Contributions of `rate` to every equation.
    #[inline]
    pub fn route_all(rate: &TransferRate) -> CellSources {
        CellSources {
            vapor: Self::route(rate, Equation::VaporMass),
            liquid: Self::route(rate, Equation::LiquidMass),
            energy: Self::route(rate, Equation::Energy),
        }
    }

    /// Implicit derivative ∂S/∂φ of any equation.
    #[inline]
    pub fn derivative(_equation: Equation) -> f64 {
        0.0
    }
}
