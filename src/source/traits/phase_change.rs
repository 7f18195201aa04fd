//! Phase-change source term interface.
//!
//! The host evaluates one equation of one cell at a time and adds the
//! returned explicit value to that equation's right-hand side:
//!
//! ∂(α_v ρ_v)/∂t + ... = +ṁ
//! ∂(α_l ρ_l)/∂t + ... = -ṁ
//! ∂(ρE)/∂t + ...      = +ṁ·h_fg
//!
//! The implicit derivative ∂S/∂φ is always zero.

use crate::error::ClosureError;
use crate::memory::CellCache;
use crate::solver::{CellState, TransferAggregator};
use crate::types::SpatialDim;

/// Conservation equation receiving a contribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Equation {
    /// Vapor-phase continuity
    VaporMass,
    /// Liquid-phase continuity
    LiquidMass,
    /// Mixture energy
    Energy,
}

impl Equation {
    /// All equations in evaluation order.
    pub const ALL: [Equation; 3] = [Equation::VaporMass, Equation::LiquidMass, Equation::Energy];
}

/// Host run parameters shared by every cell of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceContext {
    /// Current simulation time (s)
    pub time: f64,
    /// Operating pressure added to the gauge cell pressure (host units)
    pub operating_pressure: f64,
    /// Active spatial dimensions of gradient vectors
    pub dim: SpatialDim,
}

impl Default for SourceContext {
    fn default() -> Self {
        Self {
            time: 0.0,
            operating_pressure: 0.0,
            dim: SpatialDim::Three,
        }
    }
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(time: f64, operating_pressure: f64, dim: SpatialDim) -> Self {
        Self {
            time,
            operating_pressure,
            dim,
        }
    }

    /// Set simulation time.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = time;
        self
    }

    /// Set operating pressure.
    pub fn with_operating_pressure(mut self, operating_pressure: f64) -> Self {
        self.operating_pressure = operating_pressure;
        self
    }

    /// Set mesh dimensionality.
    pub fn with_dim(mut self, dim: SpatialDim) -> Self {
        self.dim = dim;
        self
    }
}

/// Contribution of a source to one equation of one cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SourceContribution {
    /// Explicit source value added to the right-hand side
    pub explicit: f64,
    /// Implicit derivative ∂S/∂φ, always zero for this closure
    pub derivative: f64,
}

impl SourceContribution {
    /// No contribution.
    pub const ZERO: Self = Self {
        explicit: 0.0,
        derivative: 0.0,
    };

    /// Purely explicit contribution.
    #[inline]
    pub fn explicit(value: f64) -> Self {
        Self {
            explicit: value,
            derivative: 0.0,
        }
    }
}

/// Contributions of one cell to all three equations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSources {
    /// Vapor-mass contribution (+ṁ)
    pub vapor: SourceContribution,
    /// Liquid-mass contribution (-ṁ)
    pub liquid: SourceContribution,
    /// Energy contribution
    pub energy: SourceContribution,
}

impl CellSources {
    /// No contributions.
    pub const ZERO: Self = Self {
        vapor: SourceContribution::ZERO,
        liquid: SourceContribution::ZERO,
        energy: SourceContribution::ZERO,
    };

    /// Contribution to the given equation.
    pub fn get(&self, equation: Equation) -> SourceContribution {
        match equation {
            Equation::VaporMass => self.vapor,
            Equation::LiquidMass => self.liquid,
            Equation::Energy => self.energy,
        }
    }

    /// Net mass source of the cell (vapor + liquid).
    pub fn net_mass(&self) -> f64 {
        self.vapor.explicit + self.liquid.explicit
    }
}

/// Trait for phase-change source terms.
///
/// The host calls [`prepare`](Self::prepare) once per cell, then
/// [`evaluate`](Self::evaluate) for the vapor-mass equation, then for the
/// liquid-mass and energy equations, all within one iteration of `cache`.
/// Implementations that need no intermediate results ignore the cache and
/// tolerate any order.
///
/// The vapor-mass evaluation records the cell's rate in `aggregator`;
/// the other equations never do, so each cell is counted once.
///
/// Implementations must be thread-safe (`Send + Sync`) for parallel
/// evaluation.
pub trait PhaseChangeSource: Send + Sync {
    /// Name of this source for logging.
    fn name(&self) -> &'static str;

    /// Interfacial pass run before any equation of the cell.
    fn prepare(
        &self,
        _ctx: &SourceContext,
        _state: &CellState,
        _cache: &mut CellCache<'_>,
    ) -> Result<(), ClosureError> {
        Ok(())
    }

    /// Contribution to one equation of one cell.
    fn evaluate(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        equation: Equation,
        cache: &mut CellCache<'_>,
        aggregator: &mut TransferAggregator,
    ) -> Result<SourceContribution, ClosureError>;

    /// Contributions to all equations of one cell, in the required order.
    fn cell_sources(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        cache: &mut CellCache<'_>,
        aggregator: &mut TransferAggregator,
    ) -> Result<CellSources, ClosureError> {
        self.prepare(ctx, state, cache)?;
        Ok(CellSources {
            vapor: self.evaluate(ctx, state, Equation::VaporMass, cache, aggregator)?,
            liquid: self.evaluate(ctx, state, Equation::LiquidMass, cache, aggregator)?,
            energy: self.evaluate(ctx, state, Equation::Energy, cache, aggregator)?,
        })
    }
}
