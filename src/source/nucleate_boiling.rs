//! Nucleate-boiling source term.
//!
//! Drives evaporation from the nucleation site density of the local
//! pressure and superheat (or a constant reference density). The rate is a
//! pure function of the cell state, so every equation can be evaluated
//! independently and in any order; no auxiliary memory is used.

use crate::closure::{ClosureStrategy, PhaseChangeRateModel, TransferRate};
use crate::equations::ClosureParameters;
use crate::error::ClosureError;
use crate::memory::CellCache;
use crate::solver::{CellState, TransferAggregator};

use super::{
    CellSources, Equation, PhaseChangeSource, SourceContext, SourceContribution, SourceTermRouter,
};

/// Nucleate-boiling source implementing [`PhaseChangeSource`].
///
/// # Example
///
/// ```
/// use boil_rs::equations::ClosureParameters;
/// use boil_rs::memory::AuxiliaryCellMemory;
/// use boil_rs::solver::{CellState, TransferAggregator};
/// use boil_rs::source::{NucleateBoilingSource, PhaseChangeSource, SourceContext};
/// use boil_rs::types::CellIndex;
///
/// let source = NucleateBoilingSource::new(ClosureParameters::water()).unwrap();
/// let ctx = SourceContext::default().with_operating_pressure(101_325.0);
/// let state = CellState::new(0.3, 0.7, 375.0, -1325.0);
///
/// let mut memory = AuxiliaryCellMemory::new(1);
/// let mut agg = TransferAggregator::new();
/// let sources = source
///     .cell_sources(&ctx, &state, &mut memory.cell(CellIndex::ZERO).unwrap(), &mut agg)
///     .unwrap();
///
/// assert!(sources.vapor.explicit > 0.0);
/// assert_eq!(sources.net_mass(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct NucleateBoilingSource {
    model: PhaseChangeRateModel,
}

impl NucleateBoilingSource {
    /// Source using the pressure/superheat correlation.
    pub fn new(params: ClosureParameters) -> Result<Self, ClosureError> {
        Ok(Self {
            model: PhaseChangeRateModel::new(params, ClosureStrategy::Correlation)?,
        })
    }

    /// Source using the constant reference site density.
    pub fn reference_density(params: ClosureParameters) -> Result<Self, ClosureError> {
        Ok(Self {
            model: PhaseChangeRateModel::new(params, ClosureStrategy::ReferenceDensity)?,
        })
    }

    /// Underlying rate model.
    pub fn model(&self) -> &PhaseChangeRateModel {
        &self.model
    }

    /// Transfer rate of one cell.
    pub fn transfer_rate(
        &self,
        ctx: &SourceContext,
        state: &CellState,
    ) -> Result<TransferRate, ClosureError> {
        self.model.transfer_rate(ctx, state, None)
    }
}

impl PhaseChangeSource for NucleateBoilingSource {
    fn name(&self) -> &'static str {
        match self.model.strategy() {
            ClosureStrategy::ReferenceDensity => "reference_density_boiling",
            _ => "nucleate_boiling",
        }
    }

    fn evaluate(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        equation: Equation,
        _cache: &mut CellCache<'_>,
        aggregator: &mut TransferAggregator,
    ) -> Result<SourceContribution, ClosureError> {
        let rate = self.transfer_rate(ctx, state)?;
        if equation == Equation::VaporMass {
            aggregator.record(rate.m_dot);
        }
        Ok(SourceTermRouter::route(&rate, equation))
    }

    /// One rate per cell, routed to all three equations.
    fn cell_sources(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        _cache: &mut CellCache<'_>,
        aggregator: &mut TransferAggregator,
    ) -> Result<CellSources, ClosureError> {
        let rate = self.transfer_rate(ctx, state)?;
        aggregator.record(rate.m_dot);
        Ok(SourceTermRouter::route_all(&rate))
    }
}
