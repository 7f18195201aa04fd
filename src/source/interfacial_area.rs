//! Interfacial-area source term.
//!
//! Evaporation driven by the alignment of the vapor volume-fraction and
//! temperature gradients. The gradients are computed once per cell per
//! iteration, so the evaluation is split into passes that hand results on
//! through the cell's [`CellCache`]:
//!
//! 1. [`prepare`](PhaseChangeSource::prepare): IM = ∇α_v · ∇T → slot 0
//! 2. vapor mass: ṁ from slot 0 → slots 1 and 2, returns +ṁ
//! 3. liquid mass: -slot 1
//! 4. energy: slot 2
//!
//! Liquid and energy passes never recompute; they fail with an
//! evaluation-order error if the vapor pass has not run in the current
//! iteration.

use crate::closure::{AreaDensityModel, ClosureStrategy, PhaseChangeRateModel, TransferRate};
use crate::equations::ClosureParameters;
use crate::error::ClosureError;
use crate::memory::{CellCache, Slot};
use crate::solver::{CellState, TransferAggregator};

use super::{Equation, PhaseChangeSource, SourceContext, SourceContribution, SourceTermRouter};

/// Gradient-based source implementing [`PhaseChangeSource`].
#[derive(Clone, Debug)]
pub struct InterfacialAreaSource {
    model: PhaseChangeRateModel,
}

impl InterfacialAreaSource {
    /// Create the source after validating parameters.
    pub fn new(params: ClosureParameters) -> Result<Self, ClosureError> {
        Ok(Self {
            model: PhaseChangeRateModel::new(params, ClosureStrategy::Gradient)?,
        })
    }

    /// Underlying rate model.
    pub fn model(&self) -> &PhaseChangeRateModel {
        &self.model
    }

    fn cached_rate(cache: &CellCache<'_>) -> Result<TransferRate, ClosureError> {
        Ok(TransferRate {
            m_dot: cache.read(Slot::PhaseSource)?,
            energy: cache.read(Slot::EnergySource)?,
        })
    }
}

impl PhaseChangeSource for InterfacialAreaSource {
    fn name(&self) -> &'static str {
        "interfacial_area"
    }

    fn prepare(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        cache: &mut CellCache<'_>,
    ) -> Result<(), ClosureError> {
        let cell = cache.cell();
        let grad_alpha_v = state.grad_alpha_v.ok_or(ClosureError::MissingGradient {
            cell,
            field: "volume fraction",
        })?;
        let grad_t = state.grad_t.ok_or(ClosureError::MissingGradient {
            cell,
            field: "temperature",
        })?;

        let metric = AreaDensityModel::new(ctx.dim).interface_metric(&grad_alpha_v, &grad_t);
        cache.write(Slot::InterfaceMetric, metric)
    }

    fn evaluate(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        equation: Equation,
        cache: &mut CellCache<'_>,
        aggregator: &mut TransferAggregator,
    ) -> Result<SourceContribution, ClosureError> {
        let rate = match equation {
            Equation::VaporMass => {
                let metric = cache.read(Slot::InterfaceMetric)?;
                let rate = self.model.transfer_rate(ctx, state, Some(metric))?;
                cache.write(Slot::PhaseSource, rate.m_dot)?;
                cache.write(Slot::EnergySource, rate.energy)?;
                aggregator.record(rate.m_dot);
                rate
            }
            Equation::LiquidMass | Equation::Energy => Self::cached_rate(cache)?,
        };
        Ok(SourceTermRouter::route(&rate, equation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::AuxiliaryCellMemory;
    use crate::types::{CellIndex, SpatialDim};
    use approx::assert_relative_eq;

    fn source() -> InterfacialAreaSource {
        InterfacialAreaSource::new(ClosureParameters::water().with_characteristic_length(1e-3))
            .unwrap()
    }

    fn hot_state() -> CellState {
        CellState::new(0.4, 0.6, 380.0, 0.0).with_gradients([100.0, 50.0, 10.0], [2.0, 4.0, 1.0])
    }

    #[test]
    fn test_passes_in_order() {
        let source = source();
        let ctx = SourceContext::default();
        let state = hot_state();
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut cache = memory.cell(CellIndex::ZERO).unwrap();
        let mut agg = TransferAggregator::new();

        source.prepare(&ctx, &state, &mut cache).unwrap();
        assert_eq!(cache.read(Slot::InterfaceMetric).unwrap(), 410.0);

        let vapor = source
            .evaluate(&ctx, &state, Equation::VaporMass, &mut cache, &mut agg)
            .unwrap();
        let liquid = source
            .evaluate(&ctx, &state, Equation::LiquidMass, &mut cache, &mut agg)
            .unwrap();
        let energy = source
            .evaluate(&ctx, &state, Equation::Energy, &mut cache, &mut agg)
            .unwrap();

        let expected = (0.6 * 0.665 + 0.4 * 0.025) * (410.0 / 1e-3);
        assert_relative_eq!(vapor.explicit, expected, max_relative = 1e-12);
        assert_eq!(vapor.explicit + liquid.explicit, 0.0);
        assert_relative_eq!(energy.explicit, expected * 2.26e6, max_relative = 1e-12);
        assert_eq!(agg.count(), 1);
    }

    #[test]
    fn test_two_dimensional_metric() {
        let source = source();
        let ctx = SourceContext::default().with_dim(SpatialDim::Two);
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut cache = memory.cell(CellIndex::ZERO).unwrap();
        source.prepare(&ctx, &hot_state(), &mut cache).unwrap();
        assert_eq!(cache.read(Slot::InterfaceMetric).unwrap(), 400.0);
    }

    #[test]
    fn test_vapor_before_prepare_is_order_error() {
        let source = source();
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut cache = memory.cell(CellIndex::ZERO).unwrap();
        let err = source
            .evaluate(
                &SourceContext::default(),
                &hot_state(),
                Equation::VaporMass,
                &mut cache,
                &mut TransferAggregator::new(),
            )
            .unwrap_err();
        assert!(err.is_order_violation());
    }

    #[test]
    fn test_liquid_before_vapor_is_order_error() {
        let source = source();
        let ctx = SourceContext::default();
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut cache = memory.cell(CellIndex::ZERO).unwrap();
        source.prepare(&ctx, &hot_state(), &mut cache).unwrap();

        for eq in [Equation::LiquidMass, Equation::Energy] {
            let err = source
                .evaluate(&ctx, &hot_state(), eq, &mut cache, &mut TransferAggregator::new())
                .unwrap_err();
            assert!(matches!(
                err,
                ClosureError::SlotNotWritten {
                    slot: Slot::PhaseSource,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_liquid_reads_cache_not_state() {
        let source = source();
        let ctx = SourceContext::default();
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut cache = memory.cell(CellIndex::ZERO).unwrap();
        let mut agg = TransferAggregator::new();

        let state = hot_state();
        source.prepare(&ctx, &state, &mut cache).unwrap();
        let vapor = source
            .evaluate(&ctx, &state, Equation::VaporMass, &mut cache, &mut agg)
            .unwrap();

        // A different state on the liquid pass must not change the result
        let changed = CellState::new(0.9, 0.1, 500.0, 0.0);
        let liquid = source
            .evaluate(&ctx, &changed, Equation::LiquidMass, &mut cache, &mut agg)
            .unwrap();
        assert_eq!(liquid.explicit, -vapor.explicit);
    }

    #[test]
    fn test_missing_gradient() {
        let source = source();
        let mut memory = AuxiliaryCellMemory::new(3);
        let mut cache = memory.cell(CellIndex::new(2)).unwrap();
        let state = CellState::new(0.4, 0.6, 380.0, 0.0);
        let err = source
            .prepare(&SourceContext::default(), &state, &mut cache)
            .unwrap_err();
        assert_eq!(
            err,
            ClosureError::MissingGradient {
                cell: CellIndex::new(2),
                field: "volume fraction"
            }
        );
    }

    #[test]
    fn test_subcooled_with_gradients_is_zero() {
        let source = source();
        let mut memory = AuxiliaryCellMemory::new(1);
        let mut agg = TransferAggregator::new();
        let state =
            CellState::new(0.4, 0.6, 360.0, 0.0).with_gradients([1.0, 1.0, 1.0], [1.0, 1.0, 1.0]);
        let sources = source
            .cell_sources(
                &SourceContext::default(),
                &state,
                &mut memory.cell(CellIndex::ZERO).unwrap(),
                &mut agg,
            )
            .unwrap();
        assert_eq!(sources.vapor.explicit, 0.0);
        assert_eq!(sources.liquid.explicit, 0.0);
        assert_eq!(sources.energy.explicit, 0.0);
        assert!(agg.is_empty());
    }
}
