//! Volumetric phase-change rate.
//!
//! One rate model covers every closure strategy. Both strategies share the
//! effective conductivity of the two-phase mixture,
//!
//! k_eff = α_v·λ_v + α_l·λ_l,
//!
//! and differ in what drives the transfer:
//!
//! - Correlation: ∇α_v ≈ Nw / (C_m·ρ_l) from the nucleation site density,
//!   and ṁ = k_eff·∇α_v / h_fg.
//! - Gradient: ṁ = k_eff·IM / L from the cached interface metric IM and a
//!   characteristic length L.
//!
//! In both cases the energy rate is ṁ·h_fg and the rate is exactly zero
//! unless T > T_sat. Positive ṁ means liquid turns into vapor.

use crate::equations::ClosureParameters;
use crate::error::ClosureError;
use crate::solver::CellState;
use crate::source::SourceContext;

use super::NucleationDensityModel;

/// Selectable closure strategy.
///
/// The strategies are independent models; none supersedes another.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ClosureStrategy {
    /// Nucleate-boiling correlation on local pressure and superheat
    #[default]
    Correlation,
    /// Constant reference site density N₀·10⁻⁶
    ReferenceDensity,
    /// Interfacial area density from ∇α_v · ∇T
    Gradient,
}

impl ClosureStrategy {
    /// Whether the strategy consumes a cached interface metric.
    pub fn requires_interface_metric(self) -> bool {
        matches!(self, ClosureStrategy::Gradient)
    }

    /// Short name for logging.
    pub fn name(self) -> &'static str {
        match self {
            ClosureStrategy::Correlation => "correlation",
            ClosureStrategy::ReferenceDensity => "reference_density",
            ClosureStrategy::Gradient => "gradient",
        }
    }
}

/// Phase-change rate of one cell.
///
/// Always an explicit source: the implicit derivative is zero by
/// construction and is not stored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransferRate {
    /// Mass rate ṁ (kg/(m³·s)), positive for liquid → vapor
    pub m_dot: f64,
    /// Energy rate (W/m³)
    pub energy: f64,
}

impl TransferRate {
    /// No phase change.
    pub const ZERO: Self = Self {
        m_dot: 0.0,
        energy: 0.0,
    };

    /// Rate from a mass rate and latent heat.
    #[inline]
    pub fn from_mass_rate(m_dot: f64, hfg: f64) -> Self {
        Self {
            m_dot,
            energy: m_dot * hfg,
        }
    }

    /// Whether no mass is transferred.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.m_dot == 0.0
    }
}

/// Unified phase-change rate model.
///
/// # Example
///
/// ```
/// use boil_rs::closure::{ClosureStrategy, PhaseChangeRateModel};
/// use boil_rs::equations::ClosureParameters;
/// use boil_rs::solver::CellState;
/// use boil_rs::source::SourceContext;
///
/// let params = ClosureParameters::water().with_pressure_scale(1.0);
/// let model = PhaseChangeRateModel::new(params, ClosureStrategy::Correlation).unwrap();
///
/// let ctx = SourceContext::default();
/// let state = CellState::new(0.3, 0.7, 375.0, 0.1);
/// let rate = model.transfer_rate(&ctx, &state, None).unwrap();
/// assert!(rate.m_dot > 0.0);
/// assert!((rate.energy - rate.m_dot * 2.26e6).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseChangeRateModel {
    params: ClosureParameters,
    strategy: ClosureStrategy,
    nucleation: NucleationDensityModel,
}

impl PhaseChangeRateModel {
    /// Create a rate model after validating the parameters.
    pub fn new(params: ClosureParameters, strategy: ClosureStrategy) -> Result<Self, ClosureError> {
        params.validate()?;
        let nucleation = match strategy {
            ClosureStrategy::ReferenceDensity => NucleationDensityModel::reference(&params),
            _ => NucleationDensityModel::correlation(&params),
        };
        Ok(Self {
            params,
            strategy,
            nucleation,
        })
    }

    /// Closure parameters.
    pub fn params(&self) -> &ClosureParameters {
        &self.params
    }

    /// Selected strategy.
    pub fn strategy(&self) -> ClosureStrategy {
        self.strategy
    }

    /// Nucleation density model used by the correlation strategies.
    pub fn nucleation(&self) -> &NucleationDensityModel {
        &self.nucleation
    }

    /// Absolute pressure in correlation units (MPa).
    #[inline]
    pub fn correlation_pressure(&self, ctx: &SourceContext, state: &CellState) -> f64 {
        state.absolute_pressure(ctx.operating_pressure) * self.params.pressure_scale
    }

    /// Effective mixture conductivity α_v·λ_v + α_l·λ_l.
    #[inline]
    pub fn effective_conductivity(&self, state: &CellState) -> f64 {
        state.alpha_v * self.params.lambda_v + state.alpha_l * self.params.lambda_l
    }

    /// Volume-fraction gradient proxy Nw / (C_m·ρ_l).
    #[inline]
    pub fn volume_fraction_gradient(&self, p_mpa: f64, temperature: f64) -> f64 {
        self.nucleation.density(p_mpa, temperature) / (self.params.c_m * self.params.rho_l)
    }

    /// Compute the transfer rate of one cell.
    ///
    /// `interface_metric` is required by [`ClosureStrategy::Gradient`] and
    /// ignored otherwise.
    pub fn transfer_rate(
        &self,
        ctx: &SourceContext,
        state: &CellState,
        interface_metric: Option<f64>,
    ) -> Result<TransferRate, ClosureError> {
        let drive = match self.strategy {
            ClosureStrategy::Gradient => {
                let im = interface_metric.ok_or(ClosureError::MissingInterfaceMetric)?;
                im / self.params.characteristic_length
            }
            ClosureStrategy::Correlation | ClosureStrategy::ReferenceDensity => 0.0,
        };

        if !self.params.is_active(state.temperature, ctx.time) {
            return Ok(TransferRate::ZERO);
        }

        let k_eff = self.effective_conductivity(state);
        let m_dot = match self.strategy {
            ClosureStrategy::Gradient => k_eff * drive,
            ClosureStrategy::Correlation | ClosureStrategy::ReferenceDensity => {
                let p_mpa = self.correlation_pressure(ctx, state);
                k_eff * self.volume_fraction_gradient(p_mpa, state.temperature) / self.params.hfg
            }
        };

        if !m_dot.is_finite() {
            log::warn!(
                "{} closure produced non-finite rate at T={:.3} K; using 0",
                self.strategy.name(),
                state.temperature
            );
            return Ok(TransferRate::ZERO);
        }

        Ok(TransferRate::from_mass_rate(m_dot, self.params.hfg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mpa_params() -> ClosureParameters {
        ClosureParameters::water().with_pressure_scale(1.0)
    }

    #[test]
    fn test_correlation_reference_point() {
        let model = PhaseChangeRateModel::new(mpa_params(), ClosureStrategy::Correlation).unwrap();
        let ctx = SourceContext::default();
        let state = CellState::new(0.3, 0.7, 375.0, 0.1);

        assert_relative_eq!(
            model.volume_fraction_gradient(0.1, 375.0),
            1.181423743805522,
            max_relative = 1e-6
        );

        let rate = model.transfer_rate(&ctx, &state, None).unwrap();
        assert_relative_eq!(rate.m_dot, 2.472625800088548e-7, max_relative = 1e-6);
        assert_relative_eq!(rate.energy, rate.m_dot * 2.26e6, max_relative = 1e-9);
    }

    #[test]
    fn test_operating_pressure_and_scale() {
        let model =
            PhaseChangeRateModel::new(ClosureParameters::water(), ClosureStrategy::Correlation)
                .unwrap();
        let ctx = SourceContext::default().with_operating_pressure(101_325.0);
        let state = CellState::new(0.3, 0.7, 375.0, -1325.0);
        assert_relative_eq!(
            model.correlation_pressure(&ctx, &state),
            0.1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_subcooled_is_exact_zero() {
        for strategy in [
            ClosureStrategy::Correlation,
            ClosureStrategy::ReferenceDensity,
            ClosureStrategy::Gradient,
        ] {
            let model = PhaseChangeRateModel::new(mpa_params(), strategy).unwrap();
            let state = CellState::new(0.3, 0.7, 370.0, 0.1);
            let rate = model
                .transfer_rate(&SourceContext::default(), &state, Some(1e4))
                .unwrap();
            assert_eq!(rate, TransferRate::ZERO);
        }
    }

    #[test]
    fn test_saturation_is_exact_zero() {
        let model = PhaseChangeRateModel::new(mpa_params(), ClosureStrategy::Correlation).unwrap();
        let state = CellState::new(0.5, 0.5, 373.15, 0.1);
        let rate = model
            .transfer_rate(&SourceContext::default(), &state, None)
            .unwrap();
        assert!(rate.is_zero());
        assert_eq!(rate.energy, 0.0);
    }

    #[test]
    fn test_gradient_rate() {
        let params = mpa_params().with_characteristic_length(2e-3);
        let model = PhaseChangeRateModel::new(params, ClosureStrategy::Gradient).unwrap();
        let state = CellState::new(0.4, 0.6, 380.0, 0.1);
        let rate = model
            .transfer_rate(&SourceContext::default(), &state, Some(50.0))
            .unwrap();

        // (0.6·0.665 + 0.4·0.025)·50 / 2e-3
        let expected = (0.6 * 0.665 + 0.4 * 0.025) * 50.0 / 2e-3;
        assert_relative_eq!(rate.m_dot, expected, max_relative = 1e-12);
        assert_relative_eq!(rate.energy, expected * 2.26e6, max_relative = 1e-12);
    }

    #[test]
    fn test_gradient_requires_metric() {
        let model = PhaseChangeRateModel::new(mpa_params(), ClosureStrategy::Gradient).unwrap();
        let state = CellState::new(0.4, 0.6, 380.0, 0.1);
        let err = model
            .transfer_rate(&SourceContext::default(), &state, None)
            .unwrap_err();
        assert_eq!(err, ClosureError::MissingInterfaceMetric);
    }

    #[test]
    fn test_reference_density_rate() {
        let model =
            PhaseChangeRateModel::new(mpa_params(), ClosureStrategy::ReferenceDensity).unwrap();
        let state = CellState::new(0.3, 0.7, 400.0, 0.1);
        let rate = model
            .transfer_rate(&SourceContext::default(), &state, None)
            .unwrap();
        let grad = 1e-3 / (2.0 * 997.0);
        let expected = (0.3 * 0.025 + 0.7 * 0.665) * grad / 2.26e6;
        assert_relative_eq!(rate.m_dot, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_activation_time() {
        let params = mpa_params().with_activation_time(2.4e-5);
        let model = PhaseChangeRateModel::new(params, ClosureStrategy::Correlation).unwrap();
        let state = CellState::new(0.3, 0.7, 375.0, 0.1);

        let early = SourceContext::default().with_time(1e-5);
        assert!(model.transfer_rate(&early, &state, None).unwrap().is_zero());

        let late = SourceContext::default().with_time(1e-4);
        assert!(model.transfer_rate(&late, &state, None).unwrap().m_dot > 0.0);
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = mpa_params().with_characteristic_length(0.0);
        assert!(PhaseChangeRateModel::new(params, ClosureStrategy::Gradient).is_err());
    }

    #[test]
    fn test_non_finite_volume_fraction_gives_zero() {
        let model = PhaseChangeRateModel::new(mpa_params(), ClosureStrategy::Correlation).unwrap();
        let state = CellState::new(f64::NAN, 0.7, 375.0, 0.1);
        let rate = model
            .transfer_rate(&SourceContext::default(), &state, None)
            .unwrap();
        assert_eq!(rate, TransferRate::ZERO);
    }

    #[test]
    fn test_strategy_flags() {
        assert!(ClosureStrategy::Gradient.requires_interface_metric());
        assert!(!ClosureStrategy::Correlation.requires_interface_metric());
        assert_eq!(ClosureStrategy::default(), ClosureStrategy::Correlation);
    }
}
