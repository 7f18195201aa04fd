//! Nucleation site density for nucleate boiling.
//!
//! The active site density on a heated wall is correlated against local
//! pressure and wall superheat:
//!
//! Nw = N₀ · cosθ · e^{f(P)} · ΔT^{ΔT·A(P) + B(P)}
//!
//! with
//!
//! - f(P) = 26.006 - 3.678·e^{-2P} - 21.907·e^{-P/24.065}
//! - A(P) = a·P² + 0.0108·P + 0.0119
//! - B(P) = b·P + 1.988
//! - cosθ = (1 - cos θ₀)·((T_crit - T)/(T_crit - T₀))^γ
//!
//! P is the absolute pressure in MPa and ΔT = T - T_sat in K.
//!
//! # Validity
//!
//! The correlation is only evaluated for ΔT > 0 and T < T_crit. Outside
//! that range the density is zero: ΔT ≤ 0 would feed a non-positive base to
//! a state-dependent power, and T ≥ T_crit a negative base to the
//! fractional contact-angle exponent.

use crate::equations::ClosureParameters;

/// Pressure-dependent exponent f(P) of the site-density correlation.
#[inline]
pub fn pressure_exponent(p_mpa: f64) -> f64 {
    26.006 - 3.678 * (-2.0 * p_mpa).exp() - 21.907 * (-p_mpa / 24.065).exp()
}

/// Nucleation site density model.
///
/// Built once from [`ClosureParameters`]; the contact-angle factor
/// `1 - cos θ₀` is converted to radians and cached at construction.
///
/// # Example
///
/// ```
/// use boil_rs::closure::NucleationDensityModel;
/// use boil_rs::equations::ClosureParameters;
///
/// let model = NucleationDensityModel::correlation(&ClosureParameters::water());
///
/// // 0.1 MPa, 1.85 K superheat
/// let nw = model.density(0.1, 375.0);
/// assert!((nw - 2355.7589).abs() < 1e-3);
///
/// // Subcooled: no active sites
/// assert_eq!(model.density(0.1, 370.0), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct NucleationDensityModel {
    kind: DensityKind,
    n0: f64,
    t_sat: f64,
    t0: f64,
    t_crit: f64,
    gamma: f64,
    a_const: f64,
    b_const: f64,
    /// 1 - cos θ₀
    contact_factor: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DensityKind {
    /// Pressure/superheat correlation
    Correlation,
    /// Constant N₀·10⁻⁶, independent of local state
    Reference,
}

impl NucleationDensityModel {
    fn from_params(params: &ClosureParameters, kind: DensityKind) -> Self {
        Self {
            kind,
            n0: params.n0,
            t_sat: params.t_sat,
            t0: params.t0,
            t_crit: params.t_crit,
            gamma: params.gamma,
            a_const: params.a_const,
            b_const: params.b_const,
            contact_factor: 1.0 - params.contact_angle_deg.to_radians().cos(),
        }
    }

    /// Full pressure/superheat correlation.
    pub fn correlation(params: &ClosureParameters) -> Self {
        Self::from_params(params, DensityKind::Correlation)
    }

    /// Constant reference density N₀·10⁻⁶.
    ///
    /// Ignores pressure and superheat magnitude; still zero without
    /// superheat.
    pub fn reference(params: &ClosureParameters) -> Self {
        Self::from_params(params, DensityKind::Reference)
    }

    /// Whether this is the state-independent reference model.
    pub fn is_reference(&self) -> bool {
        self.kind == DensityKind::Reference
    }

    /// Superheat exponent coefficients (A(P), B(P)).
    #[inline]
    pub fn superheat_coefficients(&self, p_mpa: f64) -> (f64, f64) {
        let a = self.a_const * p_mpa * p_mpa + 0.0108 * p_mpa + 0.0119;
        let b = self.b_const * p_mpa + 1.988;
        (a, b)
    }

    /// Temperature-dependent contact-angle factor cosθ.
    ///
    /// Returns zero at and above the critical temperature.
    #[inline]
    pub fn contact_angle_factor(&self, temperature: f64) -> f64 {
        let ratio = (self.t_crit - temperature) / (self.t_crit - self.t0);
        if ratio <= 0.0 {
            return 0.0;
        }
        self.contact_factor * ratio.powf(self.gamma)
    }

    /// Site density Nw at absolute pressure `p_mpa` (MPa) and temperature (K).
    pub fn density(&self, p_mpa: f64, temperature: f64) -> f64 {
        let superheat = temperature - self.t_sat;
        if superheat.is_nan() || superheat <= 0.0 {
            return 0.0;
        }

        if self.kind == DensityKind::Reference {
            return self.n0 * 1e-6;
        }

        if temperature >= self.t_crit {
            return 0.0;
        }

        let f_p = pressure_exponent(p_mpa);
        let (a, b) = self.superheat_coefficients(p_mpa);
        let cos_theta = self.contact_angle_factor(temperature);

        let nw = self.n0 * cos_theta * f_p.exp() * superheat.powf(superheat * a + b);
        if nw.is_finite() {
            nw
        } else {
            log::debug!(
                "nucleation density not finite at P={p_mpa:.4e} MPa, T={temperature:.3} K; using 0"
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> NucleationDensityModel {
        NucleationDensityModel::correlation(&ClosureParameters::water())
    }

    #[test]
    fn test_pressure_exponent() {
        // f(0.1) from the closed form
        assert_relative_eq!(
            pressure_exponent(0.1),
            1.1785520328382795,
            max_relative = 1e-12
        );
        // Saturates towards 26.006 at high pressure
        assert!((pressure_exponent(1e4) - 26.006).abs() < 1e-6);
    }

    #[test]
    fn test_superheat_coefficients() {
        let (a, b) = model().superheat_coefficients(0.1);
        assert_relative_eq!(a, 0.012978, max_relative = 1e-12);
        assert_relative_eq!(b, 2.0002, max_relative = 1e-12);
    }

    #[test]
    fn test_contact_angle_factor() {
        let m = model();
        assert_relative_eq!(
            m.contact_angle_factor(375.0),
            0.20867994185537475,
            max_relative = 1e-10
        );
        // At T₀ the ratio is 1
        assert_relative_eq!(
            m.contact_angle_factor(298.15),
            1.0 - 41.37_f64.to_radians().cos(),
            max_relative = 1e-12
        );
        assert_eq!(m.contact_angle_factor(647.15), 0.0);
        assert_eq!(m.contact_angle_factor(700.0), 0.0);
    }

    #[test]
    fn test_density_reference_point() {
        assert_relative_eq!(
            model().density(0.1, 375.0),
            2355.758945148211,
            max_relative = 1e-6
        );
    }

    #[test]
    fn test_density_zero_without_superheat() {
        let m = model();
        assert_eq!(m.density(0.1, 373.15), 0.0);
        assert_eq!(m.density(0.1, 300.0), 0.0);
        assert_eq!(m.density(5.0, 370.0), 0.0);
    }

    #[test]
    fn test_density_zero_above_critical() {
        assert_eq!(model().density(0.1, 650.0), 0.0);
    }

    #[test]
    fn test_density_nan_temperature_is_zero() {
        assert_eq!(model().density(0.1, f64::NAN), 0.0);
    }

    #[test]
    fn test_reference_density() {
        let params = ClosureParameters::water();
        let m = NucleationDensityModel::reference(&params);
        assert!(m.is_reference());
        assert_relative_eq!(m.density(0.1, 400.0), 1e-3, max_relative = 1e-14);
        assert_relative_eq!(m.density(3.0, 374.0), 1e-3, max_relative = 1e-14);
        assert_eq!(m.density(0.1, 373.0), 0.0);
    }

    #[test]
    fn test_density_non_negative() {
        let m = model();
        for &p in &[0.05, 0.1, 0.5, 1.0, 2.0] {
            for i in 1..200 {
                let t = 373.15 + 0.25 * i as f64;
                assert!(m.density(p, t) >= 0.0);
            }
        }
    }
}
