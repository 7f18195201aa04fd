//! Closure parameters for boiling water.
//!
//! Material properties and empirical constants of the nucleate-boiling
//! closure. The defaults describe water near atmospheric pressure.
//!
//! # Units
//!
//! - Conductivity: W/(m·K)
//! - Latent heat: J/kg
//! - Temperature: K
//! - Nucleation density: sites/m²
//! - Density: kg/m³
//! - Correlation pressure: MPa (host pressure is scaled by `pressure_scale`)

use crate::error::ClosureError;

/// Thermal conductivity of liquid water (W/(m·K)).
pub const LAMBDA_L: f64 = 0.665;

/// Thermal conductivity of water vapor (W/(m·K)).
pub const LAMBDA_V: f64 = 0.025;

/// Latent heat of vaporization of water (J/kg).
pub const HFG: f64 = 2.26e6;

/// Saturation temperature of water at 1 atm (K).
pub const T_SAT: f64 = 373.15;

/// Reference temperature of the contact-angle fit (K).
pub const T0: f64 = 298.15;

/// Critical temperature of water (K).
pub const TCRIT: f64 = 647.15;

/// Reference nucleation site density (sites/m²).
pub const N0: f64 = 1000.0;

/// Density of liquid water (kg/m³).
pub const RHO_L: f64 = 997.0;

/// Static contact angle at the reference temperature (degrees).
pub const CONTACT_ANGLE_DEG: f64 = 41.37;

/// Pascal to megapascal.
pub const PA_TO_MPA: f64 = 1e-6;

/// Immutable configuration of the phase-change closure.
///
/// Construct with [`ClosureParameters::water`] (or `Default`) and adjust
/// with the `with_*` builders. Call [`validate`](Self::validate) before
/// handing the parameters to a source; the source constructors in
/// [`crate::source`] do this for you.
///
/// # Example
///
/// ```
/// use boil_rs::equations::ClosureParameters;
///
/// let params = ClosureParameters::water()
///     .with_saturation_temperature(453.0)
///     .with_activation_time(2.4e-5);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ClosureParameters {
    /// Liquid thermal conductivity λ_l
    pub lambda_l: f64,
    /// Vapor thermal conductivity λ_v
    pub lambda_v: f64,
    /// Latent heat of vaporization h_fg
    pub hfg: f64,
    /// Saturation temperature T_sat
    pub t_sat: f64,
    /// Reference temperature T₀ of the contact-angle fit
    pub t0: f64,
    /// Critical temperature T_crit
    pub t_crit: f64,
    /// Reference nucleation density N₀
    pub n0: f64,
    /// Contact-angle temperature exponent γ
    pub gamma: f64,
    /// Quadratic pressure coefficient of A(P)
    pub a_const: f64,
    /// Linear pressure coefficient of B(P)
    pub b_const: f64,
    /// Empirical mass-transfer coefficient C_m
    pub c_m: f64,
    /// Liquid density ρ_l
    pub rho_l: f64,
    /// Static contact angle in degrees
    pub contact_angle_deg: f64,
    /// Factor converting absolute host pressure to correlation units (MPa)
    pub pressure_scale: f64,
    /// Characteristic length L of the gradient closure (m)
    pub characteristic_length: f64,
    /// Rates stay zero while simulation time is at or below this value
    pub activation_time: Option<f64>,
}

impl Default for ClosureParameters {
    fn default() -> Self {
        Self::water()
    }
}

impl ClosureParameters {
    /// Water near atmospheric pressure.
    pub fn water() -> Self {
        Self {
            lambda_l: LAMBDA_L,
            lambda_v: LAMBDA_V,
            hfg: HFG,
            t_sat: T_SAT,
            t0: T0,
            t_crit: TCRIT,
            n0: N0,
            gamma: 0.719,
            a_const: -0.0002,
            b_const: 0.122,
            c_m: 2.0,
            rho_l: RHO_L,
            contact_angle_deg: CONTACT_ANGLE_DEG,
            pressure_scale: PA_TO_MPA,
            characteristic_length: 1e-3,
            activation_time: None,
        }
    }

    /// Set phase conductivities (liquid, vapor).
    pub fn with_conductivities(mut self, lambda_l: f64, lambda_v: f64) -> Self {
        self.lambda_l = lambda_l;
        self.lambda_v = lambda_v;
        self
    }

    /// Set latent heat of vaporization.
    pub fn with_latent_heat(mut self, hfg: f64) -> Self {
        self.hfg = hfg;
        self
    }

    /// Set saturation temperature.
    pub fn with_saturation_temperature(mut self, t_sat: f64) -> Self {
        self.t_sat = t_sat;
        self
    }

    /// Set the host-pressure to correlation-pressure factor.
    ///
    /// Use `1.0` when the host already works in MPa.
    pub fn with_pressure_scale(mut self, pressure_scale: f64) -> Self {
        self.pressure_scale = pressure_scale;
        self
    }

    /// Set the characteristic length of the gradient closure.
    pub fn with_characteristic_length(mut self, length: f64) -> Self {
        self.characteristic_length = length;
        self
    }

    /// Delay phase change until the given simulation time.
    pub fn with_activation_time(mut self, time: f64) -> Self {
        self.activation_time = Some(time);
        self
    }

    /// Set the reference nucleation density.
    pub fn with_reference_density(mut self, n0: f64) -> Self {
        self.n0 = n0;
        self
    }

    /// Superheat ΔT = T - T_sat.
    #[inline]
    pub fn superheat(&self, temperature: f64) -> f64 {
        temperature - self.t_sat
    }

    /// Whether the closure is active at this temperature and time.
    ///
    /// Phase change requires strict superheat; an activation time, when
    /// set, must also have passed.
    #[inline]
    pub fn is_active(&self, temperature: f64, time: f64) -> bool {
        let started = self.activation_time.is_none_or(|t_on| time > t_on);
        started && temperature > self.t_sat
    }

    /// Check every parameter for physical consistency.
    pub fn validate(&self) -> Result<(), ClosureError> {
        let finite = [
            ("lambda_l", self.lambda_l),
            ("lambda_v", self.lambda_v),
            ("hfg", self.hfg),
            ("t_sat", self.t_sat),
            ("t0", self.t0),
            ("t_crit", self.t_crit),
            ("n0", self.n0),
            ("gamma", self.gamma),
            ("a_const", self.a_const),
            ("b_const", self.b_const),
            ("c_m", self.c_m),
            ("rho_l", self.rho_l),
            ("contact_angle_deg", self.contact_angle_deg),
            ("pressure_scale", self.pressure_scale),
            ("characteristic_length", self.characteristic_length),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ClosureError::invalid(name, value, "must be finite"));
            }
        }

        let positive = [
            ("hfg", self.hfg),
            ("t_sat", self.t_sat),
            ("c_m", self.c_m),
            ("rho_l", self.rho_l),
            ("pressure_scale", self.pressure_scale),
            ("characteristic_length", self.characteristic_length),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ClosureError::invalid(name, value, "must be positive"));
            }
        }

        if self.lambda_l < 0.0 {
            return Err(ClosureError::invalid(
                "lambda_l",
                self.lambda_l,
                "must be non-negative",
            ));
        }
        if self.lambda_v < 0.0 {
            return Err(ClosureError::invalid(
                "lambda_v",
                self.lambda_v,
                "must be non-negative",
            ));
        }
        if self.n0 < 0.0 {
            return Err(ClosureError::invalid("n0", self.n0, "must be non-negative"));
        }
        if self.t_crit <= self.t0 {
            return Err(ClosureError::invalid(
                "t_crit",
                self.t_crit,
                "must exceed the reference temperature",
            ));
        }
        if self.t_crit <= self.t_sat {
            return Err(ClosureError::invalid(
                "t_crit",
                self.t_crit,
                "must exceed the saturation temperature",
            ));
        }
        if let Some(t_on) = self.activation_time {
            if !t_on.is_finite() {
                return Err(ClosureError::invalid(
                    "activation_time",
                    t_on,
                    "must be finite",
                ));
            }
        }
        Ok(())
    }
}
