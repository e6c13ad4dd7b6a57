/// Validated evaluation inputs and the tolerances used to validate them.
///
/// A `Conditions` value can only be built through the domain check, so
/// anything holding one may evaluate the formula without re-checking.
use super::constants::{
    DOMAIN_TOLERANCE, MASS_BOUNDS, PERCENT, REFERENCE_TEMPERATURE, TEMPERATURE_BOUNDS,
    ZERO_TOLERANCE,
};
use crate::error::{DensityError, Result};

/// Numerical slack applied at the domain edges and special-cased origins.
///
/// - `domain`: accepted overshoot beyond the mass and temperature bounds
/// - `zero`: magnitude under which the concentration or the temperature
///   deviation counts as zero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    domain: f64,
    zero: f64,
}

impl Tolerances {
    pub const DEFAULT: Tolerances = Tolerances {
        domain: DOMAIN_TOLERANCE,
        zero: ZERO_TOLERANCE,
    };

    /// Create tolerances, rejecting negative or non-finite values.
    pub fn new(domain: f64, zero: f64) -> Result<Self> {
        for (name, value) in [("domain", domain), ("zero", zero)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DensityError::InvalidTolerance { name, value });
            }
        }
        Ok(Self { domain, zero })
    }

    pub fn domain(&self) -> f64 {
        self.domain
    }

    pub fn zero(&self) -> f64 {
        self.zero
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Check a mass concentration [%] against the domain.
pub fn check_mass(mass_percent: f64, tolerances: &Tolerances) -> Result<f64> {
    if MASS_BOUNDS.contains(mass_percent, tolerances.domain) {
        return Ok(mass_percent);
    }
    tracing::debug!(mass_percent, "mass concentration outside validated domain");
    Err(DensityError::MassOutOfRange {
        value: mass_percent,
        min: MASS_BOUNDS.min,
        max: MASS_BOUNDS.max,
    })
}

/// Check a temperature [°C] against the domain.
pub fn check_temperature(temperature: f64, tolerances: &Tolerances) -> Result<f64> {
    if TEMPERATURE_BOUNDS.contains(temperature, tolerances.domain) {
        return Ok(temperature);
    }
    tracing::debug!(temperature, "temperature outside validated domain");
    Err(DensityError::TemperatureOutOfRange {
        value: temperature,
        min: TEMPERATURE_BOUNDS.min,
        max: TEMPERATURE_BOUNDS.max,
    })
}

/// A mass concentration and temperature pair inside the validated domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    mass_percent: f64,
    temperature: f64,
}

impl Conditions {
    /// Validate a pair with the default tolerances.
    pub fn new(mass_percent: f64, temperature: f64) -> Result<Self> {
        Self::with_tolerances(mass_percent, temperature, &Tolerances::DEFAULT)
    }

    /// Validate a pair. Concentration is checked first.
    pub fn with_tolerances(
        mass_percent: f64,
        temperature: f64,
        tolerances: &Tolerances,
    ) -> Result<Self> {
        let mass_percent = check_mass(mass_percent, tolerances)?;
        let temperature = check_temperature(temperature, tolerances)?;
        Ok(Self {
            mass_percent,
            temperature,
        })
    }

    /// Mass concentration [%].
    pub fn mass_percent(&self) -> f64 {
        self.mass_percent
    }

    /// Temperature [°C].
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Mass fraction p = Mas / 100, the variable the coefficients use.
    pub fn mass_fraction(&self) -> f64 {
        self.mass_percent / PERCENT
    }

    /// Deviation from the 20 °C reference temperature.
    pub fn temperature_deviation(&self) -> f64 {
        self.temperature - REFERENCE_TEMPERATURE
    }
}
