/// The OIML R22 density evaluator.
///
/// - `density()`: mixture density from mass concentration and temperature
/// - `density_of_water()`: the zero-concentration special case
/// - `first_term()`, `second_term()`, `third_term()`: the decomposition
use super::conditions::{check_mass, check_temperature, Conditions, Tolerances};
use super::constants::{A, MAX_DENSITY, MIN_DENSITY, PERCENT, REFERENCE_TEMPERATURE};
use super::outputs::Evaluation;
use super::processes;
use crate::error::Result;
use crate::traits::DensityFormula;

/// Stateless evaluator of the OIML R22 formula.
///
/// Holds only the tolerances; the coefficient tables are compile-time
/// constants, so the evaluator is `Copy` and can be shared freely between
/// threads.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OimlR22 {
    tolerances: Tolerances,
}

impl OimlR22 {
    /// Evaluator with the default tolerances.
    pub const fn new() -> Self {
        Self {
            tolerances: Tolerances::DEFAULT,
        }
    }

    /// Evaluator with custom boundary and zero tolerances.
    pub const fn with_tolerances(tolerances: Tolerances) -> Self {
        Self { tolerances }
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    /// Maximum density of the model: pure water near 3.969 °C [kg/m³].
    pub const fn max_density(&self) -> f64 {
        MAX_DENSITY
    }

    /// Minimum density of the model: pure alcohol at 40 °C [kg/m³].
    pub const fn min_density(&self) -> f64 {
        MIN_DENSITY
    }

    /// Density of the mixture [kg/m³].
    ///
    /// `mass_percent` in [0, 100], `temperature` in [-20, 40] °C. The result
    /// is not clamped to [`min_density`](Self::min_density) and
    /// [`max_density`](Self::max_density).
    pub fn density(&self, mass_percent: f64, temperature: f64) -> Result<f64> {
        let conditions = Conditions::with_tolerances(mass_percent, temperature, &self.tolerances)?;
        Ok(self.density_at(&conditions))
    }

    /// Density of pure water at `temperature` [kg/m³].
    pub fn density_of_water(&self, temperature: f64) -> Result<f64> {
        let temperature = check_temperature(temperature, &self.tolerances)?;
        Ok(A[0] + self.temperature_part(temperature))
    }

    /// Concentration term: density of the mixture at 20 °C.
    pub fn first_term(&self, mass_percent: f64) -> Result<f64> {
        let mass_percent = check_mass(mass_percent, &self.tolerances)?;
        Ok(A[0] + self.concentration_part(mass_percent))
    }

    /// Temperature term: offset of pure water from 20 °C.
    pub fn second_term(&self, temperature: f64) -> Result<f64> {
        let temperature = check_temperature(temperature, &self.tolerances)?;
        Ok(self.temperature_part(temperature))
    }

    /// Cross term coupling concentration and temperature deviation.
    pub fn third_term(&self, mass_percent: f64, temperature: f64) -> Result<f64> {
        let conditions = Conditions::with_tolerances(mass_percent, temperature, &self.tolerances)?;
        Ok(self.cross_part(conditions.mass_percent(), conditions.temperature()))
    }

    /// Evaluate an already-validated pair.
    pub fn evaluate_conditions(&self, conditions: &Conditions) -> Evaluation {
        Evaluation {
            mass_percent: conditions.mass_percent(),
            temperature: conditions.temperature(),
            density: self.density_at(conditions),
        }
    }

    fn density_at(&self, conditions: &Conditions) -> f64 {
        let mass = conditions.mass_percent();
        let temperature = conditions.temperature();

        let first = A[0] + self.concentration_part(mass);
        let second = self.temperature_part(temperature);
        let third = self.cross_part(mass, temperature);

        first + second + third
    }

    fn concentration_part(&self, mass_percent: f64) -> f64 {
        if mass_percent > self.tolerances.zero() {
            processes::concentration_sum(mass_percent / PERCENT)
        } else {
            0.0
        }
    }

    fn temperature_part(&self, temperature: f64) -> f64 {
        let dt = temperature - REFERENCE_TEMPERATURE;
        if dt.abs() > self.tolerances.zero() {
            processes::temperature_sum(dt)
        } else {
            0.0
        }
    }

    fn cross_part(&self, mass_percent: f64, temperature: f64) -> f64 {
        let dt = temperature - REFERENCE_TEMPERATURE;
        if dt.abs() > self.tolerances.zero() && mass_percent > 0.0 {
            processes::cross_sum(mass_percent / PERCENT, dt)
        } else {
            0.0
        }
    }
}

impl DensityFormula for OimlR22 {
    fn density(&self, mass_percent: f64, temperature: f64) -> Result<f64> {
        OimlR22::density(self, mass_percent, temperature)
    }

    fn density_of_water(&self, temperature: f64) -> Result<f64> {
        OimlR22::density_of_water(self, temperature)
    }

    fn max_density(&self) -> f64 {
        MAX_DENSITY
    }

    fn min_density(&self) -> f64 {
        MIN_DENSITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::r22::constants::MAX_DENSITY_TEMPERATURE;

    const R22: OimlR22 = OimlR22::new();

    // -- fixed points --

    #[test]
    fn water_at_reference_temperature() {
        assert_eq!(R22.density(0.0, 20.0).unwrap(), 998.20123);
        assert_eq!(R22.density_of_water(20.0).unwrap(), 998.20123);
        assert_eq!(R22.density(0.0, 20.0).unwrap(), A[0]);
    }

    #[test]
    fn extremes_are_fixed_constants() {
        assert_eq!(R22.max_density(), 999.9688158097358);
        assert_eq!(R22.min_density(), 771.9323112798857);
    }

    #[test]
    fn pure_alcohol_at_40_is_minimum() {
        let rho = R22.density(100.0, 40.0).unwrap();
        assert!((rho - R22.min_density()).abs() < 1e-9, "{rho}");
    }

    #[test]
    fn water_peaks_near_four_degrees() {
        let rho = R22.density_of_water(MAX_DENSITY_TEMPERATURE).unwrap();
        assert!((rho - R22.max_density()).abs() < 1e-9, "{rho}");
        assert!(R22.density_of_water(0.0).unwrap() < rho);
        assert!(R22.density_of_water(8.0).unwrap() < rho);
    }

    #[test]
    fn known_mixture_values() {
        // 50 % by mass at 20 °C and 10 °C.
        let at_20 = R22.density(50.0, 20.0).unwrap();
        let at_10 = R22.density(50.0, 10.0).unwrap();
        assert!((at_20 - 913.7705950261711).abs() < 1e-9, "{at_20}");
        assert!((at_10 - 921.5891249230046).abs() < 1e-9, "{at_10}");
    }

    // -- decomposition --

    #[test]
    fn zero_concentration_equals_water() {
        for t in [-20.0, -7.5, 0.0, 3.9, 20.0, 25.3, 40.0] {
            assert_eq!(
                R22.density(0.0, t).unwrap(),
                R22.density_of_water(t).unwrap(),
                "t={t}"
            );
        }
    }

    #[test]
    fn reference_temperature_equals_first_term() {
        for mas in [0.0, 0.5, 12.0, 40.0, 77.7, 100.0] {
            assert_eq!(
                R22.density(mas, 20.0).unwrap(),
                R22.first_term(mas).unwrap(),
                "mas={mas}"
            );
        }
    }

    #[test]
    fn terms_sum_to_density() {
        let (mas, t) = (35.0, 12.5);
        let sum = R22.first_term(mas).unwrap()
            + R22.second_term(t).unwrap()
            + R22.third_term(mas, t).unwrap();
        assert_eq!(R22.density(mas, t).unwrap(), sum);
    }

    #[test]
    fn special_cased_terms_vanish() {
        assert_eq!(R22.second_term(20.0).unwrap(), 0.0);
        assert_eq!(R22.third_term(0.0, 35.0).unwrap(), 0.0);
        assert_eq!(R22.third_term(60.0, 20.0).unwrap(), 0.0);
        assert_eq!(R22.first_term(0.0).unwrap(), A[0]);
    }

    // -- continuity across special cases --

    #[test]
    fn continuous_across_reference_temperature() {
        for mas in [0.0, 25.0, 100.0] {
            let centre = R22.density(mas, 20.0).unwrap();
            let below = R22.density(mas, 20.0 - 1e-10).unwrap();
            let above = R22.density(mas, 20.0 + 1e-10).unwrap();
            assert!((centre - below).abs() < 1e-8, "mas={mas}");
            assert!((centre - above).abs() < 1e-8, "mas={mas}");
        }
    }

    #[test]
    fn continuous_across_zero_concentration() {
        for t in [-20.0, 5.0, 40.0] {
            let water = R22.density(0.0, t).unwrap();
            let trace = R22.density(1e-10, t).unwrap();
            assert!((water - trace).abs() < 1e-8, "t={t}");
        }
    }

    // -- domain --

    #[test]
    fn rejects_out_of_domain() {
        assert!(R22.density(-0.001, 20.0).unwrap_err().is_domain_violation());
        assert!(R22.density(100.001, 20.0).unwrap_err().is_domain_violation());
        assert!(R22.density(50.0, -20.001).unwrap_err().is_domain_violation());
        assert!(R22.density(50.0, 40.001).unwrap_err().is_domain_violation());
        assert!(R22.density_of_water(40.001).is_err());
        assert!(R22.first_term(100.001).is_err());
        assert!(R22.second_term(-20.001).is_err());
        assert!(R22.third_term(50.0, 41.0).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(R22.density(f64::NAN, 20.0).is_err());
        assert!(R22.density(50.0, f64::NAN).is_err());
        assert!(R22.density_of_water(f64::NAN).is_err());
    }

    #[test]
    fn accepts_slack_at_boundaries() {
        assert!(R22.density(-1e-13, -20.0 - 1e-13).is_ok());
        assert!(R22.density(100.0 + 1e-13, 40.0 + 1e-13).is_ok());
    }

    #[test]
    fn results_are_finite_over_domain() {
        for i in 0..=20 {
            for j in 0..=12 {
                let mas = i as f64 * 5.0;
                let t = -20.0 + j as f64 * 5.0;
                let rho = R22.density(mas, t).unwrap();
                assert!(rho.is_finite(), "mas={mas} t={t}");
            }
        }
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let first = R22.density(42.0, -3.3).unwrap();
        for _ in 0..100 {
            assert_eq!(R22.density(42.0, -3.3).unwrap().to_bits(), first.to_bits());
        }
    }

    #[test]
    fn evaluate_conditions_matches_density() {
        let c = Conditions::new(64.0, 31.0).unwrap();
        let e = R22.evaluate_conditions(&c);
        assert_eq!(e.mass_percent, 64.0);
        assert_eq!(e.temperature, 31.0);
        assert_eq!(e.density, R22.density(64.0, 31.0).unwrap());
    }

    #[test]
    fn custom_tolerances_widen_domain() {
        let r22 = OimlR22::with_tolerances(Tolerances::new(0.01, 1e-14).unwrap());
        assert!(r22.density(100.001, 40.001).is_ok());
        assert_eq!(r22.tolerances().domain(), 0.01);
    }
}
