/// Core trait for density formulas of alcohol-water mixtures.
///
/// Defines the pointwise surface every formula implements and derives the
/// batch operations from it.
use crate::error::{DensityError, Result};
use crate::r22::outputs::{Evaluation, EvaluationSeries};

pub trait DensityFormula {
    /// Density [kg/m³] at `mass_percent` [%] and `temperature` [°C].
    fn density(&self, mass_percent: f64, temperature: f64) -> Result<f64>;

    /// Density of pure water [kg/m³] at `temperature` [°C].
    fn density_of_water(&self, temperature: f64) -> Result<f64>;

    /// Upper extreme of the density surface [kg/m³].
    fn max_density(&self) -> f64;

    /// Lower extreme of the density surface [kg/m³].
    fn min_density(&self) -> f64;

    /// Evaluate paired slices point by point.
    ///
    /// Fails on unequal lengths, or on the first out-of-domain point with
    /// its index attached. No partial result is returned.
    fn evaluate(&self, mass_percent: &[f64], temperature: &[f64]) -> Result<EvaluationSeries> {
        if mass_percent.len() != temperature.len() {
            return Err(DensityError::LengthMismatch {
                mass: mass_percent.len(),
                temperature: temperature.len(),
            });
        }

        let n = mass_percent.len();
        let mut outputs = EvaluationSeries::with_capacity(n);

        for (index, (&m, &t)) in mass_percent.iter().zip(temperature).enumerate() {
            let density = self.density(m, t).map_err(|e| e.at(index))?;
            outputs.push(&Evaluation {
                mass_percent: m,
                temperature: t,
                density,
            });
        }

        tracing::trace!(points = n, "evaluated density batch");
        Ok(outputs)
    }

    /// Pure-water density for each temperature.
    fn water_curve(&self, temperature: &[f64]) -> Result<Vec<f64>> {
        temperature
            .iter()
            .enumerate()
            .map(|(index, &t)| self.density_of_water(t).map_err(|e| e.at(index)))
            .collect()
    }
}
