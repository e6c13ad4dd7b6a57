/// Evaluated density points.
///
/// `#[derive(Series)]` generates `EvaluationSeries`, the columnar collection
/// returned by batch evaluation.
use alcr22_macros::Series;

/// One evaluated point of the density surface.
#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct Evaluation {
    /// Mass concentration [%]
    pub mass_percent: f64,
    /// Temperature [°C]
    pub temperature: f64,
    /// Density [kg/m³]
    pub density: f64,
}
