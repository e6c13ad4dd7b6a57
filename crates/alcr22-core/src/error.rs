//! Error type for density evaluation.

/// Errors returned by the density evaluator.
///
/// Every variant is a caller error: the formula itself has no transient
/// failure modes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DensityError {
    #[error("mass concentration {value} % is outside [{min}, {max}]")]
    MassOutOfRange { value: f64, min: f64, max: f64 },

    #[error("temperature {value} °C is outside [{min}, {max}]")]
    TemperatureOutOfRange { value: f64, min: f64, max: f64 },

    #[error("mass_percent and temperature must have the same length, got {mass} and {temperature}")]
    LengthMismatch { mass: usize, temperature: usize },

    #[error("tolerance {name} = {value} must be finite and non-negative")]
    InvalidTolerance { name: &'static str, value: f64 },

    #[error("point {index}: {source}")]
    AtIndex {
        index: usize,
        source: Box<DensityError>,
    },
}

impl DensityError {
    /// Attach the position of a failing point inside a batch.
    pub fn at(self, index: usize) -> Self {
        DensityError::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// True if the error (or the error it wraps) is a concentration or
    /// temperature domain violation.
    pub fn is_domain_violation(&self) -> bool {
        match self {
            DensityError::MassOutOfRange { .. } | DensityError::TemperatureOutOfRange { .. } => {
                true
            }
            DensityError::AtIndex { source, .. } => source.is_domain_violation(),
            DensityError::LengthMismatch { .. } | DensityError::InvalidTolerance { .. } => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, DensityError>;
