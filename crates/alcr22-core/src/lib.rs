//! alcr22: density of alcohol-water mixtures after OIML R22 (1973).
//!
//! The evaluator sums three polynomial terms: a concentration term at the
//! 20 °C reference temperature, a pure-water temperature term, and a cross
//! term coupling both. Inputs outside the validated domain are rejected
//! with a [`DensityError`] instead of being extrapolated.
//!
//! ```
//! use alcr22_core::OimlR22;
//!
//! let r22 = OimlR22::new();
//! let rho = r22.density(40.0, 20.0).unwrap();
//! assert!(rho > r22.min_density() && rho < r22.max_density());
//! assert!(r22.density(40.0, 41.0).is_err());
//! ```
pub mod error;
pub mod logging;
pub mod r22;
pub mod traits;

pub use error::{DensityError, Result};
pub use r22::conditions::{Conditions, Tolerances};
pub use r22::formula::OimlR22;
pub use r22::outputs::{Evaluation, EvaluationSeries};
pub use traits::DensityFormula;
