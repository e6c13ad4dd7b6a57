/// OIML R22 polynomial terms.
///
/// Pure functions over the mass fraction `p` (0..=1) and the temperature
/// deviation `dt = t - 20 °C`. No domain checks happen here; callers hold
/// validated `Conditions`. Sums accumulate in ascending power order.
use super::constants::{A, B, C};

/// Concentration polynomial without its constant term: Σ A(k) * p^k, k = 1..=11.
pub fn concentration_sum(p: f64) -> f64 {
    let mut sum = 0.0;
    for (k, a) in A.iter().enumerate().skip(1) {
        sum += a * p.powi(k as i32);
    }
    sum
}

/// Temperature polynomial: Σ B(k) * dt^(k+1), k = 0..=5.
pub fn temperature_sum(dt: f64) -> f64 {
    let mut sum = 0.0;
    for (k, b) in B.iter().enumerate() {
        sum += b * dt.powi(k as i32 + 1);
    }
    sum
}

/// Cross polynomial: Σ_i Σ_k C(i, k) * p^(k+1) * dt^(i+1) over the jagged rows.
pub fn cross_sum(p: f64, dt: f64) -> f64 {
    let mut sum = 0.0;
    for (i, row) in C.iter().enumerate() {
        let dt_pow = dt.powi(i as i32 + 1);
        for (k, c) in row.iter().enumerate() {
            sum += c * p.powi(k as i32 + 1) * dt_pow;
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_vanish_at_origin() {
        assert_eq!(concentration_sum(0.0), 0.0);
        assert_eq!(temperature_sum(0.0), 0.0);
        assert_eq!(cross_sum(0.0, 5.0), 0.0);
        assert_eq!(cross_sum(0.5, 0.0), 0.0);
    }

    #[test]
    fn concentration_sum_at_unit_fraction() {
        // Pure ethanol at 20 °C is 789.2391233 kg/m³.
        let rho = A[0] + concentration_sum(1.0);
        assert!((rho - 789.2391233).abs() < 1e-6);
    }

    #[test]
    fn temperature_sum_matches_first_order_near_reference() {
        let dt = 1e-6;
        let expected = B[0] * dt;
        assert!((temperature_sum(dt) - expected).abs() < 1e-13);
    }

    #[test]
    fn warmer_water_is_lighter() {
        assert!(temperature_sum(10.0) < 0.0);
        assert!(temperature_sum(20.0) < temperature_sum(10.0));
    }

    #[test]
    fn cross_sum_is_linear_in_first_row_for_small_dt() {
        let p: f64 = 0.5;
        let dt = 1e-6;
        let first_row: f64 = C[0]
            .iter()
            .enumerate()
            .map(|(k, c)| c * p.powi(k as i32 + 1))
            .sum();
        assert!((cross_sum(p, dt) - first_row * dt).abs() < 1e-12);
    }
}
