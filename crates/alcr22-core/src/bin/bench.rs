/// Pure Rust benchmarks for the density evaluator.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use alcr22_core::logging::init_tracing;
use alcr22_core::r22::constants::{MASS_BOUNDS, TEMPERATURE_BOUNDS};
use alcr22_core::{DensityFormula, OimlR22};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic in-domain inputs.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let mass_span = MASS_BOUNDS.max - MASS_BOUNDS.min;
    let temp_span = TEMPERATURE_BOUNDS.max - TEMPERATURE_BOUNDS.min;
    let mass: Vec<f64> = (0..n).map(|_| MASS_BOUNDS.min + next_f64() * mass_span).collect();
    let temp: Vec<f64> = (0..n)
        .map(|_| TEMPERATURE_BOUNDS.min + next_f64() * temp_span)
        .collect();
    (mass, temp)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_density(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let r22 = OimlR22::new();
    let mut results = Vec::new();

    for &n in sizes {
        let (mass, temp) = make_data(n, 42);

        // Warmup
        black_box(r22.evaluate(&mass, &temp).ok());

        let dur = median_time(|| {
            black_box(r22.evaluate(&mass, &temp).ok());
        });
        results.push(("density", n, dur));
    }
    results
}

fn bench_water(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let r22 = OimlR22::new();
    let mut results = Vec::new();

    for &n in sizes {
        let (_, temp) = make_data(n, 7);

        // Warmup
        black_box(r22.water_curve(&temp).ok());

        let dur = median_time(|| {
            black_box(r22.water_curve(&temp).ok());
        });
        results.push(("density_of_water", n, dur));
    }
    results
}

fn main() {
    init_tracing();

    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Operation", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_density(&[1_000, 100_000, 1_000_000]));
    all_results.extend(bench_water(&[1_000, 100_000, 1_000_000]));

    for (op, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        tracing::debug!(operation = op, points = n, ms, "benchmark finished");
        println!("{:<18} {:>8}      {:>8.2}", op, n, ms);
    }

    println!("============================================================");
}
