use alcr22::logging::init_tracing;
use alcr22::OimlR22;

const MASS_PERCENT: [f64; 11] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
const TEMPERATURES: [f64; 7] = [-20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0];

fn main() {
    init_tracing();

    let r22 = OimlR22::new();

    // Density grid (kg/m³)
    print!(" Mas % |");
    for t in TEMPERATURES {
        print!(" {:>8.1}", t);
    }
    println!();
    println!("-------|{}", "-".repeat(9 * TEMPERATURES.len()));

    for mas in MASS_PERCENT {
        print!(" {:>5.1} |", mas);
        for t in TEMPERATURES {
            match r22.density(mas, t) {
                Ok(rho) => print!(" {:>8.3}", rho),
                Err(e) => {
                    tracing::warn!(error = %e, mas, t, "grid point rejected");
                    print!(" {:>8}", "-");
                }
            }
        }
        println!();
    }

    println!();
    println!("max density: {:.10} kg/m³", r22.max_density());
    println!("min density: {:.10} kg/m³", r22.min_density());
}
