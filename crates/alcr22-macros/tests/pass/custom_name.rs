use alcr22_macros::Series;

#[derive(Debug, Clone, Copy, Series)]
#[series(name = "WaterCurve")]
pub struct WaterPoint {
    pub temperature: f64,
    pub density: f64,
}

fn main() {
    let p = WaterPoint { temperature: 20.0, density: 998.20123 };
    let mut curve = WaterCurve::with_capacity(5);
    curve.push(&p);
    assert_eq!(curve.len(), 1);
    assert_eq!(curve.density, vec![998.20123]);
    assert_eq!(WaterPoint::field_names(), &["temperature", "density"]);
}
