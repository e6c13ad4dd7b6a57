use alcr22_macros::Series;

#[derive(Debug, Clone, Copy, PartialEq, Series)]
pub struct Reading {
    pub mass_percent: f64,
    pub temperature: f64,
    pub density: f64,
}

fn main() {
    let r = Reading { mass_percent: 40.0, temperature: 20.0, density: 935.2 };
    let mut s = ReadingSeries::with_capacity(10);
    assert!(s.is_empty());
    s.push(&r);
    assert_eq!(s.len(), 1);
    assert!(!s.is_empty());
    assert_eq!(s.get(0), Some(r));
    assert_eq!(s.iter().count(), 1);
    assert_eq!(Reading::field_names(), &["mass_percent", "temperature", "density"]);
}
