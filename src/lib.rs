/// alcr22: density of alcohol-water mixtures in Rust.
///
/// Facade over `alcr22-core`, implementing the OIML R22 (1973) reference
/// formula for mass concentration 0..=100 % and temperature -20..=40 °C.
pub use alcr22_core::*;
