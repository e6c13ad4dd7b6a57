/// OIML R22: density formula for alcohol-water mixtures (1973).
///
/// Three polynomial terms in the mass fraction and the deviation from the
/// 20 °C reference temperature, evaluated against fixed coefficient tables.
pub mod conditions;
pub mod constants;
pub mod formula;
pub mod outputs;
pub mod processes;
