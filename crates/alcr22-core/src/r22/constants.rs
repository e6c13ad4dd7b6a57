/// OIML R22 coefficient tables and model contract.
///
/// Centralises every fixed value of the formula. The coefficients are
/// fitted against the mass fraction of alcohol (0..=1), not the percentage.

// -- Reference point --

/// Temperature at which the concentration polynomial is defined [°C].
pub const REFERENCE_TEMPERATURE: f64 = 20.0;

/// Conversion from mass percent to mass fraction.
pub const PERCENT: f64 = 100.0;

// -- Documented extremes of the density surface --

/// Density of pure water at its maximum, near 3.969 °C [kg/m³].
pub const MAX_DENSITY: f64 = 999.9688158097358;

/// Temperature at which pure water reaches [`MAX_DENSITY`] [°C].
pub const MAX_DENSITY_TEMPERATURE: f64 = 3.96913770;

/// Density of pure alcohol at 40 °C [kg/m³].
pub const MIN_DENSITY: f64 = 771.9323112798857;

// -- Validated domain --

/// Closed interval of valid input values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Whether `value` lies in `[min - slack, max + slack]`. NaN never does.
    #[inline]
    pub fn contains(&self, value: f64, slack: f64) -> bool {
        value >= self.min - slack && value <= self.max + slack
    }
}

/// Mass concentration of alcohol [%].
pub const MASS_BOUNDS: Bounds = Bounds {
    min: 0.0,
    max: 100.0,
};

/// Temperature [°C].
pub const TEMPERATURE_BOUNDS: Bounds = Bounds {
    min: -20.0,
    max: 40.0,
};

// -- Numerical tolerances --

/// Slack accepted beyond the domain bounds.
pub const DOMAIN_TOLERANCE: f64 = 1.0e-12;

/// Below this magnitude an input is treated as sitting on a special-cased
/// origin (zero concentration, 20 °C).
pub const ZERO_TOLERANCE: f64 = 1.0e-14;

// -- Coefficients --

/// A(k): concentration polynomial at 20 °C. A[0] is pure water at 20 °C.
pub const A: [f64; 12] = [
    998.20123,
    -192.9769495,
    389.1238958,
    -1668.103923,
    13522.15441,
    -88292.78388,
    306287.4042,
    -613838.1234,
    747017.2998,
    -547846.1354,
    223446.0334,
    -39032.85426,
];

/// B(k): pure-water temperature polynomial, powers 1..=6 of (t - 20 °C).
pub const B: [f64; 6] = [
    -2.0618513e-1,
    -5.2682542e-3,
    3.6130013e-5,
    -3.8957702e-7,
    7.169354e-9,
    -9.9739231e-11,
];

/// Row lengths of the cross-term table.
pub const C_ROW_LENGTHS: [usize; 5] = [11, 10, 9, 4, 2];

/// C(i, k): cross term, coefficient of p^(k+1) * (t - 20 °C)^(i+1).
///
/// Rows shrink with the temperature power; the missing entries are not
/// part of the fit.
pub const C: [&[f64]; 5] = [
    &[
        1.693443461530087e-1,
        -1.046914743455169e+1,
        7.196353469546523e+1,
        -7.047478054272792e+2,
        3.924090430035045e+3,
        -1.210164659068747e+4,
        2.248646550400788e+4,
        -2.605562982188164e+4,
        1.852373922069467e+4,
        -7.420201433430137e+3,
        1.285617841998974e+3,
    ],
    &[
        -1.19301300505701e-2,
        2.517399633803461e-1,
        -2.170575700563993,
        1.353034988843029e+1,
        -5.029988758537014e+1,
        1.09635566657757e+2,
        -1.422753946421155e+2,
        1.08043594285623e+2,
        -4.414153236817392e+1,
        7.442971530188783,
    ],
    &[
        -6.802995733503803e-4,
        1.876837790289664e-2,
        -0.2002561813734156,
        1.02299296671922,
        -2.895696483903638,
        4.810060584300675,
        -4.672147440794683,
        2.458043105903461,
        -5.411227621436812e-1,
    ],
    &[
        4.075376675622027e-6,
        -8.76305857347111e-6,
        6.515031360099368e-6,
        -1.51578483698721e-6,
    ],
    &[-2.788074354782409e-08, 1.345612883493354e-08],
];
