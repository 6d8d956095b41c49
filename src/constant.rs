//! Physical constants in SI units (CODATA 2018).

/// Mathematica constant pi
pub const PI: f64 = std::f64::consts::PI;

/// Planck constant in SI units of J s
pub const H: f64 = 6.626_070_15e-34;

/// Reduced plank constant in SI units
pub const HBAR: f64 = H / (2.0 * PI);

/// Elementary charge in Coulombs. Also the joule to electronvolt divisor.
pub const E_CHARGE: f64 = 1.602_176_634e-19;

/// Electron rest mass in kg
pub const M_ELECTRON: f64 = 9.109_383_701_5e-31;

/// Vacuum permittivity in SI units of F/m
pub const EPSILON0: f64 = 8.854_187_812_8e-12;

/// Speed of light in SI units of m/s
pub const C: f64 = 299_792_458.0;

/// Bohr radius in m, as tabulated.
///
/// [crate::radius::bohr_radius] derives the same length from the constants above.
pub const A0: f64 = 5.291_772_109_03e-11;
