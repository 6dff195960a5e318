pub const G: f64 = 6.67430e-11; // Gravitational constant (m³/kg/s²)
pub const M_SUN: f64 = 1.98892e30; // Solar mass (kg)
pub const AU_M: f64 = 1.495978707e11; // Astronomical unit (m)

// Time conversions
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const DAYS_PER_YEAR: f64 = 365.25; // Julian year
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * DAYS_PER_YEAR;
pub const MJD_J2000: f64 = 51_544.5; // J2000.0 as a Modified Julian Date

// Math
pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;
