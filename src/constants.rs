pub const G: f64 = 6.674e-11; // Gravitational constant (m³/kg/s²)
pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)

// Reference scenario
pub const DEFAULT_SEED: u32 = 20702017;
pub const DEFAULT_UE_COUNT: usize = 20;
pub const DEFAULT_SATELLITES_PER_TRAJECTORY: usize = 8;
pub const DEFAULT_TIME_UNIT: f64 = 0.01; // seconds per slot
pub const DEFAULT_TOTAL_DURATION: f64 = 200.0; // seconds

// Math
pub const PI: f64 = std::f64::consts::PI;
