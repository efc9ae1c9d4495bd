//! Shared physical constants for the single-room habitat.
//!
//! The coefficients carry the unit intent of the source data (kPa, MJ,
//! kg) and are kept as the literal values the gas-exchange formulas were
//! calibrated with, quirks included.

/// Converts a per-day gas exchange rate into the partial-pressure change
/// of the reference cabin volume over one one-hour tick.
pub const CABIN_VOLUME_FACTOR: f64 = 0.0416;

/// Molar mass of O2 (g/mol).
pub const O2_MOLAR_MASS: f64 = 32.0;

/// Molar mass of CO2 (g/mol).
pub const CO2_MOLAR_MASS: f64 = 44.0;

/// Growing area represented by one plant agent, scaled to cabin volume.
pub const CROP_AREA_SCALE: f64 = 3.369e-3;

/// Cabin air density (kg/m^3).
pub const AIR_DENSITY: f64 = 1.29;

/// Specific heat of cabin air (J/(g·K)).
pub const AIR_SPECIFIC_HEAT: f64 = 1.005;

/// Human core temperature driving body-heat transfer into the cabin (K).
pub const BODY_TEMP_SETPOINT: f64 = 310.0;

/// Hull/cabin equilibrium temperature (K).
pub const AMBIENT_TEMP: f64 = 296.0;

/// Heat transfer coefficient from a crew member into cabin air.
pub const BODY_HEAT_TRANSFER: f64 = 0.04372;

/// Heat loss coefficient through the hull toward ambient.
pub const HULL_HEAT_TRANSFER: f64 = 0.0109;

/// Tick-per-day divisor for daily metabolic budgets (one tick = one hour).
pub const HOURS_PER_DAY: f64 = 24.0;
