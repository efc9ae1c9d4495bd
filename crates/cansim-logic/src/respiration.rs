//! Crew metabolic gas exchange and energy bookkeeping.
//!
//! Active rates apply while foraging or planting; resting rates cover
//! sedentary ticks. Everything is a named, tunable constant so habitat
//! configurations can substitute different crew metabolic profiles.
//! The active O2 and CO2 duration fractions really are 2.1 vs 2.0; the
//! calibration data is asymmetric.

use crate::constants::{CABIN_VOLUME_FACTOR, HOURS_PER_DAY};

/// O2 uptake rate coefficient per crew member.
pub const O2_EXCHANGE_RATE: f64 = 0.06265;

/// CO2 output rate coefficient per crew member.
pub const CO2_EXCHANGE_RATE: f64 = 0.05776;

/// Duration fraction for O2 uptake at active exertion.
pub const ACTIVE_O2_FRACTION: f64 = 2.1;

/// Duration fraction for CO2 output at active exertion.
pub const ACTIVE_CO2_FRACTION: f64 = 2.0;

/// Duration fraction for both gases at rest.
pub const RESTING_FRACTION: f64 = 0.63;

/// Daily energy burned at active exertion (MJ/day).
pub const ACTIVE_ENERGY_PER_DAY: f64 = 11.82;

/// Daily energy burned at rest (MJ/day).
pub const RESTING_ENERGY_PER_DAY: f64 = 7.43;

/// Dry-mass to digestible-mass conversion for harvested crops.
pub const EDIBLE_MASS_CONVERSION: f64 = 0.00456;

/// Metabolizable energy density of crop dry mass (MJ/g equivalent).
pub const FOOD_ENERGY_DENSITY: f64 = 4.0;

/// Carbon returned to the cabin per gram of discarded inedible mass.
pub const INEDIBLE_CARBON_RELEASE: f64 = 0.0000969;

/// Oxygen returned to the cabin per gram of discarded inedible mass.
pub const INEDIBLE_OXYGEN_RELEASE: f64 = 0.0000972;

/// Oxygen drawn from the cabin by one active tick.
pub fn active_oxygen_draw() -> f64 {
    CABIN_VOLUME_FACTOR * O2_EXCHANGE_RATE * ACTIVE_O2_FRACTION
}

/// Carbon released into the cabin by one active tick.
pub fn active_carbon_output() -> f64 {
    CABIN_VOLUME_FACTOR * CO2_EXCHANGE_RATE * ACTIVE_CO2_FRACTION
}

/// Oxygen drawn from the cabin by one resting tick.
pub fn resting_oxygen_draw() -> f64 {
    CABIN_VOLUME_FACTOR * O2_EXCHANGE_RATE * RESTING_FRACTION
}

/// Carbon released into the cabin by one resting tick.
pub fn resting_carbon_output() -> f64 {
    CABIN_VOLUME_FACTOR * CO2_EXCHANGE_RATE * RESTING_FRACTION
}

/// Energy debit for one active tick.
pub fn active_energy_cost() -> f64 {
    ACTIVE_ENERGY_PER_DAY / HOURS_PER_DAY
}

/// Energy debit for one resting tick.
pub fn resting_energy_cost() -> f64 {
    RESTING_ENERGY_PER_DAY / HOURS_PER_DAY
}

/// Energy gained from the edible dry mass of a harvested plant.
pub fn harvest_energy_gain(edible_yield: f64) -> f64 {
    EDIBLE_MASS_CONVERSION * edible_yield * FOOD_ENERGY_DENSITY
}

/// Carbon released while discarding a harvested plant's inedible mass.
pub fn harvest_carbon_release(inedible_yield: f64) -> f64 {
    INEDIBLE_CARBON_RELEASE * inedible_yield
}

/// Oxygen released while discarding a harvested plant's inedible mass.
pub fn harvest_oxygen_release(inedible_yield: f64) -> f64 {
    INEDIBLE_OXYGEN_RELEASE * inedible_yield
}
