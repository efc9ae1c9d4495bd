//! Atmosphere and energy thresholds that gate agent behavior.
//!
//! Crossing a lethal threshold is an ordinary ecological transition, not
//! an error: it drives agent removal, never program failure.

/// Oxygen partial pressure below which crew cannot survive (kPa).
pub const O2_LETHAL_FLOOR: f64 = 15.17;

/// Carbon partial pressure above which crew cannot survive (kPa).
pub const CO2_LETHAL_CEILING: f64 = 0.53;

/// Oxygen level that prompts the crew to plant more crops.
pub const O2_REPLANT_FLOOR: f64 = 16.0;

/// Carbon level that prompts the crew to plant more crops.
pub const CO2_REPLANT_CEILING: f64 = 0.3;

/// Carbon level below which crew start eating standing crops.
pub const CO2_APPETITE_FLOOR: f64 = 0.04;

/// Carbon level below which plants can no longer photosynthesize.
pub const CO2_PHOTOSYNTHESIS_FLOOR: f64 = 0.015;

/// Energy below which a crew member forages.
pub const FORAGE_ENERGY_FLOOR: f64 = 75.0;

/// Lower edge of the energy band that triggers precautionary planting.
pub const REPLANT_ENERGY_LOW: f64 = 80.0;

/// Upper edge of the energy band that triggers precautionary planting.
pub const REPLANT_ENERGY_HIGH: f64 = 90.0;

/// Minimum standing crop population the crew maintains.
pub const MIN_PLANT_STOCK: usize = 10;

/// Starting energy for a crew member (MJ equivalent).
pub const INITIAL_HUMAN_ENERGY: f64 = 100.0;

/// Coarse habitability tiers for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtmosphereHazard {
    /// Both gases within comfortable range.
    Nominal,
    /// Survivable, but the crew will be replanting.
    Strained,
    /// Crew members die at these levels.
    Lethal,
}

/// Whether the atmosphere kills a crew member outright.
pub fn lethal_for_humans(oxygen: f64, carbon: f64) -> bool {
    oxygen < O2_LETHAL_FLOOR || carbon > CO2_LETHAL_CEILING
}

/// Whether the atmosphere starves plants of carbon.
pub fn starves_plants(carbon: f64) -> bool {
    carbon < CO2_PHOTOSYNTHESIS_FLOOR
}

/// Assess the habitability of the cabin atmosphere.
pub fn assess(oxygen: f64, carbon: f64) -> AtmosphereHazard {
    if lethal_for_humans(oxygen, carbon) {
        AtmosphereHazard::Lethal
    } else if oxygen < O2_REPLANT_FLOOR || carbon > CO2_REPLANT_CEILING {
        AtmosphereHazard::Strained
    } else {
        AtmosphereHazard::Nominal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_atmosphere_nominal() {
        assert_eq!(assess(21.21, 0.13), AtmosphereHazard::Nominal);
    }

    #[test]
    fn test_low_oxygen_strained_then_lethal() {
        assert_eq!(assess(15.9, 0.13), AtmosphereHazard::Strained);
        assert_eq!(assess(15.0, 0.13), AtmosphereHazard::Lethal);
    }

    #[test]
    fn test_high_carbon_strained_then_lethal() {
        assert_eq!(assess(21.21, 0.35), AtmosphereHazard::Strained);
        assert_eq!(assess(21.21, 0.54), AtmosphereHazard::Lethal);
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(!lethal_for_humans(15.17, 0.53));
        assert!(lethal_for_humans(15.169, 0.0));
        assert!(!starves_plants(0.015));
        assert!(starves_plants(0.0149));
    }
}
