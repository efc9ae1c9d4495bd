//! Plant gas-exchange formulas.
//!
//! Exchange rates are normalized by molar mass and scaled by the growing
//! area one plant agent represents.

use crate::constants::{CABIN_VOLUME_FACTOR, CO2_MOLAR_MASS, CROP_AREA_SCALE, O2_MOLAR_MASS};
use crate::species::SpeciesTraits;

/// Oxygen released into the cabin by one plant over one tick.
pub fn oxygen_output(traits: &SpeciesTraits) -> f64 {
    CABIN_VOLUME_FACTOR * (traits.oxygen_exchange / O2_MOLAR_MASS) * CROP_AREA_SCALE
}

/// Carbon drawn from the cabin by one plant over one tick.
pub fn carbon_uptake(traits: &SpeciesTraits) -> f64 {
    CABIN_VOLUME_FACTOR * (traits.carbon_exchange / CO2_MOLAR_MASS) * CROP_AREA_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheat() -> SpeciesTraits {
        SpeciesTraits {
            oxygen_exchange: 56.0,
            carbon_exchange: 77.0,
            edible_yield: 22.73,
            inedible_yield: 22.73,
        }
    }

    #[test]
    fn test_wheat_exchange_closed_form() {
        let traits = wheat();
        assert!((oxygen_output(&traits) - 0.0416 * (56.0 / 32.0) * 3.369e-3).abs() < 1e-12);
        assert!((carbon_uptake(&traits) - 0.0416 * (77.0 / 44.0) * 3.369e-3).abs() < 1e-12);
    }

    #[test]
    fn test_uptake_positive() {
        let traits = wheat();
        assert!(oxygen_output(&traits) > 0.0);
        assert!(carbon_uptake(&traits) > 0.0);
    }
}
