//! Newton-cooling temperature relaxation.

use crate::constants::{
    AIR_DENSITY, AIR_SPECIFIC_HEAT, AMBIENT_TEMP, BODY_HEAT_TRANSFER, BODY_TEMP_SETPOINT,
    HULL_HEAT_TRANSFER,
};

/// One tick of relaxation of `current` toward `setpoint` through a
/// medium with the cabin's air density and specific heat.
pub fn newton_flux(current: f64, setpoint: f64, transfer_coeff: f64) -> f64 {
    (setpoint - current) * transfer_coeff / (AIR_DENSITY * AIR_SPECIFIC_HEAT)
}

/// Cabin temperature change from one crew member's body heat this tick.
pub fn body_heat_flux(cabin_temp: f64) -> f64 {
    newton_flux(cabin_temp, BODY_TEMP_SETPOINT, BODY_HEAT_TRANSFER)
}

/// Cabin temperature change from hull losses toward ambient this tick.
pub fn hull_loss_flux(cabin_temp: f64) -> f64 {
    newton_flux(cabin_temp, AMBIENT_TEMP, HULL_HEAT_TRANSFER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_heat_warms_cold_cabin() {
        let flux = body_heat_flux(296.0);
        assert!(flux > 0.0);
        assert!((flux - (310.0 - 296.0) * 0.04372 / (1.29 * 1.005)).abs() < 1e-12);
    }

    #[test]
    fn test_body_heat_vanishes_at_setpoint() {
        assert_eq!(body_heat_flux(310.0), 0.0);
    }

    #[test]
    fn test_hull_cools_overheated_cabin() {
        assert!(hull_loss_flux(305.0) < 0.0);
        assert!(hull_loss_flux(290.0) > 0.0);
    }
}
