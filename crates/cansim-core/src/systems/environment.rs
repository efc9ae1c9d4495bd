//! Per-tick exogenous cabin adjustments: excess-CO2 injection, scrubber
//! draw, hull heat loss.

use cansim_logic::lifesupport::{excess_injection, scrubber_active, scrubber_draw};
use cansim_logic::thermal::hull_loss_flux;

use crate::environment::Environment;

/// Applied once per tick after every agent has stepped.
pub fn environment_step(env: &mut Environment) {
    if env.excess_co2 {
        env.credit_carbon(excess_injection(env.carbon, env.excess_rate));
    }
    if env.scrubber && scrubber_active(env.carbon) {
        env.debit_carbon(scrubber_draw(env.solar_input));
    }
    env.temperature += hull_loss_flux(env.temperature);
}

#[cfg(test)]
mod tests {
    use super::*;
    use cansim_logic::config::RoomConfig;

    #[test]
    fn test_injection_compounds_carbon() {
        let mut env = Environment::from_config(&RoomConfig {
            excess_co2: true,
            excess_rate: 10.0,
            carbon: 0.5,
            ..Default::default()
        });
        environment_step(&mut env);
        assert!((env.carbon - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_scrubber_gated_on_carbon() {
        let mut env = Environment::from_config(&RoomConfig {
            scrubber: true,
            solar_input: 400.0,
            carbon: 0.09,
            ..Default::default()
        });
        environment_step(&mut env);
        assert_eq!(env.carbon, 0.09);

        env.carbon = 0.2;
        environment_step(&mut env);
        assert!((env.carbon - 0.16).abs() < 1e-12);
    }

    #[test]
    fn test_idle_devices_leave_gases_alone() {
        let mut env = Environment::from_config(&RoomConfig::default());
        environment_step(&mut env);
        assert_eq!(env.oxygen, 21.21);
        assert_eq!(env.carbon, 0.13);
    }

    #[test]
    fn test_hot_cabin_relaxes_toward_ambient() {
        let mut env = Environment::from_config(&RoomConfig::default());
        env.temperature = 305.0;
        environment_step(&mut env);
        assert!(env.temperature < 305.0);
        assert!(env.temperature > 296.0);
    }
}
