//! Shared cabin atmosphere state.
//!
//! One `Environment` per model, passed by `&mut` into every agent step —
//! never ambient/static — so parallel parameter sweeps cannot
//! cross-contaminate. Gas levels are floored at zero by the credit/debit
//! mutators after every change.

use cansim_logic::config::RoomConfig;
use cansim_logic::constants::AMBIENT_TEMP;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Environment {
    /// Oxygen partial pressure (kPa).
    pub oxygen: f64,
    /// Carbon dioxide partial pressure (kPa).
    pub carbon: f64,
    /// Cabin temperature (K).
    pub temperature: f64,
    /// Completed step count.
    pub steps: u64,
    /// Whether plants spread into empty neighboring cells.
    pub regrowth: bool,
    /// Whether the excess-CO2 injector runs each tick.
    pub excess_co2: bool,
    /// Injection rate, percent of current carbon per tick.
    pub excess_rate: f64,
    /// Whether the CO2 scrubber runs each tick.
    pub scrubber: bool,
    /// Solar power available to the scrubber (W).
    pub solar_input: f64,
}

impl Environment {
    pub fn from_config(config: &RoomConfig) -> Self {
        Self {
            oxygen: config.oxygen,
            carbon: config.carbon,
            temperature: AMBIENT_TEMP,
            steps: 0,
            regrowth: config.regrowth,
            excess_co2: config.excess_co2,
            excess_rate: config.excess_rate,
            scrubber: config.scrubber,
            solar_input: config.solar_input,
        }
    }

    pub fn credit_oxygen(&mut self, amount: f64) {
        self.oxygen = (self.oxygen + amount).max(0.0);
    }

    pub fn debit_oxygen(&mut self, amount: f64) {
        self.oxygen = (self.oxygen - amount).max(0.0);
    }

    pub fn credit_carbon(&mut self, amount: f64) {
        self.carbon = (self.carbon + amount).max(0.0);
    }

    pub fn debit_carbon(&mut self, amount: f64) {
        self.carbon = (self.carbon - amount).max(0.0);
    }
}
