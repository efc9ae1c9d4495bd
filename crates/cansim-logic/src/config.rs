//! Run configuration and fail-fast validation.
//!
//! Out-of-range parameters are rejected at model construction rather
//! than silently clamped.

use crate::lifesupport::{FULL_SOLAR_ARRAY_WATTS, MAX_EXCESS_RATE_PERCENT};
use serde::{Deserialize, Serialize};

/// Caller-supplied parameters for one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Initial crew population.
    pub humans: u32,
    /// Initial plant population.
    pub plants: u32,
    /// Crop grown at init and planted by crew (species table key).
    pub crop: String,
    /// Ticks between regrowth spawns.
    pub spread_turns: u32,
    /// Ticks for a seedling to become harvestable.
    pub maturity_turns: u32,
    /// Initial oxygen partial pressure (kPa).
    pub oxygen: f64,
    /// Initial carbon partial pressure (kPa).
    pub carbon: f64,
    /// Whether plants spread into empty neighboring cells.
    pub regrowth: bool,
    /// Whether the excess-CO2 injector runs each tick.
    pub excess_co2: bool,
    /// Percent of current carbon injected per tick while enabled.
    pub excess_rate: f64,
    /// Whether the CO2 scrubber runs each tick.
    pub scrubber: bool,
    /// Solar power available to the scrubber (W).
    pub solar_input: f64,
    /// Grid width in cells.
    pub width: u32,
    /// Grid height in cells.
    pub height: u32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            humans: 1,
            plants: 5,
            crop: "wheat".to_string(),
            spread_turns: 20,
            maturity_turns: 20,
            oxygen: 21.21,
            carbon: 0.13,
            regrowth: false,
            excess_co2: false,
            excess_rate: 1.0,
            scrubber: false,
            solar_input: 0.0,
            width: 20,
            height: 20,
        }
    }
}

impl RoomConfig {
    /// Reject out-of-range parameters before any state is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if self.crop.is_empty() {
            return Err(ConfigError::EmptyCropName);
        }
        if self.spread_turns == 0 {
            return Err(ConfigError::ZeroSpread);
        }
        if self.maturity_turns == 0 {
            return Err(ConfigError::ZeroMaturity);
        }
        if self.oxygen < 0.0 {
            return Err(ConfigError::NegativeGas {
                name: "oxygen",
                value: self.oxygen,
            });
        }
        if self.carbon < 0.0 {
            return Err(ConfigError::NegativeGas {
                name: "carbon",
                value: self.carbon,
            });
        }
        if self.excess_co2 && !(0.0..=MAX_EXCESS_RATE_PERCENT).contains(&self.excess_rate) {
            return Err(ConfigError::ExcessRateOutOfRange(self.excess_rate));
        }
        if self.scrubber && !(0.0..=FULL_SOLAR_ARRAY_WATTS).contains(&self.solar_input) {
            return Err(ConfigError::SolarOutOfRange(self.solar_input));
        }
        Ok(())
    }
}

/// Configuration rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyGrid { width: u32, height: u32 },
    EmptyCropName,
    ZeroSpread,
    ZeroMaturity,
    NegativeGas { name: &'static str, value: f64 },
    ExcessRateOutOfRange(f64),
    SolarOutOfRange(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "grid must have positive dimensions, got {}x{}", width, height)
            }
            ConfigError::EmptyCropName => write!(f, "crop name must not be empty"),
            ConfigError::ZeroSpread => write!(f, "spread_turns must be at least 1"),
            ConfigError::ZeroMaturity => write!(f, "maturity_turns must be at least 1"),
            ConfigError::NegativeGas { name, value } => {
                write!(f, "initial {} level must be non-negative, got {}", name, value)
            }
            ConfigError::ExcessRateOutOfRange(rate) => {
                write!(f, "excess_rate must be within 0..=100 percent, got {}", rate)
            }
            ConfigError::SolarOutOfRange(watts) => {
                write!(f, "solar_input must be within 0..=400 W, got {}", watts)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert!(RoomConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_grid_rejected() {
        let config = RoomConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyGrid { width: 0, height: 20 })
        ));
    }

    #[test]
    fn test_zero_countdowns_rejected() {
        let config = RoomConfig {
            spread_turns: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpread));

        let config = RoomConfig {
            maturity_turns: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroMaturity));
    }

    #[test]
    fn test_negative_gas_rejected() {
        let config = RoomConfig {
            carbon: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeGas { name: "carbon", .. })
        ));
    }

    #[test]
    fn test_device_knobs_checked_only_when_enabled() {
        let config = RoomConfig {
            excess_co2: false,
            excess_rate: 500.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = RoomConfig {
            excess_co2: true,
            excess_rate: 500.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ExcessRateOutOfRange(500.0))
        );

        let config = RoomConfig {
            scrubber: true,
            solar_input: -5.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::SolarOutOfRange(-5.0)));
    }
}
