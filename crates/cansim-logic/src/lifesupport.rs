//! Exogenous life-support devices: the CO2 scrubber and the excess-CO2
//! injector, both applied once per tick at the model level.

/// Carbon level the scrubber needs before it draws anything.
pub const SCRUBBER_CARBON_GATE: f64 = 0.1;

/// Carbon removed per watt of available solar power per tick.
pub const SCRUBBER_DRAW_PER_WATT: f64 = 1.0e-4;

/// Rated output of the full 10 m^2 solar array (W).
pub const FULL_SOLAR_ARRAY_WATTS: f64 = 400.0;

/// Upper bound for the excess-CO2 injection rate (percent per tick).
pub const MAX_EXCESS_RATE_PERCENT: f64 = 100.0;

/// Whether the scrubber has enough carbon to work on.
pub fn scrubber_active(carbon: f64) -> bool {
    carbon > SCRUBBER_CARBON_GATE
}

/// Carbon the scrubber removes this tick given available solar power.
pub fn scrubber_draw(solar_watts: f64) -> f64 {
    solar_watts * SCRUBBER_DRAW_PER_WATT
}

/// Carbon injected this tick: a percentage of the current carbon level.
pub fn excess_injection(carbon: f64, rate_percent: f64) -> f64 {
    carbon * rate_percent / 100.0
}
