//! cansim core - closed-room life-support simulation engine.
//!
//! A population of crew members (Humans) and crops (Plants) exchange
//! oxygen and carbon dioxide inside a sealed single-room habitat,
//! placed on a toroidal grid and activated in discrete ticks.
//!
//! # Architecture
//!
//! Agents live in a `hecs` world that serves as the agent arena:
//! - **Components**: pure data per agent (Position, Human, Plant)
//! - **Scheduler**: species-partitioned random activation over the arena
//! - **Grid**: toroidal multi-occupancy cell space kept in sync with
//!   every agent's Position component
//! - **Environment**: shared cabin atmosphere passed by reference into
//!   every step
//!
//! # Example
//!
//! ```rust,no_run
//! use cansim_core::prelude::*;
//! use cansim_logic::config::RoomConfig;
//!
//! let table = builtin_species_table().unwrap();
//! let mut model = RoomModel::new(RoomConfig::default(), &table).unwrap();
//!
//! for _ in 0..200 {
//!     let snapshot = model.tick().unwrap();
//!     println!("step {}: O2 {:.2} kPa", snapshot.step, snapshot.oxygen);
//! }
//! ```

pub mod components;
pub mod engine;
pub mod environment;
pub mod error;
pub mod grid;
pub mod schedule;
pub mod systems;
pub mod walker;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::components::*;
    pub use crate::engine::{builtin_species_table, RoomModel, TickSnapshot};
    pub use crate::environment::Environment;
    pub use crate::grid::Grid;
    pub use crate::schedule::Scheduler;
}
