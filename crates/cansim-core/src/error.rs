//! Engine error types.
//!
//! Grid misuse and mid-tick defects are surfaced with enough context to
//! abort the run meaningfully; ecological transitions (death, die-off)
//! are not errors.

use crate::components::Species;
use cansim_logic::config::ConfigError;
use hecs::Entity;

/// Misuse of the grid contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Position outside declared bounds before wraparound normalization.
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// Removal of an agent that is not in the cell (double remove).
    NotInCell { x: u32, y: u32 },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "position ({}, {}) outside {}x{} grid bounds",
                x, y, width, height
            ),
            GridError::NotInCell { x, y } => {
                write!(f, "agent not present in cell ({}, {})", x, y)
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A defect hit while stepping an agent; carries the context the run
/// loop reports before aborting.
#[derive(Debug)]
pub struct SimError {
    pub tick: u64,
    pub species: Species,
    pub agent: Entity,
    pub source: GridError,
}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "tick {}: {} agent {:?}: {}",
            self.tick,
            self.species.label(),
            self.agent,
            self.source
        )
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Failure to construct a model.
#[derive(Debug)]
pub enum ModelError {
    Config(ConfigError),
    UnknownCrop(String),
    SpeciesTable(serde_json::Error),
    Grid(GridError),
}

impl From<ConfigError> for ModelError {
    fn from(e: ConfigError) -> Self {
        ModelError::Config(e)
    }
}

impl From<GridError> for ModelError {
    fn from(e: GridError) -> Self {
        ModelError::Grid(e)
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelError::Config(e) => write!(f, "invalid configuration: {}", e),
            ModelError::UnknownCrop(name) => {
                write!(f, "crop {:?} not found in the species table", name)
            }
            ModelError::SpeciesTable(e) => write!(f, "species table parse error: {}", e),
            ModelError::Grid(e) => write!(f, "grid error during setup: {}", e),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Config(e) => Some(e),
            ModelError::SpeciesTable(e) => Some(e),
            ModelError::Grid(e) => Some(e),
            ModelError::UnknownCrop(_) => None,
        }
    }
}
