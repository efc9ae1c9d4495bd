//! Crop species traits: gas-exchange and dry-mass yield coefficients,
//! keyed by crop name in an external data table.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-crop coefficients feeding the photosynthesis and harvest math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeciesTraits {
    /// O2 released per unit growing area per day (g); divided by molar
    /// mass in the exchange formula.
    pub oxygen_exchange: f64,
    /// CO2 absorbed per unit growing area per day (g).
    pub carbon_exchange: f64,
    /// Edible dry mass harvested from a grown plant (g).
    pub edible_yield: f64,
    /// Inedible dry mass discarded at harvest (g).
    pub inedible_yield: f64,
}

/// Crop table keyed by name, loaded from `data/plant_species.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesTable {
    crops: HashMap<String, SpeciesTraits>,
}

impl SpeciesTable {
    pub fn get(&self, name: &str) -> Option<SpeciesTraits> {
        self.crops.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.crops.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, traits: SpeciesTraits) {
        self.crops.insert(name.into(), traits);
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.crops.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        let mut table = SpeciesTable::default();
        assert!(table.is_empty());
        table.insert(
            "wheat",
            SpeciesTraits {
                oxygen_exchange: 56.0,
                carbon_exchange: 77.0,
                edible_yield: 22.73,
                inedible_yield: 22.73,
            },
        );
        assert_eq!(table.len(), 1);
        assert!(table.contains("wheat"));
        assert!(table.get("kudzu").is_none());
        assert_eq!(table.get("wheat").map(|t| t.carbon_exchange), Some(77.0));
    }
}
