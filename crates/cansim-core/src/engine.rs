//! Room model orchestration: construction, the per-tick loop, and
//! read-only snapshots for the logging/visualization collaborator.

use cansim_logic::config::RoomConfig;
use cansim_logic::species::SpeciesTable;
use hecs::{Entity, World};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Human, Plant, Position, Species};
use crate::environment::Environment;
use crate::error::{ModelError, SimError};
use crate::grid::Grid;
use crate::schedule::Scheduler;
use crate::systems::{environment_step, SimParams};

/// Crop species data bundled with the crate (`data/plant_species.json`).
pub fn builtin_species_table() -> Result<SpeciesTable, ModelError> {
    serde_json::from_str(include_str!("../../../data/plant_species.json"))
        .map_err(ModelError::SpeciesTable)
}

/// Read-only per-tick metrics; no mutation path back into the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub step: u64,
    pub oxygen: f64,
    pub carbon: f64,
    pub temperature: f64,
    pub humans: usize,
    pub plants: usize,
}

/// The single-room model: agent arena, grid, scheduler, and the shared
/// cabin atmosphere.
pub struct RoomModel {
    pub world: World,
    pub grid: Grid,
    pub scheduler: Scheduler,
    pub env: Environment,
    params: SimParams,
    humans: usize,
    plants: usize,
}

impl RoomModel {
    /// Build a model, failing fast on invalid configuration or an
    /// unknown crop name. Initial agents land on random cells;
    /// multi-occupancy is fine.
    pub fn new(config: RoomConfig, table: &SpeciesTable) -> Result<Self, ModelError> {
        config.validate()?;
        let crop = table
            .get(&config.crop)
            .ok_or_else(|| ModelError::UnknownCrop(config.crop.clone()))?;

        let mut model = Self {
            world: World::new(),
            grid: Grid::new(config.width, config.height),
            scheduler: Scheduler::new(),
            env: Environment::from_config(&config),
            params: SimParams {
                crop,
                maturity_turns: config.maturity_turns,
                spread_turns: config.spread_turns,
            },
            humans: 0,
            plants: 0,
        };

        let mut rng = rand::thread_rng();
        for _ in 0..config.plants {
            let pos = model.random_cell(&mut rng);
            model.spawn_plant(pos)?;
        }
        for _ in 0..config.humans {
            let pos = model.random_cell(&mut rng);
            model.spawn_human(pos)?;
        }
        model.refresh_counts();

        log::info!(
            "room model ready: {} crew, {} plants on a {}x{} grid, crop {:?}",
            model.humans,
            model.plants,
            config.width,
            config.height,
            config.crop
        );
        Ok(model)
    }

    fn random_cell(&self, rng: &mut impl Rng) -> Position {
        Position::new(
            rng.gen_range(0..self.grid.width()),
            rng.gen_range(0..self.grid.height()),
        )
    }

    /// Spawn a crew member at `pos`, registered with grid and scheduler.
    pub fn spawn_human(&mut self, pos: Position) -> Result<Entity, ModelError> {
        let agent = self.world.spawn((Human::new(), pos));
        self.grid.place(agent, pos)?;
        self.scheduler.add(Species::Human, agent);
        Ok(agent)
    }

    /// Spawn a seedling of the configured crop at `pos`.
    pub fn spawn_plant(&mut self, pos: Position) -> Result<Entity, ModelError> {
        let seedling = Plant::seedling(
            self.params.crop,
            self.params.maturity_turns,
            self.params.spread_turns,
        );
        let agent = self.world.spawn((seedling, pos));
        self.grid.place(agent, pos)?;
        self.scheduler.add(Species::Plant, agent);
        Ok(agent)
    }

    pub fn human_count(&self) -> usize {
        self.humans
    }

    pub fn plant_count(&self) -> usize {
        self.plants
    }

    fn refresh_counts(&mut self) {
        self.humans = self.scheduler.count_of(Species::Human);
        self.plants = self.scheduler.count_of(Species::Plant);
    }

    /// One tick: activate every species cohort, apply the exogenous
    /// cabin adjustments, refresh counts, advance the step index, and
    /// emit a snapshot.
    pub fn tick(&mut self) -> Result<TickSnapshot, SimError> {
        let mut rng = rand::thread_rng();
        self.scheduler.step(
            &mut self.world,
            &mut self.grid,
            &mut self.env,
            &self.params,
            &mut rng,
        )?;
        environment_step(&mut self.env);
        self.refresh_counts();
        self.env.steps += 1;
        Ok(self.snapshot())
    }

    /// Current metrics without stepping.
    pub fn snapshot(&self) -> TickSnapshot {
        TickSnapshot {
            step: self.env.steps,
            oxygen: self.env.oxygen,
            carbon: self.env.carbon,
            temperature: self.env.temperature,
            humans: self.humans,
            plants: self.plants,
        }
    }

    /// Run a bounded loop of `ticks`, feeding each snapshot to `sink`.
    pub fn run(
        &mut self,
        ticks: u64,
        mut sink: impl FnMut(&TickSnapshot),
    ) -> Result<(), SimError> {
        for _ in 0..ticks {
            let snapshot = self.tick()?;
            sink(&snapshot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_parses() {
        let table = builtin_species_table().unwrap();
        assert!(table.contains("wheat"));
        assert!(table.len() >= 5);
    }

    #[test]
    fn test_model_construction_counts() {
        let table = builtin_species_table().unwrap();
        let config = RoomConfig {
            humans: 3,
            plants: 7,
            ..Default::default()
        };
        let model = RoomModel::new(config, &table).unwrap();
        assert_eq!(model.human_count(), 3);
        assert_eq!(model.plant_count(), 7);
    }

    #[test]
    fn test_unknown_crop_rejected() {
        let table = builtin_species_table().unwrap();
        let config = RoomConfig {
            crop: "kudzu".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            RoomModel::new(config, &table),
            Err(ModelError::UnknownCrop(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let table = builtin_species_table().unwrap();
        let config = RoomConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(
            RoomModel::new(config, &table),
            Err(ModelError::Config(_))
        ));
    }

    #[test]
    fn test_empty_model_still_ticks() {
        let table = builtin_species_table().unwrap();
        let config = RoomConfig {
            humans: 0,
            plants: 0,
            ..Default::default()
        };
        let mut model = RoomModel::new(config, &table).unwrap();

        let first = model.tick().unwrap();
        let second = model.tick().unwrap();
        assert_eq!(first.step, 1);
        assert_eq!(second.step, 2);
        assert_eq!(model.scheduler.ticks(), 2);
        assert_eq!(second.oxygen, 21.21);
        assert_eq!(second.carbon, 0.13);
    }

    #[test]
    fn test_run_feeds_sink_every_tick() {
        let table = builtin_species_table().unwrap();
        let mut model = RoomModel::new(RoomConfig::default(), &table).unwrap();
        let mut seen = Vec::new();
        model.run(5, |snap| seen.push(snap.step)).unwrap();
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }
}
