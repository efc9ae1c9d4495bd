//! Species-partitioned random activation over the agent arena.
//!
//! The hecs world is the arena of record; the scheduler only keeps the
//! species index and the activation order. One `step` activates every
//! species present at tick start exactly once, shuffling each cohort,
//! and skips members despawned earlier in the same tick.

use crate::components::Species;
use crate::environment::Environment;
use crate::error::SimError;
use crate::grid::Grid;
use crate::systems::{human_step, plant_step, SimParams};
use hecs::{Entity, World};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Scheduler {
    members: HashMap<Species, Vec<Entity>>,
    /// Species in order of first appearance; the per-tick activation
    /// order.
    order: Vec<Species>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent under its species.
    pub fn add(&mut self, species: Species, agent: Entity) {
        if !self.members.contains_key(&species) {
            self.order.push(species);
        }
        self.members.entry(species).or_default().push(agent);
    }

    /// Deregister an agent, deleting every occurrence. Tolerates an
    /// already-absent agent: cohort snapshots may still reference agents
    /// that removed themselves mid-tick.
    pub fn remove(&mut self, species: Species, agent: Entity) {
        if let Some(list) = self.members.get_mut(&species) {
            list.retain(|&e| e != agent);
        }
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.members.get(&species).map_or(0, Vec::len)
    }

    /// Live members of a species, in insertion order.
    pub fn members_of(&self, species: Species) -> &[Entity] {
        self.members.get(&species).map_or(&[], Vec::as_slice)
    }

    /// Uniform pick; `None` when the species has no members.
    pub fn random_of(&self, species: Species, rng: &mut impl Rng) -> Option<Entity> {
        let list = self.members.get(&species)?;
        if list.is_empty() {
            return None;
        }
        Some(list[rng.gen_range(0..list.len())])
    }

    /// Completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Activate every species once, in first-appearance order.
    ///
    /// The species set and each cohort's member list are snapshotted
    /// before iteration: species first seen mid-tick, and agents spawned
    /// into a cohort that is already running, begin stepping next tick.
    pub fn step(
        &mut self,
        world: &mut World,
        grid: &mut Grid,
        env: &mut Environment,
        params: &SimParams,
        rng: &mut impl Rng,
    ) -> Result<(), SimError> {
        let species: Vec<Species> = self.order.clone();
        for sp in species {
            let mut cohort = self.members.get(&sp).cloned().unwrap_or_default();
            cohort.shuffle(rng);
            for agent in cohort {
                if !world.contains(agent) {
                    continue;
                }
                let stepped = match sp {
                    Species::Human => human_step(world, grid, env, self, params, agent),
                    Species::Plant => plant_step(world, grid, env, self, params, agent),
                };
                stepped.map_err(|source| SimError {
                    tick: self.ticks,
                    species: sp,
                    agent,
                    source,
                })?;
            }
        }
        self.ticks += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_tracks_add_and_remove() {
        let mut world = World::new();
        let mut sched = Scheduler::new();
        let a = world.spawn(());
        let b = world.spawn(());

        sched.add(Species::Plant, a);
        sched.add(Species::Plant, b);
        assert_eq!(sched.count_of(Species::Plant), 2);
        assert_eq!(sched.count_of(Species::Human), 0);

        sched.remove(Species::Plant, a);
        assert_eq!(sched.count_of(Species::Plant), 1);
    }

    #[test]
    fn test_double_remove_does_not_double_count() {
        let mut world = World::new();
        let mut sched = Scheduler::new();
        let a = world.spawn(());
        sched.add(Species::Human, a);

        sched.remove(Species::Human, a);
        sched.remove(Species::Human, a);
        assert_eq!(sched.count_of(Species::Human), 0);
    }

    #[test]
    fn test_random_of_empty_species_is_none() {
        let sched = Scheduler::new();
        let mut rng = rand::thread_rng();
        assert!(sched.random_of(Species::Plant, &mut rng).is_none());
    }

    #[test]
    fn test_random_of_single_member() {
        let mut world = World::new();
        let mut sched = Scheduler::new();
        let a = world.spawn(());
        sched.add(Species::Human, a);
        let mut rng = rand::thread_rng();
        assert_eq!(sched.random_of(Species::Human, &mut rng), Some(a));
    }
}
