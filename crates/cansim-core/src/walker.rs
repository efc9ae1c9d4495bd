//! Greedy grid movement toward or away from a target species.
//!
//! Nearest-target search is a linear scan with plain Euclidean distance,
//! and a move inspects only the immediate neighbor cells. The first
//! acceptable neighbor in the fixed enumeration order wins, not
//! necessarily the best one.

use crate::components::{Human, Plant, Position, Species};
use crate::error::GridError;
use crate::grid::Grid;
use crate::schedule::Scheduler;
use hecs::{Entity, World};

/// Position of a live agent.
pub(crate) fn position_of(world: &World, agent: Entity) -> Position {
    *world
        .get::<&Position>(agent)
        .expect("live agent missing Position component")
}

fn is_species(world: &World, agent: Entity, species: Species) -> bool {
    match species {
        Species::Human => world.get::<&Human>(agent).is_ok(),
        Species::Plant => world.get::<&Plant>(agent).is_ok(),
    }
}

/// Nearest member of `species` by straight-line distance; ties break to
/// the first encountered in species-list order. `None` when the species
/// has no members.
pub fn nearest_of(
    world: &World,
    sched: &Scheduler,
    from: Position,
    species: Species,
) -> Option<(Entity, Position)> {
    let mut nearest = None;
    let mut best = f64::INFINITY;
    for &agent in sched.members_of(species) {
        if !world.contains(agent) {
            continue;
        }
        let pos = position_of(world, agent);
        let dist = from.distance(&pos);
        if dist < best {
            best = dist;
            nearest = Some((agent, pos));
        }
    }
    nearest
}

/// The occupant of `species` at `pos`, if any.
pub fn occupant_of(world: &World, grid: &Grid, pos: Position, species: Species) -> Option<Entity> {
    grid.contents(pos)
        .iter()
        .copied()
        .find(|&agent| is_species(world, agent, species))
}

/// Move an agent, keeping its grid cell and Position component in sync.
pub fn move_agent(
    world: &mut World,
    grid: &mut Grid,
    agent: Entity,
    to: Position,
) -> Result<(), GridError> {
    let from = position_of(world, agent);
    grid.move_agent(agent, from, to)?;
    let mut pos = world
        .get::<&mut Position>(agent)
        .expect("live agent missing Position component");
    *pos = to;
    Ok(())
}

/// One greedy step toward the nearest member of `species`: the first
/// neighbor strictly closer than the current cell wins. No move when the
/// species is absent, when already coincident with the target, or when
/// no neighbor improves.
pub fn move_toward(
    world: &mut World,
    grid: &mut Grid,
    sched: &Scheduler,
    agent: Entity,
    species: Species,
) -> Result<(), GridError> {
    let from = position_of(world, agent);
    let target = match nearest_of(world, sched, from, species) {
        Some((_, pos)) => pos,
        None => return Ok(()),
    };
    let current = from.distance(&target);
    if current == 0.0 {
        return Ok(());
    }
    let step = grid
        .neighbors(from, true)
        .into_iter()
        .find(|next| next.distance(&target) < current);
    if let Some(to) = step {
        move_agent(world, grid, agent, to)?;
    }
    Ok(())
}

/// Step into the first orthogonal neighbor free of `species`; no move
/// when every neighbor holds one.
pub fn move_away(
    world: &mut World,
    grid: &mut Grid,
    agent: Entity,
    species: Species,
) -> Result<(), GridError> {
    let from = position_of(world, agent);
    let step = grid
        .neighbors(from, false)
        .into_iter()
        .find(|&next| occupant_of(world, grid, next, species).is_none());
    if let Some(to) = step {
        move_agent(world, grid, agent, to)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cansim_logic::species::SpeciesTraits;

    fn traits() -> SpeciesTraits {
        SpeciesTraits {
            oxygen_exchange: 56.0,
            carbon_exchange: 77.0,
            edible_yield: 22.73,
            inedible_yield: 22.73,
        }
    }

    fn plant_at(
        world: &mut World,
        grid: &mut Grid,
        sched: &mut Scheduler,
        pos: Position,
    ) -> Entity {
        let agent = world.spawn((Plant::seedling(traits(), 20, 20), pos));
        grid.place(agent, pos).unwrap();
        sched.add(Species::Plant, agent);
        agent
    }

    fn human_at(
        world: &mut World,
        grid: &mut Grid,
        sched: &mut Scheduler,
        pos: Position,
    ) -> Entity {
        let agent = world.spawn((Human::new(), pos));
        grid.place(agent, pos).unwrap();
        sched.add(Species::Human, agent);
        agent
    }

    #[test]
    fn test_nearest_breaks_ties_to_first() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let first = plant_at(&mut world, &mut grid, &mut sched, Position::new(5, 0));
        let _second = plant_at(&mut world, &mut grid, &mut sched, Position::new(0, 5));

        let found = nearest_of(&world, &sched, Position::new(0, 0), Species::Plant);
        assert_eq!(found.map(|(e, _)| e), Some(first));
    }

    #[test]
    fn test_nearest_of_absent_species() {
        let world = World::new();
        let sched = Scheduler::new();
        assert!(nearest_of(&world, &sched, Position::new(0, 0), Species::Plant).is_none());
    }

    #[test]
    fn test_move_toward_wraps_at_boundary() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let walker = human_at(&mut world, &mut grid, &mut sched, Position::new(0, 0));
        plant_at(&mut world, &mut grid, &mut sched, Position::new(0, 15));

        move_toward(&mut world, &mut grid, &sched, walker, Species::Plant).unwrap();

        let pos = position_of(&world, walker);
        assert!(pos.x < 20 && pos.y < 20);
        // (0,19) is closer to (0,15) than (0,0) is; wrapping north wins
        // the fixed-order scan.
        assert_eq!(pos, Position::new(0, 19));
    }

    #[test]
    fn test_move_toward_coincident_stays_put() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let pos = Position::new(7, 7);
        let walker = human_at(&mut world, &mut grid, &mut sched, pos);
        plant_at(&mut world, &mut grid, &mut sched, pos);

        move_toward(&mut world, &mut grid, &sched, walker, Species::Plant).unwrap();
        assert_eq!(position_of(&world, walker), pos);
    }

    #[test]
    fn test_move_away_picks_plant_free_cell() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let walker = human_at(&mut world, &mut grid, &mut sched, Position::new(5, 5));
        // Occupy up and left; right and down stay open.
        plant_at(&mut world, &mut grid, &mut sched, Position::new(5, 4));
        plant_at(&mut world, &mut grid, &mut sched, Position::new(4, 5));

        move_away(&mut world, &mut grid, walker, Species::Plant).unwrap();
        assert_eq!(position_of(&world, walker), Position::new(6, 5));
    }

    #[test]
    fn test_move_away_boxed_in_stays_put() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let walker = human_at(&mut world, &mut grid, &mut sched, Position::new(5, 5));
        for pos in [
            Position::new(5, 4),
            Position::new(4, 5),
            Position::new(6, 5),
            Position::new(5, 6),
        ] {
            plant_at(&mut world, &mut grid, &mut sched, pos);
        }

        move_away(&mut world, &mut grid, walker, Species::Plant).unwrap();
        assert_eq!(position_of(&world, walker), Position::new(5, 5));
    }

    #[test]
    fn test_occupant_of_filters_species() {
        let mut world = World::new();
        let mut grid = Grid::new(20, 20);
        let mut sched = Scheduler::new();
        let pos = Position::new(2, 2);
        let human = human_at(&mut world, &mut grid, &mut sched, pos);
        let plant = plant_at(&mut world, &mut grid, &mut sched, pos);

        assert_eq!(occupant_of(&world, &grid, pos, Species::Human), Some(human));
        assert_eq!(occupant_of(&world, &grid, pos, Species::Plant), Some(plant));
        assert_eq!(
            occupant_of(&world, &grid, Position::new(3, 3), Species::Plant),
            None
        );
    }
}
