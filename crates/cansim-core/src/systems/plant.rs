//! Crop behavior: growth countdown, photosynthesis, regrowth spread,
//! and carbon-starvation die-off.

use cansim_logic::photosynthesis::{carbon_uptake, oxygen_output};
use cansim_logic::thresholds::starves_plants;
use hecs::{Entity, World};

use crate::components::{Plant, Species};
use crate::environment::Environment;
use crate::error::GridError;
use crate::grid::Grid;
use crate::schedule::Scheduler;
use crate::systems::SimParams;
use crate::walker;

/// One tick of crop behavior.
pub fn plant_step(
    world: &mut World,
    grid: &mut Grid,
    env: &mut Environment,
    sched: &mut Scheduler,
    params: &SimParams,
    agent: Entity,
) -> Result<(), GridError> {
    let pos = walker::position_of(world, agent);

    // Countdowns first; state copied out so the borrow does not overlap
    // the offspring spawn below.
    let (traits, ready_to_spread) = {
        let mut plant = world
            .get::<&mut Plant>(agent)
            .expect("plant agent missing Plant component");
        if !plant.grown {
            plant.maturity -= 1;
            if plant.maturity <= 0 {
                plant.grown = true;
            }
        }
        if plant.spread_countdown > 0 {
            plant.spread_countdown -= 1;
        }
        (plant.traits, plant.spread_countdown == 0)
    };

    env.credit_oxygen(oxygen_output(&traits));
    env.debit_carbon(carbon_uptake(&traits));

    if ready_to_spread && env.regrowth {
        let open = grid
            .neighbors(pos, false)
            .into_iter()
            .find(|&cell| grid.contents(cell).is_empty());
        // No empty neighbor: skip and retry next tick.
        if let Some(cell) = open {
            let seedling = Plant::seedling(traits, params.maturity_turns, params.spread_turns);
            let offspring = world.spawn((seedling, cell));
            grid.place(offspring, cell)?;
            sched.add(Species::Plant, offspring);
            world
                .get::<&mut Plant>(agent)
                .expect("plant agent missing Plant component")
                .spread_countdown = params.spread_turns as i32;
            log::debug!(
                "plant {:?} spread to ({}, {})",
                agent,
                cell.x,
                cell.y
            );
        }
    }

    if starves_plants(env.carbon) {
        grid.remove(agent, pos)?;
        sched.remove(Species::Plant, agent);
        let _ = world.despawn(agent);
        log::debug!(
            "plant {:?} died back at ({}, {}): carbon {:.4}",
            agent,
            pos.x,
            pos.y,
            env.carbon
        );
    }

    Ok(())
}
