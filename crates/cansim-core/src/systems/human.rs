//! Crew behavior: body heat, lethal-atmosphere check, foraging,
//! planting, and harvesting, evaluated in fixed priority order with
//! early mutation — later branches observe the effects of earlier ones
//! within the same tick.

use cansim_logic::respiration::{
    active_carbon_output, active_energy_cost, active_oxygen_draw, harvest_carbon_release,
    harvest_energy_gain, harvest_oxygen_release, resting_carbon_output, resting_energy_cost,
    resting_oxygen_draw,
};
use cansim_logic::thermal::body_heat_flux;
use cansim_logic::thresholds::{
    lethal_for_humans, CO2_APPETITE_FLOOR, CO2_REPLANT_CEILING, FORAGE_ENERGY_FLOOR,
    MIN_PLANT_STOCK, O2_REPLANT_FLOOR, REPLANT_ENERGY_HIGH, REPLANT_ENERGY_LOW,
};
use hecs::{Entity, World};

use crate::components::{Human, Plant, Species};
use crate::environment::Environment;
use crate::error::GridError;
use crate::grid::Grid;
use crate::schedule::Scheduler;
use crate::systems::SimParams;
use crate::walker;

/// One tick of crew behavior.
pub fn human_step(
    world: &mut World,
    grid: &mut Grid,
    env: &mut Environment,
    sched: &mut Scheduler,
    params: &SimParams,
    agent: Entity,
) -> Result<(), GridError> {
    env.temperature += body_heat_flux(env.temperature);

    let pos = walker::position_of(world, agent);
    let cell_plant = walker::occupant_of(world, grid, pos, Species::Plant);
    let energy = world
        .get::<&Human>(agent)
        .expect("human agent missing Human component")
        .energy;

    if lethal_for_humans(env.oxygen, env.carbon) || energy < 0.0 {
        grid.remove(agent, pos)?;
        sched.remove(Species::Human, agent);
        let _ = world.despawn(agent);
        log::debug!(
            "crew member {:?} lost at ({}, {}): oxygen {:.3}, carbon {:.3}, energy {:.1}",
            agent,
            pos.x,
            pos.y,
            env.oxygen,
            env.carbon,
            energy
        );
        return Ok(());
    }

    let plant_count = sched.count_of(Species::Plant);

    // With no standing crop anywhere there is nothing to forage, eat, or
    // take cuttings from; the crew member just breathes.
    if plant_count == 0 {
        rest(world, env, agent);
        return Ok(());
    }

    let grown_meal =
        cell_plant.filter(|&p| world.get::<&Plant>(p).map(|plant| plant.grown).unwrap_or(false));

    if energy < FORAGE_ENERGY_FLOOR && cell_plant.is_none() {
        walker::move_away(world, grid, agent, Species::Plant)?;
        exert(world, env, agent);
    } else if env.oxygen < O2_REPLANT_FLOOR
        || env.carbon > CO2_REPLANT_CEILING
        || (energy > REPLANT_ENERGY_LOW && energy < REPLANT_ENERGY_HIGH)
        || plant_count < MIN_PLANT_STOCK
    {
        if cell_plant.is_none() {
            let seedling = Plant::seedling(params.crop, params.maturity_turns, params.spread_turns);
            let planted = world.spawn((seedling, pos));
            grid.place(planted, pos)?;
            sched.add(Species::Plant, planted);
            log::debug!("crew member {:?} planted at ({}, {})", agent, pos.x, pos.y);
            walker::move_away(world, grid, agent, Species::Plant)?;
            exert(world, env, agent);
        } else {
            walker::move_away(world, grid, agent, Species::Plant)?;
        }
    } else if let Some(meal) =
        grown_meal.filter(|_| env.carbon < CO2_APPETITE_FLOOR || energy < FORAGE_ENERGY_FLOOR)
    {
        let yields = world
            .get::<&Plant>(meal)
            .expect("grown plant missing Plant component")
            .traits;
        grid.remove(meal, pos)?;
        sched.remove(Species::Plant, meal);
        let _ = world.despawn(meal);
        walker::move_toward(world, grid, sched, agent, Species::Plant)?;
        rest(world, env, agent);
        adjust_energy(world, agent, harvest_energy_gain(yields.edible_yield));
        env.credit_carbon(harvest_carbon_release(yields.inedible_yield));
        env.credit_oxygen(harvest_oxygen_release(yields.inedible_yield));
        log::debug!(
            "crew member {:?} harvested a plant at ({}, {})",
            agent,
            pos.x,
            pos.y
        );
    } else {
        rest(world, env, agent);
    }

    Ok(())
}

/// Active-rate respiration and energy burn.
fn exert(world: &mut World, env: &mut Environment, agent: Entity) {
    adjust_energy(world, agent, -active_energy_cost());
    env.debit_oxygen(active_oxygen_draw());
    env.credit_carbon(active_carbon_output());
}

/// Resting-rate respiration and energy burn.
fn rest(world: &mut World, env: &mut Environment, agent: Entity) {
    adjust_energy(world, agent, -resting_energy_cost());
    env.debit_oxygen(resting_oxygen_draw());
    env.credit_carbon(resting_carbon_output());
}

fn adjust_energy(world: &mut World, agent: Entity, delta: f64) {
    if let Ok(mut human) = world.get::<&mut Human>(agent) {
        human.energy += delta;
    }
}
