//! cansim Headless Simulation Harness
//!
//! Validates the ecology engine end to end and runs a bounded
//! simulation, appending one plain-text record per tick to a per-run
//! log file. Runs entirely in-process — no rendering, no networking.
//!
//! Usage:
//!   cargo run -p cansim-simtest
//!   cargo run -p cansim-simtest -- --verbose --ticks 500 --log room.log
//!   cargo run -p cansim-simtest -- --config run.json

use std::fs::OpenOptions;
use std::io::Write;

use cansim_core::prelude::*;
use cansim_logic::config::RoomConfig;
use cansim_logic::respiration::{resting_carbon_output, resting_oxygen_draw};
use cansim_logic::thresholds::{assess, AtmosphereHazard};

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: String) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail,
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let ticks = flag_value(&args, "--ticks")
        .and_then(|v| v.parse().ok())
        .unwrap_or(200u64);
    let log_path = flag_value(&args, "--log").unwrap_or_else(|| "cansim-run.log".to_string());

    let run_config = match flag_value(&args, "--config") {
        Some(path) => match load_config(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("cannot load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => RoomConfig::default(),
    };

    println!("=== cansim Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Species table integrity
    results.extend(validate_species_table(verbose));

    // 2. Configuration validation
    results.extend(validate_config(verbose));

    // 3. Scheduler invariants
    results.extend(validate_scheduler(verbose));

    // 4. Ecology scenarios
    results.extend(validate_scenarios(verbose));

    // 5. Bounded run with per-tick log
    results.extend(run_and_log(run_config, ticks, &log_path, verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn load_config(path: &str) -> Result<RoomConfig, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(path)?;
    let config: RoomConfig = serde_json::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

// ── 1. Species table ────────────────────────────────────────────────────

fn validate_species_table(verbose: bool) -> Vec<TestResult> {
    println!("--- Species Table ---");
    let mut results = Vec::new();

    let table = match builtin_species_table() {
        Ok(t) => t,
        Err(e) => {
            results.push(TestResult::new(
                "table_parse",
                false,
                format!("parse error: {}", e),
            ));
            return results;
        }
    };

    results.push(TestResult::new(
        "table_has_reference_crop",
        table.contains("wheat"),
        "wheat present".to_string(),
    ));

    let mut all_positive = true;
    for name in table.names() {
        let traits = table.get(name).unwrap();
        if traits.oxygen_exchange <= 0.0
            || traits.carbon_exchange <= 0.0
            || traits.edible_yield <= 0.0
            || traits.inedible_yield <= 0.0
        {
            all_positive = false;
            if verbose {
                println!("  !! {} has a non-positive coefficient", name);
            }
        }
    }
    results.push(TestResult::new(
        "table_coefficients_positive",
        all_positive,
        format!("{} crops checked", table.len()),
    ));

    results
}

// ── 2. Configuration ────────────────────────────────────────────────────

fn validate_config(_verbose: bool) -> Vec<TestResult> {
    println!("--- Configuration ---");
    let mut results = Vec::new();

    results.push(TestResult::new(
        "default_config_valid",
        RoomConfig::default().validate().is_ok(),
        "reference parameters accepted".to_string(),
    ));

    let zero_grid = RoomConfig {
        width: 0,
        ..Default::default()
    };
    results.push(TestResult::new(
        "zero_grid_rejected",
        zero_grid.validate().is_err(),
        "0-wide grid refused".to_string(),
    ));

    let wild_rate = RoomConfig {
        excess_co2: true,
        excess_rate: 250.0,
        ..Default::default()
    };
    results.push(TestResult::new(
        "excess_rate_bounded",
        wild_rate.validate().is_err(),
        "250% injection refused".to_string(),
    ));

    let table = builtin_species_table().expect("builtin table");
    let unknown = RoomConfig {
        crop: "tribble-moss".to_string(),
        ..Default::default()
    };
    results.push(TestResult::new(
        "unknown_crop_rejected",
        RoomModel::new(unknown, &table).is_err(),
        "unlisted crop refused at construction".to_string(),
    ));

    results
}

// ── 3. Scheduler invariants ─────────────────────────────────────────────

fn validate_scheduler(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scheduler ---");
    let mut results = Vec::new();
    let table = builtin_species_table().expect("builtin table");

    // Empty-species sampling must be an explicit None, never a panic.
    let config = RoomConfig {
        humans: 1,
        plants: 0,
        ..Default::default()
    };
    let model = RoomModel::new(config, &table).expect("model");
    let mut rng = rand::thread_rng();
    results.push(TestResult::new(
        "random_of_empty_species",
        model.scheduler.random_of(Species::Plant, &mut rng).is_none()
            && model.scheduler.random_of(Species::Human, &mut rng).is_some(),
        "zero-member sampling guarded".to_string(),
    ));

    // Stepping an agentless model is a no-op that still advances ticks.
    let config = RoomConfig {
        humans: 0,
        plants: 0,
        ..Default::default()
    };
    let mut model = RoomModel::new(config, &table).expect("model");
    let mut ok = true;
    for expected in 1..=3u64 {
        match model.tick() {
            Ok(snap) => ok &= snap.step == expected && snap.oxygen == 21.21,
            Err(_) => ok = false,
        }
    }
    results.push(TestResult::new(
        "empty_step_advances_ticks",
        ok,
        "3 agentless ticks".to_string(),
    ));

    results
}

// ── 4. Ecology scenarios ────────────────────────────────────────────────

fn validate_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Ecology Scenarios ---");
    let mut results = Vec::new();
    let table = builtin_species_table().expect("builtin table");

    // Maturity timing: grown at tick 20, not 19.
    let config = RoomConfig {
        humans: 0,
        plants: 1,
        regrowth: false,
        spread_turns: 20,
        maturity_turns: 20,
        ..Default::default()
    };
    let mut model = RoomModel::new(config, &table).expect("model");
    for _ in 0..19 {
        model.tick().expect("tick");
    }
    let early = model.world.query::<&Plant>().iter().any(|(_, p)| p.grown);
    model.tick().expect("tick");
    let on_time = model.world.query::<&Plant>().iter().all(|(_, p)| p.grown);
    results.push(TestResult::new(
        "maturity_timing",
        !early && on_time,
        "ungrown at 19, grown at 20".to_string(),
    ));

    // Resting respiration closed form over 24 ticks.
    let config = RoomConfig {
        humans: 1,
        plants: 0,
        ..Default::default()
    };
    let mut model = RoomModel::new(config, &table).expect("model");
    let mut snap = model.snapshot();
    for _ in 0..24 {
        snap = model.tick().expect("tick");
    }
    let expected_oxygen = 21.21 - 24.0 * resting_oxygen_draw();
    let expected_carbon = 0.13 + 24.0 * resting_carbon_output();
    let closed_form = (snap.oxygen - expected_oxygen).abs() < 1e-9
        && (snap.carbon - expected_carbon).abs() < 1e-9;
    results.push(TestResult::new(
        "resting_closed_form",
        closed_form,
        format!("O2 {:.4}, CO2 {:.4} after 24 ticks", snap.oxygen, snap.carbon),
    ));

    // Lethal carbon removes the crew member from both structures.
    let config = RoomConfig {
        humans: 1,
        plants: 0,
        ..Default::default()
    };
    let mut model = RoomModel::new(config, &table).expect("model");
    model.env.carbon = 0.54;
    let snap = model.tick().expect("tick");
    results.push(TestResult::new(
        "lethal_carbon_removal",
        snap.humans == 0 && model.scheduler.count_of(Species::Human) == 0,
        "crew lost at 0.54 kPa CO2".to_string(),
    ));

    // Carbon clamp and grid bounds over a regrowing run.
    let config = RoomConfig {
        humans: 2,
        plants: 8,
        regrowth: true,
        ..Default::default()
    };
    let mut model = RoomModel::new(config, &table).expect("model");
    let mut clamped = true;
    let mut in_bounds = true;
    for _ in 0..100 {
        let snap = model.tick().expect("tick");
        clamped &= snap.carbon >= 0.0;
        for (_, pos) in model.world.query::<&Position>().iter() {
            in_bounds &= pos.x < 20 && pos.y < 20;
        }
    }
    results.push(TestResult::new(
        "carbon_clamped",
        clamped,
        "100 regrowing ticks".to_string(),
    ));
    results.push(TestResult::new(
        "movement_bounded",
        in_bounds,
        "no agent left the torus".to_string(),
    ));

    if verbose {
        println!(
            "  final population: {} crew, {} plants",
            model.human_count(),
            model.plant_count()
        );
    }

    results
}

// ── 5. Bounded run with per-tick log ────────────────────────────────────

fn run_and_log(config: RoomConfig, ticks: u64, log_path: &str, verbose: bool) -> Vec<TestResult> {
    println!("--- Bounded Run ({} ticks -> {}) ---", ticks, log_path);
    let mut results = Vec::new();
    let table = builtin_species_table().expect("builtin table");

    let mut model = match RoomModel::new(config, &table) {
        Ok(m) => m,
        Err(e) => {
            results.push(TestResult::new(
                "run_model_built",
                false,
                format!("construction failed: {}", e),
            ));
            return results;
        }
    };

    let file = OpenOptions::new().create(true).append(true).open(log_path);
    let mut file = match file {
        Ok(f) => f,
        Err(e) => {
            results.push(TestResult::new(
                "run_log_opened",
                false,
                format!("cannot open {}: {}", log_path, e),
            ));
            return results;
        }
    };

    let mut log_error = None;
    let outcome = model.run(ticks, |snap| {
        let line = format!(
            "step={} oxygen={:.4} carbon={:.4} temp={:.2} humans={} plants={}\n",
            snap.step, snap.oxygen, snap.carbon, snap.temperature, snap.humans, snap.plants
        );
        if let Err(e) = file.write_all(line.as_bytes()) {
            log_error.get_or_insert(e);
        }
        if verbose && snap.step % 50 == 0 {
            println!(
                "  step {}: O2 {:.3} kPa, CO2 {:.3} kPa, {} crew, {} plants",
                snap.step, snap.oxygen, snap.carbon, snap.humans, snap.plants
            );
        }
    });

    results.push(TestResult::new(
        "run_completed",
        outcome.is_ok(),
        match &outcome {
            Ok(()) => format!("{} ticks simulated", ticks),
            Err(e) => format!("aborted: {}", e),
        },
    ));
    results.push(TestResult::new(
        "run_log_written",
        log_error.is_none(),
        match &log_error {
            None => format!("{} records appended", ticks),
            Some(e) => format!("write failed: {}", e),
        },
    ));

    let last = model.snapshot();
    let hazard = match assess(last.oxygen, last.carbon) {
        AtmosphereHazard::Nominal => "nominal",
        AtmosphereHazard::Strained => "strained",
        AtmosphereHazard::Lethal => "lethal",
    };
    println!(
        "  final atmosphere: O2 {:.3} kPa, CO2 {:.3} kPa ({}), {:.1} K",
        last.oxygen, last.carbon, hazard, last.temperature
    );

    results
}
