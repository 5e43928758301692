use threebody::{ScenarioConfig, Simulation};
use threebody::run_2d;
use threebody::{bench_force_model, bench_advance};

use clap::Parser;
use anyhow::Result;
use bevy::log::tracing_subscriber::{self, prelude::*, EnvFilter};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, either a path or a name under `scenarios/`
    #[arg(short, default_value = "three_body.yaml")]
    file_name: String,

    /// Run this many frames without a window and print the final state
    #[arg(long)]
    headless: Option<usize>,

    /// Frame duration in seconds used by `--headless`
    #[arg(long, default_value_t = 1.0 / 60.0)]
    frame_dt: f64,

    /// Run the timing benchmarks instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<ScenarioConfig> {
    let direct = PathBuf::from(file_name);
    let config_path = if direct.is_file() {
        direct
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };

    ScenarioConfig::load(&config_path)
}

// one subscriber for every mode; the viewer leaves bevy's LogPlugin disabled
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu=error,naga=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run_headless(mut simulation: Simulation, frames: usize, frame_dt: f64) {
    let e0 = simulation.total_energy();

    for _ in 0..frames {
        simulation.advance(frame_dt);
    }

    println!("t = {:.6}", simulation.time());
    for (i, [x, y]) in simulation.snapshot().iter().enumerate() {
        println!("body {i}: ({x:+.6}, {y:+.6})");
    }
    let p = simulation.total_momentum();
    println!("momentum = ({:+.6e}, {:+.6e})", p.x, p.y);
    println!("energy = {:.9} (initial {:.9})", simulation.total_energy(), e0);
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    if args.bench {
        bench_force_model();
        bench_advance();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args.file_name)?;
    let simulation = Simulation::build_simulation(&scenario_cfg)?;

    match args.headless {
        Some(frames) => run_headless(simulation, frames, args.frame_dt),
        None => run_2d(simulation),
    }

    Ok(())
}
