use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Simulation;
use crate::simulation::states::{Body, NVec2, System};
use crate::configuration::config::IntegratorConfig;

/// Time one derivative evaluation (the Force Model) for growing N
pub fn bench_force_model() {
    let ns = [3, 10, 30, 100, 300, 1000];
    let params = Parameters::default();

    let forces = AccelSet::new().with(NewtonianGravity {
        G: params.G,
        min_dist: params.min_dist,
    });

    for n in ns {
        let sys = make_system(n);
        let reps = (100_000 / (n * n)).max(1);

        // Warm up
        let _ = forces.derivative(0.0, &sys);

        let t0 = Instant::now();
        for _ in 0..reps {
            let _ = forces.derivative(0.0, &sys);
        }
        let per_eval = t0.elapsed().as_secs_f64() / reps as f64;

        println!("N = {n:5}, derivative = {:10.3} us", per_eval * 1.0e6);
    }
}

/// Time a full 60 fps frame (`advance(1/60)`) for both integrators
/// Paste output directly into a spreadsheet to graph
pub fn bench_advance() {
    let frame = 1.0 / 60.0;
    let frames = 20;

    println!("N,rk4_ms,verlet_ms");

    for n in [3, 10, 30, 100, 300] {
        let ms_rk4 = time_frames(n, IntegratorConfig::Rk4, frame, frames);
        let ms_verlet = time_frames(n, IntegratorConfig::Verlet, frame, frames);

        println!("{},{:.6},{:.6}", n, ms_rk4, ms_verlet);
    }
}

/// Average milliseconds per `advance(frame)` over `frames` frames
fn time_frames(n: usize, integrator: IntegratorConfig, frame: f64, frames: usize) -> f64 {
    let engine = Engine {
        integrator,
        ..Engine::default()
    };
    // large box so the walls don't interfere with the timing
    let params = Parameters {
        bound: 100.0,
        ..Parameters::default()
    };
    let mut sim = Simulation::new(engine, params, make_system(n).bodies);

    // Warm-up one frame
    sim.advance(frame);

    let t0 = Instant::now();
    for _ in 0..frames {
        sim.advance(frame);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / frames as f64
}

/// Helper to build a deterministic System of size `n` inside the unit box
fn make_system(n: usize) -> System {
    let bodies = (0..n)
        .map(|i| {
            let i_f = i as f64;
            Body {
                x: NVec2::new((i_f * 0.37).sin() * 0.9, (i_f * 0.13).cos() * 0.9),
                v: NVec2::new((i_f * 0.07).sin() * 0.1, (i_f * 0.11).cos() * 0.1),
            }
        })
        .collect();

    System::new(bodies)
}
