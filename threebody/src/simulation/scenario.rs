//! Build a runnable simulation from configuration and drive it frame by frame
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a [`Simulation`]
//! containing:
//! - engine settings (`Engine`)
//! - physical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The simulation is inserted into Bevy as a `Resource`. The viewer calls
//! [`Simulation::advance`] once per frame with the frame's elapsed time and
//! then reads [`Simulation::snapshot`] to place the bodies.

use anyhow::Result;
use bevy::log::{debug, info};
use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, IntegratorConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::{rk4_step, verlet_step};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

type StepFn = fn(&mut System, &AccelSet, &Parameters, f64);

/// Bevy resource owning the one live system state
///
/// Only [`Simulation::advance`] mutates `system`; readers get positions
/// through [`Simulation::snapshot`] after a frame's substeps are done.
/// `forces` is always built from `parameters`, so fields stay private and
/// parameter changes go through [`Simulation::set_parameters`].
#[derive(Resource)]
pub struct Simulation {
    engine: Engine,
    parameters: Parameters,
    system: System,
    forces: AccelSet,
}

/// Newtonian gravity as the only force term
fn gravity_forces(parameters: &Parameters) -> AccelSet {
    AccelSet::new().with(NewtonianGravity {
        G: parameters.G,
        min_dist: parameters.min_dist,
    })
}

impl Simulation {
    pub fn new(engine: Engine, parameters: Parameters, bodies: Vec<Body>) -> Self {
        Self {
            forces: gravity_forces(&parameters),
            engine,
            parameters,
            system: System::new(bodies),
        }
    }

    /// Replace the physical parameters; the force terms are rebuilt to match
    pub fn set_parameters(&mut self, parameters: Parameters) {
        self.forces = gravity_forces(&parameters);
        self.parameters = parameters;
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    /// Validate `cfg` and map it into runtime structs
    pub fn build_simulation(cfg: &ScenarioConfig) -> Result<Self> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| Body {
            x: NVec2::new(bc.x[0], bc.x[1]),
            v: NVec2::new(bc.v[0], bc.v[1]),
        }).collect();

        let p_cfg = &cfg.parameters;
        let parameters = Parameters {
            G: p_cfg.G,
            min_dist: p_cfg.min_dist,
            bound: p_cfg.bound,
        };

        let engine = Engine {
            integrator: cfg.engine.integrator,
            substeps: cfg.engine.substeps,
        };

        info!(
            "simulation: {} bodies, {:?} with {} substeps per frame, G = {}, min_dist = {}, bound = {}",
            bodies.len(),
            engine.integrator,
            engine.substeps,
            parameters.G,
            parameters.min_dist,
            parameters.bound,
        );

        Ok(Self::new(engine, parameters, bodies))
    }

    /// Advance by `elapsed` seconds, split into `engine.substeps` equal substeps
    ///
    /// Zero, negative or non-finite `elapsed` leaves the state untouched.
    pub fn advance(&mut self, elapsed: f64) {
        if !(elapsed.is_finite() && elapsed > 0.0) {
            debug!("advance: skipping frame with elapsed = {elapsed}");
            return;
        }

        let n = self.engine.substeps;
        let dt = elapsed / n as f64;

        let step: StepFn = match self.engine.integrator {
            IntegratorConfig::Rk4 => rk4_step,
            IntegratorConfig::Verlet => verlet_step,
        };

        // Split &mut self into disjoint borrows once, outside the loop
        let Simulation {
            system,
            parameters,
            forces,
            ..
        } = self;

        for _ in 0..n {
            step(system, forces, parameters, dt);
        }
    }

    /// Current body positions, narrowed to `f32` for rendering
    pub fn snapshot(&self) -> Vec<[f32; 2]> {
        self.system
            .bodies
            .iter()
            .map(|b| [b.x.x as f32, b.x.y as f32])
            .collect()
    }

    /// Simulated time elapsed since construction
    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.system.total_momentum()
    }

    pub fn total_energy(&self) -> f64 {
        self.system
            .total_energy(self.parameters.G, self.parameters.min_dist)
    }
}
