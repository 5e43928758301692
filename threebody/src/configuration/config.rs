//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – integrator choice and substeps per frame
//! - [`ParametersConfig`] – physical constants and the box size
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference three-body scenario:
//!
//! ```yaml
//! engine:
//!   integrator: "rk4"       # or "verlet"
//!   substeps: 50            # fixed substeps per frame
//!
//! parameters:
//!   G: 0.2                  # gravitational constant
//!   min_dist: 0.01          # distance floor in the force law
//!   bound: 1.0              # box is [-bound, bound] on both axes
//!
//! bodies:
//!   - x: [ -0.5, -0.5 ]
//!     v: [  0.5,  0.1 ]
//!   - x: [  0.5, -0.5 ]
//!     v: [ -0.3, -0.2 ]
//!   - x: [  0.0,  0.5 ]
//!     v: [  0.0,  0.0 ]
//! ```
//!
//! `engine` and `parameters` (and every key inside them) may be omitted, the
//! reference values above are used instead. Bodies all have unit mass.
//!
//! The simulation then maps this configuration into its runtime
//! representation (see [`crate::simulation::scenario::Simulation`]).

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use bevy::log::info;
use serde::Deserialize;

/// Which integrator method used by the engine
/// `integrator: "rk4"` or `integrator: "verlet"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorConfig {
    #[default]
    #[serde(rename = "rk4")] // Classical 4th-order Runge–Kutta, four force evaluations per step
    Rk4,

    #[serde(rename = "verlet")] // Velocity Verlet, two force evaluations per step, kept for comparison
    Verlet,
}

/// Engine configuration
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig, // Time integrator used for advancing the system state
    pub substeps: usize, // Number of equal substeps each frame's elapsed time is split into
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Rk4,
            substeps: 50,
        }
    }
}

/// Physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub G: f64,        // gravitational constant
    pub min_dist: f64, // distance floor - keeps forces finite when bodies meet
    pub bound: f64,    // half-width of the reflective box
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            G: 0.2,
            min_dist: 0.01,
            bound: 1.0,
        }
    }
}

/// Configuration for a single body’s initial state
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position `[x, y]` in body-space units
    pub v: Vec<f64>, // Initial velocity `[vx, vy]` in body-space units per second
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig, // Integrator and substep settings
    #[serde(default)]
    pub parameters: ParametersConfig, // Physical parameters
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the system
}

impl Default for ScenarioConfig {
    /// The reference three-body configuration
    fn default() -> Self {
        let body = |x: [f64; 2], v: [f64; 2]| BodyConfig {
            x: x.to_vec(),
            v: v.to_vec(),
        };

        Self {
            engine: EngineConfig::default(),
            parameters: ParametersConfig::default(),
            bodies: vec![
                body([-0.5, -0.5], [0.5, 0.1]),
                body([0.5, -0.5], [-0.3, -0.2]),
                body([0.0, 0.5], [0.0, 0.0]),
            ],
        }
    }
}

impl ScenarioConfig {
    /// Parse and validate a scenario from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).context("invalid scenario YAML")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a scenario file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open scenario {}", path.display()))?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
            .with_context(|| format!("failed to parse scenario {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid scenario {}", path.display()))?;
        info!("loaded scenario {} ({} bodies)", path.display(), cfg.bodies.len());
        Ok(cfg)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<()> {
        if self.bodies.is_empty() {
            bail!("scenario needs at least one body");
        }
        if self.engine.substeps == 0 {
            bail!("engine.substeps must be at least 1");
        }

        let p = &self.parameters;
        if !p.G.is_finite() {
            bail!("parameters.G must be finite, got {}", p.G);
        }
        if !(p.min_dist.is_finite() && p.min_dist > 0.0) {
            bail!("parameters.min_dist must be positive, got {}", p.min_dist);
        }
        if !(p.bound.is_finite() && p.bound > 0.0) {
            bail!("parameters.bound must be positive, got {}", p.bound);
        }

        for (i, b) in self.bodies.iter().enumerate() {
            if b.x.len() != 2 || b.v.len() != 2 {
                bail!(
                    "body {i}: x and v need exactly 2 components, got {} and {}",
                    b.x.len(),
                    b.v.len()
                );
            }
            if !b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()) {
                bail!("body {i}: position and velocity must be finite");
            }
        }

        Ok(())
    }
}
