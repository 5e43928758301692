pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, BodyRate, Derivative, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::boundary::reflect;
pub use simulation::integrator::{rk4_step, verlet_step};
pub use simulation::scenario::Simulation;

pub use configuration::config::{IntegratorConfig, EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig};

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_force_model, bench_advance};
