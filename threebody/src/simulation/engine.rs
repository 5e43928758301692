//! High-level runtime engine settings
//!
//! Selects the integrator and how many substeps each frame is split into

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // rk4 or verlet
    pub substeps: usize, // fixed substeps per advance, never adapted
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            integrator: IntegratorConfig::Rk4,
            substeps: 50,
        }
    }
}
