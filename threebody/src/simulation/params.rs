//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant `G`,
//! - minimum-distance floor for the force law,
//! - half-width of the reflective box

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub G: f64, // gravitational constant
    pub min_dist: f64, // distance floor, keeps 1/r^2 bounded
    pub bound: f64, // domain is [-bound, bound] on both axes
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            G: 0.2,
            min_dist: 0.01,
            bound: 1.0,
        }
    }
}
