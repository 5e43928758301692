//! Force / acceleration contributors for the simulation
//!
//! Defines the acceleration trait, the set that sums its terms, and
//! direct Newtonian gravity with a minimum-distance floor. The set also
//! evaluates the full state derivative used by the integrators.

use crate::simulation::states::{BodyRate, Derivative, NVec2, System};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }

    /// State derivative of `sys` at time `t`:
    /// `dx[i]` is the current velocity of body i, `dv[i]` its total acceleration
    pub fn derivative(&self, t: f64, sys: &System) -> Derivative {
        let mut accels = vec![NVec2::zeros(); sys.bodies.len()];
        self.accumulate_accels(t, sys, &mut accels);

        let rates = sys
            .bodies
            .iter()
            .zip(accels)
            .map(|(b, a)| BodyRate { dx: b.v, dv: a })
            .collect();

        Derivative { rates }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Newtonian gravity between unit masses with a distance floor
///
/// Each pair contributes `G * r_hat / max(min_dist, |r|)^2` toward the other
/// body. The floor bounds every contribution by `G / min_dist^2` when bodies
/// get close. A pair sitting at exactly the same position has no direction
/// and contributes nothing.
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_dist: f64, // distance floor
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let xi = sys.bodies[i].x;

            for j in (i + 1)..n {
                let xj = sys.bodies[j].x;

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;
                let len = r.norm();

                // coincident bodies, no direction to pull along
                if len == 0.0 {
                    continue;
                }

                // floored distance only enters the magnitude, the direction
                // is always the true unit vector r / |r|
                let d = len.max(self.min_dist);
                let a = (self.G / (d * d)) * (r / len);

                // masses are all 1, so the pair is equal and opposite
                out[i] += a;
                out[j] -= a;
            }
        }
    }
}
