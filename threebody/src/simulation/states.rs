//! Core state types for the simulation.
//!
//! - `Body` / `System` hold positions and velocities (unit mass, 2D)
//! - `BodyRate` / `Derivative` hold their time derivatives
//!
//! The system also carries the current simulation time `t`.
//! The arithmetic here (`offset`, `apply`, `accumulate`) is all the
//! integrators need to combine states with derivatives.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
}

impl Body {
    pub fn new(x: [f64; 2], v: [f64; 2]) -> Self {
        Self {
            x: NVec2::new(x[0], x[1]),
            v: NVec2::new(v[0], v[1]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // time
}

/// Rate of change of one body: `dx` is a velocity, `dv` an acceleration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRate {
    pub dx: NVec2,
    pub dv: NVec2,
}

/// Time derivative of a whole [`System`], one entry per body in the same order
#[derive(Debug, Clone, PartialEq)]
pub struct Derivative {
    pub rates: Vec<BodyRate>,
}

impl Derivative {
    /// All-zero derivative for `n` bodies
    pub fn zeros(n: usize) -> Self {
        Self {
            rates: vec![
                BodyRate {
                    dx: NVec2::zeros(),
                    dv: NVec2::zeros(),
                };
                n
            ],
        }
    }

    /// `self += k * w`, componentwise
    pub fn accumulate(&mut self, k: &Derivative, w: f64) {
        debug_assert_eq!(self.rates.len(), k.rates.len());
        for (acc, r) in self.rates.iter_mut().zip(k.rates.iter()) {
            acc.dx += w * r.dx;
            acc.dv += w * r.dv;
        }
    }
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// New state `self + k * h`; `self` is left untouched and `t` is copied as-is
    pub fn offset(&self, k: &Derivative, h: f64) -> System {
        debug_assert_eq!(self.len(), k.rates.len());
        let bodies = self
            .bodies
            .iter()
            .zip(k.rates.iter())
            .map(|(b, r)| Body {
                x: b.x + h * r.dx,
                v: b.v + h * r.dv,
            })
            .collect();

        System { bodies, t: self.t }
    }

    /// In-place `self += k * h`
    pub fn apply(&mut self, k: &Derivative, h: f64) {
        debug_assert_eq!(self.len(), k.rates.len());
        for (b, r) in self.bodies.iter_mut().zip(k.rates.iter()) {
            b.x += h * r.dx;
            b.v += h * r.dv;
        }
    }

    /// True when every position and velocity component is finite
    pub fn is_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|b| b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()))
    }

    /// Total momentum (unit masses, so the sum of velocities)
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .fold(NVec2::zeros(), |acc, b| acc + b.v)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| 0.5 * b.v.norm_squared()).sum()
    }

    /// Pairwise potential `-G / max(min_dist, r)` summed over unordered pairs.
    /// Below `min_dist` this is only an approximation of the floored force law.
    pub fn potential_energy(&self, g: f64, min_dist: f64) -> f64 {
        let n = self.bodies.len();
        let mut u = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = (self.bodies[j].x - self.bodies[i].x).norm();
                u -= g / r.max(min_dist);
            }
        }
        u
    }

    pub fn total_energy(&self, g: f64, min_dist: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g, min_dist)
    }
}
