//! Reflective walls of the simulation box
//!
//! A body that has left `[-bound, bound]` on some axis and is still moving
//! outward gets that velocity component negated. Positions are never
//! clamped, the reversed velocity (plus gravity) brings the body back.

use crate::simulation::states::System;

/// Reflect outward-moving velocity components of bodies outside the box.
/// Each axis is checked on its own; calling this twice equals calling it once.
pub fn reflect(sys: &mut System, bound: f64) {
    for b in sys.bodies.iter_mut() {
        for axis in 0..2 {
            let p = b.x[axis];
            let v = b.v[axis];
            if (p < -bound && v < 0.0) || (p > bound && v > 0.0) {
                b.v[axis] = -v;
            }
        }
    }
}
