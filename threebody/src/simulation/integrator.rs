//! Fixed-step time integrators for the simulation
//!
//! Provides classical RK4 and a velocity-Verlet integrator for comparison,
//! both driven by `AccelSet` and `Parameters`. Every step ends with boundary
//! reflection, so a step is only complete once the walls have been applied.

use super::boundary::reflect;
use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{Derivative, NVec2, System};

/// Advance the system by `dt` using classical fourth-order Runge-Kutta
///
/// ```text
/// k1 = F(y)
/// k2 = F(y + k1 * dt/2)
/// k3 = F(y + k2 * dt/2)
/// k4 = F(y + k3 * dt)
/// y' = y + dt * (k1/6 + k2/3 + k3/3 + k4/6)
/// ```
///
/// All four stages are built from the same starting state and the same `dt`.
/// Uses four force evaluations per step, then reflects at the walls and
/// advances `sys.t`.
pub fn rk4_step(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    if sys.is_empty() { // no bodies, return
        return;
    }
    let n = sys.len();

    let t = sys.t;
    let half_dt = 0.5 * dt;

    // k1 = F(y)
    let k1 = forces.derivative(t, sys);

    // k2 = F(y + k1 dt/2)
    let y2 = sys.offset(&k1, half_dt);
    let k2 = forces.derivative(t + half_dt, &y2);

    // k3 = F(y + k2 dt/2)
    let y3 = sys.offset(&k2, half_dt);
    let k3 = forces.derivative(t + half_dt, &y3);

    // k4 = F(y + k3 dt)
    let y4 = sys.offset(&k3, dt);
    let k4 = forces.derivative(t + dt, &y4);

    // k = k1/6 + k2/3 + k3/3 + k4/6
    let mut k = Derivative::zeros(n);
    k.accumulate(&k1, 1.0 / 6.0);
    k.accumulate(&k2, 1.0 / 3.0);
    k.accumulate(&k3, 1.0 / 3.0);
    k.accumulate(&k4, 1.0 / 6.0);

    // y' = y + dt k
    sys.apply(&k, dt);
    sys.t += dt;

    reflect(sys, params.bound);

    debug_assert!(sys.is_finite(), "non-finite state after rk4 step at t = {}", sys.t);
}

/// Advance the system by `dt` using velocity-Verlet (kick-drift-kick)
///
/// Not the default. Only runs when a scenario sets `integrator: "verlet"`,
/// and the benchmark times it next to RK4 for comparison. Second order, so it
/// needs far smaller substeps than `rk4_step` for the same error.
/// Uses two force evaluations per step, then reflects at the walls
pub fn verlet_step(sys: &mut System, forces: &AccelSet, params: &Parameters, dt: f64) {
    if sys.is_empty() { // no bodies, return
        return;
    }
    let n = sys.len();

    let half_dt = 0.5 * dt;

    // a_n from x_n at time t_n
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    // Kick: v_n+1/2 = v_n + (dt/2) a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Kick: v_n+1 = v_n+1/2 + (dt/2) a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }

    reflect(sys, params.bound);

    debug_assert!(sys.is_finite(), "non-finite state after verlet step at t = {}", sys.t);
}
