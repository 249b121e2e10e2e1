//! Fixed-step time integrator for the three-body system
//!
//! One force evaluation per step. The net force is added to the velocity
//! directly (masses are never divided out) and positions then drift with
//! the already-updated velocities. Driven by `ForceSet` and `Parameters`.

use super::states::{System, NVec2, BODY_COUNT};
use super::forces::ForceSet;
use super::params::Parameters;

/// Advance the system by one step of size `params.h0`
///
/// Updates velocities, positions, and `sys.t` in-place:
/// - v_n+1 = v_n + h0 * F_n
/// - x_n+1 = x_n + h0 * v_n+1
pub fn euler_integrator(sys: &mut System, forces: &ForceSet, params: &Parameters) {
    let dt = params.h0; // time step dt

    // Net forces at the current positions x_n
    let mut f = [NVec2::zeros(); BODY_COUNT];
    forces.accumulate_forces(sys.t, &*sys, &mut f);

    // Kick: v_n+1 = v_n + dt * F_n. The net force goes into the velocity
    // as-is, without dividing by the body mass.
    for (b, f) in sys.bodies.iter_mut().zip(f.iter()) {
        b.v += dt * *f;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    // Increment the system time by one full step
    sys.t += dt;
}
