//! One-tick simulation pipeline
//!
//! `step_physics` is the single entry point the outside world drives the
//! simulation through: given the previous world snapshot and a parameter
//! set, it runs the full pipeline and returns the next snapshot. The call
//! is total — it never fails — and owns the body store for its duration.
//!
//! Pipeline order per tick:
//! gravity -> contact detection -> warm start -> PGS sweeps -> integration

use crate::simulation::collision::detect_contacts;
use crate::simulation::integrator::integrate;
use crate::simulation::params::{StepParams, DT};
use crate::simulation::solver::solve_contacts;
use crate::simulation::states::SimState;
use crate::simulation::warm_start::warm_start;

/// Advance the world by one fixed tick.
///
/// `state.bodies` persists into the returned state (advanced in place);
/// `contacts` and `solver_errors` are regenerated from scratch. The
/// previous tick's contacts are consulted once, for warm-start seeding,
/// before being replaced.
///
/// `iterations = 0` degrades gracefully: contacts are detected but never
/// resolved, and the error series comes back empty.
pub fn step_physics(mut state: SimState, params: &StepParams) -> SimState {
    // Gravity first: the solver sees this tick's gravity-affected
    // velocities, and integration then uses the solved values
    // (semi-implicit Euler).
    for body in state.bodies.iter_mut() {
        if !body.is_static {
            body.vel.y += params.gravity * DT;
        }
    }

    let mut contacts = detect_contacts(&state.bodies, &params.arena);

    if params.warm_starting {
        warm_start(&mut contacts, &state.contacts, &mut state.bodies);
    }

    let solver_errors = solve_contacts(
        &mut state.bodies,
        &mut contacts,
        params.iterations,
        params.restitution,
    );

    integrate(&mut state.bodies, &params.arena);

    SimState {
        bodies: state.bodies,
        contacts,
        solver_errors,
    }
}
