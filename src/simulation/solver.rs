//! Projected Gauss-Seidel velocity solver
//!
//! Runs a fixed number of full sweeps over the contact list — never
//! adaptive, no early exit — solving one normal constraint at a time.
//! Each impulse is applied to the body velocities immediately, so later
//! contacts in a sweep see the effect of earlier ones; that in-sweep
//! propagation is what lets simultaneous multi-body contact systems
//! resolve without a global matrix solve.
//!
//! The accumulated impulse is the quantity being projected: the per-step
//! `lambda` may be negative, but the accumulator is clamped at zero and
//! only the clamped delta is ever applied. Contacts push, never pull.

use crate::simulation::collision::Contact;
use crate::simulation::params::RESTITUTION_THRESHOLD;
use crate::simulation::states::{Body, NVec2};

/// Iterate the contact constraints and return the per-sweep error series.
///
/// `effective_mass` and `bias` were fixed at contact construction and are
/// not recomputed here, even though velocities change between sweeps.
/// The returned vector holds `max |lambda|` for each sweep, in order —
/// a convergence measure that decays toward zero as the sweeps settle.
pub fn solve_contacts(
    bodies: &mut [Body],
    contacts: &mut [Contact],
    iterations: usize,
    restitution: f64,
) -> Vec<f64> {
    let mut errors = Vec::with_capacity(iterations);

    for _ in 0..iterations {
        let mut max_lambda: f64 = 0.0;

        for contact in contacts.iter_mut() {
            let i = contact.body_a;

            // Relative approach velocity along the normal. The far side of
            // a wall contact is immovable, so its velocity is zero.
            let vel_b = match contact.body_b {
                Some(j) => bodies[j].vel,
                None => NVec2::zeros(),
            };
            let vn = contact.normal.dot(&(vel_b - bodies[i].vel));

            // Restitution only kicks in above the approach-speed threshold;
            // below it, resting contacts would jitter from micro-bounces.
            let restitution_bias = if vn < -RESTITUTION_THRESHOLD {
                -restitution * vn
            } else {
                0.0
            };

            // Impulse that drives vn toward the bias target.
            let lambda = -contact.effective_mass * (vn - contact.bias - restitution_bias);

            // Projection: clamp the accumulator, apply only the delta.
            // Subsequent sweeps compensate against the clamped value.
            let new_acc = (contact.impulse_acc + lambda).max(0.0);
            let delta = new_acc - contact.impulse_acc;
            contact.impulse_acc = new_acc;

            let push = contact.normal * delta;
            let inv_a = bodies[i].inv_mass;
            bodies[i].vel -= push * inv_a;
            if let Some(j) = contact.body_b {
                let inv_b = bodies[j].inv_mass;
                bodies[j].vel += push * inv_b;
            }

            if lambda.abs() > max_lambda {
                max_lambda = lambda.abs();
            }
        }

        errors.push(max_lambda);
    }

    errors
}
