//! Fixed-step semi-implicit Euler integrator
//!
//! Advances positions from the solved velocities, maintains the bounded
//! motion trails, and applies a defensive position clamp against the four
//! arena walls. The clamp is a tunneling safety net for solver
//! under-correction, not the primary collision response.

use crate::simulation::params::{Arena, BOUNDARY_DAMPING, DT, TRAIL_MAX, TRAIL_SPEED_MIN};
use crate::simulation::states::Body;

/// Advance all non-static bodies by one step
///
/// For each dynamic body:
/// - trail bookkeeping from the pre-update position,
/// - x_n+1 = x_n + dt * v_n+1 (velocity already reflects this tick's
///   gravity and solver impulses),
/// - clamp back inside the arena if integration overshot a wall.
///
/// Static bodies are never advanced, which is what keeps the
/// `is_static => pos, vel unchanged` invariant.
pub fn integrate(bodies: &mut [Body], arena: &Arena) {
    for body in bodies.iter_mut() {
        if body.is_static {
            continue;
        }

        // Fast bodies grow the trail from the front; slow bodies let it
        // decay one entry per tick instead of clearing abruptly.
        if body.speed() > TRAIL_SPEED_MIN {
            body.trail.push_front(body.pos);
            body.trail.truncate(TRAIL_MAX);
        } else if !body.trail.is_empty() {
            body.trail.pop_back();
        }

        // Advance position by a full step
        body.pos += body.vel * DT;

        clamp_to_arena(body, arena);
    }
}

/// Snap a body back inside the arena and invert-dampen the offending
/// velocity component. Only reached when the solver under-corrected or the
/// body moved fast enough to pass a wall within one step.
fn clamp_to_arena(body: &mut Body, arena: &Arena) {
    let r = body.radius;

    if body.pos.x < r {
        body.pos.x = r;
        body.vel.x *= -BOUNDARY_DAMPING;
    } else if body.pos.x > arena.width - r {
        body.pos.x = arena.width - r;
        body.vel.x *= -BOUNDARY_DAMPING;
    }

    if body.pos.y < r {
        body.pos.y = r;
        body.vel.y *= -BOUNDARY_DAMPING;
    } else if body.pos.y > arena.height - r {
        body.pos.y = arena.height - r;
        body.vel.y *= -BOUNDARY_DAMPING;
    }
}
