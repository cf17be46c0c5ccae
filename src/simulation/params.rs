//! Numerical and physical parameters for the simulation
//!
//! `StepParams` holds the caller-supplied per-tick settings:
//! - gravity magnitude and solver sweep count,
//! - global restitution coefficient and warm-starting toggle,
//! - arena bounds the walls are generated from
//!
//! The fixed constants of the pipeline (timestep, Baumgarte factor, slop,
//! trail limits) live here as module constants.

/// Fixed timestep, seconds per tick. Tick cadence is a caller concern;
/// the core only uses this in bias computation and integration.
pub const DT: f64 = 1.0 / 60.0;

/// Fraction of the penetration error corrected per tick via velocity bias.
pub const BAUMGARTE: f64 = 0.2;

/// Allowed penetration below which no positional correction is applied.
/// Prevents jitter from over-correcting negligible overlap.
pub const SLOP: f64 = 0.01;

/// Approach speed below which restitution is not applied, suppressing
/// micro-bounce jitter on resting contacts.
pub const RESTITUTION_THRESHOLD: f64 = 1.0;

/// Velocity scale applied when the integrator clamp snaps a body back
/// inside the arena: the offending component becomes -v * BOUNDARY_DAMPING.
pub const BOUNDARY_DAMPING: f64 = 0.5;

/// Maximum number of past positions kept per body.
pub const TRAIL_MAX: usize = 20;

/// Speed below which the trail decays instead of growing.
pub const TRAIL_SPEED_MIN: f64 = 0.05;

/// Radius range for randomly spawned bodies, [min, max).
pub const RADIUS_RANGE: (f64, f64) = (0.4, 0.8);

/// Initial velocity component range for randomly spawned dynamic bodies.
pub const SPAWN_VEL_RANGE: (f64, f64) = (-2.0, 2.0);

/// Placement attempts per body before accepting an overlapping spot.
pub const SPAWN_ATTEMPTS: usize = 32;

/// Axis-aligned arena rectangle `[0, width] x [0, height]`.
/// Screen-style axes: +y points down, so the floor is at `y = height`.
#[derive(Debug, Clone, Copy)]
pub struct Arena {
    pub width: f64, // right wall at x = width
    pub height: f64, // floor at y = height
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 16.0,
            height: 9.0,
        }
    }
}

/// Caller-supplied configuration for one `step_physics` invocation.
#[derive(Debug, Clone)]
pub struct StepParams {
    pub gravity: f64, // m/s^2, downward (+y)
    pub iterations: usize, // solver sweep count, fixed, no early exit
    pub restitution: f64, // global bounce coefficient, 0..1+
    pub warm_starting: bool, // seed impulses from the previous tick
    pub arena: Arena, // wall boundaries
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            iterations: 10,
            restitution: 0.5,
            warm_starting: true,
            arena: Arena::default(),
        }
    }
}
