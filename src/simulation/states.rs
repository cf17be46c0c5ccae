//! Core state types for the disk simulation.
//!
//! Defines the body and world-state structs:
//! - `Body` using `NVec2` (position, velocity, mass, trail)
//! - `SimState` holding the body store plus the per-tick contact set
//!   and solver error series
//!
//! Contacts refer to bodies by index into `SimState::bodies`, so the
//! solver never holds aliased references into the store.

use std::collections::VecDeque;

use nalgebra::Vector2;

use crate::simulation::collision::Contact;
use crate::simulation::params::TRAIL_MAX;

pub type NVec2 = Vector2<f64>;

/// Normalize `v`, returning the zero vector for zero-length input.
/// Two bodies at the exact same position must not produce NaN normals.
pub fn normalize_or_zero(v: NVec2) -> NVec2 {
    let len = v.norm();
    if len == 0.0 {
        NVec2::zeros()
    } else {
        v / len
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: u64, // unique for the session, sole identity key
    pub pos: NVec2, // position
    pub vel: NVec2, // velocity
    pub radius: f64, // disk radius, fixed at creation
    pub mass: f64, // radius^2 * pi (unit density)
    pub inv_mass: f64, // 0 for static bodies, else 1/mass
    pub trail: VecDeque<NVec2>, // past positions, newest first, capped
    pub is_static: bool, // never advanced; inv_mass forced to 0
}

impl Body {
    /// Build a dynamic body. Mass follows from the disk area.
    pub fn new_dynamic(pos: NVec2, vel: NVec2, radius: f64, id: u64) -> Self {
        let mass = radius * radius * std::f64::consts::PI;
        Self {
            id,
            pos,
            vel,
            radius,
            mass,
            inv_mass: 1.0 / mass,
            trail: VecDeque::with_capacity(TRAIL_MAX),
            is_static: false,
        }
    }

    /// Build a static body: infinite effective mass, zero velocity, never moves.
    pub fn new_static(pos: NVec2, radius: f64, id: u64) -> Self {
        let mass = radius * radius * std::f64::consts::PI;
        Self {
            id,
            pos,
            vel: NVec2::zeros(),
            radius,
            mass,
            inv_mass: 0.0,
            trail: VecDeque::with_capacity(TRAIL_MAX),
            is_static: true,
        }
    }

    /// Current speed (velocity magnitude).
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

/// Authoritative world snapshot for one tick.
///
/// `bodies` persists and is advanced in place across ticks; `contacts` and
/// `solver_errors` are rebuilt from scratch every tick.
#[derive(Debug, Clone)]
pub struct SimState {
    pub bodies: Vec<Body>, // persistent body store, index-addressed
    pub contacts: Vec<Contact>, // this tick's contact set
    pub solver_errors: Vec<f64>, // max |lambda| per solver sweep, in sweep order
}

impl SimState {
    /// Empty world: no bodies, no contacts, no error history.
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            contacts: Vec::new(),
            solver_errors: Vec::new(),
        }
    }

    /// Total kinetic energy of all bodies: sum of m v^2 / 2.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.vel.norm_squared())
            .sum()
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
