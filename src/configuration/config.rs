//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]  – arena bounds the walls are generated from
//! - [`SolverConfig`] – gravity, solver sweeps, restitution, warm starting
//! - [`SpawnConfig`]  – randomized initial population and its seed
//! - [`BodyConfig`]   – explicitly placed bodies (optional)
//! - [`RunConfig`]    – headless run length and report cadence
//! - [`ScenarioConfig`] – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! arena:
//!   width: 16.0           # right wall at x = width
//!   height: 9.0           # floor at y = height (+y points down)
//!
//! solver:
//!   gravity: 9.8          # m/s^2 downward
//!   iterations: 10        # PGS sweeps per tick
//!   restitution: 0.5      # global bounce coefficient
//!   warm_starting: true   # seed impulses from the previous tick
//!
//! spawn:
//!   count: 12             # randomly placed dynamic bodies
//!   seed: 42              # RNG seed, reproducible runs
//!
//! bodies:                 # optional, placed after the random population
//!   - x: [ 8.0, 8.5 ]
//!     v: [ 0.0, 0.0 ]
//!     radius: 0.5
//!     is_static: true
//!
//! run:
//!   ticks: 600            # headless run length
//!   report_every: 10      # CSV line cadence
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation (`SimState` + `StepParams`).

use serde::Deserialize;

/// Arena bounds in simulation units
#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub width: f64,  // right wall at x = width
    pub height: f64, // floor at y = height
}

/// Per-tick solver settings
#[derive(Deserialize, Debug, Clone)]
pub struct SolverConfig {
    pub gravity: f64,        // downward acceleration, m/s^2
    pub iterations: usize,   // PGS sweep count, fixed per tick
    pub restitution: f64,    // global bounce coefficient, 0..1+
    pub warm_starting: bool, // carry impulses across ticks
}

/// Randomized initial population
#[derive(Deserialize, Debug, Clone)]
pub struct SpawnConfig {
    pub count: usize, // number of dynamic bodies spawned at start
    pub seed: u64,    // deterministic seed to make runs reproducable
}

/// Configuration for a single explicitly placed body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y] in simulation units
    pub v: Vec<f64>, // initial velocity [vx, vy]
    pub radius: f64, // disk radius; mass follows from the area
    #[serde(default)]
    pub is_static: bool, // immovable if true
}

/// Headless run settings
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub ticks: usize,        // number of fixed ticks to run
    pub report_every: usize, // CSV report cadence, in ticks
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,            // wall boundaries
    pub solver: SolverConfig,          // per-tick solver settings
    pub spawn: SpawnConfig,            // randomized population
    pub bodies: Option<Vec<BodyConfig>>, // explicit bodies, placed after spawn
    pub run: RunConfig,                // headless run settings
}
