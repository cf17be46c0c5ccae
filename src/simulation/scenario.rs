//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - per-tick solver parameters (`StepParams`)
//! - world state (`SimState` with the initial bodies)
//! - headless run settings (tick count, report cadence)
//!
//! The randomized population draws from a `StdRng` seeded from the
//! scenario file, so the same file always yields the same world.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::params::{Arena, StepParams};
use crate::simulation::spawn::{create_initial_state, next_body_id};
use crate::simulation::states::{Body, NVec2, SimState};

/// A fully-initialized runtime scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the solver parameters, the initial world state, and the
/// run settings consumed by the headless loop.
pub struct Scenario {
    pub params: StepParams,
    pub state: SimState,
    pub ticks: usize,
    pub report_every: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        // Arena (runtime) from ArenaConfig
        let arena = Arena {
            width: cfg.arena.width,
            height: cfg.arena.height,
        };

        // StepParams (runtime) from SolverConfig
        let params = StepParams {
            gravity: cfg.solver.gravity,
            iterations: cfg.solver.iterations,
            restitution: cfg.solver.restitution,
            warm_starting: cfg.solver.warm_starting,
            arena,
        };

        // Randomized population, seeded from the scenario file
        let mut rng = StdRng::seed_from_u64(cfg.spawn.seed);
        let mut state = create_initial_state(cfg.spawn.count, &arena, &mut rng);

        // Explicit bodies: map `BodyConfig` -> runtime `Body`, ids
        // continuing after the random population
        if let Some(body_cfgs) = &cfg.bodies {
            for bc in body_cfgs {
                let id = next_body_id(&state);
                state.bodies.push(build_body(bc, id));
            }
        }

        Self {
            params,
            state,
            ticks: cfg.run.ticks,
            report_every: cfg.run.report_every.max(1),
        }
    }
}

/// Map one explicit `BodyConfig` to a runtime `Body`
fn build_body(bc: &BodyConfig, id: u64) -> Body {
    let pos = NVec2::new(bc.x[0], bc.x[1]);
    if bc.is_static {
        Body::new_static(pos, bc.radius, id)
    } else {
        let vel = NVec2::new(bc.v[0], bc.v[1]);
        Body::new_dynamic(pos, vel, bc.radius, id)
    }
}
