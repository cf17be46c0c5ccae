//! Body factory and initial-state construction
//!
//! All spawn randomness flows through an injected `StdRng`, so a scenario
//! seed reproduces the exact same world. Radius is drawn from a bounded
//! range and mass follows from the disk area, so the factory is the only
//! place the `inv_mass`/`is_static` agreement is established.

use rand::rngs::StdRng;
use rand::Rng;

use crate::simulation::params::{Arena, RADIUS_RANGE, SPAWN_ATTEMPTS, SPAWN_VEL_RANGE};
use crate::simulation::states::{Body, NVec2, SimState};

/// Single-body factory, used for the initial population and for runtime
/// spawning alike.
///
/// Dynamic bodies get a random initial velocity; static bodies are created
/// at rest and stay at rest. The caller supplies a session-unique `id`
/// (see [`next_body_id`]).
pub fn spawn_body(x: f64, y: f64, id: u64, is_static: bool, rng: &mut StdRng) -> Body {
    let radius = rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1);
    let pos = NVec2::new(x, y);

    if is_static {
        Body::new_static(pos, radius, id)
    } else {
        let vel = NVec2::new(
            rng.gen_range(SPAWN_VEL_RANGE.0..SPAWN_VEL_RANGE.1),
            rng.gen_range(SPAWN_VEL_RANGE.0..SPAWN_VEL_RANGE.1),
        );
        Body::new_dynamic(pos, vel, radius, id)
    }
}

/// Build the starting world: `count` dynamic bodies at randomized
/// positions inside the arena, ids `0..count`.
///
/// Placement is rejection-sampled against the bodies placed so far; after
/// `SPAWN_ATTEMPTS` failures the last candidate is kept anyway and the
/// solver separates the overlap over the first few ticks.
pub fn create_initial_state(count: usize, arena: &Arena, rng: &mut StdRng) -> SimState {
    let mut state = SimState::new();
    // Keep spawn centers a max-radius away from every wall
    let margin = RADIUS_RANGE.1;

    for id in 0..count as u64 {
        let mut candidate = respawn_candidate(id, arena, margin, rng);

        for _ in 0..SPAWN_ATTEMPTS {
            let overlapping = state
                .bodies
                .iter()
                .any(|b| (b.pos - candidate.pos).norm() < b.radius + candidate.radius);
            if !overlapping {
                break;
            }
            candidate = respawn_candidate(id, arena, margin, rng);
        }

        state.bodies.push(candidate);
    }

    state
}

fn respawn_candidate(id: u64, arena: &Arena, margin: f64, rng: &mut StdRng) -> Body {
    let x = rng.gen_range(margin..arena.width - margin);
    let y = rng.gen_range(margin..arena.height - margin);
    spawn_body(x, y, id, false, rng)
}

/// Next free body id: stable, monotonically increasing.
/// Callers insert spawned bodies with this id to keep ids session-unique.
pub fn next_body_id(state: &SimState) -> u64 {
    state
        .bodies
        .iter()
        .map(|b| b.id)
        .max()
        .map_or(0, |id| id + 1)
}
