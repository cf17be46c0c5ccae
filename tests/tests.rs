use pgsim::simulation::params::{DT, SLOP, TRAIL_MAX};
use pgsim::{
    create_initial_state, detect_contacts, next_body_id, step_physics, Arena, Body, ContactKey,
    NVec2, SimState, StepParams,
};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Default step parameters for tests
pub fn test_params() -> StepParams {
    StepParams {
        gravity: 9.8,
        iterations: 10,
        restitution: 0.5,
        warm_starting: true,
        arena: Arena::default(),
    }
}

/// Build a state from explicit bodies, no contacts yet
pub fn state_of(bodies: Vec<Body>) -> SimState {
    let mut state = SimState::new();
    state.bodies = bodies;
    state
}

/// Dynamic body at rest at (x, y)
pub fn resting_body(x: f64, y: f64, radius: f64, id: u64) -> Body {
    Body::new_dynamic(NVec2::new(x, y), NVec2::zeros(), radius, id)
}

/// Vertical stack of `n` bodies of radius 0.5 sitting on the floor
/// of the default arena (floor at y = 9)
pub fn floor_stack(n: usize) -> SimState {
    let bodies = (0..n)
        .map(|i| resting_body(8.0, 8.45 - i as f64, 0.5, i as u64))
        .collect();
    state_of(bodies)
}

// ==================================================================================
// Contact generation tests
// ==================================================================================

#[test]
fn overlapping_static_pair_produces_no_contact() {
    let a = Body::new_static(NVec2::new(4.0, 4.0), 0.5, 0);
    let b = Body::new_static(NVec2::new(4.3, 4.0), 0.5, 1);
    let state = state_of(vec![a, b]);
    let params = test_params();

    let contacts = detect_contacts(&state.bodies, &params.arena);
    assert!(
        contacts.is_empty(),
        "static-static pair must be skipped, got {} contacts",
        contacts.len()
    );

    let next = step_physics(state, &params);
    assert!(next.contacts.is_empty());
}

#[test]
fn corner_body_gets_two_wall_contacts() {
    let body = resting_body(0.3, 0.3, 0.5, 0);
    let state = state_of(vec![body]);
    let params = test_params();

    let contacts = detect_contacts(&state.bodies, &params.arena);
    assert_eq!(
        contacts.len(),
        2,
        "corner body should touch ceiling and left wall"
    );
    for c in &contacts {
        assert!(c.body_b.is_none());
        assert!(c.penetration < 0.0);
    }
}

#[test]
fn embedded_static_body_still_generates_wall_contact() {
    let body = Body::new_static(NVec2::new(0.2, 4.0), 0.5, 0);
    let state = state_of(vec![body]);
    let params = test_params();

    let contacts = detect_contacts(&state.bodies, &params.arena);
    assert_eq!(contacts.len(), 1);
    // Zero effective mass: the contact exists but can never move the body
    assert_eq!(contacts[0].effective_mass, 0.0);
}

#[test]
fn pair_normal_points_from_a_to_b() {
    let a = resting_body(4.0, 4.0, 0.5, 0);
    let b = resting_body(4.8, 4.0, 0.5, 1);
    let state = state_of(vec![a, b]);
    let params = test_params();

    let contacts = detect_contacts(&state.bodies, &params.arena);
    assert_eq!(contacts.len(), 1);
    let c = &contacts[0];
    assert!(c.normal.x > 0.99, "normal should point from A toward B");
    assert!((c.penetration - (0.8 - 1.0)).abs() < 1e-12);
}

#[test]
fn warm_start_key_is_order_independent() {
    assert_eq!(ContactKey::pair(5, 9), ContactKey::pair(9, 5));
    assert_ne!(ContactKey::pair(5, 9), ContactKey::pair(5, 8));
}

// ==================================================================================
// Solver property tests
// ==================================================================================

#[test]
fn impulse_accumulators_never_negative() {
    let mut rng = StdRng::seed_from_u64(42);
    let params = test_params();
    let mut state = create_initial_state(10, &params.arena, &mut rng);

    for _ in 0..120 {
        state = step_physics(state, &params);
        for c in &state.contacts {
            assert!(
                c.impulse_acc >= 0.0,
                "accumulated impulse went negative: {}",
                c.impulse_acc
            );
        }
    }
}

#[test]
fn static_body_never_moves() {
    let anchor = Body::new_static(NVec2::new(8.0, 4.0), 0.5, 0);
    let anchor_pos = anchor.pos;
    let dropped = resting_body(8.0, 2.5, 0.5, 1);
    let mut state = state_of(vec![anchor, dropped]);
    let params = test_params();

    for _ in 0..240 {
        state = step_physics(state, &params);
        assert_eq!(state.bodies[0].pos, anchor_pos, "static body position changed");
        assert_eq!(state.bodies[0].vel, NVec2::zeros(), "static body velocity changed");
    }
}

#[test]
fn resting_stack_penetration_converges_within_slop() {
    let mut state = floor_stack(2);
    let params = test_params();

    for _ in 0..300 {
        state = step_physics(state, &params);
    }

    assert!(!state.contacts.is_empty(), "resting stack should stay in contact");
    for c in &state.contacts {
        assert!(
            c.penetration >= -(SLOP + 5e-3),
            "penetration did not converge: {}",
            c.penetration
        );
    }
}

#[test]
fn no_energy_gain_without_restitution_or_gravity() {
    let a = Body::new_dynamic(NVec2::new(6.0, 4.5), NVec2::new(1.0, 0.0), 0.5, 0);
    let b = Body::new_dynamic(NVec2::new(8.0, 4.5), NVec2::new(-1.0, 0.0), 0.5, 1);
    let mut state = state_of(vec![a, b]);

    let mut params = test_params();
    params.gravity = 0.0;
    params.restitution = 0.0;

    let mut ke_prev = state.kinetic_energy();
    for _ in 0..240 {
        state = step_physics(state, &params);
        let ke = state.kinetic_energy();
        assert!(
            ke <= ke_prev + 1e-9,
            "kinetic energy increased across a tick: {} -> {}",
            ke_prev,
            ke
        );
        ke_prev = ke;
    }
}

#[test]
fn warm_starting_speeds_convergence() {
    let warm_params = test_params();
    let mut cold_params = test_params();
    cold_params.warm_starting = false;

    let mut warm_state = floor_stack(3);
    let mut cold_state = floor_stack(3);

    // Sum the final-sweep error over the last ticks of each run; the
    // warm-started run should sit much closer to convergence
    let mut warm_sum = 0.0;
    let mut cold_sum = 0.0;
    for tick in 0..60 {
        warm_state = step_physics(warm_state, &warm_params);
        cold_state = step_physics(cold_state, &cold_params);
        if tick >= 50 {
            warm_sum += warm_state.solver_errors.last().copied().unwrap_or(0.0);
            cold_sum += cold_state.solver_errors.last().copied().unwrap_or(0.0);
        }
    }

    assert!(
        warm_sum < cold_sum,
        "warm starting should reduce late-sweep error: warm {} vs cold {}",
        warm_sum,
        cold_sum
    );
}

#[test]
fn solver_error_series_has_one_entry_per_sweep() {
    let mut state = floor_stack(2);
    let params = test_params();

    for _ in 0..5 {
        state = step_physics(state, &params);
        assert_eq!(state.solver_errors.len(), params.iterations);
    }
}

#[test]
fn coincident_bodies_produce_no_nan() {
    let a = resting_body(5.0, 5.0, 0.5, 0);
    let b = resting_body(5.0, 5.0, 0.5, 1);
    let mut state = state_of(vec![a, b]);
    let params = test_params();

    for _ in 0..60 {
        state = step_physics(state, &params);
        for body in &state.bodies {
            assert!(body.pos.x.is_finite() && body.pos.y.is_finite());
            assert!(body.vel.x.is_finite() && body.vel.y.is_finite());
        }
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn dropped_ball_bounces_and_stays_above_floor() {
    // Radius 0.5, released 0.1 m above the floor of the default arena
    let ball = resting_body(8.0, 8.4, 0.5, 0);
    let mut state = state_of(vec![ball]);

    let mut params = test_params();
    params.restitution = 0.8;

    let floor_rest_y = params.arena.height - 0.5; // center height when resting
    let mut was_falling = false;
    let mut bounced = false;

    for _ in 0..240 {
        state = step_physics(state, &params);
        let body = &state.bodies[0];

        if body.vel.y > 0.5 {
            was_falling = true;
        }
        if was_falling && body.vel.y < -0.5 {
            bounced = true;
        }

        // One tick of impact travel is the worst overshoot the velocity
        // solver can leave behind
        assert!(
            body.pos.y <= floor_rest_y + 1.5 * DT + SLOP,
            "ball sank into the floor: y = {}",
            body.pos.y
        );
    }

    assert!(bounced, "ball never bounced back up");
}

#[test]
fn wall_clamp_flips_and_dampens_velocity() {
    // Body already past the left wall, still moving outward. With zero
    // solver sweeps only the integrator clamp can respond.
    let body = Body::new_dynamic(NVec2::new(0.3, 4.5), NVec2::new(-2.0, 0.0), 0.5, 0);
    let mut state = state_of(vec![body]);

    let mut params = test_params();
    params.gravity = 0.0;
    params.iterations = 0;

    state = step_physics(state, &params);

    // iterations = 0 degrades gracefully: contacts reported, nothing solved
    assert!(!state.contacts.is_empty());
    assert!(state.solver_errors.is_empty());

    let body = &state.bodies[0];
    assert!(
        (body.pos.x - 0.5).abs() < 1e-12,
        "body should be snapped to the wall: x = {}",
        body.pos.x
    );
    assert!(
        (body.vel.x - 1.0).abs() < 1e-12,
        "velocity should be flipped and halved: vx = {}",
        body.vel.x
    );
}

// ==================================================================================
// Spawning and state tests
// ==================================================================================

#[test]
fn same_seed_same_initial_state() {
    let arena = Arena::default();
    let mut rng_a = StdRng::seed_from_u64(7);
    let mut rng_b = StdRng::seed_from_u64(7);

    let a = create_initial_state(8, &arena, &mut rng_a);
    let b = create_initial_state(8, &arena, &mut rng_b);

    assert_eq!(a.bodies.len(), b.bodies.len());
    for (x, y) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.vel, y.vel);
        assert_eq!(x.radius, y.radius);
    }
}

#[test]
fn initial_state_is_inside_arena_with_fresh_ids() {
    let arena = Arena::default();
    let mut rng = StdRng::seed_from_u64(3);
    let state = create_initial_state(20, &arena, &mut rng);

    for (i, body) in state.bodies.iter().enumerate() {
        assert_eq!(body.id, i as u64);
        assert!(!body.is_static);
        assert!(body.inv_mass > 0.0);
        assert!(body.pos.x >= body.radius && body.pos.x <= arena.width - body.radius);
        assert!(body.pos.y >= body.radius && body.pos.y <= arena.height - body.radius);
    }
    assert!(state.contacts.is_empty());
    assert!(state.solver_errors.is_empty());
    assert_eq!(next_body_id(&state), 20);
}

#[test]
fn next_body_id_on_empty_state_is_zero() {
    assert_eq!(next_body_id(&SimState::new()), 0);
}

#[test]
fn mass_follows_disk_area() {
    let body = resting_body(5.0, 5.0, 0.5, 0);
    let expected = 0.25 * std::f64::consts::PI;
    assert!((body.mass - expected).abs() < 1e-12);
    assert!((body.inv_mass - 1.0 / expected).abs() < 1e-12);

    let fixed = Body::new_static(NVec2::new(5.0, 5.0), 0.5, 1);
    assert_eq!(fixed.inv_mass, 0.0);
    assert!(fixed.is_static);
}

#[test]
fn stepper_is_deterministic() {
    let params = test_params();
    let state = floor_stack(3);

    let mut a = state.clone();
    let mut b = state;
    for _ in 0..30 {
        a = step_physics(a, &params);
        b = step_physics(b, &params);
    }

    for (x, y) in a.bodies.iter().zip(b.bodies.iter()) {
        assert_eq!(x.pos, y.pos);
        assert_eq!(x.vel, y.vel);
    }
}

// ==================================================================================
// Trail tests
// ==================================================================================

#[test]
fn trail_grows_while_moving_and_decays_at_rest() {
    let body = Body::new_dynamic(NVec2::new(4.0, 4.5), NVec2::new(3.0, 0.0), 0.5, 0);
    let mut state = state_of(vec![body]);

    let mut params = test_params();
    params.gravity = 0.0;

    for _ in 0..5 {
        state = step_physics(state, &params);
    }
    assert_eq!(state.bodies[0].trail.len(), 5, "moving body should grow a trail");

    // Stop the body; the trail should drain one entry per tick
    state.bodies[0].vel = NVec2::zeros();
    for expected in (0..5).rev() {
        state = step_physics(state, &params);
        assert_eq!(state.bodies[0].trail.len(), expected);
    }
}

#[test]
fn trail_is_bounded() {
    let body = Body::new_dynamic(NVec2::new(1.0, 4.5), NVec2::new(2.0, 0.0), 0.5, 0);
    let mut state = state_of(vec![body]);

    let mut params = test_params();
    params.gravity = 0.0;
    params.arena = Arena {
        width: 200.0,
        height: 9.0,
    };

    for _ in 0..(TRAIL_MAX + 20) {
        state = step_physics(state, &params);
    }
    assert_eq!(state.bodies[0].trail.len(), TRAIL_MAX);

    // Newest entry first: the front is the most recent pre-update position
    let front = state.bodies[0].trail.front().copied().unwrap();
    let back = state.bodies[0].trail.back().copied().unwrap();
    assert!(front.x > back.x);
}
