use std::time::Instant;

use crate::simulation::collision::detect_contacts;
use crate::simulation::params::{Arena, StepParams};
use crate::simulation::states::{Body, NVec2, SimState};
use crate::simulation::stepper::step_physics;

/// Helper to build a manual SimState of size `n`
/// Deterministic positions, no rand needed
fn make_state(n: usize, arena: &Arena) -> SimState {
    let mut state = SimState::new();

    for i in 0..n {
        let i_f = i as f64;
        // Sinusoidal scatter across the arena interior; dense enough that
        // larger n produces plenty of contacts
        let x = 0.8 + (arena.width - 1.6) * (0.5 + 0.5 * (i_f * 0.37).sin());
        let y = 0.8 + (arena.height - 1.6) * (0.5 + 0.5 * (i_f * 0.13).cos());

        state.bodies.push(Body::new_dynamic(
            NVec2::new(x, y),
            NVec2::zeros(),
            0.4,
            i as u64,
        ));
    }

    state
}

/// Shared parameter template for the benchmarks
fn make_params() -> StepParams {
    StepParams {
        gravity: 9.8,
        iterations: 10,
        restitution: 0.5,
        warm_starting: true,
        arena: Arena::default(),
    }
}

/// Benchmark contact generation across system sizes
pub fn bench_detection() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800, 1600];
    let params = make_params();

    for n in ns {
        let state = make_state(n, &params.arena);

        // Warm up
        let _ = detect_contacts(&state.bodies, &params.arena);

        let t0 = Instant::now();
        let contacts = detect_contacts(&state.bodies, &params.arena);
        let dt_detect = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, contacts = {:6}, detect = {:8.6} s",
            contacts.len(),
            dt_detect
        );
    }
}

/// Benchmark the full tick across system sizes, warm starting on vs off
pub fn bench_step() {
    let ns = [50, 100, 200, 400, 800];
    let steps = 10; // ticks per measurement

    for n in ns {
        let params_warm = make_params();
        let mut params_cold = make_params();
        params_cold.warm_starting = false;

        // Warm-started run
        let mut state = make_state(n, &params_warm.arena);
        state = step_physics(state, &params_warm); // warm-up tick

        let t0 = Instant::now();
        for _ in 0..steps {
            state = step_physics(state, &params_warm);
        }
        let warm_per_step = t0.elapsed().as_secs_f64() / steps as f64;

        // Cold run from the same start
        let mut state = make_state(n, &params_cold.arena);
        state = step_physics(state, &params_cold);

        let t1 = Instant::now();
        for _ in 0..steps {
            state = step_physics(state, &params_cold);
        }
        let cold_per_step = t1.elapsed().as_secs_f64() / steps as f64;

        println!(
            "N = {:5}, warm step = {:8.6} s,   cold step = {:8.6} s",
            n, warm_per_step, cold_per_step
        );
    }
}

/// Benchmark the full tick for a range of n
/// Paste output directly into excel to graph
pub fn bench_step_curve() {
    println!("N,warm_ms,cold_ms");

    for n in (50..=1600).step_by(50) {
        // Small n: average over more ticks to smooth noise
        let steps = if n <= 400 { 20 } else { 5 };

        let params_warm = make_params();
        let mut params_cold = make_params();
        params_cold.warm_starting = false;

        let mut state = make_state(n, &params_warm.arena);
        let t0 = Instant::now();
        for _ in 0..steps {
            state = step_physics(state, &params_warm);
        }
        let ms_warm = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut state = make_state(n, &params_cold.arena);
        let t1 = Instant::now();
        for _ in 0..steps {
            state = step_physics(state, &params_cold);
        }
        let ms_cold = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_warm, ms_cold);
    }
}
