//! Headless scenario runner with CSV convergence output
//!
//! Steps a scenario for its configured tick count and prints one CSV line
//! per report interval. Paste the output directly into a spreadsheet to
//! graph energy and convergence over time.

use crate::simulation::scenario::Scenario;
use crate::simulation::stepper::step_physics;

/// Run the scenario to completion, printing a CSV diagnostic series.
///
/// Columns:
/// - `tick`            – tick index, starting at 1
/// - `kinetic_energy`  – total kinetic energy of the system
/// - `max_penetration` – deepest overlap among this tick's contacts (>= 0)
/// - `contacts`        – contact count this tick
/// - `final_sweep_error` – max |lambda| of the last solver sweep
pub fn run_headless(scenario: Scenario) {
    let Scenario {
        params,
        mut state,
        ticks,
        report_every,
    } = scenario;

    println!(
        "run_headless: {} bodies, {} ticks, {} iterations/tick",
        state.bodies.len(),
        ticks,
        params.iterations
    );
    println!("tick,kinetic_energy,max_penetration,contacts,final_sweep_error");

    for tick in 1..=ticks {
        state = step_physics(state, &params);

        if tick % report_every != 0 {
            continue;
        }

        // Deepest overlap, reported as a positive depth
        let max_penetration = state
            .contacts
            .iter()
            .map(|c| -c.penetration.min(0.0))
            .fold(0.0_f64, f64::max);

        let final_sweep_error = state.solver_errors.last().copied().unwrap_or(0.0);

        println!(
            "{},{:.6},{:.6},{},{:.6}",
            tick,
            state.kinetic_energy(),
            max_penetration,
            state.contacts.len(),
            final_sweep_error
        );
    }
}
