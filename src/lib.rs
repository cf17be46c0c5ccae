pub mod simulation;
pub mod configuration;
pub mod diagnostics;
pub mod benchmark;

pub use simulation::states::{Body, NVec2, SimState, normalize_or_zero};
pub use simulation::params::{Arena, StepParams};
pub use simulation::collision::{Contact, ContactKey, WallSide, detect_contacts};
pub use simulation::spawn::{create_initial_state, next_body_id, spawn_body};
pub use simulation::stepper::step_physics;
pub use simulation::scenario::Scenario;

pub use configuration::config::ScenarioConfig;

pub use diagnostics::headless::run_headless;

pub use benchmark::benchmark::{bench_detection, bench_step, bench_step_curve};
