pub mod states;
pub mod params;
pub mod spawn;
pub mod collision;
pub mod warm_start;
pub mod solver;
pub mod integrator;
pub mod stepper;
pub mod scenario;
