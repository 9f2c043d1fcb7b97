//! Sequential load generation over a fixed endpoint list.
mod endpoints;
mod outcome;
mod plan;
mod probe;
mod report;
mod runner;


pub use endpoints::{DEFAULT_ENDPOINTS, EndpointList};
pub use outcome::AttemptOutcome;
pub use plan::LoadPlan;
pub use probe::{HttpProbe, Probe};
pub use report::Reporter;
pub use runner::{run_load, target_url};
