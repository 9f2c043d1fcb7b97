use std::io::Write;

use tracing::{debug, info};

use crate::error::AppResult;

use super::plan::LoadPlan;
use super::probe::Probe;
use super::report::Reporter;

/// Joins the base URL and an endpoint path exactly as typed.
#[must_use]
pub fn target_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url, path)
}

/// Walks every endpoint in order and sends `plan.requests` GETs to each,
/// one at a time.
///
/// Failed attempts are reported inline and never end the run. Returns the
/// number of attempts made.
///
/// # Errors
///
/// Returns an error only when the report stream cannot be written.
pub async fn run_load<P, W>(
    plan: &LoadPlan,
    probe: &P,
    reporter: &mut Reporter<W>,
) -> AppResult<u64>
where
    P: Probe + ?Sized,
    W: Write,
{
    info!(
        "Starting load run against {} ({} endpoints x {} requests)",
        plan.base_url,
        plan.endpoints.len(),
        plan.requests
    );

    let mut attempts: u64 = 0;
    for path in plan.endpoints.iter() {
        let url = target_url(&plan.base_url, path);
        reporter.endpoint_started(&url, plan.requests)?;
        for attempt in 1..=plan.requests {
            let outcome = probe.get(&url).await;
            debug!("{} attempt {}/{} -> {}", url, attempt, plan.requests, outcome);
            reporter.attempt(outcome)?;
            attempts = attempts.saturating_add(1);
        }
        reporter.endpoint_finished(path)?;
    }
    reporter.finished()?;

    debug!("Load run made {} attempts", attempts);
    Ok(attempts)
}
