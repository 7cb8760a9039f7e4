//! Contact form submission.
//!
//! One blocking POST per valid submit, run on a worker thread so the
//! event loop never waits on the network. The completion callback is
//! the only channel back; callers decide how to feed it into their
//! event stream.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::types::{FormData, SubmitOutcome};

/// How long a submission may take before it counts as failed.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// PURE FUNCTIONS (Outcome Mapping)
// ============================================================================

/// Map a response status to an outcome. The body is never inspected.
pub fn outcome_from_status(status: StatusCode) -> SubmitOutcome {
    if status.is_success() {
        SubmitOutcome::Delivered
    } else {
        SubmitOutcome::Failed(format!("unexpected status {}", status))
    }
}

// ============================================================================
// EFFECT FUNCTIONS (Network)
// ============================================================================

/// POST the field set to the form endpoint and classify the result.
///
/// Blocks for up to [`SUBMIT_TIMEOUT`]; call from a worker thread.
/// Every failure mode (client construction, transport, non-2xx status)
/// collapses into `Failed` with a diagnostic string.
pub fn post_submission(endpoint: &str, data: &FormData) -> SubmitOutcome {
    let client = match Client::builder().timeout(SUBMIT_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => return SubmitOutcome::Failed(e.to_string()),
    };

    let response = client
        .post(endpoint)
        .header(ACCEPT, "application/json")
        .form(&data.as_fields())
        .send();

    match response {
        Ok(resp) => outcome_from_status(resp.status()),
        Err(e) => SubmitOutcome::Failed(e.to_string()),
    }
}

/// Run one submission on a worker thread, delivering the outcome to
/// `on_done` when it completes.
pub fn spawn_submission(
    endpoint: String,
    data: FormData,
    on_done: impl FnOnce(SubmitOutcome) + Send + 'static,
) {
    thread::spawn(move || {
        let outcome = post_submission(&endpoint, &data);
        on_done(outcome);
    });
}

// ============================================================================
// TESTS
// ============================================================================
