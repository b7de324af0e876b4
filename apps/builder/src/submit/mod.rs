//! Submission pipeline, the single network boundary of the form engine.
//!
//! One POST per submit attempt, carrying the assembled document as JSON to
//! the form's configured action. There is no retry logic and no guard
//! against a second submit while one is in flight; a failed attempt leaves
//! the form usable, and resubmitting starts a fresh attempt.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::assemble;
use crate::models::resume::ResumeDocument;
use crate::surface::Surface;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Network-level failure: the request produced no response at all.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        /// Human-readable `message` from the error body, when one parsed.
        message: Option<String>,
    },

    /// A success response whose body could not be interpreted.
    #[error("malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Where a finished attempt leaves the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The endpoint pointed somewhere else, either via an HTTP redirect or
    /// a `redirect_url` in the response body.
    Navigate(String),
    /// Saved in place; the page stays put and surfaces a success notice.
    Saved,
}

/// Pipeline state, advanced on every attempt. `Succeeded` and `Failed` are
/// terminal per attempt; a resubmit re-enters `Assembling`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Assembling,
    InFlight,
    Succeeded,
    Failed,
}

pub struct SubmissionPipeline {
    client: reqwest::Client,
    state: SubmitState,
}

impl SubmissionPipeline {
    pub fn new() -> Self {
        SubmissionPipeline {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            state: SubmitState::Idle,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Runs one submit attempt: assemble, POST, interpret. The caller has
    /// already suppressed the default form submission; nothing here touches
    /// the surface.
    pub async fn submit(
        &mut self,
        surface: &Surface,
        action: &str,
    ) -> Result<SubmitOutcome, SubmitError> {
        self.state = SubmitState::Assembling;
        let document = assemble::build_document(surface);
        debug!(action, "submitting resume document");

        self.state = SubmitState::InFlight;
        let result = self.post_document(action, &document).await;
        self.state = match &result {
            Ok(_) => SubmitState::Succeeded,
            Err(_) => SubmitState::Failed,
        };
        result
    }

    async fn post_document(
        &self,
        action: &str,
        document: &ResumeDocument,
    ) -> Result<SubmitOutcome, SubmitError> {
        let response = self.client.post(action).json(document).send().await?;

        let status = response.status();
        let final_url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from));
            warn!(status = status.as_u16(), "submission rejected");
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        // Fetch-style redirect detection: the client follows the hop, so a
        // final URL differing from the action means the server redirected.
        if final_url != action {
            info!(%final_url, "submission redirected");
            return Ok(SubmitOutcome::Navigate(final_url));
        }

        let body = response.text().await?;
        let parsed: Value = serde_json::from_str(&body)?;
        match parsed.get("redirect_url").and_then(Value::as_str) {
            Some(url) => Ok(SubmitOutcome::Navigate(url.to_string())),
            None => Ok(SubmitOutcome::Saved),
        }
    }
}
