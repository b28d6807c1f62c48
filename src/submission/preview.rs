//! Display-only sink: logs the payload and hands it back for the preview dialog

use super::{Submission, SubmissionSink};
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

#[derive(Debug, Default)]
pub struct PreviewSink;

#[async_trait]
impl SubmissionSink for PreviewSink {
    async fn submit(&mut self, values: &FormValues) -> Result<Submission> {
        let submission = Submission::new(values.clone())?;
        // Passwords never reach the log
        tracing::info!(
            email = %values.email,
            submitted_at = %submission.submitted_at,
            "Signup submitted"
        );
        tracing::debug!(fields = submission.payload.lines().count(), "Payload rendered");
        Ok(submission)
    }
}
