//! Trait abstraction for the submission collaborator to enable mocking in tests

use super::Submission;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Accepts a signup record once every field has passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Hand over the validated values
    async fn submit(&mut self, values: &FormValues) -> Result<Submission>;
}
