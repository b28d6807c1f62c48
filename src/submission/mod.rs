//! Submission collaborator: receives a validated signup record

mod preview;
mod traits;

pub use preview::PreviewSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::state::FormValues;
use chrono::{DateTime, Utc};

/// A record accepted by a sink
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub values: FormValues,
    /// Pretty-printed JSON payload, as handed over
    pub payload: String,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(values: FormValues) -> anyhow::Result<Self> {
        let payload = values.to_json_pretty()?;
        Ok(Self {
            values,
            payload,
            submitted_at: Utc::now(),
        })
    }
}
