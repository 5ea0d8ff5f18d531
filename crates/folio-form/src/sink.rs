// File: src/sink.rs
// Purpose: Where accepted submissions go (logged only, never transmitted)

use folio_validation::ContactSubmission;

pub trait SubmissionSink {
    fn record(&mut self, submission: &ContactSubmission);
}

/// Writes each submission as JSON to the `folio::submission` log target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SubmissionSink for TracingSink {
    fn record(&mut self, submission: &ContactSubmission) {
        match serde_json::to_string(submission) {
            Ok(json) => tracing::info!(target: "folio::submission", "Form submitted with data: {}", json),
            Err(e) => tracing::error!(target: "folio::submission", "Failed to encode submission: {}", e),
        }
    }
}
