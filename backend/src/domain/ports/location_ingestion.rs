//! Driving port for the location ingestion use-case.
//!
//! Inbound adapters hand it the request method and body and receive the
//! terminal outcome of one pipeline run. Handler tests can substitute a
//! double without wiring any persistence.

use async_trait::async_trait;

use crate::domain::{IngestionOutcome, Submission};

/// Domain use-case port for ingesting one location submission.
#[async_trait]
pub trait LocationIngestion: Send + Sync {
    /// Run the gate, decode, validate, and persist stages for `submission`.
    async fn ingest(&self, submission: Submission<'_>) -> IngestionOutcome;
}
