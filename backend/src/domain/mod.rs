//! Domain types and services for location ingestion.
//!
//! Purpose: turn one raw submission into either a persisted
//! [`LocationReport`] or exactly one [`IngestionRejection`]. The domain knows
//! nothing about HTTP or SQL; it talks to storage through [`ports`].
//!
//! Public surface:
//! - LocationReport, UserId, DecodeError: the decoded payload and its errors.
//! - Submission, IngestionOutcome, IngestionRejection, TerminalState: one
//!   pipeline run and how it ended.
//! - LocationIngestionService: the driving port implementation.

pub mod ingestion;
pub mod ingestion_service;
pub mod location;
pub mod ports;

pub use self::ingestion::{
    ACCEPTED_METHOD, IngestionOutcome, IngestionRejection, LookupFailurePolicy, PipelineStage,
    Submission, TerminalState, ValidationOutcome,
};
pub use self::ingestion_service::LocationIngestionService;
pub use self::location::{DecodeError, LocationReport, UserId};
