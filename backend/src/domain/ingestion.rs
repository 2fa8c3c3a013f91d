//! Pipeline vocabulary: submissions, validation outcomes, and terminal states.
//!
//! A submission moves through `Received → Decoded → Validated → Persisted →
//! Responded`. Any stage may stop it in exactly one rejected terminal state;
//! there are no backward transitions and nothing is retried.

use std::fmt;

use super::ports::{LocationPersistenceError, UserLookupError};
use super::{DecodeError, LocationReport, UserId};

/// The only request method the pipeline accepts.
pub const ACCEPTED_METHOD: &str = "POST";

/// One raw request as seen by the pipeline.
///
/// # Examples
/// ```
/// use location_ingest::domain::Submission;
///
/// let submission = Submission::new("POST", br#"{"userID":1}"#);
/// assert_eq!(submission.method(), "POST");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    method: &'a str,
    body: SubmittedBody<'a>,
}

#[derive(Debug, Clone, Copy)]
enum SubmittedBody<'a> {
    Bytes(&'a [u8]),
    Unreadable(&'a str),
}

impl<'a> Submission<'a> {
    /// A submission whose body was read in full.
    #[must_use]
    pub const fn new(method: &'a str, body: &'a [u8]) -> Self {
        Self {
            method,
            body: SubmittedBody::Bytes(body),
        }
    }

    /// A submission whose body could not be read from the transport.
    #[must_use]
    pub const fn unreadable(method: &'a str, reason: &'a str) -> Self {
        Self {
            method,
            body: SubmittedBody::Unreadable(reason),
        }
    }

    /// Request method as received.
    #[must_use]
    pub const fn method(&self) -> &'a str {
        self.method
    }

    /// Decode the body into a report.
    ///
    /// # Errors
    /// Returns the [`DecodeError`] describing why the body is unusable.
    pub fn decode(&self) -> Result<LocationReport, DecodeError> {
        match self.body {
            SubmittedBody::Bytes(bytes) => LocationReport::decode(bytes),
            SubmittedBody::Unreadable(reason) => Err(DecodeError::Unreadable {
                message: reason.to_owned(),
            }),
        }
    }
}

/// Result of checking a report's user against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The user is stored.
    UserExists,
    /// The user is not stored, or the identifier can never be stored.
    UserUnknown,
    /// The directory could not answer.
    LookupFailed(UserLookupError),
}

/// How a [`ValidationOutcome::LookupFailed`] is surfaced to callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupFailurePolicy {
    /// Reject as if the user did not exist (client error).
    #[default]
    TreatAsUnknownUser,
    /// Reject as an infrastructure failure (server error).
    TreatAsInternalError,
}

/// Pipeline stages, in the order a successful submission visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// The request arrived and passed the method gate.
    Received,
    /// The body decoded into a report.
    Decoded,
    /// The report's user exists.
    Validated,
    /// The report was written.
    Persisted,
    /// The success envelope was sent.
    Responded,
}

impl PipelineStage {
    /// Stable lowercase label used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Decoded => "decoded",
            Self::Validated => "validated",
            Self::Persisted => "persisted",
            Self::Responded => "responded",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalState {
    /// Decoded, validated, and persisted.
    Responded,
    /// Stopped by the method gate.
    RejectedMethod,
    /// Stopped by the decoder.
    RejectedMalformed,
    /// Stopped by the validator: unknown user.
    RejectedUnknownUser,
    /// Stopped by the validator: directory failure surfaced as a server error.
    RejectedLookupFailure,
    /// Stopped by the persister.
    RejectedPersistFailure,
}

impl TerminalState {
    /// Terminal state reached by `outcome`.
    #[must_use]
    pub fn of(outcome: &IngestionOutcome) -> Self {
        match outcome {
            Ok(_) => Self::Responded,
            Err(rejection) => rejection.terminal_state(),
        }
    }
}

/// Why a submission stopped before being persisted.
///
/// The carried details are for logs only; callers see a fixed message per
/// terminal state.
#[derive(Debug, thiserror::Error)]
pub enum IngestionRejection {
    /// The request used a method other than [`ACCEPTED_METHOD`].
    #[error("method {method} is not accepted")]
    MethodNotAllowed { method: String },
    /// The body did not decode.
    #[error("invalid request payload: {0}")]
    Malformed(#[from] DecodeError),
    /// The report references a user that is not stored.
    #[error("user {user_id} does not exist")]
    UnknownUser { user_id: UserId },
    /// The directory failed and policy asks for a server error.
    #[error("could not verify user {user_id}: {source}")]
    LookupFailed {
        user_id: UserId,
        source: UserLookupError,
    },
    /// The write failed.
    #[error("failed to save location for user {user_id}: {source}")]
    PersistFailed {
        user_id: UserId,
        source: LocationPersistenceError,
    },
}

impl IngestionRejection {
    /// Terminal state this rejection represents.
    #[must_use]
    pub const fn terminal_state(&self) -> TerminalState {
        match self {
            Self::MethodNotAllowed { .. } => TerminalState::RejectedMethod,
            Self::Malformed(_) => TerminalState::RejectedMalformed,
            Self::UnknownUser { .. } => TerminalState::RejectedUnknownUser,
            Self::LookupFailed { .. } => TerminalState::RejectedLookupFailure,
            Self::PersistFailed { .. } => TerminalState::RejectedPersistFailure,
        }
    }
}

/// Outcome of one pipeline run: the persisted report or the rejection.
pub type IngestionOutcome = Result<LocationReport, IngestionRejection>;
