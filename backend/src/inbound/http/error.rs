//! HTTP mapping for ingestion rejections.
//!
//! Each terminal state maps to one status and one fixed plain-text message.
//! The rejection's cause is logged but never written to the response.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType, HeaderValue};
use actix_web::{HttpResponse, ResponseError};
use tracing::{error, warn};

use crate::domain::{ACCEPTED_METHOD, IngestionRejection, TerminalState};

/// Body for [`TerminalState::RejectedMethod`].
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";
/// Body for [`TerminalState::RejectedMalformed`].
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";
/// Body for [`TerminalState::RejectedUnknownUser`].
pub const UNKNOWN_USER_MESSAGE: &str = "User does not exist";
/// Body for [`TerminalState::RejectedLookupFailure`].
pub const LOOKUP_FAILED_MESSAGE: &str = "Failed to verify user";
/// Body for [`TerminalState::RejectedPersistFailure`].
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save location";

fn status_for(state: TerminalState) -> StatusCode {
    match state {
        TerminalState::Responded => StatusCode::OK,
        TerminalState::RejectedMethod => StatusCode::METHOD_NOT_ALLOWED,
        TerminalState::RejectedMalformed | TerminalState::RejectedUnknownUser => {
            StatusCode::BAD_REQUEST
        }
        TerminalState::RejectedLookupFailure | TerminalState::RejectedPersistFailure => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Fixed client-facing message for a rejection.
pub fn public_message(rejection: &IngestionRejection) -> &'static str {
    match rejection {
        IngestionRejection::MethodNotAllowed { .. } => METHOD_NOT_ALLOWED_MESSAGE,
        IngestionRejection::Malformed(_) => INVALID_PAYLOAD_MESSAGE,
        IngestionRejection::UnknownUser { .. } => UNKNOWN_USER_MESSAGE,
        IngestionRejection::LookupFailed { .. } => LOOKUP_FAILED_MESSAGE,
        IngestionRejection::PersistFailed { .. } => SAVE_FAILED_MESSAGE,
    }
}

/// Log a rejection with its cause: `warn` for client errors, `error` for
/// server errors.
pub fn log_rejection(rejection: &IngestionRejection) {
    let state = rejection.terminal_state();
    if status_for(state).is_server_error() {
        error!(terminal_state = ?state, error = %rejection, "location submission failed");
    } else {
        warn!(terminal_state = ?state, error = %rejection, "location submission rejected");
    }
}

impl ResponseError for IngestionRejection {
    fn status_code(&self) -> StatusCode {
        status_for(self.terminal_state())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        builder
            .insert_header(ContentType::plaintext())
            .insert_header((
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ));
        if matches!(self, Self::MethodNotAllowed { .. }) {
            builder.insert_header((header::ALLOW, HeaderValue::from_static(ACCEPTED_METHOD)));
        }
        builder.body(format!("{}\n", public_message(self)))
    }
}
