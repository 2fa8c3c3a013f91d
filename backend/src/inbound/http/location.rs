//! Location submission endpoint.
//!
//! ```text
//! POST /location {"latitude":12.34,"longitude":56.78,"userID":1}
//! ```
//!
//! Every method is routed to the handler so the domain's method gate, not the
//! router, decides the 405.

use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{IngestionRejection, PipelineStage, Submission};
use crate::inbound::http::error::log_rejection;
use crate::inbound::http::state::HttpState;

/// Path of the location resource.
pub const LOCATION_PATH: &str = "/location";

/// Message returned with every successful submission.
pub const SAVED_MESSAGE: &str = "Location received and saved successfully";

/// JSON envelope sent on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub message: String,
}

impl ResponseEnvelope {
    /// Envelope acknowledging a saved location.
    pub fn saved() -> Self {
        Self {
            success: true,
            message: SAVED_MESSAGE.to_owned(),
        }
    }
}

/// Accept one location submission.
///
/// A body that cannot be read from the transport is treated as malformed.
pub async fn submit_location(
    state: web::Data<HttpState>,
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, IngestionRejection> {
    let method = req.method().as_str();
    let read_failure: String;
    let submission = match &body {
        Ok(bytes) => Submission::new(method, bytes),
        Err(err) => {
            read_failure = err.to_string();
            Submission::unreadable(method, &read_failure)
        }
    };

    match state.ingestion.ingest(submission).await {
        Ok(report) => {
            info!(
                user_id = %report.user_id(),
                latitude = report.latitude(),
                longitude = report.longitude(),
                "location saved"
            );
            debug!(stage = %PipelineStage::Responded, "location response sent");
            Ok(HttpResponse::Ok().json(ResponseEnvelope::saved()))
        }
        Err(rejection) => {
            log_rejection(&rejection);
            Err(rejection)
        }
    }
}

/// Register the location resource on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use location_ingest::inbound::http::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(LOCATION_PATH).to(submit_location));
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;
