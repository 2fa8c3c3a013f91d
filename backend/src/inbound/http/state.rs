//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` and depend only on
//! the driving port, so they can be exercised without a database.

use std::sync::Arc;

use crate::domain::ports::LocationIngestion;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub ingestion: Arc<dyn LocationIngestion>,
}

impl HttpState {
    /// Bundle the ingestion use-case for handlers.
    pub fn new(ingestion: Arc<dyn LocationIngestion>) -> Self {
        Self { ingestion }
    }
}
