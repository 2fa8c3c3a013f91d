//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::web;

use crate::domain::LocationIngestionService;
use crate::domain::ports::{LocationRepository, UserDirectory};
use crate::inbound::http::state::HttpState;

/// Wrap an ingestion service over `users` and `locations` as handler state.
pub fn state_with<U, L>(users: Arc<U>, locations: Arc<L>) -> web::Data<HttpState>
where
    U: UserDirectory + 'static,
    L: LocationRepository + 'static,
{
    web::Data::new(HttpState::new(Arc::new(LocationIngestionService::new(
        users, locations,
    ))))
}
