//! Shared helpers for endpoint integration tests.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};

use location_ingest::Trace;
use location_ingest::domain::LocationIngestionService;
use location_ingest::domain::ports::{FixtureLocationRepository, FixtureUserDirectory};
use location_ingest::inbound::http::{HttpState, configure};

/// Users known to every test directory.
pub const KNOWN_USERS: [i64; 2] = [1, 2];

/// Fixture collaborators behind one running app.
pub struct TestWorld {
    pub locations: Arc<FixtureLocationRepository>,
    pub users: Arc<FixtureUserDirectory>,
}

impl TestWorld {
    pub fn healthy() -> Self {
        Self {
            locations: Arc::new(FixtureLocationRepository::default()),
            users: Arc::new(FixtureUserDirectory::with_users(KNOWN_USERS)),
        }
    }

    pub fn with_locations(locations: FixtureLocationRepository) -> Self {
        Self {
            locations: Arc::new(locations),
            ..Self::healthy()
        }
    }

    /// Build the app the way the server does, over these fixtures.
    pub async fn app(
        &self,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error>
    {
        let service =
            LocationIngestionService::new(Arc::clone(&self.users), Arc::clone(&self.locations));
        let state = web::Data::new(HttpState::new(Arc::new(service)));
        test::init_service(App::new().app_data(state).wrap(Trace).configure(configure)).await
    }
}
