//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};

use location_ingest::Trace;
use location_ingest::domain::LocationIngestionService;
use location_ingest::inbound::http::{HttpState, configure};
use location_ingest::outbound::persistence::{DieselLocationRepository, DieselUserDirectory};

fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let service = LocationIngestionService::new(
        Arc::new(DieselUserDirectory::new(config.db_pool.clone())),
        Arc::new(DieselLocationRepository::new(config.db_pool.clone())),
    )
    .with_lookup_failure_policy(config.lookup_failure_policy);
    web::Data::new(HttpState::new(Arc::new(service)))
}

/// Bind the HTTP server described by `config`.
///
/// The returned [`Server`] must be awaited to accept connections.
///
/// # Errors
/// Propagates [`std::io::Error`] when the address cannot be bound.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(http_state.clone())
            .wrap(Trace)
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run();

    Ok(server)
}
