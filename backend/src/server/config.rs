//! HTTP server configuration object.

use location_ingest::domain::LookupFailurePolicy;
use location_ingest::outbound::persistence::DbPool;

/// Everything [`super::create_server`] needs to serve `/location`.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: DbPool,
    pub(crate) lookup_failure_policy: LookupFailurePolicy,
}

impl ServerConfig {
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, db_pool: DbPool) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool,
            lookup_failure_policy: LookupFailurePolicy::default(),
        }
    }

    /// Choose how user lookup failures are reported to clients.
    #[must_use]
    pub fn with_lookup_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.lookup_failure_policy = policy;
        self
    }

    /// `host:port` the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
