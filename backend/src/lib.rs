//! Location ingestion service library.
//!
//! Accepts `POST /location` submissions, checks the referenced user exists,
//! and appends the location to PostgreSQL.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use middleware::Trace;
