//! PostgreSQL persistence adapters using Diesel.
//!
//! Adapters implement the domain's driven ports over a shared `bb8` pool of
//! `diesel-async` connections. Row structs and table definitions stay private
//! to this module; every database failure is mapped into the port's own error
//! type before it crosses the boundary.
//!
//! ```ignore
//! use location_ingest::outbound::persistence::{DbPool, DieselUserDirectory, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/locations")).await?;
//! let users = DieselUserDirectory::new(pool);
//! ```

mod diesel_basic_error_mapping;
mod diesel_location_repository;
mod diesel_user_directory;
mod models;
mod pool;
mod schema;

pub use diesel_location_repository::DieselLocationRepository;
pub use diesel_user_directory::DieselUserDirectory;
pub use pool::{DbPool, PoolConfig, PoolError};
