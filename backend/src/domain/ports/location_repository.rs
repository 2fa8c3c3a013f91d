//! Driven port appending location reports to durable storage.
//!
//! Every call is a single write attempt. There is no deduplication, so saving
//! the same report twice stores it twice.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::domain::LocationReport;

use super::define_port_error;

define_port_error! {
    /// Errors raised by location repository adapters.
    pub enum LocationPersistenceError {
        /// The backing store could not be reached.
        Connection { message: String } => "location repository connection failed: {message}",
        /// The insert was rejected or failed while executing.
        Query { message: String } => "location repository query failed: {message}",
    }
}

/// Port for storing location reports.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Append `report` as a new stored record.
    async fn save(&self, report: &LocationReport) -> Result<(), LocationPersistenceError>;
}

/// In-memory repository that keeps saved reports for inspection.
///
/// A repository built with [`FixtureLocationRepository::failing`] rejects
/// every write with the configured error instead.
///
/// # Examples
/// ```
/// use location_ingest::domain::ports::{FixtureLocationRepository, LocationRepository};
/// use location_ingest::domain::{LocationReport, UserId};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repository = FixtureLocationRepository::default();
/// let report = LocationReport::new(1.0, 2.0, UserId::new(1));
/// repository.save(&report).await.expect("fixture save");
/// assert_eq!(repository.saved(), vec![report]);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct FixtureLocationRepository {
    saved: Mutex<Vec<LocationReport>>,
    failure: Option<LocationPersistenceError>,
}

impl FixtureLocationRepository {
    /// Build a repository whose every write fails with `failure`.
    #[must_use]
    pub fn failing(failure: LocationPersistenceError) -> Self {
        Self {
            saved: Mutex::default(),
            failure: Some(failure),
        }
    }

    /// Reports stored so far, in write order.
    #[must_use]
    pub fn saved(&self) -> Vec<LocationReport> {
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl LocationRepository for FixtureLocationRepository {
    async fn save(&self, report: &LocationReport) -> Result<(), LocationPersistenceError> {
        if let Some(failure) = &self.failure {
            return Err(failure.clone());
        }
        self.saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(*report);
        Ok(())
    }
}
