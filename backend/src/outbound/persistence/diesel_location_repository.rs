//! PostgreSQL-backed `LocationRepository`.
//!
//! One `INSERT` per call, outside any explicit transaction.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::LocationReport;
use crate::domain::ports::{LocationPersistenceError, LocationRepository};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewLocationRow;
use super::pool::DbPool;
use super::schema::locations;

/// Appends reports to the `locations` table.
#[derive(Clone)]
pub struct DieselLocationRepository {
    pool: DbPool,
}

impl DieselLocationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for DieselLocationRepository {
    async fn save(&self, report: &LocationReport) -> Result<(), LocationPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, LocationPersistenceError::connection))?;

        diesel::insert_into(locations::table)
            .values(NewLocationRow::from(report))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_diesel_error(
                    err,
                    LocationPersistenceError::query,
                    LocationPersistenceError::connection,
                )
            })
    }
}
