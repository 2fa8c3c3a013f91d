//! Diesel row structs for the persistence adapters.

use diesel::prelude::*;

use crate::domain::LocationReport;

use super::schema::locations;

/// Insertable row for `locations`. The primary key is assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Insertable)]
#[diesel(table_name = locations)]
pub(crate) struct NewLocationRow {
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: i64,
}

impl From<&LocationReport> for NewLocationRow {
    fn from(report: &LocationReport) -> Self {
        Self {
            latitude: report.latitude(),
            longitude: report.longitude(),
            user_id: report.user_id().get(),
        }
    }
}
