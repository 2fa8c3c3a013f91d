//! PostgreSQL-backed `UserDirectory`.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::UserId;
use crate::domain::ports::{UserDirectory, UserLookupError};

use super::diesel_basic_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::users;

/// Answers existence checks with `SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)`.
#[derive(Clone)]
pub struct DieselUserDirectory {
    pool: DbPool,
}

impl DieselUserDirectory {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserDirectory for DieselUserDirectory {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserLookupError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_pool_error(err, UserLookupError::connection))?;

        diesel::select(exists(users::table.filter(users::id.eq(user_id.get()))))
            .get_result::<bool>(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, UserLookupError::query, UserLookupError::connection))
    }
}
