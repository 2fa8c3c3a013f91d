//! Diesel and pool error mapping shared by the persistence adapters.
//!
//! Port errors only distinguish connection from query failures. The mapped
//! message keeps the database's own text for logs; it never reaches clients.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the port's connection constructor.
pub(crate) fn map_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    connection(message)
}

/// Map a Diesel failure through the port's query or connection constructor.
pub(crate) fn map_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            let message = format!("database error: {}", info.message());
            match kind {
                DatabaseErrorKind::ClosedConnection => connection(message),
                _ => query(message),
            }
        }
        DieselError::BrokenTransactionManager => {
            connection("database connection error".to_owned())
        }
        other => {
            debug!(error = %other, "diesel operation failed");
            query(other.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::UserLookupError;
    use rstest::rstest;

    fn map(error: DieselError) -> UserLookupError {
        map_diesel_error(error, UserLookupError::query, UserLookupError::connection)
    }

    #[rstest]
    fn closed_connections_are_connection_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new("server closed the connection unexpectedly".to_owned()),
        );

        assert_eq!(
            map(error),
            UserLookupError::connection("database error: server closed the connection unexpectedly")
        );
    }

    #[rstest]
    fn constraint_violations_are_query_errors() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("insert violates foreign key constraint".to_owned()),
        );

        assert!(matches!(map(error), UserLookupError::Query { .. }));
    }

    #[rstest]
    fn other_diesel_errors_are_query_errors() {
        assert!(matches!(
            map(DieselError::NotFound),
            UserLookupError::Query { .. }
        ));
    }

    #[rstest]
    #[case(PoolError::checkout("timed out waiting for connection"))]
    #[case(PoolError::build("invalid connection string"))]
    fn pool_errors_are_connection_errors(#[case] error: PoolError) {
        assert!(matches!(
            map_pool_error(error, UserLookupError::connection),
            UserLookupError::Connection { .. }
        ));
    }
}
