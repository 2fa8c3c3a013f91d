//! Driven port answering whether a user identifier is known.
//!
//! The pipeline consults it once per request with a positive identifier. A
//! failing lookup is reported as [`UserLookupError`] so the caller can tell
//! an unreachable directory apart from a missing user.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user directory adapters.
    pub enum UserLookupError {
        /// The backing store could not be reached.
        Connection { message: String } => "user directory connection failed: {message}",
        /// The existence query failed while executing.
        Query { message: String } => "user directory query failed: {message}",
    }
}

/// Port for user existence checks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Return `true` when a user with `user_id` is stored.
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserLookupError>;
}

/// In-memory directory holding a fixed set of known users.
///
/// # Examples
/// ```
/// use location_ingest::domain::UserId;
/// use location_ingest::domain::ports::FixtureUserDirectory;
///
/// let directory = FixtureUserDirectory::with_users([1, 2]);
/// assert!(directory.contains(UserId::new(2)));
/// assert!(!directory.contains(UserId::new(99)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct FixtureUserDirectory {
    known: HashSet<UserId>,
}

impl FixtureUserDirectory {
    /// Build a directory that knows exactly the given raw identifiers.
    pub fn with_users(ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            known: ids.into_iter().map(UserId::new).collect(),
        }
    }

    /// Whether the directory knows `user_id`.
    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.known.contains(&user_id)
    }
}

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn user_exists(&self, user_id: UserId) -> Result<bool, UserLookupError> {
        Ok(self.contains(user_id))
    }
}
