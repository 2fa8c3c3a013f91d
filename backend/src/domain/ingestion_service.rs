//! Location ingestion domain service.
//!
//! Implements the [`LocationIngestion`] driving port over a user directory and
//! a location repository. Each call runs the method gate, decoder, validator,
//! and persister in order and stops at the first rejection.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    LocationIngestion, LocationPersistenceError, LocationRepository, UserDirectory,
    UserLookupError,
};
use crate::domain::{
    ACCEPTED_METHOD, IngestionOutcome, IngestionRejection, LocationReport, LookupFailurePolicy,
    PipelineStage, Submission, UserId, ValidationOutcome,
};

/// Location ingestion service implementing the driving port.
#[derive(Clone)]
pub struct LocationIngestionService<U, L> {
    users: Arc<U>,
    locations: Arc<L>,
    lookup_failure_policy: LookupFailurePolicy,
}

impl<U, L> LocationIngestionService<U, L> {
    /// Create a service with the default [`LookupFailurePolicy`].
    pub fn new(users: Arc<U>, locations: Arc<L>) -> Self {
        Self {
            users,
            locations,
            lookup_failure_policy: LookupFailurePolicy::default(),
        }
    }

    /// Replace the policy applied when the user directory fails.
    #[must_use]
    pub fn with_lookup_failure_policy(mut self, policy: LookupFailurePolicy) -> Self {
        self.lookup_failure_policy = policy;
        self
    }

    /// Policy applied when the user directory fails.
    pub fn lookup_failure_policy(&self) -> LookupFailurePolicy {
        self.lookup_failure_policy
    }
}

impl<U, L> LocationIngestionService<U, L>
where
    U: UserDirectory,
    L: LocationRepository,
{
    /// Check whether `user_id` references a stored user.
    ///
    /// Identifiers that are zero or negative are unknown without consulting
    /// the directory. A directory failure is logged here and reported as
    /// [`ValidationOutcome::LookupFailed`].
    pub async fn validate(&self, user_id: UserId) -> ValidationOutcome {
        if !user_id.is_assignable() {
            return ValidationOutcome::UserUnknown;
        }
        match self.users.user_exists(user_id).await {
            Ok(true) => ValidationOutcome::UserExists,
            Ok(false) => ValidationOutcome::UserUnknown,
            Err(err) => {
                error!(%user_id, error = %err, "user existence check failed");
                ValidationOutcome::LookupFailed(err)
            }
        }
    }

    /// Write `report` once. Failures are returned, never retried.
    pub async fn persist(&self, report: &LocationReport) -> Result<(), LocationPersistenceError> {
        self.locations.save(report).await
    }

    fn reject_lookup_failure(
        &self,
        user_id: UserId,
        source: UserLookupError,
    ) -> IngestionRejection {
        match self.lookup_failure_policy {
            LookupFailurePolicy::TreatAsUnknownUser => IngestionRejection::UnknownUser { user_id },
            LookupFailurePolicy::TreatAsInternalError => {
                IngestionRejection::LookupFailed { user_id, source }
            }
        }
    }
}

#[async_trait]
impl<U, L> LocationIngestion for LocationIngestionService<U, L>
where
    U: UserDirectory,
    L: LocationRepository,
{
    async fn ingest(&self, submission: Submission<'_>) -> IngestionOutcome {
        let method = submission.method();
        if method != ACCEPTED_METHOD {
            return Err(IngestionRejection::MethodNotAllowed {
                method: method.to_owned(),
            });
        }
        debug!(stage = %PipelineStage::Received, "location submission received");

        let report = submission.decode()?;
        let user_id = report.user_id();
        debug!(stage = %PipelineStage::Decoded, %user_id, "location payload decoded");

        match self.validate(user_id).await {
            ValidationOutcome::UserExists => {}
            ValidationOutcome::UserUnknown => {
                return Err(IngestionRejection::UnknownUser { user_id });
            }
            ValidationOutcome::LookupFailed(source) => {
                return Err(self.reject_lookup_failure(user_id, source));
            }
        }
        debug!(stage = %PipelineStage::Validated, %user_id, "location user verified");

        self.persist(&report)
            .await
            .map_err(|source| IngestionRejection::PersistFailed { user_id, source })?;
        debug!(stage = %PipelineStage::Persisted, %user_id, "location saved");

        Ok(report)
    }
}

#[cfg(test)]
#[path = "ingestion_service_tests.rs"]
mod tests;
