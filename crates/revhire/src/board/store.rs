use std::collections::BTreeMap;

use super::domain::{ApplicationStatus, Decision, EmployerId, Job, JobId, SeekerId};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Lookups return `None` for identities the registry has never seen; the
/// service translates those into its not-found errors.
pub trait BoardStore: Send + Sync {
    /// Create or reset a seeker entry. Overwrite semantics are deliberate:
    /// re-registering an id replaces its application map with an empty one.
    fn upsert_seeker(&self, id: SeekerId) -> Result<(), StoreError>;

    /// Create or reset an employer entry, replacing its decision lists.
    fn upsert_employer(&self, id: EmployerId) -> Result<(), StoreError>;

    fn seeker_exists(&self, id: &SeekerId) -> Result<bool, StoreError>;

    fn employer_exists(&self, id: &EmployerId) -> Result<bool, StoreError>;

    /// Assign the next job id, then register the posting and the employer's
    /// empty decision list in one critical section so no reader observes a
    /// half-applied post.
    fn insert_job(&self, employer: &EmployerId, job: Job) -> Result<JobId, StoreError>;

    fn job(&self, id: JobId) -> Result<Option<Job>, StoreError>;

    /// Full catalog in insertion order.
    fn jobs(&self) -> Result<Vec<(JobId, Job)>, StoreError>;

    /// Write the seeker's status for a job, overwriting any prior value.
    fn record_application(
        &self,
        seeker: &SeekerId,
        job: JobId,
        status: ApplicationStatus,
    ) -> Result<(), StoreError>;

    /// The seeker's full application map, or `None` for an unknown seeker.
    fn applications(
        &self,
        seeker: &SeekerId,
    ) -> Result<Option<BTreeMap<JobId, ApplicationStatus>>, StoreError>;

    /// Append one decision to the employer's log for the decision's job,
    /// creating the per-job list on first use.
    fn append_decision(&self, employer: &EmployerId, decision: Decision)
        -> Result<(), StoreError>;

    /// The employer's decision list for a job, oldest first. `None` for an
    /// unknown employer; an empty list for a job they never processed.
    fn decisions(&self, employer: &EmployerId, job: JobId)
        -> Result<Option<Vec<Decision>>, StoreError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
