use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use super::domain::{
    ApplicationStatus, Decision, EmployerId, Job, JobId, JobListing, SeekerId,
};
use super::search::JobFilter;
use super::store::{BoardStore, StoreError};

/// Facade over the identity registry, job catalog, and application ledger.
///
/// Every precondition is checked before any state is written, so a failed
/// operation leaves no trace in the store.
pub struct JobBoardService<S> {
    store: Arc<S>,
}

impl<S> JobBoardService<S>
where
    S: BoardStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Register a seeker. Re-registering an existing id resets their
    /// application map; duplicate registration is not an error.
    pub fn register_seeker(&self, id: SeekerId) -> Result<(), BoardError> {
        self.store.upsert_seeker(id.clone())?;
        info!(seeker = %id, "job seeker registered");
        Ok(())
    }

    /// Presence check standing in for authentication; no session or token
    /// is issued.
    pub fn login_seeker(&self, id: &SeekerId) -> Result<(), BoardError> {
        if !self.store.seeker_exists(id)? {
            return Err(BoardError::SeekerNotFound(id.clone()));
        }
        Ok(())
    }

    /// Register an employer, with the same overwrite semantics as
    /// [`register_seeker`](Self::register_seeker).
    pub fn register_employer(&self, id: EmployerId) -> Result<(), BoardError> {
        self.store.upsert_employer(id.clone())?;
        info!(employer = %id, "employer registered");
        Ok(())
    }

    pub fn login_employer(&self, id: &EmployerId) -> Result<(), BoardError> {
        if !self.store.employer_exists(id)? {
            return Err(BoardError::EmployerNotFound(id.clone()));
        }
        Ok(())
    }

    /// Post a job for an employer. The catalog assigns the next sequential
    /// id and opens the employer's empty decision list for it in the same
    /// critical section.
    pub fn post_job(&self, employer: &EmployerId, job: Job) -> Result<JobId, BoardError> {
        if !self.store.employer_exists(employer)? {
            return Err(BoardError::EmployerNotFound(employer.clone()));
        }
        let id = self.store.insert_job(employer, job)?;
        info!(employer = %employer, job = %id, "job posted");
        Ok(id)
    }

    pub fn job(&self, id: JobId) -> Result<Job, BoardError> {
        self.store.job(id)?.ok_or(BoardError::JobNotFound(id))
    }

    /// Exact-match AND filtering over the catalog in insertion order. Never
    /// fails on its own: an unmatched filter yields an empty list.
    pub fn search_jobs(&self, filter: &JobFilter) -> Result<Vec<JobListing>, BoardError> {
        let listings = self
            .store
            .jobs()?
            .into_iter()
            .filter(|(_, job)| filter.matches(job))
            .map(|(job_id, job)| JobListing { job_id, job })
            .collect();
        Ok(listings)
    }

    /// Record an application. The job is checked before the seeker; a repeat
    /// apply overwrites the stored status back to `applied` rather than
    /// duplicating the entry. The employer's decision log is untouched.
    pub fn apply(&self, job: JobId, seeker: &SeekerId) -> Result<(), BoardError> {
        if self.store.job(job)?.is_none() {
            return Err(BoardError::JobNotFound(job));
        }
        if !self.store.seeker_exists(seeker)? {
            return Err(BoardError::SeekerNotFound(seeker.clone()));
        }
        self.store
            .record_application(seeker, job, ApplicationStatus::Applied)?;
        info!(seeker = %seeker, job = %job, "application submitted");
        Ok(())
    }

    /// The seeker's own view: every job they applied to with its last
    /// recorded status.
    pub fn applications(
        &self,
        seeker: &SeekerId,
    ) -> Result<BTreeMap<JobId, ApplicationStatus>, BoardError> {
        self.store
            .applications(seeker)?
            .ok_or_else(|| BoardError::SeekerNotFound(seeker.clone()))
    }

    /// The employer's view: processed decisions for one job, oldest first.
    /// A job with no processed decisions yields an empty list, including
    /// jobs the employer never posted; the raw applicant pool is not
    /// consulted.
    pub fn applications_for_job(
        &self,
        employer: &EmployerId,
        job: JobId,
    ) -> Result<Vec<Decision>, BoardError> {
        if !self.store.employer_exists(employer)? {
            return Err(BoardError::EmployerNotFound(employer.clone()));
        }
        if self.store.job(job)?.is_none() {
            return Err(BoardError::JobNotFound(job));
        }
        // The employer was just verified, so the lookup cannot miss.
        Ok(self.store.decisions(employer, job)?.unwrap_or_default())
    }

    /// Append an employer decision for a job. The status string is validated
    /// here rather than at the HTTP boundary so the core owns the taxonomy.
    /// The seeker's status map is not updated; the two views are maintained
    /// independently.
    pub fn process_application(
        &self,
        employer: &EmployerId,
        job: JobId,
        status: &str,
    ) -> Result<ApplicationStatus, BoardError> {
        if !self.store.employer_exists(employer)? {
            return Err(BoardError::EmployerNotFound(employer.clone()));
        }
        if self.store.job(job)?.is_none() {
            return Err(BoardError::JobNotFound(job));
        }
        let status = ApplicationStatus::parse_decision(status)
            .ok_or_else(|| BoardError::InvalidStatus(status.to_string()))?;
        self.store
            .append_decision(employer, Decision { job_id: job, status })?;
        info!(employer = %employer, job = %job, status = status.label(), "application processed");
        Ok(status)
    }
}

/// Error raised by the board operations.
///
/// Identifier lookups that miss are the not-found class; a decision status
/// outside the allowed set is the invalid-argument class. No other error
/// kinds exist in the core.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("job seeker '{0}' not found")]
    SeekerNotFound(SeekerId),
    #[error("employer '{0}' not found")]
    EmployerNotFound(EmployerId),
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error("invalid status '{0}': expected 'shortlisted' or 'rejected'")]
    InvalidStatus(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
