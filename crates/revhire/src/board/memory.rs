use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::domain::{ApplicationStatus, Decision, EmployerId, Job, JobId, SeekerId};
use super::store::{BoardStore, StoreError};

/// Mutable board state. All three maps sit behind a single mutex so every
/// operation is one critical section; identities and jobs are never removed
/// once inserted.
#[derive(Debug, Default)]
struct BoardState {
    seekers: HashMap<SeekerId, BTreeMap<JobId, ApplicationStatus>>,
    employers: HashMap<EmployerId, BTreeMap<JobId, Vec<Decision>>>,
    jobs: BTreeMap<JobId, Job>,
}

/// In-memory store shared by all handlers.
///
/// Job ids come from an atomic sequence owned by the catalog rather than the
/// map's cardinality, so assignment stays race-free under concurrent posts.
/// Ids are monotonic, which makes the `BTreeMap` iteration order equal to
/// insertion order.
#[derive(Debug)]
pub struct InMemoryBoardStore {
    state: Mutex<BoardState>,
    job_sequence: AtomicU64,
}

impl InMemoryBoardStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BoardState::default()),
            job_sequence: AtomicU64::new(1),
        }
    }

    fn locked(&self) -> MutexGuard<'_, BoardState> {
        self.state.lock().expect("board mutex poisoned")
    }
}

impl Default for InMemoryBoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardStore for InMemoryBoardStore {
    fn upsert_seeker(&self, id: SeekerId) -> Result<(), StoreError> {
        self.locked().seekers.insert(id, BTreeMap::new());
        Ok(())
    }

    fn upsert_employer(&self, id: EmployerId) -> Result<(), StoreError> {
        self.locked().employers.insert(id, BTreeMap::new());
        Ok(())
    }

    fn seeker_exists(&self, id: &SeekerId) -> Result<bool, StoreError> {
        Ok(self.locked().seekers.contains_key(id))
    }

    fn employer_exists(&self, id: &EmployerId) -> Result<bool, StoreError> {
        Ok(self.locked().employers.contains_key(id))
    }

    fn insert_job(&self, employer: &EmployerId, job: Job) -> Result<JobId, StoreError> {
        let id = JobId(self.job_sequence.fetch_add(1, Ordering::Relaxed));
        let mut state = self.locked();
        state.jobs.insert(id, job);
        state
            .employers
            .entry(employer.clone())
            .or_default()
            .insert(id, Vec::new());
        Ok(id)
    }

    fn job(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        Ok(self.locked().jobs.get(&id).cloned())
    }

    fn jobs(&self) -> Result<Vec<(JobId, Job)>, StoreError> {
        Ok(self
            .locked()
            .jobs
            .iter()
            .map(|(id, job)| (*id, job.clone()))
            .collect())
    }

    fn record_application(
        &self,
        seeker: &SeekerId,
        job: JobId,
        status: ApplicationStatus,
    ) -> Result<(), StoreError> {
        // The service checks existence first and entries are never removed,
        // so the entry call only ever touches a live seeker.
        self.locked()
            .seekers
            .entry(seeker.clone())
            .or_default()
            .insert(job, status);
        Ok(())
    }

    fn applications(
        &self,
        seeker: &SeekerId,
    ) -> Result<Option<BTreeMap<JobId, ApplicationStatus>>, StoreError> {
        Ok(self.locked().seekers.get(seeker).cloned())
    }

    fn append_decision(
        &self,
        employer: &EmployerId,
        decision: Decision,
    ) -> Result<(), StoreError> {
        // Per-job lists are created on first use; an employer can record
        // decisions against a job they did not post.
        self.locked()
            .employers
            .entry(employer.clone())
            .or_default()
            .entry(decision.job_id)
            .or_default()
            .push(decision);
        Ok(())
    }

    fn decisions(
        &self,
        employer: &EmployerId,
        job: JobId,
    ) -> Result<Option<Vec<Decision>>, StoreError> {
        Ok(self
            .locked()
            .employers
            .get(employer)
            .map(|jobs| jobs.get(&job).cloned().unwrap_or_default()))
    }
}
