use std::collections::BTreeMap;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::board::domain::{ApplicationStatus, Decision, EmployerId, Job, JobId, SeekerId};
use crate::board::memory::InMemoryBoardStore;
use crate::board::router::board_router;
use crate::board::service::JobBoardService;
use crate::board::store::{BoardStore, StoreError};

pub(super) fn acme() -> EmployerId {
    EmployerId("acme-hr".to_string())
}

pub(super) fn globex() -> EmployerId {
    EmployerId("globex-recruiting".to_string())
}

pub(super) fn sam() -> SeekerId {
    SeekerId("sam-rivera".to_string())
}

pub(super) fn engineer_job() -> Job {
    Job {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        location: "NY".to_string(),
        experience_years: 3,
    }
}

pub(super) fn designer_job() -> Job {
    Job {
        title: "Designer".to_string(),
        company: "Globex".to_string(),
        location: "Remote".to_string(),
        experience_years: 0,
    }
}

pub(super) fn analyst_job() -> Job {
    Job {
        title: "Analyst".to_string(),
        company: "Acme".to_string(),
        location: "Chicago".to_string(),
        experience_years: 5,
    }
}

pub(super) fn build_service() -> (
    JobBoardService<InMemoryBoardStore>,
    Arc<InMemoryBoardStore>,
) {
    let store = Arc::new(InMemoryBoardStore::new());
    let service = JobBoardService::new(store.clone());
    (service, store)
}

/// Service with one employer, one seeker, and the three sample jobs posted.
pub(super) fn seeded_service() -> JobBoardService<InMemoryBoardStore> {
    let (service, _) = build_service();
    service.register_employer(acme()).expect("employer registers");
    service.register_seeker(sam()).expect("seeker registers");
    service
        .post_job(&acme(), engineer_job())
        .expect("engineer posts");
    service
        .post_job(&acme(), designer_job())
        .expect("designer posts");
    service
        .post_job(&acme(), analyst_job())
        .expect("analyst posts");
    service
}

pub(super) fn board_router_with_service(
    service: JobBoardService<InMemoryBoardStore>,
) -> axum::Router {
    board_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Store whose every operation fails, for exercising error propagation.
pub(super) struct UnavailableStore;

impl BoardStore for UnavailableStore {
    fn upsert_seeker(&self, _id: SeekerId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn upsert_employer(&self, _id: EmployerId) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn seeker_exists(&self, _id: &SeekerId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn employer_exists(&self, _id: &EmployerId) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn insert_job(&self, _employer: &EmployerId, _job: Job) -> Result<JobId, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn job(&self, _id: JobId) -> Result<Option<Job>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn jobs(&self) -> Result<Vec<(JobId, Job)>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn record_application(
        &self,
        _seeker: &SeekerId,
        _job: JobId,
        _status: ApplicationStatus,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn applications(
        &self,
        _seeker: &SeekerId,
    ) -> Result<Option<BTreeMap<JobId, ApplicationStatus>>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn append_decision(
        &self,
        _employer: &EmployerId,
        _decision: Decision,
    ) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    fn decisions(
        &self,
        _employer: &EmployerId,
        _job: JobId,
    ) -> Result<Option<Vec<Decision>>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}
