use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{EmployerId, Job, JobId, SeekerId};
use super::search::JobFilter;
use super::service::{BoardError, JobBoardService};
use super::store::BoardStore;

/// Router builder exposing the job-board HTTP surface.
///
/// Identifier-only operations carry their ids in the query string; apply,
/// post-job, and process-application take JSON bodies.
pub fn board_router<S>(service: Arc<JobBoardService<S>>) -> Router
where
    S: BoardStore + 'static,
{
    Router::new()
        .route("/", get(welcome_handler))
        .route("/job-seekers/register", post(register_seeker_handler::<S>))
        .route(
            "/job-seekers/login",
            post(login_seeker_handler::<S>).get(login_seeker_handler::<S>),
        )
        .route("/job-seekers/search", get(search_jobs_handler::<S>))
        .route("/job-seekers/apply", post(apply_handler::<S>))
        .route(
            "/job-seekers/applications",
            get(seeker_applications_handler::<S>),
        )
        .route("/employers/register", post(register_employer_handler::<S>))
        .route("/employers/login", post(login_employer_handler::<S>))
        .route("/employers/post-job", post(post_job_handler::<S>))
        .route("/employers/applications", get(job_applications_handler::<S>))
        .route(
            "/employers/process-application",
            post(process_application_handler::<S>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SeekerIdQuery {
    pub(crate) job_seeker_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EmployerIdQuery {
    pub(crate) employer_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct JobApplicationsQuery {
    pub(crate) employer_id: String,
    pub(crate) job_id: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyRequest {
    pub(crate) job_id: u64,
    pub(crate) job_seeker_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostJobRequest {
    pub(crate) title: String,
    pub(crate) company: String,
    pub(crate) location: String,
    pub(crate) experience_years: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProcessApplicationRequest {
    pub(crate) employer_id: String,
    pub(crate) job_id: u64,
    pub(crate) status: String,
}

fn ack(message: &str) -> Response {
    (StatusCode::OK, Json(json!({ "message": message }))).into_response()
}

fn error_response(error: BoardError) -> Response {
    let status = match &error {
        BoardError::SeekerNotFound(_)
        | BoardError::EmployerNotFound(_)
        | BoardError::JobNotFound(_) => StatusCode::NOT_FOUND,
        BoardError::InvalidStatus(_) => StatusCode::BAD_REQUEST,
        BoardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = Json(json!({ "error": error.to_string() }));
    (status, body).into_response()
}

pub(crate) async fn welcome_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Welcome to RevHire API. Visit /docs for documentation." }))
}

pub(crate) async fn register_seeker_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<SeekerIdQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.register_seeker(SeekerId(params.job_seeker_id)) {
        Ok(()) => ack("Job seeker registered successfully"),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn login_seeker_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<SeekerIdQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.login_seeker(&SeekerId(params.job_seeker_id)) {
        Ok(()) => ack("Job seeker logged in successfully"),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn search_jobs_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(filter): Query<JobFilter>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.search_jobs(&filter) {
        Ok(listings) => (StatusCode::OK, Json(json!({ "jobs": listings }))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn apply_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Json(request): Json<ApplyRequest>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.apply(JobId(request.job_id), &SeekerId(request.job_seeker_id)) {
        Ok(()) => ack("Job application submitted successfully"),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn seeker_applications_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<SeekerIdQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.applications(&SeekerId(params.job_seeker_id)) {
        Ok(applications) => (StatusCode::OK, Json(applications)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn register_employer_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<EmployerIdQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.register_employer(EmployerId(params.employer_id)) {
        Ok(()) => ack("Employer registered successfully"),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn login_employer_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<EmployerIdQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.login_employer(&EmployerId(params.employer_id)) {
        Ok(()) => ack("Employer logged in successfully"),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn post_job_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<EmployerIdQuery>,
    Json(request): Json<PostJobRequest>,
) -> Response
where
    S: BoardStore + 'static,
{
    let job = Job {
        title: request.title,
        company: request.company,
        location: request.location,
        experience_years: request.experience_years,
    };

    match service.post_job(&EmployerId(params.employer_id), job) {
        Ok(job_id) => (
            StatusCode::OK,
            Json(json!({
                "message": "Job posted successfully",
                "job_id": job_id,
            })),
        )
            .into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn job_applications_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Query(params): Query<JobApplicationsQuery>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.applications_for_job(&EmployerId(params.employer_id), JobId(params.job_id)) {
        Ok(decisions) => (StatusCode::OK, Json(decisions)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn process_application_handler<S>(
    State(service): State<Arc<JobBoardService<S>>>,
    Json(request): Json<ProcessApplicationRequest>,
) -> Response
where
    S: BoardStore + 'static,
{
    match service.process_application(
        &EmployerId(request.employer_id),
        JobId(request.job_id),
        &request.status,
    ) {
        Ok(_) => ack("Application status updated successfully"),
        Err(error) => error_response(error),
    }
}
