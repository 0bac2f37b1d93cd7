use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::board::router::{self, SeekerIdQuery};
use crate::board::service::JobBoardService;

#[tokio::test]
async fn welcome_route_greets() {
    let (service, _) = build_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("message")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("RevHire"));
}

#[tokio::test]
async fn register_route_acks() {
    let (service, _) = build_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/job-seekers/register?job_seeker_id=sam-rivera")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("message"),
        Some(&json!("Job seeker registered successfully"))
    );
}

#[tokio::test]
async fn login_route_rejects_unknown_seeker() {
    let (service, _) = build_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/job-seekers/login?job_seeker_id=ghost")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let payload = read_json_body(response).await;
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn login_route_also_answers_get() {
    let service = seeded_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/job-seekers/login?job_seeker_id=sam-rivera")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn search_route_applies_query_filters() {
    let service = seeded_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::get("/job-seekers/search?location=NY&company_name=Acme")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let jobs = payload.get("jobs").and_then(|jobs| jobs.as_array()).expect("jobs array");
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].get("job_id"), Some(&json!(1)));
    assert_eq!(jobs[0].get("title"), Some(&json!("Engineer")));
}

#[tokio::test]
async fn apply_route_then_applications_route_shows_applied() {
    let service = seeded_service();
    let router = board_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/job-seekers/apply")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "job_id": 1,
                        "job_seeker_id": "sam-rivera",
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router
        .oneshot(
            Request::get("/job-seekers/applications?job_seeker_id=sam-rivera")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("1"), Some(&json!("applied")));
}

#[tokio::test]
async fn post_job_route_returns_assigned_id() {
    let (service, _) = build_service();
    service.register_employer(acme()).expect("employer registers");
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/employers/post-job?employer_id=acme-hr")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "title": "Engineer",
                        "company": "Acme",
                        "location": "NY",
                        "experience_years": 3,
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("job_id"), Some(&json!(1)));
    assert_eq!(
        payload.get("message"),
        Some(&json!("Job posted successfully"))
    );
}

#[tokio::test]
async fn post_job_route_rejects_unknown_employer() {
    let (service, _) = build_service();
    let router = board_router_with_service(service);

    let response = router
        .oneshot(
            Request::post("/employers/post-job?employer_id=nobody")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "title": "Engineer",
                        "company": "Acme",
                        "location": "NY",
                        "experience_years": 3,
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn process_application_route_rejects_invalid_status() {
    let service = seeded_service();
    let router = board_router_with_service(service);

    let response = router
        .clone()
        .oneshot(
            Request::post("/employers/process-application")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "employer_id": "acme-hr",
                        "job_id": 1,
                        "status": "hired",
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("invalid status"));

    // Nothing was appended.
    let response = router
        .oneshot(
            Request::get("/employers/applications?employer_id=acme-hr&job_id=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");
    let payload = read_json_body(response).await;
    assert_eq!(payload, json!([]));
}

#[tokio::test]
async fn employer_applications_route_lists_decisions_in_order() {
    let service = seeded_service();
    let router = board_router_with_service(service);

    for status in ["shortlisted", "rejected"] {
        let response = router
            .clone()
            .oneshot(
                Request::post("/employers/process-application")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&json!({
                            "employer_id": "acme-hr",
                            "job_id": 1,
                            "status": status,
                        }))
                        .unwrap(),
                    ))
                    .unwrap(),
            )
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = router
        .oneshot(
            Request::get("/employers/applications?employer_id=acme-hr&job_id=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload,
        json!([
            { "job_id": 1, "status": "shortlisted" },
            { "job_id": 1, "status": "rejected" },
        ])
    );
}

#[tokio::test]
async fn handler_maps_store_failures_to_internal_error() {
    let service = Arc::new(JobBoardService::new(Arc::new(UnavailableStore)));

    let response = router::register_seeker_handler::<UnavailableStore>(
        State(service),
        Query(SeekerIdQuery {
            job_seeker_id: "sam-rivera".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("store unavailable"));
}
