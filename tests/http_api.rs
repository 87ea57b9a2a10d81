//! HTTP API flows against the assembled router with in-memory adapters.

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use quote_qualifier::adapters::http::{app_router, QualificationAppState};
use quote_qualifier::adapters::storage::{InMemoryQuoteRecordRepository, InMemorySessionStore};
use quote_qualifier::domain::foundation::QuoteId;
use quote_qualifier::domain::pricing::PriceEstimator;
use quote_qualifier::ports::QuoteRecordRepository;

struct TestApp {
    router: Router,
    records: Arc<InMemoryQuoteRecordRepository>,
}

impl TestApp {
    fn new() -> Self {
        let records = Arc::new(InMemoryQuoteRecordRepository::new());
        let state = QualificationAppState::new(
            records.clone(),
            Arc::new(InMemorySessionStore::new()),
            Arc::new(PriceEstimator::default()),
        );
        Self {
            router: app_router(state, Duration::from_secs(5)),
            records,
        }
    }

    async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn open(&self, quote_id: QuoteId, resume: bool) -> Value {
        let (status, body) = self
            .send(
                "POST",
                "/api/qualifications",
                Some(json!({ "quote_id": quote_id.to_string(), "resume": resume })),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body
    }
}

fn session_uri(session: &Value, suffix: &str) -> String {
    format!(
        "/api/qualifications/{}{}",
        session["id"].as_str().unwrap(),
        suffix
    )
}

#[tokio::test]
async fn full_showcase_flow_over_http() {
    let app = TestApp::new();
    let quote_id = QuoteId::new();
    let session = app.open(quote_id, false).await;
    assert_eq!(session["current_step"]["id"], "intro");
    assert_eq!(session["steps"].as_array().unwrap().len(), 1);

    let (status, body) = app
        .send(
            "PATCH",
            &session_uri(&session, "/record"),
            Some(json!({ "slice": "context", "category": "showcase" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["steps"].as_array().unwrap().len(), 6);

    let (status, body) = app
        .send(
            "PATCH",
            &session_uri(&session, "/record"),
            Some(json!({ "slice": "web", "page_count": 5 })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["estimate"]["recommended"], 1500);

    let (_, body) = app.send("POST", &session_uri(&session, "/next"), None).await;
    assert_eq!(body["current_step"]["id"], "pages");

    let (_, body) = app
        .send("POST", &session_uri(&session, "/goto"), Some(json!({ "step": 99 })))
        .await;
    assert_eq!(body["current_step"]["ordinal"], 6);
    assert_eq!(body["on_summary"], true);

    let (_, body) = app.send("POST", &session_uri(&session, "/previous"), None).await;
    assert_eq!(body["current_step"]["id"], "technical");

    let (status, estimate) = app.send("GET", &session_uri(&session, "/estimate"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(estimate["min"], 1275);
    assert_eq!(estimate["max"], 1800);

    let (status, summary) = app.send("GET", &session_uri(&session, "/summary"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["groups"][0]["title"], "Service");
    assert_eq!(summary["estimate"], estimate);

    let (status, finished) = app.send("POST", &session_uri(&session, "/finish"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(finished["quote_id"], quote_id.to_string());
    assert_eq!(app.records.record_count().await, 1);
    assert!(app.records.find_by_quote(&quote_id).await.unwrap().is_some());

    let (status, _) = app.send("GET", &session_uri(&session, ""), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resume_over_http_lands_on_summary() {
    let app = TestApp::new();
    let quote_id = QuoteId::new();

    let session = app.open(quote_id, false).await;
    app.send(
        "PATCH",
        &session_uri(&session, "/record"),
        Some(json!({ "slice": "context", "category": "ecommerce" })),
    )
    .await;
    app.send("POST", &session_uri(&session, "/finish"), None).await;

    let resumed = app.open(quote_id, true).await;
    assert_eq!(resumed["resumed"], true);
    assert_eq!(resumed["current_step"]["ordinal"], 5);
    assert_eq!(resumed["on_summary"], true);
}

#[tokio::test]
async fn mismatched_slice_is_conflict() {
    let app = TestApp::new();
    let session = app.open(QuoteId::new(), false).await;
    app.send(
        "PATCH",
        &session_uri(&session, "/record"),
        Some(json!({ "slice": "context", "category": "identity" })),
    )
    .await;

    let (status, body) = app
        .send(
            "PATCH",
            &session_uri(&session, "/record"),
            Some(json!({ "slice": "mobile", "custom_design": true })),
        )
        .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["code"].is_string());
}

#[tokio::test]
async fn finishing_without_category_is_unprocessable() {
    let app = TestApp::new();
    let session = app.open(QuoteId::new(), false).await;

    let (status, _) = app.send("POST", &session_uri(&session, "/finish"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = app.send("GET", &session_uri(&session, ""), None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn cancel_discards_session() {
    let app = TestApp::new();
    let session = app.open(QuoteId::new(), false).await;

    let (status, _) = app.send("DELETE", &session_uri(&session, ""), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.send("DELETE", &session_uri(&session, ""), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_session_id_is_bad_request() {
    let app = TestApp::new();
    let (status, body) = app.send("GET", "/api/qualifications/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}
