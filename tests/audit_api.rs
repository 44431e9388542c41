use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use seo_audit_service::audit::catalog::{PLACEHOLDER_COMPETITOR, QUICK_WINS};
use seo_audit_service::store::MemoryAuditStore;
use seo_audit_service::{AppState, Config, routes};

fn app_with_store(store: Arc<MemoryAuditStore>) -> Router {
    routes::create_router(AppState {
        store,
        config: Config::default(),
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn ten_questions() -> String {
    (1..=10)
        .map(|i| format!("Q{i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[tokio::test]
async fn test_submission_scenario() {
    let store = Arc::new(MemoryAuditStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(
        &app,
        post_json(
            "/api/audits",
            json!({
                "websiteUrl": "example.com",
                "targetQuestions": ten_questions(),
                "competitorDomains": "rival.com",
                "useSEMrush": false,
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["auditId"].is_string());

    let data = &body["auditData"];
    assert_eq!(data["input"]["competitors"], json!(["rival.com"]));
    assert_eq!(data["input"]["website"], "example.com");

    let audit = &data["audit"];
    assert_eq!(audit["aiVisibilityComparison"].as_array().unwrap().len(), 2);
    assert_eq!(audit["aiVisibilityComparison"][0]["domain"], "example.com");

    let questions = audit["topQuestionsPerformance"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for (i, entry) in questions.iter().enumerate() {
        assert_eq!(entry["question"], format!("Q{}", i + 1));
        assert_eq!(entry["topCompetitor"]["domain"], "rival.com");
        assert_eq!(entry["siteEntry"]["domain"], "example.com");
    }

    assert_eq!(audit["quickWins"], json!(QUICK_WINS));
    assert_eq!(audit["trafficTrend"].as_array().unwrap().len(), 6);
    assert!(data["meta"]["lastUpdated"].is_string());
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_scores_within_ranges() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    for _ in 0..20 {
        let (status, body) = send(
            &app,
            post_json(
                "/api/audits",
                json!({"websiteUrl": "example.com", "targetQuestions": "Q1"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let audit = &body["auditData"]["audit"];
        let seo = audit["seoScore"].as_u64().unwrap();
        let ai = audit["aiCitationScore"].as_u64().unwrap();
        let critical = audit["criticalIssuesCount"].as_u64().unwrap();
        assert!((60..=89).contains(&seo));
        assert!((40..=79).contains(&ai));
        assert!((3..=12).contains(&critical));

        let trend = audit["trafficTrend"].as_array().unwrap();
        let uplift = audit["forecast"]["projectedUplift"].as_array().unwrap();
        for (current, projected) in trend.iter().zip(uplift) {
            let current = current.as_u64().unwrap();
            assert_eq!(projected.as_u64().unwrap(), current * 6 / 5);
        }
    }
}

#[tokio::test]
async fn test_missing_questions_is_rejected_without_write() {
    let store = Arc::new(MemoryAuditStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(
        &app,
        post_json("/api/audits", json!({"websiteUrl": "example.com"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("targetQuestions"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_missing_website_is_rejected() {
    let store = Arc::new(MemoryAuditStore::new());
    let app = app_with_store(store.clone());

    let (status, body) = send(
        &app,
        post_json("/api/audits", json!({"websiteUrl": "", "targetQuestions": "Q1"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("websiteUrl"));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_created_audit_can_be_fetched() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    let (_, created) = send(
        &app,
        post_json(
            "/functions/v1/create-seo-audit",
            json!({"websiteUrl": "example.com", "targetQuestions": "Q1\nQ2"}),
        ),
    )
    .await;
    let id = created["auditId"].as_str().unwrap();

    let (status, fetched) = send(&app, get(&format!("/api/audits/{id}"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["websiteUrl"], "example.com");
    assert_eq!(fetched["auditData"], created["auditData"]);
}

#[tokio::test]
async fn test_no_competitors_uses_placeholder() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    let (status, body) = send(
        &app,
        post_json(
            "/api/audits",
            json!({"websiteUrl": "example.com", "targetQuestions": "Q1\nQ2\nQ3", "competitorDomains": ""}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let audit = &body["auditData"]["audit"];
    assert_eq!(audit["aiVisibilityComparison"].as_array().unwrap().len(), 1);
    let questions = audit["topQuestionsPerformance"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    assert!(
        questions
            .iter()
            .all(|q| q["topCompetitor"]["domain"] == PLACEHOLDER_COMPETITOR)
    );
}

#[tokio::test]
async fn test_unknown_audit_is_not_found() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    let (status, body) = send(
        &app,
        get("/api/audits/6f1c2a52-4f3e-4c8b-9a65-1f0b4d7e2a10"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);

    let (status, _) = send(&app, get("/api/audits/not-a-real-id")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_audits_newest_first() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    for site in ["first.com", "second.com"] {
        send(
            &app,
            post_json(
                "/api/audits",
                json!({"websiteUrl": site, "targetQuestions": "Q1"}),
            ),
        )
        .await;
    }

    let (status, body) = send(&app, get("/api/audits?limit=10")).await;
    assert_eq!(status, StatusCode::OK);
    let audits = body.as_array().unwrap();
    assert_eq!(audits.len(), 2);
    assert_eq!(audits[0]["websiteUrl"], "second.com");
    assert_eq!(audits[1]["websiteUrl"], "first.com");

    let (_, page) = send(&app, get("/api/audits?limit=1&offset=1")).await;
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["websiteUrl"], "first.com");
}

#[tokio::test]
async fn test_health_reports_store_backend() {
    let app = app_with_store(Arc::new(MemoryAuditStore::new()));

    let (status, body) = send(&app, get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_malformed_bodies_get_json_errors_without_write() {
    let store = Arc::new(MemoryAuditStore::new());
    let app = app_with_store(store.clone());

    let bodies = [
        r#"{"websiteUrl": "example.com", "targetQuestions": ["Q1"]}"#,
        r#"{"websiteUrl": "example.com", "targetQuestions": "Q1", "useSEMrush": "yes"}"#,
        r#"{"websiteUrl": "example.com", "targetQ"#,
    ];
    for raw in bodies {
        let request = Request::builder()
            .method("POST")
            .uri("/api/audits")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(raw))
            .unwrap();

        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {raw}");
        assert!(body["error"].is_string(), "body: {raw}");
        assert_eq!(body["status"], 400);
    }

    let without_content_type = Request::builder()
        .method("POST")
        .uri("/api/audits")
        .body(Body::from(
            json!({"websiteUrl": "example.com", "targetQuestions": "Q1"}).to_string(),
        ))
        .unwrap();
    let (status, body) = send(&app, without_content_type).await;
    assert!(status.is_client_error());
    assert!(body["error"].as_str().unwrap().contains("Content-Type"));

    assert!(store.is_empty().await);
}
