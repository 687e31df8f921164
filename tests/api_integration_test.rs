use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use httpmock::prelude::*;
use number_classifier::domain::ports::FactSource;
use number_classifier::{create_router, AppState, ServerConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

struct StaticFacts(&'static str);

#[async_trait]
impl FactSource for StaticFacts {
    async fn fun_fact(&self, _number: i64) -> String {
        self.0.to_string()
    }
}

fn app_with_static_fact(fact: &'static str) -> Router {
    create_router(AppState::new(Arc::new(StaticFacts(fact))))
}

fn app_with_fact_server(base_url: String) -> Router {
    let config = ServerConfig {
        fact_api_base: base_url,
        fact_timeout_secs: 1,
        ..ServerConfig::default()
    };
    create_router(AppState::from_config(&config).unwrap())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_root_reports_running() {
    let (status, body) = get_json(app_with_static_fact("unused"), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Number Classification API is running"}));
}

#[tokio::test]
async fn test_classify_armstrong_number() {
    let (status, body) = get_json(
        app_with_static_fact("371 is an Armstrong number."),
        "/api/classify-number?number=371",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "number": 371,
            "is_prime": false,
            "is_perfect": false,
            "properties": ["odd", "armstrong"],
            "digit_sum": 11,
            "fun_fact": "371 is an Armstrong number."
        })
    );
}

#[tokio::test]
async fn test_classify_perfect_and_prime_numbers() {
    let app = app_with_static_fact("fact");

    let (_, body) = get_json(app.clone(), "/api/classify-number?number=28").await;
    assert_eq!(body["is_perfect"], json!(true));
    assert_eq!(body["properties"], json!(["even", "perfect"]));
    assert_eq!(body["digit_sum"], json!(10));

    let (_, body) = get_json(app, "/api/classify-number?number=17").await;
    assert_eq!(body["is_prime"], json!(true));
    assert_eq!(body["properties"], json!(["odd", "prime"]));
}

#[tokio::test]
async fn test_classify_negative_number() {
    let (status, body) =
        get_json(app_with_static_fact("fact"), "/api/classify-number?number=-153").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], json!(-153));
    assert_eq!(body["properties"], json!(["odd"]));
    assert_eq!(body["digit_sum"], json!(9));
}

#[tokio::test]
async fn test_non_integer_is_rejected_with_raw_echo() {
    let app = app_with_static_fact("fact");

    let (status, body) = get_json(app.clone(), "/api/classify-number?number=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "abc", "error": true}));

    let (status, body) = get_json(app.clone(), "/api/classify-number?number=3.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "3.5", "error": true}));

    let (status, body) = get_json(app, "/api/classify-number?number=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "", "error": true}));
}

#[tokio::test]
async fn test_missing_number_echoes_unknown() {
    let app = app_with_static_fact("fact");

    let (status, body) = get_json(app.clone(), "/api/classify-number").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "unknown", "error": true}));

    let (status, body) = get_json(app, "/api/classify-number?other=5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "unknown", "error": true}));
}

#[tokio::test]
async fn test_repeated_number_uses_last_value() {
    let app = app_with_static_fact("fact");

    let (status, body) = get_json(app.clone(), "/api/classify-number?number=1&number=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["number"], json!(2));
    assert_eq!(body["properties"], json!(["even", "prime", "armstrong"]));

    let (status, body) = get_json(app, "/api/classify-number?number=12&number=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"number": "abc", "error": true}));
}

#[tokio::test]
async fn test_repeated_requests_are_idempotent() {
    let app = app_with_static_fact("fact");

    let (_, first) = get_json(app.clone(), "/api/classify-number?number=9474").await;
    let (_, second) = get_json(app, "/api/classify-number?number=9474").await;

    assert_eq!(first, second);
    assert_eq!(first["properties"], json!(["even", "armstrong"]));
}

#[tokio::test]
async fn test_fun_fact_from_upstream() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET).path("/6");
        then.status(200)
            .header("Content-Type", "text/plain")
            .body("6 is the smallest perfect number.");
    });

    let (status, body) = get_json(
        app_with_fact_server(server.base_url()),
        "/api/classify-number?number=6",
    )
    .await;

    fact_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], json!("6 is the smallest perfect number."));
    assert_eq!(body["properties"], json!(["even", "perfect", "armstrong"]));
}

#[tokio::test]
async fn test_upstream_failure_still_returns_ok() {
    let server = MockServer::start();
    let fact_mock = server.mock(|when, then| {
        when.method(GET).path("/371");
        then.status(500);
    });

    let (status, body) = get_json(
        app_with_fact_server(server.base_url()),
        "/api/classify-number?number=371",
    )
    .await;

    fact_mock.assert();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], json!("No fun fact available"));
    assert_eq!(body["digit_sum"], json!(11));
}

#[tokio::test]
async fn test_unreachable_upstream_still_returns_ok() {
    let (status, body) = get_json(
        app_with_fact_server("http://127.0.0.1:9".to_string()),
        "/api/classify-number?number=2",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fun_fact"], json!("No fun fact available"));
}

#[tokio::test]
async fn test_cors_allows_any_origin_with_credentials() {
    let response = app_with_static_fact("fact")
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/classify-number?number=1")
                .header(header::ORIGIN, "https://example.org")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-custom-header")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://example.org"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
        "GET"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
        "x-custom-header"
    );
}
