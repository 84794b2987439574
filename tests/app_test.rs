use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tower::ServiceExt;

use greeting_service::{Config, Variant, app};

fn app_with(variant: Variant) -> Router {
    app(&Config {
        variant,
        ..Config::default()
    })
}

async fn send(sut: Router, method: Method, uri: &str) -> (StatusCode, Option<String>, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = sut.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn application_starts_with_default_config() {
    let config = Config::from_lookup(|_| None).unwrap();

    let (status, _, _) = send(app(&config), Method::GET, "/actuator/health").await;

    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case::classic_greeting(Variant::Classic, "/", "Hi world from yasin")]
#[case::classic_version(Variant::Classic, "/version", "Sample Java App - Version 1.0.0")]
#[case::classic_health(Variant::Classic, "/health-simple", "OK - Application is running!")]
#[case::eks_greeting(Variant::Eks, "/", "Hello from EKS!")]
#[case::eks_version(Variant::Eks, "/version", "Sample Java App v1.1 - CI/CD Pipeline Ready!")]
#[case::eks_health(
    Variant::Eks,
    "/health-simple",
    "Application is running successfully on Kubernetes!"
)]
#[tokio::test]
async fn text_routes_return_fixed_bodies(
    #[case] variant: Variant,
    #[case] uri: &str,
    #[case] expected: &str,
) {
    let (status, content_type, body) = send(app_with(variant), Method::GET, uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, expected);
}

#[tokio::test]
async fn query_string_is_ignored() {
    let (status, _, body) = send(app_with(Variant::Classic), Method::GET, "/?name=someone").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hi world from yasin");
}

#[tokio::test]
async fn actuator_health_reports_up() {
    let (status, content_type, body) =
        send(app_with(Variant::Eks), Method::GET, "/actuator/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "UP" }));
}

#[tokio::test]
async fn actuator_info_reports_app_and_variant() {
    let (status, _, body) = send(app_with(Variant::Eks), Method::GET, "/actuator/info").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["app"]["name"], "greeting_service");
    assert_eq!(json["app"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["app"]["variant"], "eks");
    assert!(json["started_at"].is_string());
}

#[tokio::test]
async fn unmapped_path_is_not_found() {
    let (status, _, body) = send(app_with(Variant::Classic), Method::GET, "/missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "");
}

#[tokio::test]
async fn wrong_method_is_not_allowed() {
    let (status, _, _) = send(app_with(Variant::Classic), Method::POST, "/").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
