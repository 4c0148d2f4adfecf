use std::time::{SystemTime, UNIX_EPOCH};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nyumbapaeasy_api::api::{router, AppState, CreatePropertyRequest};
use nyumbapaeasy_api::auth::{EXPECTED_AUDIENCE, PROPERTY_LISTING_ROLES};
use nyumbapaeasy_api::config::Config;

const JWT_SECRET: &str = "test-jwt-secret";
const SERVICE_KEY: &str = "test-service-key";
const USER_ID: &str = "4f1f1f38-2c43-4d6e-9d6f-0a4f0c6e1a2b";

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    email: String,
    aud: String,
    exp: u64,
}

fn mint_token(secret: &str, expires_in: i64) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_secs() as i64;

    let claims = TestClaims {
        sub: USER_ID.to_string(),
        email: "thoko@example.com".to_string(),
        aud: EXPECTED_AUDIENCE.to_string(),
        exp: (now + expires_in) as u64,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to encode test token")
}

fn test_app(supabase_url: &str) -> Router {
    let config = Config::new(supabase_url, SERVICE_KEY, JWT_SECRET);
    router(AppState::new(&config))
}

fn create_request(token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/create/");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).expect("failed to build request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}

async fn mount_profile(mock_server: &MockServer, profile: Value) {
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", format!("eq.{}", USER_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn missing_token_is_unauthorized() {
    let app = test_app("http://localhost");

    let response = app.oneshot(create_request(None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn invalid_token_is_unauthorized() {
    let app = test_app("http://localhost");
    let token = mint_token("some-other-secret", 3600);

    let response = app.oneshot(create_request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "invalid token");
}

#[tokio::test]
async fn expired_token_is_unauthorized_with_expiry_message() {
    let app = test_app("http://localhost");
    let token = mint_token(JWT_SECRET, -3600);

    let response = app.oneshot(create_request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["message"], "token has expired");
}

#[tokio::test]
async fn every_allowed_role_can_create() {
    for role in PROPERTY_LISTING_ROLES {
        let mock_server = MockServer::start().await;
        mount_profile(&mock_server, json!([{ "id": USER_ID, "role": role }])).await;

        let app = test_app(&mock_server.uri());
        let token = mint_token(JWT_SECRET, 3600);

        let response = app.oneshot(create_request(Some(&token))).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED, "role {}", role);
        let body = response_json(response).await;
        assert_eq!(
            body["message"],
            "Access granted. You have the correct account type to add properties."
        );
        assert_eq!(body["user_id"], USER_ID);
        assert_eq!(body["role"], role);
    }
}

#[tokio::test]
async fn plain_user_role_is_forbidden() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, json!([{ "id": USER_ID, "role": "user" }])).await;

    let app = test_app(&mock_server.uri());
    let token = mint_token(JWT_SECRET, 3600);

    let response = app.oneshot(create_request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = response_json(response).await;
    assert_eq!(body["error"], "forbidden");
}

#[tokio::test]
async fn missing_profile_row_is_forbidden_not_unauthorized() {
    let mock_server = MockServer::start().await;
    mount_profile(&mock_server, json!([])).await;

    let app = test_app(&mock_server.uri());
    let token = mint_token(JWT_SECRET, 3600);

    let response = app.oneshot(create_request(Some(&token))).await.unwrap();

    // Authentication succeeded; the empty profile simply carries no role
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn profile_service_outage_is_forbidden_not_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = test_app(&mock_server.uri());
    let token = mint_token(JWT_SECRET, 3600);

    let response = app.oneshot(create_request(Some(&token))).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test]
fn create_property_request_validates_shape() {
    let request: CreatePropertyRequest = serde_json::from_value(json!({
        "title": "3 bedroom house in Area 47",
        "description": "Self-contained with a walled yard",
        "price": 85000000.50,
        "location": "Lilongwe"
    }))
    .expect("payload should deserialize");

    assert!(request.validate().is_ok());
    assert_eq!(request.price, "85000000.50".parse().unwrap());
}

#[test]
fn create_property_request_rejects_bad_shapes() {
    let empty_title: CreatePropertyRequest = serde_json::from_value(json!({
        "title": "  ",
        "price": 100,
        "location": "Zomba"
    }))
    .unwrap();
    assert!(empty_title.validate().is_err());

    let long_location: CreatePropertyRequest = serde_json::from_value(json!({
        "title": "Lakeshore plot",
        "price": 100,
        "location": "x".repeat(300)
    }))
    .unwrap();
    assert!(long_location.validate().is_err());
}
