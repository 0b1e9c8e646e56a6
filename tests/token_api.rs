//! HTTP-level tests for token issuance and readiness.

use std::io::Write;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use token_issuer::api::{create_router, AppState};
use token_issuer::domain::{ApiKeyRecord, KeyRegistry, TokenType};
use token_issuer::infrastructure::auth::{JwtTokenSigner, SaltedHasher, SecretHasher};
use token_issuer::AppConfig;

const APIKEY: &str = "front-login-key";
const SECRET: &str = "front-login-secret";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn registry() -> KeyRegistry {
    let hash = SaltedHasher::new().hash(SECRET).expect("hashing should succeed");
    KeyRegistry::new(vec![
        ApiKeyRecord::new(1, "Front Login Key", APIKEY, hash)
            .with_token_type(TokenType::new(1, "Login")),
    ])
}

fn app(registry: KeyRegistry) -> Router {
    create_router(AppState::from_registry(registry))
}

async fn post_token(app: Router, body: Value) -> (StatusCode, axum::http::HeaderMap, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/token")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, headers, body)
}

fn token_request(apikey: &str, secret: &str) -> Value {
    json!({
        "apikey": apikey,
        "secret": secret,
        "payload": { "userId": 123, "role": "admin" }
    })
}

// ---------------------------------------------------------------------------
// Issuance
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_valid_credentials_issue_verifiable_token() {
    let (status, headers, body) = post_token(app(registry()), token_request(APIKEY, SECRET)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers.get(header::CACHE_CONTROL).unwrap(), "no-store");
    assert!(headers.get("x-request-id").is_some());

    let token = body["token"].as_str().expect("token in response");
    let claims = JwtTokenSigner::new().verify(token, SECRET).unwrap();

    assert_eq!(Value::Object(claims.payload), json!({ "userId": 123, "role": "admin" }));
    assert_eq!(claims.exp - claims.iat, 1800);
    assert!(chrono::DateTime::parse_from_rfc3339(body["expires_at"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_bcrypt_hashed_key_issues_token() {
    let hash = bcrypt::hash(SECRET, 4).unwrap();
    let registry = KeyRegistry::new(vec![ApiKeyRecord::new(1, "Front Login Key", APIKEY, hash)]);
    let app = app(registry);

    let (status, _, body) = post_token(app.clone(), token_request(APIKEY, SECRET)).await;
    assert_eq!(status, StatusCode::OK);

    let claims = JwtTokenSigner::new()
        .verify(body["token"].as_str().unwrap(), SECRET)
        .unwrap();
    assert_eq!(Value::Object(claims.payload), json!({ "userId": 123, "role": "admin" }));
    assert_eq!(claims.exp - claims.iat, 1800);

    let (status, _, _) = post_token(app, token_request(APIKEY, "wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_caller_issued_at_sets_expiration() {
    let iat = chrono::Utc::now().timestamp() - 60;
    let body = json!({ "apikey": APIKEY, "secret": SECRET, "payload": { "userId": 123, "iat": iat } });

    let (status, _, body) = post_token(app(registry()), body).await;
    assert_eq!(status, StatusCode::OK);

    let claims = JwtTokenSigner::new()
        .verify(body["token"].as_str().unwrap(), SECRET)
        .unwrap();
    assert_eq!(claims.iat, iat);
    assert_eq!(claims.exp, iat + 1800);
}

#[tokio::test]
async fn test_wrong_secret_is_unauthorized() {
    let (status, _, body) = post_token(app(registry()), token_request(APIKEY, "wrong")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "authentication_error");
    assert_eq!(body["error"]["message"], "API key or secret is invalid");
}

#[tokio::test]
async fn test_unknown_key_is_unauthorized() {
    let (status, _, body) = post_token(app(registry()), token_request("nope", "anything")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["type"], "authentication_error");
}

#[tokio::test]
async fn test_missing_hash_is_unauthorized() {
    let registry = KeyRegistry::new(vec![
        ApiKeyRecord::new(1, "Broken", APIKEY, "").without_secret_hash(),
    ]);

    let (status, _, _) = post_token(app(registry), token_request(APIKEY, SECRET)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_fields_are_bad_request() {
    let (status, _, body) = post_token(app(registry()), token_request("", "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["type"], "invalid_request_error");
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_non_object_payload_is_rejected() {
    let body = json!({ "apikey": APIKEY, "secret": SECRET, "payload": "not-an-object" });

    let (status, _, body) = post_token(app(registry()), body).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "json_parse_error");
}

#[tokio::test]
async fn test_reserved_claim_in_payload_is_bad_request() {
    let body = json!({ "apikey": APIKEY, "secret": SECRET, "payload": { "exp": 1 } });

    let (status, _, body) = post_token(app(registry()), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"].as_str().unwrap().contains("exp"));
}

// ---------------------------------------------------------------------------
// Registry load failure
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_unreadable_registry_refuses_and_reports_degraded() {
    let mut config = AppConfig::default();
    config.registry.path = "/nonexistent/apikeys.json".to_string();

    let registry = token_issuer::load_registry(&config).await;
    let app = app(registry);

    let (status, _, _) = post_token(app.clone(), token_request(APIKEY, SECRET)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _, body) = get(app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"][0]["name"], "key_registry");
}

#[tokio::test]
async fn test_registry_loaded_from_file() {
    let hash = SaltedHasher::new().hash(SECRET).unwrap();
    let document = json!([{
        "id": 1,
        "name": "Front Login Key",
        "tokenType": { "id": 1, "name": "Login" },
        "apikey": APIKEY,
        "secretHash": hash
    }]);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(document.to_string().as_bytes()).unwrap();

    let mut config = AppConfig::default();
    config.registry.path = file.path().display().to_string();

    let app = create_router(token_issuer::create_app_state(&config).await);

    let (status, _, body) = get(app.clone(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"][0]["keys"], 1);

    let (status, _, _) = post_token(app, token_request(APIKEY, SECRET)).await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Probes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_health_and_live() {
    let (status, _, body) = get(app(registry()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, _, _) = get(app(registry()), "/live").await;
    assert_eq!(status, StatusCode::OK);
}
