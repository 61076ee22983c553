//! Router-level tests for the auth crate
//!
//! Drives the axum router with an in-memory repository.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use kernel::id::UserId;
use platform::entropy::CharsetEntropyEstimator;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::application::{AuthConfig, TokenService};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{login::Login, user_password::UserPassword};
use crate::error::{AuthError, AuthResult};
use crate::presentation::router::auth_router_generic;

// ============================================================================
// In-memory repository
// ============================================================================

#[derive(Clone, Default)]
struct InMemoryUsers {
    users: Arc<Mutex<Vec<User>>>,
}

impl UserRepository for InMemoryUsers {
    async fn create(&self, login: &Login, password: &UserPassword) -> AuthResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.login == *login) {
            return Err(AuthError::LoginTaken);
        }
        let now = Utc::now();
        let user = User {
            user_id: UserId::new(),
            login: login.clone(),
            password_hash: password.clone(),
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_login(&self, login: &str) -> AuthResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.login.as_str() == login).cloned())
    }
}

// ============================================================================
// Helpers
// ============================================================================

const STRONG_PASSWORD: &str = "Str0ng!Passw0rd";

fn app() -> (Router, Arc<TokenService>) {
    let config = AuthConfig::development();
    let tokens = Arc::new(TokenService::from_config(&config));
    let router = auth_router_generic(
        InMemoryUsers::default(),
        config,
        tokens.clone(),
        Arc::new(CharsetEntropyEstimator),
    );
    (router, tokens)
}

async fn post_json(router: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn credentials(login: &str, password: &str) -> String {
    json!({ "login": login, "password": password }).to_string()
}

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn test_register_created() {
    let (router, _) = app();
    let (status, body) = post_json(&router, "/reg", &credentials("spiderman125", STRONG_PASSWORD)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["login"], "spiderman125");
    assert!(body["id"].is_string());
    assert!(body["created_at"].is_string());
    assert!(body["updated_at"].is_string());
    assert!(body.get("password").is_none());
    assert!(body.get("hashed_password").is_none());
}

#[tokio::test]
async fn test_register_duplicate_login() {
    let (router, _) = app();
    let body = credentials("spiderman125", STRONG_PASSWORD);
    post_json(&router, "/reg", &body).await;
    let (status, body) = post_json(&router, "/reg", &body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "this login's already in use");
}

#[tokio::test]
async fn test_register_invalid_login() {
    let (router, _) = app();

    let (status, body) = post_json(&router, "/reg", &credentials("cool", STRONG_PASSWORD)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid length of login");

    let (status, body) =
        post_json(&router, "/reg", &credentials("_dontstealmyname", STRONG_PASSWORD)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid format of login");
}

#[tokio::test]
async fn test_register_weak_password() {
    let (router, _) = app();
    let (status, body) = post_json(&router, "/reg", &credentials("spiderman125", "password")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .starts_with("insecure password, try")
    );
}

#[tokio::test]
async fn test_register_malformed_body() {
    let (router, _) = app();

    let (status, body) = post_json(&router, "/reg", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request body format");

    let (status, body) = post_json(&router, "/reg", r#"{"login":"spiderman125"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid request body format");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_authenticate_issues_valid_token() {
    let (router, tokens) = app();
    let (_, registered) =
        post_json(&router, "/reg", &credentials("spiderman125", STRONG_PASSWORD)).await;

    let (status, body) =
        post_json(&router, "/auth", &credentials("spiderman125", STRONG_PASSWORD)).await;
    assert_eq!(status, StatusCode::OK);

    let user_id = tokens.validate(body["token"].as_str().unwrap()).unwrap();
    assert_eq!(user_id.to_string(), registered["id"].as_str().unwrap());
}

#[tokio::test]
async fn test_authenticate_wrong_password_and_unknown_login_look_alike() {
    let (router, _) = app();
    post_json(&router, "/reg", &credentials("spiderman125", STRONG_PASSWORD)).await;

    let (status_wrong, body_wrong) =
        post_json(&router, "/auth", &credentials("spiderman125", "Wr0ng!Passw0rd")).await;
    let (status_unknown, body_unknown) =
        post_json(&router, "/auth", &credentials("batman12345", STRONG_PASSWORD)).await;

    assert_eq!(status_wrong, StatusCode::UNAUTHORIZED);
    assert_eq!(status_unknown, StatusCode::UNAUTHORIZED);
    assert_eq!(body_wrong["error"], "invalid login or password");
    assert_eq!(body_wrong, body_unknown);
}

#[tokio::test]
async fn test_login_is_case_sensitive() {
    let (router, _) = app();
    post_json(&router, "/reg", &credentials("Spiderman125", STRONG_PASSWORD)).await;

    let (status, _) =
        post_json(&router, "/auth", &credentials("spiderman125", STRONG_PASSWORD)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
