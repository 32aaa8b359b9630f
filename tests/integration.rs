//! Integration tests for the authentication gateway.
//!
//! Each test spins up a full server on an ephemeral port against its own
//! in-memory SQLite database and drives it with a cookie-aware HTTP client,
//! so the session cookie round-trips exactly as a browser would send it.

use auth_gateway::{config::Config, routes, state::AppState};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tower_sessions_sqlx_store::SqliteStore;

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        session_cookie_name: "cookieMonster".to_string(),
        // Plain HTTP in tests, so the cookie must not be Secure-only.
        session_secure: false,
        session_ttl_minutes: 15,
        session_sweep_secs: 3600,
        // 4 is the lowest cost bcrypt accepts; keeps hashing fast in tests.
        bcrypt_cost: 4,
    }
}

/// Spin up a test server and return its base URL.
async fn spawn_test_server() -> String {
    let config = test_config();

    // Single connection so every query sees the same in-memory database.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await
        .expect("Failed to open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .expect("Failed to run migrations");

    let session_store = SqliteStore::new(db.clone());
    session_store
        .migrate()
        .await
        .expect("Failed to provision session table");

    let state = AppState {
        db,
        config: Arc::new(config.clone()),
    };

    let app = routes::app(state).layer(routes::session_layer(session_store, &config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// HTTP client with a cookie store, like a browser.
fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap()
}

async fn register(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/register", base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .unwrap()
}

async fn login(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/api/login", base_url))
        .json(&json!({ "username": username, "password": password }))
        .send()
        .await
        .unwrap()
}

async fn list_users(client: &reqwest::Client, base_url: &str) -> reqwest::Response {
    client
        .post(format!("{}/api/users", base_url))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn liveness_endpoint_answers() {
    let base_url = spawn_test_server().await;

    let resp = client().get(&base_url).send().await.unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "It's alive!");
}

#[tokio::test]
async fn register_returns_created_user_without_hash() {
    let base_url = spawn_test_server().await;
    let client = client();

    let resp = register(&client, &base_url, "alice", "hunter2").await;
    assert_eq!(resp.status(), 201);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["username"], "alice");
    assert!(body["id"].is_string());

    // The original service leaked the bcrypt hash in the 201 body; that
    // is fixed here deliberately, so neither plaintext nor hash appears.
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_logs_the_user_in() {
    let base_url = spawn_test_server().await;
    let client = client();

    register(&client, &base_url, "alice", "hunter2").await;

    // No explicit login: the register response's cookie passes the guard.
    let resp = list_users(&client, &base_url).await;
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn register_then_login_succeeds_with_welcome() {
    let base_url = spawn_test_server().await;

    register(&client(), &base_url, "alice", "hunter2").await;

    // Fresh client: no cookie carried over from registration.
    let resp = login(&client(), &base_url, "alice", "hunter2").await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("alice"));
}

#[tokio::test]
async fn register_rejects_empty_fields() {
    let base_url = spawn_test_server().await;

    let resp = register(&client(), &base_url, "", "hunter2").await;
    assert_eq!(resp.status(), 400);

    let resp = register(&client(), &base_url, "alice", "").await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn bad_credentials_are_indistinguishable() {
    let base_url = spawn_test_server().await;

    register(&client(), &base_url, "alice", "hunter2").await;

    // Wrong password for an existing user.
    let wrong_password = login(&client(), &base_url, "alice", "wrong").await;
    let wrong_status = wrong_password.status();
    let wrong_body: Value = wrong_password.json().await.unwrap();

    // Nonexistent user.
    let unknown_user = login(&client(), &base_url, "mallory", "wrong").await;
    let unknown_status = unknown_user.status();
    let unknown_body: Value = unknown_user.json().await.unwrap();

    // Identical status and body, so the response never reveals whether
    // the username exists.
    assert_eq!(wrong_status, 401);
    assert_eq!(unknown_status, 401);
    assert_eq!(wrong_body, unknown_body);
    assert_eq!(wrong_body["message"], "Invalid Credentials");
}

#[tokio::test]
async fn guard_blocks_anonymous_requests() {
    let base_url = spawn_test_server().await;

    let resp = list_users(&client(), &base_url).await;
    assert_eq!(resp.status(), 401);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "You shall not pass!");
}

#[tokio::test]
async fn guard_admits_logged_in_requests() {
    let base_url = spawn_test_server().await;

    register(&client(), &base_url, "alice", "hunter2").await;

    let client = client();
    let resp = login(&client, &base_url, "alice", "hunter2").await;
    assert_eq!(resp.status(), 200);

    let resp = list_users(&client, &base_url).await;
    assert_eq!(resp.status(), 200);

    let users: Vec<Value> = resp.json().await.unwrap();
    assert!(users.iter().any(|u| u["username"] == "alice"));
    // Listing is hash-free too.
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}

#[tokio::test]
async fn logout_invalidates_the_session() {
    let base_url = spawn_test_server().await;
    let client = client();

    register(&client, &base_url, "alice", "hunter2").await;
    assert_eq!(list_users(&client, &base_url).await.status(), 200);

    // Logout answers in plain text ("Goodbye" / "Error logging out."),
    // unlike the JSON errors elsewhere — an inconsistency inherited from
    // the original contract and kept on purpose.
    let resp = client
        .get(format!("{}/api/logout", base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "Goodbye");

    // The old session id is gone from the store, so the guard rejects it.
    let resp = list_users(&client, &base_url).await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn duplicate_registration_fails_and_keeps_first_password() {
    let base_url = spawn_test_server().await;

    let resp = register(&client(), &base_url, "alice", "first-password").await;
    assert_eq!(resp.status(), 201);

    // Duplicate usernames surface as 500, preserving the existing contract
    // (a 409 would be the conventional choice).
    let resp = register(&client(), &base_url, "alice", "second-password").await;
    assert_eq!(resp.status(), 500);

    // The stored hash was not overwritten by the failed attempt.
    let resp = login(&client(), &base_url, "alice", "first-password").await;
    assert_eq!(resp.status(), 200);

    let resp = login(&client(), &base_url, "alice", "second-password").await;
    assert_eq!(resp.status(), 401);
}
