/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test database setup (pool + migrations)
/// - Router construction
/// - Request helpers returning (status, parsed body)
/// - Per-test cleanup mirroring the service's ownership order
///   (todos first, then the account)
///
/// Tests run against the database named by `DATABASE_URL`, creating it
/// first if the server is up but the database is absent. When no server
/// is reachable at all the tests skip rather than fail, so the unit
/// suite stays runnable on machines without PostgreSQL.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::PgPool;
use ticklist_api::app::{build_router, AppState};
use ticklist_api::config::Config;
use ticklist_shared::db::migrations;
use tower::ServiceExt;
use uuid::Uuid;

/// Test context containing the pool and the ready-to-call router
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context against the configured database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        migrations::ensure_database_exists(&config.database.url).await?;

        let db = PgPool::connect(&config.database.url).await?;

        // Path relative to the ticklist-api crate root
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(Self { db, app })
    }

    /// Removes everything a test created under one account: the account's
    /// todos first, then the account itself
    pub async fn cleanup_account(&self, account_id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM todos WHERE account_id = $1")
            .bind(account_id)
            .execute(&self.db)
            .await?;
        sqlx::query("DELETE FROM accounts WHERE account_id = $1")
            .bind(account_id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

/// Returns a test context, or None (with a note) when no database is
/// reachable
pub async fn try_context() -> Option<TestContext> {
    match TestContext::new().await {
        Ok(ctx) => Some(ctx),
        Err(e) => {
            eprintln!("skipping integration test: {}", e);
            None
        }
    }
}

/// Generates a unique identifier with the given prefix, short enough for
/// the 32-char username bound
pub fn unique(prefix: &str) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, &suffix[..8])
}

/// Sends a request through the router and returns (status, parsed body)
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);

    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Registers a fresh account through the API and returns
/// (account_id, username, email_address)
pub async fn register_account(ctx: &TestContext) -> (Uuid, String, String) {
    let username = unique("user");
    let email_address = format!("{}@example.com", username);

    let (status, body) = send(
        &ctx.app,
        "POST",
        "/api/accounts/register",
        Some(serde_json::json!({
            "username": username,
            "email_address": email_address,
            "phone_number": "555-0100",
            "password": "test",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "registration failed: {}", body);

    let account_id: Uuid = body["data"]["account_id"]
        .as_str()
        .expect("account_id in response")
        .parse()
        .expect("account_id is a uuid");

    (account_id, username, email_address)
}

/// Creates a todo through the API and returns its id
pub async fn create_todo(ctx: &TestContext, account_id: Uuid, title: &str) -> Uuid {
    let (status, body) = send(
        &ctx.app,
        "POST",
        &format!("/api/todos/create/{}", account_id),
        Some(serde_json::json!({
            "title": title,
            "description": "test todo description",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "todo creation failed: {}", body);

    body["data"]["todo_id"]
        .as_str()
        .expect("todo_id in response")
        .parse()
        .expect("todo_id is a uuid")
}
