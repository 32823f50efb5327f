/// Integration tests for the todo endpoints
///
/// These run against the database named by DATABASE_URL (see
/// tests/common/mod.rs). Each test registers its own account, scopes its
/// todos to it, and cleans both up afterwards.

mod common;

use axum::http::StatusCode;
use common::{create_todo, register_account, send, try_context};
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_create_against_missing_account_returns_404() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let missing = Uuid::new_v4();

    let (status, body) = send(
        &ctx.app,
        "POST",
        &format!("/api/todos/create/{}", missing),
        Some(json!({
            "title": "test todo",
            "description": "test todo description",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains(&missing.to_string()));
}

#[tokio::test]
async fn test_create_with_empty_fields_reports_both_violations() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;

    let (status, body) = send(
        &ctx.app,
        "POST",
        &format!("/api/todos/create/{}", account_id),
        Some(json!({
            "title": "",
            "description": "",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors list");
    assert_eq!(errors.len(), 2);
    let fields: Vec<&str> = errors
        .iter()
        .map(|e| e["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"title"));
    assert!(fields.contains(&"description"));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_create_applies_system_defaults() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;

    let (status, body) = send(
        &ctx.app,
        "POST",
        &format!("/api/todos/create/{}", account_id),
        Some(json!({
            "title": "test todo",
            "description": "test todo description",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["title"], json!("test todo"));
    assert_eq!(body["data"]["status"], json!(false));
    assert_eq!(body["data"]["priority"], json!("low"));
    assert_eq!(body["data"]["due_date"], json!(null));
    assert_eq!(body["data"]["tags"], json!([]));
    assert_eq!(body["data"]["account_id"], json!(account_id.to_string()));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_list_returns_todos_in_insertion_order() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    create_todo(&ctx, account_id, "first").await;
    create_todo(&ctx, account_id, "second").await;

    let (status, body) = send(
        &ctx.app,
        "GET",
        &format!("/api/todos/get/{}", account_id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    let todos = body["data"].as_array().expect("todo list");
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0]["title"], json!("first"));
    assert_eq!(todos[1]["title"], json!("second"));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_list_against_missing_account_returns_404() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let missing = Uuid::new_v4();

    let (status, _) = send(&ctx.app, "GET", &format!("/api/todos/get/{}", missing), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_tags_round_trips_in_order() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "tagged").await;

    let (status, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({ "tags": ["a", "b"] })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["tags"], json!(["a", "b"]));

    // Read back through the list endpoint
    let (_, body) = send(
        &ctx.app,
        "GET",
        &format!("/api/todos/get/{}", account_id),
        None,
    )
    .await;
    assert_eq!(body["data"][0]["tags"], json!(["a", "b"]));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_update_applies_false_status_as_a_real_change() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "flip").await;

    let (_, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({ "status": true })),
    )
    .await;
    assert_eq!(body["data"]["status"], json!(true));

    // false is a real change for a non-string field, not a no-op
    let (status, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({ "status": false })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!(false));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_update_with_empty_title_is_a_noop() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "keep me").await;

    let (status, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({ "title": "", "description": "changed" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["title"], json!("keep me"));
    assert_eq!(body["data"]["description"], json!("changed"));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_update_priority_and_due_date() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "schedule").await;

    let (status, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({
            "priority": "high",
            "due_date": "2026-09-01T12:00:00Z",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["priority"], json!("high"));
    assert!(body["data"]["due_date"]
        .as_str()
        .unwrap()
        .starts_with("2026-09-01"));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_update_with_unknown_priority_returns_400() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "prioritized").await;

    let (status, body) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", todo_id),
        Some(json!({ "priority": "urgent" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let errors = body["errors"].as_array().expect("errors list");
    assert_eq!(errors[0]["field"], json!("priority"));

    ctx.cleanup_account(account_id).await.unwrap();
}

#[tokio::test]
async fn test_update_of_missing_todo_returns_404() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let missing = Uuid::new_v4();

    let (status, _) = send(
        &ctx.app,
        "PATCH",
        &format!("/api/todos/update/{}", missing),
        Some(json!({ "title": "whatever" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice_returns_snapshot_then_404() {
    let Some(ctx) = try_context().await else {
        return;
    };

    let (account_id, _, _) = register_account(&ctx).await;
    let todo_id = create_todo(&ctx, account_id, "doomed").await;

    let (status, body) = send(
        &ctx.app,
        "DELETE",
        &format!("/api/todos/delete/{}", todo_id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "body: {}", body);
    assert_eq!(body["data"]["todo_id"], json!(todo_id.to_string()));
    assert_eq!(body["data"]["title"], json!("doomed"));

    let (status, _) = send(
        &ctx.app,
        "DELETE",
        &format!("/api/todos/delete/{}", todo_id),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);

    ctx.cleanup_account(account_id).await.unwrap();
}
