/// Todo endpoints
///
/// # Endpoints
///
/// - `GET /api/todos/get/:account_id` - List an account's todos
/// - `POST /api/todos/create/:account_id` - Create a todo
/// - `PATCH /api/todos/update/:todo_id` - Partial update
/// - `DELETE /api/todos/delete/:todo_id` - Delete, returning the snapshot

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{Json, Path},
    routes::ApiResponse,
};
use axum::extract::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticklist_shared::models::todo::{Priority, Todo};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Create request; the owning account comes from the path
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTodoRequest {
    /// Title
    #[validate(length(min = 1, max = 32, message = "title must be between 1 and 32 characters"))]
    pub title: String,

    /// Description
    #[validate(length(
        min = 1,
        max = 64,
        message = "description must be between 1 and 64 characters"
    ))]
    pub description: String,
}

/// Partial-update request
///
/// Text fields bound only their max lengths (empty string = no change);
/// `priority` is an enumerated field, so an empty or unknown value is a
/// violation rather than a no-op.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTodoRequest {
    /// New title
    #[validate(length(max = 32, message = "title must be at most 32 characters"))]
    pub title: Option<String>,

    /// New description
    #[validate(length(max = 64, message = "description must be at most 64 characters"))]
    pub description: Option<String>,

    /// New done flag
    pub status: Option<bool>,

    /// New due date (RFC 3339)
    pub due_date: Option<DateTime<Utc>>,

    /// New priority: one of low / medium / high
    #[validate(custom(function = validate_priority))]
    pub priority: Option<String>,

    /// Replacement tag list (order preserved)
    pub tags: Option<Vec<String>>,
}

fn validate_priority(value: &str) -> Result<(), ValidationError> {
    if Priority::parse(value).is_some() {
        Ok(())
    } else {
        let mut error = ValidationError::new("priority");
        error.message = Some("priority must be one of low, medium, high".into());
        Err(error)
    }
}

/// Todo payload returned to clients
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    /// Todo ID
    pub todo_id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// Title
    pub title: String,

    /// Description
    pub description: String,

    /// Done flag
    pub status: bool,

    /// Due date, if set
    pub due_date: Option<DateTime<Utc>>,

    /// Priority
    pub priority: Priority,

    /// Ordered tags
    pub tags: Vec<String>,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last updated
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            todo_id: todo.todo_id,
            account_id: todo.account_id,
            title: todo.title,
            description: todo.description,
            status: todo.status,
            due_date: todo.due_date,
            priority: todo.priority,
            tags: todo.tags,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

/// List an account's todos in insertion order
///
/// # Endpoint
///
/// ```text
/// GET /api/todos/get/{account_id}
/// ```
///
/// # Errors
///
/// - `404`: no account with that id
pub async fn list(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Vec<TodoResponse>>>> {
    let todos = state.todos.list_by_account(account_id).await?;

    Ok(Json(ApiResponse::new(
        todos.into_iter().map(TodoResponse::from).collect(),
    )))
}

/// Create a todo for an account
///
/// # Endpoint
///
/// ```text
/// POST /api/todos/create/{account_id}
/// Content-Type: application/json
///
/// {
///   "title": "water the plants",
///   "description": "the ones on the balcony"
/// }
/// ```
///
/// # Errors
///
/// - `400`: validation failed
/// - `404`: no account with that id
pub async fn create(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<CreateTodoRequest>,
) -> ApiResult<Json<ApiResponse<TodoResponse>>> {
    request.validate()?;

    let todo = state.todos.create(account_id, request).await?;

    Ok(Json(ApiResponse::new(TodoResponse::from(todo))))
}

/// Apply a partial update to a todo
///
/// # Endpoint
///
/// ```text
/// PATCH /api/todos/update/{todo_id}
/// ```
///
/// Any subset of title / description / status / due_date / priority /
/// tags.
///
/// # Errors
///
/// - `400`: validation failed
/// - `404`: no todo with that id
pub async fn update(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
    Json(request): Json<UpdateTodoRequest>,
) -> ApiResult<Json<ApiResponse<TodoResponse>>> {
    request.validate()?;

    let todo = state.todos.update(todo_id, request).await?;

    Ok(Json(ApiResponse::new(TodoResponse::from(todo))))
}

/// Delete a todo, returning the deleted record's snapshot
///
/// # Endpoint
///
/// ```text
/// DELETE /api/todos/delete/{todo_id}
/// ```
///
/// # Errors
///
/// - `404`: no todo with that id
pub async fn delete(
    State(state): State<AppState>,
    Path(todo_id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<TodoResponse>>> {
    let todo = state.todos.delete(todo_id).await?;

    Ok(Json(ApiResponse::new(TodoResponse::from(todo))))
}
