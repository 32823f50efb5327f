/// Todo service
///
/// Orchestrates todo operations, all scoped by existence checks: creation
/// and listing verify the owning account first, update and delete verify
/// the todo itself.

use crate::{
    error::{ApiError, ApiResult},
    routes::todos::{CreateTodoRequest, UpdateTodoRequest},
};
use sqlx::PgPool;
use ticklist_shared::{
    models::{
        account::Account,
        todo::{CreateTodo, Priority, Todo, UpdateTodo},
    },
    patch,
};
use uuid::Uuid;

/// Todo resource service
#[derive(Clone)]
pub struct TodoService {
    db: PgPool,
}

impl TodoService {
    /// Creates a new todo service backed by the given pool
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Creates a todo for an existing account
    ///
    /// Status, due date, priority, and tags take their defaults (false,
    /// none, low, empty).
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the account does not exist
    pub async fn create(&self, account_id: Uuid, request: CreateTodoRequest) -> ApiResult<Todo> {
        self.ensure_account_exists(account_id).await?;

        let todo = Todo::create(
            &self.db,
            CreateTodo {
                account_id,
                title: request.title,
                description: request.description,
            },
        )
        .await?;

        tracing::info!(todo_id = %todo.todo_id, account_id = %account_id, "Todo created");
        Ok(todo)
    }

    /// Lists all todos owned by an existing account, in insertion order
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the account does not exist
    pub async fn list_by_account(&self, account_id: Uuid) -> ApiResult<Vec<Todo>> {
        self.ensure_account_exists(account_id).await?;

        let todos = Todo::list_by_account(&self.db, account_id).await?;
        Ok(todos)
    }

    /// Applies a partial update to a todo
    ///
    /// Text fields go through the update filter (empty string = no
    /// change); status, due date, priority, and tags are applied whenever
    /// present. An empty filtered set is a valid no-op returning the
    /// current todo.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the todo does not exist
    pub async fn update(&self, todo_id: Uuid, request: UpdateTodoRequest) -> ApiResult<Todo> {
        if Todo::find_by_id(&self.db, todo_id).await?.is_none() {
            tracing::warn!(todo_id = %todo_id, "Update against missing todo");
            return Err(ApiError::NotFound(format!(
                "todo with id {} not found",
                todo_id
            )));
        }

        let update = UpdateTodo {
            title: patch::text_change(request.title),
            description: patch::text_change(request.description),
            status: request.status,
            due_date: request.due_date,
            // Validated upstream against the enumerated set
            priority: request.priority.as_deref().and_then(Priority::parse),
            tags: request.tags,
        };

        let todo = Todo::update(&self.db, todo_id, update)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("todo with id {} not found", todo_id)))?;

        tracing::info!(todo_id = %todo.todo_id, "Todo updated");
        Ok(todo)
    }

    /// Deletes a todo, returning the deleted row's snapshot
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the todo does not exist
    pub async fn delete(&self, todo_id: Uuid) -> ApiResult<Todo> {
        let todo = Todo::delete(&self.db, todo_id).await?.ok_or_else(|| {
            tracing::warn!(todo_id = %todo_id, "Delete against missing todo");
            ApiError::NotFound(format!("todo with id {} not found", todo_id))
        })?;

        tracing::info!(todo_id = %todo.todo_id, "Todo deleted");
        Ok(todo)
    }

    async fn ensure_account_exists(&self, account_id: Uuid) -> ApiResult<()> {
        if Account::find_by_id(&self.db, account_id).await?.is_none() {
            tracing::warn!(account_id = %account_id, "Todo operation against missing account");
            return Err(ApiError::NotFound(format!(
                "account with id {} not found",
                account_id
            )));
        }
        Ok(())
    }
}
