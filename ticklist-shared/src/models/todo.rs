/// Todo model and database operations
///
/// Each todo belongs to exactly one account, referenced by
/// `todos.account_id`. The foreign key carries no ON DELETE action, so
/// deleting an account does not cascade to its todos.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE todo_priority AS ENUM ('low', 'medium', 'high');
///
/// CREATE TABLE todos (
///     todo_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     account_id UUID NOT NULL REFERENCES accounts(account_id),
///     title VARCHAR(32) NOT NULL,
///     description VARCHAR(64) NOT NULL,
///     status BOOLEAN NOT NULL DEFAULT FALSE,
///     due_date TIMESTAMPTZ,
///     priority todo_priority NOT NULL DEFAULT 'low',
///     tags TEXT[] NOT NULL DEFAULT '{}',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Todo priority level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "todo_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Default priority for new todos
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// Converts the priority to its wire/database string
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parses a wire string into a priority
    ///
    /// Returns None for anything outside the enumerated set, including
    /// the empty string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

/// Todo model representing one item on an account's list
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Todo {
    /// Unique todo ID (UUID v4)
    pub todo_id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// Short title (1-32 chars)
    pub title: String,

    /// Longer description (1-64 chars)
    pub description: String,

    /// Done flag, false for new todos
    pub status: bool,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// Priority, defaults to low
    pub priority: Priority,

    /// Ordered tags, empty for new todos
    pub tags: Vec<String>,

    /// When the todo was created
    pub created_at: DateTime<Utc>,

    /// When the todo was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new todo
///
/// Status, due date, priority, and tags all take their column defaults on
/// creation; only title and description come from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    /// Owning account (must exist)
    pub account_id: Uuid,

    /// Title
    pub title: String,

    /// Description
    pub description: String,
}

/// Input for updating an existing todo
///
/// All fields are optional. Only `Some` fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New done flag
    pub status: Option<bool>,

    /// New due date
    pub due_date: Option<DateTime<Utc>>,

    /// New priority
    pub priority: Option<Priority>,

    /// Replacement tag list (order preserved)
    pub tags: Option<Vec<String>>,
}

impl Todo {
    /// Creates a new todo for an account
    ///
    /// # Errors
    ///
    /// Returns an error if the account does not exist (foreign key
    /// violation) or the database connection fails. Callers check account
    /// existence first so the FK error path is only hit by races.
    pub async fn create(pool: &PgPool, data: CreateTodo) -> Result<Self, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (account_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING todo_id, account_id, title, description, status, due_date,
                      priority, tags, created_at, updated_at
            "#,
        )
        .bind(data.account_id)
        .bind(data.title)
        .bind(data.description)
        .fetch_one(pool)
        .await?;

        Ok(todo)
    }

    /// Finds a todo by ID
    pub async fn find_by_id(pool: &PgPool, todo_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            SELECT todo_id, account_id, title, description, status, due_date,
                   priority, tags, created_at, updated_at
            FROM todos
            WHERE todo_id = $1
            "#,
        )
        .bind(todo_id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }

    /// Lists all todos owned by an account, in insertion order
    pub async fn list_by_account(
        pool: &PgPool,
        account_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT todo_id, account_id, title, description, status, due_date,
                   priority, tags, created_at, updated_at
            FROM todos
            WHERE account_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(account_id)
        .fetch_all(pool)
        .await?;

        Ok(todos)
    }

    /// Updates an existing todo
    ///
    /// Only `Some` fields in `data` are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    ///
    /// The updated todo if found, None if the todo doesn't exist
    pub async fn update(
        pool: &PgPool,
        todo_id: Uuid,
        data: UpdateTodo,
    ) -> Result<Option<Self>, sqlx::Error> {
        let mut query = String::from("UPDATE todos SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.title.is_some() {
            bind_count += 1;
            query.push_str(&format!(", title = ${}", bind_count));
        }
        if data.description.is_some() {
            bind_count += 1;
            query.push_str(&format!(", description = ${}", bind_count));
        }
        if data.status.is_some() {
            bind_count += 1;
            query.push_str(&format!(", status = ${}", bind_count));
        }
        if data.due_date.is_some() {
            bind_count += 1;
            query.push_str(&format!(", due_date = ${}", bind_count));
        }
        if data.priority.is_some() {
            bind_count += 1;
            query.push_str(&format!(", priority = ${}", bind_count));
        }
        if data.tags.is_some() {
            bind_count += 1;
            query.push_str(&format!(", tags = ${}", bind_count));
        }

        query.push_str(
            " WHERE todo_id = $1 RETURNING todo_id, account_id, title, description, \
             status, due_date, priority, tags, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Todo>(&query).bind(todo_id);

        if let Some(title) = data.title {
            q = q.bind(title);
        }
        if let Some(description) = data.description {
            q = q.bind(description);
        }
        if let Some(status) = data.status {
            q = q.bind(status);
        }
        if let Some(due_date) = data.due_date {
            q = q.bind(due_date);
        }
        if let Some(priority) = data.priority {
            q = q.bind(priority);
        }
        if let Some(tags) = data.tags {
            q = q.bind(tags);
        }

        let todo = q.fetch_optional(pool).await?;

        Ok(todo)
    }

    /// Deletes a todo by ID, returning the deleted row's snapshot
    ///
    /// # Returns
    ///
    /// The deleted todo if it existed, None otherwise
    pub async fn delete(pool: &PgPool, todo_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            DELETE FROM todos
            WHERE todo_id = $1
            RETURNING todo_id, account_id, title, description, status, due_date,
                      priority, tags, created_at, updated_at
            "#,
        )
        .bind(todo_id)
        .fetch_optional(pool)
        .await?;

        Ok(todo)
    }
}
