/// Account model and database operations
///
/// This module provides the Account model and CRUD operations for managing
/// registered users. Accounts own todos via the `todos.account_id` foreign key.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE accounts (
///     account_id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     username VARCHAR(32) NOT NULL UNIQUE,
///     email_address VARCHAR(64) NOT NULL UNIQUE,
///     phone_number VARCHAR(64) NOT NULL,
///     password_hash VARCHAR(255) NOT NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use ticklist_shared::models::account::{Account, CreateAccount};
/// use ticklist_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let account = Account::create(&pool, CreateAccount {
///     username: "alice".to_string(),
///     email_address: "alice@example.com".to_string(),
///     phone_number: "555-0100".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// }).await?;
///
/// // Find by email
/// let found = Account::find_by_email(&pool, "alice@example.com").await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Account model representing a registered user
///
/// Passwords are stored as Argon2id hashes, never in plaintext, and the
/// hash is never serialized back out.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID v4)
    pub account_id: Uuid,

    /// Username, unique across all accounts
    pub username: String,

    /// Email address, unique across all accounts
    pub email_address: String,

    /// Phone number
    pub phone_number: String,

    /// Argon2id password hash
    ///
    /// Never store plaintext passwords!
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Username (unique)
    pub username: String,

    /// Email address (unique)
    pub email_address: String,

    /// Phone number
    pub phone_number: String,

    /// Argon2id password hash (NOT the plaintext password!)
    pub password_hash: String,
}

/// Input for updating an existing account
///
/// All fields are optional. Only `Some` fields are written; deciding which
/// request fields become `Some` is the update filter's job, not this
/// struct's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// New username
    pub username: Option<String>,

    /// New email address
    pub email_address: Option<String>,

    /// New phone number
    pub phone_number: Option<String>,

    /// New password hash
    pub password_hash: Option<String>,
}

impl UpdateAccount {
    /// Returns true when no field would be written
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email_address.is_none()
            && self.phone_number.is_none()
            && self.password_hash.is_none()
    }
}

impl Account {
    /// Creates a new account in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username or email already exists (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateAccount) -> Result<Self, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (username, email_address, phone_number, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING account_id, username, email_address, phone_number, password_hash,
                      created_at, updated_at
            "#,
        )
        .bind(data.username)
        .bind(data.email_address)
        .bind(data.phone_number)
        .bind(data.password_hash)
        .fetch_one(pool)
        .await?;

        Ok(account)
    }

    /// Finds an account by ID
    ///
    /// # Returns
    ///
    /// The account if found, None otherwise
    pub async fn find_by_id(pool: &PgPool, account_id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT account_id, username, email_address, phone_number, password_hash,
                   created_at, updated_at
            FROM accounts
            WHERE account_id = $1
            "#,
        )
        .bind(account_id)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Finds an account by username
    ///
    /// # Returns
    ///
    /// The account if found, None otherwise
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT account_id, username, email_address, phone_number, password_hash,
                   created_at, updated_at
            FROM accounts
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Finds an account by email address
    ///
    /// # Returns
    ///
    /// The account if found, None otherwise
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT account_id, username, email_address, phone_number, password_hash,
                   created_at, updated_at
            FROM accounts
            WHERE email_address = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(account)
    }

    /// Updates an existing account
    ///
    /// Only `Some` fields in `data` are written. The `updated_at` timestamp
    /// is always set to the current time, so an empty update set is a
    /// valid no-op touch.
    ///
    /// # Returns
    ///
    /// The updated account if found, None if the account doesn't exist
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The new username or email collides with another account
    /// - Database connection fails
    pub async fn update(
        pool: &PgPool,
        account_id: Uuid,
        data: UpdateAccount,
    ) -> Result<Option<Self>, sqlx::Error> {
        // Build dynamic update query based on which fields are present
        let mut query = String::from("UPDATE accounts SET updated_at = NOW()");
        let mut bind_count = 1;

        if data.username.is_some() {
            bind_count += 1;
            query.push_str(&format!(", username = ${}", bind_count));
        }
        if data.email_address.is_some() {
            bind_count += 1;
            query.push_str(&format!(", email_address = ${}", bind_count));
        }
        if data.phone_number.is_some() {
            bind_count += 1;
            query.push_str(&format!(", phone_number = ${}", bind_count));
        }
        if data.password_hash.is_some() {
            bind_count += 1;
            query.push_str(&format!(", password_hash = ${}", bind_count));
        }

        query.push_str(
            " WHERE account_id = $1 RETURNING account_id, username, email_address, \
             phone_number, password_hash, created_at, updated_at",
        );

        let mut q = sqlx::query_as::<_, Account>(&query).bind(account_id);

        if let Some(username) = data.username {
            q = q.bind(username);
        }
        if let Some(email_address) = data.email_address {
            q = q.bind(email_address);
        }
        if let Some(phone_number) = data.phone_number {
            q = q.bind(phone_number);
        }
        if let Some(password_hash) = data.password_hash {
            q = q.bind(password_hash);
        }

        let account = q.fetch_optional(pool).await?;

        Ok(account)
    }

    /// Deletes an account by username
    ///
    /// # Returns
    ///
    /// True if an account was deleted, false if no account had that
    /// username. Callers treat the false case as success (idempotent
    /// delete).
    pub async fn delete_by_username(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE username = $1")
            .bind(username)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_account_struct() {
        let create = CreateAccount {
            username: "test".to_string(),
            email_address: "test@gmail.com".to_string(),
            phone_number: "test123".to_string(),
            password_hash: "hash".to_string(),
        };

        assert_eq!(create.username, "test");
        assert_eq!(create.email_address, "test@gmail.com");
    }

    #[test]
    fn test_update_account_default_is_empty() {
        let update = UpdateAccount::default();
        assert!(update.is_empty());
    }

    #[test]
    fn test_update_account_with_field_is_not_empty() {
        let update = UpdateAccount {
            username: Some("new_name".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    // Integration tests for database operations are in ticklist-api/tests/
}
