/// Database models for ticklist
///
/// This module contains all database models and their CRUD operations.
///
/// # Models
///
/// - `account`: registered users, looked up by id, username, or email
/// - `todo`: todo items, each owned by one account
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
/// let new_account = CreateAccount {
///     username: "alice".to_string(),
///     email_address: "alice@example.com".to_string(),
///     phone_number: "555-0100".to_string(),
///     password_hash: "$argon2id$...".to_string(),
/// };
///
/// let account = Account::create(&pool, new_account).await?;
/// # Ok(())
/// # }
/// ```

pub mod account;
pub mod todo;
