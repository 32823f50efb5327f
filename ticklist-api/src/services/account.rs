/// Account service
///
/// Orchestrates account operations: registration with a duplicate-username
/// pre-check, login with password verification, filtered partial update,
/// and idempotent delete-by-username.
///
/// The pre-check-then-insert sequence in [`AccountService::register`] is
/// intentionally not atomic with respect to concurrent requests; the
/// unique indexes on `username` and `email_address` are the backstop, and
/// a constraint violation maps to the same field-scoped duplicate error
/// as the pre-check.

use crate::{
    error::{ApiError, ApiResult},
    routes::accounts::{LoginAccountRequest, RegisterAccountRequest, UpdateAccountRequest},
};
use sqlx::PgPool;
use ticklist_shared::{
    auth::password,
    models::account::{Account, CreateAccount, UpdateAccount},
    patch,
};
use uuid::Uuid;

/// Account resource service
///
/// Cheap to clone; the pool is reference-counted internally.
#[derive(Clone)]
pub struct AccountService {
    db: PgPool,
}

impl AccountService {
    /// Creates a new account service backed by the given pool
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Registers a new account
    ///
    /// The password is hashed before storage; the plaintext never leaves
    /// this function.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Duplicate`] when the username (or, via the storage
    ///   layer, the email address) is already taken
    pub async fn register(&self, request: RegisterAccountRequest) -> ApiResult<Account> {
        if Account::find_by_username(&self.db, &request.username)
            .await?
            .is_some()
        {
            tracing::error!(
                username = %request.username,
                "Registration rejected: username already exists"
            );
            return Err(ApiError::Duplicate {
                message: format!("account with username {} already exists", request.username),
                field: "username".to_string(),
                field_message: "this username is already in use".to_string(),
            });
        }

        let password_hash = password::hash_password(&request.password)?;

        let account = Account::create(
            &self.db,
            CreateAccount {
                username: request.username,
                email_address: request.email_address,
                phone_number: request.phone_number,
                password_hash,
            },
        )
        .await?;

        tracing::info!(account_id = %account.account_id, "Account registered");
        Ok(account)
    }

    /// Authenticates an account by email address and password
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when no account has the email address
    /// - [`ApiError::Unauthorized`] when the password does not match
    pub async fn login(&self, request: LoginAccountRequest) -> ApiResult<Account> {
        let account = Account::find_by_email(&self.db, &request.email_address)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    email_address = %request.email_address,
                    "Login against unknown email address"
                );
                ApiError::NotFound(format!(
                    "account with email address {} not found",
                    request.email_address
                ))
            })?;

        let valid = password::verify_password(&request.password, &account.password_hash)?;
        if !valid {
            tracing::warn!(account_id = %account.account_id, "Login with invalid password");
            return Err(ApiError::Unauthorized {
                message: "invalid password".to_string(),
                field: "password".to_string(),
                field_message: "password does not match".to_string(),
            });
        }

        Ok(account)
    }

    /// Applies a partial update to an account
    ///
    /// Runs the update filter over the request first: empty and
    /// whitespace-only strings are "no change requested" and are dropped,
    /// so an entirely-empty patch is a valid no-op that returns the
    /// current account. A password that survives the filter is hashed
    /// before persisting.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] when the account does not exist
    /// - [`ApiError::Duplicate`] when the new username or email collides
    pub async fn update(
        &self,
        account_id: Uuid,
        request: UpdateAccountRequest,
    ) -> ApiResult<Account> {
        if Account::find_by_id(&self.db, account_id).await?.is_none() {
            tracing::warn!(account_id = %account_id, "Update against missing account");
            return Err(ApiError::NotFound(format!(
                "account with id {} not found",
                account_id
            )));
        }

        let mut update = UpdateAccount {
            username: patch::text_change(request.username),
            email_address: patch::text_change(request.email_address),
            phone_number: patch::text_change(request.phone_number),
            password_hash: None,
        };
        if let Some(password) = patch::text_change(request.password) {
            update.password_hash = Some(password::hash_password(&password)?);
        }

        let account = Account::update(&self.db, account_id, update)
            .await?
            .ok_or_else(|| {
                // Deleted between the existence check and the write
                ApiError::NotFound(format!("account with id {} not found", account_id))
            })?;

        tracing::info!(account_id = %account.account_id, "Account updated");
        Ok(account)
    }

    /// Deletes an account by username
    ///
    /// Idempotent: deleting a username that does not exist is success,
    /// not an error.
    ///
    /// # Returns
    ///
    /// True when a row was removed, false for the no-op case.
    pub async fn delete_by_username(&self, username: &str) -> ApiResult<bool> {
        let deleted = Account::delete_by_username(&self.db, username).await?;

        if deleted {
            tracing::info!(username = %username, "Account deleted");
        } else {
            tracing::debug!(username = %username, "Delete of absent account treated as success");
        }

        Ok(deleted)
    }
}
