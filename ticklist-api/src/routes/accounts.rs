/// Account endpoints
///
/// # Endpoints
///
/// - `POST /api/accounts/register` - Register a new account
/// - `POST /api/accounts/login` - Verify credentials
/// - `PATCH /api/accounts/update/:account_id` - Partial update
/// - `DELETE /api/accounts/delete/:username` - Idempotent delete
///
/// Each operation validates its own independently-enumerated field rules
/// before any store access. Update requests bound only the maximum
/// lengths: an empty or whitespace-only string is a well-formed "no
/// change" request handled by the update filter, not a violation.

use crate::{
    app::AppState,
    error::ApiResult,
    extract::{Json, Path},
    routes::ApiResponse,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use ticklist_shared::models::account::Account;
use uuid::Uuid;
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterAccountRequest {
    /// Desired username (unique)
    #[validate(length(min = 1, max = 32, message = "username must be between 1 and 32 characters"))]
    pub username: String,

    /// Email address (unique)
    #[validate(length(
        min = 1,
        max = 64,
        message = "email address must be between 1 and 64 characters"
    ))]
    pub email_address: String,

    /// Phone number
    #[validate(length(
        min = 1,
        max = 64,
        message = "phone number must be between 1 and 64 characters"
    ))]
    pub phone_number: String,

    /// Password (stored only as a hash)
    #[validate(length(min = 1, max = 64, message = "password must be between 1 and 64 characters"))]
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginAccountRequest {
    /// Email address
    #[validate(length(
        min = 1,
        max = 64,
        message = "email address must be between 1 and 64 characters"
    ))]
    pub email_address: String,

    /// Password
    #[validate(length(min = 1, max = 64, message = "password must be between 1 and 64 characters"))]
    pub password: String,
}

/// Partial-update request
///
/// Only max bounds here; emptiness is the update filter's concern.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    /// New username
    #[validate(length(max = 32, message = "username must be at most 32 characters"))]
    pub username: Option<String>,

    /// New email address
    #[validate(length(max = 64, message = "email address must be at most 64 characters"))]
    pub email_address: Option<String>,

    /// New phone number
    #[validate(length(max = 64, message = "phone number must be at most 64 characters"))]
    pub phone_number: Option<String>,

    /// New password (re-hashed before storage)
    #[validate(length(max = 64, message = "password must be at most 64 characters"))]
    pub password: Option<String>,
}

/// Account payload returned to clients - never includes the password
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account ID
    pub account_id: Uuid,

    /// Username
    pub username: String,

    /// Email address
    pub email_address: String,

    /// Phone number
    pub phone_number: String,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            account_id: account.account_id,
            username: account.username,
            email_address: account.email_address,
            phone_number: account.phone_number,
        }
    }
}

/// Delete confirmation payload
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    /// The username the delete targeted
    pub username: String,

    /// Whether a row was actually removed (false for the idempotent no-op)
    pub deleted: bool,
}

/// Register a new account
///
/// # Endpoint
///
/// ```text
/// POST /api/accounts/register
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email_address": "alice@example.com",
///   "phone_number": "555-0100",
///   "password": "hunter2"
/// }
/// ```
///
/// # Errors
///
/// - `400`: validation failed, or the username/email is already taken
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterAccountRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    request.validate()?;

    let account = state.accounts.register(request).await?;

    Ok(Json(ApiResponse::new(AccountResponse::from(account))))
}

/// Verify credentials and return the account
///
/// # Endpoint
///
/// ```text
/// POST /api/accounts/login
/// Content-Type: application/json
///
/// {
///   "email_address": "alice@example.com",
///   "password": "hunter2"
/// }
/// ```
///
/// # Errors
///
/// - `400`: validation failed
/// - `401`: wrong password
/// - `404`: no account with that email address
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginAccountRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    request.validate()?;

    let account = state.accounts.login(request).await?;

    Ok(Json(ApiResponse::new(AccountResponse::from(account))))
}

/// Apply a partial update to an account
///
/// # Endpoint
///
/// ```text
/// PATCH /api/accounts/update/{account_id}
/// ```
///
/// Any subset of username / email_address / phone_number / password.
/// Empty strings are no-ops, not clears.
///
/// # Errors
///
/// - `400`: validation failed, or the new username/email collides
/// - `404`: no account with that id
pub async fn update(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(request): Json<UpdateAccountRequest>,
) -> ApiResult<Json<ApiResponse<AccountResponse>>> {
    request.validate()?;

    let account = state.accounts.update(account_id, request).await?;

    Ok(Json(ApiResponse::new(AccountResponse::from(account))))
}

/// Delete an account by username
///
/// # Endpoint
///
/// ```text
/// DELETE /api/accounts/delete/{username}
/// ```
///
/// Idempotent: deleting a username that does not exist returns 200 with
/// `deleted: false`.
pub async fn delete(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<ApiResponse<DeleteAccountResponse>>> {
    let deleted = state.accounts.delete_by_username(&username).await?;

    Ok(Json(ApiResponse::new(DeleteAccountResponse {
        username,
        deleted,
    })))
}
