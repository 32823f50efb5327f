/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `accounts`: Account endpoints (register, login, update, delete)
/// - `todos`: Todo endpoints (create, list, update, delete)

use serde::Serialize;

pub mod accounts;
pub mod health;
pub mod todos;

/// Success envelope wrapping every 200 response
///
/// Failures use [`crate::error::ErrorResponse`] instead; the two shapes
/// together are the complete wire contract.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// The operation's payload
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in the success envelope
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
