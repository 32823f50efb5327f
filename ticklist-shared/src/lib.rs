//! # Ticklist Shared Library
//!
//! This crate contains the types and persistence logic shared by the
//! ticklist HTTP API and its tooling.
//!
//! ## Module Organization
//!
//! - `db`: connection pooling and migrations
//! - `models`: database models and their CRUD operations
//! - `auth`: password hashing
//! - `patch`: partial-update field filtering

pub mod auth;
pub mod db;
pub mod models;
pub mod patch;

/// Current version of the ticklist shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
