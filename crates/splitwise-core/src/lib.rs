//! Typed client for the Splitwise REST API.
//!
//! - `api`: `SplitwiseClient` with category and expense operations
//! - `auth`: bearer token providers
//! - `config`: client and persisted user configuration
//! - `models`: categories, expenses, and create payloads

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiError, ApiResult, SplitwiseClient};
pub use auth::{AuthError, AuthProvider, EnvToken, KeyringToken, StaticToken};
pub use config::{ClientConfig, Config};
