//! Bearer token providers.
//!
//! This module provides:
//! - `AuthProvider`: The capability the API client asks for a token before
//!   every request
//! - `StaticToken`, `EnvToken`: Tokens supplied by the caller or environment
//! - `KeyringToken`: A token kept in the OS keychain via keyring
//!
//! Acquiring or refreshing tokens (OAuth flows) is left to the caller; any
//! closure returning a token can stand in as a provider.

pub mod keychain;
pub mod provider;

pub use keychain::KeyringToken;
pub use provider::{AuthError, AuthProvider, EnvToken, StaticToken, DEFAULT_TOKEN_VAR};
