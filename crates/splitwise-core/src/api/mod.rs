//! REST API client module for the Splitwise service.
//!
//! This module provides the `SplitwiseClient` for reading expense
//! categories and creating expenses through the v3.0 API.
//!
//! Every request is authorized with a bearer token obtained from an
//! `AuthProvider` just before the request is built.

pub mod categories;
pub mod client;
pub mod error;
pub mod expenses;

pub use client::SplitwiseClient;
pub use error::{ApiError, ApiResult};
