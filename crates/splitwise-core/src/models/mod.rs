//! Data models for Splitwise entities.
//!
//! This module contains the data structures used to represent
//! Splitwise data including:
//!
//! - `Category`, `Subcategory`: Expense categories and their icons
//! - `Expense`: Expenses with shares, repayments, and comments
//! - `User`: The actor snapshot embedded throughout expense payloads
//! - `CreateExpenseDto`, `CreateExpenseBySharesDto`: Write-only payloads
//! - `Amount`: Monetary values kept as exact decimal text

pub mod amount;
pub mod category;
pub mod create;
pub mod expense;
pub mod user;

pub use amount::Amount;
pub use category::{Category, IconTypes, SlimIcons, SquareIcons, Subcategory};
pub use create::{CreateExpenseBySharesDto, CreateExpenseDto, Share, UserRef};
pub use expense::{CategoryRef, Comment, Expense, ExpenseShare, Receipt, RepeatInterval, Repayment};
pub use user::{Picture, User};

use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing key.
///
/// The API writes `null` for empty nested objects, lists, and strings;
/// pair with `#[serde(default)]` to also cover absent keys.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
