//! Write-only payloads for `create_expense`.
//!
//! Splitwise accepts two shapes on the same endpoint:
//!
//! - `CreateExpenseDto`: split the cost equally across a group
//!   (`group_id` set, `split_equally` true).
//! - `CreateExpenseBySharesDto`: an explicit list of shares, each with a
//!   paid and owed amount and a way to identify the participant.
//!
//! The shares shape is sent with flattened, positionally indexed keys
//! (`users__0__user_id`, `users__0__paid_share`, ...). Shares are kept as
//! an ordered list here and only flattened by the `Serialize` impl.

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::{Amount, RepeatInterval};

/// Equal-split expense payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateExpenseDto {
    pub cost: Amount,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<RepeatInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    pub group_id: i64,
    pub split_equally: bool,
}

impl CreateExpenseDto {
    /// An expense split equally between every member of a group
    pub fn split_equally(group_id: i64, cost: impl Into<Amount>, description: impl Into<String>) -> Self {
        Self {
            cost: cost.into(),
            description: description.into(),
            details: None,
            date: None,
            repeat_interval: None,
            currency_code: None,
            category_id: None,
            group_id,
            split_equally: true,
        }
    }
}

/// Identifies a participant on a share.
///
/// Either an existing Splitwise user, or someone identified by email and
/// name (Splitwise invites them if they have no account yet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserRef {
    ById(i64),
    ByNameEmail {
        email: String,
        first_name: String,
        last_name: String,
    },
}

/// One participant's paid and owed portion of a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub user: UserRef,
    pub paid_share: Amount,
    pub owed_share: Amount,
}

impl Share {
    pub fn new(user: UserRef, paid_share: impl Into<Amount>, owed_share: impl Into<Amount>) -> Self {
        Self {
            user,
            paid_share: paid_share.into(),
            owed_share: owed_share.into(),
        }
    }
}

/// Custom-split expense payload.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExpenseBySharesDto {
    pub cost: Amount,
    pub description: String,
    pub details: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub repeat_interval: Option<RepeatInterval>,
    pub currency_code: Option<String>,
    pub category_id: Option<i64>,
    /// `0` for an expense outside any group
    pub group_id: i64,
    pub shares: Vec<Share>,
}

impl CreateExpenseBySharesDto {
    pub fn new(cost: impl Into<Amount>, description: impl Into<String>) -> Self {
        Self {
            cost: cost.into(),
            description: description.into(),
            details: None,
            date: None,
            repeat_interval: None,
            currency_code: None,
            category_id: None,
            group_id: 0,
            shares: Vec::new(),
        }
    }

    /// Append a participant; order determines the index on the wire
    pub fn with_share(mut self, share: Share) -> Self {
        self.shares.push(share);
        self
    }
}

impl Serialize for CreateExpenseBySharesDto {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("cost", &self.cost)?;
        map.serialize_entry("description", &self.description)?;
        if let Some(ref details) = self.details {
            map.serialize_entry("details", details)?;
        }
        if let Some(ref date) = self.date {
            map.serialize_entry("date", date)?;
        }
        if let Some(ref interval) = self.repeat_interval {
            map.serialize_entry("repeat_interval", interval)?;
        }
        if let Some(ref currency) = self.currency_code {
            map.serialize_entry("currency_code", currency)?;
        }
        if let Some(category_id) = self.category_id {
            map.serialize_entry("category_id", &category_id)?;
        }
        map.serialize_entry("group_id", &self.group_id)?;

        for (index, share) in self.shares.iter().enumerate() {
            let key = |property: &str| format!("users__{}__{}", index, property);
            match &share.user {
                UserRef::ById(user_id) => {
                    map.serialize_entry(&key("user_id"), user_id)?;
                }
                UserRef::ByNameEmail { email, first_name, last_name } => {
                    map.serialize_entry(&key("email"), email)?;
                    map.serialize_entry(&key("first_name"), first_name)?;
                    map.serialize_entry(&key("last_name"), last_name)?;
                }
            }
            map.serialize_entry(&key("paid_share"), &share.paid_share)?;
            map.serialize_entry(&key("owed_share"), &share.owed_share)?;
        }

        map.end()
    }
}
