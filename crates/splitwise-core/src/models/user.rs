use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Avatar URLs in the sizes Splitwise renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Picture {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Snapshot of a user as embedded in expense payloads.
///
/// The same shape is used for `created_by`/`updated_by`/`deleted_by`,
/// comment authors, and the user on each share row. Nested positions
/// usually carry a reduced snapshot (no email, only a medium picture),
/// so everything except `id` is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub registration_status: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub picture: Picture,
}

impl User {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}
