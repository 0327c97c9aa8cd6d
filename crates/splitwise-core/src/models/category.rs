//! Expense categories as served by `get_categories`.
//!
//! Categories form a fixed two-level tree: each top-level category owns an
//! ordered list of subcategories, and only subcategory ids may be attached
//! to an expense.

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Slim (outline) icon variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlimIcons {
    pub small: Option<String>,
    pub large: Option<String>,
}

/// Square (filled) icon variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SquareIcons {
    pub large: Option<String>,
    pub xlarge: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IconTypes {
    #[serde(default, deserialize_with = "null_as_default")]
    pub slim: SlimIcons,
    #[serde(default, deserialize_with = "null_as_default")]
    pub square: SquareIcons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_types: IconTypes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub icon_types: IconTypes,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Find a subcategory by id within this category
    pub fn subcategory(&self, id: i64) -> Option<&Subcategory> {
        self.subcategories.iter().find(|s| s.id == id)
    }
}
