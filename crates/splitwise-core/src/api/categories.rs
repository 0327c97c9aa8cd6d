//! Category access: the fixed list of expense categories.

use reqwest::Method;
use serde::Deserialize;
use tracing::debug;

use crate::models::{null_as_default, Category};

use super::{ApiResult, SplitwiseClient};

const GET_CATEGORIES_PATH: &str = "/api/v3.0/get_categories";

#[derive(Debug, Deserialize)]
struct CategoriesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    categories: Vec<Category>,
}

impl SplitwiseClient {
    /// Fetch the supported expense categories with their subcategories
    pub async fn categories(&self) -> ApiResult<Vec<Category>> {
        let response = self.send(Method::GET, GET_CATEGORIES_PATH, None).await?;
        let response = Self::check_response(response)?;

        let parsed: CategoriesResponse = Self::decode(response).await?;
        debug!(count = parsed.categories.len(), "Categories received");
        Ok(parsed.categories)
    }
}
