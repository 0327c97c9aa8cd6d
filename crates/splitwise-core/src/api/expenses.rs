//! Expense access: listing, lookup, and creation.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{null_as_default, CreateExpenseBySharesDto, CreateExpenseDto, Expense};

use super::{ApiError, ApiResult, SplitwiseClient};

const CREATE_EXPENSE_PATH: &str = "/api/v3.0/create_expense";

#[derive(Debug, Default, Deserialize)]
struct ResponseErrors {
    #[serde(default, deserialize_with = "null_as_default")]
    base: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CreateExpenseResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    expenses: Vec<Expense>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: ResponseErrors,
}

impl SplitwiseClient {
    /// Expenses involving the current user.
    ///
    /// Not wired to `get_expenses` yet: always returns an empty list
    /// without contacting the server.
    pub async fn expenses(&self) -> ApiResult<Vec<Expense>> {
        debug!("Listing expenses is not supported, returning empty list");
        Ok(Vec::new())
    }

    /// A single expense by id.
    ///
    /// Not wired to `get_expense/{id}` yet: always returns `None` without
    /// contacting the server, for any id.
    pub async fn expense_by_id(&self, id: u64) -> ApiResult<Option<Expense>> {
        debug!(id, "Fetching an expense by id is not supported, returning none");
        Ok(None)
    }

    /// Create an expense split equally across a group.
    ///
    /// The caller must set `group_id` and keep `split_equally` true; this
    /// is not checked locally.
    ///
    /// A 200 response is not enough: the request only succeeded if the
    /// body's `errors.base` is empty. Otherwise the first message is
    /// returned as `ApiError::Rejected`.
    pub async fn create_expense(&self, payload: &CreateExpenseDto) -> ApiResult<Vec<Expense>> {
        self.submit_expense(payload).await
    }

    /// Create an expense from an explicit list of shares.
    ///
    /// Every share needs a paid and owed amount; the server checks that
    /// they add up to the cost. Same response handling as `create_expense`.
    pub async fn create_expense_by_shares(&self, payload: &CreateExpenseBySharesDto) -> ApiResult<Vec<Expense>> {
        self.submit_expense(payload).await
    }

    async fn submit_expense<B: Serialize>(&self, payload: &B) -> ApiResult<Vec<Expense>> {
        let body = serde_json::to_vec(payload).map_err(ApiError::Encode)?;

        let response = self.send(Method::POST, CREATE_EXPENSE_PATH, Some(body)).await?;
        let response = Self::check_response(response)?;

        let parsed: CreateExpenseResponse = Self::decode(response).await?;
        if let Some(message) = parsed.errors.base.into_iter().next() {
            warn!(error = %message, "Expense rejected by server");
            return Err(ApiError::Rejected(message));
        }

        debug!(count = parsed.expenses.len(), "Expenses created");
        Ok(parsed.expenses)
    }
}
