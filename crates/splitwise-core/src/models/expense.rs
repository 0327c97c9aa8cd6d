use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{null_as_default, Amount, User};

/// How often a recurring expense repeats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatInterval {
    #[default]
    Never,
    Weekly,
    Fortnightly,
    Monthly,
    Yearly,
    #[serde(other)]
    Other,
}

/// A directed transfer implied by an expense: `from` owes `to` the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repayment {
    pub from: i64,
    pub to: i64,
    pub amount: Amount,
}

/// One participant's row on an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseShare {
    pub user: Option<User>,
    pub user_id: i64,
    pub paid_share: Amount,
    pub owed_share: Amount,
    pub net_balance: Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub comment_type: Option<String>,
    pub relation_type: Option<String>,
    pub relation_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub user: Option<User>,
}

/// The category as embedded on an expense (id and name only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub large: Option<String>,
    pub original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub group_id: Option<i64>,
    pub friendship_id: Option<i64>,
    pub expense_bundle_id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub details: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cost: Amount,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
    pub date: DateTime<Utc>,

    // Recurrence
    #[serde(default, deserialize_with = "null_as_default")]
    pub repeats: bool,
    #[serde(default)]
    pub repeat_interval: Option<RepeatInterval>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email_reminder: bool,
    /// Days before the next repeat to send a reminder; the API uses `-1`
    /// or `null` for "none", so the raw value is kept.
    #[serde(default)]
    pub email_reminder_in_advance: Option<serde_json::Value>,
    pub next_repeat: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub comments_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_confirmed: bool,
    pub category_id: Option<i64>,
    pub category: Option<CategoryRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub receipt: Receipt,

    // Audit
    pub created_at: Option<DateTime<Utc>>,
    pub created_by: Option<User>,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<User>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub deleted_by: Option<User>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub repayments: Vec<Repayment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<ExpenseShare>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,
}

impl Expense {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// The share row for a given user, if they take part in this expense
    pub fn share_for(&self, user_id: i64) -> Option<&ExpenseShare> {
        self.users.iter().find(|s| s.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DINNER: &str = r#"{
        "id": 51023,
        "group_id": 391,
        "friendship_id": null,
        "expense_bundle_id": null,
        "description": "Dinner",
        "repeats": false,
        "repeat_interval": "never",
        "email_reminder": false,
        "email_reminder_in_advance": -1,
        "next_repeat": null,
        "details": "Thai place",
        "comments_count": 1,
        "payment": false,
        "creation_method": "equal",
        "transaction_method": "offline",
        "transaction_confirmed": false,
        "transaction_id": null,
        "transaction_status": null,
        "cost": "25.00",
        "currency_code": "USD",
        "repayments": [{"from": 6788709, "to": 270896089, "amount": "12.50"}],
        "date": "2024-03-14T19:30:00Z",
        "created_at": "2024-03-14T20:01:12Z",
        "created_by": {
            "id": 270896089,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "registration_status": "confirmed",
            "picture": {"small": "s.png", "medium": "m.png", "large": "l.png"}
        },
        "updated_at": "2024-03-14T20:01:12Z",
        "updated_by": null,
        "deleted_at": null,
        "deleted_by": null,
        "category": {"id": 13, "name": "Dining out"},
        "receipt": {"large": null, "original": null},
        "users": [
            {
                "user": {"id": 270896089, "first_name": "Ada", "last_name": "Lovelace", "picture": {"medium": "m.png"}},
                "user_id": 270896089,
                "paid_share": "25.00",
                "owed_share": "12.50",
                "net_balance": "12.50"
            },
            {
                "user": {"id": 6788709, "first_name": "Charles", "last_name": "Babbage", "picture": {"medium": "cb.png"}},
                "user_id": 6788709,
                "paid_share": "0.00",
                "owed_share": "12.50",
                "net_balance": "-12.50"
            }
        ],
        "comments": [
            {
                "id": 79800950,
                "content": "Added via the app",
                "comment_type": "System",
                "relation_type": "ExpenseComment",
                "relation_id": 51023,
                "created_at": "2024-03-14T20:01:12Z",
                "deleted_at": null,
                "user": {"id": 270896089, "first_name": "Ada", "last_name": "Lovelace", "picture": {"medium": "m.png"}}
            }
        ]
    }"#;

    #[test]
    fn test_parse_expense() {
        let expense: Expense = serde_json::from_str(DINNER).unwrap();
        assert_eq!(expense.id, 51023);
        assert_eq!(expense.group_id, Some(391));
        assert_eq!(expense.friendship_id, None);
        assert_eq!(expense.details.as_deref(), Some("Thai place"));
        assert_eq!(expense.repeat_interval, Some(RepeatInterval::Never));
        assert_eq!(expense.email_reminder_in_advance, Some(serde_json::json!(-1)));
        assert_eq!(expense.category.as_ref().map(|c| c.name.as_str()), Some("Dining out"));
        assert_eq!(expense.date.to_rfc3339(), "2024-03-14T19:30:00+00:00");
        assert!(!expense.is_deleted());

        let creator = expense.created_by.as_ref().unwrap();
        assert_eq!(creator.registration_status.as_deref(), Some("confirmed"));
        assert_eq!(creator.picture.small.as_deref(), Some("s.png"));
        assert!(expense.updated_by.is_none());

        assert_eq!(expense.comments.len(), 1);
        let author = expense.comments[0].user.as_ref().unwrap();
        assert_eq!(author.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_monetary_fields_stay_exact_text() {
        let expense: Expense = serde_json::from_str(DINNER).unwrap();
        assert_eq!(expense.cost.as_str(), "25.00");
        assert_eq!(expense.repayments[0].amount.as_str(), "12.50");

        let debtor = expense.share_for(6788709).unwrap();
        assert_eq!(debtor.paid_share.as_str(), "0.00");
        assert_eq!(debtor.owed_share.as_str(), "12.50");
        assert_eq!(debtor.net_balance.as_str(), "-12.50");

        // Writing the expense back out keeps the same text
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["cost"], "25.00");
        assert_eq!(value["users"][0]["owed_share"], "12.50");
        assert_eq!(value["users"][1]["net_balance"], "-12.50");
        assert_eq!(value["repayments"][0]["amount"], "12.50");

        let reparsed: Expense = serde_json::from_value(value).unwrap();
        assert_eq!(reparsed, expense);
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let json = r#"{
            "id": 9,
            "group_id": null,
            "description": null,
            "details": null,
            "cost": null,
            "currency_code": null,
            "date": "2024-03-14T19:30:00Z",
            "repeats": null,
            "email_reminder": null,
            "comments_count": null,
            "payment": null,
            "transaction_confirmed": null,
            "category": null,
            "receipt": null,
            "created_by": {"id": 1, "first_name": "Ada", "picture": null},
            "repayments": null,
            "users": null,
            "comments": null
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert_eq!(expense.id, 9);
        assert_eq!(expense.description, "");
        assert_eq!(expense.cost.as_str(), "");
        assert_eq!(expense.currency_code, "");
        assert!(!expense.repeats);
        assert!(!expense.email_reminder);
        assert_eq!(expense.comments_count, 0);
        assert!(!expense.payment);
        assert!(!expense.transaction_confirmed);
        assert_eq!(expense.receipt, Receipt::default());
        assert_eq!(expense.created_by.unwrap().picture, crate::models::Picture::default());
        assert!(expense.repayments.is_empty());
        assert!(expense.users.is_empty());
        assert!(expense.comments.is_empty());
    }

    #[test]
    fn test_unknown_repeat_interval() {
        let interval: RepeatInterval = serde_json::from_str(r#""biweekly""#).unwrap();
        assert_eq!(interval, RepeatInterval::Other);
        let interval: RepeatInterval = serde_json::from_str(r#""fortnightly""#).unwrap();
        assert_eq!(interval, RepeatInterval::Fortnightly);
    }
}
