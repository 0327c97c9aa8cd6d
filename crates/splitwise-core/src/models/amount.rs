use std::fmt;

use serde::{Deserialize, Serialize};

/// A monetary value exactly as the API writes it, e.g. `"12.50"`.
///
/// Splitwise sends and accepts amounts as decimal strings. They are never
/// parsed into a float, so `"12.50"` stays `"12.50"` end to end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Amount {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Amount {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_keeps_trailing_zero() {
        let amount: Amount = serde_json::from_str(r#""12.50""#).unwrap();
        assert_eq!(amount.as_str(), "12.50");
        assert_eq!(serde_json::to_string(&amount).unwrap(), r#""12.50""#);
        assert_eq!(amount.into_inner(), "12.50");
    }

    #[test]
    fn test_amount_rejects_json_number() {
        // A bare number would already have lost its textual form
        assert!(serde_json::from_str::<Amount>("12.5").is_err());
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::from("0.10").to_string(), "0.10");
    }
}
