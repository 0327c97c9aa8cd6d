use keyring::Entry;

use super::{AuthError, AuthProvider};

const SERVICE_NAME: &str = "splitwise";

/// A token stored in the OS keychain under the `splitwise` service.
#[derive(Debug, Clone)]
pub struct KeyringToken {
    account: String,
}

impl KeyringToken {
    pub fn new(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    fn entry(&self) -> Result<Entry, AuthError> {
        Ok(Entry::new(SERVICE_NAME, &self.account)?)
    }

    /// Store a token in the OS keychain
    pub fn store(&self, token: &str) -> Result<(), AuthError> {
        self.entry()?.set_password(token)?;
        Ok(())
    }

    /// Delete the stored token
    pub fn delete(&self) -> Result<(), AuthError> {
        self.entry()?.delete_credential()?;
        Ok(())
    }

    /// Check if a token exists for this account
    pub fn has_token(&self) -> bool {
        self.entry()
            .map(|entry| entry.get_password().is_ok())
            .unwrap_or(false)
    }
}

impl AuthProvider for KeyringToken {
    fn token(&self) -> Result<String, AuthError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(token),
            Err(keyring::Error::NoEntry) => Err(AuthError::MissingToken(format!(
                "no token stored for {}",
                self.account
            ))),
            Err(e) => Err(e.into()),
        }
    }
}
