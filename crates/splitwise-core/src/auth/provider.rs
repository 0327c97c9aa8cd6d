use std::fmt;

use thiserror::Error;

/// Environment variable read by `EnvToken::default()`
pub const DEFAULT_TOKEN_VAR: &str = "SPLITWISE_TOKEN";

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No API token available: {0}")]
    MissingToken(String),

    #[error("Keychain error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("Token provider failed: {0}")]
    Provider(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Yields the bearer token for the next request.
///
/// Called once per operation, before the request is built. An error aborts
/// the operation without contacting the server.
pub trait AuthProvider: Send + Sync {
    fn token(&self) -> Result<String, AuthError>;
}

impl<F> AuthProvider for F
where
    F: Fn() -> Result<String, AuthError> + Send + Sync,
{
    fn token(&self) -> Result<String, AuthError> {
        self()
    }
}

/// A fixed token, e.g. a personal API key from the Splitwise app settings.
#[derive(Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

// Keep tokens out of logs
impl fmt::Debug for StaticToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StaticToken(..)")
    }
}

impl AuthProvider for StaticToken {
    fn token(&self) -> Result<String, AuthError> {
        Ok(self.0.clone())
    }
}

/// Reads the token from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_VAR)
    }
}

impl AuthProvider for EnvToken {
    fn token(&self) -> Result<String, AuthError> {
        match std::env::var(&self.var) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(AuthError::MissingToken(format!("{} is not set", self.var))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_token() {
        let provider = StaticToken::new("abc123");
        assert_eq!(provider.token().unwrap(), "abc123");
        assert_eq!(format!("{:?}", provider), "StaticToken(..)");
    }

    #[test]
    fn test_env_token() {
        std::env::set_var("SPLITWISE_TEST_TOKEN_SET", " tok-42 \n");
        assert_eq!(EnvToken::new("SPLITWISE_TEST_TOKEN_SET").token().unwrap(), "tok-42");

        let err = EnvToken::new("SPLITWISE_TEST_TOKEN_UNSET").token().unwrap_err();
        assert!(matches!(err, AuthError::MissingToken(_)));
        assert!(err.to_string().contains("SPLITWISE_TEST_TOKEN_UNSET"));
    }

    #[test]
    fn test_closure_provider() {
        use std::error::Error as _;

        let ok = || -> Result<String, AuthError> { Ok("from-closure".to_string()) };
        assert_eq!(ok.token().unwrap(), "from-closure");

        let failing = || -> Result<String, AuthError> {
            let cause = std::io::Error::new(std::io::ErrorKind::Other, "refresh endpoint unreachable");
            Err(AuthError::Provider(Box::new(cause)))
        };
        let err = failing.token().unwrap_err();
        assert!(matches!(err, AuthError::Provider(_)));
        assert_eq!(err.to_string(), "Token provider failed: refresh endpoint unreachable");
        assert_eq!(err.source().unwrap().to_string(), "refresh endpoint unreachable");
    }
}
