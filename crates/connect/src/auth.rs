//! Request authorization capability.
//!
//! The bearer token is injected into the client as a capability instead of
//! being read from ambient storage at every call site. Implementations
//! decide where the token actually lives (env, file store, test fixture).

use baydesk_core::errors::{Error, Result};

/// Supplies the bearer token for back-office API requests.
pub trait TokenProvider: Send + Sync {
    /// The current access token. Called once per request construction.
    fn access_token(&self) -> Result<String>;
}

/// A fixed token, for tests and one-shot scripted use.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn access_token(&self) -> Result<String> {
        if self.0.trim().is_empty() {
            return Err(Error::Auth(
                "No access token configured; log in first".to_string(),
            ));
        }
        Ok(self.0.clone())
    }
}
