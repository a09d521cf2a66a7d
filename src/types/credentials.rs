// ABOUTME: API credentials for Basic authentication.
// ABOUTME: Encodes `user:token` and keeps the token out of Debug output.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    user: String,
    token: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            token: token.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Value for the `Authorization` header: `Basic base64(user:token)`.
    pub fn basic_auth(&self) -> String {
        let encoded = STANDARD.encode(format!("{}:{}", self.user, self.token));
        format!("Basic {encoded}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_auth_encodes_user_and_token() {
        let creds = Credentials::new("u", "t");
        // base64("u:t")
        assert_eq!(creds.basic_auth(), "Basic dTp0");
    }

    #[test]
    fn debug_hides_token() {
        let creds = Credentials::new("deployer", "s3cret");
        let debug = format!("{creds:?}");
        assert!(debug.contains("deployer"));
        assert!(!debug.contains("s3cret"));
    }
}
