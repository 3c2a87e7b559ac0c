//! Credential resolution from configuration.
//!
//! Credentials are resolved once at startup into an explicit value that is
//! handed to the HTTP client constructor.

use super::types::AuthConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone, PartialEq, Eq)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Basic-auth credentials for the profile API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: SecureString,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecureString::new(password.into()),
        }
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialStatus {
    /// Email and password are both present.
    Configured(Credentials),
    /// An email is set but the password is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
    /// No email configured; requests go out without authentication.
    NoAuth,
}

impl AuthConfig {
    pub fn resolve(&self) -> CredentialStatus {
        let Some(email) = self.email.as_deref().filter(|e| !e.is_empty()) else {
            return CredentialStatus::NoAuth;
        };

        match self.password.as_deref() {
            Some(password) if !password.is_empty() => {
                CredentialStatus::Configured(Credentials::new(email, password))
            }
            _ => CredentialStatus::Unconfigured {
                reason: format!("no password configured for '{}'", email),
            },
        }
    }

    /// Resolved credentials, if any.
    pub fn credentials(&self) -> Option<Credentials> {
        match self.resolve() {
            CredentialStatus::Configured(credentials) => Some(credentials),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(%reason, "sending requests without authentication");
                None
            }
            CredentialStatus::NoAuth => None,
        }
    }
}
