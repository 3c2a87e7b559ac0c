mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, Credentials, SecureString};
pub use loader::{ConfigError, PASSWORD_ENV_VAR};
pub use types::{
    AuthConfig, Config, ProfileConfig, ServerConfig, UiConfig, DEFAULT_BASE_URL, DEFAULT_USER_ID,
};
