use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Where the profile API lives and how to reach it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the API (scheme + host + port).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Accept any TLS certificate and hostname.
    ///
    /// Only meant for a local development server with a self-signed
    /// certificate. Never enabled unless set explicitly.
    #[serde(default)]
    pub insecure_dev_tls: bool,
}

/// Basic-auth credentials sent with every request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Which profile the screen shows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    /// User id passed to `getUser` and `getPostsForUser`.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (drives animations).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

pub const DEFAULT_BASE_URL: &str = "https://192.168.0.103:8801";
pub const DEFAULT_USER_ID: &str = "uniqueuid";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

fn default_tick_rate_ms() -> u64 {
    33
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            insecure_dev_tls: false,
        }
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
