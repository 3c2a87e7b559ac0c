use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::api::models::{Post, User};
use crate::config::{Config, Credentials};

/// Remote operations the profile screen depends on.
///
/// Implemented over HTTP by [`HttpApiClient`]; tests substitute their own.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// `GET /getUid`. Any failure collapses to `None`.
    async fn fetch_session_id(&self) -> Option<String>;

    /// `GET /getPostsForUser/{id}`.
    ///
    /// `Ok(None)` means the call went through but carried no usable body
    /// (non-success status, empty body or JSON `null`).
    async fn fetch_posts_for_user(&self, id: &str) -> Result<Option<Vec<Post>>, ApiError>;

    /// `GET /getUser/{id}`.
    ///
    /// `Ok(None)` means a success status with an empty body or JSON `null`.
    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError>;
}

/// Everything needed to construct an [`HttpApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub credentials: Option<Credentials>,
    /// Accept any certificate and hostname. Development servers only.
    pub insecure_dev_tls: bool,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            insecure_dev_tls: false,
        }
    }

    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.server.base_url.clone(),
            credentials: config.auth.credentials(),
            insecure_dev_tls: config.server.insecure_dev_tls,
        }
    }
}

pub struct HttpApiClient {
    client: Client,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl HttpApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url).map_err(|_| ApiError::InvalidUrl {
            url: config.base_url.clone(),
        })?;

        let mut builder = Client::builder();
        if config.insecure_dev_tls {
            tracing::warn!(
                base_url = %base_url,
                "TLS certificate and hostname verification disabled"
            );
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }
        let client = builder.build().map_err(ApiError::Build)?;

        Ok(Self {
            client,
            base_url,
            credentials: config.credentials.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response, ApiError> {
        tracing::debug!(url = %url, "GET");
        let mut request = self.client.get(url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.email, Some(credentials.password.expose()));
        }
        Ok(request.send().await?)
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn fetch_session_id(&self) -> Option<String> {
        let url = self.endpoint(&["getUid"]).ok()?;
        let response = match self.get(url).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(error = %err, "getUid failed");
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::debug!(status = %response.status(), "getUid returned no id");
            return None;
        }
        let body = response.text().await.ok()?;
        parse_session_id(&body)
    }

    async fn fetch_posts_for_user(&self, id: &str) -> Result<Option<Vec<Post>>, ApiError> {
        let url = self.endpoint(&["getPostsForUser", id])?;
        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, uid = id, "getPostsForUser returned no body");
            return Ok(None);
        }
        let body = response.bytes().await?;
        decode_optional(&body)
    }

    async fn fetch_user_by_id(&self, id: &str) -> Result<Option<User>, ApiError> {
        let url = self.endpoint(&["getUser", id])?;
        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { status });
        }
        let body = response.bytes().await?;
        decode_optional(&body)
    }
}

/// Decode a JSON body where empty and `null` both mean "no value".
fn decode_optional<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<T>>(body)?)
}

/// The id comes back as plain text, a JSON string, or JSON `null`.
fn parse_session_id(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let id = if trimmed.starts_with('"') || trimmed == "null" {
        serde_json::from_str::<Option<String>>(trimmed).ok().flatten()?
    } else {
        trimmed.to_string()
    };
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
