//! Normalises API outcomes into [`Resource`] values.
//!
//! Nothing leaves this layer as an error: transport failures, decode
//! failures and empty payloads all become `Resource::Error`.

use std::sync::Arc;

use crate::api::{ApiClient, Post, User};
use crate::resource::{Resource, GENERIC_ERROR};

pub const NO_USER: &str = "No user";

pub struct Repository<A: ApiClient> {
    api: Arc<A>,
}

impl<A: ApiClient> Repository<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Pass-through, no wrapping.
    pub async fn get_session_id(&self) -> Option<String> {
        self.api.fetch_session_id().await
    }

    pub async fn get_posts_for_user(&self, id: &str) -> Resource<Vec<Post>> {
        match self.api.fetch_posts_for_user(id).await {
            Ok(Some(posts)) => {
                tracing::debug!(uid = id, count = posts.len(), "posts loaded");
                Resource::Success(posts)
            }
            Ok(None) => {
                tracing::warn!(uid = id, "posts response had no body");
                Resource::Error(GENERIC_ERROR.to_string())
            }
            Err(err) => {
                tracing::warn!(uid = id, kind = err.kind(), error = %err, "posts request failed");
                Resource::from_error(&err)
            }
        }
    }

    pub async fn get_user(&self, id: &str) -> Resource<User> {
        match self.api.fetch_user_by_id(id).await {
            Ok(Some(user)) => {
                tracing::debug!(uid = id, username = %user.username, "user loaded");
                Resource::Success(user)
            }
            Ok(None) => {
                tracing::warn!(uid = id, "no user returned");
                Resource::Error(NO_USER.to_string())
            }
            Err(err) => {
                tracing::warn!(uid = id, kind = err.kind(), error = %err, "user request failed");
                Resource::from_error(&err)
            }
        }
    }
}

impl<A: ApiClient> Clone for Repository<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}
