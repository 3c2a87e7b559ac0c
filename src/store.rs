//! Observable profile state.
//!
//! `ProfileStore` owns two independent watch slots, `user` and `posts`.
//! It is the only writer; the UI holds receivers. Each request publishes
//! `Loading` synchronously, then settles the slot from a background task.
//! Concurrent requests are not merged or cancelled: the last one to finish
//! wins.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::api::{ApiClient, Post, User};
use crate::repository::Repository;
use crate::resource::Resource;

pub const NO_USER_FOUND: &str = "No user found";
pub const NO_POSTS_FOUND: &str = "No posts found";

pub type UserReceiver = watch::Receiver<Resource<User>>;
pub type PostsReceiver = watch::Receiver<Resource<Vec<Post>>>;

pub struct ProfileStore<A: ApiClient + 'static> {
    repository: Repository<A>,
    user: Arc<watch::Sender<Resource<User>>>,
    posts: Arc<watch::Sender<Resource<Vec<Post>>>>,
    runtime: Handle,
}

impl<A: ApiClient + 'static> ProfileStore<A> {
    /// Fetches run on `runtime`, never on the caller's thread.
    pub fn new(repository: Repository<A>, runtime: Handle) -> Self {
        let (user, _) = watch::channel(Resource::Empty);
        let (posts, _) = watch::channel(Resource::Empty);
        Self {
            repository,
            user: Arc::new(user),
            posts: Arc::new(posts),
            runtime,
        }
    }

    pub fn subscribe_user(&self) -> UserReceiver {
        self.user.subscribe()
    }

    pub fn subscribe_posts(&self) -> PostsReceiver {
        self.posts.subscribe()
    }

    pub fn user(&self) -> Resource<User> {
        self.user.borrow().clone()
    }

    pub fn posts(&self) -> Resource<Vec<Post>> {
        self.posts.borrow().clone()
    }

    /// Publish `Loading`, then fetch the user in the background.
    ///
    /// The handle only lets callers wait for the outcome; dropping it does
    /// not cancel the fetch.
    pub fn request_user(&self, id: &str) -> JoinHandle<()> {
        tracing::info!(uid = id, "requesting user");
        self.user.send_replace(Resource::Loading);

        let repository = self.repository.clone();
        let slot = Arc::clone(&self.user);
        let id = id.to_string();
        self.runtime.spawn(async move {
            let outcome = repository.get_user(&id).await;
            slot.send_replace(settle(outcome, NO_USER_FOUND));
        })
    }

    /// Publish `Loading`, then fetch the posts in the background.
    pub fn request_posts(&self, id: &str) -> JoinHandle<()> {
        tracing::info!(uid = id, "requesting posts");
        self.posts.send_replace(Resource::Loading);

        let repository = self.repository.clone();
        let slot = Arc::clone(&self.posts);
        let id = id.to_string();
        self.runtime.spawn(async move {
            let outcome = repository.get_posts_for_user(&id).await;
            slot.send_replace(settle(outcome, NO_POSTS_FOUND));
        })
    }

    /// Anonymous session id from the server.
    ///
    /// The profile screen does not use it; it keeps fetching the
    /// configured user id.
    pub async fn session_id(&self) -> Option<String> {
        self.repository.get_session_id().await
    }
}

/// Map a repository outcome onto a terminal slot value.
fn settle<T>(outcome: Resource<T>, fallback: &str) -> Resource<T> {
    match outcome {
        Resource::Success(data) => Resource::Success(data),
        Resource::Error(message) => Resource::Error(message),
        Resource::Empty | Resource::Loading => Resource::Error(fallback.to_string()),
    }
}
