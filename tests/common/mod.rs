//! Shared test utilities: an in-memory API client and sample data.

#![allow(dead_code, unused_imports)]

pub mod mock_server;

use async_trait::async_trait;
use profile_viewer::api::{ApiClient, ApiError, Post, User};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// What a scripted call returns.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Body(T),
    NoBody,
    Timeout,
    Connection(&'static str),
}

impl<T> Reply<T> {
    fn into_result(self) -> Result<Option<T>, ApiError> {
        match self {
            Reply::Body(value) => Ok(Some(value)),
            Reply::NoBody => Ok(None),
            Reply::Timeout => Err(ApiError::Timeout),
            Reply::Connection(message) => Err(ApiError::Connection {
                message: message.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
struct Scripted<T> {
    delay: Duration,
    reply: Reply<T>,
}

/// In-memory `ApiClient` with per-call scripted replies.
///
/// Unscripted calls answer `NoBody`.
#[derive(Default)]
pub struct FakeApi {
    session_id: Option<String>,
    users: Mutex<VecDeque<Scripted<User>>>,
    posts: Mutex<VecDeque<Scripted<Vec<Post>>>>,
    user_calls: AtomicUsize,
    posts_calls: AtomicUsize,
    session_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session_id(mut self, id: &str) -> Self {
        self.session_id = Some(id.to_string());
        self
    }

    pub fn user_reply(self, reply: Reply<User>) -> Self {
        self.user_reply_after(Duration::ZERO, reply)
    }

    pub fn user_reply_after(self, delay: Duration, reply: Reply<User>) -> Self {
        self.users
            .lock()
            .unwrap()
            .push_back(Scripted { delay, reply });
        self
    }

    pub fn posts_reply(self, reply: Reply<Vec<Post>>) -> Self {
        self.posts_reply_after(Duration::ZERO, reply)
    }

    pub fn posts_reply_after(self, delay: Duration, reply: Reply<Vec<Post>>) -> Self {
        self.posts
            .lock()
            .unwrap()
            .push_back(Scripted { delay, reply });
        self
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(Ordering::SeqCst)
    }

    pub fn posts_calls(&self) -> usize {
        self.posts_calls.load(Ordering::SeqCst)
    }

    pub fn session_calls(&self) -> usize {
        self.session_calls.load(Ordering::SeqCst)
    }
}

async fn play<T>(queue: &Mutex<VecDeque<Scripted<T>>>) -> Result<Option<T>, ApiError> {
    let next = queue.lock().unwrap().pop_front();
    let Some(scripted) = next else {
        return Ok(None);
    };
    if !scripted.delay.is_zero() {
        tokio::time::sleep(scripted.delay).await;
    }
    scripted.reply.into_result()
}

#[async_trait]
impl ApiClient for FakeApi {
    async fn fetch_session_id(&self) -> Option<String> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        self.session_id.clone()
    }

    async fn fetch_posts_for_user(&self, _id: &str) -> Result<Option<Vec<Post>>, ApiError> {
        self.posts_calls.fetch_add(1, Ordering::SeqCst);
        play(&self.posts).await
    }

    async fn fetch_user_by_id(&self, _id: &str) -> Result<Option<User>, ApiError> {
        self.user_calls.fetch_add(1, Ordering::SeqCst);
        play(&self.users).await
    }
}

/// The user from the "lubo" scenario: 5 posts, 2 followers, 1 following.
///
/// The uid is fixed so two calls compare equal.
pub fn lubo() -> User {
    let mut user = User::new("lubo");
    user.uid = "uniqueuid".to_string();
    user.description = "Compose fan".to_string();
    user.profile_img_url = "https://img.example/lubo.png".to_string();
    user.posts = 5;
    user.followers = vec!["a".to_string(), "b".to_string()];
    user.following = vec!["c".to_string()];
    user
}

pub fn sample_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post::new(format!("https://img.example/post{}.png", i)))
        .collect()
}
