//! Wire models returned by the profile API.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Image shown when the server does not send a profile picture.
pub const DEFAULT_PROFILE_IMG_URL: &str =
    "https://192.168.0.103:8801/images/default_profile_img.png";

/// A user profile as served by `GET /getUser/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_profile_img_url")]
    pub profile_img_url: String,
    #[serde(default)]
    pub following: Vec<String>,
    #[serde(default)]
    pub followers: Vec<String>,
    /// Post count as sent by the server. Not guaranteed to be non-negative.
    #[serde(default)]
    pub posts: i32,
    /// Local follow flag. Never sent to or read from the server.
    #[serde(skip)]
    pub is_following: bool,
    /// Normally supplied by the server; generated client side when absent.
    #[serde(default = "generate_uid")]
    pub uid: String,
}

impl User {
    /// Create a user with defaults for everything except the username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            email: String::new(),
            username: username.into(),
            description: String::new(),
            profile_img_url: default_profile_img_url(),
            following: Vec::new(),
            followers: Vec::new(),
            posts: 0,
            is_following: false,
            uid: generate_uid(),
        }
    }

    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following_count(&self) -> usize {
        self.following.len()
    }
}

/// A single post thumbnail from `GET /getPostsForUser/{uid}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub img_url: String,
}

impl Post {
    pub fn new(img_url: impl Into<String>) -> Self {
        Self {
            img_url: img_url.into(),
        }
    }
}

fn default_profile_img_url() -> String {
    DEFAULT_PROFILE_IMG_URL.to_string()
}

fn generate_uid() -> String {
    Uuid::new_v4().to_string()
}
