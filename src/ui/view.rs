//! Plain data projected from [`ScreenState`] at a given instant.
//!
//! Widgets render these values; tests assert on them without a terminal.

use std::time::Instant;

use crate::resource::Resource;
use crate::ui::screen::ScreenState;

/// Shown in the top bar until a user is loaded.
pub const USER_PLACEHOLDER: &str = "user is null";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileView {
    pub title: String,
    pub username: String,
    pub description: String,
    pub image_url: Option<String>,
    pub posts: u32,
    pub followers: usize,
    pub following: usize,
    /// Error text replacing the profile section.
    pub error: Option<String>,
    pub is_following: bool,
    pub heart_offset: Option<u16>,
}

impl ProfileView {
    pub fn project(state: &ScreenState, now: Instant) -> Self {
        let (title, username, description, image_url, followers, following, error) =
            match &state.user {
                Resource::Success(user) => (
                    user.username.clone(),
                    user.username.clone(),
                    user.description.clone(),
                    Some(user.profile_img_url.clone()),
                    user.follower_count(),
                    user.following_count(),
                    None,
                ),
                Resource::Error(message) => (
                    USER_PLACEHOLDER.to_string(),
                    String::new(),
                    String::new(),
                    None,
                    0,
                    0,
                    Some(message.clone()),
                ),
                Resource::Empty | Resource::Loading => (
                    USER_PLACEHOLDER.to_string(),
                    String::new(),
                    String::new(),
                    None,
                    0,
                    0,
                    None,
                ),
            };

        Self {
            title,
            username,
            description,
            image_url,
            posts: state.displayed_post_count(now),
            followers,
            following,
            error,
            is_following: state.is_following,
            heart_offset: state.heart_offset(now),
        }
    }

    pub fn button_label(&self) -> &'static str {
        if self.is_following {
            "Unfollow"
        } else {
            "Follow"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostsView {
    Hidden,
    Loading,
    Grid(Vec<String>),
    Error(String),
}

impl PostsView {
    pub fn project(state: &ScreenState) -> Self {
        match &state.posts {
            Resource::Empty => PostsView::Hidden,
            Resource::Loading => PostsView::Loading,
            Resource::Success(posts) => {
                PostsView::Grid(posts.iter().map(|post| post.img_url.clone()).collect())
            }
            Resource::Error(message) => PostsView::Error(message.clone()),
        }
    }
}
