use std::time::Instant;

use crate::api::{Post, User};
use crate::resource::Resource;
use crate::ui::animation::{CountAnimation, HeartAnimation};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub user: Resource<User>,
    /// Starts as `Loading`: the screen requests posts as soon as it opens.
    pub posts: Resource<Vec<Post>>,
    pub is_following: bool,
    /// Present while the heart is on screen.
    pub heart: Option<HeartAnimation>,
    pub post_count: CountAnimation,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            user: Resource::Empty,
            posts: Resource::Loading,
            is_following: false,
            heart: None,
            post_count: CountAnimation::default(),
        }
    }
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn heart_offset(&self, now: Instant) -> Option<u16> {
        self.heart.map(|heart| heart.offset_at(now))
    }

    pub fn displayed_post_count(&self, now: Instant) -> u32 {
        self.post_count.value_at(now)
    }
}
