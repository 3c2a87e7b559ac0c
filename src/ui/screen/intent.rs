use std::time::Instant;

use crate::api::{Post, User};
use crate::resource::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// The store published a new value for the user slot.
    UserChanged { user: Resource<User>, now: Instant },
    /// The store published a new value for the posts slot.
    PostsChanged { posts: Resource<Vec<Post>> },
    /// Follow button pressed. Local only, no request is made.
    ToggleFollow { now: Instant },
    /// Animation clock.
    Tick { now: Instant },
}

impl Intent for ScreenIntent {}
