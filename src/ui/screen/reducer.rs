use crate::resource::Resource;
use crate::ui::animation::HeartAnimation;
use crate::ui::mvi::Reducer;
use crate::ui::screen::intent::ScreenIntent;
use crate::ui::screen::state::ScreenState;

pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::UserChanged { user, now } => {
                // Anything but a loaded user counts as zero posts, and so
                // does a negative count from the server.
                let target = match &user {
                    Resource::Success(user) => u32::try_from(user.posts).unwrap_or(0),
                    Resource::Empty | Resource::Loading | Resource::Error(_) => 0,
                };
                ScreenState {
                    post_count: state.post_count.retarget(target, now),
                    user,
                    ..state
                }
            }
            ScreenIntent::PostsChanged { posts } => ScreenState { posts, ..state },
            ScreenIntent::ToggleFollow { now } => {
                let is_following = !state.is_following;
                let heart = if is_following {
                    Some(HeartAnimation::start(now))
                } else {
                    None
                };
                ScreenState {
                    is_following,
                    heart,
                    ..state
                }
            }
            ScreenIntent::Tick { now } => match state.heart {
                Some(heart) if heart.is_finished(now) => ScreenState {
                    heart: None,
                    ..state
                },
                _ => state,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::User;
    use crate::ui::animation::POST_COUNT_DURATION;
    use std::time::Instant;

    fn loaded(posts: i32, now: Instant) -> ScreenState {
        let mut user = User::new("x");
        user.posts = posts;
        ScreenReducer::reduce(
            ScreenState::default(),
            ScreenIntent::UserChanged {
                user: Resource::Success(user),
                now,
            },
        )
    }

    #[test]
    fn loaded_user_targets_post_count() {
        let now = Instant::now();
        let state = loaded(7, now);
        assert_eq!(state.displayed_post_count(now + POST_COUNT_DURATION), 7);
    }

    #[test]
    fn negative_post_count_shows_zero() {
        let now = Instant::now();
        let state = loaded(-1, now);
        assert!(state.user.data().is_some());
        assert_eq!(state.displayed_post_count(now), 0);
        assert_eq!(state.displayed_post_count(now + POST_COUNT_DURATION), 0);
    }

    #[test]
    fn unfollow_clears_heart() {
        let now = Instant::now();
        let following =
            ScreenReducer::reduce(ScreenState::default(), ScreenIntent::ToggleFollow { now });
        assert!(following.heart.is_some());
        let state = ScreenReducer::reduce(following, ScreenIntent::ToggleFollow { now });
        assert!(!state.is_following);
        assert!(state.heart.is_none());
    }
}
