use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::api::{Post, User};
use crate::resource::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::screen::{ScreenIntent, ScreenReducer, ScreenState};

/// Requests the UI sends to the store worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiCommand {
    RequestUser { user_id: String },
    RequestPosts { user_id: String },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Profile shown on screen. A fixed placeholder id, not the session id.
    user_id: String,
    /// Screen state (MVI pattern).
    screen: ScreenState,
    command_sender: Option<UiCommandSender>,
    last_command_error: Option<String>,
    /// Reference point for the follow button pulse.
    opened_at: Instant,
}

impl App {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            user_id: user_id.into(),
            screen: ScreenState::default(),
            command_sender: None,
            last_command_error: None,
            opened_at: Instant::now(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn screen(&self) -> &ScreenState {
        &self.screen
    }

    pub fn last_command_error(&self) -> Option<&str> {
        self.last_command_error.as_deref()
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    /// Screen opened: one user request and one posts request.
    pub fn activate(&mut self) {
        self.opened_at = Instant::now();
        self.request_profile();
    }

    /// Manual re-trigger of both fetches.
    pub fn refresh(&mut self) {
        self.request_profile();
    }

    pub fn toggle_follow(&mut self, now: Instant) {
        self.dispatch(ScreenIntent::ToggleFollow { now });
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.dispatch(ScreenIntent::Tick { now });
    }

    pub fn on_user_changed(&mut self, user: Resource<User>, now: Instant) {
        self.dispatch(ScreenIntent::UserChanged { user, now });
    }

    pub fn on_posts_changed(&mut self, posts: Resource<Vec<Post>>) {
        self.dispatch(ScreenIntent::PostsChanged { posts });
    }

    pub fn pulse_elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.opened_at)
    }

    fn dispatch(&mut self, intent: ScreenIntent) {
        dispatch_mvi!(self, screen, ScreenReducer, intent);
    }

    fn request_profile(&mut self) {
        let user_id = self.user_id.clone();
        self.send_command(UiCommand::RequestUser {
            user_id: user_id.clone(),
        });
        self.send_command(UiCommand::RequestPosts { user_id });
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => {
                self.last_command_error = None;
                true
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to queue UI command");
                self.last_command_error = Some(format!("Command send failed: {}", err));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::animation::HEART_VISIBLE_FOR;

    fn make_app() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new("uniqueuid");
        app.set_command_sender(tx);
        (app, rx)
    }

    fn drain(rx: &mut mpsc::Receiver<UiCommand>) -> Vec<UiCommand> {
        let mut commands = Vec::new();
        while let Ok(command) = rx.try_recv() {
            commands.push(command);
        }
        commands
    }

    #[test]
    fn activate_requests_user_and_posts_once() {
        let (mut app, mut rx) = make_app();
        app.activate();
        assert_eq!(
            drain(&mut rx),
            vec![
                UiCommand::RequestUser {
                    user_id: "uniqueuid".to_string()
                },
                UiCommand::RequestPosts {
                    user_id: "uniqueuid".to_string()
                },
            ]
        );
    }

    #[test]
    fn refresh_requests_again() {
        let (mut app, mut rx) = make_app();
        app.activate();
        app.refresh();
        assert_eq!(drain(&mut rx).len(), 4);
    }

    #[test]
    fn toggle_follow_sends_nothing() {
        let (mut app, mut rx) = make_app();
        let now = Instant::now();
        app.toggle_follow(now);
        assert!(app.screen().is_following);
        assert!(app.screen().heart.is_some());
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn heart_hides_after_visible_window() {
        let (mut app, _rx) = make_app();
        let now = Instant::now();
        app.toggle_follow(now);
        app.on_tick(now + Duration::from_millis(1000));
        assert!(app.screen().heart.is_some());
        app.on_tick(now + HEART_VISIBLE_FOR);
        assert!(app.screen().heart.is_none());
        assert!(app.screen().is_following);
    }

    #[test]
    fn full_channel_records_error() {
        let (tx, _rx) = mpsc::channel(1);
        let mut app = App::new("uniqueuid");
        app.set_command_sender(tx);
        app.activate();
        assert!(app.last_command_error().is_some());
    }

    #[test]
    fn without_sender_activation_is_silent() {
        let mut app = App::new("uniqueuid");
        app.activate();
        assert!(app.last_command_error().is_none());
        assert_eq!(app.user_id(), "uniqueuid");
    }
}
