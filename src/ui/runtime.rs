use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::api::ApiClient;
use crate::resource::Resource;
use crate::store::ProfileStore;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

const COMMAND_QUEUE: usize = 16;

/// Run the profile screen until the user quits.
///
/// Blocks the calling thread on the terminal loop; fetches and change
/// forwarding run on `runtime`.
pub fn run<A: ApiClient + 'static>(
    store: ProfileStore<A>,
    user_id: String,
    tick_rate: Duration,
    runtime: Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    forward_changes(&runtime, store.subscribe_user(), events.sender(), AppEvent::UserChanged);
    forward_changes(&runtime, store.subscribe_posts(), events.sender(), AppEvent::PostsChanged);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    runtime.spawn(handle_commands(store, command_rx));

    let mut app = App::new(user_id);
    app.set_command_sender(command_tx);
    app.activate();

    loop {
        terminal.draw(|frame| draw(frame, &app, Instant::now()))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => apply_event(&mut app, event, Instant::now()),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn apply_event(app: &mut App, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Key(key) => handle_key(app, key, now),
        AppEvent::Tick => app.on_tick(now),
        AppEvent::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
        }
        AppEvent::UserChanged(user) => app.on_user_changed(user, now),
        AppEvent::PostsChanged(posts) => app.on_posts_changed(posts),
        AppEvent::InputClosed(reason) => {
            tracing::error!(%reason, "input closed, exiting");
            app.request_quit();
        }
    }
}

/// Relay every value published on a store slot into the UI event queue.
fn forward_changes<T, F>(
    runtime: &Handle,
    mut rx: watch::Receiver<Resource<T>>,
    tx: Sender<AppEvent>,
    wrap: F,
) where
    T: Clone + Send + Sync + 'static,
    F: Fn(Resource<T>) -> AppEvent + Send + 'static,
{
    runtime.spawn(async move {
        while rx.changed().await.is_ok() {
            let value = rx.borrow_and_update().clone();
            if tx.send(wrap(value)).is_err() {
                break;
            }
        }
    });
}

async fn handle_commands<A: ApiClient + 'static>(
    store: ProfileStore<A>,
    mut rx: mpsc::Receiver<UiCommand>,
) {
    while let Some(command) = rx.recv().await {
        let (slot, fetch) = match command {
            UiCommand::RequestUser { user_id } => ("user", store.request_user(&user_id)),
            UiCommand::RequestPosts { user_id } => ("posts", store.request_posts(&user_id)),
        };
        tokio::spawn(supervise_fetch(slot, fetch));
    }
}

/// Wait for a fetch task and log it if it died. Returns whether it finished cleanly.
async fn supervise_fetch(slot: &'static str, fetch: JoinHandle<()>) -> bool {
    match fetch.await {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(slot, error = %err, "fetch task failed");
            false
        }
    }
}
