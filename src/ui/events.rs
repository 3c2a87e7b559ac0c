use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::api::{Post, User};
use crate::resource::Resource;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// The store published a new user slot value.
    UserChanged(Resource<User>),
    /// The store published a new posts slot value.
    PostsChanged(Resource<Vec<Post>>),
    /// The input thread stopped; no more keys will arrive.
    InputClosed(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    /// Spawn the input thread. It emits `Tick` every `tick_rate` and
    /// forwards terminal key and resize events in between.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || pump_input(&event_tx, tick_rate, event::poll, event::read));

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Input loop body. Returns when the receiver is gone or the terminal
/// fails; a terminal failure is reported as `InputClosed` first.
fn pump_input<P, R>(tx: &Sender<AppEvent>, tick_rate: Duration, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        match poll(timeout) {
            Ok(true) => {
                let forwarded = match read() {
                    Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal read failed");
                        let _ = tx.send(AppEvent::InputClosed(err.to_string()));
                        return;
                    }
                };
                if forwarded.is_err() {
                    return;
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "terminal poll failed");
                let _ = tx.send(AppEvent::InputClosed(err.to_string()));
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
