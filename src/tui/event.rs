//! TUI events — terminal input funneled into one channel.
//!
//! A blocking reader task polls crossterm and forwards key and mouse events
//! as `TuiMessage`s over an mpsc channel. The reader exits on its own once
//! the receiving side is dropped.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

/// How long one poll blocks before re-checking the channel.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Mouse input (clicks on buttons and dots).
    Mouse(MouseEvent),
    /// Quit the viewer.
    Quit,
}

impl TuiMessage {
    /// Map a raw terminal event, dropping the ones the viewer ignores.
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(TuiMessage::Input(key)),
            Event::Mouse(mouse) => Some(TuiMessage::Mouse(mouse)),
            _ => None,
        }
    }
}

/// Spawn the terminal input reader.
pub fn spawn_input_reader(tx: mpsc::UnboundedSender<TuiMessage>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || {
        while !tx.is_closed() {
            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    warn!("terminal poll failed: {e}");
                    let _ = tx.send(TuiMessage::Quit);
                    break;
                }
            }
            match event::read() {
                Ok(ev) => {
                    if let Some(msg) = TuiMessage::from_event(ev) {
                        if tx.send(msg).is_err() {
                            break;
                        }
                    }
                }
                Err(e) => {
                    warn!("terminal read failed: {e}");
                    let _ = tx.send(TuiMessage::Quit);
                    break;
                }
            }
        }
    })
}
