//! TUI runner — main loop that wires everything together.
//!
//! Enters the terminal session, spawns the input reader, runs the TEA loop
//! until quit. The session guard restores the terminal on every exit path.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::cursor::Show;
use crossterm::{ExecutableCommand, QueueableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{info, warn};

use super::app::TuiApp;
use super::event::{spawn_input_reader, TuiMessage};
use super::layout;

/// Raw mode + alternate screen (+ mouse capture), released on drop.
pub struct TerminalSession {
    mouse: bool,
}

impl TerminalSession {
    pub fn enter(mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on the guard owns cleanup, even if a later step fails.
        let mut session = Self { mouse: false };
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if mouse {
            stdout.execute(EnableMouseCapture)?;
            session.mouse = true;
        }
        Ok(session)
    }

    pub fn terminal(&self) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        Terminal::new(CrosstermBackend::new(io::stdout()))
    }
}

/// Queue the escape sequences that undo `TerminalSession::enter` (except
/// raw mode, which is not a screen command) and flush them.
fn restore_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        out.queue(DisableMouseCapture)?;
    }
    out.queue(LeaveAlternateScreen)?.queue(Show)?;
    out.flush()
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore_screen(&mut io::stdout(), self.mouse) {
            warn!("failed to restore terminal screen: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

/// Run the viewer. Blocks until quit.
pub async fn run_tui(app: &mut TuiApp, mouse: bool) -> anyhow::Result<()> {
    let session = TerminalSession::enter(mouse)?;
    let mut terminal = session.terminal()?;
    terminal.hide_cursor()?;

    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_input_reader(tx);

    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps
    info!(slides = app.deck.len(), mouse, "viewer started");

    while !app.should_quit {
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, app))?;
            }
            msg = rx.recv() => match msg {
                Some(msg) => app.update(msg),
                // Reader gone: nothing can drive the viewer any more.
                None => app.update(TuiMessage::Quit),
            },
        }
    }

    drop(rx);
    if let Err(e) = reader.await {
        warn!("input reader ended abnormally: {e}");
    }
    drop(session);
    info!("viewer stopped");
    Ok(())
}
