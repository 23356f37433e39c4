//! Key and mouse dispatch for the viewer.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Position;
use tracing::debug;

use super::app::TuiApp;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut TuiApp, key: KeyEvent) {
    // Release/repeat reports arrive on some platforms; act on presses only.
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Right => app.next(),
        KeyCode::Left => app.previous(),
        _ => {}
    }
}

/// Handle a mouse event: left press on a recorded control activates it.
pub fn handle_mouse(app: &mut TuiApp, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let pos = Position::new(mouse.column, mouse.row);
    if let Some(target) = app.hit_areas.target_at(pos) {
        debug!(?target, "click");
        app.activate(target);
    }
}
