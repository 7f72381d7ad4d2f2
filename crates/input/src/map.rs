//! Mapping from terminal events to game commands and gestures.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::gesture::Gesture;
use crate::types::GridPos;

/// Session-level commands that bypass the gesture driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    NewGame,
    Quit,
}

/// Map keyboard input to session commands.
pub fn handle_key_event(key: KeyEvent) -> Option<UiCommand> {
    if should_quit(key) {
        return Some(UiCommand::Quit);
    }
    match key.code {
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(UiCommand::NewGame)
        }
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Turns raw mouse events into gestures.
///
/// Terminal mice report a drag for every character cell crossed, and a grid
/// cell spans several characters. Only the first event per grid cell becomes a
/// `Drag`.
#[derive(Debug, Clone, Default)]
pub struct PointerMapper {
    last_cell: Option<GridPos>,
}

impl PointerMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a mouse event using `locate` to resolve terminal cells to grid cells.
    pub fn map(
        &mut self,
        event: MouseEvent,
        locate: impl Fn(u16, u16) -> Option<GridPos>,
    ) -> Option<Gesture> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let pos = locate(event.column, event.row)?;
                self.last_cell = Some(pos);
                Some(Gesture::Press(pos))
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let pos = locate(event.column, event.row)?;
                if self.last_cell == Some(pos) {
                    return None;
                }
                self.last_cell = Some(pos);
                Some(Gesture::Drag(pos))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.last_cell = None;
                Some(Gesture::Release)
            }
            _ => None,
        }
    }
}
