//! Keyboard cursor input for terminals without mouse reporting.
//!
//! Arrow keys (or hjkl / wasd) move a cursor over the grid. Space or Enter
//! presses at the cursor; moving while pressed drags; Space or Enter again
//! releases. Esc releases as well.

use crossterm::event::KeyCode;

use crate::gesture::Gesture;
use crate::types::{GridPos, GRID_SIZE};

#[derive(Debug, Clone)]
pub struct CursorInput {
    cursor: GridPos,
    held: bool,
}

impl CursorInput {
    pub fn new() -> Self {
        Self {
            cursor: GridPos::new(GRID_SIZE / 2, GRID_SIZE / 2),
            held: false,
        }
    }

    pub fn cursor(&self) -> GridPos {
        self.cursor
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Forget a held press (e.g. after a new game).
    pub fn reset(&mut self) {
        self.held = false;
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Gesture> {
        let (dr, dc): (i8, i8) = match code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => (-1, 0),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => (1, 0),
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => (0, -1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => (0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.held = !self.held;
                return Some(if self.held {
                    Gesture::Press(self.cursor)
                } else {
                    Gesture::Release
                });
            }
            KeyCode::Esc if self.held => {
                self.held = false;
                return Some(Gesture::Release);
            }
            _ => return None,
        };

        let moved = self.step(dr, dc)?;
        self.cursor = moved;
        self.held.then_some(Gesture::Drag(moved))
    }

    fn step(&self, dr: i8, dc: i8) -> Option<GridPos> {
        let row = self.cursor.row.checked_add_signed(dr)?;
        let col = self.cursor.col.checked_add_signed(dc)?;
        let pos = GridPos::new(row, col);
        pos.in_bounds().then_some(pos)
    }
}

impl Default for CursorInput {
    fn default() -> Self {
        Self::new()
    }
}
