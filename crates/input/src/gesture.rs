//! Gesture driver: the caller side of the engine contract.
//!
//! The engine accepts any `process_dot` call, even after the game is over or
//! while a clear is still animating. This driver owns those obligations:
//!
//! - no gesture is processed once the game is over;
//! - no gesture is processed while a released chain is waiting to commit;
//! - a release commits chains of two or more dots (after the clear delay) and
//!   cancels anything shorter.
//!
//! The driver borrows the engine per call; it never owns it.

use tracing::debug;

use crate::core::GameEngine;
use crate::types::{GridPos, MoveSummary, SelectResult, CLEAR_DELAY_MS};

/// A discrete pointer event already mapped to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// First contact with a cell.
    Press(GridPos),
    /// Pointer entered a cell while held.
    Drag(GridPos),
    /// Pointer lifted.
    Release,
}

/// Why a gesture was not forwarded to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    GameOver,
    /// A released chain is still waiting to commit.
    Clearing,
    /// Drag or release without a preceding press.
    NotSelecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    Ignored(IgnoreReason),
    Selection(SelectResult),
    /// Released with at most one dot selected; the selection was dropped.
    Cancelled,
    /// Released a committable chain; it commits on a later `tick`.
    ClearStarted { dots: u32 },
    /// Released a committable chain and it committed immediately.
    Committed(MoveSummary),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Selecting,
    Clearing { elapsed_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct GestureDriver {
    phase: Phase,
    clear_delay_ms: u32,
}

impl GestureDriver {
    pub fn new() -> Self {
        Self::with_clear_delay_ms(CLEAR_DELAY_MS)
    }

    pub fn with_clear_delay_ms(clear_delay_ms: u32) -> Self {
        Self {
            phase: Phase::Idle,
            clear_delay_ms,
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.phase == Phase::Selecting
    }

    pub fn is_clearing(&self) -> bool {
        matches!(self.phase, Phase::Clearing { .. })
    }

    /// Milliseconds spent waiting on the current clear, if one is pending.
    pub fn clearing_elapsed_ms(&self) -> Option<u32> {
        match self.phase {
            Phase::Clearing { elapsed_ms } => Some(elapsed_ms),
            _ => None,
        }
    }

    /// Drop any pending phase. Pair with `GameEngine::new_game`.
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
    }

    pub fn handle(&mut self, engine: &mut GameEngine, gesture: Gesture) -> GestureOutcome {
        if engine.is_game_over() {
            debug!(?gesture, "gesture ignored: game over");
            return GestureOutcome::Ignored(IgnoreReason::GameOver);
        }
        if self.is_clearing() {
            debug!(?gesture, "gesture ignored: clear in flight");
            return GestureOutcome::Ignored(IgnoreReason::Clearing);
        }

        match gesture {
            Gesture::Press(pos) => {
                self.phase = Phase::Selecting;
                GestureOutcome::Selection(engine.process_dot(pos))
            }
            Gesture::Drag(pos) => {
                if self.phase != Phase::Selecting {
                    return GestureOutcome::Ignored(IgnoreReason::NotSelecting);
                }
                GestureOutcome::Selection(engine.process_dot(pos))
            }
            Gesture::Release => {
                if self.phase != Phase::Selecting {
                    return GestureOutcome::Ignored(IgnoreReason::NotSelecting);
                }
                self.release(engine)
            }
        }
    }

    fn release(&mut self, engine: &mut GameEngine) -> GestureOutcome {
        let len = engine.selected_len();
        if len <= 1 {
            engine.clear_selected_dots();
            self.phase = Phase::Idle;
            return GestureOutcome::Cancelled;
        }

        if self.clear_delay_ms == 0 {
            self.phase = Phase::Idle;
            return match commit(engine) {
                Some(summary) => GestureOutcome::Committed(summary),
                None => GestureOutcome::Cancelled,
            };
        }

        self.phase = Phase::Clearing { elapsed_ms: 0 };
        GestureOutcome::ClearStarted { dots: len as u32 }
    }

    /// Advance a pending clear; commits once the clear delay has elapsed.
    pub fn tick(&mut self, engine: &mut GameEngine, elapsed_ms: u32) -> Option<MoveSummary> {
        let Phase::Clearing { elapsed_ms: waited } = self.phase else {
            return None;
        };

        let waited = waited.saturating_add(elapsed_ms);
        if waited < self.clear_delay_ms {
            self.phase = Phase::Clearing { elapsed_ms: waited };
            return None;
        }

        self.phase = Phase::Idle;
        commit(engine)
    }
}

impl Default for GestureDriver {
    fn default() -> Self {
        Self::new()
    }
}

/// Commit the engine's chain, dropping it if the engine refuses.
fn commit(engine: &mut GameEngine) -> Option<MoveSummary> {
    let summary = engine.finish_move();
    if summary.is_none() {
        engine.clear_selected_dots();
    }
    summary
}
