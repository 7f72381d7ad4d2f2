//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the grid model, the chain-selection state machine and
//! the gravity refill. It has **zero dependencies** on UI, input devices, or
//! I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals and refills
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: The grid and the selection chain are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`dot`]: A single grid slot (position, color, selection flag)
//! - [`grid`]: 6x6 array of dots with the per-column collapse step
//! - [`engine`]: Selection chain, move commit, score and moves counters
//! - [`rng`]: Seeded color source
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! - **Chains**: Drag through 4-adjacent dots of one color
//! - **Backtrack**: Re-entering the second-to-last dot drops the last one
//! - **Clear**: Releasing a chain of two or more dots clears them; colors above
//!   fall into the gaps and new colors enter at the top
//! - **Scoring**: One point per cleared dot
//! - **Moves**: Ten committed moves per game
//!
//! # Example
//!
//! ```
//! use dots_core::{GameEngine, SelectResult};
//! use dots_core::types::{DotColor, GridPos, INIT_MOVES};
//!
//! let mut engine = GameEngine::from_colors(&[[DotColor::Blue; 6]; 6], 7);
//!
//! assert_eq!(engine.process_dot(GridPos::new(5, 0)), SelectResult::Added);
//! assert_eq!(engine.process_dot(GridPos::new(5, 1)), SelectResult::Added);
//! assert_eq!(engine.process_dot(GridPos::new(5, 0)), SelectResult::Removed);
//! assert_eq!(engine.process_dot(GridPos::new(4, 0)), SelectResult::Added);
//!
//! let summary = engine.finish_move().unwrap();
//! assert_eq!(summary.cleared, 2);
//! assert_eq!(engine.score(), 2);
//! assert_eq!(engine.moves_left(), INIT_MOVES - 1);
//! ```

pub mod dot;
pub mod engine;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use dots_types as types;

// Re-export commonly used types for convenience
pub use dot::Dot;
pub use engine::GameEngine;
pub use grid::{ColorLayout, Grid};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use types::{GridPos, MoveSummary, SelectResult};
