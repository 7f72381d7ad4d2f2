//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, gesture handling, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a square grid of dots:
//!
//! - **Size**: 6 x 6 (rows and columns indexed 0-5)
//! - **Row 0** is the top row; refills enter from there
//! - **Colors**: 5 distinct dot colors
//!
//! # Session Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INIT_MOVES` | 10 | Moves available in a fresh game |
//! | `TICK_MS` | 16 | Fixed timestep interval of the terminal loop (~60 FPS) |
//! | `CLEAR_DELAY_MS` | 180 | Default pause between release and committing a clear |
//!
//! # Examples
//!
//! ```
//! use dots_types::{DotColor, GridPos, GRID_SIZE, NUM_COLORS};
//!
//! // Colors map to and from a dense index
//! assert_eq!(DotColor::from_index(2), Some(DotColor::Blue));
//! assert_eq!(DotColor::Blue.index(), 2);
//! assert_eq!(DotColor::ALL.len(), NUM_COLORS as usize);
//!
//! // Positions know whether they are on the grid
//! assert!(GridPos::new(0, 5).in_bounds());
//! assert!(!GridPos::new(GRID_SIZE, 0).in_bounds());
//! ```

/// Grid side length in dots (6 rows, 6 columns)
pub const GRID_SIZE: u8 = 6;

/// Total number of dot slots on the grid
pub const CELL_COUNT: usize = (GRID_SIZE as usize) * (GRID_SIZE as usize);

/// Number of distinct dot colors
pub const NUM_COLORS: u8 = 5;

/// Moves available at the start of every game
pub const INIT_MOVES: u32 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default delay between releasing a chain and committing its clear (180ms)
pub const CLEAR_DELAY_MS: u32 = 180;


/// The dot colors
///
/// Colors are interchangeable for game rules; only equality matters.
/// The dense index (`0..NUM_COLORS`) is what the random source draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DotColor {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
}

impl DotColor {
    /// Every color, ordered by index
    pub const ALL: [DotColor; NUM_COLORS as usize] = [
        DotColor::Red,
        DotColor::Green,
        DotColor::Blue,
        DotColor::Yellow,
        DotColor::Purple,
    ];

    /// Look up a color by its dense index
    ///
    /// # Examples
    ///
    /// ```
    /// use dots_types::DotColor;
    ///
    /// assert_eq!(DotColor::from_index(0), Some(DotColor::Red));
    /// assert_eq!(DotColor::from_index(4), Some(DotColor::Purple));
    /// assert_eq!(DotColor::from_index(5), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn index(&self) -> u8 {
        match self {
            DotColor::Red => 0,
            DotColor::Green => 1,
            DotColor::Blue => 2,
            DotColor::Yellow => 3,
            DotColor::Purple => 4,
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(DotColor::Red),
            "green" | "g" => Some(DotColor::Green),
            "blue" | "b" => Some(DotColor::Blue),
            "yellow" | "y" => Some(DotColor::Yellow),
            "purple" | "p" => Some(DotColor::Purple),
            _ => None,
        }
    }
}

/// A (row, col) address on the grid
///
/// Row 0 is the top of the grid. A `GridPos` may point outside the grid;
/// lookups treat such positions as "no dot".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    pub row: u8,
    pub col: u8,
}

impl GridPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if the position addresses a real grid slot
    pub fn in_bounds(&self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }

    /// Strict 4-neighbour adjacency (Manhattan distance of exactly 1)
    ///
    /// Diagonal neighbours and the position itself are not adjacent.
    pub fn is_adjacent(&self, other: GridPos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

/// Outcome of offering a dot to the selection chain
///
/// - **Added**: The dot was appended to the chain
/// - **Rejected**: Nothing changed
/// - **Removed**: The chain tail was popped (backtrack)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectResult {
    Added,
    Rejected,
    Removed,
}

/// Engine-side summary of a committed move.
///
/// Returned by `finish_move` and surfaced by the gesture driver so the
/// presentation layer can refresh without re-deriving counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSummary {
    /// Number of dots cleared by the move
    pub cleared: u32,
    /// Score after the move
    pub score: u32,
    /// Moves remaining after the move
    pub moves_left: u32,
}
