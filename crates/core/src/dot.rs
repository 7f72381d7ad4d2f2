//! Dot module - a single grid slot
//!
//! A dot's coordinates are fixed when the grid is built; only its color and
//! selection flag change during play. Mutation is crate-private so the engine
//! stays the only writer.

use crate::rng::SimpleRng;
use crate::types::{DotColor, GridPos};

/// One slot of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dot {
    row: u8,
    col: u8,
    color: DotColor,
    selected: bool,
}

impl Dot {
    pub(crate) fn new(row: u8, col: u8, color: DotColor) -> Self {
        Self {
            row,
            col,
            color,
            selected: false,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn pos(&self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    pub fn color(&self) -> DotColor {
        self.color
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Check if `other` is a 4-neighbour of this dot
    ///
    /// Diagonals and the dot itself are not adjacent.
    pub fn is_adjacent(&self, other: &Dot) -> bool {
        self.pos().is_adjacent(other.pos())
    }

    /// Assign a uniformly random color
    pub fn randomize_color(&mut self, rng: &mut SimpleRng) {
        self.color = rng.next_color();
    }

    pub(crate) fn set_color(&mut self, color: DotColor) {
        self.color = color;
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}
