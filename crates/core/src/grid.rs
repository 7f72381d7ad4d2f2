//! Grid module - the fixed 6x6 array of dots
//!
//! Every slot always holds a dot; slots are never emptied, only recolored.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row 0 is the top of the grid.

use crate::dot::Dot;
use crate::rng::SimpleRng;
use crate::types::{DotColor, GridPos, CELL_COUNT, GRID_SIZE};

/// A full color layout, row-major (`layout[row][col]`)
pub type ColorLayout = [[DotColor; GRID_SIZE as usize]; GRID_SIZE as usize];

/// The game grid - `GRID_SIZE` x `GRID_SIZE` dots using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Flat array of dots, row-major order (row * GRID_SIZE + col)
    dots: [Dot; CELL_COUNT],
}

impl Grid {
    /// Create a grid with every dot set to `color`
    pub fn filled(color: DotColor) -> Self {
        let size = GRID_SIZE as usize;
        Self {
            dots: std::array::from_fn(|i| Dot::new((i / size) as u8, (i % size) as u8, color)),
        }
    }

    /// Create a grid from an explicit color layout
    pub fn from_colors(layout: &ColorLayout) -> Self {
        let mut grid = Self::filled(DotColor::Red);
        for dot in &mut grid.dots {
            dot.set_color(layout[dot.row() as usize][dot.col() as usize]);
        }
        grid
    }

    /// Flat index of an in-bounds (row, col)
    #[inline(always)]
    fn slot(row: usize, col: usize) -> usize {
        row * GRID_SIZE as usize + col
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= GRID_SIZE as i8 || col < 0 || col >= GRID_SIZE as i8 {
            return None;
        }
        Some(Self::slot(row as usize, col as usize))
    }

    #[inline(always)]
    fn pos_index(pos: GridPos) -> Option<usize> {
        pos.in_bounds()
            .then(|| Self::slot(pos.row as usize, pos.col as usize))
    }

    /// Get dot at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<&Dot> {
        Self::index(row, col).map(|idx| &self.dots[idx])
    }

    /// Get dot at a grid position
    /// Returns None if out of bounds
    pub fn at(&self, pos: GridPos) -> Option<&Dot> {
        Self::pos_index(pos).map(|idx| &self.dots[idx])
    }

    pub(crate) fn at_mut(&mut self, pos: GridPos) -> Option<&mut Dot> {
        Self::pos_index(pos).map(move |idx| &mut self.dots[idx])
    }

    /// Dots at `positions`, in the same order
    ///
    /// Every position must be in bounds; the selection chain only ever holds
    /// positions that resolved to a dot.
    pub(crate) fn dots_at<'a>(
        &'a self,
        positions: &'a [GridPos],
    ) -> impl ExactSizeIterator<Item = &'a Dot> + 'a {
        positions
            .iter()
            .map(move |pos| &self.dots[Self::slot(pos.row as usize, pos.col as usize)])
    }

    /// All dots in row-major order
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Give every dot an independent random color
    pub(crate) fn randomize(&mut self, rng: &mut SimpleRng) {
        for dot in &mut self.dots {
            dot.randomize_color(rng);
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        for dot in &mut self.dots {
            dot.set_selected(false);
        }
    }

    /// Remove the color at `pos` and let the column above fall into its place
    ///
    /// Every dot from `pos.row` up to row 1 takes the color of the dot
    /// directly above it, and row 0 of the column gets a fresh random color.
    /// Dots keep their coordinates; only colors move.
    /// Returns false if `pos` is out of bounds.
    pub(crate) fn collapse(&mut self, pos: GridPos, rng: &mut SimpleRng) -> bool {
        if !pos.in_bounds() {
            return false;
        }

        let col = pos.col as usize;
        for row in (1..=pos.row as usize).rev() {
            let above = self.dots[Self::slot(row - 1, col)].color();
            self.dots[Self::slot(row, col)].set_color(above);
        }
        self.dots[Self::slot(0, col)].randomize_color(rng);

        true
    }

    /// Copy the colors into a row-major layout
    pub fn colors(&self) -> ColorLayout {
        let mut layout = [[DotColor::Red; GRID_SIZE as usize]; GRID_SIZE as usize];
        self.write_colors(&mut layout);
        layout
    }

    pub fn write_colors(&self, out: &mut ColorLayout) {
        for dot in &self.dots {
            out[dot.row() as usize][dot.col() as usize] = dot.color();
        }
    }

    /// Colors of one column, top to bottom
    pub fn column(&self, col: u8) -> Option<[DotColor; GRID_SIZE as usize]> {
        if col >= GRID_SIZE {
            return None;
        }
        Some(std::array::from_fn(|row| {
            self.dots[Self::slot(row, col as usize)].color()
        }))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::filled(DotColor::Red)
    }
}
