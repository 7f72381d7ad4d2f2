use arrayvec::ArrayVec;

use crate::grid::ColorLayout;
use crate::types::{DotColor, GridPos, CELL_COUNT, GRID_SIZE, INIT_MOVES};

const SIZE: usize = GRID_SIZE as usize;

/// Read-only copy of everything the presentation layer draws.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub colors: ColorLayout,
    pub selected: [[bool; SIZE]; SIZE],
    /// Selection chain in selection order (the connector path).
    pub path: ArrayVec<GridPos, CELL_COUNT>,
    /// Per column, the selected dot with the greatest row.
    pub lowest_selected: ArrayVec<GridPos, SIZE>,
    pub score: u32,
    pub moves_left: u32,
    pub game_over: bool,
    pub game_id: u32,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.colors = [[DotColor::Red; SIZE]; SIZE];
        self.selected = [[false; SIZE]; SIZE];
        self.path.clear();
        self.lowest_selected.clear();
        self.score = 0;
        self.moves_left = INIT_MOVES;
        self.game_over = false;
        self.game_id = 0;
        self.seed = 0;
    }

    pub fn color_at(&self, pos: GridPos) -> Option<DotColor> {
        pos.in_bounds()
            .then(|| self.colors[pos.row as usize][pos.col as usize])
    }

    pub fn is_selected(&self, pos: GridPos) -> bool {
        pos.in_bounds() && self.selected[pos.row as usize][pos.col as usize]
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            colors: [[DotColor::Red; SIZE]; SIZE],
            selected: [[false; SIZE]; SIZE],
            path: ArrayVec::new(),
            lowest_selected: ArrayVec::new(),
            score: 0,
            moves_left: INIT_MOVES,
            game_over: false,
            game_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}
