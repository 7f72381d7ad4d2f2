//! Game engine module - grid, selection chain and move lifecycle
//!
//! This module ties together the grid, the color source and the session
//! counters. It implements the selection state machine driven by gesture
//! events and the gravity refill that commits a move.
//!
//! A move runs `Idle -> Selecting -> Cancelled | Committing -> Idle`:
//! `process_dot` grows or backtracks the chain, `clear_selected_dots` cancels
//! it, and `finish_move` commits it. The engine does not refuse input once
//! the game is over, and it has no notion of animation; both are caller
//! obligations (see the gesture driver in `dots-input`).

use arrayvec::ArrayVec;
use tracing::{debug, trace, warn};

use crate::dot::Dot;
use crate::grid::{ColorLayout, Grid};
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GridPos, MoveSummary, SelectResult, CELL_COUNT, GRID_SIZE, INIT_MOVES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameEngine {
    grid: Grid,
    /// Positions of the selected dots, in selection order.
    chain: ArrayVec<GridPos, CELL_COUNT>,
    rng: SimpleRng,
    /// Monotonic game id (increments on `new_game`).
    game_id: u32,
    score: u32,
    moves_left: u32,
}

impl GameEngine {
    /// Create an engine and deal a random board from `seed`
    pub fn new(seed: u32) -> Self {
        let mut engine = Self::from_colors(&Grid::default().colors(), seed);
        engine.deal();
        engine
    }

    /// Create an engine over a fixed color layout
    ///
    /// Counters start as in a fresh game. Refills still draw from `seed`.
    pub fn from_colors(layout: &ColorLayout, seed: u32) -> Self {
        Self {
            grid: Grid::from_colors(layout),
            chain: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            game_id: 0,
            score: 0,
            moves_left: INIT_MOVES,
        }
    }

    /// Reset counters and selection and deal a fresh random board
    ///
    /// Safe to call mid-move; any in-progress chain is discarded.
    pub fn new_game(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.deal();
        debug!(game_id = self.game_id, seed = self.rng.state(), "new game");
    }

    fn deal(&mut self) {
        self.score = 0;
        self.moves_left = INIT_MOVES;
        self.chain.clear();
        self.grid.clear_selection();
        self.grid.randomize(&mut self.rng);
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    pub fn is_game_over(&self) -> bool {
        self.moves_left == 0
    }

    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Get the dot at (row, col), or None if either coordinate is off the grid
    pub fn get_dot(&self, row: i8, col: i8) -> Option<&Dot> {
        self.grid.get(row, col)
    }

    pub fn dot_at(&self, pos: GridPos) -> Option<&Dot> {
        self.grid.at(pos)
    }

    /// Offer the dot at `pos` to the selection chain
    ///
    /// - Empty chain: the dot is always accepted.
    /// - Unselected dot: accepted if it matches the tail's color and is
    ///   adjacent to the tail.
    /// - Selected dot: if it is the second-to-last entry, the tail is
    ///   popped (backtrack). Any other selected dot is rejected.
    ///
    /// Positions off the grid are rejected. Never changes score or moves.
    pub fn process_dot(&mut self, pos: GridPos) -> SelectResult {
        let Some(dot) = self.grid.at(pos).copied() else {
            return SelectResult::Rejected;
        };

        let Some(&tail_pos) = self.chain.last() else {
            return self.select(pos);
        };

        if !dot.is_selected() {
            let Some(tail) = self.grid.at(tail_pos) else {
                return SelectResult::Rejected;
            };
            if dot.color() == tail.color() && dot.is_adjacent(tail) {
                return self.select(pos);
            }
            return SelectResult::Rejected;
        }

        let len = self.chain.len();
        if len > 1 && self.chain[len - 2] == pos {
            if let Some(popped) = self.chain.pop() {
                if let Some(dot) = self.grid.at_mut(popped) {
                    dot.set_selected(false);
                }
                trace!(row = popped.row, col = popped.col, len = len - 1, "backtrack");
            }
            return SelectResult::Removed;
        }

        SelectResult::Rejected
    }

    fn select(&mut self, pos: GridPos) -> SelectResult {
        if self.chain.try_push(pos).is_err() {
            return SelectResult::Rejected;
        }
        if let Some(dot) = self.grid.at_mut(pos) {
            dot.set_selected(true);
        }
        trace!(row = pos.row, col = pos.col, len = self.chain.len(), "dot selected");
        SelectResult::Added
    }

    /// Unselect every chain member and empty the chain
    pub fn clear_selected_dots(&mut self) {
        for &pos in &self.chain {
            if let Some(dot) = self.grid.at_mut(pos) {
                dot.set_selected(false);
            }
        }
        self.chain.clear();
    }

    /// Commit the current chain
    ///
    /// Returns `None` without touching anything when the chain holds fewer
    /// than two dots or no moves are left. Otherwise every selected slot is
    /// cleared column by column, top row first, letting the colors above
    /// fall in and refilling row 0 from the RNG.
    pub fn finish_move(&mut self) -> Option<MoveSummary> {
        if self.chain.len() <= 1 {
            return None;
        }
        if self.is_game_over() {
            warn!(len = self.chain.len(), "finish_move called with no moves left");
            return None;
        }

        // Row order within a column matters: clearing a lower slot first
        // would shift an upper selected color down before it is removed.
        let mut cleared = self.chain.clone();
        cleared.sort_unstable_by_key(|pos| (pos.col, pos.row));
        for &pos in &cleared {
            self.grid.collapse(pos, &mut self.rng);
        }

        let count = cleared.len() as u32;
        self.score = self.score.saturating_add(count);
        self.moves_left = self.moves_left.saturating_sub(1);
        self.clear_selected_dots();

        debug!(
            cleared = count,
            score = self.score,
            moves_left = self.moves_left,
            "move committed"
        );

        Some(MoveSummary {
            cleared: count,
            score: self.score,
            moves_left: self.moves_left,
        })
    }

    /// Selected dots in selection order
    pub fn selected_dots(&self) -> impl ExactSizeIterator<Item = &Dot> + '_ {
        self.grid.dots_at(&self.chain)
    }

    pub fn selected_positions(&self) -> &[GridPos] {
        &self.chain
    }

    pub fn selected_len(&self) -> usize {
        self.chain.len()
    }

    pub fn last_selected_dot(&self) -> Option<&Dot> {
        self.chain.last().and_then(|&pos| self.grid.at(pos))
    }

    /// For each column with a selection, the selected dot with the greatest row
    ///
    /// Ordered by column. The engine does not use this; it tells the
    /// presentation layer how far each column will fall.
    pub fn lowest_selected_dots(&self) -> ArrayVec<&Dot, { GRID_SIZE as usize }> {
        let mut lowest: [Option<GridPos>; GRID_SIZE as usize] = [None; GRID_SIZE as usize];
        for &pos in &self.chain {
            let slot = &mut lowest[pos.col as usize];
            if slot.map_or(true, |current| pos.row > current.row) {
                *slot = Some(pos);
            }
        }

        lowest
            .iter()
            .flatten()
            .filter_map(|&pos| self.grid.at(pos))
            .collect()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.grid.write_colors(&mut out.colors);
        for dot in self.grid.dots() {
            out.selected[dot.row() as usize][dot.col() as usize] = dot.is_selected();
        }
        out.path.clear();
        out.path.extend(self.chain.iter().copied());
        out.lowest_selected.clear();
        out.lowest_selected
            .extend(self.lowest_selected_dots().iter().map(|dot| dot.pos()));
        out.score = self.score;
        out.moves_left = self.moves_left;
        out.game_over = self.is_game_over();
        out.game_id = self.game_id;
        out.seed = self.rng.state();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DotColor;

    /// Build a layout from one string per row, one color letter per column.
    fn layout(rows: [&str; 6]) -> ColorLayout {
        let mut out = [[DotColor::Red; 6]; 6];
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                out[r][c] = DotColor::from_str(&ch.to_string()).unwrap();
            }
        }
        out
    }

    fn board() -> GameEngine {
        GameEngine::from_colors(
            &layout([
                "RGBYPR", //
                "RGBYPG", //
                "RRBYPB", //
                "GGGYPY", //
                "BYRRRP", //
                "PYGBRP", //
            ]),
            42,
        )
    }

    fn p(row: u8, col: u8) -> GridPos {
        GridPos::new(row, col)
    }

    fn assert_flags_match_chain(engine: &GameEngine) {
        for dot in engine.grid().dots() {
            let in_chain = engine.selected_positions().contains(&dot.pos());
            assert_eq!(
                dot.is_selected(),
                in_chain,
                "flag/chain mismatch at {:?}",
                dot.pos()
            );
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = GameEngine::new(12345);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves_left(), INIT_MOVES);
        assert!(!engine.is_game_over());
        assert_eq!(engine.selected_len(), 0);
        assert!(engine.last_selected_dot().is_none());
        assert!(engine.grid().dots().iter().all(|d| !d.is_selected()));
    }

    #[test]
    fn test_same_seed_deals_same_board() {
        let a = GameEngine::new(777);
        let b = GameEngine::new(777);
        assert_eq!(a.grid(), b.grid());

        let c = GameEngine::new(778);
        assert_ne!(a.grid(), c.grid());
    }

    #[test]
    fn test_get_dot_bounds() {
        let engine = board();
        assert_eq!(engine.get_dot(0, 0).unwrap().color(), DotColor::Red);
        assert_eq!(engine.get_dot(5, 5).unwrap().pos(), p(5, 5));
        assert!(engine.get_dot(-1, 0).is_none());
        assert!(engine.get_dot(0, -1).is_none());
        assert!(engine.get_dot(6, 0).is_none());
        assert!(engine.get_dot(0, 6).is_none());
    }

    #[test]
    fn test_first_dot_always_added() {
        let mut engine = board();
        assert_eq!(engine.process_dot(p(3, 4)), SelectResult::Added);
        assert_eq!(engine.selected_positions(), &[p(3, 4)]);
        assert!(engine.dot_at(p(3, 4)).unwrap().is_selected());
    }

    #[test]
    fn test_adjacent_same_color_pair() {
        let mut engine = board();
        assert_eq!(engine.process_dot(p(0, 0)), SelectResult::Added);
        assert_eq!(engine.process_dot(p(1, 0)), SelectResult::Added);
        assert_eq!(engine.selected_positions(), &[p(0, 0), p(1, 0)]);
        assert_eq!(engine.last_selected_dot().unwrap().pos(), p(1, 0));
        assert_flags_match_chain(&engine);
    }

    #[test]
    fn test_reject_different_color() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        // (0, 1) is green, tail is red
        assert_eq!(engine.process_dot(p(0, 1)), SelectResult::Rejected);
        assert_eq!(engine.selected_positions(), &[p(0, 0)]);
        assert!(!engine.dot_at(p(0, 1)).unwrap().is_selected());
    }

    #[test]
    fn test_reject_non_adjacent_same_color() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        // (2, 0) is red but two rows away; (0, 5) is red and far away
        assert_eq!(engine.process_dot(p(2, 0)), SelectResult::Rejected);
        assert_eq!(engine.process_dot(p(0, 5)), SelectResult::Rejected);
        assert_eq!(engine.selected_positions(), &[p(0, 0)]);
    }

    #[test]
    fn test_reject_diagonal() {
        let mut engine = board();
        engine.process_dot(p(1, 0));
        // (2, 1) is red and diagonal to (1, 0)
        assert_eq!(engine.process_dot(p(2, 1)), SelectResult::Rejected);
        assert_eq!(engine.selected_len(), 1);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));
        let before = engine.snapshot();

        for _ in 0..5 {
            assert_eq!(engine.process_dot(p(0, 1)), SelectResult::Rejected);
        }
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_off_grid_is_rejected() {
        let mut engine = board();
        assert_eq!(engine.process_dot(p(6, 0)), SelectResult::Rejected);
        assert_eq!(engine.selected_len(), 0);
    }

    #[test]
    fn test_backtrack_pops_tail() {
        let mut engine = board();
        // A=(0,0) B=(1,0) C=(2,0), all red
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));
        engine.process_dot(p(2, 0));

        assert_eq!(engine.process_dot(p(1, 0)), SelectResult::Removed);
        assert_eq!(engine.selected_positions(), &[p(0, 0), p(1, 0)]);
        assert!(engine.dot_at(p(1, 0)).unwrap().is_selected());
        assert!(!engine.dot_at(p(2, 0)).unwrap().is_selected());
        assert_flags_match_chain(&engine);
    }

    #[test]
    fn test_reentering_earlier_chain_member_is_rejected() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));
        engine.process_dot(p(2, 0));
        engine.process_dot(p(2, 1));

        // (0, 0) is selected but not second-to-last
        assert_eq!(engine.process_dot(p(0, 0)), SelectResult::Rejected);
        // Tail itself
        assert_eq!(engine.process_dot(p(2, 1)), SelectResult::Rejected);
        assert_eq!(engine.selected_len(), 4);
    }

    #[test]
    fn test_single_dot_reentry_is_rejected() {
        let mut engine = board();
        engine.process_dot(p(4, 2));
        assert_eq!(engine.process_dot(p(4, 2)), SelectResult::Rejected);
        assert_eq!(engine.selected_positions(), &[p(4, 2)]);
        assert!(engine.dot_at(p(4, 2)).unwrap().is_selected());
    }

    #[test]
    fn test_backtrack_then_extend_elsewhere() {
        let mut engine = board();
        engine.process_dot(p(2, 0));
        engine.process_dot(p(2, 1));
        assert_eq!(engine.process_dot(p(2, 0)), SelectResult::Removed);
        assert_eq!(engine.process_dot(p(1, 0)), SelectResult::Added);
        assert_eq!(engine.selected_positions(), &[p(2, 0), p(1, 0)]);
        assert_flags_match_chain(&engine);
    }

    #[test]
    fn test_process_dot_never_touches_counters() {
        let mut engine = board();
        for pos in [p(0, 0), p(1, 0), p(2, 0), p(1, 0), p(5, 5)] {
            engine.process_dot(pos);
            assert_eq!(engine.score(), 0);
            assert_eq!(engine.moves_left(), INIT_MOVES);
        }
    }

    #[test]
    fn test_clear_selected_dots() {
        let mut engine = board();
        engine.process_dot(p(4, 2));
        engine.process_dot(p(4, 3));
        engine.process_dot(p(4, 4));
        let colors = engine.grid().colors();

        engine.clear_selected_dots();
        assert_eq!(engine.selected_len(), 0);
        assert!(engine.grid().dots().iter().all(|d| !d.is_selected()));
        assert_eq!(engine.grid().colors(), colors);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves_left(), INIT_MOVES);
    }

    #[test]
    fn test_finish_move_single_dot_is_noop() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        let colors = engine.grid().colors();
        let seed = engine.seed();

        assert_eq!(engine.finish_move(), None);
        assert_eq!(engine.grid().colors(), colors);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves_left(), INIT_MOVES);
        assert_eq!(engine.seed(), seed);
        // Caller is expected to cancel instead
        assert_eq!(engine.selected_positions(), &[p(0, 0)]);
    }

    #[test]
    fn test_finish_move_empty_chain_is_noop() {
        let mut engine = board();
        assert_eq!(engine.finish_move(), None);
        assert_eq!(engine.moves_left(), INIT_MOVES);
    }

    #[test]
    fn test_vertical_triple_in_column_zero() {
        use DotColor::*;
        let mut engine = board();
        engine.process_dot(p(2, 0));
        engine.process_dot(p(1, 0));
        engine.process_dot(p(0, 0));

        let mut rng = SimpleRng::new(42);
        let f1 = rng.next_color();
        let f2 = rng.next_color();
        let f3 = rng.next_color();

        let summary = engine.finish_move().unwrap();
        assert_eq!(
            summary,
            MoveSummary {
                cleared: 3,
                score: 3,
                moves_left: INIT_MOVES - 1
            }
        );

        // Three fresh colors stacked at the top, rows below untouched
        assert_eq!(engine.grid().column(0).unwrap(), [f3, f2, f1, Green, Blue, Purple]);
        for col in 1..6 {
            assert_eq!(
                engine.grid().column(col).unwrap(),
                board().grid().column(col).unwrap()
            );
        }
        assert_eq!(engine.score(), 3);
        assert_eq!(engine.moves_left(), INIT_MOVES - 1);
        assert_eq!(engine.selected_len(), 0);
        assert!(engine.grid().dots().iter().all(|d| !d.is_selected()));
    }

    #[test]
    fn test_gap_in_column_cascades_in_row_order() {
        use DotColor::*;
        let mut engine = GameEngine::from_colors(
            &layout([
                "GGGGGG", //
                "BRBBBB", //
                "BRRRBB", //
                "BBBRBB", //
                "BRRRBB", //
                "BBBBBB", //
            ]),
            9,
        );
        // U shape through column 1 and column 3:
        // (1,1) (2,1) (2,2) (2,3) (3,3) (4,3) (4,2) (4,1)
        for pos in [p(1, 1), p(2, 1), p(2, 2), p(2, 3), p(3, 3), p(4, 3), p(4, 2), p(4, 1)] {
            assert_eq!(engine.process_dot(pos), SelectResult::Added, "{:?}", pos);
        }

        // Refills are drawn in (col, row) order
        let mut rng = SimpleRng::new(9);
        let fresh: Vec<DotColor> = (0..8).map(|_| rng.next_color()).collect();

        engine.finish_move().unwrap();

        // Column 1 cleared rows 1, 2, 4 (fresh[0..3]); the surviving green
        // and blue fall past the cleared slots below them.
        assert_eq!(
            engine.grid().column(1).unwrap(),
            [fresh[2], fresh[1], fresh[0], Green, Blue, Blue]
        );
        // Column 2 cleared rows 2, 4 (fresh[3..5])
        assert_eq!(
            engine.grid().column(2).unwrap(),
            [fresh[4], fresh[3], Green, Blue, Blue, Blue]
        );
        // Column 3 cleared rows 2, 3, 4 (fresh[5..8])
        assert_eq!(
            engine.grid().column(3).unwrap(),
            [fresh[7], fresh[6], fresh[5], Green, Blue, Blue]
        );
        assert_eq!(engine.grid().column(0).unwrap(), [Green, Blue, Blue, Blue, Blue, Blue]);
        assert_eq!(engine.score(), 8);
    }

    #[test]
    fn test_horizontal_chain_refills_each_column_once() {
        use DotColor::*;
        let mut engine = board();
        // Row 4: (4,2) (4,3) (4,4) are red
        engine.process_dot(p(4, 2));
        engine.process_dot(p(4, 3));
        engine.process_dot(p(4, 4));

        let mut rng = SimpleRng::new(42);
        let fresh: Vec<DotColor> = (0..3).map(|_| rng.next_color()).collect();

        engine.finish_move().unwrap();
        assert_eq!(engine.grid().column(2).unwrap(), [fresh[0], Blue, Blue, Blue, Green, Green]);
        assert_eq!(engine.grid().column(3).unwrap(), [fresh[1], Yellow, Yellow, Yellow, Yellow, Blue]);
        assert_eq!(engine.grid().column(4).unwrap(), [fresh[2], Purple, Purple, Purple, Purple, Red]);
    }

    #[test]
    fn test_finish_move_when_game_over_is_noop() {
        let mut engine = GameEngine::from_colors(&[[DotColor::Red; 6]; 6], 1);
        // Rotate through column pairs so no column shifts often enough for a
        // refilled color to reach row 5.
        for i in 0..INIT_MOVES as u8 {
            let col = (i % 3) * 2;
            engine.process_dot(p(5, col));
            engine.process_dot(p(5, col + 1));
            assert!(engine.finish_move().is_some());
        }
        assert!(engine.is_game_over());

        assert_eq!(engine.process_dot(p(5, 2)), SelectResult::Added);
        assert_eq!(engine.process_dot(p(5, 3)), SelectResult::Added);
        let colors = engine.grid().colors();
        assert_eq!(engine.finish_move(), None);
        assert_eq!(engine.moves_left(), 0);
        assert_eq!(engine.score(), 2 * INIT_MOVES);
        assert_eq!(engine.grid().colors(), colors);
    }

    #[test]
    fn test_lowest_selected_dots() {
        let mut engine = board();
        for pos in [p(0, 0), p(1, 0), p(2, 0), p(2, 1)] {
            engine.process_dot(pos);
        }

        let lowest: Vec<GridPos> = engine.lowest_selected_dots().iter().map(|d| d.pos()).collect();
        assert_eq!(lowest, vec![p(2, 0), p(2, 1)]);
    }

    #[test]
    fn test_lowest_selected_dots_ignores_selection_order() {
        let mut engine = board();
        // Selected bottom-up; lowest in column 0 is still row 2
        for pos in [p(2, 0), p(1, 0), p(0, 0)] {
            engine.process_dot(pos);
        }
        let lowest: Vec<GridPos> = engine.lowest_selected_dots().iter().map(|d| d.pos()).collect();
        assert_eq!(lowest, vec![p(2, 0)]);
    }

    #[test]
    fn test_selected_dots_in_order() {
        let mut engine = board();
        for pos in [p(2, 1), p(2, 0), p(1, 0)] {
            engine.process_dot(pos);
        }
        let order: Vec<GridPos> = engine.selected_dots().map(|d| d.pos()).collect();
        assert_eq!(order, vec![p(2, 1), p(2, 0), p(1, 0)]);
        assert_eq!(engine.selected_dots().len(), 3);
        assert!(engine.selected_dots().all(|d| d.is_selected()));
    }

    #[test]
    fn test_new_game_resets_everything() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));
        engine.finish_move();
        engine.process_dot(p(4, 2));

        engine.new_game();
        assert_eq!(engine.game_id(), 1);
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.moves_left(), INIT_MOVES);
        assert_eq!(engine.selected_len(), 0);
        for row in 0..6 {
            for col in 0..6 {
                assert!(!engine.get_dot(row, col).unwrap().is_selected());
            }
        }
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = board();
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));

        let snap = engine.snapshot();
        assert_eq!(snap.colors, engine.grid().colors());
        assert_eq!(snap.path.as_slice(), &[p(0, 0), p(1, 0)]);
        assert_eq!(snap.lowest_selected.as_slice(), &[p(1, 0)]);
        assert!(snap.is_selected(p(0, 0)));
        assert!(!snap.is_selected(p(2, 0)));
        assert_eq!(snap.color_at(p(0, 1)), Some(DotColor::Green));
        assert_eq!(snap.color_at(p(6, 1)), None);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.moves_left, INIT_MOVES);
        assert!(snap.playable());
    }

    #[test]
    fn test_snapshot_into_reuses_buffer() {
        let mut engine = board();
        let mut snap = GameSnapshot::default();
        engine.process_dot(p(0, 0));
        engine.process_dot(p(1, 0));
        engine.snapshot_into(&mut snap);
        assert_eq!(snap.path.len(), 2);

        engine.clear_selected_dots();
        engine.snapshot_into(&mut snap);
        assert!(snap.path.is_empty());
        assert!(snap.lowest_selected.is_empty());
        assert!(snap.selected.iter().flatten().all(|s| !s));
    }
}
