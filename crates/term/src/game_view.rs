//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It also owns the inverse mapping, from a
//! terminal cell back to the grid cell drawn there, so pointer hit-testing
//! always agrees with what is on screen.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{DotColor, GridPos, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Presentation-only state the snapshot does not carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    /// Keyboard cursor, when keyboard input is in use.
    pub cursor: Option<GridPos>,
    /// A released chain is waiting to commit; selected dots are drawn fading.
    pub clearing: bool,
}

const BG: Rgb = Rgb::new(24, 24, 32);
const FRAME: Rgb = Rgb::new(200, 200, 200);
const PATH: Rgb = Rgb::new(240, 240, 240);

/// A lightweight terminal renderer for the dots grid.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x2 leaves a spacer column and row per cell for path connectors.
        Self {
            cell_w: 4,
            cell_h: 2,
        }
    }
}

impl GameView {
    fn frame_size(&self) -> (u16, u16) {
        (
            GRID_SIZE as u16 * self.cell_w + 2,
            GRID_SIZE as u16 * self.cell_h + 2,
        )
    }

    /// Top-left corner of the grid frame (border included).
    fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Top-left terminal cell of the block that draws `pos`.
    fn cell_origin(&self, viewport: Viewport, pos: GridPos) -> (u16, u16) {
        let (ox, oy) = self.origin(viewport);
        (
            ox + 1 + pos.col as u16 * self.cell_w,
            oy + 1 + pos.row as u16 * self.cell_h,
        )
    }

    /// The grid cell drawn at terminal position (x, y), if any.
    pub fn cell_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<GridPos> {
        let (ox, oy) = self.origin(viewport);
        let dx = x.checked_sub(ox + 1)?;
        let dy = y.checked_sub(oy + 1)?;
        let pos = GridPos::new((dy / self.cell_h) as u8, (dx / self.cell_w) as u8);
        pos.in_bounds().then_some(pos)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let (ox, oy) = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let bg = CellStyle::fg(FRAME).with_bg(BG);
        fb.fill_rect(ox + 1, oy + 1, frame_w - 2, frame_h - 2, ' ', bg);
        draw_border(fb, ox, oy, frame_w, frame_h, CellStyle::fg(FRAME));

        self.draw_path(fb, snap, viewport);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = GridPos::new(row, col);
                self.draw_dot(fb, snap, overlay, viewport, pos);
            }
        }

        if let Some(cursor) = overlay.cursor {
            let (x, y) = self.cell_origin(viewport, cursor);
            let style = CellStyle::fg(PATH).with_bg(BG).bold();
            fb.put_char(x, y, '[', style);
            fb.put_char(x + 2, y, ']', style);
        }

        self.draw_status(fb, snap, viewport, ox, oy, frame_w);

        if snap.game_over {
            let text = "GAME OVER";
            let x = ox + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
            fb.put_str(x, oy + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, overlay, viewport, &mut fb);
        fb
    }

    fn draw_dot(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        overlay: Overlay,
        viewport: Viewport,
        pos: GridPos,
    ) {
        let Some(color) = snap.color_at(pos) else {
            return;
        };
        let (x, y) = self.cell_origin(viewport, pos);
        let mut style = CellStyle::fg(dot_rgb(color)).with_bg(BG);
        let glyph = if snap.is_selected(pos) {
            style = style.bold();
            if overlay.clearing {
                style = style.dim();
            }
            '◉'
        } else {
            '●'
        };
        fb.put_char(x + 1, y, glyph, style);
    }

    /// Connectors between consecutive path dots, drawn in the spacer cells.
    fn draw_path(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
        let style = CellStyle::fg(PATH).with_bg(BG).bold();
        for pair in snap.path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let first = if (b.row, b.col) < (a.row, a.col) { b } else { a };
            let (x, y) = self.cell_origin(viewport, first);
            if a.row == b.row {
                for dx in 2..self.cell_w + 1 {
                    fb.put_char(x + dx, y, '─', style);
                }
            } else {
                for dy in 1..self.cell_h {
                    fb.put_char(x + 1, y + dy, '│', style);
                }
            }
        }
    }

    fn draw_status(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        ox: u16,
        oy: u16,
        frame_w: u16,
    ) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let panel_x = ox.saturating_add(frame_w).saturating_add(2);
        if panel_x.saturating_add(8) <= viewport.width {
            fb.put_str(panel_x, oy, "SCORE", label);
            fb.put_str(panel_x, oy + 1, &snap.score.to_string(), value);
            fb.put_str(panel_x, oy + 3, "MOVES", label);
            fb.put_str(panel_x, oy + 4, &snap.moves_left.to_string(), value);
            fb.put_str(panel_x, oy + 6, "CHAIN", label);
            fb.put_str(panel_x, oy + 7, &snap.path.len().to_string(), value);
        } else if oy > 0 {
            let line = format!("score {}  moves {}", snap.score, snap.moves_left);
            fb.put_str(ox, oy.saturating_sub(1), &line, value);
        }

        let help = "drag: select  n: new game  q: quit";
        let (_, frame_h) = self.frame_size();
        fb.put_str(ox, oy + frame_h, help, value.dim());
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

pub fn dot_rgb(color: DotColor) -> Rgb {
    match color {
        DotColor::Red => Rgb::new(230, 80, 70),
        DotColor::Green => Rgb::new(90, 210, 110),
        DotColor::Blue => Rgb::new(80, 140, 240),
        DotColor::Yellow => Rgb::new(240, 210, 70),
        DotColor::Purple => Rgb::new(170, 100, 220),
    }
}
