//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. It renders engine snapshots
//! into a simple framebuffer and flushes that to a crossterm backend.
//!
//! Goals:
//! - Keep `core` free of any notion of screens or pixels
//! - Keep drawing and hit-testing in one place so they cannot disagree
//! - Compensate for terminal glyph aspect ratio (4 columns x 2 rows per dot)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use dots_core as core;
pub use dots_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{dot_rgb, GameView, Overlay, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
