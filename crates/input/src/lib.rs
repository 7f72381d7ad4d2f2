//! Input module (engine-facing).
//!
//! This crate sits between raw terminal events and the engine. It maps
//! `crossterm` events into [`Gesture`]s and session commands, and the
//! [`GestureDriver`] applies gestures to a borrowed
//! [`GameEngine`](crate::core::GameEngine) while enforcing the caller-side
//! rules the engine leaves to its users (game over, clear in flight).

pub mod gesture;
pub mod handler;
pub mod map;

pub use dots_core as core;
pub use dots_types as types;

pub use gesture::{Gesture, GestureDriver, GestureOutcome, IgnoreReason};
pub use handler::CursorInput;
pub use map::{handle_key_event, should_quit, PointerMapper, UiCommand};
