//! Dots (workspace facade crate).
//!
//! Re-exports the workspace crates as `dots_game::{core,input,term,types}`
//! and hosts the application-level configuration used by the `dots` binary.

pub mod config;

pub use dots_core as core;
pub use dots_input as input;
pub use dots_term as term;
pub use dots_types as types;

pub use config::{ConfigError, DotsConfig};
