//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `draw` - Render the dragon curve as SVG, optionally rasterized to PNG
//! - `coords` - Dump curve coordinates as plain text or JSON
//! - `info` - Show the fold/corner arithmetic for a fold count
//! - `gradients` - List available color gradients

pub mod common;
pub mod coords;
pub mod draw;
pub mod gradients;
pub mod info;
pub mod render;

pub use coords::cmd_coords;
pub use draw::cmd_draw;
pub use gradients::cmd_gradients;
pub use info::cmd_info;
