//! # cowpipe Core
//!
//! Text in, talking cow out.
//!
//! This crate provides:
//! - Line preprocessing (tab expansion and padding to a rectangle)
//! - Speech balloon rendering
//! - The built-in figure catalog
//! - Reading a message from any buffered stream
//!
//! ```text
//!  ____________
//! < moo, world >
//!  ------------
//!          \  ^__^
//!           \ (oo)\_______
//!             (__)\       )\/\
//!                 ||----w |
//!                 ||     ||
//! ```

pub mod balloon;
pub mod error;
pub mod figures;
pub mod input;
pub mod lines;
pub mod speech;

pub use balloon::{render, render_block, LinePosition};
pub use error::{CoreError, Result};
pub use figures::{lookup_figure, Figure, DEFAULT_FIGURE, UNKNOWN_FIGURE};
pub use input::read_lines;
pub use lines::{expand_tabs, measure_max_width, normalize_width, MessageBlock};
pub use speech::say;

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
