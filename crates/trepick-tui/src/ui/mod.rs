//! Line builders for the prompt.
//!
//! Each sub-module turns a piece of prompt state into styled `ratatui` lines.

pub mod color;
pub mod header;
pub mod listing;
