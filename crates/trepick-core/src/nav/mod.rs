//! Navigation logic for trepick.
//!
//! Leaf first: [`snapshot`] groups a listing directories-first, [`filter`]
//! derives the visible list, [`cursor`] clamps movement, [`validity`] gates
//! the answer, and [`state`] ties them together into the session state machine.

pub mod cursor;
pub mod filter;
pub mod path;
pub mod snapshot;
pub mod state;
pub mod validity;
