//! File system abstractions for trepick.
//!
//! This module provides the [`entry::Entry`] type and the directory lister
//! ([`ops::read_directory`]).

pub mod entry;
pub mod ops;
