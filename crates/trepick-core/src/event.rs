//! Command and event types for communication between UI and core.
//!
//! The UI translates decoded key presses into [`Command`]s, which
//! [`crate::nav::state::NavState::handle_command`] applies one at a time and
//! answers with an [`Event`].

use std::path::PathBuf;

/// A navigation request from the UI.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor by a signed number of rows, clamped to the visible list.
    MoveCursor(isize),
    /// Re-list the given directory and make it current.
    EnterDirectory(PathBuf),
    /// Enter the highlighted entry if it is a directory.
    Descend,
    /// Move to the parent of the current directory.
    Ascend,
    /// Try to accept the highlighted entry as the answer.
    Submit,
}

/// What the UI should do after a command has been applied.
///
/// Events flow **Core → UI**.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The state changed (or was re-checked); repaint it.
    Redraw,
    /// The session is finished. Repaint once more, then hand the path to the caller.
    Answered(PathBuf),
}
