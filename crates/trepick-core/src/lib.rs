//! trepick core library: UI-agnostic navigation and selection logic.
//!
//! `trepick-core` holds everything a file-or-folder prompt needs apart from
//! painting the terminal: directory listing, directories-first ordering,
//! extension filtering, cursor clamping, answer validation and the session
//! state machine. The terminal frontend (`trepick-tui`) drives it through
//! [`Command`]s and reacts to [`Event`]s.
//!
//! # Modules
//!
//! - [`fs`]: [`Entry`] and the directory lister.
//! - [`nav`]: snapshot, filter, cursor, validity and [`NavState`].
//! - [`config`]: TOML-based picker options and key bindings.
//! - [`action`]: bindable actions and their mapping onto commands.
//! - [`event`]: command and event types for UI ↔ core communication.
//! - [`error`]: unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod nav;

pub use action::Action;
pub use config::keymap::Keymap;
pub use config::settings::{PickerConfig, SelectionType};
pub use config::theme::Theme;
pub use error::{CoreError, CoreResult};
pub use event::{Command, Event};
pub use fs::entry::{Entry, DIR_MARKER};
pub use fs::ops::read_directory;
pub use nav::filter::{visible_indices, visible_list, ExtensionFilter};
pub use nav::snapshot::Snapshot;
pub use nav::state::{NavState, Status};
pub use nav::validity::check_valid_selection;
