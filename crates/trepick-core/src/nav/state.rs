//! The navigation-and-selection state machine.
//!
//! [`NavState`] owns the current directory, its snapshot, the visible list,
//! the cursor and the invalid-selection flag. It is driven exclusively through
//! [`NavState::handle_command`], which consumes the state and returns the next
//! one, following the same immutable style as the rest of the crate.

use std::path::{Path, PathBuf};

use crate::config::settings::{PickerConfig, SelectionType};
use crate::error::{CoreError, CoreResult};
use crate::event::{Command, Event};
use crate::fs::entry::Entry;
use crate::nav::cursor::move_selected;
use crate::nav::filter::{visible_indices, ExtensionFilter};
use crate::nav::path::{parent_of, resolve_dir};
use crate::nav::snapshot::Snapshot;
use crate::nav::validity::check_valid_selection;

/// Lifecycle of a picker session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Accepting commands.
    Browsing,
    /// An answer was produced; no further commands are accepted.
    Answered,
}

/// State of one picker session.
///
/// When every entry of the current directory is filtered out the visible
/// list is empty and there is no selection: cursor moves and `Descend` are
/// no-ops, `Submit` raises the invalid-selection flag, and `Ascend` still
/// works so the user can leave.
#[derive(Debug, Clone)]
pub struct NavState {
    current_dir: PathBuf,
    snapshot: Snapshot,
    visible: Vec<String>,
    /// Snapshot position of each visible row; the cursor indexes this.
    rows: Vec<usize>,
    cursor: Option<usize>,
    invalid_selection: bool,
    status: Status,
    selection_type: SelectionType,
    filter: ExtensionFilter,
    only_show_matching: bool,
}

impl NavState {
    /// Validates `config` and lists its starting directory.
    ///
    /// A relative start path is resolved against `cwd`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidConfig`] if the configuration is rejected.
    /// - Any filesystem error from resolving or listing the start directory.
    pub fn new(config: &PickerConfig, cwd: &Path) -> CoreResult<Self> {
        config.validate()?;
        let start = resolve_dir(cwd, config.start_path())?;
        let snapshot = Snapshot::read(&start)?;

        let state = Self {
            current_dir: start.clone(),
            snapshot: Snapshot::default(),
            visible: Vec::new(),
            rows: Vec::new(),
            cursor: None,
            invalid_selection: false,
            status: Status::Browsing,
            selection_type: config.selection_type,
            filter: config.extension_filter(),
            only_show_matching: config.only_show_matching_extensions,
        };
        Ok(state.with_snapshot(start, snapshot))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Display strings of the entries the cursor ranges over.
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    /// Index of the highlighted row in [`Self::visible`], if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor
    }

    /// The entries behind [`Self::visible`], row for row.
    pub fn visible_entries(&self) -> impl Iterator<Item = &Entry> + '_ {
        let entries = self.snapshot.entries();
        self.rows.iter().filter_map(move |&i| entries.get(i))
    }

    /// The highlighted entry.
    pub fn selected_entry(&self) -> Option<&Entry> {
        let row = *self.rows.get(self.cursor?)?;
        self.snapshot.entries().get(row)
    }

    pub fn invalid_selection(&self) -> bool {
        self.invalid_selection
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn filter(&self) -> &ExtensionFilter {
        &self.filter
    }

    /// The chosen path once the session is answered.
    pub fn answer(&self) -> Option<&Path> {
        match self.status {
            Status::Answered => self.selected_entry().map(Entry::path),
            Status::Browsing => None,
        }
    }

    /// Applies one command and reports what the UI should do next.
    ///
    /// # Errors
    ///
    /// - [`CoreError::SessionFinished`] if the session was already answered.
    /// - Any filesystem error raised while re-listing a directory. These are
    ///   fatal to the session; no fallback directory is tried.
    pub fn handle_command(self, cmd: Command) -> CoreResult<(Self, Event)> {
        if self.status == Status::Answered {
            return Err(CoreError::SessionFinished);
        }

        match cmd {
            Command::MoveCursor(distance) => Ok((self.with_cursor_moved(distance), Event::Redraw)),
            Command::EnterDirectory(path) => {
                let target = resolve_dir(&self.current_dir, &path)?;
                Ok((self.enter_directory(target)?, Event::Redraw))
            }
            Command::Descend => Ok((self.descend()?, Event::Redraw)),
            Command::Ascend => {
                let parent = parent_of(&self.current_dir);
                Ok((self.enter_directory(parent)?, Event::Redraw))
            }
            Command::Submit => Ok(self.submit()),
        }
    }

    fn enter_directory(self, path: PathBuf) -> CoreResult<Self> {
        let snapshot = Snapshot::read(&path)?;
        Ok(self.with_snapshot(path, snapshot))
    }

    /// Replaces the listing and resets cursor and warning to a fresh view.
    fn with_snapshot(self, current_dir: PathBuf, snapshot: Snapshot) -> Self {
        let rows = visible_indices(&snapshot, &self.filter, self.only_show_matching);
        let visible: Vec<String> = rows
            .iter()
            .map(|&i| snapshot.entries()[i].display().to_owned())
            .collect();
        let cursor = if rows.is_empty() { None } else { Some(0) };

        tracing::debug!(
            dir = %current_dir.display(),
            entries = snapshot.len(),
            visible = visible.len(),
            "entered directory"
        );
        if visible.is_empty() && !snapshot.is_empty() {
            tracing::warn!(dir = %current_dir.display(), "every entry is filtered out");
        }

        Self {
            current_dir,
            snapshot,
            visible,
            rows,
            cursor,
            invalid_selection: false,
            ..self
        }
    }

    fn with_cursor_moved(self, distance: isize) -> Self {
        let Some(current) = self.cursor else {
            return self;
        };
        let cursor = move_selected(current, distance, self.visible.len());
        tracing::trace!(from = current, to = ?cursor, "cursor moved");
        Self { cursor, ..self }
    }

    fn descend(self) -> CoreResult<Self> {
        let target = self
            .selected_entry()
            .filter(|e| e.is_dir())
            .map(|e| e.path().to_path_buf());
        match target {
            Some(dir) => self.enter_directory(dir),
            None => Ok(self),
        }
    }

    fn submit(self) -> (Self, Event) {
        let answer = self
            .selected_entry()
            .filter(|e| check_valid_selection(e, self.selection_type, &self.filter))
            .map(|e| e.path().to_path_buf());

        match answer {
            Some(path) => {
                tracing::debug!(answer = %path.display(), "selection accepted");
                let state = Self {
                    status: Status::Answered,
                    ..self
                };
                (state, Event::Answered(path))
            }
            None => {
                tracing::debug!("selection rejected");
                let state = Self {
                    invalid_selection: true,
                    ..self
                };
                (state, Event::Redraw)
            }
        }
    }
}
