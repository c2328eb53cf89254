use std::path::{Path, PathBuf};

use trepick_core::action::Action;
use trepick_core::config::keymap::Keymap;
use trepick_core::config::settings::PickerConfig;
use trepick_core::config::theme::Theme;
use trepick_core::event::Event;
use trepick_core::nav::state::NavState;

/// Whether the prompt has been painted at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase {
    NotYetRendered,
    Rendered,
}

/// How the session ended, if it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pending,
    Answered(PathBuf),
    Aborted,
}

/// View-level prompt state wrapping the core [`NavState`].
///
/// `NavState` handles listing, cursor and validation. This wrapper adds the
/// frontend concerns: the question text, page size, key bindings, colors,
/// render phase and the final outcome. All transitions consume `self` and
/// return a new `App`.
#[derive(Debug, Clone)]
pub struct App {
    state: NavState,
    message: String,
    page_size: usize,
    keymap: Keymap,
    theme: Theme,
    phase: RenderPhase,
    outcome: Outcome,
}

impl App {
    /// Builds the session for `config`, resolving a relative start path against `cwd`.
    pub fn new(config: &PickerConfig, keymap: Keymap, cwd: &Path) -> anyhow::Result<Self> {
        let state = NavState::new(config, cwd)?;
        Ok(Self {
            state,
            message: config.message().to_string(),
            page_size: config.page_size,
            keymap,
            theme: config.theme.clone(),
            phase: RenderPhase::NotYetRendered,
            outcome: Outcome::Pending,
        })
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn phase(&self) -> RenderPhase {
        self.phase
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Returns `true` once the session was answered or aborted.
    pub fn is_finished(&self) -> bool {
        !matches!(self.outcome, Outcome::Pending)
    }

    /// Marks the prompt as painted.
    pub fn with_rendered(self) -> Self {
        Self {
            phase: RenderPhase::Rendered,
            ..self
        }
    }

    /// Ends the session without an answer.
    pub fn with_aborted(self) -> Self {
        tracing::info!("prompt aborted");
        Self {
            outcome: Outcome::Aborted,
            ..self
        }
    }

    /// Runs a bound action against the navigation state.
    ///
    /// Filesystem errors from re-listing are returned to the caller and end
    /// the session.
    pub fn handle_action(self, action: Action) -> anyhow::Result<Self> {
        if self.is_finished() {
            return Ok(self);
        }
        let Some(cmd) = action.to_command(self.page_size) else {
            return Ok(self.with_aborted());
        };

        let (state, event) = self.state.handle_command(cmd)?;
        let outcome = match event {
            Event::Redraw => Outcome::Pending,
            Event::Answered(path) => {
                tracing::info!(answer = %path.display(), "prompt answered");
                Outcome::Answered(path)
            }
        };
        Ok(Self {
            state,
            outcome,
            ..self
        })
    }
}
