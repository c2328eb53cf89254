//! User-triggerable prompt actions.
//!
//! Every key binding resolves to an [`Action`]. Actions carry no parameters;
//! [`Action::to_command`] turns them into a core [`Command`] using the
//! session's page size.

use crate::event::Command;

/// Every action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    CursorTop,
    CursorBottom,
    Descend,
    Ascend,
    Submit,
    Abort,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::CursorUp,
        Action::CursorDown,
        Action::PageUp,
        Action::PageDown,
        Action::CursorTop,
        Action::CursorBottom,
        Action::Descend,
        Action::Ascend,
        Action::Submit,
        Action::Abort,
    ];

    /// Snake-case identifier used in `keymap.toml` (e.g. `"cursor_up"`).
    pub fn id(self) -> &'static str {
        match self {
            Self::CursorUp => "cursor_up",
            Self::CursorDown => "cursor_down",
            Self::PageUp => "page_up",
            Self::PageDown => "page_down",
            Self::CursorTop => "cursor_top",
            Self::CursorBottom => "cursor_bottom",
            Self::Descend => "descend",
            Self::Ascend => "ascend",
            Self::Submit => "submit",
            Self::Abort => "abort",
        }
    }

    /// Short description shown in the key hint line.
    pub fn description(self) -> &'static str {
        match self {
            Self::CursorUp => "up",
            Self::CursorDown => "down",
            Self::PageUp => "page up",
            Self::PageDown => "page down",
            Self::CursorTop => "top",
            Self::CursorBottom => "bottom",
            Self::Descend => "open folder",
            Self::Ascend => "parent",
            Self::Submit => "select",
            Self::Abort => "cancel",
        }
    }

    /// Looks up an action by its [`Action::id`].
    pub fn find_by_id(id: &str) -> Option<Action> {
        Self::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Converts the action into a core command.
    ///
    /// Page moves travel `page_size` rows; top/bottom use the largest distance
    /// and rely on the cursor clamping. Returns `None` for [`Action::Abort`],
    /// which ends the session outside the state machine.
    pub fn to_command(self, page_size: usize) -> Option<Command> {
        let page = isize::try_from(page_size).unwrap_or(isize::MAX);
        let cmd = match self {
            Self::CursorUp => Command::MoveCursor(-1),
            Self::CursorDown => Command::MoveCursor(1),
            Self::PageUp => Command::MoveCursor(-page),
            Self::PageDown => Command::MoveCursor(page),
            Self::CursorTop => Command::MoveCursor(isize::MIN),
            Self::CursorBottom => Command::MoveCursor(isize::MAX),
            Self::Descend => Command::Descend,
            Self::Ascend => Command::Ascend,
            Self::Submit => Command::Submit,
            Self::Abort => return None,
        };
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_round_trip() {
        for action in Action::ALL {
            assert_eq!(Action::find_by_id(action.id()), Some(action));
        }
        let mut ids: Vec<&str> = Action::ALL.iter().map(|a| a.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Action::ALL.len());
    }

    #[test]
    fn unknown_id_is_none() {
        assert_eq!(Action::find_by_id("delete"), None);
        assert_eq!(Action::find_by_id(""), None);
    }

    #[test]
    fn commands_for_movement() {
        assert_eq!(Action::CursorUp.to_command(10), Some(Command::MoveCursor(-1)));
        assert_eq!(Action::CursorDown.to_command(10), Some(Command::MoveCursor(1)));
        assert_eq!(Action::PageUp.to_command(7), Some(Command::MoveCursor(-7)));
        assert_eq!(Action::PageDown.to_command(7), Some(Command::MoveCursor(7)));
        assert_eq!(
            Action::CursorTop.to_command(7),
            Some(Command::MoveCursor(isize::MIN))
        );
        assert_eq!(
            Action::CursorBottom.to_command(7),
            Some(Command::MoveCursor(isize::MAX))
        );
    }

    #[test]
    fn commands_for_navigation() {
        assert_eq!(Action::Descend.to_command(10), Some(Command::Descend));
        assert_eq!(Action::Ascend.to_command(10), Some(Command::Ascend));
        assert_eq!(Action::Submit.to_command(10), Some(Command::Submit));
        assert_eq!(Action::Abort.to_command(10), None);
    }
}
