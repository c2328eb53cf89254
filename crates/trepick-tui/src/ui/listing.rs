//! Listing rows of the prompt.
//!
//! A row is highlighted when it sits under the cursor. Files outside the
//! allow-list stay visible in a dimmed color unless they were hidden by the
//! filter already.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use trepick_core::action::Action;
use trepick_core::config::keymap::Keymap;
use trepick_core::config::theme::Theme;
use trepick_core::nav::state::NavState;

use crate::ui::color::parse_color;

pub const NO_ELIGIBLE_ENTRIES: &str = "(no eligible entries)";
pub const MORE_CHOICES_HINT: &str = "(Move up and down to reveal more choices)";

/// Builds one line per visible row, in listing order.
pub fn entry_lines(state: &NavState, theme: &Theme) -> Vec<Line<'static>> {
    let selected = state.selected_index();
    state
        .visible_entries()
        .enumerate()
        .map(|(i, entry)| {
            let eligible = state.filter().is_eligible(entry);
            entry_line(entry.display(), Some(i) == selected, eligible, theme)
        })
        .collect()
}

/// Styles a single row.
pub fn entry_line(display: &str, highlighted: bool, eligible: bool, theme: &Theme) -> Line<'static> {
    let style = match (highlighted, eligible) {
        (true, true) => Style::default()
            .fg(parse_color(&theme.highlight_fg))
            .add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(parse_color(&theme.highlight_dimmed_fg)),
        (false, true) => Style::default(),
        (false, false) => Style::default().fg(parse_color(&theme.dimmed_fg)),
    };
    let marker = if highlighted { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker, style),
        Span::styled(display.to_string(), style),
    ])
}

pub fn empty_line(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        NO_ELIGIBLE_ENTRIES,
        Style::default().fg(parse_color(&theme.dimmed_fg)),
    ))
}

/// The dimmed footer: the paging hint when the listing overflows, otherwise
/// the keys for opening, leaving and selecting.
pub fn hint_line(keymap: &Keymap, paged: bool, theme: &Theme) -> Line<'static> {
    let text = if paged {
        MORE_CHOICES_HINT.to_string()
    } else {
        [Action::Descend, Action::Ascend, Action::Submit]
            .into_iter()
            .filter_map(|action| {
                keymap
                    .keys_for_action(action)
                    .and_then(|keys| keys.first())
                    .map(|key| format!("{key} {}", action.description()))
            })
            .collect::<Vec<_>>()
            .join(" · ")
    };
    Line::from(Span::styled(
        text,
        Style::default().fg(parse_color(&theme.dimmed_fg)),
    ))
}
