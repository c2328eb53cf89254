use std::path::Path;

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use trepick_core::config::theme::Theme;

use crate::ui::color::parse_color;

pub const INVALID_SELECTION: &str = "Invalid selection. Please choose another option.";

/// The `? <message> <dir>` line shown while browsing.
pub fn question_line(message: &str, current_dir: &Path, theme: &Theme) -> Line<'static> {
    let dir = current_dir.display().to_string();
    prompt_line(message, dir, parse_color(&theme.directory_fg), theme)
}

/// The `? <message> <answer>` line left in the scrollback after submit.
pub fn answered_line(message: &str, answer: &Path, theme: &Theme) -> Line<'static> {
    let answer = answer.display().to_string();
    prompt_line(message, answer, parse_color(&theme.answer_fg), theme)
}

pub fn warning_line(theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        INVALID_SELECTION,
        Style::default().fg(parse_color(&theme.warning_fg)),
    ))
}

fn prompt_line(
    message: &str,
    tail: String,
    tail_color: ratatui::style::Color,
    theme: &Theme,
) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            "? ",
            Style::default()
                .fg(parse_color(&theme.prefix_fg))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(tail, Style::default().fg(tail_color)),
    ])
}
