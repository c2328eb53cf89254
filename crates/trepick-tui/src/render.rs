use ratatui::{text::Line, widgets::Paragraph, Frame};

use crate::app::{App, Outcome};
use crate::paginator::{is_paged, paginate};
use crate::ui::header::{answered_line, question_line, warning_line};
use crate::ui::listing::{empty_line, entry_lines, hint_line};

/// Rows the inline viewport needs: question, warning, listing page and hint.
pub fn viewport_height(page_size: usize) -> u16 {
    u16::try_from(page_size.saturating_add(3)).unwrap_or(u16::MAX)
}

/// Builds the full frame for the current prompt state.
pub fn build_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.state();
    let theme = app.theme();

    if let Outcome::Answered(path) = app.outcome() {
        return vec![answered_line(app.message(), path, theme)];
    }

    let mut lines = vec![question_line(app.message(), state.current_dir(), theme)];
    if state.invalid_selection() {
        lines.push(warning_line(theme));
    }

    let rows = entry_lines(state, theme);
    match state.selected_index() {
        Some(active) if !rows.is_empty() => {
            lines.extend_from_slice(paginate(&rows, active, app.page_size()));
        }
        _ => lines.push(empty_line(theme)),
    }

    lines.push(hint_line(
        app.keymap(),
        is_paged(rows.len(), app.page_size()),
        theme,
    ));
    lines
}

/// Paints the prompt into the whole frame area.
pub fn render(f: &mut Frame, app: &App) {
    let paragraph = Paragraph::new(build_lines(app));
    f.render_widget(paragraph, f.area());
}
