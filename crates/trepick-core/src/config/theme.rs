//! Theme configuration for the prompt.
//!
//! Colors are stored as strings (e.g. `"cyan"`, `"#0598bc"`) and converted
//! to terminal colors by the frontend at render time.

use serde::{Deserialize, Serialize};

/// Prompt colors, read from the `[theme]` table of the picker config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// The leading `?` of the question line.
    pub prefix_fg: String,
    /// Current directory shown after the question.
    pub directory_fg: String,
    /// Highlighted row that can be submitted or opened.
    pub highlight_fg: String,
    /// Highlighted row whose name is outside the allow-list.
    pub highlight_dimmed_fg: String,
    /// Rows whose name is outside the allow-list.
    pub dimmed_fg: String,
    /// The invalid-selection warning.
    pub warning_fg: String,
    /// The chosen path once answered.
    pub answer_fg: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            prefix_fg: "green".to_string(),
            directory_fg: "dark_gray".to_string(),
            highlight_fg: "#0598bc".to_string(),
            highlight_dimmed_fg: "#8dabb3".to_string(),
            dimmed_fg: "#8f8f8f".to_string(),
            warning_fg: "red".to_string(),
            answer_fg: "cyan".to_string(),
        }
    }
}
