//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"Space"`, `"Esc"`) to [`Action`]
//! values. The defaults follow the classic prompt keys (arrows, `Space` to
//! open a folder, `Esc` for the parent, `Enter` to select) plus vim-style
//! letters.
//!
//! TOML files use string action identifiers (e.g. `"cursor_down"`); these are
//! resolved via [`Action::find_by_id`] at load time.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::{CoreError, CoreResult};

/// Raw TOML representation, deserialized first, then resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawKeymap {
    #[serde(default)]
    bindings: HashMap<String, String>,
}

/// Complete set of key bindings.
///
/// Stores bindings as a `HashMap<String, Action>` for O(1) lookup.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → list of key strings (for the hint line).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Movement
        bindings.insert("Up".to_string(), Action::CursorUp);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("Down".to_string(), Action::CursorDown);
        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("PageUp".to_string(), Action::PageUp);
        bindings.insert("PageDown".to_string(), Action::PageDown);
        bindings.insert("Home".to_string(), Action::CursorTop);
        bindings.insert("g".to_string(), Action::CursorTop);
        bindings.insert("End".to_string(), Action::CursorBottom);
        bindings.insert("G".to_string(), Action::CursorBottom);

        // Directory changes
        bindings.insert("Space".to_string(), Action::Descend);
        bindings.insert("Right".to_string(), Action::Descend);
        bindings.insert("l".to_string(), Action::Descend);
        bindings.insert("Esc".to_string(), Action::Ascend);
        bindings.insert("Left".to_string(), Action::Ascend);
        bindings.insert("h".to_string(), Action::Ascend);

        bindings.insert("Enter".to_string(), Action::Submit);
        bindings.insert("q".to_string(), Action::Abort);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Loads key bindings from a TOML file at `path`, layered over the defaults.
    ///
    /// Keys listed in the file replace the default binding for that key.
    /// Unknown action strings are ignored with a warning.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        let raw: RawKeymap =
            toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        Ok(Self::default().with_raw(raw))
    }

    fn with_raw(self, raw: RawKeymap) -> Self {
        let mut bindings = self.bindings;
        for (key, action_id) in raw.bindings {
            match Action::find_by_id(&action_id) {
                Some(action) => {
                    bindings.insert(key, action);
                }
                None => tracing::warn!(key = %key, action = %action_id, "unknown action in keymap"),
            }
        }
        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action.
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_keymap_has_prompt_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("Up"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("Down"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("Space"), Some(Action::Descend));
        assert_eq!(keymap.action_for_key("Esc"), Some(Action::Ascend));
        assert_eq!(keymap.action_for_key("Enter"), Some(Action::Submit));
    }

    #[test]
    fn default_keymap_has_vim_keys() {
        let keymap = Keymap::default();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorDown));
        assert_eq!(keymap.action_for_key("k"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("h"), Some(Action::Ascend));
        assert_eq!(keymap.action_for_key("l"), Some(Action::Descend));
        assert_eq!(keymap.action_for_key("g"), Some(Action::CursorTop));
        assert_eq!(keymap.action_for_key("G"), Some(Action::CursorBottom));
    }

    #[test]
    fn default_keymap_binds_q_to_abort() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("q"), Some(Action::Abort));
        assert_eq!(keymap.keys_for_action(Action::Abort).unwrap(), ["q"]);
    }

    #[test]
    fn action_for_unknown_key_returns_none() {
        let keymap = Keymap::default();
        assert_eq!(keymap.action_for_key("z"), None);
        assert_eq!(keymap.action_for_key(""), None);
    }

    #[test]
    fn load_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
j = "cursor_up"
x = "abort"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();

        assert_eq!(keymap.action_for_key("j"), Some(Action::CursorUp));
        assert_eq!(keymap.action_for_key("x"), Some(Action::Abort));
        // Untouched defaults survive.
        assert_eq!(keymap.action_for_key("Enter"), Some(Action::Submit));
    }

    #[test]
    fn load_ignores_unknown_actions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(
            &path,
            r#"
[bindings]
x = "nonexistent_action"
"#,
        )
        .unwrap();

        let keymap = Keymap::load(&path).unwrap();
        assert_eq!(keymap.action_for_key("x"), None);
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = Keymap::load(&tmp.path().join("nope.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "invalid[[[toml").unwrap();

        let result = Keymap::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn keys_for_action_are_sorted() {
        let keymap = Keymap::default();
        let keys = keymap.keys_for_action(Action::Descend).unwrap();
        assert_eq!(keys, ["Right", "Space", "l"]);
    }

    #[test]
    fn keys_for_rebound_action_drop_old_key() {
        let keymap = Keymap::default().with_raw(RawKeymap {
            bindings: HashMap::from([("q".to_string(), "submit".to_string())]),
        });
        assert!(keymap.keys_for_action(Action::Abort).is_none());
        assert!(keymap
            .keys_for_action(Action::Submit)
            .unwrap()
            .contains(&"q".to_string()));
    }
}
