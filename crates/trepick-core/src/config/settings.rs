//! Picker configuration loaded from a TOML file.
//!
//! Every field has a documented default so a session can be started without
//! any configuration. Validation happens once, when a
//! [`crate::nav::state::NavState`] is built.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::theme::Theme;
use crate::error::{CoreError, CoreResult};
use crate::nav::filter::ExtensionFilter;

/// The kind of entry a session accepts as its answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    #[default]
    File,
    Folder,
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Folder => f.write_str("folder"),
        }
    }
}

impl FromStr for SelectionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "file" => Ok(Self::File),
            "folder" => Ok(Self::Folder),
            other => Err(CoreError::InvalidConfig(format!(
                "selection_type must be \"file\" or \"folder\", got {other:?}"
            ))),
        }
    }
}

/// Options recognised by a picker session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    /// Question shown at the start of the prompt line. Defaults by selection type.
    #[serde(default)]
    pub message: Option<String>,
    /// Starting directory; relative paths resolve against the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Maximum number of listing rows on screen.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Hide non-matching files instead of dimming them.
    #[serde(default)]
    pub only_show_matching_extensions: bool,
    #[serde(default)]
    pub selection_type: SelectionType,
    /// Allowed filename suffixes; empty allows every file.
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            message: None,
            path: None,
            page_size: default_page_size(),
            only_show_matching_extensions: false,
            selection_type: SelectionType::default(),
            extensions: Vec::new(),
            theme: Theme::default(),
        }
    }
}

impl PickerConfig {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Checks the values that cannot be expressed in the type.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfig`] if `page_size` is zero or an extension is empty.
    pub fn validate(&self) -> CoreResult<()> {
        if self.page_size == 0 {
            return Err(CoreError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.extensions.iter().any(String::is_empty) {
            return Err(CoreError::InvalidConfig(
                "extensions must not contain empty strings".to_string(),
            ));
        }
        Ok(())
    }

    /// The prompt question, falling back to a default for the selection type.
    pub fn message(&self) -> &str {
        match (&self.message, self.selection_type) {
            (Some(msg), _) => msg,
            (None, SelectionType::File) => "Select a file",
            (None, SelectionType::Folder) => "Select a folder",
        }
    }

    /// The starting directory, `"."` when unset.
    pub fn start_path(&self) -> &Path {
        self.path.as_deref().unwrap_or(Path::new("."))
    }

    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(self.extensions.iter().cloned())
    }
}

fn default_page_size() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = PickerConfig::default();

        assert!(config.path.is_none());
        assert_eq!(config.page_size, 10);
        assert!(!config.only_show_matching_extensions);
        assert_eq!(config.selection_type, SelectionType::File);
        assert!(config.extensions.is_empty());
        assert_eq!(config.start_path(), Path::new("."));
    }

    #[test]
    fn default_message_follows_selection_type() {
        let mut config = PickerConfig::default();
        assert_eq!(config.message(), "Select a file");

        config.selection_type = SelectionType::Folder;
        assert_eq!(config.message(), "Select a folder");

        config.message = Some("Pick a log".to_string());
        assert_eq!(config.message(), "Pick a log");
    }

    #[test]
    fn load_full_toml() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trepick.toml");
        fs::write(
            &path,
            r#"
message = "Choose a document"
path = "/srv/docs"
page_size = 20
only_show_matching_extensions = true
selection_type = "folder"
extensions = [".md", ".txt"]

[theme]
answer_fg = "magenta"
"#,
        )
        .unwrap();

        let config = PickerConfig::load(&path).unwrap();

        assert_eq!(config.message(), "Choose a document");
        assert_eq!(config.path, Some(PathBuf::from("/srv/docs")));
        assert_eq!(config.page_size, 20);
        assert!(config.only_show_matching_extensions);
        assert_eq!(config.selection_type, SelectionType::Folder);
        assert_eq!(config.extensions, vec![".md", ".txt"]);
        assert_eq!(config.theme.answer_fg, "magenta");
        assert_eq!(config.theme.warning_fg, "red");
    }

    #[test]
    fn load_partial_toml_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trepick.toml");
        fs::write(&path, "extensions = [\"rs\"]\n").unwrap();

        let config = PickerConfig::load(&path).unwrap();

        assert_eq!(config.extensions, vec!["rs"]);
        assert_eq!(config.page_size, 10);
        assert_eq!(config.selection_type, SelectionType::File);
    }

    #[test]
    fn load_empty_toml_equals_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trepick.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(PickerConfig::load(&path).unwrap(), PickerConfig::default());
    }

    #[test]
    fn load_nonexistent_returns_not_found() {
        let tmp = TempDir::new().unwrap();
        let result = PickerConfig::load(&tmp.path().join("nonexistent.toml"));
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml_returns_config_parse() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trepick.toml");
        fs::write(&path, "this is not valid [[[toml").unwrap();

        let result = PickerConfig::load(&path);
        assert!(matches!(result.unwrap_err(), CoreError::ConfigParse(_)));
    }

    #[test]
    fn unknown_selection_type_is_a_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("trepick.toml");
        fs::write(&path, "selection_type = \"symlink\"\n").unwrap();

        assert!(matches!(
            PickerConfig::load(&path).unwrap_err(),
            CoreError::ConfigParse(_)
        ));
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let config = PickerConfig {
            page_size: 0,
            ..PickerConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            CoreError::InvalidConfig(_)
        ));
    }

    #[test]
    fn validate_rejects_empty_extension() {
        let config = PickerConfig {
            extensions: vec!["txt".into(), String::new()],
            ..PickerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(PickerConfig::default().validate().is_ok());
    }

    #[test]
    fn selection_type_from_str_and_display() {
        assert_eq!("file".parse::<SelectionType>().unwrap(), SelectionType::File);
        assert_eq!(
            "folder".parse::<SelectionType>().unwrap(),
            SelectionType::Folder
        );
        assert!("dir".parse::<SelectionType>().is_err());
        assert_eq!(SelectionType::Folder.to_string(), "folder");
    }

    #[test]
    fn extension_filter_uses_configured_suffixes() {
        let config = PickerConfig {
            extensions: vec!["txt".into()],
            ..PickerConfig::default()
        };
        let filter = config.extension_filter();
        assert!(filter.allows("a.txt"));
        assert!(!filter.allows("a.md"));
    }
}
