//! Command-line arguments for the `trepick` binary.
//!
//! Options are layered: built-in defaults, then the TOML config file, then
//! the flags given on the command line.

use std::path::{Path, PathBuf};

use clap::Parser;
use trepick_core::config::keymap::Keymap;
use trepick_core::config::settings::{PickerConfig, SelectionType};
use trepick_core::error::CoreResult;

/// Interactively pick a file or folder and print its absolute path.
#[derive(Parser, Debug)]
#[command(
    name = "trepick",
    version,
    about = "Pick a file or folder from an inline terminal prompt",
    after_help = "Examples:\n  vim \"$(trepick -e .rs src)\"\n  cd \"$(trepick -t folder ~)\"\n  trepick --print0 -o -e .log /var/log | xargs -0 tail"
)]
pub struct Cli {
    /// Directory to start browsing from
    #[arg(value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Question shown on the prompt line
    #[arg(short, long)]
    pub message: Option<String>,

    /// Maximum number of listing rows on screen
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Hide files outside the allowed extensions instead of dimming them
    #[arg(short = 'o', long)]
    pub only_matching: bool,

    /// Accept a file or a folder as the answer
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub selection_type: Option<SelectionType>,

    /// Allowed filename suffix, e.g. `.rs` (repeatable)
    #[arg(short = 'e', long = "ext", value_name = "SUFFIX")]
    pub extensions: Vec<String>,

    /// Picker config file (defaults to ~/.config/trepick/config.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Key binding file (defaults to ~/.config/trepick/keymap.toml when present)
    #[arg(long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,

    /// Terminate the printed path with NUL instead of a newline
    #[arg(long)]
    pub print0: bool,
}

impl Cli {
    /// Resolves the effective picker options.
    ///
    /// An explicit `--config` file must exist. The default location is read
    /// only when a file is there.
    pub fn to_config(&self) -> CoreResult<PickerConfig> {
        let base = match config_file(self.config.as_deref(), "config.toml") {
            Some(path) => PickerConfig::load(&path)?,
            None => PickerConfig::default(),
        };
        Ok(self.apply(base))
    }

    /// Resolves the key bindings the same way as [`Cli::to_config`].
    pub fn to_keymap(&self) -> CoreResult<Keymap> {
        match config_file(self.keymap.as_deref(), "keymap.toml") {
            Some(path) => Keymap::load(&path),
            None => Ok(Keymap::default()),
        }
    }

    fn apply(&self, mut config: PickerConfig) -> PickerConfig {
        if let Some(path) = &self.path {
            config.path = Some(path.clone());
        }
        if let Some(message) = &self.message {
            config.message = Some(message.clone());
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.only_matching {
            config.only_show_matching_extensions = true;
        }
        if let Some(selection_type) = self.selection_type {
            config.selection_type = selection_type;
        }
        if !self.extensions.is_empty() {
            config.extensions = self.extensions.clone();
        }
        config
    }
}

/// Picks the explicit file, or `name` in the user config directory if it exists.
fn config_file(explicit: Option<&Path>, name: &str) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let default = config_dir().join(name);
            default.is_file().then_some(default)
        }
    }
}

/// Returns `~/.config/trepick`.
fn config_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config")
        .join("trepick")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use trepick_core::action::Action;
    use trepick_core::error::CoreError;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("trepick").chain(args.iter().copied()))
    }

    #[test]
    fn flags_parse() {
        let cli = parse(&[
            "-m", "Pick one", "--page-size", "5", "-o", "-t", "folder", "-e", ".rs", "-e",
            ".toml", "--print0", "src",
        ]);
        assert_eq!(cli.path, Some(PathBuf::from("src")));
        assert_eq!(cli.message.as_deref(), Some("Pick one"));
        assert_eq!(cli.page_size, Some(5));
        assert!(cli.only_matching);
        assert_eq!(cli.selection_type, Some(SelectionType::Folder));
        assert_eq!(cli.extensions, vec![".rs", ".toml"]);
        assert!(cli.print0);
    }

    #[test]
    fn bad_selection_type_is_rejected() {
        let result = Cli::try_parse_from(["trepick", "-t", "symlink"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "message = \"From file\"\npage_size = 20\nextensions = [\".md\"]\n",
        )
        .unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let config = parse(&["-c", &path_arg, "--page-size", "7"])
            .to_config()
            .unwrap();

        assert_eq!(config.message(), "From file");
        assert_eq!(config.page_size, 7);
        assert_eq!(config.extensions, vec![".md"]);
    }

    #[test]
    fn extensions_flag_replaces_file_list() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "extensions = [\".md\"]\n").unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let config = parse(&["-c", &path_arg, "-e", ".txt"]).to_config().unwrap();
        assert_eq!(config.extensions, vec![".txt"]);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path_arg = tmp.path().join("nope.toml").to_string_lossy().to_string();

        let result = parse(&["--config", &path_arg]).to_config();
        assert!(matches!(result.unwrap_err(), CoreError::NotFound(_)));
    }

    #[test]
    fn apply_without_flags_keeps_base() {
        let base = PickerConfig {
            page_size: 3,
            selection_type: SelectionType::Folder,
            ..PickerConfig::default()
        };
        let config = parse(&[]).apply(base.clone());
        assert_eq!(config, base);
    }

    #[test]
    fn explicit_keymap_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("keymap.toml");
        fs::write(&path, "[bindings]\nx = \"submit\"\n").unwrap();
        let path_arg = path.to_string_lossy().to_string();

        let keymap = parse(&["--keymap", &path_arg]).to_keymap().unwrap();
        assert_eq!(keymap.action_for_key("x"), Some(Action::Submit));
        assert_eq!(keymap.action_for_key("Enter"), Some(Action::Submit));
    }

    #[test]
    fn explicit_file_wins_over_default_location() {
        let explicit = Path::new("/some/where.toml");
        assert_eq!(
            config_file(Some(explicit), "config.toml"),
            Some(explicit.to_path_buf())
        );
    }
}
