//! Configuration management for trepick.
//!
//! Picker options ([`settings::PickerConfig`]) and key bindings
//! ([`keymap::Keymap`]) are stored as TOML files and loaded at startup.

pub mod keymap;
pub mod settings;
pub mod theme;
