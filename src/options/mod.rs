//! Carousel tunables with TOML preset support.
//!
//! Layout spacing, transition timing, selection wrap behaviour and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! carousel's feel can be shipped as a preset next to its content.

mod animation;
mod keybindings;
mod layout;
mod selection;

use std::path::Path;

pub use animation::AnimationOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
pub use selection::SelectionOptions;
use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct CarouselOptions {
    /// Slot and model placement.
    pub layout: LayoutOptions,
    /// Scroll transition timing.
    pub animation: AnimationOptions,
    /// Next/previous behaviour.
    pub selection: SelectionOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl CarouselOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(CarouselOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content =
            std::fs::read_to_string(path).map_err(CarouselError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CarouselError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CarouselError::Io)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
