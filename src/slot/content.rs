use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;

/// Descriptor of the model instantiated in every display case.
///
/// The carousel never loads geometry itself; `name` is the asset key a host
/// renderer resolves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelPrefab {
    /// Asset key of the model.
    pub name: String,
    /// Uniform scale applied to the model instance.
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

impl ModelPrefab {
    /// Prefab with unit scale.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scale: default_scale(),
        }
    }
}

impl Default for ModelPrefab {
    fn default() -> Self {
        Self::new("display_model")
    }
}

/// A named material variant applied to a slot's model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Material {
    /// Material name (asset key or label).
    pub name: String,
    /// Base color, linear RGBA.
    #[serde(default = "default_color")]
    pub color: [f32; 4],
}

fn default_color() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

impl Material {
    /// Material with the given name and base color.
    pub fn new(name: impl Into<String>, color: [f32; 4]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// What a carousel shows: one model, one slot per material variant.
///
/// Serializes to TOML as
///
/// ```toml
/// [model]
/// name = "sneaker"
///
/// [[materials]]
/// name = "red"
/// color = [0.9, 0.1, 0.1, 1.0]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DisplayContent {
    /// Model placed in every slot.
    pub model: ModelPrefab,
    /// Material variants, in display order.
    pub materials: Vec<Material>,
}

impl DisplayContent {
    /// Content showing `model` once per material.
    #[must_use]
    pub fn new(model: ModelPrefab, materials: Vec<Material>) -> Self {
        Self { model, materials }
    }

    /// Load content from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CarouselError> {
        let content =
            std::fs::read_to_string(path).map_err(CarouselError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))
    }

    /// Save content to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CarouselError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CarouselError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CarouselError::Io)?;
        }
        std::fs::write(path, content).map_err(CarouselError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_content_toml() {
        let toml_str = r#"
[model]
name = "sneaker"

[[materials]]
name = "red"
color = [0.9, 0.1, 0.1, 1.0]

[[materials]]
name = "plain"
"#;
        let content: DisplayContent = toml::from_str(toml_str).unwrap();
        assert_eq!(content.model.name, "sneaker");
        assert_eq!(content.model.scale, 1.0);
        assert_eq!(content.materials.len(), 2);
        assert_eq!(content.materials[1].color, [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn empty_toml_gives_default_content() {
        let content: DisplayContent = toml::from_str("").unwrap();
        assert_eq!(content, DisplayContent::default());
        assert!(content.materials.is_empty());
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = std::env::temp_dir()
            .join(format!("vitrine-content-{}", std::process::id()));
        let path = dir.join("content.toml");
        let content = DisplayContent::new(
            ModelPrefab::new("vase"),
            vec![Material::new("jade", [0.2, 0.6, 0.4, 1.0])],
        );
        content.save(&path).unwrap();
        let loaded = DisplayContent::load(&path).unwrap();
        assert_eq!(loaded, content);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = DisplayContent::load(Path::new("/nonexistent/vitrine.toml"))
            .unwrap_err();
        assert!(matches!(err, CarouselError::Io(_)));
    }
}
