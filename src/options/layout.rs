use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Where slots and their models sit relative to the carousel origin.
pub struct LayoutOptions {
    /// Offset of the model inside each display case.
    #[schemars(title = "Item Offset")]
    pub item_offset: [f32; 3],
    /// Spacing between consecutive display cases. Slot `i` sits at
    /// `display_offset * i`.
    #[schemars(title = "Display Spacing")]
    pub display_offset: [f32; 3],
}

impl LayoutOptions {
    /// Item offset as a vector.
    #[must_use]
    pub fn item_offset(&self) -> Vec3 {
        Vec3::from_array(self.item_offset)
    }

    /// Per-slot spacing as a vector.
    #[must_use]
    pub fn display_offset(&self) -> Vec3 {
        Vec3::from_array(self.display_offset)
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            item_offset: [0.0, 1.0, 0.0],
            display_offset: [1.0, 0.0, 0.0],
        }
    }
}
