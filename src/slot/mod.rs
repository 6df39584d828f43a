//! Display slots ("display cases") and the content placed in them.
//!
//! A [`DisplayCase`] is one cell of the carousel: a placement relative to
//! the carousel origin, the model instantiated inside it, and the material
//! variant applied to that model. Slots are plain values owned by the
//! [`Carousel`](crate::carousel::Carousel); their identity is a
//! [`SlotId`], never their contents.

mod content;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

pub use content::{DisplayContent, Material, ModelPrefab};
use glam::Vec3;

static NEXT_SLOT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a display slot.
///
/// Ids are never reused, so two slots compare equal only when they are the
/// same slot, even across clean-up and re-initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

impl SlotId {
    /// Allocate a fresh, never-before-seen id.
    #[must_use]
    pub fn fresh() -> Self {
        Self(NEXT_SLOT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value (for logging and picking tables).
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One carousel cell holding a single model instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCase {
    id: SlotId,
    model: ModelPrefab,
    /// Placement of the model inside the case.
    model_offset: Vec3,
    /// Placement of the case relative to the carousel origin.
    position: Vec3,
    material: Option<Material>,
}

impl DisplayCase {
    /// Instantiate `model` inside a new case, offset by `model_offset`.
    /// The case starts at the carousel origin with the model's own material.
    #[must_use]
    pub fn new(model: ModelPrefab, model_offset: Vec3) -> Self {
        Self {
            id: SlotId::fresh(),
            model,
            model_offset,
            position: Vec3::ZERO,
            material: None,
        }
    }

    /// This slot's identity.
    #[must_use]
    pub fn id(&self) -> SlotId {
        self.id
    }

    /// The model shown in this case.
    #[must_use]
    pub fn model(&self) -> &ModelPrefab {
        &self.model
    }

    /// Case position relative to the carousel origin.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Move the case (relative to the carousel origin).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Offset of the model inside the case.
    #[must_use]
    pub fn model_offset(&self) -> Vec3 {
        self.model_offset
    }

    /// Model position relative to the carousel origin.
    #[must_use]
    pub fn model_position(&self) -> Vec3 {
        self.position + self.model_offset
    }

    /// Swap the material applied to the model.
    pub fn change_model_material(&mut self, material: Material) {
        self.material = Some(material);
    }

    /// Material currently applied, `None` while the model keeps its own.
    #[must_use]
    pub fn material(&self) -> Option<&Material> {
        self.material.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_case_gets_a_distinct_id() {
        let model = ModelPrefab::new("trophy");
        let a = DisplayCase::new(model.clone(), Vec3::Y);
        let b = DisplayCase::new(model, Vec3::Y);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn model_position_includes_item_offset() {
        let mut case = DisplayCase::new(ModelPrefab::new("trophy"), Vec3::Y);
        case.set_position(Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(case.model_position(), Vec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn material_swap_replaces_previous() {
        let mut case = DisplayCase::new(ModelPrefab::new("trophy"), Vec3::ZERO);
        assert!(case.material().is_none());
        case.change_model_material(Material::new("gold", [1.0, 0.8, 0.1, 1.0]));
        case.change_model_material(Material::new("silver", [0.8, 0.8, 0.8, 1.0]));
        assert_eq!(case.material().map(|m| m.name.as_str()), Some("silver"));
    }

    #[test]
    fn slot_id_display() {
        let id = SlotId::fresh();
        assert_eq!(id.to_string(), format!("#{}", id.raw()));
    }
}
