use serde::{Deserialize, Serialize};

/// Carousel actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// next_display = "ArrowRight"
/// previous_display = "ArrowLeft"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Step the selection forward.
    NextDisplay,
    /// Step the selection back.
    PreviousDisplay,
}
