use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::selector::WrapMode;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[schemars(title = "Selection", inline)]
#[serde(default)]
/// Selection navigation behaviour.
pub struct SelectionOptions {
    /// What next/previous do at the ends of the carousel.
    #[schemars(title = "Wrap Mode")]
    pub wrap_mode: WrapMode,
}
