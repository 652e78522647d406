use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Viewer", inline)]
#[serde(default)]
/// Standalone viewer window parameters.
pub struct ViewerOptions {
    /// Window title.
    #[schemars(skip)]
    pub title: String,
    /// Initial window width in logical pixels.
    #[schemars(skip)]
    pub width: u32,
    /// Initial window height in logical pixels.
    #[schemars(skip)]
    pub height: u32,
    /// Spin the model about its Z axis over time.
    #[schemars(title = "Spin Model")]
    pub spin_model: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            title: "Arcview".into(),
            width: 800,
            height: 600,
            spin_model: false,
        }
    }
}
