use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::arcball::DEFAULT_RADIUS_FRACTION;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Interaction", inline)]
#[serde(default)]
/// Pointer interaction parameters.
pub struct InteractionOptions {
    /// Arcball radius as a fraction of the smaller viewport half-dimension.
    #[schemars(
        title = "Arcball Radius",
        range(max = 1.0),
        extend("exclusiveMinimum" = 0.0),
        extend("step" = 0.05)
    )]
    pub arcball_radius: f64,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            arcball_radius: DEFAULT_RADIUS_FRACTION,
        }
    }
}
