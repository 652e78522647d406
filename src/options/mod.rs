//! Camera and viewer options with TOML preset support.
//!
//! Options serialize to/from TOML so a starting view can be stored as a
//! preset file and passed to the viewer binary. Validation happens here, at
//! the configuration boundary, so the per-frame camera math can assume
//! well-formed geometry.

mod camera;
mod interaction;
mod viewer;

use std::path::Path;

pub use camera::CameraOptions;
pub use interaction::InteractionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use viewer::ViewerOptions;

use crate::camera::Camera;
use crate::error::ArcviewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement and projection.
    pub camera: CameraOptions,
    /// Pointer interaction parameters.
    pub interaction: InteractionOptions,
    /// Standalone viewer window.
    pub viewer: ViewerOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ArcviewError> {
        let content = std::fs::read_to_string(path).map_err(ArcviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ArcviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ArcviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ArcviewError::Io)?;
        }
        std::fs::write(path, content).map_err(ArcviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("cannot read preset dir {}: {e}", dir.display());
                return names;
            }
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "toml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_owned());
                }
            }
        }
        names.sort();
        names
    }

    /// Reject configurations the camera cannot render.
    pub fn validate(&self) -> Result<(), ArcviewError> {
        self.build_camera().map(|_| ())
    }

    /// Validate every section and build the configured camera.
    pub fn build_camera(&self) -> Result<Camera, ArcviewError> {
        let radius = self.interaction.arcball_radius;
        if !(radius > 0.0 && radius <= 1.0) {
            return Err(ArcviewError::InvalidOption(format!(
                "arcball_radius must be in (0, 1], got {radius}"
            )));
        }
        if self.viewer.width == 0 || self.viewer.height == 0 {
            return Err(ArcviewError::InvalidViewport {
                width: self.viewer.width,
                height: self.viewer.height,
            });
        }
        Camera::from_options(&self.camera)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::ProjectionKind;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[camera]
projection = "orthographic"
eye = [0.0, 0.0, 30.0]
"#;
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.projection, ProjectionKind::Orthographic);
        assert_eq!(opts.camera.eye, [0.0, 0.0, 30.0]);
        // Everything else should be default
        assert!(opts.camera.preserve_aspect);
        assert_eq!(opts.camera.extent.z_max, 10.0);
        assert_eq!(opts.interaction.arcball_radius, 0.8);
        assert_eq!(opts.viewer.width, 800);
    }

    #[test]
    fn extent_table_parses() {
        let toml_str = r"
[camera.extent]
x_min = -1.0
x_max = 1.0
y_min = -2.0
y_max = 2.0
z_min = -4.0
z_max = 4.0
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.camera.extent.y_max, 2.0);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut opts = Options::default();
        opts.interaction.arcball_radius = 0.0;
        assert!(matches!(
            opts.validate(),
            Err(ArcviewError::InvalidOption(_))
        ));

        let mut opts = Options::default();
        opts.camera.extent.x_min = 10.0;
        assert!(matches!(
            opts.validate(),
            Err(ArcviewError::InvalidExtent(_))
        ));

        let mut opts = Options::default();
        opts.viewer.height = 0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn save_then_load_and_list() {
        let dir = std::env::temp_dir()
            .join(format!("arcview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.preserve_aspect = false;
        opts.save(&dir.join("flat.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();

        let loaded = Options::load(&dir.join("flat.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["default", "flat"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_preset_dir_lists_nothing() {
        let dir = std::env::temp_dir().join("arcview-does-not-exist");
        assert!(Options::list_presets(&dir).is_empty());
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("interaction"));
        assert!(props.contains_key("viewer"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("projection").is_some());
        assert!(camera.get("extent").is_some());
        assert!(camera.get("up").is_none());
        assert!(camera.get("clip_depth").is_none());

        let viewer = &props["viewer"]["properties"];
        assert!(viewer.get("spin_model").is_some());
        assert!(viewer.get("title").is_none());
    }

    #[test]
    fn schema_radius_bounds_match_validation() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let radius =
            &schema_value["properties"]["interaction"]["properties"]["arcball_radius"];
        assert_eq!(radius["exclusiveMinimum"].as_f64(), Some(0.0));
        assert_eq!(radius["maximum"].as_f64(), Some(1.0));
        assert!(radius.get("minimum").is_none());

        let mut opts = Options::default();
        opts.interaction.arcball_radius = 0.05;
        assert!(opts.validate().is_ok());
        opts.interaction.arcball_radius = 1.0;
        assert!(opts.validate().is_ok());
        opts.interaction.arcball_radius = 0.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn build_camera_follows_camera_section() {
        let mut opts = Options::default();
        opts.camera.eye = [0.0, 0.0, 12.0];
        let camera = opts.build_camera().unwrap();
        assert_eq!(camera.eye, glam::DVec3::new(0.0, 0.0, 12.0));
        assert_eq!(camera.extent, opts.camera.extent);

        opts.interaction.arcball_radius = 1.5;
        assert!(matches!(
            opts.build_camera(),
            Err(ArcviewError::InvalidOption(_))
        ));
    }
}
