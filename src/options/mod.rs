//! Centralized viewer options with TOML file support.
//!
//! Camera projection, lighting, primitive geometry, animation rates and
//! keybindings are consolidated here. Options serialize to/from TOML so a
//! partial file (e.g. only overriding `[geometry]`) can tweak a viewer.

mod animation;
mod camera;
mod geometry;
mod lighting;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use geometry::GeometryOptions;
pub use lighting::LightingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::MolviewError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection parameters.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Ball-and-stick primitive sizes and tessellation.
    pub geometry: GeometryOptions,
    /// Rotation rates.
    pub animation: AnimationOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the user-tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The options schema as pretty-printed JSON, for editors and settings
    /// forms that validate or render option files.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::OptionsParse`] if the schema cannot be
    /// serialized.
    pub fn schema_json() -> Result<String, MolviewError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| MolviewError::OptionsParse(e.to_string()))
    }

    /// Write [`schema_json`](Self::schema_json) to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError`] if serialization or writing fails.
    pub fn save_schema(path: &Path) -> Result<(), MolviewError> {
        let content = Self::schema_json()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolviewError::Io)?;
        }
        std::fs::write(path, content).map_err(MolviewError::Io)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::OptionsParse`] on malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, MolviewError> {
        toml::from_str(content)
            .map_err(|e| MolviewError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError::Io`] if the file cannot be read, or
    /// [`MolviewError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, MolviewError> {
        let content = std::fs::read_to_string(path).map_err(MolviewError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`MolviewError`] if serialization or writing fails.
    pub fn save(&self, path: &Path) -> Result<(), MolviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| MolviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(MolviewError::Io)?;
        }
        std::fs::write(path, content).map_err(MolviewError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command::ViewerCommand;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[geometry]
bond_radius = 0.08

[animation]
rotate_on_start = false
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.geometry.bond_radius, 0.08);
        assert!(!opts.animation.rotate_on_start);
        // Everything else should be default
        assert_eq!(opts.geometry.atom_radius, 0.3);
        assert_eq!(opts.geometry.hydrogen_radius, 0.2);
        assert_eq!(opts.camera.fovy, 75.0);
        assert_eq!(opts.animation.rotation_speed_y, 0.01);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let result = Options::from_toml_str("[camera]\nfovy = \"wide\"");
        assert!(matches!(result, Err(MolviewError::OptionsParse(_))));
    }

    #[test]
    fn save_then_load_preserves_overrides() {
        let dir = std::env::temp_dir()
            .join(format!("molview-options-{}", std::process::id()));
        let path = dir.join("view.toml");

        let mut opts = Options::default();
        opts.lighting.light_intensity = 1.5;
        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded, opts);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(ViewerCommand::ToggleRotation)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(ViewerCommand::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("lighting"));
        assert!(props.contains_key("geometry"));
        assert!(props.contains_key("animation"));
        assert!(!props.contains_key("keybindings"));

        let geometry = &props["geometry"]["properties"];
        assert!(geometry.get("atom_radius").is_some());
        assert!(geometry.get("bond_color").is_none());
    }

    #[test]
    fn saved_schema_parses_back_as_json() {
        let dir = std::env::temp_dir()
            .join(format!("molview-schema-{}", std::process::id()));
        let path = dir.join("options.schema.json");

        Options::save_schema(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(written, Options::schema_json().unwrap());
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert!(value["properties"]["animation"].is_object());
    }
}
