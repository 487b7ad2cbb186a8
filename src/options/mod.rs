//! Centralized walkthrough options with TOML preset support.
//!
//! All tweakable settings (movement, collision, input, camera, tour,
//! keybindings) are consolidated here. Options serialize to/from TOML so a
//! deployment can ship presets (e.g. a slower walk for kiosks).

mod camera;
mod collision;
mod input;
mod keybindings;
mod movement;
mod tour;

use std::path::Path;

pub use camera::CameraOptions;
pub use collision::CollisionOptions;
pub use input::InputOptions;
pub use keybindings::KeybindingOptions;
pub use movement::MovementOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use tour::TourOptions;

use crate::error::NavError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[movement]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Free-movement parameters.
    pub movement: MovementOptions,
    /// Collision probe parameters.
    pub collision: CollisionOptions,
    /// Device detection and joystick layout.
    pub input: InputOptions,
    /// Camera projection and orbit parameters.
    pub camera: CameraOptions,
    /// Waypoint transition parameters.
    pub tour: TourOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, NavError> {
        toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded walkthrough options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)?;
        log::info!("Saved walkthrough options to {}", path.display());
        Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

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
[movement]
speed = 0.25

[tour]
easing = "linear"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.movement.speed, 0.25);
        assert_eq!(opts.movement.min_height, 1.0);
        assert_eq!(opts.tour.easing, EasingFunction::Linear);
        assert_eq!(opts.tour.transition_duration, 1.5);
        assert_eq!(opts.collision.safety_distance, 0.8);
        assert_eq!(opts.input.mobile_breakpoint, 768.0);
    }

    #[test]
    fn malformed_toml_is_an_options_error() {
        let err = Options::from_toml("[movement]\nspeed = \"fast\"").unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::PreviousWaypoint)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_steals_the_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.rebind(KeyAction::NextWaypoint, "KeyD");
        assert_eq!(bindings.lookup("KeyD"), Some(KeyAction::NextWaypoint));
        assert!(!bindings.bindings.contains_key(&KeyAction::StrafeRight));
        assert_eq!(bindings.lookup("ArrowRight"), None);
    }

    #[test]
    fn keybindings_load_from_toml() {
        let toml_str = r#"
[keybindings.bindings]
move_forward = "ArrowUp"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("ArrowUp"),
            Some(KeyAction::MoveForward)
        );
        // Only the named action moved; the rest keep their defaults.
        assert_eq!(opts.keybindings.lookup("KeyW"), None);
        assert_eq!(
            opts.keybindings.lookup("KeyS"),
            Some(KeyAction::MoveBackward)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowRight"),
            Some(KeyAction::NextWaypoint)
        );
        assert_eq!(opts.keybindings.bindings.len(), KeyAction::ALL.len());
    }

    #[test]
    fn partial_binding_steals_a_default_key() {
        let toml_str = r#"
[keybindings.bindings]
next_waypoint = "KeyD"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("KeyD"),
            Some(KeyAction::NextWaypoint)
        );
        assert!(!opts
            .keybindings
            .bindings
            .contains_key(&KeyAction::StrafeRight));
        assert_eq!(
            opts.keybindings.lookup("KeyA"),
            Some(KeyAction::StrafeLeft)
        );
    }

    #[test]
    fn shared_key_resolves_by_action_order() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings
            .bindings
            .insert(KeyAction::PreviousWaypoint, "KeyW".into());
        for _ in 0..8 {
            assert_eq!(bindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        }
    }

    #[test]
    fn keybindings_survive_save_and_load() {
        let mut opts = Options::default();
        opts.keybindings.rebind(KeyAction::MoveForward, "ArrowUp");
        opts.keybindings.rebind(KeyAction::MoveBackward, "ArrowDown");
        let parsed = Options::from_toml(&toml::to_string_pretty(&opts).unwrap())
            .unwrap();
        assert_eq!(parsed.keybindings, opts.keybindings);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("artvistas-nav-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.movement.speed = 0.05;
        opts.save(&dir.join("kiosk.toml")).unwrap();

        let loaded = Options::load(&dir.join("kiosk.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["kiosk".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Options::load(Path::new("/nonexistent/walkthrough.toml"))
            .unwrap_err();
        assert!(matches!(err, NavError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("movement"));
        assert!(props.contains_key("collision"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("tour"));
        assert!(!props.contains_key("keybindings"));

        let movement = &props["movement"]["properties"];
        assert!(movement.get("speed").is_some());
        assert!(movement.get("min_height").is_none());
    }
}
