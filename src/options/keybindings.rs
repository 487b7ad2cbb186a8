use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the DOM `KeyboardEvent.code` form (`"KeyW"`,
/// `"ArrowRight"`), which is also the `winit` `KeyCode` debug form.
/// A partial `[keybindings.bindings]` table overrides only the actions
/// it names; the rest keep their default keys.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    #[serde(deserialize_with = "merge_over_defaults")]
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::StrafeLeft, "KeyA".into()),
            (KeyAction::StrafeRight, "KeyD".into()),
            (KeyAction::NextWaypoint, "ArrowRight".into()),
            (KeyAction::PreviousWaypoint, "ArrowLeft".into()),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action bound to a key string.
    ///
    /// If several actions share the key, the first in
    /// [`KeyAction::ALL`] order wins.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        KeyAction::ALL.into_iter().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|bound| bound.as_str() == key)
        })
    }

    /// Rebind `action` to `key`, dropping any other action on that key.
    pub fn rebind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings.retain(|other, bound| *other == action || *bound != key);
        let _ = self.bindings.insert(action, key);
    }
}

/// Apply a (possibly partial) binding table on top of the defaults.
fn merge_over_defaults<'de, D>(
    deserializer: D,
) -> Result<HashMap<KeyAction, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = HashMap::<KeyAction, String>::deserialize(deserializer)?;
    let mut merged = KeybindingOptions::default();
    for action in KeyAction::ALL {
        if let Some(key) = overrides.get(&action) {
            merged.rebind(action, key.clone());
        }
    }
    Ok(merged.bindings)
}
