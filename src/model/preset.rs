use serde::{Deserialize, Serialize};

use super::level::LevelConfig;

pub const DEFAULT_PRESET_ID: &str = "default";

/// A named LevelConfig set selectable for conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub levels: Vec<LevelConfig>,
    #[serde(default)]
    pub built_in: bool,
}

/// Error type for preset exchange
#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("invalid preset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid preset format")]
    InvalidFormat,
}

/// The exported/imported payload: name + levels only, no id
#[derive(Debug, Serialize, Deserialize)]
struct PresetExchange {
    name: String,
    levels: Vec<LevelConfig>,
}

/// The three built-in presets
pub fn built_in_presets() -> Vec<Preset> {
    vec![
        Preset {
            id: DEFAULT_PRESET_ID.to_string(),
            name: "Report".to_string(),
            levels: vec![
                LevelConfig::new(1, "▶", 0),
                LevelConfig::new(2, "-", 2),
                LevelConfig::new(3, "+", 4),
                LevelConfig::new(4, ".", 6),
            ],
            built_in: true,
        },
        Preset {
            id: "numbered".to_string(),
            name: "Numbered".to_string(),
            levels: vec![
                LevelConfig::new(1, "▶", 0),
                LevelConfig::new(2, "1.", 2),
                LevelConfig::new(3, "-", 4),
                LevelConfig::new(4, "+", 6),
            ],
            built_in: true,
        },
        Preset {
            id: "arrow".to_string(),
            name: "Arrow".to_string(),
            levels: vec![
                LevelConfig::new(1, "▶", 0),
                LevelConfig::new(2, "→", 2),
                LevelConfig::new(3, "→", 4),
                LevelConfig::new(4, "→", 6),
            ],
            built_in: true,
        },
    ]
}

/// In-memory preset collection with a current selection.
/// Persistence is the caller's concern; the store itself never touches disk.
#[derive(Debug)]
pub struct PresetStore {
    presets: Vec<Preset>,
    current_id: String,
    next_user_id: usize,
}

impl PresetStore {
    pub fn new() -> Self {
        PresetStore {
            presets: built_in_presets(),
            current_id: DEFAULT_PRESET_ID.to_string(),
            next_user_id: 1,
        }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// The currently selected preset. The default preset is undeletable, so
    /// the current id always resolves.
    pub fn current(&self) -> &Preset {
        match self.presets.iter().find(|p| p.id == self.current_id) {
            Some(preset) => preset,
            None => &self.presets[0],
        }
    }

    /// Select a preset by id. Unknown ids are a no-op and return false.
    pub fn select(&mut self, id: &str) -> bool {
        if self.presets.iter().any(|p| p.id == id) {
            self.current_id = id.to_string();
            true
        } else {
            false
        }
    }

    /// Save a new user preset and make it current. Returns its id.
    pub fn save_as(&mut self, name: &str, levels: Vec<LevelConfig>) -> String {
        let id = format!("preset-{}", self.next_user_id);
        self.next_user_id += 1;
        self.presets.push(Preset {
            id: id.clone(),
            name: name.to_string(),
            levels,
            built_in: false,
        });
        self.current_id = id.clone();
        id
    }

    /// Delete a user preset. Built-ins refuse and return false.
    /// Deleting the current preset falls back to the default.
    pub fn delete(&mut self, id: &str) -> bool {
        let Some(idx) = self.presets.iter().position(|p| p.id == id) else {
            return false;
        };
        if self.presets[idx].built_in {
            return false;
        }
        self.presets.remove(idx);
        if self.current_id == id {
            self.current_id = DEFAULT_PRESET_ID.to_string();
        }
        true
    }

    /// Reset the selection to the default preset
    pub fn reset(&mut self) {
        self.current_id = DEFAULT_PRESET_ID.to_string();
    }

    /// Export a preset as pretty JSON `{name, levels}`. Unknown ids fall
    /// back to the current preset.
    pub fn export_json(&self, id: &str) -> String {
        let preset = self
            .presets
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| self.current());
        let payload = PresetExchange {
            name: preset.name.clone(),
            levels: preset.levels.clone(),
        };
        // serialization of plain strings and integers cannot fail
        serde_json::to_string_pretty(&payload).unwrap_or_default()
    }

    /// Import a preset from exported JSON, validate its shape, append it as
    /// a user preset, and make it current. Returns the new id.
    pub fn import_json(&mut self, json: &str) -> Result<String, PresetError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let payload: PresetExchange =
            serde_json::from_value(value).map_err(|_| PresetError::InvalidFormat)?;
        if payload.name.is_empty() || payload.levels.len() != 4 {
            return Err(PresetError::InvalidFormat);
        }
        Ok(self.save_as(&payload.name, payload.levels))
    }
}

impl Default for PresetStore {
    fn default() -> Self {
        PresetStore::new()
    }
}
