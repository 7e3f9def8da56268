//! Local preset store
//!
//! Each preset is one JSON file named after its id. Presets are looked up
//! by id first, then by name.

use naraka::ParsedRecord;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Hex characters kept from the id hash
const ID_LEN: usize = 12;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Preset store I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Preset JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No preset named or with id '{0}'")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub data: ParsedRecord,
    /// Milliseconds since the Unix epoch
    pub created_at: u64,
}

/// Derive a preset id from its name and creation time
pub fn preset_id(name: &str, created_at: u64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(created_at.to_le_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub struct PresetStore {
    dir: PathBuf,
}

impl PresetStore {
    /// Open (and create if needed) the store at `dir`
    pub fn open(dir: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn preset_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    /// Save `data` under `name`, replacing any preset with the same name.
    ///
    /// The new file is written before the replaced ones are removed.
    pub fn save(&self, name: &str, data: &ParsedRecord) -> Result<Preset, StoreError> {
        let replaced: Vec<String> = self
            .list()?
            .into_iter()
            .filter(|p| p.name == name)
            .map(|p| p.id)
            .collect();

        let created_at = now_millis();
        let preset = Preset {
            id: preset_id(name, created_at),
            name: name.to_string(),
            data: data.clone(),
            created_at,
        };

        let json = serde_json::to_string_pretty(&preset)?;
        fs::write(self.preset_path(&preset.id), json)?;
        tracing::debug!(id = %preset.id, name, "saved preset");

        for id in replaced.iter().filter(|id| **id != preset.id) {
            fs::remove_file(self.preset_path(id))?;
        }

        Ok(preset)
    }

    /// All presets, oldest first
    pub fn list(&self) -> Result<Vec<Preset>, StoreError> {
        let mut presets = Vec::new();

        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unreadable preset");
                    continue;
                }
            };

            match serde_json::from_str::<Preset>(&contents) {
                Ok(preset) => presets.push(preset),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable preset"),
            }
        }

        presets.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.name.cmp(&b.name)));
        Ok(presets)
    }

    /// Find a preset by id, then by name
    pub fn find(&self, key: &str) -> Result<Preset, StoreError> {
        let presets = self.list()?;

        if let Some(preset) = presets.iter().find(|p| p.id == key) {
            return Ok(preset.clone());
        }

        presets
            .into_iter()
            .find(|p| p.name == key)
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Delete a preset by id or name, returning what was removed
    pub fn delete(&self, key: &str) -> Result<Preset, StoreError> {
        let preset = self.find(key)?;
        fs::remove_file(self.preset_path(&preset.id))?;
        tracing::debug!(id = %preset.id, name = %preset.name, "deleted preset");
        Ok(preset)
    }
}
