//! Preset command handlers

use anyhow::{Context, Result};
use naraka::ParsedRecord;
use std::path::Path;

use super::input::load_record;
use crate::config::Config;
use crate::file_io::write_text;
use crate::store::{PresetStore, StoreError};

fn open_store(dir: Option<&Path>) -> Result<PresetStore> {
    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => Config::load()?.presets_dir()?,
    };

    PresetStore::open(&dir)
        .with_context(|| format!("Failed to open preset store at {}", dir.display()))
}

/// Format a record as pretty JSON or as a share code
pub fn format_record(record: &ParsedRecord, code: bool) -> Result<String> {
    if code {
        naraka::encode_parsed_to_code(record).context("Failed to encode share code")
    } else {
        Ok(serde_json::to_string_pretty(record)?)
    }
}

/// A stored preset by name/id, otherwise any record input
fn load_preset(store: &PresetStore, key: &str, proxy: Option<&str>) -> Result<ParsedRecord> {
    match store.find(key) {
        Ok(preset) => Ok(preset.data),
        Err(StoreError::NotFound(_)) => load_record(key, proxy),
        Err(e) => Err(e.into()),
    }
}

pub fn apply(
    current: &str,
    preset: &str,
    store_dir: Option<&Path>,
    code: bool,
    output: Option<&Path>,
) -> Result<()> {
    let config = Config::load()?;
    let store = open_store(store_dir)?;

    let current = load_record(current, config.get_proxy())?;
    let preset = load_preset(&store, preset, config.get_proxy())?;

    let result = naraka::apply_smart_preset(&current, &preset);
    write_text(output, &format_record(&result, code)?)
}

pub fn randomize(current: &str, code: bool, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let current = load_record(current, config.get_proxy())?;

    let result = naraka::randomize(&current);
    write_text(output, &format_record(&result, code)?)
}

pub fn nullify(current: &str, code: bool, output: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let current = load_record(current, config.get_proxy())?;

    let result = naraka::nullify(&current);
    write_text(output, &format_record(&result, code)?)
}

pub fn save(name: &str, input: &str, store_dir: Option<&Path>) -> Result<()> {
    let config = Config::load()?;
    let store = open_store(store_dir)?;

    let record = load_record(input, config.get_proxy())?;
    let preset = store.save(name, &record)?;

    println!("Saved preset '{}' ({})", preset.name, preset.id);
    Ok(())
}

pub fn list(store_dir: Option<&Path>) -> Result<()> {
    let store = open_store(store_dir)?;
    let presets = store.list()?;

    if presets.is_empty() {
        println!("No presets saved in {}", store.dir().display());
        return Ok(());
    }

    println!("{:<12}  {:<15}  Name", "ID", "Created");
    for preset in presets {
        println!("{:<12}  {:<15}  {}", preset.id, preset.created_at, preset.name);
    }

    Ok(())
}

pub fn show(key: &str, store_dir: Option<&Path>, code: bool) -> Result<()> {
    let store = open_store(store_dir)?;
    let preset = store.find(key)?;

    write_text(None, &format_record(&preset.data, code)?)
}

pub fn delete(key: &str, store_dir: Option<&Path>) -> Result<()> {
    let store = open_store(store_dir)?;
    let preset = store.delete(key)?;

    println!("Deleted preset '{}' ({})", preset.name, preset.id);
    Ok(())
}
