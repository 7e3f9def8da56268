//! Preset transforms over parsed face data.
//!
//! Sliders live in 0..=100. Anything above that is treated as an ID (makeup
//! style, decal, ...) and is left alone. Identity fields (`HeroID`,
//! `Version`) and hair data are never touched. Every transform returns a
//! new record.

use rand::Rng;
use serde_json::Value;

use crate::record::{numeric, ParsedRecord};
use crate::schema::{self, SchemaEntry};

/// Largest value a slider can take
pub const SLIDER_MAX: u64 = 100;

fn is_slider_value(value: f64) -> bool {
    value <= SLIDER_MAX as f64
}

/// Whether a preset value is a slider setting that may be copied
fn is_slider_setting(value: f64) -> bool {
    (0.0..=SLIDER_MAX as f64).contains(&value)
}

/// Whether the current value at `entry` may be overwritten
fn is_writable(record: &ParsedRecord, entry: &SchemaEntry) -> bool {
    record
        .face_data
        .number(entry.path)
        .map_or(true, |n| is_slider_value(numeric(n)))
}

/// Copy slider values from `source` onto `target` ("Smart Apply").
///
/// Only numeric source values in 0..=[`SLIDER_MAX`] are copied; values outside
/// that range and non-numeric ones keep the target's value.
pub fn apply_smart_preset(target: &ParsedRecord, source: &ParsedRecord) -> ParsedRecord {
    let mut result = target.clone();

    for entry in schema::shape_entries() {
        let Some(value) = source.face_data.number(entry.path) else {
            continue;
        };
        if is_slider_setting(numeric(value)) {
            result
                .face_data
                .set(entry.path, Value::Number(value.clone()));
        }
    }

    result
}

/// Randomize every slider with a uniform integer in 0..=100
pub fn randomize(current: &ParsedRecord) -> ParsedRecord {
    randomize_with(current, &mut rand::thread_rng())
}

/// Randomize every slider using the given random source
pub fn randomize_with<R: Rng>(current: &ParsedRecord, rng: &mut R) -> ParsedRecord {
    let mut result = current.clone();

    for entry in schema::shape_entries() {
        if is_writable(current, entry) {
            let value: u64 = rng.gen_range(0..=SLIDER_MAX);
            result.face_data.set(entry.path, value);
        }
    }

    result
}

/// Set every slider to 0
pub fn nullify(current: &ParsedRecord) -> ParsedRecord {
    let mut result = current.clone();

    for entry in schema::shape_entries() {
        if is_writable(current, entry) {
            result.face_data.set(entry.path, 0);
        }
    }

    result
}
