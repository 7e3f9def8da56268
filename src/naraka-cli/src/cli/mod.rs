//! CLI argument definitions for naraka
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;
mod preset;

pub use core::{Cli, Commands};
pub use preset::PresetCommand;
