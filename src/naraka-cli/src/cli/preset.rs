//! Preset CLI commands

use clap::Subcommand;
use std::path::PathBuf;

/// Records are given as a share code, share URL, JSON file, or file holding a
/// share code. `-` reads stdin.
#[derive(Subcommand)]
pub enum PresetCommand {
    /// Smart-apply a preset's sliders onto a record
    Apply {
        /// Record to modify
        current: String,

        /// Preset record, or the name/id of a stored preset
        preset: String,

        /// Print a share code instead of JSON
        #[arg(short, long)]
        code: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Randomize every face slider
    Randomize {
        /// Record to modify
        current: String,

        /// Print a share code instead of JSON
        #[arg(short, long)]
        code: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Reset every face slider to 0
    Nullify {
        /// Record to modify
        current: String,

        /// Print a share code instead of JSON
        #[arg(short, long)]
        code: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Save a record to the preset store
    Save {
        /// Preset name
        name: String,

        /// Record to save
        input: String,
    },

    /// List stored presets
    List,

    /// Show a stored preset
    Show {
        /// Preset name or id
        preset: String,

        /// Print a share code instead of JSON
        #[arg(short, long)]
        code: bool,
    },

    /// Delete a stored preset
    Delete {
        /// Preset name or id
        preset: String,
    },
}
