//! Core CLI definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::preset::PresetCommand;

#[derive(Parser)]
#[command(name = "naraka")]
#[command(about = "Naraka: Bladepoint face/hair share code tool", long_about = None)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a share code into JSON
    #[command(visible_alias = "d")]
    Decode {
        /// Share code, share URL, file containing either, or "-" for stdin
        input: String,

        /// Read the share code from a QR code image instead
        #[arg(long)]
        qr: bool,

        /// Output the raw record (flat face data array)
        #[arg(short, long)]
        raw: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Encode a JSON record into a share code
    #[command(visible_alias = "e")]
    Encode {
        /// JSON record file (stdin if not specified)
        input: Option<PathBuf>,

        /// Input is a raw record (flat face data array)
        #[arg(short, long)]
        raw: bool,

        /// Also write the share code as a QR code PNG
        #[arg(long, value_name = "PNG")]
        qr: Option<PathBuf>,
    },

    /// Preset operations (apply, randomize, nullify, save, list, show, delete)
    #[command(visible_alias = "p")]
    Preset {
        /// Preset store directory (overrides configured location)
        #[arg(long, env = "NARAKA_PRESETS_DIR")]
        store: Option<PathBuf>,

        #[command(subcommand)]
        command: PresetCommand,
    },

    /// List face data fields and their array indices
    Schema {
        /// Only show fields whose path contains this text
        filter: Option<String>,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the URL prefix used to fetch share links
        #[arg(long, conflicts_with = "no_proxy")]
        proxy: Option<String>,

        /// Fetch share links directly
        #[arg(long)]
        no_proxy: bool,

        /// Set the preset store directory
        #[arg(long)]
        presets_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
