//! Command handlers for naraka CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod input;
pub mod preset;
pub mod schema;
pub mod token;
