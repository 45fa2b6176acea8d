//! Library exports for registrar-cli.
//!
//! This module exports the CLI structure so it can be inspected by tools
//! such as documentation generators.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
