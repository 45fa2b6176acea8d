//! Build script for registrar-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("registrar")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Create, read, update and delete registrations")
        .long_about(
            "Command-line tool for storing person registrations (name, email, date of birth) in a local SQLite database",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("database")
                .long("database")
                .help("Path of the database file (default: ./registration.db)")
                .value_name("PATH")
                .global(true)
                .env("REGISTRAR_DATABASE"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (default: ./registrar.yaml if present)")
                .value_name("PATH")
                .global(true)
                .env("REGISTRAR_CONFIG"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the default busy timeout (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("REGISTRAR_BUSY_TIMEOUT")
                .value_parser(clap::value_parser!(u64).range(0..=2_147_483)),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Create a record")
                .long_about("Insert a registration and print its new id"),
            Command::new("read")
                .about("Read records")
                .long_about("Display all registrations, or one by id, in various formats"),
            Command::new("update")
                .about("Update a record by id")
                .long_about("Replace the name, email and date of birth of a registration"),
            Command::new("delete")
                .about("Delete a record by id")
                .long_about("Permanently remove a registration"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("registrar.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
