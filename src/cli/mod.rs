// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modpack-installer using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modpack-installer [global options] <command>
//! install <ZIPFILE> --modsdir <DIR>
//! version
//! options
//! inis
//! ```

pub mod global;
pub mod install;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::install::InstallArgs;
use clap::{Parser, Subcommand};

/// CurseForge modpack installer.
///
/// Unpacks a modpack, downloads its mods and walks you through the ones
/// that have to be fetched by hand.
#[derive(Debug, Parser)]
#[command(
    name = "modpack-installer",
    author,
    version,
    about = "CurseForge Modpack Installer",
    long_about = "modpack-installer Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Installs a CurseForge modpack .zip into a mods directory.\n\n\
                  `modpack-installer install pack.zip --modsdir <dir>` downloads\n\
                  every mod it can and lists the rest for manual download. See\n\
                  `modpack-installer <command> --help` for more information.",
    after_help = "CONFIG FILES:\n\n\
                  By default, modpack.toml in the current directory is loaded if it\n\
                  exists. Additional files can be given with --ini and are loaded\n\
                  after it, later files overriding earlier ones. MODPACK_* environment\n\
                  variables (e.g. MODPACK_CURSEFORGE__API_KEY) and --set override\n\
                  file values. Use --no-default-inis to only use --ini."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Inis,

    /// Installs a modpack.
    Install(InstallArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
