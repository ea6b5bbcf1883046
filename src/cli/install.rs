// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `install` command.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// The modpack .zip file.
    #[arg(value_name = "ZIPFILE")]
    pub zipfile: PathBuf,

    /// Directory the mods are placed in.
    #[arg(long = "modsdir", value_name = "DIR")]
    pub mods_dir: PathBuf,

    /// Instance directory the pack's overrides are merged into.
    #[arg(long = "instance-dir", value_name = "DIR")]
    pub instance_dir: Option<PathBuf>,

    /// Previous instance to carry options, servers and screenshots over from.
    #[arg(long = "update-from", value_name = "DIR", requires = "instance_dir")]
    pub update_from: Option<PathBuf>,

    /// Directory your browser saves downloads to.
    #[arg(long = "downloads-dir", value_name = "DIR")]
    pub downloads_dir: Option<PathBuf>,

    /// CurseForge API key, overrides curseforge.api_key.
    #[arg(long = "api-key", value_name = "KEY", env = "CURSEFORGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Also install files the manifest marks as optional.
    #[arg(long = "include-optional")]
    pub include_optional: bool,
}
