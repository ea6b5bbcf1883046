// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["modpack-installer", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_install() {
    let cli = Cli::try_parse_from([
        "modpack-installer",
        "install",
        "All the Mods 9.zip",
        "--modsdir",
        "/games/atm9/mods",
        "--instance-dir",
        "/games/atm9",
        "--update-from",
        "/games/atm9-old",
        "--downloads-dir",
        "~/Downloads",
        "--api-key",
        "k",
        "--include-optional",
    ])
    .unwrap();

    let Some(Command::Install(args)) = cli.command else {
        panic!("expected install command");
    };
    assert_eq!(args.zipfile, PathBuf::from("All the Mods 9.zip"));
    assert_eq!(args.mods_dir, PathBuf::from("/games/atm9/mods"));
    assert_eq!(args.instance_dir, Some(PathBuf::from("/games/atm9")));
    assert_eq!(args.update_from, Some(PathBuf::from("/games/atm9-old")));
    assert_eq!(args.downloads_dir, Some(PathBuf::from("~/Downloads")));
    assert_eq!(args.api_key.as_deref(), Some("k"));
    assert!(args.include_optional);
}

#[test]
fn test_install_requires_modsdir() {
    let err = Cli::try_parse_from(["modpack-installer", "install", "pack.zip"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_update_from_requires_instance_dir() {
    let err = Cli::try_parse_from([
        "modpack-installer",
        "install",
        "pack.zip",
        "--modsdir",
        "mods",
        "--update-from",
        "old",
    ])
    .unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "modpack-installer",
        "-l",
        "5",
        "-i",
        "a.toml",
        "--ini",
        "b.toml",
        "-s",
        "paths.packs=/tmp/packs",
        "--no-default-inis",
        "options",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert!(cli.global.no_default_inis);
    assert!(matches!(cli.command, Some(Command::Options)));
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["modpack-installer", "-l", "7", "version"]).is_err());
}

#[test]
fn test_to_config_overrides() {
    let cli = Cli::try_parse_from([
        "modpack-installer",
        "-l",
        "4",
        "--log-file",
        "install.log",
        "-s",
        "curseforge.api_url=http://localhost:1",
        "inis",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "curseforge.api_url=http://localhost:1",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "global.log_file=install.log",
    ]
    "#);
}
