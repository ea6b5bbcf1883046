// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations on disk.

use std::path::PathBuf;

use modpack_installer::config::Config;
use modpack_installer::logging::LogLevel;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

// =============================================================================
// Loading from TOML
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 4
file_log_level = 5
log_file = "logs/install.log"

[curseforge]
api_url = "https://api.curseforge.com"
api_key = "abc"
website_url = "https://legacy.curseforge.com"

[paths]
packs = "/data/packs"
downloads = "/data/Downloads"
"#;
    let config = Config::parse(toml).unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/install.log")));
    assert_eq!(config.curseforge.api_key, "abc");
    assert_eq!(config.curseforge.website_url, "https://legacy.curseforge.com");
    assert_eq!(config.paths.packs, PathBuf::from("/data/packs"));
    assert_eq!(config.paths.downloads_dir(), PathBuf::from("/data/Downloads"));
}

#[test]
fn config_parse_rejects_bad_log_level() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_from_missing_file_errors() {
    let temp = temp_dir();
    assert!(Config::from_file(temp.path().join("absent.toml")).is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_builder_layered_files() {
    let temp = temp_dir();
    let base = temp.path().join("modpack.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(
        &base,
        "[curseforge]\napi_key = \"base\"\n\n[paths]\npacks = \"/base/packs\"\n",
    )
    .unwrap();
    std::fs::write(&local, "[curseforge]\napi_key = \"local\"\n").unwrap();

    let loader = Config::builder()
        .add_toml_file_optional(&base)
        .add_toml_file(&local);
    let listed = loader.format_loaded_files();
    let config = loader.build().unwrap();

    assert_eq!(config.curseforge.api_key, "local");
    assert_eq!(config.paths.packs, PathBuf::from("/base/packs"));
    assert_eq!(listed.len(), 2);
    assert!(listed[0].starts_with("1. [optional]"));
    assert!(listed[1].starts_with("2. [file]"));
}

#[test]
fn config_set_beats_files() {
    let config = Config::builder()
        .add_toml_str("[paths]\npacks = \"/from/file\"\n")
        .apply_overrides(&["paths.packs=/from/cli", "global.output_log_level=1"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.paths.packs, PathBuf::from("/from/cli"));
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
}

#[test]
fn config_format_options() {
    let config = Config::parse(
        r#"
[curseforge]
api_key = "secret"

[paths]
packs = "/p"
downloads = "/dl"
"#,
    )
    .unwrap();

    assert_eq!(
        config.format_options(),
        vec![
            "curseforge.api_key      = [hidden]",
            "curseforge.api_url      = https://api.curseforge.com",
            "curseforge.website_url  = https://www.curseforge.com",
            "global.file_log_level   = 5",
            "global.log_file         = ",
            "global.output_log_level = 3",
            "paths.downloads         = /dl",
            "paths.packs             = /p",
        ]
    );
}
