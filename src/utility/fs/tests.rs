// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{ALWAYS_CARRY_OVER, carry_over_async, copy_dir_contents_async};
use super::rename::copy_then_remove;
use super::{expand_home, move_file};
use crate::net::partial_path;
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_move_file_removes_source() {
    let temp = temp_dir();
    let src = temp.path().join("dl/a+b.jar");
    let dst = temp.path().join("mods/a b.jar");
    std::fs::create_dir_all(src.parent().unwrap()).unwrap();
    std::fs::write(&src, b"jar bytes").unwrap();

    move_file(&src, &dst).unwrap();

    assert!(!src.exists());
    assert_eq!(std::fs::read(&dst).unwrap(), b"jar bytes");
}

#[test]
fn test_move_file_missing_source_is_error() {
    let temp = temp_dir();
    let result = move_file(&temp.path().join("nope.jar"), &temp.path().join("x.jar"));
    assert!(result.is_err());
}

#[test]
fn test_copy_then_remove_places_file() {
    let temp = temp_dir();
    let src = temp.path().join("a+b.jar");
    let dst = temp.path().join("a b.jar");
    std::fs::write(&src, b"jar bytes").unwrap();

    copy_then_remove(&src, &dst, |from, to| std::fs::copy(from, to)).unwrap();

    assert!(!src.exists());
    assert!(!partial_path(&dst).exists());
    assert_eq!(std::fs::read(&dst).unwrap(), b"jar bytes");
}

#[test]
fn test_copy_then_remove_failed_copy_leaves_no_destination() {
    let temp = temp_dir();
    let src = temp.path().join("big.jar");
    let dst = temp.path().join("mods/big.jar");
    std::fs::create_dir_all(dst.parent().unwrap()).unwrap();
    std::fs::write(&src, b"full contents").unwrap();

    // disk fills up after a few bytes
    let result = copy_then_remove(&src, &dst, |_, to| {
        std::fs::write(to, b"full")?;
        Err(std::io::Error::other("no space left on device"))
    });

    assert!(result.is_err());
    assert!(!dst.exists(), "a truncated copy must not count as installed");
    assert!(!partial_path(&dst).exists());
    assert_eq!(std::fs::read(&src).unwrap(), b"full contents");
}

#[test]
fn test_expand_home() {
    assert_eq!(expand_home("/abs/path"), PathBuf::from("/abs/path"));
    assert_eq!(expand_home("relative"), PathBuf::from("relative"));
    assert_eq!(expand_home("~user/x"), PathBuf::from("~user/x"));

    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/Downloads"), home.join("Downloads"));
    }
}

#[tokio::test]
async fn test_copy_dir_contents_merges() {
    let temp = temp_dir();
    let src = temp.path().join("overrides");
    let dst = temp.path().join("instance");
    std::fs::create_dir_all(src.join("config")).unwrap();
    std::fs::write(src.join("config/mod.cfg"), "new").unwrap();
    std::fs::create_dir_all(dst.join("config")).unwrap();
    std::fs::write(dst.join("config/mod.cfg"), "old").unwrap();
    std::fs::write(dst.join("config/user.cfg"), "mine").unwrap();

    copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("config/mod.cfg")).unwrap(), "new");
    assert_eq!(std::fs::read_to_string(dst.join("config/user.cfg")).unwrap(), "mine");
}

#[tokio::test]
async fn test_carry_over_respects_always_list() {
    let temp = temp_dir();
    let old = temp.path().join("old");
    let new = temp.path().join("new");
    std::fs::create_dir_all(old.join("screenshots")).unwrap();
    std::fs::write(old.join("screenshots/shot.png"), "png").unwrap();
    std::fs::write(old.join("options.txt"), "old options").unwrap();
    std::fs::write(old.join("journeymap.cfg"), "old map").unwrap();
    std::fs::write(old.join("saves.dat"), "world").unwrap();

    std::fs::create_dir_all(&new).unwrap();
    std::fs::write(new.join("options.txt"), "pack options").unwrap();
    std::fs::write(new.join("journeymap.cfg"), "pack map").unwrap();

    let carried = carry_over_async(&old, &new, &ALWAYS_CARRY_OVER).await.unwrap();

    assert_eq!(carried, 3);
    assert_eq!(std::fs::read_to_string(new.join("options.txt")).unwrap(), "old options");
    assert_eq!(std::fs::read_to_string(new.join("journeymap.cfg")).unwrap(), "pack map");
    assert_eq!(std::fs::read_to_string(new.join("saves.dat")).unwrap(), "world");
    assert!(new.join("screenshots/shot.png").is_file());
}
