// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::Result;
use anyhow::Context;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Entries carried over from a previous install even if the new one has them.
///
/// Anything else is only carried over when the new install lacks it.
pub const ALWAYS_CARRY_OVER: [&str; 5] = [
    "options.txt",
    "optionsof.txt",
    "servers.dat",
    "servers.dat_old",
    "screenshots",
];

/// Recursively copies all contents from src directory to dst directory (async version).
///
/// Creates dst if it doesn't exist. Existing files in dst are overwritten,
/// files only present in dst are left alone.
///
/// # Example
/// ```no_run
/// use modpack_installer::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new(".packs/pack/overrides"), Path::new("instance")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Carries user files from a previous install into a new one.
///
/// Only top-level entries of `old` are considered. An entry whose name is in
/// `always` replaces (files) or is merged into (directories) the new install;
/// any other entry is copied only if `new` has nothing with that name.
///
/// Returns the number of top-level entries copied.
///
/// # Errors
///
/// Returns an error if `old` cannot be read or a copy fails.
pub async fn carry_over_async(old: &Path, new: &Path, always: &[&str]) -> Result<usize> {
    fs::create_dir_all(new)
        .await
        .with_context(|| format!("failed to create directory {}", new.display()))?;

    let mut entries = fs::read_dir(old)
        .await
        .with_context(|| format!("failed to read directory {}", old.display()))?;

    let mut carried = 0;
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", old.display()))?
    {
        let name = entry.file_name();
        let src_path = entry.path();
        let dst_path = new.join(&name);

        let forced = always.iter().any(|a| name.as_os_str() == *a);
        if !forced && fs::try_exists(&dst_path).await.unwrap_or(false) {
            debug!(path = %dst_path.display(), "already in new install, not carried over");
            continue;
        }

        if src_path.is_dir() {
            copy_dir_contents_async(&src_path, &dst_path).await?;
        } else {
            fs::copy(&src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
        debug!(from = %src_path.display(), to = %dst_path.display(), "carried over");
        carried += 1;
    }

    Ok(carried)
}
