// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{FsError, InstallerResult};
use crate::net::partial_path;

/// Moves a file, removing it from its source location.
///
/// Tries a plain rename first. When source and destination live on different
/// filesystems the file is copied to `<dst>.part`, renamed into place, and the
/// source removed afterwards. A failed copy never leaves anything at `dst`.
///
/// # Errors
///
/// Returns an [`FsError`] if the destination directory cannot be created, the
/// rename/copy fails, or the source cannot be removed after copying.
pub fn move_file(src: &Path, dst: &Path) -> InstallerResult<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| FsError::from_io(parent, e))?;
    }

    match std::fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::CrossesDevices => {
            debug!(
                src = %src.display(),
                dst = %dst.display(),
                "rename crosses filesystems, copying instead"
            );
            copy_then_remove(src, dst, |from, to| std::fs::copy(from, to))
        }
        Err(e) => Err(FsError::from_io(src, e).into()),
    }
}

/// Copy half of [`move_file`]; `copy` writes `src` into the partial path.
pub(crate) fn copy_then_remove<F>(src: &Path, dst: &Path, copy: F) -> InstallerResult<()>
where
    F: FnOnce(&Path, &Path) -> std::io::Result<u64>,
{
    let partial = partial_path(dst);
    let placed = copy(src, &partial)
        .map_err(|e| FsError::from_io(dst, e))
        .and_then(|_| std::fs::rename(&partial, dst).map_err(|e| FsError::from_io(dst, e)));
    if let Err(e) = placed {
        let _ = std::fs::remove_file(&partial);
        return Err(e.into());
    }

    std::fs::remove_file(src).map_err(|e| FsError::from_io(src, e))?;
    Ok(())
}
