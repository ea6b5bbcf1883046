// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Pack archive extraction.
//!
//! ```text
//! some/dir/My Pack-1.2.zip --> pack name "My Pack-1.2"
//!   .packs/My Pack-1.2/ exists?  yes --> skip ("already unzipped")
//!                                no  --> unzip, remove dir on failure
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{FsError, InstallerResult, PackError};

/// A pack `.zip` on disk.
#[derive(Debug, Clone)]
pub struct PackArchive {
    path: PathBuf,
}

/// Where the pack data ended up and whether it was unpacked just now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub dir: PathBuf,
    pub fresh: bool,
}

/// Removes a partially extracted directory unless disarmed.
struct PartialDirGuard<'a> {
    dir: &'a Path,
    keep: bool,
}

impl Drop for PartialDirGuard<'_> {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_dir_all(self.dir);
        }
    }
}

impl PackArchive {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Pack name derived from the archive's file name without extension.
    ///
    /// # Errors
    ///
    /// Returns `PackError::InvalidArchiveName` if the path has no file stem.
    pub fn pack_name(&self) -> InstallerResult<String> {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| PackError::InvalidArchiveName(self.path.clone()).into())
    }

    /// Extracts the archive into `<packs_root>/<pack name>`.
    ///
    /// An existing pack directory is reused as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the archive cannot be opened or read, or the
    /// destination cannot be written. A failed extraction leaves no directory
    /// behind.
    pub fn extract_into(&self, packs_root: &Path) -> InstallerResult<Extracted> {
        let dir = packs_root.join(self.pack_name()?);
        if dir.is_dir() {
            info!(dir = %dir.display(), "pack data already unzipped");
            return Ok(Extracted { dir, fresh: false });
        }

        info!(archive = %self.path.display(), "extracting pack");
        let file = File::open(&self.path).map_err(|e| FsError::from_io(&self.path, e))?;
        let mut archive = zip::ZipArchive::new(file).map_err(|source| PackError::Zip {
            path: self.path.clone(),
            source,
        })?;

        std::fs::create_dir_all(&dir).map_err(|e| FsError::from_io(&dir, e))?;
        let mut guard = PartialDirGuard {
            dir: &dir,
            keep: false,
        };

        // ZipArchive::extract rejects entries escaping the target directory
        archive.extract(&dir).map_err(|source| PackError::Zip {
            path: self.path.clone(),
            source,
        })?;
        guard.keep = true;
        drop(guard);

        debug!(dir = %dir.display(), entries = archive.len(), "pack extracted");
        Ok(Extracted { dir, fresh: true })
    }
}
