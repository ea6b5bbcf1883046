// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Modpack archives and their manifest.
//!
//! ```text
//! pack.zip
//!   manifest.json     --> Manifest { minecraft, files[], overrides }
//!   overrides/        --> merged into the instance directory
//!
//! PackArchive::extract_into(".packs") --> .packs/<pack name>/
//! ```

pub mod archive;


use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{InstallerResult, PackError};

/// File name of the manifest at the root of a pack.
pub const MANIFEST_FILE: &str = "manifest.json";

/// The only manifest type this installer understands.
pub const MINECRAFT_MODPACK: &str = "minecraftModpack";

/// Pack manifest (`manifest.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default = "default_manifest_type")]
    pub manifest_type: String,
    #[serde(default)]
    pub manifest_version: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub minecraft: MinecraftInfo,
    #[serde(default)]
    pub files: Vec<ManifestFile>,
    /// Directory inside the pack whose contents go into the instance.
    #[serde(default = "default_overrides")]
    pub overrides: String,
}

/// Game version and mod loaders the pack targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinecraftInfo {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub mod_loaders: Vec<ModLoader>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModLoader {
    pub id: String,
    #[serde(default)]
    pub primary: bool,
}

/// One mod file referenced by the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestFile {
    #[serde(rename = "projectID")]
    pub project_id: u64,
    #[serde(rename = "fileID")]
    pub file_id: u64,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_manifest_type() -> String {
    MINECRAFT_MODPACK.to_string()
}

fn default_overrides() -> String {
    "overrides".to_string()
}

const fn default_required() -> bool {
    true
}

impl Manifest {
    /// Parse a manifest from JSON text.
    ///
    /// `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `PackError::ManifestParse` for malformed JSON and
    /// `PackError::UnsupportedManifest` for non-modpack manifests.
    pub fn parse(content: &str, origin: &Path) -> InstallerResult<Self> {
        let manifest: Self =
            serde_json::from_str(content).map_err(|source| PackError::ManifestParse {
                path: origin.to_path_buf(),
                source,
            })?;
        if manifest.manifest_type != MINECRAFT_MODPACK {
            return Err(PackError::UnsupportedManifest(manifest.manifest_type).into());
        }
        Ok(manifest)
    }

    /// Read `manifest.json` from an extracted pack directory.
    ///
    /// # Errors
    ///
    /// Returns `PackError::ManifestNotFound` if the file is missing, plus any
    /// error from [`Manifest::parse`].
    pub fn from_pack_dir(pack_dir: &Path) -> InstallerResult<Self> {
        let path = pack_dir.join(MANIFEST_FILE);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PackError::ManifestNotFound(path).into());
            }
            Err(e) => return Err(e.into()),
        };
        Self::parse(&content, &path)
    }

    /// Files to install; optional entries are included only when asked for.
    pub fn files_to_install(&self, include_optional: bool) -> impl Iterator<Item = &ManifestFile> {
        self.files
            .iter()
            .filter(move |f| f.required || include_optional)
    }

    /// Location of the overrides directory inside an extracted pack.
    #[must_use]
    pub fn overrides_dir(&self, pack_dir: &Path) -> PathBuf {
        pack_dir.join(&self.overrides)
    }

    /// The primary mod loader id, e.g. `forge-47.2.0`.
    #[must_use]
    pub fn primary_loader(&self) -> Option<&str> {
        self.minecraft
            .mod_loaders
            .iter()
            .find(|l| l.primary)
            .or_else(|| self.minecraft.mod_loaders.first())
            .map(|l| l.id.as_str())
    }
}
