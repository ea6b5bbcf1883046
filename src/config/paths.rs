// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! packs/               (extracted pack data, default ".packs")
//!   <pack name>/
//!     manifest.json
//!     overrides/
//! downloads            (where the browser saves manual downloads)
//!   configured value --> dirs::download_dir() --> ~/Downloads
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utility::fs::expand_home;

/// Filesystem locations used by the installer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Root directory for extracted pack data.
    pub packs: PathBuf,
    /// Browser download directory searched for manual downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            packs: PathBuf::from(".packs"),
            downloads: None,
        }
    }
}

impl PathsConfig {
    /// Expand `~` in configured paths.
    pub fn resolve(&mut self) {
        self.packs = expand_home(&self.packs.to_string_lossy());
        if let Some(downloads) = &self.downloads {
            self.downloads = Some(expand_home(&downloads.to_string_lossy()));
        }
    }

    /// The directory offered as default when asking for manual downloads.
    ///
    /// Uses the configured value, then the platform downloads folder, then
    /// `~/Downloads`, and finally the current directory.
    #[must_use]
    pub fn downloads_dir(&self) -> PathBuf {
        self.downloads
            .clone()
            .or_else(dirs::download_dir)
            .or_else(|| dirs::home_dir().map(|home| home.join("Downloads")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
