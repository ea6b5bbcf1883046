// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns manifest entries into files in the mods directory.
//!
//! ```text
//! for each file to install:
//!   file_info --> mods/<fileName> exists? --> skipped
//!            |
//!            +-- downloadUrl --> download ok --> downloaded
//!            |                        | err
//!            +-- null ----------------+--> mod_info --> manual url --> pending
//! ```

use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering;

use bon::Builder;
use tracing::{info, warn};

use super::{CurseForgeClient, ModFile};
use crate::error::{InstallerResult, NetworkError};
use crate::net::{Downloader, ProgressDisplay};
use crate::pack::Manifest;
use crate::reconcile::PendingDownload;

/// Outcome of [`ModResolver::fetch_all`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Files downloaded in this run.
    pub downloaded: Vec<PathBuf>,
    /// Files that were already in place.
    pub skipped: Vec<PathBuf>,
    /// Files the user has to download through a browser.
    pub pending: Vec<PendingDownload>,
}

/// Downloads the mods listed in a manifest.
#[derive(Debug, Builder)]
pub struct ModResolver {
    client: CurseForgeClient,
    #[builder(into)]
    mods_dir: PathBuf,
    #[builder(default = false)]
    include_optional: bool,
    #[builder(default)]
    progress: ProgressDisplay,
}

impl ModResolver {
    #[must_use]
    pub fn mods_dir(&self) -> &Path {
        &self.mods_dir
    }

    /// Fetches every manifest file that is not already present.
    ///
    /// Files without a third-party download URL, and files whose download
    /// fails, are returned as pending manual downloads.
    ///
    /// # Errors
    ///
    /// Returns an error if a file lookup fails, the mods directory cannot be
    /// created, or the run is interrupted.
    pub async fn fetch_all(&self, manifest: &Manifest) -> InstallerResult<ResolveReport> {
        tokio::fs::create_dir_all(&self.mods_dir)
            .await
            .map_err(|e| crate::error::FsError::from_io(&self.mods_dir, e))?;

        let files: Vec<_> = manifest.files_to_install(self.include_optional).collect();
        info!(count = files.len(), mods_dir = %self.mods_dir.display(), "resolving mods");

        let mut report = ResolveReport::default();
        for entry in files {
            if self.client.interrupt_handle().load(Ordering::Relaxed) {
                return Err(NetworkError::Interrupted.into());
            }

            let file = self
                .client
                .file_info(entry.project_id, entry.file_id)
                .await?;
            let dest = self.destination(&file)?;

            if dest.is_file() {
                info!(file = %file.file_name, "already present, skipping");
                report.skipped.push(dest);
                continue;
            }

            match file.download_url.as_deref() {
                Some(url) => match self.download(url, &dest).await {
                    Ok(()) => {
                        info!(file = %file.file_name, "downloaded");
                        report.downloaded.push(dest);
                    }
                    Err(e) if e.is_interrupted() => return Err(e),
                    Err(e) => {
                        warn!(file = %file.file_name, error = %e, "download failed, falling back to manual download");
                        let page = self.manual_page(entry.project_id, file.id).await;
                        report.pending.push(PendingDownload::new(page, dest));
                    }
                },
                None => {
                    info!(file = %file.file_name, "third-party downloads disabled");
                    let page = self.manual_page(entry.project_id, file.id).await;
                    report.pending.push(PendingDownload::new(page, dest));
                }
            }
        }

        info!(
            downloaded = report.downloaded.len(),
            skipped = report.skipped.len(),
            manual = report.pending.len(),
            "mods resolved"
        );
        Ok(report)
    }

    /// `mods_dir/<fileName>`, keeping only the last path component of the
    /// name the API returned.
    fn destination(&self, file: &ModFile) -> InstallerResult<PathBuf> {
        Path::new(&file.file_name)
            .file_name()
            .map(|name| self.mods_dir.join(name))
            .ok_or_else(|| {
                NetworkError::UnexpectedResponse {
                    url: format!("file {} of project {}", file.id, file.mod_id),
                    message: format!("unusable file name '{}'", file.file_name),
                }
                .into()
            })
    }

    async fn download(&self, url: &str, dest: &Path) -> InstallerResult<()> {
        Downloader::new()
            .url(url)
            .file(dest)
            .progress(self.progress)
            .with_interrupt(self.client.interrupt_handle())
            .download()
            .await
    }

    async fn manual_page(&self, project_id: u64, file_id: u64) -> String {
        match self.client.mod_info(project_id).await {
            Ok(info) => self.client.manual_url(&info, file_id),
            Err(e) => {
                warn!(project_id, error = %e, "project lookup failed, linking the project page");
                self.client.project_url(project_id)
            }
        }
    }
}
