// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CurseForge REST API client.
//!
//! ```text
//! GET {api}/v1/mods/{project}/files/{file} --> ModFile  (name, downloadUrl?)
//! GET {api}/v1/mods/{project}              --> ModInfo  (slug, websiteUrl)
//!
//! Every response is wrapped as { "data": ... }; requests carry x-api-key.
//! ```

pub mod resolver;


use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use serde::Deserialize;
use tracing::debug;

use crate::config::types::CurseForgeConfig;
use crate::error::InstallerResult;
use crate::net::Downloader;

pub use resolver::{ModResolver, ResolveReport};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

/// A single file of a project.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModFile {
    pub id: u64,
    #[serde(default)]
    pub mod_id: u64,
    #[serde(default)]
    pub display_name: String,
    pub file_name: String,
    /// `null` when the author has disabled third-party downloads.
    #[serde(default)]
    pub download_url: Option<String>,
    #[serde(default)]
    pub file_length: u64,
}

/// Project metadata, used to build a browser link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModInfo {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub links: ModLinks,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModLinks {
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Authenticated client for the CurseForge API.
#[derive(Clone)]
pub struct CurseForgeClient {
    api_url: String,
    api_key: String,
    website_url: String,
    interrupt: Arc<AtomicBool>,
}

impl std::fmt::Debug for CurseForgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurseForgeClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"<hidden>")
            .field("website_url", &self.website_url)
            .finish_non_exhaustive()
    }
}

impl CurseForgeClient {
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if no API key is configured.
    pub fn new(config: &CurseForgeConfig) -> InstallerResult<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            website_url: config.website_url.trim_end_matches('/').to_string(),
            interrupt: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Share an interrupt flag with every request made by this client.
    #[must_use]
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt = flag;
        self
    }

    #[must_use]
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.interrupt)
    }

    #[must_use]
    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    fn request(&self, path: &str) -> Downloader {
        Downloader::new()
            .url(format!("{}{path}", self.api_url))
            .header(API_KEY_HEADER, &self.api_key)
            .with_interrupt(Arc::clone(&self.interrupt))
            .silent()
    }

    /// Looks up one file of a project.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the response is not
    /// a file record.
    pub async fn file_info(&self, project_id: u64, file_id: u64) -> InstallerResult<ModFile> {
        debug!(project_id, file_id, "fetching file info");
        let envelope: Envelope<ModFile> = self
            .request(&format!("/v1/mods/{project_id}/files/{file_id}"))
            .fetch_json()
            .await?;
        Ok(envelope.data)
    }

    /// Looks up a project.
    ///
    /// # Errors
    ///
    /// Returns a `NetworkError` if the request fails or the response is not
    /// a project record.
    pub async fn mod_info(&self, project_id: u64) -> InstallerResult<ModInfo> {
        debug!(project_id, "fetching mod info");
        let envelope: Envelope<ModInfo> = self
            .request(&format!("/v1/mods/{project_id}"))
            .fetch_json()
            .await?;
        Ok(envelope.data)
    }

    /// Browser page from which `file_id` of the project can be downloaded.
    #[must_use]
    pub fn manual_url(&self, info: &ModInfo, file_id: u64) -> String {
        match info.links.website_url.as_deref().map(|u| u.trim_end_matches('/')) {
            Some(page) if !page.is_empty() => format!("{page}/download/{file_id}"),
            _ => format!(
                "{}/minecraft/mc-mods/{}/download/{file_id}",
                self.website_url, info.slug
            ),
        }
    }

    /// Fallback link used when the project itself cannot be looked up.
    #[must_use]
    pub fn project_url(&self, project_id: u64) -> String {
        format!("{}/projects/{project_id}", self.website_url)
    }
}
