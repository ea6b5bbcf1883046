// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modpack-installer.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modpack.toml (cwd, unless --no-default-inis)
//! 3. --ini files, in order
//! 4. MODPACK_* env vars
//! 5. --set overrides
//! 6. dedicated CLI flags (--api-key, --downloads-dir)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODPACK_CURSEFORGE__API_KEY=...   → curseforge.api_key
//! MODPACK_PATHS__DOWNLOADS=/dl      → paths.downloads = "/dl"
//! MODPACK_GLOBAL__OUTPUT_LOG_LEVEL=4 → global.output_log_level = 4
//! ```

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use paths::PathsConfig;
use types::{CurseForgeConfig, GlobalConfig};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "modpack.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "MODPACK";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// `CurseForge` API options.
    pub curseforge: CurseForgeConfig,
    /// Paths configuration.
    pub paths: PathsConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modpack_installer::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modpack.toml")
    ///     .with_env_prefix("MODPACK")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a `CurseForge` URL is not an http(s) URL.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.paths.resolve();
        self.curseforge.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// The API key is shown as `[hidden]` when set. Output is ordered by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_curseforge_options(&mut options);
        self.format_paths_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_curseforge_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "curseforge.api_url".into(),
            self.curseforge.api_url.clone(),
        );
        let key = if self.curseforge.api_key.is_empty() {
            String::new()
        } else {
            "[hidden]".to_string()
        };
        options.insert("curseforge.api_key".into(), key);
        options.insert(
            "curseforge.website_url".into(),
            self.curseforge.website_url.clone(),
        );
    }

    fn format_paths_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "paths.packs".into(),
            self.paths.packs.display().to_string(),
        );
        options.insert(
            "paths.downloads".into(),
            self.paths.downloads_dir().display().to_string(),
        );
    }
}
