// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for modpack-installer.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, CurseForgeConfig, PathsConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file log is written when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// CurseForge API access.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurseForgeConfig {
    /// Base URL of the REST API (no trailing slash needed).
    pub api_url: String,
    /// API key sent as `x-api-key`.
    pub api_key: String,
    /// Base URL of the website, used to build manual download links.
    pub website_url: String,
}

impl Default for CurseForgeConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.curseforge.com".to_string(),
            api_key: String::new(),
            website_url: "https://www.curseforge.com".to_string(),
        }
    }
}

impl CurseForgeConfig {
    /// Returns the API key, or an error if none is configured.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` if `api_key` is empty.
    pub fn require_api_key(&self) -> std::result::Result<&str, ConfigError> {
        let key = self.api_key.trim();
        if key.is_empty() {
            Err(ConfigError::MissingKey {
                section: "curseforge".to_string(),
                key: "api_key".to_string(),
            })
        } else {
            Ok(key)
        }
    }

    /// Validates that both URLs are absolute http(s) URLs.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [("api_url", &self.api_url), ("website_url", &self.website_url)] {
            if !(value.starts_with("https://") || value.starts_with("http://")) {
                return Err(ConfigError::InvalidValue {
                    section: "curseforge".to_string(),
                    key: key.to_string(),
                    message: format!("expected an http(s) URL, got '{value}'"),
                });
            }
        }
        Ok(())
    }
}
