// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!           InstallerError (~24 bytes)
//!                     |
//!     +------+------+-+----+------+----+
//!     |      |      |      |      |    |
//!     v      v      v      v      v    v
//!    Net    Cfg   Pack   Recon   Fs   Io
//!    Box    Box    Box    Box   Box  Box
//!
//! Sub-errors (unboxed internally):
//!   Network    DownloadFailed, Interrupted, HttpError, Reqwest, InvalidUrl,
//!              UnexpectedResponse
//!   Config     MissingKey, InvalidValue
//!   Pack       Zip, InvalidArchiveName, ManifestNotFound, ManifestParse,
//!              UnsupportedManifest
//!   Reconcile  InputClosed, Prompt
//!   Fs         NotFound, PermissionDenied, IoError
//!
//! All variants boxed => InstallerError fits in 24 bytes.
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`InstallerError`].
pub type InstallerResult<T> = std::result::Result<T, InstallerError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum InstallerError {
    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Pack archive or manifest error.
    #[error("pack error: {0}")]
    Pack(#[from] Box<PackError>),

    /// Manual download reconciliation stopped.
    #[error("reconcile error: {0}")]
    Reconcile(#[from] Box<ReconcileError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

impl InstallerError {
    /// True if this is a download stopped through the interrupt flag.
    #[must_use]
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Network(e) if matches!(**e, NetworkError::Interrupted))
    }
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for InstallerError {
                fn from(err: $error) -> Self {
                    InstallerError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    NetworkError => Network,
    ConfigError => Config,
    PackError => Pack,
    ReconcileError => Reconcile,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Download failed.
    #[error("download failed: {url} - {message}")]
    DownloadFailed { url: String, message: String },

    /// Download was interrupted by user or signal.
    #[error("download interrupted")]
    Interrupted,

    /// HTTP error response.
    #[error("http error {status}: {url}")]
    HttpError { status: u16, url: String },

    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Invalid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Response body did not match the expected JSON shape.
    #[error("unexpected response from {url}: {message}")]
    UnexpectedResponse { url: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Pack Errors ---

/// Errors raised while reading a modpack archive or its manifest.
#[derive(Debug, Error)]
pub enum PackError {
    /// The archive could not be opened or read as a zip file.
    #[error("failed to read archive '{path}': {source}")]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive has no usable file name to derive a pack name from.
    #[error("cannot derive a pack name from '{0}'")]
    InvalidArchiveName(PathBuf),

    /// The extracted pack has no manifest.
    #[error("manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    /// The manifest is not valid JSON or does not match the expected layout.
    #[error("failed to parse manifest '{path}': {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest describes something other than a Minecraft modpack.
    #[error("unsupported manifest type '{0}'")]
    UnsupportedManifest(String),
}

// --- Reconcile Errors ---

/// Errors that stop the manual download loop.
///
/// Missing files, invalid directories and failed moves are not errors; they are
/// reported to the user and retried on the next round.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// Standard input reached end-of-file while waiting for a directory.
    #[error("input closed with {remaining} manual download(s) still missing")]
    InputClosed { remaining: usize },

    /// Reading from or writing to the prompt failed.
    #[error("prompt I/O failed: {0}")]
    Prompt(#[source] std::io::Error),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),

    /// Permission denied.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classifies an I/O error raised while touching `path`.
    #[must_use]
    pub fn from_io(path: &std::path::Path, source: std::io::Error) -> Self {
        let display = path.display().to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(display),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(display),
            _ => Self::IoError {
                path: display,
                source,
            },
        }
    }
}
