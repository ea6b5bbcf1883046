// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manual download reconciliation.
//!
//! Some mods can only be downloaded through a browser. This module lists
//! them, waits for the user, and picks the files up from the browser's
//! download directory.
//!
//! ```text
//!          +-------------------------------+
//!          v                               |
//!   missing = pending.filter(!is_file)     |
//!          |                               |
//!     empty? --yes--> done                 |
//!          | no                            |
//!   print instructions                     |
//!   ask for downloads dir (Enter = keep)   |
//!          |                               |
//!   for each missing item:                 |
//!     "a+b.jar" in dir? --> move           |
//!     "a b.jar" in dir? --> move           |
//!          +-------------------------------+
//! ```
//!
//! Unreadable directories and failed moves are warnings; the item is simply
//! looked for again on the next round.

pub mod prompt;


use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{InstallerResult, ReconcileError};
use crate::utility::fs::{expand_home, move_file};

pub use prompt::{ConsolePrompt, Prompt};

/// A file the resolver could not fetch on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDownload {
    source_url: String,
    destination: PathBuf,
}

impl PendingDownload {
    #[must_use]
    pub fn new(source_url: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source_url: source_url.into(),
            destination: destination.into(),
        }
    }

    /// Page the user should open to download the file.
    #[must_use]
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Exact path the file must end up at.
    #[must_use]
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&OsStr> {
        self.destination.file_name()
    }

    /// A regular file exists at the destination.
    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.destination.is_file()
    }

    /// Names to look for in the downloads directory, in order of preference.
    ///
    /// Browsers often save `a b.jar` as `a+b.jar`, so the `+` form comes
    /// first. Names without spaces yield a single candidate.
    #[must_use]
    pub fn candidate_names(&self) -> Vec<OsString> {
        let Some(name) = self.file_name() else {
            return Vec::new();
        };
        let bytes = name.as_encoded_bytes();
        if !bytes.contains(&b' ') {
            return vec![name.to_os_string()];
        }

        let mut plus = OsString::with_capacity(bytes.len());
        for (i, piece) in bytes.split(|b| *b == b' ').enumerate() {
            if i > 0 {
                plus.push("+");
            }
            // SAFETY: `piece` is `as_encoded_bytes` output split on an ASCII space.
            plus.push(unsafe { OsStr::from_encoded_bytes_unchecked(piece) });
        }
        vec![plus, name.to_os_string()]
    }
}

/// Counters for a finished reconciliation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Rounds in which the user was prompted.
    pub rounds: usize,
    /// Files moved out of the downloads directory.
    pub moved: usize,
}

/// Drives the manual download loop.
pub struct Reconciler<P> {
    prompt: P,
    downloads_dir: PathBuf,
}

impl<P: Prompt> Reconciler<P> {
    /// `default_dir` is offered when the user just presses Enter.
    pub const fn new(prompt: P, default_dir: PathBuf) -> Self {
        Self {
            prompt,
            downloads_dir: default_dir,
        }
    }

    /// Directory searched on the next round.
    #[must_use]
    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    /// Hands the prompt back, e.g. to print a final message.
    pub fn into_prompt(self) -> P {
        self.prompt
    }

    /// Blocks until every pending download has a file at its destination.
    ///
    /// Returns immediately, without prompting, when nothing is missing.
    ///
    /// # Errors
    ///
    /// Returns `ReconcileError::InputClosed` if input ends while files are
    /// still missing, and `ReconcileError::Prompt` if the prompt fails.
    pub fn reconcile(&mut self, pending: &[PendingDownload]) -> InstallerResult<ReconcileSummary> {
        let mut summary = ReconcileSummary::default();
        loop {
            let missing: Vec<&PendingDownload> =
                pending.iter().filter(|p| !p.is_satisfied()).collect();
            if missing.is_empty() {
                return Ok(summary);
            }

            summary.rounds += 1;
            self.print_instructions(&missing)?;
            let dir = self.ask_directory(missing.len())?;
            summary.moved += self.collect_from(&dir, &missing)?;
        }
    }

    fn say(&mut self, line: &str) -> InstallerResult<()> {
        self.prompt
            .write_line(line)
            .map_err(|e| ReconcileError::Prompt(e).into())
    }

    fn print_instructions(&mut self, missing: &[&PendingDownload]) -> InstallerResult<()> {
        self.say("==== MANUAL DOWNLOAD REQUIRED ====")?;
        self.say("The authors of these mods do not allow automated downloads.")?;
        self.say("Download each one in your browser; the files are picked up from your downloads directory.")?;
        self.say("If a link shows a 404 page, replace 'legacy.curseforge.com' with 'www.curseforge.com'.")?;
        for item in missing {
            let name = item
                .file_name()
                .map_or_else(String::new, |n| n.to_string_lossy().into_owned());
            self.say(&format!("* {} ({name})", item.source_url()))?;
        }
        let dir = self.downloads_dir.display().to_string();
        self.say(&format!(
            "Looking for downloads in {dir}. If your browser saves somewhere else, enter that directory;"
        ))?;
        self.say("otherwise press Enter once the downloads have finished.")
    }

    fn ask_directory(&mut self, remaining: usize) -> InstallerResult<PathBuf> {
        let answer = self
            .prompt
            .read_line()
            .map_err(ReconcileError::Prompt)?
            .ok_or(ReconcileError::InputClosed { remaining })?;

        let answer = answer.trim();
        if !answer.is_empty() {
            let requested = expand_home(answer);
            if requested.is_dir() {
                self.downloads_dir = requested;
            } else {
                warn!(input = %answer, "not a directory, keeping {}", self.downloads_dir.display());
                let line = format!(
                    "- '{answer}' is not a directory; still using {}",
                    self.downloads_dir.display()
                );
                self.say(&line)?;
            }
        }
        Ok(self.downloads_dir.clone())
    }

    /// Moves every missing file found in `dir`; returns how many were moved.
    fn collect_from(&mut self, dir: &Path, missing: &[&PendingDownload]) -> InstallerResult<usize> {
        self.say(&format!("Finding files in {}...", dir.display()))?;

        let mut available = match list_files(dir) {
            Ok(names) => names,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot read downloads directory");
                self.say(&format!("- cannot read {}: {e}", dir.display()))?;
                return Ok(0);
            }
        };

        let mut moved = 0;
        for item in missing {
            let Some(name) = item
                .candidate_names()
                .into_iter()
                .find(|n| available.contains(n))
            else {
                continue;
            };

            let src = dir.join(&name);
            match move_file(&src, item.destination()) {
                Ok(()) => {
                    available.remove(&name);
                    info!(from = %src.display(), to = %item.destination().display(), "moved manual download");
                    self.say(&src.display().to_string())?;
                    moved += 1;
                }
                Err(e) => {
                    warn!(from = %src.display(), error = %e, "failed to move manual download");
                    let line = format!(
                        "- could not move {} to {}: {e}",
                        src.display(),
                        item.destination().display()
                    );
                    self.say(&line)?;
                }
            }
        }
        Ok(moved)
    }
}

/// Names of the regular files (following symlinks) directly inside `dir`.
fn list_files(dir: &Path) -> std::io::Result<HashSet<OsString>> {
    let mut names = HashSet::new();
    for entry in std::fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        if entry.path().is_file() {
            names.insert(entry.file_name());
        }
    }
    Ok(names)
}
