// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

/// Expands a leading `~` to the user's home directory.
///
/// Only `~` on its own and `~/...` (or `~\...` on Windows) are expanded;
/// `~user` forms and paths without a home directory are returned unchanged.
#[must_use]
pub fn expand_home(input: &str) -> PathBuf {
    let Some(rest) = input.strip_prefix('~') else {
        return PathBuf::from(input);
    };

    let is_separator = |c: char| c == '/' || (cfg!(windows) && c == '\\');
    if !rest.is_empty() && !rest.starts_with(is_separator) {
        return PathBuf::from(input);
    }

    match dirs::home_dir() {
        Some(home) => {
            let rest = rest.trim_start_matches(is_separator);
            if rest.is_empty() { home } else { home.join(rest) }
        }
        None => PathBuf::from(input),
    }
}
