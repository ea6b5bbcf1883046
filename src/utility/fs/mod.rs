// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! copy:    copy_dir_contents_async()  recursive merge, overwrite
//!          carry_over_async()         user files from a previous install
//! rename:  move_file()                rename, falls back to copy + remove
//! path:    expand_home()              "~" and "~/..." expansion
//! ```

pub mod copy;
pub mod path;
pub mod rename;

pub use path::expand_home;
pub use rename::move_file;

#[cfg(test)]
mod tests;
