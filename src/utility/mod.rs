// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   copy:    copy_dir_contents_async(), carry_over_async()
//!   rename:  move_file()   rename, copy+remove across devices
//!   path:    expand_home()
//! ```

pub mod fs;
