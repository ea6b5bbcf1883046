// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Line-oriented user interaction.

use std::io::{self, BufRead, Write};

/// Where the reconciler writes instructions and reads answers from.
pub trait Prompt {
    /// Writes one line of output.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the line cannot be written.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Reads one line of input without its line terminator.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if reading fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Prompt on the process's stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Prompt for ConsolePrompt {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
