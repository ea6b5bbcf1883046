// modpack-installer: CurseForge Modpack Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Install command implementation.
//!
//! ```text
//! pack.zip --> .packs/<name>/ --> manifest.json
//!                                      |
//!                          ModResolver::fetch_all
//!                         /                     \
//!                  mods/*.jar              pending manual downloads
//!                                                |
//!                                  Reconciler (blocking thread)
//!                                                |
//!          overrides/ --> instance dir <-- carried over from --update-from
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Context;
use tracing::{info, warn};

use crate::cli::install::InstallArgs;
use crate::config::Config;
use crate::curseforge::{CurseForgeClient, ModResolver, ResolveReport};
use crate::error::Result;
use crate::net::ProgressDisplay;
use crate::pack::Manifest;
use crate::pack::archive::PackArchive;
use crate::reconcile::{ConsolePrompt, Prompt, ReconcileSummary, Reconciler};
use crate::utility::fs::copy::{ALWAYS_CARRY_OVER, carry_over_async, copy_dir_contents_async};
use crate::utility::fs::expand_home;

/// What an install run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Extracted pack data.
    pub pack_dir: PathBuf,
    pub resolved: ResolveReport,
    pub reconciled: ReconcileSummary,
    /// Whether overrides were merged into an instance directory.
    pub overrides_applied: bool,
    /// Top-level entries carried over from the previous install.
    pub carried_over: usize,
}

/// Main handler for install command.
///
/// # Errors
///
/// Returns an error if the pack cannot be extracted or parsed, the API key is
/// missing, a mod lookup fails, input closes during manual downloads, or the
/// overrides cannot be copied.
pub async fn run_install_command(args: &InstallArgs, config: &Config) -> Result<()> {
    let interrupt = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupt);
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if flag.swap(true, Ordering::SeqCst) {
                std::process::exit(130);
            }
            warn!("Received Ctrl+C, stopping downloads (press again to quit)...");
        }
    });

    install(args, config, ConsolePrompt::new(), interrupt).await?;
    Ok(())
}

/// Runs the whole install with `prompt` handling manual downloads.
///
/// `interrupt` stops downloads when set. It is set once downloads are over,
/// so a watcher can tell the two phases apart.
///
/// # Errors
///
/// See [`run_install_command`].
pub async fn install<P>(
    args: &InstallArgs,
    config: &Config,
    mut prompt: P,
    interrupt: Arc<AtomicBool>,
) -> Result<InstallReport>
where
    P: Prompt + Send + 'static,
{
    let mut curseforge = config.curseforge.clone();
    if let Some(key) = &args.api_key {
        curseforge.api_key.clone_from(key);
    }
    let client = CurseForgeClient::new(&curseforge)?.with_interrupt(Arc::clone(&interrupt));

    let archive = PackArchive::new(&args.zipfile);
    let packs_root = config.paths.packs.clone();
    let extracted = tokio::task::spawn_blocking(move || archive.extract_into(&packs_root))
        .await
        .context("pack extraction panicked")??;
    if !extracted.fresh {
        prompt.write_line("[pack data already unzipped]")?;
    }

    let manifest = Manifest::from_pack_dir(&extracted.dir)?;
    info!(
        name = %manifest.name,
        version = %manifest.version,
        minecraft = %manifest.minecraft.version,
        loader = manifest.primary_loader().unwrap_or("unknown"),
        "installing pack"
    );

    let resolver = ModResolver::builder()
        .client(client)
        .mods_dir(args.mods_dir.clone())
        .include_optional(args.include_optional)
        .progress(ProgressDisplay::Bar)
        .build();
    let resolved = resolver.fetch_all(&manifest).await?;

    // downloads are over; from here on a Ctrl+C quits right away
    interrupt.store(true, Ordering::SeqCst);

    let downloads_dir = args.downloads_dir.as_ref().map_or_else(
        || config.paths.downloads_dir(),
        |dir| expand_home(&dir.to_string_lossy()),
    );
    let pending = resolved.pending.clone();
    let (mut prompt, reconciled) = tokio::task::spawn_blocking(move || {
        let mut reconciler = Reconciler::new(prompt, downloads_dir);
        let summary = reconciler.reconcile(&pending);
        (reconciler.into_prompt(), summary)
    })
    .await
    .context("manual download prompt panicked")?;
    let reconciled = reconciled?;

    let mut report = InstallReport {
        pack_dir: extracted.dir,
        resolved,
        reconciled,
        ..InstallReport::default()
    };

    if let Some(instance_dir) = &args.instance_dir {
        let overrides = manifest.overrides_dir(&report.pack_dir);
        if overrides.is_dir() {
            copy_dir_contents_async(&overrides, instance_dir).await?;
            report.overrides_applied = true;
            info!(instance = %instance_dir.display(), "applied overrides");
        } else {
            warn!(dir = %overrides.display(), "pack has no overrides directory");
        }

        if let Some(old) = &args.update_from {
            report.carried_over = carry_over_async(old, instance_dir, &ALWAYS_CARRY_OVER).await?;
            info!(
                from = %old.display(),
                entries = report.carried_over,
                "carried over files from previous install"
            );
        }
    }

    prompt.write_line(&format!(
        "Successfully downloaded the mods to {}",
        args.mods_dir.display()
    ))?;
    Ok(report)
}
