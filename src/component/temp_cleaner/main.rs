use super::report::{CleanFailure, CleanReport};
use crate::tools::{entry_size, list_entries, remove_entry};
use anyhow::{Context, Result};
use console::style;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rust_i18n::t;
use std::env;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub struct TempCleaner {
    shutdown_signal: Arc<AtomicBool>,
}

impl TempCleaner {
    #[must_use]
    pub const fn new(shutdown_signal: Arc<AtomicBool>) -> Self {
        Self { shutdown_signal }
    }

    pub fn run(&self) -> Result<()> {
        println!("{}", style(t!("cleaner.title")).cyan().bold());

        let temp_dir = env::temp_dir();
        println!(
            "{}",
            style(t!("cleaner.target", dir = temp_dir.display().to_string())).dim()
        );

        let confirm = Confirm::new()
            .with_prompt(t!("cleaner.confirm").to_string())
            .default(false)
            .interact()?;
        if !confirm {
            println!("{}", style(t!("cleaner.cancelled")).yellow());
            return Ok(());
        }

        let report = self.clean_dir(&temp_dir)?;
        self.print_report(&report);
        Ok(())
    }

    /// One best-effort pass over the immediate children of `dir`. Only a
    /// failed enumeration is an error; per-entry failures land in the report.
    pub fn clean_dir(&self, dir: &Path) -> Result<CleanReport> {
        let entries = list_entries(dir)
            .with_context(|| format!("Unable to list {}", dir.display()))?;

        let mut report = CleanReport::default();

        let progress_bar = ProgressBar::new(entries.len() as u64);
        progress_bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("Invalid progress bar template")
                .progress_chars("#>-"),
        );
        progress_bar.set_message(t!("cleaner.progress").to_string());

        for path in entries {
            if self.shutdown_signal.load(Ordering::SeqCst) {
                progress_bar.abandon_with_message(t!("cleaner.interrupted").to_string());
                warn!("Cleanup interrupted, {} entries removed so far", report.removed);
                break;
            }

            // Size first: once the entry is gone there is nothing left to
            // measure.
            let size = entry_size(&path);
            match remove_entry(&path) {
                Ok(()) => {
                    report.removed += 1;
                    report.bytes_reclaimed += size;
                }
                Err(e) => {
                    warn!("Failed to delete {}: {e}", path.display());
                    report.failures.push(CleanFailure {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
            progress_bar.inc(1);
        }

        progress_bar.finish_and_clear();
        Ok(report)
    }

    fn print_report(&self, report: &CleanReport) {
        let size_mb = report.bytes_reclaimed as f64 / 1024.0 / 1024.0;

        println!();
        println!(
            "{}",
            style(t!(
                "cleaner.removed",
                count = report.removed.to_string(),
                size = format!("{size_mb:.2}")
            ))
            .green()
        );

        if !report.failures.is_empty() {
            println!(
                "{}",
                style(t!("cleaner.failures", count = report.failures.len().to_string()))
                    .yellow()
            );
            for failure in &report.failures {
                println!(
                    "  {} {}: {}",
                    style("✗").red(),
                    failure.path.display(),
                    failure.reason
                );
            }
        }

        if report.is_clean() {
            println!("{}", style(t!("cleaner.success")).green().bold());
        } else {
            println!("{}", style(t!("cleaner.partial")).yellow().bold());
        }

        info!(
            "Cleanup finished - removed: {}, failed: {}, reclaimed: {} bytes",
            report.removed,
            report.failures.len(),
            report.bytes_reclaimed
        );
    }
}
