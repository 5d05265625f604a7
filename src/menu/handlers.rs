use crate::component::{CpuMonitor, TempCleaner};
use crate::config::ThresholdStore;
use crate::pause;
use crate::signal::reset_shutdown_signal;
use anyhow::Result;
use console::{Term, style};
use dialoguer::Input;
use log::info;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

pub fn run_set_threshold(term: &Term, threshold_store: &mut ThresholdStore) -> Result<()> {
    println!("{}", style(t!("threshold.title")).cyan().bold());
    println!(
        "{} {}",
        style(t!("threshold.current")).dim(),
        threshold_store.get()
    );

    let input: String = Input::new()
        .with_prompt(t!("threshold.prompt").to_string())
        .interact_text()?;

    match threshold_store.set(&input) {
        Ok(threshold) => {
            info!("Threshold changed to {threshold}");
            println!("{} {}", style(t!("threshold.saved")).green(), threshold);
        }
        Err(e) => {
            println!("{} {}", style(t!("threshold.rejected")).yellow(), e);
        }
    }

    pause(term)?;
    Ok(())
}

pub fn run_cpu_monitor(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    threshold_store: &ThresholdStore,
) -> Result<()> {
    let threshold = threshold_store.get();

    println!("{}", style(t!("monitor.title")).cyan().bold());
    println!(
        "{}",
        style(t!("monitor.starting", threshold = threshold.to_string())).dim()
    );

    let mut monitor = CpuMonitor::new(threshold, Arc::clone(shutdown_signal));
    monitor.run();

    // Ctrl-C only stops the monitor; the menu keeps running.
    reset_shutdown_signal(shutdown_signal);
    println!("\n{}", style(t!("monitor.stopped")).yellow());

    pause(term)?;
    Ok(())
}

pub fn run_temp_cleaner(term: &Term, shutdown_signal: &Arc<AtomicBool>) -> Result<()> {
    let cleaner = TempCleaner::new(Arc::clone(shutdown_signal));

    if let Err(e) = cleaner.run() {
        eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
    }

    reset_shutdown_signal(shutdown_signal);
    pause(term)?;
    Ok(())
}
