use anyhow::Result;
use console::{Term, style};
use cpu_optimizer::config::ThresholdStore;
use cpu_optimizer::init;
use cpu_optimizer::menu::show_main_menu;
use cpu_optimizer::signal::setup_shutdown_signal;
use log::{info, warn};
use rust_i18n::t;

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en-US");

fn main() -> Result<()> {
    init::init();
    let term = Term::stdout();
    let shutdown_signal = setup_shutdown_signal();

    // The threshold lives here for the process lifetime; nothing is persisted.
    let mut threshold_store = ThresholdStore::default();

    loop {
        match show_main_menu(&term, &shutdown_signal, &mut threshold_store) {
            Ok(true) => {}
            Ok(false) => {
                term.clear_screen()?;
                println!("\n{}", style(t!("main_menu.goodbye")).green().bold());
                info!("Program exited normally");
                break;
            }
            Err(e) => {
                warn!("Program error: {e}");
                eprintln!("{} {}", style(t!("main_menu.error_prefix")).red().bold(), e);
                break;
            }
        }
    }

    Ok(())
}
