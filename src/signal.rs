use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[must_use]
pub fn setup_shutdown_signal() -> Arc<AtomicBool> {
    let shutdown_signal = Arc::new(AtomicBool::new(false));
    let signal_clone = Arc::clone(&shutdown_signal);

    ctrlc::set_handler(move || {
        signal_clone.store(true, Ordering::SeqCst);
        eprintln!("\nInterrupt received, stopping...");
    })
    .expect("Unable to install Ctrl-C handler");

    shutdown_signal
}

/// Re-arm the flag once a cancelled action has handed control back to the menu.
pub fn reset_shutdown_signal(shutdown_signal: &Arc<AtomicBool>) {
    shutdown_signal.store(false, Ordering::SeqCst);
}
