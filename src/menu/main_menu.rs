use crate::config::ThresholdStore;
use crate::menu::handlers::{run_cpu_monitor, run_set_threshold, run_temp_cleaner};
use anyhow::Result;
use console::{Term, style};
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SetThreshold,
    MonitorCpu,
    CleanTemp,
    Exit,
    Invalid,
}

/// Total mapping from the widget's selection to an action. ESC exits, and an
/// out-of-range index just re-displays the menu.
const fn route(selection: Option<usize>) -> MenuAction {
    match selection {
        Some(0) => MenuAction::SetThreshold,
        Some(1) => MenuAction::MonitorCpu,
        Some(2) => MenuAction::CleanTemp,
        Some(3) | None => MenuAction::Exit,
        Some(_) => MenuAction::Invalid,
    }
}

/// Returns `Ok(false)` when the user chose to exit.
pub fn show_main_menu(
    term: &Term,
    shutdown_signal: &Arc<AtomicBool>,
    threshold_store: &mut ThresholdStore,
) -> Result<bool> {
    term.clear_screen()?;

    println!("{}", style(t!("main_menu.title")).cyan().bold());
    println!("{}", style(t!("common.esc_hint")).dim());

    let options = vec![
        t!("main_menu.opt_threshold"),
        t!("main_menu.opt_monitor"),
        t!("main_menu.opt_clean"),
        t!("main_menu.exit"),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("main_menu.prompt"))
        .items(&options)
        .default(0)
        .interact_on_opt(term)?;

    match route(selection) {
        MenuAction::SetThreshold => {
            run_set_threshold(term, threshold_store)?;
            Ok(true)
        }
        MenuAction::MonitorCpu => {
            run_cpu_monitor(term, shutdown_signal, threshold_store)?;
            Ok(true)
        }
        MenuAction::CleanTemp => {
            run_temp_cleaner(term, shutdown_signal)?;
            Ok(true)
        }
        MenuAction::Exit => Ok(false),
        MenuAction::Invalid => {
            println!("{}", style(t!("main_menu.invalid_option")).yellow());
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_the_four_options() {
        assert_eq!(route(Some(0)), MenuAction::SetThreshold);
        assert_eq!(route(Some(1)), MenuAction::MonitorCpu);
        assert_eq!(route(Some(2)), MenuAction::CleanTemp);
        assert_eq!(route(Some(3)), MenuAction::Exit);
    }

    #[test]
    fn esc_exits() {
        assert_eq!(route(None), MenuAction::Exit);
    }

    #[test]
    fn unknown_selection_is_rejected_not_dispatched() {
        assert_eq!(route(Some(4)), MenuAction::Invalid);
        assert_eq!(route(Some(99)), MenuAction::Invalid);
    }
}
