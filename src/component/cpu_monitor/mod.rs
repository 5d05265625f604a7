//! CPU usage monitor
//!
//! Samples global CPU utilization once per window and backs off with a longer
//! pause whenever the sample exceeds the configured threshold.

mod main;
mod pacing;

pub use main::CpuMonitor;
pub use pacing::{Pacing, Pause};
