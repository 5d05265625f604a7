use super::pacing::{Pacing, Pause};
use crate::config::Threshold;
use crate::tools::{CpuSampler, CpuSource};
use console::style;
use log::info;
use rust_i18n::t;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Monitor loop. Runs until the shutdown signal is set, checking it once per
/// iteration, so cancellation latency is at most one sampling window plus one
/// long pause.
pub struct CpuMonitor<S = CpuSampler> {
    source: S,
    threshold: Threshold,
    pacing: Pacing,
    shutdown_signal: Arc<AtomicBool>,
}

impl CpuMonitor<CpuSampler> {
    #[must_use]
    pub fn new(threshold: Threshold, shutdown_signal: Arc<AtomicBool>) -> Self {
        Self::with_source(
            CpuSampler::new(),
            threshold,
            Pacing::default(),
            shutdown_signal,
        )
    }
}

impl<S: CpuSource> CpuMonitor<S> {
    pub const fn with_source(
        source: S,
        threshold: Threshold,
        pacing: Pacing,
        shutdown_signal: Arc<AtomicBool>,
    ) -> Self {
        Self {
            source,
            threshold,
            pacing,
            shutdown_signal,
        }
    }

    pub fn run(&mut self) {
        let threshold = self.threshold;
        self.run_with(|sample, pause| {
            println!(
                "{}",
                style(t!("monitor.current_usage", usage = format!("{sample:.1}"))).cyan()
            );
            if pause == Pause::Long {
                println!(
                    "{}",
                    style(t!("monitor.reducing_speed", threshold = threshold.to_string()))
                        .yellow()
                );
            }
        });
    }

    /// The loop itself, with every sample and its backoff decision handed to
    /// `on_sample`.
    pub fn run_with(&mut self, mut on_sample: impl FnMut(f32, Pause)) {
        info!("CPU monitor started, threshold {}", self.threshold);

        while !self.shutdown_signal.load(Ordering::SeqCst) {
            let sample = self.source.sample(self.pacing.sample_window);
            let pause = Pause::for_sample(sample, self.threshold);
            on_sample(sample, pause);
            thread::sleep(pause.duration(&self.pacing));
        }

        info!("CPU monitor stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Replays a fixed sample sequence, then raises the shutdown signal.
    struct ScriptedCpu {
        samples: Vec<f32>,
        cursor: usize,
        shutdown_signal: Arc<AtomicBool>,
    }

    impl CpuSource for ScriptedCpu {
        fn sample(&mut self, _window: Duration) -> f32 {
            let sample = self.samples[self.cursor];
            self.cursor += 1;
            if self.cursor == self.samples.len() {
                self.shutdown_signal.store(true, Ordering::SeqCst);
            }
            sample
        }
    }

    fn test_pacing() -> Pacing {
        Pacing {
            sample_window: Duration::ZERO,
            short_pause: Duration::from_millis(1),
            long_pause: Duration::from_millis(2),
        }
    }

    #[test]
    fn emits_every_sample_with_its_backoff_decision() {
        let shutdown_signal = Arc::new(AtomicBool::new(false));
        let source = ScriptedCpu {
            samples: vec![51.0, 50.0, 10.0],
            cursor: 0,
            shutdown_signal: Arc::clone(&shutdown_signal),
        };
        let mut monitor = CpuMonitor::with_source(
            source,
            "50".parse().unwrap(),
            test_pacing(),
            shutdown_signal,
        );

        let mut observed = Vec::new();
        monitor.run_with(|sample, pause| observed.push((sample, pause)));

        assert_eq!(
            observed,
            vec![
                (51.0, Pause::Long),
                (50.0, Pause::Short),
                (10.0, Pause::Short),
            ]
        );
    }

    #[test]
    fn stops_at_the_next_iteration_boundary_after_cancellation() {
        let shutdown_signal = Arc::new(AtomicBool::new(false));
        let source = ScriptedCpu {
            samples: vec![99.0],
            cursor: 0,
            shutdown_signal: Arc::clone(&shutdown_signal),
        };
        let mut monitor = CpuMonitor::with_source(
            source,
            "30".parse().unwrap(),
            test_pacing(),
            shutdown_signal,
        );

        // The signal fires during the first sample; a second sample would
        // index past the script and panic.
        let mut count = 0;
        monitor.run_with(|_, _| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn does_not_sample_when_already_cancelled() {
        let shutdown_signal = Arc::new(AtomicBool::new(true));
        let source = ScriptedCpu {
            samples: vec![],
            cursor: 0,
            shutdown_signal: Arc::clone(&shutdown_signal),
        };
        let mut monitor = CpuMonitor::with_source(
            source,
            "30".parse().unwrap(),
            test_pacing(),
            shutdown_signal,
        );

        monitor.run_with(|_, _| panic!("no sample expected"));
    }
}
