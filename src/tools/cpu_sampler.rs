use std::thread;
use std::time::Duration;
use sysinfo::System;

/// One blocking utilization sample, measured over `window`.
///
/// Abstracted so the monitor loop can be driven by synthetic samples in tests.
pub trait CpuSource {
    fn sample(&mut self, window: Duration) -> f32;
}

pub struct CpuSampler {
    system: System,
}

impl CpuSampler {
    #[must_use]
    pub fn new() -> Self {
        let mut system = System::new_all();
        // Utilization is computed as a delta between refreshes, so prime the
        // counters before the first real sample.
        system.refresh_cpu_all();
        thread::sleep(Duration::from_millis(200));
        system.refresh_cpu_all();
        Self { system }
    }
}

impl CpuSource for CpuSampler {
    fn sample(&mut self, window: Duration) -> f32 {
        thread::sleep(window);
        self.system.refresh_cpu_all();
        self.system.global_cpu_usage()
    }
}

impl Default for CpuSampler {
    fn default() -> Self {
        Self::new()
    }
}
