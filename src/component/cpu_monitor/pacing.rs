use crate::config::Threshold;
use std::time::Duration;

/// Sleep cadence of the monitor loop. Injectable so tests can run in
/// milliseconds instead of the interactive one-second rhythm.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    pub sample_window: Duration,
    pub short_pause: Duration,
    pub long_pause: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            sample_window: Duration::from_secs(1),
            short_pause: Duration::from_secs(1),
            long_pause: Duration::from_secs(2),
        }
    }
}

/// Backoff decision for one sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Short,
    Long,
}

impl Pause {
    #[must_use]
    pub fn for_sample(sample: f32, threshold: Threshold) -> Self {
        if sample > f32::from(threshold.percent()) {
            Self::Long
        } else {
            Self::Short
        }
    }

    #[must_use]
    pub const fn duration(self, pacing: &Pacing) -> Duration {
        match self {
            Self::Short => pacing.short_pause,
            Self::Long => pacing.long_pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(percent: u8) -> Threshold {
        percent.to_string().parse().unwrap()
    }

    #[test]
    fn sample_above_threshold_pauses_long() {
        assert_eq!(Pause::for_sample(51.0, threshold(50)), Pause::Long);
    }

    #[test]
    fn sample_at_threshold_pauses_short() {
        assert_eq!(Pause::for_sample(50.0, threshold(50)), Pause::Short);
        assert_eq!(Pause::for_sample(12.3, threshold(50)), Pause::Short);
    }

    #[test]
    fn pause_maps_to_configured_durations() {
        let pacing = Pacing {
            sample_window: Duration::from_millis(1),
            short_pause: Duration::from_millis(10),
            long_pause: Duration::from_millis(20),
        };
        assert_eq!(Pause::Short.duration(&pacing), Duration::from_millis(10));
        assert_eq!(Pause::Long.duration(&pacing), Duration::from_millis(20));
    }
}
