use std::fmt;
use std::str::FromStr;

/// CPU usage percentage boundary between "normal" and "high" load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidThreshold {
    #[error("not a number")]
    NotANumber,
    #[error("must be between 1 and 100, got {0}")]
    OutOfRange(i64),
}

impl Threshold {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(30)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Threshold {
    type Err = InvalidThreshold;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| InvalidThreshold::NotANumber)?;
        if !(i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            return Err(InvalidThreshold::OutOfRange(value));
        }
        Ok(Self(value as u8))
    }
}

/// Holds the active threshold for the process lifetime. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ThresholdStore {
    current: Threshold,
}

impl ThresholdStore {
    #[must_use]
    pub const fn get(&self) -> Threshold {
        self.current
    }

    /// Parses and applies a new threshold. The stored value only changes on
    /// success.
    pub fn set(&mut self, candidate: &str) -> Result<Threshold, InvalidThreshold> {
        let threshold = candidate.parse()?;
        self.current = threshold;
        Ok(threshold)
    }
}
