pub mod threshold;

pub use threshold::{InvalidThreshold, Threshold, ThresholdStore};
