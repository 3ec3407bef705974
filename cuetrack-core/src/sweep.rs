//! Playback sweep: resolves a timeline at regular time steps and keeps only
//! the samples where the resolved state changes.

use crate::{time, Error, PlaybackState, Result, Timeline};
use tracing::debug;

/// Largest number of samples a single sweep may take
pub const MAX_SAMPLES: u64 = 1_000_000;

/// Sweep configuration
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// First playback time sampled (seconds)
    pub start: f64,
    /// Last playback time sampled (None = timeline duration)
    pub end: Option<f64>,
    /// Distance between samples (seconds)
    pub step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: None,
            step: 1.0,
        }
    }
}

/// A playback time at which the resolved state differs from the previous sample
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub time: f64,
    pub state: PlaybackState,
}

/// Samples the timeline from `start` to `end` inclusive.
///
/// The first sample is always reported.
pub fn sweep(timeline: &Timeline, config: &SweepConfig) -> Result<Vec<StateChange>> {
    let start = time::validate(config.start)?;
    let end = time::validate(config.end.unwrap_or_else(|| timeline.duration()))?;
    if !(config.step.is_finite() && config.step > 0.0) {
        return Err(Error::InvalidStep(config.step));
    }

    let samples = ((end - start) / config.step).floor() + 1.0;
    if samples > MAX_SAMPLES as f64 {
        return Err(Error::TooManySamples {
            samples,
            max: MAX_SAMPLES,
        });
    }

    let mut changes: Vec<StateChange> = Vec::new();
    let mut sample = 0u64;
    loop {
        // Derived from the sample count so steps don't accumulate rounding error
        let now = start + sample as f64 * config.step;
        if now > end {
            break;
        }

        let state = timeline.state_at(now);
        if changes.last().map_or(true, |last| last.state != state) {
            debug!(time = now, index = ?state.index, enabled = state.enabled, "state changed");
            changes.push(StateChange { time: now, state });
        }
        sample += 1;
    }

    Ok(changes)
}
