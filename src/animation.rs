//! Animation settings and the eased transition a surface plays when its series change.

use crate::easing::Easing;
use serde::{Deserialize, Serialize};

/// Lower bound of the speed slider, in milliseconds.
pub const MIN_SPEED_MS: u32 = 100;
/// Upper bound of the speed slider, in milliseconds.
pub const MAX_SPEED_MS: u32 = 3000;
/// Initial slider position.
pub const DEFAULT_SPEED_MS: u32 = 1000;

/// Slider value, enable toggle and easing choice.
///
/// `speed_ms` always holds the slider value, even while animations are disabled, so
/// re-enabling restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    speed_ms: u32,
    enabled: bool,
    easing: Easing,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed_ms: DEFAULT_SPEED_MS,
            enabled: true,
            easing: Easing::Linear,
        }
    }
}

impl AnimationConfig {
    pub fn new(speed_ms: u32, enabled: bool, easing: Easing) -> Self {
        Self {
            speed_ms: clamp_speed(speed_ms),
            enabled,
            easing,
        }
    }

    pub fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Duration actually pushed to the animated surfaces: 0 while disabled.
    pub fn effective_duration_ms(&self) -> u32 {
        if self.enabled { self.speed_ms } else { 0 }
    }

    pub fn with_speed(self, speed_ms: u32) -> Self {
        Self {
            speed_ms: clamp_speed(speed_ms),
            ..self
        }
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        Self { easing, ..self }
    }

    /// The transition a surface should play for the next update.
    pub fn transition(&self) -> Transition {
        Transition {
            duration_ms: self.effective_duration_ms(),
            easing: self.easing,
        }
    }
}

/// Clamp a requested slider value into `[MIN_SPEED_MS, MAX_SPEED_MS]`.
pub fn clamp_speed(speed_ms: u32) -> u32 {
    speed_ms.clamp(MIN_SPEED_MS, MAX_SPEED_MS)
}

/// Duration and curve applied to an animated surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Transition {
    /// Eased progress after `elapsed_ms`. Zero-length transitions are complete at once.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let t = (elapsed_ms / self.duration_ms as f64).clamp(0.0, 1.0);
        self.easing.apply(t)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        elapsed_ms >= self.duration_ms as f64
    }
}

/// Blend `from` towards `to` by `progress`. Entries missing from `from` start at zero, so new
/// data grows in; entries missing from `to` are dropped.
pub fn interpolate(from: &[f64], to: &[f64], progress: f64) -> Vec<f64> {
    to.iter()
        .enumerate()
        .map(|(i, target)| {
            let start = from.get(i).copied().unwrap_or(0.0);
            start + (target - start) * progress
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_into_slider_range() {
        assert_eq!(clamp_speed(0), MIN_SPEED_MS);
        assert_eq!(clamp_speed(2500), 2500);
        assert_eq!(clamp_speed(u32::MAX), MAX_SPEED_MS);
        assert_eq!(AnimationConfig::new(20, true, Easing::Linear).speed_ms(), 100);
    }

    #[test]
    fn disabled_keeps_slider_value() {
        let cfg = AnimationConfig::default().with_speed(1800).with_enabled(false);
        assert_eq!(cfg.effective_duration_ms(), 0);
        assert_eq!(cfg.speed_ms(), 1800);
        assert_eq!(cfg.with_enabled(true).effective_duration_ms(), 1800);
    }

    #[test]
    fn interpolation_grows_new_entries_from_zero() {
        let out = interpolate(&[10.0], &[20.0, 40.0], 0.5);
        assert_eq!(out, vec![15.0, 20.0]);
    }
}
