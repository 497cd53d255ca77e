//! Easing curves mapping normalized animation progress `t ∈ [0, 1]` to eased progress.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of named easing functions offered by the easing dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
}

impl Easing {
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseInQuad => "EaseInQuad",
            Easing::EaseOutQuad => "EaseOutQuad",
            Easing::EaseInOutQuad => "EaseInOutQuad",
            Easing::EaseInCubic => "EaseInCubic",
            Easing::EaseOutCubic => "EaseOutCubic",
            Easing::EaseInOutCubic => "EaseInOutCubic",
        }
    }

    /// Look up an easing by its dropdown name. Unknown names fall back to `Linear`.
    pub fn from_name(name: &str) -> Easing {
        Easing::ALL
            .into_iter()
            .find(|e| e.name() == name.trim())
            .unwrap_or_default()
    }

    /// Evaluate the curve at `t`.
    pub fn apply(self, t: f64) -> f64 {
        self.function()(t)
    }

    /// The curve as a plain function pointer, for surfaces that take `fn(f64) -> f64`.
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::EaseInQuad => ease_in_quad,
            Easing::EaseOutQuad => ease_out_quad,
            Easing::EaseInOutQuad => ease_in_out_quad,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn linear(t: f64) -> f64 {
    t
}

pub fn ease_in_quad(t: f64) -> f64 {
    t * t
}

pub fn ease_out_quad(t: f64) -> f64 {
    t * (2.0 - t)
}

pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn ease_in_cubic(t: f64) -> f64 {
    t * t * t
}

pub fn ease_out_cubic(t: f64) -> f64 {
    let u = t - 1.0;
    u * u * u + 1.0
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let k = 2.0 * t - 2.0;
        (t - 1.0) * k * k + 1.0
    }
}
