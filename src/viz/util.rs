//! Utility functions for visualization: colors, scaling, locale mapping, labels.

use crate::models::{GEO_LAND_FILL, Rgba, SeriesShape, SeriesValues};
use crate::render::SurfaceFrame;
use num_format::{Locale, ToFormattedString};
use plotters::prelude::*;

/// Darkest color of the geo-map heat ramp (#264478).
const HEAT_HIGH: Rgba = Rgba::rgb(38, 68, 120);

/// Convert a model color to a Plotters color, keeping its alpha.
#[inline]
pub fn to_rgba(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.opacity())
}

/// Heat ramp from the land fill (t = 0) to dark blue (t = 1).
pub fn heat_color(t: f64) -> Rgba {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgba::rgb(
        mix(GEO_LAND_FILL.r, HEAT_HIGH.r),
        mix(GEO_LAND_FILL.g, HEAT_HIGH.g),
        mix(GEO_LAND_FILL.b, HEAT_HIGH.b),
    )
}

/// Smallest and largest intensity, for [`heat_share`].
pub fn heat_bounds(values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    values
        .into_iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

/// Position of `v` between `lo` and `hi` on the heat ramp. A flat range maps to 0.
pub fn heat_share(v: f64, (lo, hi): (f64, f64)) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Tiles darker than this get light label ink.
pub const HEAT_INK_THRESHOLD: f64 = 0.55;

/// Map a user-provided locale tag to a `num_format::Locale`.
///
/// Supported tags (case-insensitive): `en`, `de`, `fr`, `es`, `it`, `pt`, `nl`. Defaults to English.
pub fn map_locale(tag: &str) -> &'static Locale {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => &Locale::de,
        "fr" | "fr_fr" => &Locale::fr,
        "es" | "es_es" => &Locale::es,
        "it" | "it_it" => &Locale::it,
        "pt" | "pt_pt" | "pt_br" => &Locale::pt,
        "nl" | "nl_nl" => &Locale::nl,
        _ => &Locale::en,
    }
}

/// Whole numbers with locale thousands separators, one decimal otherwise.
pub fn format_value(v: f64, locale: &Locale) -> String {
    if (v - v.round()).abs() < 1e-9 {
        (v.round() as i64).to_formatted_string(locale)
    } else {
        format!("{v:.1}")
    }
}

/// 1-based category labels on integer ticks, blank in between.
pub fn category_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 && v >= 0.0 {
        (v.round() as i64 + 1).to_string()
    } else {
        String::new()
    }
}

/// Round `max` up with 10% headroom to the next multiple of ten.
pub fn value_ceiling(max: f64) -> f64 {
    let padded = (max * 1.1 / 10.0).ceil() * 10.0;
    if padded.is_finite() && padded > 0.0 { padded } else { 10.0 }
}

/// Largest plain value across all series.
pub fn max_value(frame: &SurfaceFrame) -> f64 {
    frame
        .series
        .iter()
        .flat_map(|s| s.values.magnitudes())
        .fold(0.0, f64::max)
}

/// Largest column sum when all series are stacked.
pub fn stacked_max(frame: &SurfaceFrame) -> f64 {
    let n = longest_series(frame);
    (0..n)
        .map(|i| {
            frame
                .series
                .iter()
                .filter_map(|s| match &s.values {
                    SeriesValues::Values(v) => v.get(i).copied(),
                    _ => None,
                })
                .map(|v| v.max(0.0))
                .sum::<f64>()
        })
        .fold(0.0, f64::max)
}

pub fn longest_series(frame: &SurfaceFrame) -> usize {
    frame.series.iter().map(|s| s.values.len()).max().unwrap_or(0)
}

/// Legend entries (label, swatch color) for a frame.
pub fn legend_items(frame: &SurfaceFrame) -> Vec<(String, RGBAColor)> {
    frame
        .series
        .iter()
        .map(|s| {
            let color = match s.shape {
                SeriesShape::HeatLand => heat_color(1.0),
                _ => s.style.primary_color(),
            };
            (s.name.clone(), to_rgba(color.with_alpha(255)))
        })
        .collect()
}
