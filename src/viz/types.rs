//! Public types and constants for the visualization module.

use std::path::PathBuf;

/// Legend placement options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendMode {
    /// Separate, non-overlapping legend panel on the right side.
    Right,
    /// Separate, non-overlapping legend band at the bottom.
    Bottom,
    /// No legend.
    Hidden,
}

/// Horizontal legend below the chart, matching the desktop surface.
pub const DEFAULT_LEGEND_MODE: LegendMode = LegendMode::Bottom;

/// Knobs for [`super::plot_command`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    /// Caption; defaults to the chart kind's label (e.g. "Pie Chart").
    pub title: Option<String>,
    pub legend: LegendMode,
    /// Locale tag for number labels ("en", "de", ...).
    pub locale: String,
    /// Font to register for chart text. Only the first registration in a process takes effect.
    pub font_path: Option<PathBuf>,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            title: None,
            legend: DEFAULT_LEGEND_MODE,
            locale: "en".to_string(),
            font_path: None,
        }
    }
}
