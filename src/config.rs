//! Demo configuration.
//!
//! Sources, highest priority first:
//! 1. Command-line flags (applied by the binaries)
//! 2. Environment variables (`CHART_DEMO_*`)
//! 3. A JSON file (`--config` or `CHART_DEMO_CONFIG`)
//! 4. Built-in defaults

use crate::animation::{AnimationConfig, DEFAULT_SPEED_MS, clamp_speed};
use crate::easing::Easing;
use crate::models::ChartKind;
use crate::state::parse_switch;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_CONFIG: &str = "CHART_DEMO_CONFIG";
pub const ENV_CHART: &str = "CHART_DEMO_CHART";
pub const ENV_SPEED: &str = "CHART_DEMO_SPEED";
pub const ENV_EASING: &str = "CHART_DEMO_EASING";
pub const ENV_ANIMATIONS: &str = "CHART_DEMO_ANIMATIONS";
pub const ENV_SEED: &str = "CHART_DEMO_SEED";
pub const ENV_FONT: &str = "CHART_DEMO_FONT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Chart shown at startup
    pub initial_chart: ChartKind,
    /// Speed slider start value, clamped to the slider range
    pub animation_speed_ms: u32,
    /// Easing dropdown start value; unknown names mean Linear
    pub easing: String,
    pub animations_enabled: bool,
    /// Fixed RNG seed for reproducible sample data
    pub seed: Option<u64>,
    /// TTF/OTF font used for chart text in exported images
    pub font_path: Option<PathBuf>,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            initial_chart: ChartKind::Line,
            animation_speed_ms: DEFAULT_SPEED_MS,
            easing: Easing::Linear.name().to_string(),
            animations_enabled: true,
            seed: None,
            font_path: None,
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
        }
    }
}

impl DemoConfig {
    /// Load from `path` (or `CHART_DEMO_CONFIG`, if set), then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path
            .map(Path::to_path_buf)
            .or_else(|| env::var_os(ENV_CONFIG).map(PathBuf::from));
        let mut config = match file {
            Some(p) => Self::load_from_file(&p)?,
            None => {
                debug!("no config file, using defaults");
                Self::default()
            }
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `CHART_DEMO_*` overrides looked up through `lookup`. Unparseable values are
    /// logged and ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_CHART) {
            match v.parse::<ChartKind>() {
                Ok(kind) => self.initial_chart = kind,
                Err(err) => warn!("ignoring {ENV_CHART}: {err}"),
            }
        }
        if let Some(v) = lookup(ENV_SPEED) {
            match v.trim().parse::<u32>() {
                Ok(ms) => self.animation_speed_ms = ms,
                Err(_) => warn!("ignoring {ENV_SPEED}={v}: not a number of milliseconds"),
            }
        }
        if let Some(v) = lookup(ENV_EASING) {
            self.easing = v;
        }
        if let Some(v) = lookup(ENV_ANIMATIONS) {
            match parse_switch(&v) {
                Some(on) => self.animations_enabled = on,
                None => warn!("ignoring {ENV_ANIMATIONS}={v}: expected on/off"),
            }
        }
        if let Some(v) = lookup(ENV_SEED) {
            match v.trim().parse::<u64>() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => warn!("ignoring {ENV_SEED}={v}: not an unsigned integer"),
            }
        }
        if let Some(v) = lookup(ENV_FONT) {
            self.font_path = Some(PathBuf::from(v));
        }
    }

    /// Animation settings with the speed clamped and the easing name resolved.
    pub fn animation(&self) -> AnimationConfig {
        AnimationConfig::new(
            clamp_speed(self.animation_speed_ms),
            self.animations_enabled,
            Easing::from_name(&self.easing),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: DemoConfig = serde_json::from_str(r#"{ "initial_chart": "Pie" }"#).unwrap();
        assert_eq!(cfg.initial_chart, ChartKind::Pie);
        assert_eq!(cfg.animation_speed_ms, DEFAULT_SPEED_MS);
        assert_eq!(cfg.window, WindowConfig::default());
    }

    #[test]
    fn env_overrides_and_ignores_garbage() {
        let vars: HashMap<&str, &str> = [
            (ENV_CHART, "scatter"),
            (ENV_SPEED, "quick"),
            (ENV_ANIMATIONS, "off"),
            (ENV_SEED, "42"),
        ]
        .into_iter()
        .collect();
        let mut cfg = DemoConfig::default();
        cfg.apply_env(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(cfg.initial_chart, ChartKind::Scatter);
        assert_eq!(cfg.animation_speed_ms, DEFAULT_SPEED_MS);
        assert!(!cfg.animations_enabled);
        assert_eq!(cfg.seed, Some(42));
    }

    #[test]
    fn animation_resolves_easing_and_clamps() {
        let cfg = DemoConfig {
            animation_speed_ms: 9000,
            easing: "EaseOutQuad".into(),
            ..DemoConfig::default()
        };
        let anim = cfg.animation();
        assert_eq!(anim.speed_ms(), 3000);
        assert_eq!(anim.easing(), Easing::EaseOutQuad);
    }
}
