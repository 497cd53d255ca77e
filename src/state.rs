//! Demo state as an immutable value, the user actions that change it, and the reducer.

use crate::animation::AnimationConfig;
use crate::easing::Easing;
use crate::error::DemoError;
use crate::models::{ChartKind, SeriesDescriptor, Surface};
use crate::sample;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A discrete user action from the control panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    SelectChart(ChartKind),
    Refresh,
    Clear,
    SetSpeed(u32),
    SetEasing(String),
    ToggleAnimations(bool),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectChart(kind) => write!(f, "select:{}", kind.name().to_lowercase()),
            Action::Refresh => f.write_str("refresh"),
            Action::Clear => f.write_str("clear"),
            Action::SetSpeed(ms) => write!(f, "speed:{ms}"),
            Action::SetEasing(name) => write!(f, "easing:{name}"),
            Action::ToggleAnimations(on) => {
                write!(f, "animations:{}", if *on { "on" } else { "off" })
            }
        }
    }
}

/// Parses the CLI token form, e.g. `select:pie`, `speed:500`, `animations:off`.
impl FromStr for Action {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (verb, arg) = match token.split_once(':') {
            Some((v, a)) => (v.trim().to_ascii_lowercase(), Some(a.trim())),
            None => (token.to_ascii_lowercase(), None),
        };
        match (verb.as_str(), arg) {
            ("select", Some(kind)) => Ok(Action::SelectChart(kind.parse()?)),
            ("refresh", None) => Ok(Action::Refresh),
            ("clear", None) => Ok(Action::Clear),
            ("speed", Some(ms)) => ms
                .parse::<u32>()
                .map(Action::SetSpeed)
                .map_err(|_| DemoError::InvalidValue {
                    field: "speed",
                    value: ms.to_string(),
                }),
            ("easing", Some(name)) if !name.is_empty() => Ok(Action::SetEasing(name.to_string())),
            ("animations", Some(flag)) => parse_switch(flag)
                .map(Action::ToggleAnimations)
                .ok_or_else(|| DemoError::InvalidValue {
                    field: "animations",
                    value: flag.to_string(),
                }),
            _ => Err(DemoError::InvalidAction(token.to_string())),
        }
    }
}

/// Accepts the usual spellings of an on/off switch.
pub fn parse_switch(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" | "enabled" => Some(true),
        "off" | "false" | "0" | "no" | "disabled" => Some(false),
        _ => None,
    }
}

/// Everything the demo shows: the current chart kind, each surface's series and the
/// animation settings. Never mutated in place; [`reduce`] produces the next value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoState {
    current: ChartKind,
    cartesian: Vec<SeriesDescriptor>,
    pie: Vec<SeriesDescriptor>,
    geo: Vec<SeriesDescriptor>,
    animation: AnimationConfig,
}

impl DemoState {
    /// A state showing `kind` with freshly generated data.
    pub fn initial<R: Rng>(kind: ChartKind, animation: AnimationConfig, rng: &mut R) -> Self {
        let blank = Self {
            current: kind,
            cartesian: Vec::new(),
            pie: Vec::new(),
            geo: Vec::new(),
            animation,
        };
        reduce(&blank, &Action::SelectChart(kind), rng)
    }

    pub fn current(&self) -> ChartKind {
        self.current
    }

    /// The only visible surface, derived from the current chart kind.
    pub fn visible_surface(&self) -> Surface {
        self.current.surface()
    }

    pub fn is_visible(&self, surface: Surface) -> bool {
        self.visible_surface() == surface
    }

    pub fn series(&self, surface: Surface) -> &[SeriesDescriptor] {
        match surface {
            Surface::Cartesian => &self.cartesian,
            Surface::Pie => &self.pie,
            Surface::GeoMap => &self.geo,
        }
    }

    pub fn visible_series(&self) -> &[SeriesDescriptor] {
        self.series(self.visible_surface())
    }

    pub fn animation(&self) -> AnimationConfig {
        self.animation
    }

    fn with_series(&self, surface: Surface, series: Vec<SeriesDescriptor>) -> Self {
        let mut next = self.clone();
        match surface {
            Surface::Cartesian => next.cartesian = series,
            Surface::Pie => next.pie = series,
            Surface::GeoMap => next.geo = series,
        }
        next
    }
}

/// Apply `action` to `state` and return the next state.
///
/// Randomness comes only from `rng`; the previous state is left untouched.
pub fn reduce<R: Rng>(state: &DemoState, action: &Action, rng: &mut R) -> DemoState {
    match action {
        Action::SelectChart(kind) => select(state, *kind, rng),
        Action::Refresh => select(state, state.current, rng),
        Action::Clear => state.with_series(state.visible_surface(), Vec::new()),
        Action::SetSpeed(ms) => DemoState {
            animation: state.animation.with_speed(*ms),
            ..state.clone()
        },
        Action::SetEasing(name) => DemoState {
            animation: state.animation.with_easing(Easing::from_name(name)),
            ..state.clone()
        },
        Action::ToggleAnimations(enabled) => DemoState {
            animation: state.animation.with_enabled(*enabled),
            ..state.clone()
        },
    }
}

fn select<R: Rng>(state: &DemoState, kind: ChartKind, rng: &mut R) -> DemoState {
    let series = sample::series_for(kind, rng);
    DemoState {
        current: kind,
        ..state.with_series(kind.surface(), series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_tokens_parse() {
        assert_eq!(
            "select:GeoMap".parse::<Action>().unwrap(),
            Action::SelectChart(ChartKind::GeoMap)
        );
        assert_eq!("Refresh".parse::<Action>().unwrap(), Action::Refresh);
        assert_eq!("speed:50".parse::<Action>().unwrap(), Action::SetSpeed(50));
        assert_eq!(
            "animations:off".parse::<Action>().unwrap(),
            Action::ToggleAnimations(false)
        );
        assert_eq!(
            "easing:Bogus".parse::<Action>().unwrap(),
            Action::SetEasing("Bogus".into())
        );
    }

    #[test]
    fn malformed_tokens_are_rejected() {
        assert!(matches!(
            "speed:fast".parse::<Action>(),
            Err(DemoError::InvalidValue { field: "speed", .. })
        ));
        assert!(matches!(
            "clear:now".parse::<Action>(),
            Err(DemoError::InvalidAction(_))
        ));
        assert!(matches!(
            "select:donut".parse::<Action>(),
            Err(DemoError::UnknownChartKind(_))
        ));
        assert!("easing:".parse::<Action>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for action in [
            Action::SelectChart(ChartKind::Scatter),
            Action::Refresh,
            Action::Clear,
            Action::SetSpeed(750),
            Action::SetEasing("EaseOutCubic".into()),
            Action::ToggleAnimations(true),
        ] {
            assert_eq!(action.to_string().parse::<Action>().unwrap(), action);
        }
    }
}
