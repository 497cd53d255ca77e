use crate::animation::AnimationConfig;
use crate::config::DemoConfig;
use crate::models::ChartKind;
use crate::render::{RenderCommand, render};
use crate::state::{Action, DemoState, reduce};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Owns the current [`DemoState`] and the random source, and exposes one method per control.
///
/// Each method replaces the state wholesale via [`reduce`]; surfaces pull a fresh
/// [`RenderCommand`] afterwards.
#[derive(Debug, Clone)]
pub struct Controller {
    state: DemoState,
    rng: StdRng,
}

impl Controller {
    /// Start from `config`: its initial chart, animation settings and optional seed.
    pub fn from_config(config: &DemoConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config.initial_chart, config.animation(), rng)
    }

    /// Deterministic controller starting on `kind` with default animation settings.
    pub fn seeded(kind: ChartKind, seed: u64) -> Self {
        Self::with_rng(kind, AnimationConfig::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(kind: ChartKind, animation: AnimationConfig, mut rng: StdRng) -> Self {
        let state = DemoState::initial(kind, animation, &mut rng);
        Self { state, rng }
    }

    pub fn state(&self) -> &DemoState {
        &self.state
    }

    pub fn render(&self) -> RenderCommand {
        render(&self.state)
    }

    /// Apply one action and return the new state.
    pub fn dispatch(&mut self, action: Action) -> &DemoState {
        debug!("dispatch {action}");
        self.state = reduce(&self.state, &action, &mut self.rng);
        &self.state
    }

    pub fn select_chart(&mut self, kind: ChartKind) {
        self.dispatch(Action::SelectChart(kind));
    }

    pub fn refresh_data(&mut self) {
        self.dispatch(Action::Refresh);
    }

    pub fn clear_chart(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn set_animation_speed(&mut self, ms: u32) {
        self.dispatch(Action::SetSpeed(ms));
    }

    pub fn set_easing(&mut self, name: &str) {
        self.dispatch(Action::SetEasing(name.to_string()));
    }

    pub fn toggle_animations(&mut self, enabled: bool) {
        self.dispatch(Action::ToggleAnimations(enabled));
    }
}
