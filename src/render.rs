//! Projection of a [`DemoState`] into what a rendering surface has to draw.

use crate::animation::{Transition, interpolate};
use crate::models::{ChartKind, Point, SeriesDescriptor, SeriesValues, Surface};
use crate::state::{Action, DemoState};
use serde::{Deserialize, Serialize};

/// Content of one display surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceFrame {
    pub surface: Surface,
    pub visible: bool,
    pub series: Vec<SeriesDescriptor>,
    /// `None` for surfaces that never animate (the geo-map).
    pub transition: Option<Transition>,
}

/// Declarative description of the whole chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderCommand {
    pub kind: ChartKind,
    pub visible: Surface,
    pub cartesian: SurfaceFrame,
    pub pie: SurfaceFrame,
    pub geo: SurfaceFrame,
}

impl RenderCommand {
    pub fn frame(&self, surface: Surface) -> &SurfaceFrame {
        match surface {
            Surface::Cartesian => &self.cartesian,
            Surface::Pie => &self.pie,
            Surface::GeoMap => &self.geo,
        }
    }

    pub fn frame_mut(&mut self, surface: Surface) -> &mut SurfaceFrame {
        match surface {
            Surface::Cartesian => &mut self.cartesian,
            Surface::Pie => &mut self.pie,
            Surface::GeoMap => &mut self.geo,
        }
    }

    pub fn visible_frame(&self) -> &SurfaceFrame {
        self.frame(self.visible)
    }

    pub fn frames(&self) -> [&SurfaceFrame; 3] {
        [&self.cartesian, &self.pie, &self.geo]
    }
}

/// Build the render command for `state`. Pure; calling it twice yields equal commands.
pub fn render(state: &DemoState) -> RenderCommand {
    let transition = state.animation().transition();
    let frame = |surface: Surface| SurfaceFrame {
        surface,
        visible: state.is_visible(surface),
        series: state.series(surface).to_vec(),
        transition: match surface {
            Surface::Cartesian | Surface::Pie => Some(transition),
            Surface::GeoMap => None,
        },
    };
    RenderCommand {
        kind: state.current(),
        visible: state.visible_surface(),
        cartesian: frame(Surface::Cartesian),
        pie: frame(Surface::Pie),
        geo: frame(Surface::GeoMap),
    }
}

impl SurfaceFrame {
    /// Intermediate frame `progress` of the way from `from` to `self`.
    ///
    /// Series are paired by position. Plain values and point heights are blended with
    /// [`interpolate`]; point x positions, region intensities and styles come from `self`.
    pub fn tweened(&self, from: &SurfaceFrame, progress: f64) -> SurfaceFrame {
        let series = self
            .series
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let start = from
                    .series
                    .get(i)
                    .map(|s| s.values.magnitudes())
                    .unwrap_or_default();
                let values = match &target.values {
                    SeriesValues::Values(v) => {
                        SeriesValues::Values(interpolate(&start, v, progress))
                    }
                    SeriesValues::Points(p) => {
                        let ys: Vec<f64> = p.iter().map(|p| p.y).collect();
                        let blended = interpolate(&start, &ys, progress);
                        SeriesValues::Points(
                            p.iter()
                                .zip(blended)
                                .map(|(p, y)| Point { x: p.x, y })
                                .collect(),
                        )
                    }
                    SeriesValues::Regions(r) => SeriesValues::Regions(r.clone()),
                };
                SeriesDescriptor {
                    values,
                    ..target.clone()
                }
            })
            .collect();
        SurfaceFrame {
            series,
            ..self.clone()
        }
    }
}

/// Transition bookkeeping for an interactive surface: the frame being animated away from and
/// when that started. Times are milliseconds on a clock chosen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: RenderCommand,
    started_ms: f64,
}

impl Tween {
    /// First transition for `cmd`: the visible surface grows in from nothing.
    pub fn start(cmd: &RenderCommand, now_ms: f64) -> Self {
        let mut from = cmd.clone();
        let visible = from.visible;
        from.frame_mut(visible).series.clear();
        Self {
            from,
            started_ms: now_ms,
        }
    }

    /// Whether `action` replaces data and therefore starts a new transition.
    pub fn restarts_on(action: &Action) -> bool {
        matches!(
            action,
            Action::SelectChart(_) | Action::Refresh | Action::Clear
        )
    }

    /// Eased progress of the visible surface of `cmd` at `now_ms`; 1.0 for surfaces that never
    /// animate.
    pub fn progress(&self, cmd: &RenderCommand, now_ms: f64) -> f64 {
        cmd.visible_frame()
            .transition
            .map_or(1.0, |t| t.progress(now_ms - self.started_ms))
    }

    /// What the visible surface of `cmd` shows at `now_ms`.
    pub fn displayed(&self, cmd: &RenderCommand, now_ms: f64) -> SurfaceFrame {
        let target = cmd.visible_frame();
        match target.transition {
            Some(_) => {
                let progress = self.progress(cmd, now_ms);
                target.tweened(self.from.frame(target.surface), progress)
            }
            None => target.clone(),
        }
    }

    pub fn is_running(&self, cmd: &RenderCommand, now_ms: f64) -> bool {
        cmd.visible_frame()
            .transition
            .is_some_and(|t| !t.is_finished(now_ms - self.started_ms))
    }

    /// Call before dispatching `action` while `current` is on screen. Data-replacing actions
    /// freeze the frame shown right now as the new starting point.
    pub fn before(&mut self, current: &RenderCommand, action: &Action, now_ms: f64) {
        if !Self::restarts_on(action) {
            return;
        }
        let shown = self.displayed(current, now_ms);
        let surface = shown.surface;
        let mut from = current.clone();
        *from.frame_mut(surface) = shown;
        self.from = from;
        self.started_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Controller;

    #[test]
    fn only_the_current_surface_is_visible() {
        let demo = Controller::seeded(ChartKind::Pie, 3);
        let cmd = demo.render();
        assert_eq!(cmd.visible, Surface::Pie);
        let visible: Vec<Surface> = cmd
            .frames()
            .iter()
            .filter(|f| f.visible)
            .map(|f| f.surface)
            .collect();
        assert_eq!(visible, vec![Surface::Pie]);
        assert!(cmd.geo.transition.is_none());
        assert!(cmd.cartesian.transition.is_some());
    }

    #[test]
    fn tween_endpoints() {
        let mut demo = Controller::seeded(ChartKind::Column, 11);
        let before = demo.render().cartesian;
        demo.refresh_data();
        let after = demo.render().cartesian;
        assert_eq!(after.tweened(&before, 1.0), after);
        assert_eq!(
            after.tweened(&before, 0.0).series[0].values,
            before.series[0].values
        );
    }

    #[test]
    fn new_series_grow_from_zero() {
        let mut demo = Controller::seeded(ChartKind::Line, 5);
        demo.clear_chart();
        let empty = demo.render().cartesian;
        demo.refresh_data();
        let full = demo.render().cartesian;
        let start = full.tweened(&empty, 0.0);
        assert!(start.series[0].values.magnitudes().iter().all(|v| *v == 0.0));
    }
}
