/*!
 * Tests for the desktop surface's transition logic
 *
 * These tests drive `Tween` with a fake millisecond clock, so no display is needed.
 */

use chart_demo::models::{SeriesValues, Surface};
use chart_demo::render::Tween;
use chart_demo::{Action, ChartKind, Controller};

fn values(frame: &chart_demo::SurfaceFrame, series: usize) -> Vec<f64> {
    frame.series[series].values.magnitudes()
}

/// Controller on a column chart with a 1000 ms linear transition.
fn columns(seed: u64) -> Controller {
    let mut demo = Controller::seeded(ChartKind::Column, seed);
    demo.set_animation_speed(1000);
    demo.set_easing("Linear");
    demo
}

#[test]
fn first_frame_grows_in_from_zero() {
    let demo = columns(41);
    let cmd = demo.render();
    let tween = Tween::start(&cmd, 0.0);

    assert!(values(&tween.displayed(&cmd, 0.0), 0).iter().all(|v| *v == 0.0));
    let half: Vec<f64> = values(cmd.visible_frame(), 0).iter().map(|v| v * 0.5).collect();
    assert_eq!(values(&tween.displayed(&cmd, 500.0), 0), half);
    assert_eq!(tween.displayed(&cmd, 1000.0), *cmd.visible_frame());
    assert!(tween.is_running(&cmd, 999.0));
    assert!(!tween.is_running(&cmd, 1000.0));
}

#[test]
fn restart_captures_the_partially_tweened_frame() {
    let mut demo = columns(42);
    let cmd = demo.render();
    let mut tween = Tween::start(&cmd, 0.0);
    let mid = tween.displayed(&cmd, 500.0);

    let action = Action::Refresh;
    tween.before(&cmd, &action, 500.0);
    demo.dispatch(action);
    let next = demo.render();

    // The new transition starts exactly where the interrupted one was.
    let start = tween.displayed(&next, 500.0);
    assert_eq!(values(&start, 0), values(&mid, 0));
    assert_eq!(values(&start, 1), values(&mid, 1));
    assert_eq!(tween.displayed(&next, 1500.0), *next.visible_frame());
    assert!(tween.is_running(&next, 1400.0));
}

#[test]
fn settings_changes_do_not_restart() {
    let mut demo = columns(43);
    let cmd = demo.render();
    let mut tween = Tween::start(&cmd, 0.0);
    let untouched = tween.clone();

    for action in [
        Action::SetSpeed(200),
        Action::SetEasing("EaseOutCubic".into()),
        Action::ToggleAnimations(true),
    ] {
        assert!(!Tween::restarts_on(&action));
        tween.before(&demo.render(), &action, 700.0);
        demo.dispatch(action);
        assert_eq!(tween, untouched);
    }
    for action in [
        Action::SelectChart(ChartKind::Pie),
        Action::Refresh,
        Action::Clear,
    ] {
        assert!(Tween::restarts_on(&action));
    }
}

#[test]
fn disabled_animations_show_new_data_at_once() {
    let mut demo = columns(44);
    demo.toggle_animations(false);
    let cmd = demo.render();
    let tween = Tween::start(&cmd, 0.0);

    assert_eq!(tween.progress(&cmd, 0.0), 1.0);
    assert_eq!(tween.displayed(&cmd, 0.0), *cmd.visible_frame());
    assert!(!tween.is_running(&cmd, 0.0));
}

#[test]
fn geo_map_never_animates() {
    let mut demo = columns(45);
    let cmd = demo.render();
    let mut tween = Tween::start(&cmd, 0.0);

    let action = Action::SelectChart(ChartKind::GeoMap);
    tween.before(&cmd, &action, 100.0);
    demo.dispatch(action);
    let geo = demo.render();

    assert_eq!(geo.visible, Surface::GeoMap);
    assert_eq!(tween.progress(&geo, 100.0), 1.0);
    let shown = tween.displayed(&geo, 100.0);
    assert!(matches!(shown.series[0].values, SeriesValues::Regions(_)));
    assert_eq!(shown, *geo.visible_frame());
}

#[test]
fn switching_surfaces_starts_from_that_surface() {
    let mut demo = columns(46);
    let cmd = demo.render();
    let mut tween = Tween::start(&cmd, 0.0);

    let action = Action::SelectChart(ChartKind::Pie);
    tween.before(&cmd, &action, 2000.0);
    demo.dispatch(action);
    let pie = demo.render();

    // The pie surface had no data before, so its wedges grow from zero.
    let start = tween.displayed(&pie, 2000.0);
    assert_eq!(start.surface, Surface::Pie);
    assert!(start.series.iter().all(|s| s.values.magnitudes() == [0.0]));
}
