use chart_demo::animation::{AnimationConfig, Transition, interpolate};
use chart_demo::Easing;

#[test]
fn progress_follows_the_easing() {
    let t = Transition {
        duration_ms: 1000,
        easing: Easing::EaseInQuad,
    };
    assert_eq!(t.progress(0.0), 0.0);
    assert_eq!(t.progress(500.0), 0.25);
    assert_eq!(t.progress(1000.0), 1.0);
    assert_eq!(t.progress(5000.0), 1.0);
    assert!(!t.is_finished(999.0));
    assert!(t.is_finished(1000.0));
}

#[test]
fn disabled_animation_jumps_to_the_end() {
    let cfg = AnimationConfig::new(2000, false, Easing::EaseInOutCubic);
    let t = cfg.transition();
    assert_eq!(t.duration_ms, 0);
    assert_eq!(t.progress(0.0), 1.0);
    assert!(t.is_finished(0.0));
}

#[test]
fn interpolate_grows_new_entries_from_zero() {
    assert_eq!(interpolate(&[10.0, 20.0], &[30.0, 40.0], 0.5), vec![20.0, 30.0]);
    assert_eq!(interpolate(&[], &[30.0, 40.0], 0.5), vec![15.0, 20.0]);
    assert_eq!(interpolate(&[10.0, 20.0, 30.0], &[50.0], 1.0), vec![50.0]);
}
