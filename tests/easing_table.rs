use chart_demo::Easing;

#[test]
fn table_values() {
    assert_eq!(Easing::EaseInQuad.apply(0.5), 0.25);
    assert_eq!(Easing::EaseOutQuad.apply(1.0), 1.0);
    assert_eq!(Easing::EaseOutQuad.apply(0.5), 0.75);
    assert_eq!(Easing::EaseInCubic.apply(0.5), 0.125);
    assert_eq!(Easing::EaseOutCubic.apply(0.5), 0.875);
    assert_eq!(Easing::EaseInOutQuad.apply(0.5), 0.5);
    assert_eq!(Easing::EaseInOutCubic.apply(0.5), 0.5);
}

#[test]
fn linear_is_identity() {
    for i in 0..=100 {
        let t = i as f64 / 100.0;
        assert_eq!(Easing::Linear.apply(t), t);
    }
}

#[test]
fn every_curve_is_anchored_and_monotonic() {
    for easing in Easing::ALL {
        assert!(easing.apply(0.0).abs() < 1e-12, "{easing}");
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{easing}");
        let mut prev = 0.0;
        for i in 1..=50 {
            let v = easing.apply(i as f64 / 50.0);
            assert!(v >= prev - 1e-12, "{easing} decreases at step {i}");
            prev = v;
        }
    }
}

#[test]
fn names_round_trip_and_bogus_falls_back() {
    for easing in Easing::ALL {
        assert_eq!(Easing::from_name(easing.name()), easing);
    }
    assert_eq!(Easing::from_name("Bogus"), Easing::Linear);
    assert_eq!(Easing::from_name(""), Easing::Linear);
}
