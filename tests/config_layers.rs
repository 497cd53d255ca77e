use chart_demo::config::{ENV_EASING, ENV_FONT, ENV_SPEED};
use chart_demo::{ChartKind, Controller, DemoConfig, Easing};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn file_values_override_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.json");
    fs::write(
        &path,
        r#"{ "initial_chart": "GeoMap", "animation_speed_ms": 2500, "seed": 7,
             "window": { "width": 900, "height": 700 } }"#,
    )
    .unwrap();

    let cfg = DemoConfig::load_from_file(&path).unwrap();
    assert_eq!(cfg.initial_chart, ChartKind::GeoMap);
    assert_eq!(cfg.animation_speed_ms, 2500);
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.window.width, 900);
    assert!(cfg.animations_enabled);
}

#[test]
fn env_wins_over_file() {
    let mut cfg = DemoConfig {
        animation_speed_ms: 2500,
        easing: "EaseInQuad".into(),
        ..DemoConfig::default()
    };
    cfg.apply_env(|key| match key {
        k if k == ENV_SPEED => Some("600".to_string()),
        k if k == ENV_EASING => Some("EaseOutCubic".to_string()),
        k if k == ENV_FONT => Some("/tmp/font.ttf".to_string()),
        _ => None,
    });
    assert_eq!(cfg.animation_speed_ms, 600);
    assert_eq!(cfg.animation().easing(), Easing::EaseOutCubic);
    assert_eq!(cfg.font_path, Some(PathBuf::from("/tmp/font.ttf")));
}

#[test]
fn broken_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ not json").unwrap();
    let err = DemoConfig::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("invalid config file"));
    assert!(DemoConfig::load_from_file(&dir.path().join("missing.json")).is_err());
}

#[test]
fn seeded_config_reproduces_data() {
    let cfg = DemoConfig {
        initial_chart: ChartKind::Area,
        seed: Some(1234),
        ..DemoConfig::default()
    };
    let a = Controller::from_config(&cfg);
    let b = Controller::from_config(&cfg);
    assert_eq!(a.state(), b.state());
    assert_eq!(a.state().current(), ChartKind::Area);
}
