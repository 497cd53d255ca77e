use chart_demo::viz::{self, LegendMode, PlotOptions};
use chart_demo::{ChartKind, Controller};
use std::fs;
use tempfile::tempdir;

fn options(legend: LegendMode) -> PlotOptions {
    PlotOptions {
        legend,
        ..PlotOptions::default()
    }
}

#[test]
fn svg_for_every_kind() {
    let dir = tempdir().unwrap();
    let mut demo = Controller::seeded(ChartKind::Line, 31);
    for kind in ChartKind::ALL {
        demo.select_chart(kind);
        let out = dir.path().join(format!("{}.svg", kind.name()));
        viz::plot_command(&demo.render(), &out, 800, 500, &options(LegendMode::Bottom)).unwrap();
        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.contains("<svg"), "{kind}");
    }
}

#[test]
fn png_for_every_kind() {
    let dir = tempdir().unwrap();
    let mut demo = Controller::seeded(ChartKind::Line, 32);
    for kind in ChartKind::ALL {
        demo.select_chart(kind);
        let out = dir.path().join(format!("{}.png", kind.name()));
        viz::plot_command(&demo.render(), &out, 640, 400, &options(LegendMode::Right)).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0, "{kind}");
    }
}

#[test]
fn cleared_chart_still_renders() {
    let dir = tempdir().unwrap();
    for kind in [ChartKind::Scatter, ChartKind::Pie, ChartKind::GeoMap] {
        let mut demo = Controller::seeded(kind, 33);
        demo.clear_chart();
        let out = dir.path().join(format!("empty-{}.svg", kind.name()));
        viz::plot_command(&demo.render(), &out, 400, 300, &options(LegendMode::Hidden)).unwrap();
        assert!(out.exists(), "{kind}");
    }
}

#[test]
fn zero_size_is_rejected() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("nothing.svg");
    let cmd = Controller::seeded(ChartKind::Bar, 34).render();
    assert!(viz::plot_command(&cmd, &out, 0, 300, &PlotOptions::default()).is_err());
}
