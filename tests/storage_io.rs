use chart_demo::models::SeriesDescriptor;
use chart_demo::{ChartKind, Controller, storage};
use std::fs;
use tempfile::tempdir;

#[test]
fn csv_has_header_and_one_row_per_value() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("line.csv");
    let cmd = Controller::seeded(ChartKind::Line, 21).render();
    storage::save_csv(cmd.visible_frame(), &path).unwrap();

    let txt = fs::read_to_string(&path).unwrap();
    let mut lines = txt.lines();
    assert_eq!(lines.next(), Some("series,index,x,y,region"));
    let rows: Vec<&str> = lines.collect();
    // two series of ten points
    assert_eq!(rows.len(), 20);
    assert!(rows[0].starts_with("Series 1,0,"));
    assert!(rows[19].starts_with("Series 2,9,"));
}

#[test]
fn geo_csv_carries_region_codes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("geo.csv");
    let cmd = Controller::seeded(ChartKind::GeoMap, 22).render();
    storage::save_csv(cmd.visible_frame(), &path).unwrap();

    let txt = fs::read_to_string(&path).unwrap();
    assert_eq!(txt.lines().count(), 21);
    assert!(txt.contains(",usa\n") || txt.contains(",usa\r\n"));
}

#[test]
fn json_reads_back_as_series() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pie.json");
    let cmd = Controller::seeded(ChartKind::Pie, 23).render();
    storage::save_json(cmd.visible_frame(), &path).unwrap();

    let txt = fs::read_to_string(&path).unwrap();
    let back: Vec<SeriesDescriptor> = serde_json::from_str(&txt).unwrap();
    assert_eq!(back, cmd.visible_frame().series);
}

#[test]
fn cleared_surface_exports_header_only() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    let mut demo = Controller::seeded(ChartKind::Bar, 24);
    demo.clear_chart();
    storage::save_csv(demo.render().visible_frame(), &path).unwrap();
    let txt = fs::read_to_string(&path).unwrap();
    assert_eq!(txt.trim_end(), "series,index,x,y,region");
}
