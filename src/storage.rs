use crate::models::SeriesValues;
use crate::render::SurfaceFrame;
use anyhow::Result;
use csv::WriterBuilder;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save a surface's series as CSV with header, one row per value.
///
/// Plain values use their position as `x`; geo rows carry the region code instead.
pub fn save_csv<P: AsRef<Path>>(frame: &SurfaceFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("series", "index", "x", "y", "region"))?;
    for s in &frame.series {
        match &s.values {
            SeriesValues::Values(vals) => {
                for (i, v) in vals.iter().enumerate() {
                    wtr.serialize((&s.name, i, i as f64, *v, None::<&str>))?;
                }
            }
            SeriesValues::Points(points) => {
                for (i, p) in points.iter().enumerate() {
                    wtr.serialize((&s.name, i, p.x, p.y, None::<&str>))?;
                }
            }
            SeriesValues::Regions(regions) => {
                for (i, r) in regions.iter().enumerate() {
                    wtr.serialize((&s.name, i, None::<f64>, r.value, Some(r.region.as_str())))?;
                }
            }
        }
    }
    wtr.flush()?;
    info!("saved {} series to {}", frame.series.len(), path.display());
    Ok(())
}

/// Save a surface's series as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(frame: &SurfaceFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(&frame.series)?;
    f.write_all(s.as_bytes())?;
    info!("saved {} series to {}", frame.series.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::models::ChartKind;
    use tempfile::tempdir;

    #[test]
    fn write_csv_and_json() {
        let dir = tempdir().unwrap();
        let csvp = dir.path().join("x.csv");
        let jsonp = dir.path().join("x.json");
        let cmd = Controller::seeded(ChartKind::Column, 1).render();
        save_csv(cmd.visible_frame(), &csvp).unwrap();
        save_json(cmd.visible_frame(), &jsonp).unwrap();
        assert!(csvp.exists());
        assert!(jsonp.exists());
    }
}
