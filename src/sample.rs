//! Random sample data for each chart kind.
//!
//! Every generator takes the random source explicitly so callers can seed it; values are
//! whole numbers drawn uniformly from half-open ranges.

use crate::models::{
    ChartKind, GeoRegionValue, Point, Rgba, SeriesDescriptor, SeriesShape, SeriesStyle,
    SeriesValues,
};
use rand::Rng;
use std::ops::Range;

/// Value range shared by the cartesian value series.
pub const CARTESIAN_RANGE: Range<u32> = 10..100;
/// Range of both scatter coordinates.
pub const SCATTER_RANGE: Range<u32> = 0..100;
/// Range of each pie slice.
pub const PIE_RANGE: Range<u32> = 10..50;

pub const LINE_POINTS: usize = 10;
pub const BAR_POINTS: usize = 8;
pub const COLUMN_POINTS: usize = 6;
pub const AREA_POINTS: usize = 12;
pub const SCATTER_POINTS: usize = 20;

/// Name of the single geo-map heat series.
pub const GEO_SERIES_NAME: &str = "Global Sales Data";

/// Regions shown on the geo-map with their intensity range.
pub const GEO_REGIONS: [(&str, Range<u32>); 20] = [
    ("usa", 50..100),
    ("can", 30..80),
    ("mex", 20..60),
    ("bra", 40..90),
    ("arg", 25..70),
    ("gbr", 45..95),
    ("fra", 40..85),
    ("deu", 50..100),
    ("ita", 35..75),
    ("esp", 30..70),
    ("rus", 25..65),
    ("chn", 60..100),
    ("jpn", 55..95),
    ("kor", 45..85),
    ("ind", 40..80),
    ("aus", 35..75),
    ("zaf", 20..60),
    ("egy", 15..55),
    ("are", 30..70),
    ("sau", 25..65),
];

const PIE_PRODUCTS: [(&str, Rgba); 5] = [
    ("Product A", Rgba::RED),
    ("Product B", Rgba::BLUE),
    ("Product C", Rgba::GREEN),
    ("Product D", Rgba::ORANGE),
    ("Product E", Rgba::PURPLE),
];

/// Build the full, freshly randomized series list for `kind`.
pub fn series_for<R: Rng>(kind: ChartKind, rng: &mut R) -> Vec<SeriesDescriptor> {
    match kind {
        ChartKind::Line => vec![
            line_series("Series 1", Rgba::BLUE, rng),
            line_series("Series 2", Rgba::RED, rng),
        ],
        ChartKind::Bar => vec![
            bar_series("Dataset 1", SeriesShape::Row, BAR_POINTS, Rgba::SKY_BLUE, rng),
            bar_series("Dataset 2", SeriesShape::Row, BAR_POINTS, Rgba::ORANGE, rng),
        ],
        ChartKind::Column => vec![
            bar_series(
                "Q1 Sales",
                SeriesShape::Column,
                COLUMN_POINTS,
                Rgba::MEDIUM_SEA_GREEN,
                rng,
            ),
            bar_series("Q2 Sales", SeriesShape::Column, COLUMN_POINTS, Rgba::CORAL, rng),
        ],
        ChartKind::Area => vec![
            area_series("Area 1", Rgba::PURPLE, rng),
            area_series("Area 2", Rgba::GREEN, rng),
        ],
        ChartKind::Scatter => vec![
            scatter_series("Dataset A", Rgba::BLUE, rng),
            scatter_series("Dataset B", Rgba::RED, rng),
        ],
        ChartKind::Pie => pie_series(rng),
        ChartKind::GeoMap => vec![SeriesDescriptor::new(
            GEO_SERIES_NAME,
            SeriesShape::HeatLand,
            SeriesValues::Regions(geo_regions(rng)),
            SeriesStyle::default(),
        )],
    }
}

/// `count` whole numbers drawn from `range`.
pub fn random_values<R: Rng>(rng: &mut R, count: usize, range: Range<u32>) -> Vec<f64> {
    (0..count)
        .map(|_| rng.random_range(range.clone()) as f64)
        .collect()
}

/// `count` points with both coordinates in `[0, 100)`.
pub fn scatter_points<R: Rng>(rng: &mut R, count: usize) -> Vec<Point> {
    (0..count)
        .map(|_| Point {
            x: rng.random_range(SCATTER_RANGE) as f64,
            y: rng.random_range(SCATTER_RANGE) as f64,
        })
        .collect()
}

/// One intensity per entry of [`GEO_REGIONS`], in table order.
pub fn geo_regions<R: Rng>(rng: &mut R) -> Vec<GeoRegionValue> {
    GEO_REGIONS
        .iter()
        .map(|(code, range)| GeoRegionValue {
            region: (*code).to_string(),
            value: rng.random_range(range.clone()) as f64,
        })
        .collect()
}

fn line_series<R: Rng>(name: &str, color: Rgba, rng: &mut R) -> SeriesDescriptor {
    SeriesDescriptor::new(
        name,
        SeriesShape::Line,
        SeriesValues::Values(random_values(rng, LINE_POINTS, CARTESIAN_RANGE)),
        SeriesStyle::stroked(color, 3).with_marker(8),
    )
}

fn bar_series<R: Rng>(
    name: &str,
    shape: SeriesShape,
    count: usize,
    color: Rgba,
    rng: &mut R,
) -> SeriesDescriptor {
    SeriesDescriptor::new(
        name,
        shape,
        SeriesValues::Values(random_values(rng, count, CARTESIAN_RANGE)),
        SeriesStyle::filled(color),
    )
}

fn area_series<R: Rng>(name: &str, color: Rgba, rng: &mut R) -> SeriesDescriptor {
    SeriesDescriptor::new(
        name,
        SeriesShape::StackedArea,
        SeriesValues::Values(random_values(rng, AREA_POINTS, CARTESIAN_RANGE)),
        SeriesStyle::filled(color.with_alpha(100)).with_stroke(color, 2),
    )
}

fn scatter_series<R: Rng>(name: &str, color: Rgba, rng: &mut R) -> SeriesDescriptor {
    SeriesDescriptor::new(
        name,
        SeriesShape::Scatter,
        SeriesValues::Points(scatter_points(rng, SCATTER_POINTS)),
        SeriesStyle::filled(color.with_alpha(150))
            .with_stroke(color, 2)
            .with_marker(12),
    )
}

fn pie_series<R: Rng>(rng: &mut R) -> Vec<SeriesDescriptor> {
    PIE_PRODUCTS
        .iter()
        .map(|(name, color)| {
            SeriesDescriptor::new(
                *name,
                SeriesShape::PieSlice,
                SeriesValues::Values(random_values(rng, 1, PIE_RANGE)),
                SeriesStyle::filled(*color),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn values_are_whole_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let vals = random_values(&mut rng, 500, CARTESIAN_RANGE);
        assert!(vals.iter().all(|v| v.fract() == 0.0 && (10.0..100.0).contains(v)));
    }

    #[test]
    fn geo_regions_follow_table_order_and_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let regions = geo_regions(&mut rng);
        assert_eq!(regions.len(), GEO_REGIONS.len());
        for (got, (code, range)) in regions.iter().zip(GEO_REGIONS.iter()) {
            assert_eq!(got.region, *code);
            assert!(got.value >= range.start as f64 && got.value < range.end as f64);
        }
    }
}
