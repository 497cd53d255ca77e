use crate::error::DemoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven chart presentations the demo can switch between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Line,
    Bar,
    Column,
    Area,
    Scatter,
    Pie,
    GeoMap,
}

impl ChartKind {
    /// All kinds in the order the control panel lists them.
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Column,
        ChartKind::Area,
        ChartKind::Scatter,
        ChartKind::Pie,
        ChartKind::GeoMap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Column => "Column",
            ChartKind::Area => "Area",
            ChartKind::Scatter => "Scatter",
            ChartKind::Pie => "Pie",
            ChartKind::GeoMap => "GeoMap",
        }
    }

    /// Button caption used by the desktop surface.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Column => "Column Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Scatter => "Scatter Chart",
            ChartKind::Pie => "Pie Chart",
            ChartKind::GeoMap => "Geo Map",
        }
    }

    /// The display surface this kind is drawn on.
    pub fn surface(self) -> Surface {
        match self {
            ChartKind::Line
            | ChartKind::Bar
            | ChartKind::Column
            | ChartKind::Area
            | ChartKind::Scatter => Surface::Cartesian,
            ChartKind::Pie => Surface::Pie,
            ChartKind::GeoMap => Surface::GeoMap,
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "column" => Ok(ChartKind::Column),
            "area" => Ok(ChartKind::Area),
            "scatter" => Ok(ChartKind::Scatter),
            "pie" => Ok(ChartKind::Pie),
            "geomap" | "geo-map" | "geo" => Ok(ChartKind::GeoMap),
            _ => Err(DemoError::UnknownChartKind(s.to_string())),
        }
    }
}

/// One of the three mutually exclusive display areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    Cartesian,
    Pie,
    GeoMap,
}

impl Surface {
    pub fn name(self) -> &'static str {
        match self {
            Surface::Cartesian => "cartesian",
            Surface::Pie => "pie",
            Surface::GeoMap => "geomap",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLUE: Rgba = Rgba::rgb(0, 0, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 128, 0);
    pub const ORANGE: Rgba = Rgba::rgb(255, 165, 0);
    pub const PURPLE: Rgba = Rgba::rgb(128, 0, 128);
    pub const SKY_BLUE: Rgba = Rgba::rgb(135, 206, 235);
    pub const MEDIUM_SEA_GREEN: Rgba = Rgba::rgb(60, 179, 113);
    pub const CORAL: Rgba = Rgba::rgb(255, 127, 80);
    pub const GRAY: Rgba = Rgba::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Rgba = Rgba::rgb(211, 211, 211);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a 0..1 opacity.
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }
}

/// Stroke paint for lines and outlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Rgba,
    pub width: u32,
}

/// Visual role of a series: stroke, fill and marker geometry size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub stroke: Option<Stroke>,
    pub fill: Option<Rgba>,
    pub marker_size: u32,
}

impl SeriesStyle {
    pub fn filled(color: Rgba) -> Self {
        Self {
            stroke: None,
            fill: Some(color),
            marker_size: 0,
        }
    }

    pub fn stroked(color: Rgba, width: u32) -> Self {
        Self {
            stroke: Some(Stroke { color, width }),
            fill: None,
            marker_size: 0,
        }
    }

    pub fn with_stroke(mut self, color: Rgba, width: u32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    pub fn with_marker(mut self, size: u32) -> Self {
        self.marker_size = size;
        self
    }

    /// The color that identifies this series in a legend: stroke first, then fill.
    pub fn primary_color(&self) -> Rgba {
        self.stroke
            .map(|s| s.color)
            .or(self.fill)
            .unwrap_or(Rgba::GRAY)
    }
}

/// Geometry a series is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesShape {
    /// Polyline with point markers.
    Line,
    /// Horizontal bars (one row per value).
    Row,
    /// Vertical bars.
    Column,
    /// Filled area stacked on top of the previous area series.
    StackedArea,
    /// Unconnected (x, y) markers.
    Scatter,
    /// One wedge of a pie.
    PieSlice,
    /// Region intensities on a map.
    HeatLand,
}

/// A 2-D data point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Region code (lowercase ISO3) plus intensity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoRegionValue {
    pub region: String,
    pub value: f64,
}

/// Ordered data of a series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SeriesValues {
    Values(Vec<f64>),
    Points(Vec<Point>),
    Regions(Vec<GeoRegionValue>),
}

impl SeriesValues {
    pub fn len(&self) -> usize {
        match self {
            SeriesValues::Values(v) => v.len(),
            SeriesValues::Points(p) => p.len(),
            SeriesValues::Regions(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The magnitude of each entry (y for points, intensity for regions).
    pub fn magnitudes(&self) -> Vec<f64> {
        match self {
            SeriesValues::Values(v) => v.clone(),
            SeriesValues::Points(p) => p.iter().map(|p| p.y).collect(),
            SeriesValues::Regions(r) => r.iter().map(|r| r.value).collect(),
        }
    }
}

/// A named series with its geometry, data and visual role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    pub name: String,
    pub shape: SeriesShape,
    pub values: SeriesValues,
    pub style: SeriesStyle,
}

impl SeriesDescriptor {
    pub fn new(
        name: impl Into<String>,
        shape: SeriesShape,
        values: SeriesValues,
        style: SeriesStyle,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            values,
            style,
        }
    }
}

/// Paint applied to every land of the geo-map, independent of the series data.
pub const GEO_LAND_STROKE: Stroke = Stroke {
    color: Rgba::GRAY,
    width: 1,
};
pub const GEO_LAND_FILL: Rgba = Rgba::LIGHT_GRAY;
