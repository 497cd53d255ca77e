//! Offline rendering surface: draw the visible frame of a [`RenderCommand`] to **SVG** or **PNG**.
//!
//! - Cartesian shapes: line (with markers), horizontal rows, grouped columns, stacked areas,
//!   scatter
//! - Pie wedges with percentage labels
//! - Geo-map as a grid of region tiles shaded by intensity (no projection)
//! - Legend placement: `Right`, `Bottom` or hidden
//!
//! Text uses the configured font or the bundled DejaVu Sans (see [`fonts`]).

pub mod fonts;
pub mod legend;
pub mod text;
pub mod types;
pub mod util;

pub use types::{DEFAULT_LEGEND_MODE, LegendMode, PlotOptions};

use crate::models::{GEO_LAND_FILL, GEO_LAND_STROKE, SeriesShape, SeriesValues, Surface};
use crate::render::{RenderCommand, SurfaceFrame};
use crate::sample::GEO_REGIONS;
use anyhow::{Result, anyhow};
use num_format::Locale;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::LineSeries;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use log::info;
use std::f64::consts::PI;
use std::path::Path;

use fonts::ensure_fonts_registered;
use legend::{draw_legend_panel, estimate_bottom_legend_height_px};
use util::{
    HEAT_INK_THRESHOLD, category_label, format_value, heat_bounds, heat_color, heat_share,
    legend_items, longest_series, map_locale, max_value, stacked_max, to_rgba, value_ceiling,
};

const MARGIN: u32 = 16;
const CAPTION_PX: u32 = 22;
const GEO_COLUMNS: usize = 5;

/// Draw the visible surface of `cmd` to `out_path`. `.svg` selects the SVG backend, any other
/// extension the bitmap backend.
pub fn plot_command<P: AsRef<Path>>(
    cmd: &RenderCommand,
    out_path: P,
    width: u32,
    height: u32,
    options: &PlotOptions,
) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(anyhow!("plot size must be non-zero, got {width}x{height}"));
    }
    let text = ensure_fonts_registered(options.font_path.as_deref());
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_command(root, cmd, options, text)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_command(root, cmd, options, text)?;
    }
    info!("wrote {} chart to {}", cmd.kind, out_path.display());
    Ok(())
}

/// Draws to any Plotters backend.
fn draw_command<DB>(
    root: DrawingArea<DB, Shift>,
    cmd: &RenderCommand,
    options: &PlotOptions,
    text: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let frame = cmd.visible_frame();
    let caption = options
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(cmd.kind.label())
        .to_string();
    let locale = map_locale(&options.locale);

    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // Split off the legend before drawing the chart.
    let items = legend_items(frame);
    let legend = if text && !items.is_empty() {
        options.legend
    } else {
        LegendMode::Hidden
    };
    let (root_w, root_h) = root.dim_in_pixel();
    let (chart_area, legend_area) = match legend {
        LegendMode::Right => {
            let (chart, legend) = root.split_horizontally((80).percent_width());
            (chart, Some(legend))
        }
        LegendMode::Bottom => {
            let labels: Vec<String> = items.iter().map(|(l, _)| l.clone()).collect();
            let h = estimate_bottom_legend_height_px(&labels, root_w as i32);
            let (chart, legend) = root.split_vertically((root_h as i32 - h).max(40));
            (chart, Some(legend))
        }
        LegendMode::Hidden => (root, None),
    };

    match frame.surface {
        Surface::Cartesian => draw_cartesian(&chart_area, frame, &caption, text, locale)?,
        Surface::Pie => draw_pie(&chart_area, frame, &caption, text)?,
        Surface::GeoMap => draw_geo(&chart_area, frame, &caption, text, locale)?,
    }

    if let Some(ref legend_area) = legend_area {
        draw_legend_panel(legend_area, &items, legend)?;
    }

    chart_area.present().map_err(|e| anyhow!("{:?}", e))?;
    if let Some(ref legend_area) = legend_area {
        legend_area.present().map_err(|e| anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Caption band on top of `area` when text is available.
fn titled<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: &str,
    text: bool,
) -> Result<DrawingArea<DB, Shift>> {
    if text {
        let style = TextStyle::from((FontFamily::SansSerif, CAPTION_PX).into_font());
        area.titled(caption, style)
            .map_err(|e| anyhow!("{:?}", e))
    } else {
        Ok(area.clone())
    }
}

fn values_of(values: &SeriesValues) -> &[f64] {
    match values {
        SeriesValues::Values(v) => v.as_slice(),
        _ => &[],
    }
}

fn draw_cartesian<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &SurfaceFrame,
    caption: &str,
    text: bool,
    locale: &Locale,
) -> Result<()> {
    let Some(shape) = frame.series.first().map(|s| s.shape) else {
        // Cleared surface: only the caption remains.
        titled(area, caption, text)?;
        return Ok(());
    };

    let n = longest_series(frame).max(1);
    let categories = -0.5..(n as f64 - 0.5);
    let (x_range, y_range) = match shape {
        SeriesShape::Scatter => (0.0..100.0, 0.0..100.0),
        SeriesShape::Row => (0.0..value_ceiling(max_value(frame)), categories),
        SeriesShape::StackedArea => (
            0.0..((n - 1).max(1) as f64),
            0.0..value_ceiling(stacked_max(frame)),
        ),
        _ => (categories, 0.0..value_ceiling(max_value(frame))),
    };

    let mut builder = ChartBuilder::on(area);
    builder.margin(MARGIN);
    if text {
        builder
            .caption(caption, (FontFamily::SansSerif, CAPTION_PX))
            .set_label_area_size(LabelAreaPosition::Left, 56)
            .set_label_area_size(LabelAreaPosition::Bottom, 36);
    }
    let mut chart = builder
        .build_cartesian_2d(x_range, y_range)
        .map_err(|e| anyhow!("{:?}", e))?;

    // X/Y tick formatters: value axes use locale separators, category axes count from 1.
    let value_fmt = |v: &f64| format_value(*v, locale);
    let category_fmt = |v: &f64| category_label(*v);
    let (x_fmt, y_fmt): (&dyn Fn(&f64) -> String, &dyn Fn(&f64) -> String) = match shape {
        SeriesShape::Row => (&value_fmt, &category_fmt),
        SeriesShape::Line | SeriesShape::Column => (&category_fmt, &value_fmt),
        _ => (&value_fmt, &value_fmt),
    };

    chart
        .configure_mesh()
        .light_line_style(RGBColor(235, 235, 235))
        .x_label_formatter(x_fmt)
        .y_label_formatter(y_fmt)
        .label_style((FontFamily::SansSerif, 12))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let n_series = frame.series.len().max(1);
    let group_width = 0.8f64;
    let bar_w = group_width / n_series as f64;
    let mut cum: Vec<f64> = vec![0.0; n];

    for (idx, series) in frame.series.iter().enumerate() {
        let style = &series.style;
        let fill = style.fill.map(to_rgba);
        let stroke = style.stroke.map(|s| (to_rgba(s.color), s.width));
        let primary = to_rgba(style.primary_color());

        match series.shape {
            SeriesShape::Line => {
                let pts: Vec<(f64, f64)> = values_of(&series.values)
                    .iter()
                    .enumerate()
                    .map(|(i, v)| (i as f64, *v))
                    .collect();
                let (color, width) = stroke.unwrap_or((primary, 2));
                chart
                    .draw_series(LineSeries::new(pts.clone(), color.stroke_width(width)))
                    .map_err(|e| anyhow!("{:?}", e))?;
                if style.marker_size > 0 {
                    let r = (style.marker_size / 2) as i32;
                    chart
                        .draw_series(pts.iter().map(|p| Circle::new(*p, r, WHITE.filled())))
                        .map_err(|e| anyhow!("{:?}", e))?;
                    chart
                        .draw_series(pts.iter().map(|p| Circle::new(*p, r, color.stroke_width(2))))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
            }
            SeriesShape::Column | SeriesShape::Row => {
                let color = fill.unwrap_or(primary);
                let horizontal = series.shape == SeriesShape::Row;
                let bars = values_of(&series.values).iter().enumerate().map(|(i, v)| {
                    let c0 = i as f64 - group_width / 2.0 + idx as f64 * bar_w;
                    let c1 = c0 + bar_w;
                    let corners = if horizontal {
                        [(0.0, c0), (*v, c1)]
                    } else {
                        [(c0, 0.0), (c1, *v)]
                    };
                    Rectangle::new(corners, color.filled())
                });
                chart.draw_series(bars).map_err(|e| anyhow!("{:?}", e))?;
            }
            SeriesShape::StackedArea => {
                let vals = values_of(&series.values);
                let mut upper: Vec<(f64, f64)> = Vec::with_capacity(vals.len());
                let mut lower: Vec<(f64, f64)> = Vec::with_capacity(vals.len());
                for (i, v) in vals.iter().enumerate() {
                    let x = i as f64;
                    lower.push((x, cum[i]));
                    cum[i] += v.max(0.0);
                    upper.push((x, cum[i]));
                }
                // polygon: lower (forward) + upper (reverse)
                let mut poly: Vec<(f64, f64)> = Vec::with_capacity(upper.len() * 2);
                poly.extend(lower.iter().copied());
                poly.extend(upper.iter().rev().copied());

                let fill_color = fill.unwrap_or(primary.mix(0.3));
                chart
                    .draw_series(std::iter::once(Polygon::new(poly, fill_color.filled())))
                    .map_err(|e| anyhow!("{:?}", e))?;
                let (color, width) = stroke.unwrap_or((primary, 1));
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        upper,
                        color.stroke_width(width),
                    )))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
            SeriesShape::Scatter => {
                let SeriesValues::Points(points) = &series.values else {
                    continue;
                };
                let r = (style.marker_size / 2).max(2) as i32;
                let fill_color = fill.unwrap_or(primary);
                chart
                    .draw_series(
                        points
                            .iter()
                            .map(|p| Circle::new((p.x, p.y), r, fill_color.filled())),
                    )
                    .map_err(|e| anyhow!("{:?}", e))?;
                if let Some((color, width)) = stroke {
                    chart
                        .draw_series(
                            points
                                .iter()
                                .map(|p| Circle::new((p.x, p.y), r, color.stroke_width(width))),
                        )
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
            }
            SeriesShape::PieSlice | SeriesShape::HeatLand => {}
        }
    }
    Ok(())
}

fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &SurfaceFrame,
    caption: &str,
    text: bool,
) -> Result<()> {
    let area = titled(area, caption, text)?;
    let slices: Vec<(f64, RGBAColor)> = frame
        .series
        .iter()
        .map(|s| {
            let value: f64 = s.values.magnitudes().iter().sum();
            (value.max(0.0), to_rgba(s.style.fill.unwrap_or(s.style.primary_color())))
        })
        .collect();
    let total: f64 = slices.iter().map(|(v, _)| v).sum();
    if total <= 0.0 {
        return Ok(());
    }

    let (w, h) = area.dim_in_pixel();
    let center = (w as i32 / 2, h as i32 / 2);
    let radius = (w.min(h) as f64 / 2.0 - MARGIN as f64).max(4.0);
    let at = |angle: f64, r: f64| {
        (
            center.0 + (r * angle.cos()).round() as i32,
            center.1 + (r * angle.sin()).round() as i32,
        )
    };
    let label_style = TextStyle::from((FontFamily::SansSerif, 14).into_font())
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));

    // Start at 12 o'clock and go clockwise.
    let mut start = -PI / 2.0;
    for (value, color) in &slices {
        let sweep = value / total * 2.0 * PI;
        let steps = ((sweep / 0.02).ceil() as usize).max(1);
        let mut wedge = Vec::with_capacity(steps + 2);
        wedge.push(center);
        wedge.extend((0..=steps).map(|i| at(start + sweep * i as f64 / steps as f64, radius)));
        area.draw(&Polygon::new(wedge.clone(), color.filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        wedge.push(center);
        area.draw(&PathElement::new(wedge, WHITE.stroke_width(2)))
            .map_err(|e| anyhow!("{:?}", e))?;

        if text && *value > 0.0 {
            let pct = value / total * 100.0;
            area.draw(&Text::new(
                format!("{pct:.0}%"),
                at(start + sweep / 2.0, radius * 0.65),
                label_style.clone(),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }
        start += sweep;
    }
    Ok(())
}

fn draw_geo<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    frame: &SurfaceFrame,
    caption: &str,
    text: bool,
    locale: &Locale,
) -> Result<()> {
    let area = titled(area, caption, text)?;
    let lookup: Vec<(&str, f64)> = frame
        .series
        .iter()
        .filter_map(|s| match &s.values {
            SeriesValues::Regions(r) => Some(r),
            _ => None,
        })
        .flatten()
        .map(|r| (r.region.as_str(), r.value))
        .collect();
    let bounds = heat_bounds(lookup.iter().map(|(_, v)| *v));

    let (w, h) = area.dim_in_pixel();
    let rows = GEO_REGIONS.len().div_ceil(GEO_COLUMNS);
    let m = MARGIN as i32;
    let tile_w = ((w as i32 - 2 * m) / GEO_COLUMNS as i32).max(1);
    let tile_h = ((h as i32 - 2 * m) / rows as i32).max(1);
    let label_style = TextStyle::from((FontFamily::SansSerif, 13).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let border = to_rgba(GEO_LAND_STROKE.color).stroke_width(GEO_LAND_STROKE.width);

    for (i, (code, _)) in GEO_REGIONS.iter().enumerate() {
        let col = (i % GEO_COLUMNS) as i32;
        let row = (i / GEO_COLUMNS) as i32;
        let x0 = m + col * tile_w;
        let y0 = m + row * tile_h;
        let corners = [(x0 + 2, y0 + 2), (x0 + tile_w - 2, y0 + tile_h - 2)];

        let value = lookup.iter().find(|(r, _)| r == code).map(|(_, v)| *v);
        let fill = match value {
            Some(v) => heat_color(heat_share(v, bounds)),
            None => GEO_LAND_FILL,
        };
        area.draw(&Rectangle::new(corners, to_rgba(fill).filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&Rectangle::new(corners, border))
            .map_err(|e| anyhow!("{:?}", e))?;

        if text {
            let label = match value {
                Some(v) => format!("{} {}", code.to_uppercase(), format_value(v, locale)),
                None => code.to_uppercase(),
            };
            let ink: &'static RGBColor = match value {
                Some(v) if heat_share(v, bounds) > HEAT_INK_THRESHOLD => &WHITE,
                _ => &BLACK,
            };
            area.draw(&Text::new(
                label,
                (x0 + tile_w / 2, y0 + tile_h / 2),
                label_style.color(ink),
            ))
            .map_err(|e| anyhow!("{:?}", e))?;
        }
    }
    Ok(())
}
