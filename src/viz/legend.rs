//! Legend layout and drawing functions for external legend placement.

use anyhow::{Result, anyhow};
use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::text::{estimate_text_width_px, truncate_to_width};
use super::types::LegendMode;

const FONT_PX: u32 = 14;
const LINE_H: i32 = FONT_PX as i32 + 8;
const PAD: i32 = 12;
const SWATCH_R: i32 = 5;
const SWATCH_TO_TEXT: i32 = 12;
const ITEM_GAP: i32 = 20;

fn item_width(label: &str) -> i32 {
    SWATCH_R * 2 + SWATCH_TO_TEXT + estimate_text_width_px(label, FONT_PX) as i32 + ITEM_GAP
}

/// Rows needed to flow `labels` left to right in a band `total_w` pixels wide.
fn flow_rows(labels: &[String], total_w: i32) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut cur: Vec<usize> = Vec::new();
    let mut x = PAD;
    for (i, label) in labels.iter().enumerate() {
        let w = item_width(label);
        if x + w > total_w - PAD && !cur.is_empty() {
            rows.push(std::mem::take(&mut cur));
            x = PAD;
        }
        cur.push(i);
        x += w;
    }
    if !cur.is_empty() {
        rows.push(cur);
    }
    rows
}

/// Height the bottom legend band needs to show every label without clipping.
pub fn estimate_bottom_legend_height_px(labels: &[String], total_w: i32) -> i32 {
    let rows = flow_rows(labels, total_w).len().max(1) as i32;
    PAD * 2 + rows * LINE_H
}

/// Draw legend swatches and labels into `area`.
pub fn draw_legend_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    items: &[(String, RGBAColor)],
    mode: LegendMode,
) -> Result<()> {
    let (w, _h) = area.dim_in_pixel();
    let w = w as i32;
    let style = TextStyle::from((FontFamily::SansSerif, FONT_PX).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));

    let draw_item = |x: i32, y: i32, label: &str, color: &RGBAColor| -> Result<()> {
        area.draw(&Circle::new((x + SWATCH_R, y), SWATCH_R, color.filled()))
            .map_err(|e| anyhow!("{:?}", e))?;
        area.draw(&Text::new(
            label.to_string(),
            (x + SWATCH_R * 2 + SWATCH_TO_TEXT, y),
            style.clone(),
        ))
        .map_err(|e| anyhow!("{:?}", e))?;
        Ok(())
    };

    match mode {
        LegendMode::Hidden => {}
        LegendMode::Right => {
            let text_cap = (w - PAD * 2 - SWATCH_R * 2 - SWATCH_TO_TEXT).max(20) as u32;
            for (row, (label, color)) in items.iter().enumerate() {
                let y = PAD * 2 + row as i32 * LINE_H;
                let shown = truncate_to_width(label, FONT_PX, text_cap);
                draw_item(PAD, y, &shown, color)?;
            }
        }
        LegendMode::Bottom => {
            let labels: Vec<String> = items.iter().map(|(l, _)| l.clone()).collect();
            for (r, row) in flow_rows(&labels, w).iter().enumerate() {
                let y = PAD + LINE_H / 2 + r as i32 * LINE_H;
                let mut x = PAD;
                for &i in row {
                    let (label, color) = &items[i];
                    draw_item(x, y, label, color)?;
                    x += item_width(label);
                }
            }
        }
    }
    Ok(())
}
