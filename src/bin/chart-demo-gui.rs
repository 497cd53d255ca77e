/*!
 * Desktop surface for chart-demo
 *
 * A control panel on the left switches between seven chart presentations, regenerates or
 * clears data, and tunes the transition animation; the chart area on the right draws the
 * current render command:
 * - Cartesian charts through egui_plot
 * - Pie wedges and the geo tile grid through the egui painter
 *
 * Platform support: Windows, macOS, Linux
 */

use chart_demo::animation::{MAX_SPEED_MS, MIN_SPEED_MS};
use chart_demo::models::{GEO_LAND_FILL, GEO_LAND_STROKE, Rgba, SeriesShape, SeriesValues};
use chart_demo::render::{SurfaceFrame, Tween};
use chart_demo::sample::GEO_REGIONS;
use chart_demo::viz::util::{HEAT_INK_THRESHOLD, heat_bounds, heat_color, heat_share};
use chart_demo::viz::{self, PlotOptions};
use chart_demo::{Action, ChartKind, Controller, DemoConfig, Easing, Surface};
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};
use std::f64::consts::TAU;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

const SAVE_WIDTH: u32 = 1000;
const SAVE_HEIGHT: u32 = 600;
const GEO_COLUMNS: usize = 5;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = DemoConfig::load(None).unwrap_or_else(|err| {
        log::warn!("ignoring config: {err:#}");
        DemoConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width as f32, config.window.height as f32])
            .with_min_inner_size([700.0, 450.0])
            .with_title("Chart Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Chart Demo",
        options,
        Box::new(move |_cc| Ok(Box::new(ChartDemoApp::new(config)))),
    )
}

/// Main application state
struct ChartDemoApp {
    demo: Controller,
    config: DemoConfig,

    // Control mirrors
    speed_ms: u32,
    easing: Easing,
    animations: bool,

    // Transition bookkeeping
    tween: Tween,
    epoch: Instant,

    // UI state
    is_saving: bool,
    status_message: String,
    error_message: String,

    save_receiver: Option<mpsc::Receiver<OperationResult>>,
}

#[derive(Debug)]
enum OperationResult {
    Success(String),
    Error(String),
}

impl ChartDemoApp {
    fn new(config: DemoConfig) -> Self {
        let demo = Controller::from_config(&config);
        let anim = demo.state().animation();
        let tween = Tween::start(&demo.render(), 0.0);
        Self {
            speed_ms: anim.speed_ms(),
            easing: anim.easing(),
            animations: anim.enabled(),
            tween,
            epoch: Instant::now(),
            demo,
            config,
            is_saving: false,
            status_message: String::new(),
            error_message: String::new(),
            save_receiver: None,
        }
    }

    fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    fn apply(&mut self, action: Action) {
        let now = self.now_ms();
        self.tween.before(&self.demo.render(), &action, now);
        self.demo.dispatch(action);

        let anim = self.demo.state().animation();
        self.speed_ms = anim.speed_ms();
        self.easing = anim.easing();
        self.animations = anim.enabled();
    }

    fn start_save(&mut self) {
        let kind = self.demo.state().current();
        let dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&dir)
            .set_file_name(format!("{}.png", kind.name().to_lowercase()))
            .add_filter("PNG image", &["png"])
            .add_filter("SVG image", &["svg"])
            .save_file()
        else {
            return;
        };

        self.is_saving = true;
        self.error_message.clear();
        self.status_message = format!("Saving {}...", path.display());

        let (sender, receiver) = mpsc::channel();
        self.save_receiver = Some(receiver);

        let cmd = self.demo.render();
        let options = PlotOptions {
            title: Some(kind.label().to_string()),
            font_path: self.config.font_path.clone(),
            ..PlotOptions::default()
        };
        thread::spawn(move || {
            let result = match viz::plot_command(&cmd, &path, SAVE_WIDTH, SAVE_HEIGHT, &options) {
                Ok(()) => OperationResult::Success(format!("Saved chart to {}", path.display())),
                Err(err) => OperationResult::Error(format!("Failed to save chart: {err}")),
            };
            let _ = sender.send(result);
        });
    }

    fn check_save_result(&mut self) {
        if let Some(receiver) = &self.save_receiver
            && let Ok(result) = receiver.try_recv()
        {
            self.is_saving = false;
            self.save_receiver = None;

            match result {
                OperationResult::Success(message) => {
                    self.status_message = message;
                    self.error_message.clear();
                }
                OperationResult::Error(error) => {
                    self.error_message = error;
                    self.status_message.clear();
                }
            }
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.heading("Chart Types");
        ui.add_space(5.0);

        let current = self.demo.state().current();
        for kind in ChartKind::ALL {
            let button = egui::Button::new(kind.label())
                .selected(kind == current)
                .min_size(egui::vec2(180.0, 28.0));
            if ui.add(button).clicked() {
                self.apply(Action::SelectChart(kind));
            }
        }

        ui.add_space(10.0);
        ui.separator();
        ui.heading("Animation");

        if ui
            .checkbox(&mut self.animations, "Enable Animations")
            .changed()
        {
            self.apply(Action::ToggleAnimations(self.animations));
        }

        ui.label(format!("Animation Speed: {} ms", self.speed_ms));
        let slider = egui::Slider::new(&mut self.speed_ms, MIN_SPEED_MS..=MAX_SPEED_MS)
            .show_value(false);
        if ui.add(slider).changed() {
            self.apply(Action::SetSpeed(self.speed_ms));
        }

        let mut picked = None;
        egui::ComboBox::from_label("Easing")
            .selected_text(self.easing.name())
            .show_ui(ui, |ui| {
                for easing in Easing::ALL {
                    if ui
                        .selectable_value(&mut self.easing, easing, easing.name())
                        .changed()
                    {
                        picked = Some(easing);
                    }
                }
            });
        if let Some(easing) = picked {
            self.apply(Action::SetEasing(easing.name().to_string()));
        }

        ui.add_space(10.0);
        ui.separator();

        if ui.button("Refresh Data").clicked() {
            self.apply(Action::Refresh);
        }
        if ui.button("Clear Chart").clicked() {
            self.apply(Action::Clear);
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!self.is_saving, egui::Button::new("Save chart…"))
                .clicked()
            {
                self.start_save();
            }
            if self.is_saving {
                ui.spinner();
            }
        });

        ui.add_space(10.0);

        // Status messages
        if !self.status_message.is_empty() {
            ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
        }
        if !self.error_message.is_empty() {
            ui.colored_label(egui::Color32::RED, &self.error_message);
        }
    }
}

impl eframe::App for ChartDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_save_result();

        egui::SidePanel::left("controls")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| self.controls(ui));

        let cmd = self.demo.render();
        let now = self.now_ms();
        let frame = self.tween.displayed(&cmd, now);
        if self.tween.is_running(&cmd, now) || self.is_saving {
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(cmd.kind.label());
            match frame.surface {
                Surface::Cartesian => cartesian_plot(ui, &frame),
                Surface::Pie => pie_chart(ui, &frame),
                Surface::GeoMap => geo_tiles(ui, &frame),
            }
        });
    }
}

fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn indexed(values: &[f64]) -> Vec<[f64; 2]> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect()
}

fn cartesian_plot(ui: &mut egui::Ui, frame: &SurfaceFrame) {
    let bar_series = frame
        .series
        .iter()
        .filter(|s| matches!(s.shape, SeriesShape::Row | SeriesShape::Column))
        .count()
        .max(1);
    let bar_w = 0.8 / bar_series as f64;

    // Running sums for stacked areas, drawn top band first so lower bands stay visible.
    let mut stacked: Vec<(String, egui::Color32, Vec<f64>)> = Vec::new();
    let mut base: Vec<f64> = Vec::new();

    Plot::new("cartesian")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut bar_slot = 0usize;
            for s in &frame.series {
                let color = color32(s.style.primary_color().with_alpha(255));
                match (&s.shape, &s.values) {
                    (SeriesShape::Line, SeriesValues::Values(v)) => {
                        let width = s.style.stroke.map_or(2.0, |st| st.width as f32);
                        plot_ui.line(Line::new(indexed(v)).name(&s.name).color(color).width(width));
                        if s.style.marker_size > 0 {
                            plot_ui.points(
                                Points::new(indexed(v))
                                    .name(&s.name)
                                    .color(color)
                                    .radius(s.style.marker_size as f32 / 2.0),
                            );
                        }
                    }
                    (SeriesShape::Row | SeriesShape::Column, SeriesValues::Values(v)) => {
                        let offset = (bar_slot as f64 + 0.5) * bar_w - 0.4;
                        bar_slot += 1;
                        let bars = v
                            .iter()
                            .enumerate()
                            .map(|(i, y)| Bar::new(i as f64 + offset, *y).width(bar_w * 0.9))
                            .collect();
                        let mut chart = BarChart::new(bars).name(&s.name).color(color);
                        if s.shape == SeriesShape::Row {
                            chart = chart.horizontal();
                        }
                        plot_ui.bar_chart(chart);
                    }
                    (SeriesShape::StackedArea, SeriesValues::Values(v)) => {
                        if base.len() < v.len() {
                            base.resize(v.len(), 0.0);
                        }
                        for (b, y) in base.iter_mut().zip(v) {
                            *b += y.max(0.0);
                        }
                        stacked.push((s.name.clone(), color, base.clone()));
                    }
                    (SeriesShape::Scatter, SeriesValues::Points(p)) => {
                        let pts: PlotPoints = p.iter().map(|p| [p.x, p.y]).collect();
                        plot_ui.points(
                            Points::new(pts)
                                .name(&s.name)
                                .color(color)
                                .radius(s.style.marker_size.max(4) as f32 / 2.0),
                        );
                    }
                    _ => {}
                }
            }
            for (name, color, tops) in stacked.iter().rev() {
                plot_ui.line(Line::new(indexed(tops)).name(name).color(*color).fill(0.0_f32));
            }
        });
}

fn pie_chart(ui: &mut egui::Ui, frame: &SurfaceFrame) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;
    let radius = (rect.width().min(rect.height()) * 0.4) as f64;
    let center = rect.center();

    let slices: Vec<(&str, egui::Color32, f64)> = frame
        .series
        .iter()
        .map(|s| {
            (
                s.name.as_str(),
                color32(s.style.primary_color().with_alpha(255)),
                s.values.magnitudes().iter().sum::<f64>().max(0.0),
            )
        })
        .collect();
    let total: f64 = slices.iter().map(|(_, _, v)| v).sum();
    if total <= 0.0 {
        return;
    }

    let at = |angle: f64, r: f64| {
        egui::pos2(
            center.x + (r * angle.cos()) as f32,
            center.y + (r * angle.sin()) as f32,
        )
    };

    let mut angle = -TAU / 4.0;
    for (name, color, value) in slices {
        let sweep = TAU * value / total;
        let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        for i in 0..steps {
            let a0 = angle + sweep * i as f64 / steps as f64;
            let a1 = angle + sweep * (i + 1) as f64 / steps as f64;
            painter.add(egui::Shape::convex_polygon(
                vec![center, at(a0, radius), at(a1, radius)],
                color,
                egui::Stroke::NONE,
            ));
        }
        if value > 0.0 {
            let mid = angle + sweep / 2.0;
            painter.text(
                at(mid, radius * 1.15),
                egui::Align2::CENTER_CENTER,
                format!("{name}: {:.0}%", value / total * 100.0),
                egui::FontId::proportional(14.0),
                ui.visuals().text_color(),
            );
        }
        angle += sweep;
    }
}

fn geo_tiles(ui: &mut egui::Ui, frame: &SurfaceFrame) {
    let size = ui.available_size();
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let rect = response.rect;

    let regions = frame.series.iter().find_map(|s| match &s.values {
        SeriesValues::Regions(r) => Some(r),
        _ => None,
    });
    let bounds = heat_bounds(regions.into_iter().flatten().map(|g| g.value));

    let rows = GEO_REGIONS.len().div_ceil(GEO_COLUMNS);
    let tile_w = rect.width() / GEO_COLUMNS as f32;
    let tile_h = rect.height() / rows as f32;
    let stroke = egui::Stroke::new(1.0, color32(GEO_LAND_STROKE.color));

    for (i, (code, _)) in GEO_REGIONS.iter().enumerate() {
        let value = regions.and_then(|r| r.iter().find(|g| g.region == *code).map(|g| g.value));
        let fill = match value {
            Some(v) => heat_color(heat_share(v, bounds)),
            None => GEO_LAND_FILL,
        };
        let min = egui::pos2(
            rect.left() + (i % GEO_COLUMNS) as f32 * tile_w,
            rect.top() + (i / GEO_COLUMNS) as f32 * tile_h,
        );
        let tile = egui::Rect::from_min_size(min, egui::vec2(tile_w, tile_h)).shrink(3.0);
        painter.rect(tile, 4.0_f32, color32(fill), stroke);

        let ink = if value.is_some_and(|v| heat_share(v, bounds) > HEAT_INK_THRESHOLD) {
            egui::Color32::WHITE
        } else {
            egui::Color32::BLACK
        };
        let label = match value {
            Some(v) => format!("{}\n{v:.0}", code.to_uppercase()),
            None => code.to_uppercase(),
        };
        painter.text(
            tile.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(14.0),
            ink,
        );
    }
}
