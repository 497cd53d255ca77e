//! chart_demo
//!
//! The state machine behind a chart-switching desktop demo. Pairs with the `chart-demo` CLI and
//! the `chart-demo-gui` desktop app.
//!
//! ### Features
//! - Seven chart presentations (line, bar, column, area, scatter, pie, geo-map) on three
//!   mutually exclusive surfaces
//! - Immutable [`DemoState`] driven by a single [`reduce`] over user [`Action`]s
//! - Animation speed, easing and enable toggle, projected into a [`RenderCommand`]
//! - Render the visible chart to SVG/PNG, export its series as CSV or JSON
//!
//! ### Example
//! ```no_run
//! use chart_demo::{ChartKind, Controller, viz};
//!
//! let mut demo = Controller::seeded(ChartKind::Line, 42);
//! demo.select_chart(ChartKind::Pie);
//! demo.set_animation_speed(5000); // clamped to 3000
//! let cmd = demo.render();
//! chart_demo::storage::save_json(cmd.visible_frame(), "pie.json")?;
//! viz::plot_command(&cmd, "pie.svg", 800, 600, &viz::PlotOptions::default())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod animation;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod models;
pub mod render;
pub mod sample;
pub mod state;
pub mod storage;
pub mod viz;

pub use animation::{AnimationConfig, Transition};
pub use config::DemoConfig;
pub use controller::Controller;
pub use easing::Easing;
pub use error::DemoError;
pub use models::{ChartKind, GeoRegionValue, SeriesDescriptor, Surface};
pub use render::{RenderCommand, SurfaceFrame, Tween, render};
pub use state::{Action, DemoState, reduce};
