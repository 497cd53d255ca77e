use anyhow::Result;
use chart_demo::models::SeriesValues;
use chart_demo::viz::{self, LegendMode, PlotOptions};
use chart_demo::{Action, ChartKind, Controller, DemoConfig, Easing, storage};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "chart-demo",
    version,
    about = "Replay chart demo actions, then print, plot or export the result"
)]
struct Cli {
    /// JSON config file (defaults to $CHART_DEMO_CONFIG, then built-in defaults).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start from the configured chart, apply actions in order, and report the final state.
    Run(RunArgs),
    /// Print samples of an easing curve.
    Easing(EasingArgs),
    /// List chart kinds and the surface each one is drawn on.
    Kinds,
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LegendArg {
    Right,
    Bottom,
    None,
}

impl From<LegendArg> for LegendMode {
    fn from(arg: LegendArg) -> Self {
        match arg {
            LegendArg::Right => LegendMode::Right,
            LegendArg::Bottom => LegendMode::Bottom,
            LegendArg::None => LegendMode::Hidden,
        }
    }
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Actions: select:<kind>, refresh, clear, speed:<ms>, easing:<name>, animations:on|off
    actions: Vec<Action>,
    /// Initial chart kind (overrides config).
    #[arg(long)]
    chart: Option<ChartKind>,
    /// RNG seed for reproducible data (overrides config).
    #[arg(long)]
    seed: Option<u64>,
    /// Initial animation speed in ms (overrides config).
    #[arg(long)]
    speed: Option<u32>,
    /// Initial easing name (overrides config).
    #[arg(long)]
    easing: Option<String>,
    /// Start with animations disabled.
    #[arg(long, default_value_t = false)]
    no_animations: bool,
    /// Print the full render command as JSON instead of a summary.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Draw the visible chart at the given path (.svg or .png).
    #[arg(long)]
    plot: Option<PathBuf>,
    /// Save the visible series (format inferred by --format or extension).
    #[arg(long)]
    export: Option<PathBuf>,
    /// Export format (csv or json). If omitted, inferred from --export extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Width of the plot (default 1000).
    #[arg(long, default_value_t = 1000)]
    width: u32,
    /// Height of the plot (default 600).
    #[arg(long, default_value_t = 600)]
    height: u32,
    /// Legend placement.
    #[arg(long, value_enum, default_value_t = LegendArg::Bottom)]
    legend: LegendArg,
    /// Locale for number labels (e.g. en, de).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Chart caption (defaults to the chart kind).
    #[arg(long)]
    title: Option<String>,
}

#[derive(Args, Debug)]
struct EasingArgs {
    /// Easing name, e.g. EaseInOutCubic. Unknown names fall back to Linear.
    name: String,
    /// Number of intervals between t=0 and t=1.
    #[arg(long, default_value_t = 10)]
    steps: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Run(args) => cmd_run(cli.config, args),
        Command::Easing(args) => cmd_easing(args),
        Command::Kinds => {
            for kind in ChartKind::ALL {
                println!("{:<8} {}", kind.name(), kind.surface());
            }
            Ok(())
        }
    }
}

fn cmd_run(config_path: Option<PathBuf>, args: RunArgs) -> Result<()> {
    let mut config = DemoConfig::load(config_path.as_deref())?;
    if let Some(kind) = args.chart {
        config.initial_chart = kind;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(speed) = args.speed {
        config.animation_speed_ms = speed;
    }
    if let Some(easing) = args.easing.clone() {
        config.easing = easing;
    }
    if args.no_animations {
        config.animations_enabled = false;
    }

    let mut demo = Controller::from_config(&config);
    for action in args.actions {
        demo.dispatch(action);
    }
    let cmd = demo.render();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cmd)?);
    } else {
        print_summary(&demo);
    }

    if let Some(path) = args.export.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(cmd.visible_frame(), path)?,
            "json" => storage::save_json(cmd.visible_frame(), path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!(
            "Saved {} series to {}",
            cmd.visible_frame().series.len(),
            path.display()
        );
    }

    if let Some(plot_path) = args.plot.as_ref() {
        let options = PlotOptions {
            title: args.title.clone(),
            legend: args.legend.into(),
            locale: args.locale.clone(),
            font_path: config.font_path.clone(),
        };
        viz::plot_command(&cmd, plot_path, args.width, args.height, &options)?;
        eprintln!("Wrote plot to {}", plot_path.display());
    }

    Ok(())
}

fn print_summary(demo: &Controller) {
    let state = demo.state();
    let anim = state.animation();
    println!(
        "chart={} surface={} speed={}ms effective={}ms easing={}",
        state.current(),
        state.visible_surface(),
        anim.speed_ms(),
        anim.effective_duration_ms(),
        anim.easing()
    );
    for s in state.visible_series() {
        let preview = match &s.values {
            SeriesValues::Values(v) => fmt_list(v.iter().map(|x| format!("{x}"))),
            SeriesValues::Points(p) => fmt_list(p.iter().map(|p| format!("({}, {})", p.x, p.y))),
            SeriesValues::Regions(r) => {
                fmt_list(r.iter().map(|r| format!("{}={}", r.region, r.value)))
            }
        };
        println!("  {:<18} {:?}  n={}  {}", s.name, s.shape, s.values.len(), preview);
    }
}

/// First few entries, then an ellipsis.
fn fmt_list(items: impl Iterator<Item = String>) -> String {
    const SHOWN: usize = 6;
    let all: Vec<String> = items.collect();
    let mut out = all.iter().take(SHOWN).cloned().collect::<Vec<_>>().join(" ");
    if all.len() > SHOWN {
        out.push_str(" …");
    }
    out
}

fn cmd_easing(args: EasingArgs) -> Result<()> {
    let easing = Easing::from_name(&args.name);
    if easing.name() != args.name.trim() {
        eprintln!("unknown easing `{}`, using {}", args.name, easing);
    }
    let steps = args.steps.max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        println!("{:.3}\t{:.4}", t, easing.apply(t));
    }
    Ok(())
}
