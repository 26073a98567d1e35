use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use plotlayout::storage::{self, ChartFile};
use plotlayout::viz::{Chart, DEFAULT_OUTPUT_PATH, HeuristicMetrics, LegendPosition, TextMetrics};
use plotlayout::viz_plotters_adapter::{FontOrEstimate, ensure_fonts_registered, register_font_file};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "plotlayout",
    version,
    about = "Lay out and render chart frames: graph area, legend, title, axis labels"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the layout of a chart and write the image (and optionally the geometry).
    Render(RenderArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Metrics {
    /// Measure glyphs with the registered font (--font-file or a system sans face),
    /// estimating when the family is unavailable.
    Font,
    /// Estimate text as 0.6em per character. SVG output then needs no font file.
    Estimate,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Legend {
    Top,
    Bottom,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// JSON chart description ({"config": {...}, "datasets": [...]}).
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Datasets as CSV rows `label,v1,v2,...` (replaces datasets from --input).
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Image path (.svg or .png).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    out: PathBuf,
    /// Canvas width in pixels (overrides the description).
    #[arg(long)]
    width: Option<u32>,
    /// Canvas height in pixels (overrides the description).
    #[arg(long)]
    height: Option<u32>,
    /// Chart title.
    #[arg(long)]
    title: Option<String>,
    /// Locale tag for the thousands separator (e.g., en, de, fr).
    #[arg(long)]
    locale: Option<String>,
    /// Legend placement.
    #[arg(long, value_enum)]
    legend: Option<Legend>,
    /// TTF/OTF file registered as the chart's font family.
    #[arg(long)]
    font_file: Option<PathBuf>,
    /// How text is measured.
    #[arg(long, value_enum, default_value_t = Metrics::Font)]
    metrics: Metrics,
    /// Write the computed geometry as JSON to this path.
    #[arg(long)]
    layout: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let ChartFile {
        mut config,
        mut datasets,
    } = match &args.input {
        Some(path) => storage::load_chart(path)?,
        None => ChartFile::default(),
    };
    if let Some(path) = &args.csv {
        datasets = storage::load_datasets_csv(path)?;
    }
    if let Some(w) = args.width {
        config.columns = w;
    }
    if let Some(h) = args.height {
        config.rows = h;
    }
    if let Some(title) = args.title {
        config.title = Some(title);
    }
    if let Some(locale) = args.locale {
        config.locale = Some(locale);
    }
    if let Some(legend) = args.legend {
        config.legend_position = match legend {
            Legend::Top => LegendPosition::Top,
            Legend::Bottom => LegendPosition::Bottom,
        };
    }
    if let Some(font) = &args.font_file {
        register_font_file(&config.font, font)?;
        if let Some(title_font) = &config.title_font {
            register_font_file(title_font, font)?;
        }
    }

    let chart = Chart::new(config).with_datasets(datasets);
    let font_metrics = FontOrEstimate::default();
    let metrics: &dyn TextMetrics = match args.metrics {
        Metrics::Font => {
            ensure_fonts_registered();
            &font_metrics
        }
        Metrics::Estimate => &HeuristicMetrics,
    };
    let frame = chart.write_with(&args.out, metrics)?;
    eprintln!("Wrote chart to {}", args.out.display());

    if let Some(rect) = frame.rect {
        eprintln!(
            "Graph area: left={:.1} top={:.1} width={:.1} height={:.1}",
            rect.left, rect.top, rect.width, rect.height
        );
    }
    if let Some(path) = &args.layout {
        storage::save_frame_json(&frame, path)?;
        eprintln!("Saved layout to {}", path.display());
    }
    Ok(())
}
