//! Chart layout and rendering: compute the graph area, wrap the legend, place
//! the title and axis labels, then paint through plotters to **SVG** or **PNG**.
//!
//! - Geometry is computed from measured text, never guessed from constants
//! - Legend entries wrap into centered lines within 90% of the canvas width
//! - Every render step returns immutable [`PaintCommand`]s; nothing draws as a side effect
//! - Value labels use a configurable or locale-derived thousands separator

pub mod annotate;
pub mod label;
pub mod layout;
pub mod legend;
pub mod text;
pub mod types;
pub mod util;

// Re-export types for public API
pub use label::LabelFormatter;
pub use layout::{Layout, LayoutInputs, compute_layout};
pub use legend::{LegendLayout, LegendLine, LegendPlacement, layout_legend, wrap_widths};
pub use text::{HeuristicMetrics, MeasureCache, TextMetrics};
pub use types::{FontSpec, GraphRect, LegendPosition, PaintCommand, TextExtent};

use crate::config::ChartConfig;
use crate::models::{Dataset, LegendEntry};
use crate::stats::{self, Extent, NormalizedDataset};
use crate::viz_plotters_adapter::{FontOrEstimate, ensure_fonts_registered, paint};
use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

/// Where [`Chart::write_default`] puts the image.
pub const DEFAULT_OUTPUT_PATH: &str = "plot.png";

/// Progress of one render pass. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RenderStage {
    NoData,
    Measured,
    Normalized,
    LaidOut,
    LegendDrawn,
    TitleDrawn,
    AxisLabelsDrawn,
}

/// Result of a render pass: final geometry plus the paint commands that draw it.
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub stage: RenderStage,
    pub extent: Option<Extent>,
    pub layout: Option<Layout>,
    pub legend: Option<LegendLayout>,
    /// Final graph area for per-series drawing.
    pub rect: Option<GraphRect>,
    pub normalized: Vec<NormalizedDataset>,
    /// First palette slot for series drawn after the legend.
    pub next_palette_index: usize,
    #[serde(skip)]
    pub commands: Vec<PaintCommand>,
}

impl Frame {
    fn no_data() -> Self {
        Self {
            stage: RenderStage::NoData,
            extent: None,
            layout: None,
            legend: None,
            rect: None,
            normalized: Vec::new(),
            next_palette_index: 0,
            commands: Vec::new(),
        }
    }

    fn advance(&mut self, stage: RenderStage) {
        debug!("render stage: {:?} -> {:?}", self.stage, stage);
        self.stage = stage;
    }
}

/// A chart: configuration plus the datasets it shows.
#[derive(Debug, Clone, Default)]
pub struct Chart {
    pub config: ChartConfig,
    datasets: Vec<Dataset>,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            datasets: Vec::new(),
        }
    }

    pub fn with_datasets(mut self, datasets: Vec<Dataset>) -> Self {
        self.datasets = datasets;
        self
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    /// One entry per dataset, in dataset order. Datasets without a color take
    /// the palette color at their position.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        self.datasets
            .iter()
            .enumerate()
            .map(|(i, d)| LegendEntry::new(d.label.clone(), d.color.unwrap_or(util::office_color(i))))
            .collect()
    }

    /// Run the full pass: spread, normalization, layout, legend, title, axis labels.
    ///
    /// Without data this returns an empty [`RenderStage::NoData`] frame.
    pub fn render(&self, metrics: &dyn TextMetrics) -> Result<Frame> {
        let cfg = &self.config;
        let mut frame = Frame::no_data();

        let Some(extent) = stats::calculate_spread(&self.datasets, cfg) else {
            debug!("no data; nothing to lay out");
            return Ok(frame);
        };
        debug!(
            "extent: min={} max={} spread={}",
            extent.minimum, extent.maximum, extent.spread
        );
        frame.extent = Some(extent);
        frame.advance(RenderStage::Measured);

        frame.normalized = stats::normalize(&self.datasets, &extent);
        frame.advance(RenderStage::Normalized);

        let metrics = MeasureCache::new(metrics);
        let inputs = LayoutInputs {
            spread: extent.spread,
            maximum_value: extent.maximum,
            column_count: stats::column_count(&self.datasets),
        };
        let layout = compute_layout(cfg, &inputs, &metrics)?;
        frame.layout = Some(layout);
        frame.rect = Some(layout.rect);
        frame.advance(RenderStage::LaidOut);

        let legend = layout_legend(&self.legend_entries(), cfg, &layout, &metrics)?;
        frame.rect = Some(legend.rect);
        frame.next_palette_index = legend.next_palette_index;
        frame.commands.extend(legend.commands.iter().cloned());
        frame.legend = Some(legend);
        frame.advance(RenderStage::LegendDrawn);

        frame.commands.extend(annotate::title_commands(cfg, &layout));
        frame.advance(RenderStage::TitleDrawn);

        let rect = frame.rect.unwrap_or(layout.rect);
        frame
            .commands
            .extend(annotate::axis_label_commands(cfg, &layout, &rect));
        frame.advance(RenderStage::AxisLabelsDrawn);

        debug!(
            "render done: {} paint commands, {} distinct measurements",
            frame.commands.len(),
            metrics.len()
        );
        Ok(frame)
    }

    /// Render and write to [`DEFAULT_OUTPUT_PATH`].
    pub fn write_default(&self) -> Result<Frame> {
        self.write(DEFAULT_OUTPUT_PATH)
    }

    /// Render with glyph metrics from plotters and write the image. `.svg`
    /// paths get SVG output, anything else a bitmap. A chart without data
    /// writes a blank canvas.
    ///
    /// Families plotters cannot load are measured with the 0.6 em estimate.
    /// SVG output needs no font; bitmap output fails with
    /// [`ChartError::Backend`](crate::ChartError::Backend) when no face is registered.
    pub fn write<P: AsRef<Path>>(&self, out_path: P) -> Result<Frame> {
        ensure_fonts_registered();
        self.write_with(out_path, &FontOrEstimate::default())
    }

    /// Like [`Chart::write`], measuring text with `metrics`.
    pub fn write_with<P: AsRef<Path>>(
        &self,
        out_path: P,
        metrics: &dyn TextMetrics,
    ) -> Result<Frame> {
        let out_path = out_path.as_ref();
        let path_string = out_path.to_string_lossy().into_owned();
        let frame = self.render(metrics)?;
        let size = (self.config.columns, self.config.rows);
        let background = self.config.background_color;

        if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
            let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
            paint(&root, background, &frame.commands)?;
        } else {
            let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
            paint(&root, background, &frame.commands)?;
        }
        info!("wrote {} ({:?})", out_path.display(), frame.stage);
        Ok(frame)
    }
}
