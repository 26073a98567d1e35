//! Legend layout: wrap entries into centered lines and shrink the graph area
//! by every extra line.

use anyhow::Result;
use log::debug;
use serde::Serialize;

use super::layout::Layout;
use super::text::TextMetrics;
use super::types::{
    GraphRect, LEGEND_ENTRY_PADDING, LEGEND_TEXT_OFFSET, LEGEND_WIDTH_FRACTION, PaintCommand,
    Rotation, TextAnchor,
};
use super::util::center;
use crate::config::ChartConfig;
use crate::models::LegendEntry;

/// Widths of the entries sharing one legend line, in entry order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LegendLine {
    pub widths: Vec<f64>,
}

impl LegendLine {
    pub fn total(&self) -> f64 {
        self.widths.iter().sum()
    }
}

/// Where one entry ended up. `(x, y)` is the swatch's left edge and vertical center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendPlacement {
    pub label: String,
    pub line: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout {
    pub lines: Vec<LegendLine>,
    pub placements: Vec<LegendPlacement>,
    /// Graph area after wrapping; final for the rest of the render.
    pub rect: GraphRect,
    /// Vertical advance between two legend lines.
    pub line_height: f64,
    /// Palette position for whatever is drawn after the legend.
    pub next_palette_index: usize,
    #[serde(skip)]
    pub commands: Vec<PaintCommand>,
}

/// Greedily pack entry widths into lines no wider than `max_line_width`.
///
/// The entry that overflows a line starts the next one. An entry wider than
/// the limit on its own still gets a line to itself.
pub fn wrap_widths(widths: &[f64], max_line_width: f64) -> Vec<LegendLine> {
    let mut lines: Vec<LegendLine> = Vec::new();
    for &w in widths {
        match lines.last_mut() {
            Some(line) if line.total() + w <= max_line_width => line.widths.push(w),
            _ => lines.push(LegendLine { widths: vec![w] }),
        }
    }
    lines
}

/// Vertical center of the first legend line.
pub fn legend_baseline(cfg: &ChartConfig, layout: &Layout) -> f64 {
    if cfg.legend_at_bottom() {
        layout.rect.height + cfg.title_margin
    } else if cfg.hide_title {
        cfg.margins.top + cfg.title_margin
    } else {
        cfg.margins.top + cfg.title_margin + layout.title_caps_height
    }
}

/// Lay out and paint the legend, pushing the graph top down once per wrap.
pub fn layout_legend(
    entries: &[LegendEntry],
    cfg: &ChartConfig,
    layout: &Layout,
    metrics: &dyn TextMetrics,
) -> Result<LegendLayout> {
    let font = cfg.legend_font();
    let square = cfg.legend_box_size;
    let columns = cfg.raw_columns();

    let mut widths = Vec::with_capacity(entries.len());
    for entry in entries {
        widths.push(metrics.width(&entry.label, &font)? + square * LEGEND_ENTRY_PADDING);
    }
    let lines = wrap_widths(&widths, columns * LEGEND_WIDTH_FRACTION);
    debug!(
        "legend: {} entries on {} line(s): {:?}",
        entries.len(),
        lines.len(),
        lines.iter().map(LegendLine::total).collect::<Vec<_>>()
    );

    let line_height = layout.legend_caps_height.max(square) + cfg.legend_margin;
    let mut rect = layout.rect;
    let mut y = legend_baseline(cfg, layout);
    let mut placements = Vec::with_capacity(entries.len());
    let mut commands = Vec::with_capacity(entries.len() * 2);
    let mut remaining = entries.iter();

    for (line_idx, line) in lines.iter().enumerate() {
        let mut x = center(columns, line.total());
        for entry in remaining.by_ref().take(line.widths.len()) {
            commands.push(PaintCommand::Text {
                text: entry.label.clone(),
                x: x + square * LEGEND_TEXT_OFFSET,
                y,
                font: font.clone(),
                color: cfg.font_color,
                bold: false,
                rotation: Rotation::None,
                anchor: TextAnchor::LEFT_CENTER,
            });
            commands.push(PaintCommand::FillRect {
                left: x,
                top: y - square / 2.0,
                right: x + square,
                bottom: y + square / 2.0,
                color: entry.color,
            });
            placements.push(LegendPlacement {
                label: entry.label.clone(),
                line: line_idx,
                x,
                y,
            });
            x += metrics.width(&entry.label, &font)? + square * LEGEND_ENTRY_PADDING;
        }

        if line_idx + 1 < lines.len() {
            y += line_height;
            rect.push_top_down(line_height);
            debug!("legend wrapped: graph_top = {}, graph_height = {}", rect.top, rect.height);
        }
    }

    Ok(LegendLayout {
        lines,
        placements,
        rect,
        line_height,
        next_palette_index: 0,
        commands,
    })
}
