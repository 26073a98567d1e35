//! Graph-area geometry.
//!
//! Everything here is a pure function of the configuration and the text
//! measurements: the same inputs always produce the same [`Layout`]. Nothing
//! is drawn; the legend pass may later push the top edge down.

use anyhow::Result;
use log::debug;
use serde::Serialize;

use super::label::LabelFormatter;
use super::text::TextMetrics;
use super::types::{GraphRect, LABEL_MARGIN, LEFT_LABEL_SLACK};
use crate::config::ChartConfig;

/// Data-derived inputs to the layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutInputs {
    /// Value range used to pick label precision.
    pub spread: f64,
    /// Largest value; its label decides the left gutter when no left labels exist.
    pub maximum_value: f64,
    pub column_count: usize,
}

/// Computed geometry plus the measurements later passes reuse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Layout {
    pub rect: GraphRect,
    pub marker_caps_height: f64,
    pub title_caps_height: f64,
    pub legend_caps_height: f64,
    pub longest_left_label_width: f64,
    pub line_number_width: f64,
    pub graph_right_margin: f64,
    pub graph_bottom_margin: f64,
    pub x_axis_label_height: f64,
}

/// The label formatter this configuration implies for the given spread.
pub fn label_formatter(cfg: &ChartConfig, spread: f64) -> LabelFormatter {
    LabelFormatter::new(
        cfg.separator(),
        spread,
        cfg.marker_count,
        cfg.y_axis_increment.is_some(),
    )
}

/// Compute the graph rectangle and margins.
pub fn compute_layout(
    cfg: &ChartConfig,
    inputs: &LayoutInputs,
    metrics: &dyn TextMetrics,
) -> Result<Layout> {
    let marker_font = cfg.marker_font();

    let marker_caps_height = metrics.caps_height(&marker_font)?;
    debug!("marker_caps_height = {marker_caps_height}");

    let title_caps_height = match cfg.visible_title() {
        Some(title) => {
            metrics.caps_height(&cfg.title_font_spec())? * title.lines().count() as f64
        }
        None => 0.0,
    };
    debug!("title_caps_height = {title_caps_height}");

    let legend_caps_height = metrics.caps_height(&cfg.legend_font())?;
    debug!("legend_caps_height = {legend_caps_height}");

    let longest_left_label_width = if cfg.has_left_labels {
        // Longest by character count; ties go to the later label.
        let mut longest: &str = "";
        for label in cfg.labels.values() {
            if label.chars().count() >= longest.chars().count() {
                longest = label.as_str();
            }
        }
        metrics.width(longest, &marker_font)? * LEFT_LABEL_SLACK
    } else {
        let label = label_formatter(cfg, inputs.spread)
            .format(inputs.maximum_value, cfg.y_axis_increment);
        metrics.width(&label, &marker_font)?
    };
    debug!("longest_left_label_width = {longest_left_label_width}");

    let line_number_width = if cfg.hide_line_numbers && !cfg.has_left_labels {
        0.0
    } else {
        longest_left_label_width + LABEL_MARGIN * 2.0
    };

    let y_axis_label_width = if cfg.y_axis_label.is_some() {
        marker_caps_height + LABEL_MARGIN * 2.0
    } else {
        0.0
    };
    let graph_left = cfg.margins.left + line_number_width + y_axis_label_width;
    debug!("graph_left = {graph_left}");

    // Half of the rightmost column label may hang past the last point.
    let last_label = cfg.labels.keys().max().copied().unwrap_or(0);
    let extra_room_for_long_label = if last_label as i64 >= inputs.column_count as i64 - 1
        && cfg.center_labels_over_point
    {
        let text = cfg.labels.get(&last_label).map(String::as_str).unwrap_or("");
        metrics.width(text, &marker_font)? / 2.0
    } else {
        0.0
    };
    let graph_right_margin = cfg.margins.right + extra_room_for_long_label;
    let graph_right = cfg.raw_columns() - graph_right_margin;

    let graph_bottom_margin = cfg.margins.bottom + marker_caps_height + LABEL_MARGIN;

    let graph_top = if cfg.legend_at_bottom() {
        cfg.margins.top
    } else {
        let title_band = if cfg.hide_title {
            cfg.title_margin
        } else {
            title_caps_height + cfg.title_margin
        };
        cfg.margins.top + title_band + legend_caps_height + cfg.legend_margin
    };

    let x_axis_label_height = if cfg.x_axis_label.is_some() {
        marker_caps_height + LABEL_MARGIN
    } else {
        0.0
    };
    let graph_bottom = cfg.raw_rows()
        - graph_bottom_margin
        - x_axis_label_height
        - cfg.label_stagger_height;

    let rect = GraphRect::from_edges(graph_left, graph_right, graph_top, graph_bottom);
    debug!(
        "graph rect: left={} right={} top={} bottom={} width={} height={}",
        rect.left, rect.right, rect.top, rect.bottom, rect.width, rect.height
    );

    Ok(Layout {
        rect,
        marker_caps_height,
        title_caps_height,
        legend_caps_height,
        longest_left_label_width,
        line_number_width,
        graph_right_margin,
        graph_bottom_margin,
        x_axis_label_height,
    })
}
