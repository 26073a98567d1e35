//! Title and axis-label paint commands. Positions come straight from the
//! computed layout; nothing here changes geometry.

use super::layout::Layout;
use super::types::{GraphRect, LABEL_MARGIN, PaintCommand, Rotation, TextAnchor};
use crate::config::ChartConfig;

/// Title centered over the canvas, one command per line. The first line's
/// top edge sits at the top margin and each line takes an equal share of the
/// reserved title height.
pub fn title_commands(cfg: &ChartConfig, layout: &Layout) -> Vec<PaintCommand> {
    let Some(title) = cfg.visible_title() else {
        return Vec::new();
    };
    let lines: Vec<&str> = title.lines().collect();
    let line_height = layout.title_caps_height / lines.len().max(1) as f64;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| PaintCommand::Text {
            text: line.to_string(),
            x: cfg.raw_columns() / 2.0,
            y: cfg.margins.top + i as f64 * line_height,
            font: cfg.title_font_spec(),
            color: cfg.font_color,
            bold: cfg.bold_title,
            rotation: Rotation::None,
            anchor: TextAnchor::TOP_CENTER,
        })
        .collect()
}

/// X label under the graph, Y label rotated along the left margin.
pub fn axis_label_commands(
    cfg: &ChartConfig,
    layout: &Layout,
    rect: &GraphRect,
) -> Vec<PaintCommand> {
    let mut out = Vec::new();

    if let Some(label) = &cfg.x_axis_label {
        out.push(PaintCommand::Text {
            text: label.clone(),
            x: cfg.raw_columns() / 2.0,
            y: rect.bottom + LABEL_MARGIN * 2.0 + layout.marker_caps_height,
            font: cfg.marker_font(),
            color: cfg.font_color,
            bold: false,
            rotation: Rotation::None,
            anchor: TextAnchor::TOP_CENTER,
        });
    }

    if let Some(label) = &cfg.y_axis_label {
        out.push(PaintCommand::Text {
            text: label.clone(),
            x: cfg.margins.left + layout.marker_caps_height / 2.0,
            y: cfg.raw_rows() / 2.0,
            font: cfg.marker_font(),
            color: cfg.font_color,
            bold: false,
            rotation: Rotation::Ccw90,
            anchor: TextAnchor::CENTER,
        });
    }

    out
}
