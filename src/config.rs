//! Chart configuration consumed by the layout engine.
//!
//! Every field has a default, so a JSON description only needs the values it
//! changes:
//!
//! ```
//! let cfg: plotlayout::ChartConfig =
//!     serde_json::from_str(r#"{ "title": "Sales", "legend_position": "bottom" }"#)?;
//! assert_eq!(cfg.columns, 800);
//! # Ok::<(), serde_json::Error>(())
//! ```

use crate::models::Rgb8;
use crate::viz::types::{
    DEFAULT_LEGEND_BOX_SIZE, DEFAULT_LEGEND_MARGIN, DEFAULT_MARGIN, DEFAULT_TITLE_MARGIN,
    FontSpec, LegendPosition,
};
use crate::viz::util::map_locale;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Insets reserved outside the graph area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub fn uniform(m: f64) -> Self {
        Self {
            left: m,
            right: m,
            top: m,
            bottom: m,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(DEFAULT_MARGIN)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Canvas width in pixels.
    pub columns: u32,
    /// Canvas height in pixels.
    pub rows: u32,
    pub margins: Margins,

    /// Font family for markers, legend and axis labels.
    pub font: String,
    /// Font family for the title; `font` when absent.
    pub title_font: Option<String>,
    pub marker_font_size: f64,
    pub title_font_size: f64,
    pub legend_font_size: f64,
    pub font_color: Rgb8,
    pub background_color: Rgb8,

    /// May span several lines; each line reserves one caps height.
    pub title: Option<String>,
    pub hide_title: bool,
    pub bold_title: bool,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,

    /// Column labels keyed by column index.
    pub labels: BTreeMap<usize, String>,
    /// Treat `labels` as labels on the left (value) side.
    pub has_left_labels: bool,
    pub center_labels_over_point: bool,
    pub hide_line_numbers: bool,
    /// Extra height consumed by staggered column labels.
    pub label_stagger_height: f64,

    /// Fixed increment between value-axis markers.
    pub y_axis_increment: Option<f64>,
    pub marker_count: usize,
    pub minimum_value: Option<f64>,
    pub maximum_value: Option<f64>,

    pub legend_position: LegendPosition,
    pub legend_box_size: f64,
    pub title_margin: f64,
    pub legend_margin: f64,

    pub thousands_separator: String,
    /// Locale tag (`en`, `de`, ...) whose grouping separator overrides
    /// `thousands_separator`.
    pub locale: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            columns: 800,
            rows: 600,
            margins: Margins::default(),
            font: "sans-serif".to_string(),
            title_font: None,
            marker_font_size: 21.0,
            title_font_size: 36.0,
            legend_font_size: 20.0,
            font_color: Rgb8::BLACK,
            background_color: Rgb8::WHITE,
            title: None,
            hide_title: false,
            bold_title: true,
            x_axis_label: None,
            y_axis_label: None,
            labels: BTreeMap::new(),
            has_left_labels: false,
            center_labels_over_point: true,
            hide_line_numbers: false,
            label_stagger_height: 0.0,
            y_axis_increment: None,
            marker_count: 4,
            minimum_value: None,
            maximum_value: None,
            legend_position: LegendPosition::Top,
            legend_box_size: DEFAULT_LEGEND_BOX_SIZE,
            title_margin: DEFAULT_TITLE_MARGIN,
            legend_margin: DEFAULT_LEGEND_MARGIN,
            thousands_separator: ",".to_string(),
            locale: None,
        }
    }
}

impl ChartConfig {
    /// Config for a canvas of the given pixel size, other fields defaulted.
    pub fn with_size(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn raw_columns(&self) -> f64 {
        self.columns as f64
    }

    pub fn raw_rows(&self) -> f64 {
        self.rows as f64
    }

    pub fn marker_font(&self) -> FontSpec {
        FontSpec::new(self.font.clone(), self.marker_font_size)
    }

    pub fn legend_font(&self) -> FontSpec {
        FontSpec::new(self.font.clone(), self.legend_font_size)
    }

    pub fn title_font_spec(&self) -> FontSpec {
        let family = self.title_font.as_ref().unwrap_or(&self.font);
        FontSpec::new(family.clone(), self.title_font_size)
    }

    /// The title if it will be drawn.
    pub fn visible_title(&self) -> Option<&str> {
        if self.hide_title {
            None
        } else {
            self.title.as_deref()
        }
    }

    pub fn legend_at_bottom(&self) -> bool {
        self.legend_position == LegendPosition::Bottom
    }

    /// Grouping separator for value labels.
    pub fn separator(&self) -> String {
        match self.locale.as_deref() {
            Some(tag) => map_locale(tag).separator().to_string(),
            None => self.thousands_separator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ChartConfig =
            serde_json::from_str(r#"{ "rows": 400, "margins": { "left": 5 } }"#).unwrap();
        assert_eq!(cfg.rows, 400);
        assert_eq!(cfg.columns, 800);
        assert_eq!(cfg.margins.left, 5.0);
        assert_eq!(cfg.margins.right, DEFAULT_MARGIN);
    }

    #[test]
    fn locale_overrides_separator() {
        let mut cfg = ChartConfig {
            thousands_separator: "'".into(),
            ..ChartConfig::default()
        };
        assert_eq!(cfg.separator(), "'");
        cfg.locale = Some("de".into());
        assert_eq!(cfg.separator(), ".");
    }

    #[test]
    fn title_font_falls_back_to_main_font() {
        let mut cfg = ChartConfig::default();
        assert_eq!(cfg.title_font_spec().family, "sans-serif");
        cfg.title_font = Some("serif".into());
        assert_eq!(cfg.title_font_spec().family, "serif");
        assert_eq!(cfg.title_font_spec().size, 36.0);
    }
}
