//! Public types and constants for the visualization module.

use crate::models::Rgb8;
use serde::{Deserialize, Serialize};

/// Gap between a label and whatever it labels, in pixels.
pub const LABEL_MARGIN: f64 = 10.0;
/// Default inset on each side of the canvas.
pub const DEFAULT_MARGIN: f64 = 20.0;
/// Default gap below the title.
pub const DEFAULT_TITLE_MARGIN: f64 = 20.0;
/// Default gap below each legend line.
pub const DEFAULT_LEGEND_MARGIN: f64 = 20.0;
/// Default edge length of the legend color swatch.
pub const DEFAULT_LEGEND_BOX_SIZE: f64 = 20.0;
/// Legend lines may use at most this fraction of the canvas width.
pub const LEGEND_WIDTH_FRACTION: f64 = 0.9;
/// Horizontal room per legend entry beyond its text, in swatch widths.
pub const LEGEND_ENTRY_PADDING: f64 = 2.7;
/// Offset of the legend text from the swatch's left edge, in swatch widths.
pub const LEGEND_TEXT_OFFSET: f64 = 1.7;
/// Slack applied to explicit left labels to cover proportional-font variance.
pub const LEFT_LABEL_SLACK: f64 = 1.25;

/// Where the legend goes relative to the graph area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    /// Between the title and the graph area (space is reserved above the graph).
    #[default]
    Top,
    /// Below the graph area; no vertical space is reserved for it up front.
    Bottom,
}

/// A font family at a pixel size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size: f64,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

/// Rendered extent of a string.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TextExtent {
    pub width: f64,
    pub height: f64,
}

/// The plotting area in canvas pixels (top-left origin).
///
/// `width == right - left` and `height == bottom - top` hold after every
/// mutation. Negative sizes are possible with extreme margins and are not
/// corrected.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl GraphRect {
    pub fn from_edges(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Move the top edge down by `amount`, shrinking the height.
    pub fn push_top_down(&mut self, amount: f64) {
        self.top += amount;
        self.height = self.bottom - self.top;
    }

    pub fn is_degenerate(&self) -> bool {
        self.width < 0.0 || self.height < 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HAnchor {
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VAnchor {
    Top,
    Center,
}

/// Which point of the text box sits at the command's `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAnchor {
    pub h: HAnchor,
    pub v: VAnchor,
}

impl TextAnchor {
    pub const TOP_CENTER: TextAnchor = TextAnchor {
        h: HAnchor::Center,
        v: VAnchor::Top,
    };
    pub const CENTER: TextAnchor = TextAnchor {
        h: HAnchor::Center,
        v: VAnchor::Center,
    };
    pub const LEFT_CENTER: TextAnchor = TextAnchor {
        h: HAnchor::Left,
        v: VAnchor::Center,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    None,
    /// 90 degrees counter-clockwise; text reads bottom to top.
    Ccw90,
}

/// A single immutable paint operation in canvas pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaintCommand {
    Text {
        text: String,
        x: f64,
        y: f64,
        font: FontSpec,
        color: Rgb8,
        bold: bool,
        rotation: Rotation,
        anchor: TextAnchor,
    },
    FillRect {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
        color: Rgb8,
    },
}

impl PaintCommand {
    /// The text of a `Text` command.
    pub fn text(&self) -> Option<&str> {
        match self {
            PaintCommand::Text { text, .. } => Some(text),
            PaintCommand::FillRect { .. } => None,
        }
    }
}
