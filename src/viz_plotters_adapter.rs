//! Adapter between the layout core and the plotters crate.
//!
//! The core only produces [`PaintCommand`]s and asks a [`TextMetrics`] for
//! sizes. This module supplies both halves on top of plotters:
//!
//! ```ignore
//!     use plotters::prelude::*;
//!     use plotlayout::viz_plotters_adapter::{PlottersMetrics, paint};
//!
//!     let frame = chart.render(&PlottersMetrics)?;
//!     let root = SVGBackend::new("chart.svg", (800, 600)).into_drawing_area();
//!     paint(&root, chart.config.background_color, &frame.commands)?;
//! ```
//!
//! Plotters is built with the `ab_glyph` text path, which does not discover OS
//! fonts: register one with [`register_font_file`] before measuring, or let
//! [`ensure_fonts_registered`] pick up a system sans face.

use anyhow::Result;
use log::{debug, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontStyle, FontTransform};
use std::cell::Cell;
use std::fmt::Debug;
use std::path::Path;
use std::sync::Once;

use crate::error::ChartError;
use crate::models::Rgb8;
use crate::viz::text::{HeuristicMetrics, TextMetrics};
use crate::viz::types::{FontSpec, HAnchor, PaintCommand, Rotation, TextExtent, VAnchor};

pub fn rgb_color(c: Rgb8) -> RGBColor {
    RGBColor(c.r, c.g, c.b)
}

fn backend_err<E: Debug>(e: E) -> anyhow::Error {
    ChartError::Backend(format!("{:?}", e)).into()
}

fn font_desc(font: &FontSpec, bold: bool) -> FontDesc<'_> {
    let style = if bold {
        FontStyle::Bold
    } else {
        FontStyle::Normal
    };
    (font.family.as_str(), font.size, style).into_font()
}

/// Register a TTF/OTF file under `family` for both normal and bold text.
///
/// The font bytes live for the rest of the process.
pub fn register_font_file<P: AsRef<Path>>(family: &str, path: P) -> Result<()> {
    let bytes = std::fs::read(path.as_ref()).map_err(ChartError::from)?;
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    for style in [FontStyle::Normal, FontStyle::Bold] {
        plotters::style::register_font(family, style, bytes).map_err(|_| {
            ChartError::Font(format!(
                "cannot load {} as {family}: not a TrueType/OpenType font",
                path.as_ref().display()
            ))
        })?;
    }
    Ok(())
}

/// Where a default "sans-serif" face is commonly installed.
const SYSTEM_SANS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
];

static INIT_FONTS: Once = Once::new();

/// Register the first system sans face found as "sans-serif", unless that
/// family is already registered. Only runs once per process.
pub fn ensure_fonts_registered() {
    INIT_FONTS.call_once(|| {
        if PlottersMetrics
            .measure("X", &FontSpec::new("sans-serif", 12.0))
            .is_ok()
        {
            return;
        }
        for path in SYSTEM_SANS {
            if !Path::new(path).is_file() {
                continue;
            }
            match register_font_file("sans-serif", path) {
                Ok(()) => {
                    debug!("registered {path} as sans-serif");
                    return;
                }
                Err(e) => warn!("skipping {path}: {e:#}"),
            }
        }
        debug!("no system sans-serif font found");
    });
}

/// Glyph-accurate metrics from the fonts plotters can see.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlottersMetrics;

impl TextMetrics for PlottersMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        let (w, h) = font_desc(font, false).box_size(text).map_err(|e| {
            ChartError::Font(format!(
                "cannot measure {text:?} in {} {}px: {:?}",
                font.family, font.size, e
            ))
        })?;
        Ok(TextExtent {
            width: w as f64,
            height: h as f64,
        })
    }
}

/// Glyph metrics for registered families; families plotters cannot load are
/// estimated with [`HeuristicMetrics`] instead of failing the render.
#[derive(Debug, Default)]
pub struct FontOrEstimate {
    warned: Cell<bool>,
}

impl TextMetrics for FontOrEstimate {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        match PlottersMetrics.measure(text, font) {
            Ok(extent) => Ok(extent),
            Err(e) if matches!(e.downcast_ref::<ChartError>(), Some(ChartError::Font(_))) => {
                if !self.warned.replace(true) {
                    warn!("{e:#}; estimating text sizes instead");
                }
                HeuristicMetrics.measure(text, font)
            }
            Err(e) => Err(e),
        }
    }
}

fn to_px(v: f64) -> i32 {
    v.round() as i32
}

fn draw_command<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    command: &PaintCommand,
) -> Result<()> {
    match command {
        PaintCommand::Text {
            text,
            x,
            y,
            font,
            color,
            bold,
            rotation,
            anchor,
        } => {
            let transform = match rotation {
                Rotation::None => FontTransform::None,
                Rotation::Ccw90 => FontTransform::Rotate270,
            };
            let h = match anchor.h {
                HAnchor::Left => HPos::Left,
                HAnchor::Center => HPos::Center,
            };
            let v = match anchor.v {
                VAnchor::Top => VPos::Top,
                VAnchor::Center => VPos::Center,
            };
            let rgb = rgb_color(*color);
            let style = font_desc(font, *bold)
                .transform(transform)
                .color(&rgb)
                .pos(Pos::new(h, v));
            area.draw(&Text::new(text.as_str(), (to_px(*x), to_px(*y)), style))
                .map_err(backend_err)?;
        }
        PaintCommand::FillRect {
            left,
            top,
            right,
            bottom,
            color,
        } => {
            area.draw(&Rectangle::new(
                [(to_px(*left), to_px(*top)), (to_px(*right), to_px(*bottom))],
                rgb_color(*color).filled(),
            ))
            .map_err(backend_err)?;
        }
    }
    Ok(())
}

/// Fill the background, execute `commands` in order, and present the result.
pub fn paint<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    background: Rgb8,
    commands: &[PaintCommand],
) -> Result<()> {
    area.fill(&rgb_color(background)).map_err(backend_err)?;
    for command in commands {
        draw_command(area, command)?;
    }
    area.present().map_err(backend_err)?;
    Ok(())
}
