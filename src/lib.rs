//! plotlayout
//!
//! Pixel-space layout for 2D charts: the graph rectangle, a wrapped and
//! centered legend, the title and the axis labels, all computed from measured
//! text and painted through plotters.
//!
//! ### Features
//! - Graph area derived from margins, font caps heights and the widest value label
//! - Legend lines wrapped at 90% of the canvas width, each line centered
//! - Value labels with increment-driven precision and configurable thousands separator
//! - Paint commands as plain values; SVG/PNG output via plotters
//!
//! ### Example
//! ```no_run
//! use plotlayout::{Chart, ChartConfig, Dataset};
//!
//! let mut chart = Chart::new(ChartConfig {
//!     title: Some("Quarterly revenue".into()),
//!     ..ChartConfig::with_size(800, 600)
//! });
//! chart.add_dataset(Dataset::new("North", vec![Some(1200.0), Some(1850.0), Some(1430.0)]));
//! chart.add_dataset(Dataset::new("South", vec![Some(900.0), None, Some(2100.0)]));
//!
//! plotlayout::viz_plotters_adapter::register_font_file("sans-serif", "DejaVuSans.ttf")?;
//! let frame = chart.write("revenue.png")?;
//! println!("graph area: {:?}", frame.rect);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viz;
pub mod viz_plotters_adapter;

pub use config::{ChartConfig, Margins};
pub use error::ChartError;
pub use models::{Dataset, LegendEntry, Rgb8};
pub use viz::{Chart, Frame, RenderStage};
