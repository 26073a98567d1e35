//! Error types for chart layout and rendering.

use thiserror::Error;

/// Errors raised while measuring, laying out, or painting a chart.
///
/// Public functions return `anyhow::Result`; these values travel inside it and
/// can be recovered with `downcast_ref::<ChartError>()`.
#[derive(Error, Debug)]
pub enum ChartError {
    /// A font could not be loaded or a string could not be measured.
    #[error("font error: {0}")]
    Font(String),

    /// The drawing backend refused a paint operation or could not present.
    #[error("backend error: {0}")]
    Backend(String),

    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
