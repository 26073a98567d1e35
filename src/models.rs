use crate::error::ChartError;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color. Serialized as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ChartError::Config(format!("expected #rrggbb color, got {s:?}")));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ChartError::Config(format!("invalid hex digits in color {s:?}")))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb8 {
    type Error = ChartError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb8::from_hex(&value)
    }
}

impl From<Rgb8> for String {
    fn from(c: Rgb8) -> Self {
        c.to_hex()
    }
}

/// One plotted series. Missing observations are `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
    /// Explicit series color; palette order is used when absent.
    #[serde(default)]
    pub color: Option<Rgb8>,
}

impl Dataset {
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = Some(color);
        self
    }

    /// Present (non-missing, finite) values.
    pub fn present_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(|v| *v).filter(|v| v.is_finite())
    }
}

/// A legend item: dataset label and the color its swatch is painted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb8,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: Rgb8) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}
