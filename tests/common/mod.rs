//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use anyhow::Result;
use plotlayout::viz::{FontSpec, TextExtent, TextMetrics};
use std::collections::HashMap;

/// Deterministic metrics: every string is `char_width * chars` wide, caps
/// heights are fixed per font size, and individual strings can be pinned to
/// an exact width.
pub struct FixedMetrics {
    pub char_width: f64,
    pub caps: HashMap<u64, f64>,
    pub widths: HashMap<String, f64>,
}

impl FixedMetrics {
    pub fn new(char_width: f64) -> Self {
        Self {
            char_width,
            caps: HashMap::new(),
            widths: HashMap::new(),
        }
    }

    /// Caps height for fonts of `size`.
    pub fn caps(mut self, size: f64, height: f64) -> Self {
        self.caps.insert(size.to_bits(), height);
        self
    }

    /// Exact width for `text` in any font.
    pub fn width_of(mut self, text: &str, width: f64) -> Self {
        self.widths.insert(text.to_string(), width);
        self
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        let width = self
            .widths
            .get(text)
            .copied()
            .unwrap_or(text.chars().count() as f64 * self.char_width);
        let height = self.caps.get(&font.size.to_bits()).copied().unwrap_or(font.size);
        Ok(TextExtent { width, height })
    }
}
