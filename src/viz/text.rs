//! Text measurement: the metrics provider trait, a font-free estimator, and a
//! per-render measurement cache.

use anyhow::Result;
use std::cell::RefCell;
use std::collections::HashMap;

use super::types::{FontSpec, TextExtent};

/// Measures rendered strings.
///
/// Implementations must be deterministic for identical inputs; the layout
/// engine relies on that for reproducible geometry.
pub trait TextMetrics {
    /// Width and height of `text` rendered in `font`.
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent>;

    /// Height of capital letters, used as the line height of a font role.
    fn caps_height(&self, font: &FontSpec) -> Result<f64> {
        Ok(self.measure("X", font)?.height)
    }

    /// Rendered width of `text`; empty strings are zero wide without a measurement.
    fn width(&self, text: &str, font: &FontSpec) -> Result<f64> {
        if text.is_empty() {
            return Ok(0.0);
        }
        Ok(self.measure(text, font)?.width)
    }
}

impl<M: TextMetrics + ?Sized> TextMetrics for &M {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        (**self).measure(text, font)
    }

    fn caps_height(&self, font: &FontSpec) -> Result<f64> {
        (**self).caps_height(font)
    }

    fn width(&self, text: &str, font: &FontSpec) -> Result<f64> {
        (**self).width(text, font)
    }
}

/// Heuristic: estimate glyph boxes without any font file.
///
/// Every character is `0.6 em` wide and a line is `1 em` tall.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMetrics;

impl HeuristicMetrics {
    pub const EM_WIDTH: f64 = 0.60;
}

impl TextMetrics for HeuristicMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        Ok(TextExtent {
            width: (longest as f64 * font.size * Self::EM_WIDTH).ceil(),
            height: font.size * lines as f64,
        })
    }
}

type CacheKey = (String, String, u64);

/// Memoizes measurements by (string, family, size) for one render pass.
///
/// Create one per render and drop it afterwards; fonts registered between
/// renders are then picked up.
pub struct MeasureCache<M> {
    inner: M,
    cache: RefCell<HashMap<CacheKey, TextExtent>>,
}

impl<M: TextMetrics> MeasureCache<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Number of distinct measurements taken so far.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }
}

impl<M: TextMetrics> TextMetrics for MeasureCache<M> {
    fn measure(&self, text: &str, font: &FontSpec) -> Result<TextExtent> {
        let key = (text.to_string(), font.family.clone(), font.size.to_bits());
        if let Some(hit) = self.cache.borrow().get(&key) {
            return Ok(*hit);
        }
        let extent = self.inner.measure(text, font)?;
        self.cache.borrow_mut().insert(key, extent);
        Ok(extent)
    }
}
