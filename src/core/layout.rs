use serde::{Deserialize, Serialize};

use crate::core::Band;

/// Outer margins around the plotting area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 18.0,
            bottom: 56.0,
        }
    }
}

/// Fixed-width text metrics used to size the value-axis margin.
///
/// The axis font is monospaced, so label width is estimated as
/// `char_width_px * chars` rather than measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelMetrics {
    pub padding_px: f64,
    pub char_width_px: f64,
    pub extra_padding_px: f64,
}

impl Default for AxisLabelMetrics {
    fn default() -> Self {
        Self {
            padding_px: 14.0,
            char_width_px: 7.0,
            extra_padding_px: 10.0,
        }
    }
}

/// Resolved plotting rectangle: `x0..x1` horizontally, `y_top..y_bottom` vertically.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x0: f64,
    pub x1: f64,
    pub y_top: f64,
    pub y_bottom: f64,
}

impl PlotArea {
    #[must_use]
    pub fn width(self) -> f64 {
        (self.x1 - self.x0).max(0.0)
    }

    #[must_use]
    pub fn height(self) -> f64 {
        (self.y_bottom - self.y_top).max(0.0)
    }
}

/// Divides `[x0, x1]` into `count` equal slots and returns the centered band for `index`.
///
/// The drawn width is `slot - gap`, floored at 0. A zero `count` is treated as one
/// slot, and an inverted or non-finite span collapses to zero width at `x0`.
#[must_use]
pub fn band(index: usize, count: usize, x0: f64, x1: f64, gap: f64) -> Band {
    let span = if (x1 - x0).is_finite() {
        (x1 - x0).max(0.0)
    } else {
        0.0
    };
    let gap = if gap.is_finite() { gap.max(0.0) } else { 0.0 };
    let slot = span / count.max(1) as f64;
    let inner = (slot - gap).max(0.0);
    Band {
        x: x0 + index as f64 * slot + (slot - inner) * 0.5,
        width: inner,
    }
}

/// Left margin wide enough for the longest value-axis label.
///
/// `max(base, padding + char_width * longest + extra)`, with label length counted
/// in characters.
#[must_use]
pub fn left_margin_for_labels<'a, I>(base_px: f64, labels: I, metrics: AxisLabelMetrics) -> f64
where
    I: IntoIterator<Item = &'a str>,
{
    let longest = labels
        .into_iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let required =
        metrics.padding_px + metrics.char_width_px * longest as f64 + metrics.extra_padding_px;
    base_px.max(required)
}

/// Whether the x-axis label for row `index` is drawn.
///
/// Every label is shown up to `max_unthinned` rows; denser sets keep even indices only.
#[must_use]
pub fn shows_x_label(index: usize, count: usize, max_unthinned: usize) -> bool {
    count <= max_unthinned || index % 2 == 0
}
