//! Greedy row-wrapping layout for legend swatches.

use serde::{Deserialize, Serialize};

/// Sizing rules for one legend item (swatch + label) and its rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendMetrics {
    pub swatch_size_px: f64,
    /// Horizontal offset from the swatch's left edge to the label.
    pub label_offset_px: f64,
    pub char_width_px: f64,
    pub label_padding_px: f64,
    /// Cap applied to `chars * char_width + label_padding`.
    pub max_label_width_px: f64,
    pub row_height_px: f64,
    pub bottom_padding_px: f64,
    /// Distance from the chart's top margin to the first row's text baseline.
    pub first_baseline_px: f64,
}

impl Default for LegendMetrics {
    fn default() -> Self {
        Self {
            swatch_size_px: 10.0,
            label_offset_px: 14.0,
            char_width_px: 7.0,
            label_padding_px: 30.0,
            max_label_width_px: 220.0,
            row_height_px: 16.0,
            bottom_padding_px: 10.0,
            first_baseline_px: 14.0,
        }
    }
}

impl LegendMetrics {
    /// Estimated width reserved for an item with `label`.
    #[must_use]
    pub fn item_width(self, label: &str) -> f64 {
        let text = label.chars().count() as f64 * self.char_width_px + self.label_padding_px;
        self.label_offset_px + text.min(self.max_label_width_px)
    }
}

/// Position of one legend item: `x` in pixels, `row` counted from 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendItemPlacement {
    pub x: f64,
    pub row: usize,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendLayout {
    pub items: Vec<LegendItemPlacement>,
    pub rows: usize,
    pub height: f64,
}

impl LegendLayout {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            rows: 0,
            height: 0.0,
        }
    }
}

/// Places `labels` left to right inside `[x0, x1]`, wrapping to a new row when the
/// next item would cross `x1`.
///
/// An item never wraps while it is the first on its row, so no row is left empty;
/// its reserved width is clamped to the available width instead. Total height is
/// `rows * row_height + bottom_padding`, or 0 with no labels.
#[must_use]
pub fn layout_legend<S: AsRef<str>>(
    labels: &[S],
    x0: f64,
    x1: f64,
    metrics: LegendMetrics,
) -> LegendLayout {
    if labels.is_empty() {
        return LegendLayout::empty();
    }

    let available = (x1 - x0).max(0.0);
    let mut items = Vec::with_capacity(labels.len());
    let mut cursor = x0;
    let mut row = 0;

    for label in labels {
        let width = metrics.item_width(label.as_ref()).min(available);
        if cursor > x0 && cursor + width > x1 {
            row += 1;
            cursor = x0;
        }
        items.push(LegendItemPlacement {
            x: cursor,
            row,
            width,
        });
        cursor += width;
    }

    let rows = row + 1;
    LegendLayout {
        items,
        rows,
        height: rows as f64 * metrics.row_height_px + metrics.bottom_padding_px,
    }
}
