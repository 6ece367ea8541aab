use serde::{Deserialize, Serialize};

use crate::core::{AxisLabelMetrics, LegendMetrics, Margins};
use crate::error::{ChartError, ChartResult};

use super::MoneyFormatKind;
use super::validation::validate_charts_config;

/// Layout and formatting constants shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Width used when the host reports a zero-width container.
    pub default_width_px: u32,
    pub bar_chart_height_px: u32,
    pub line_chart_height_px: u32,
    pub margins: Margins,
    pub tick_count: usize,
    pub band_gap_px: f64,
    pub font_size_px: f64,
    /// Horizontal gap between the value-axis labels and the plot.
    pub value_label_offset_px: f64,
    /// Baseline nudge that vertically centers value labels on their gridline.
    pub value_label_baseline_px: f64,
    /// Distance from the plot bottom to the month label baseline.
    pub month_label_offset_px: f64,
    pub axis_labels: AxisLabelMetrics,
    pub legend: LegendMetrics,
    pub axis_line_width_px: f64,
    pub bar_corner_radius_px: f64,
    pub bar_opacity: f64,
    pub legend_swatch_radius_px: f64,
    pub legend_swatch_opacity: f64,
    pub marker_radius_px: f64,
    pub line_stroke_width_px: f64,
    /// Row counts up to this show every month label; denser sets show every other.
    pub max_unthinned_labels: usize,
    pub money_format: MoneyFormatKind,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            default_width_px: 900,
            bar_chart_height_px: 260,
            line_chart_height_px: 240,
            margins: Margins::default(),
            tick_count: 4,
            band_gap_px: 10.0,
            font_size_px: 11.0,
            value_label_offset_px: 10.0,
            value_label_baseline_px: 4.0,
            month_label_offset_px: 30.0,
            axis_labels: AxisLabelMetrics::default(),
            legend: LegendMetrics::default(),
            axis_line_width_px: 1.0,
            bar_corner_radius_px: 8.0,
            bar_opacity: 0.92,
            legend_swatch_radius_px: 3.0,
            legend_swatch_opacity: 0.95,
            marker_radius_px: 3.4,
            line_stroke_width_px: 2.2,
            max_unthinned_labels: 8,
            money_format: MoneyFormatKind::default(),
        }
    }
}

impl ChartsConfig {
    /// Parses a (partial) JSON config over the defaults and validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse charts config: {e}")))?;
        validate_charts_config(config)
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_charts_config(self)
    }

    #[must_use]
    pub fn with_default_width(mut self, width_px: u32) -> Self {
        self.default_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_heights(mut self, bar_chart_px: u32, line_chart_px: u32) -> Self {
        self.bar_chart_height_px = bar_chart_px;
        self.line_chart_height_px = line_chart_px;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_money_format(mut self, kind: MoneyFormatKind) -> Self {
        self.money_format = kind;
        self
    }

    /// Width to lay out against for a container reporting `container_width_px`.
    #[must_use]
    pub fn resolve_width(self, container_width_px: u32) -> u32 {
        if container_width_px == 0 {
            self.default_width_px
        } else {
            container_width_px
        }
    }
}
