use crate::core::{PlotArea, ValueScale, Viewport, compute_ticks, left_margin_for_labels};
use crate::render::{
    GroupPrimitive, LayerKind, LinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartsConfig, MoneyFormat, ThemeConfig};

/// Borrowed inputs shared by both chart renderers for one render pass.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle<'a> {
    pub config: &'a ChartsConfig,
    pub theme: &'a ThemeConfig,
    pub money: &'a MoneyFormat,
}

impl<'a> ChartStyle<'a> {
    #[must_use]
    pub fn new(config: &'a ChartsConfig, theme: &'a ThemeConfig, money: &'a MoneyFormat) -> Self {
        Self {
            config,
            theme,
            money,
        }
    }

    pub(super) fn axis_text(
        &self,
        text: impl Into<String>,
        x: f64,
        y: f64,
        h_align: TextHAlign,
    ) -> TextPrimitive {
        TextPrimitive::new(
            text,
            x,
            y,
            self.config.font_size_px,
            self.theme.muted_text,
            h_align,
        )
        .with_font_family(self.theme.mono_font_family.clone())
    }
}

/// Value axis for one chart: nice ticks plus their formatted labels.
///
/// Values are scaled against the data maximum, so the tallest value reaches the
/// plot top and an overshooting last tick sits above it.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ValueAxis {
    max_value: f64,
    ticks: Vec<f64>,
    labels: Vec<String>,
}

impl ValueAxis {
    pub(super) fn new(max_value: f64, currency: &str, style: &ChartStyle<'_>) -> Self {
        let ticks = compute_ticks(max_value, style.config.tick_count);
        let labels = ticks
            .iter()
            .map(|tick| style.money.format(currency, *tick))
            .collect();
        Self {
            max_value,
            ticks,
            labels,
        }
    }

    /// Left plot edge wide enough for the longest tick label.
    pub(super) fn plot_left(&self, style: &ChartStyle<'_>) -> f64 {
        left_margin_for_labels(
            style.config.margins.left,
            self.labels.iter().map(String::as_str),
            style.config.axis_labels,
        )
    }

    pub(super) fn scale(&self, plot: PlotArea) -> ValueScale {
        ValueScale::new(self.max_value, plot.y_top, plot.y_bottom)
    }

    /// Gridline per tick into `grid`, and its money label into `labels`.
    pub(super) fn draw(
        &self,
        plot: PlotArea,
        scale: ValueScale,
        style: &ChartStyle<'_>,
        layers: &mut ChartLayers,
    ) {
        let config = style.config;
        for (tick, label) in self.ticks.iter().zip(&self.labels) {
            let y = scale.to_pixel(*tick);
            layers.grid.push(LinePrimitive::new(
                plot.x0,
                y,
                plot.x1,
                y,
                config.axis_line_width_px,
                style.theme.axis_line,
            ));
            layers.labels.push(style.axis_text(
                label.clone(),
                plot.x0 - config.value_label_offset_px,
                y + config.value_label_baseline_px,
                TextHAlign::Right,
            ));
        }
    }
}

/// Plot rectangle for `viewport` once the left edge and top edge are known.
pub(super) fn plot_area(viewport: Viewport, x0: f64, y_top: f64, config: &ChartsConfig) -> PlotArea {
    let x1 = (f64::from(viewport.width) - config.margins.right).max(x0);
    let y_bottom = (f64::from(viewport.height) - config.margins.bottom).max(0.0);
    PlotArea {
        x0,
        x1,
        y_top,
        y_bottom,
    }
}

pub(super) fn x_axis_line(plot: PlotArea, style: &ChartStyle<'_>) -> LinePrimitive {
    LinePrimitive::new(
        plot.x0,
        plot.y_bottom,
        plot.x1,
        plot.y_bottom,
        style.config.axis_line_width_px,
        style.theme.axis_line,
    )
}

pub(super) fn month_label(
    month: &str,
    x: f64,
    plot: PlotArea,
    style: &ChartStyle<'_>,
) -> TextPrimitive {
    style.axis_text(
        month,
        x,
        plot.y_bottom + style.config.month_label_offset_px,
        TextHAlign::Center,
    )
}

/// Top-level groups of one chart, flushed into a frame in paint order.
#[derive(Debug)]
pub(super) struct ChartLayers {
    pub grid: GroupPrimitive,
    pub axis: GroupPrimitive,
    pub legend: GroupPrimitive,
    pub series: GroupPrimitive,
    pub labels: GroupPrimitive,
}

impl ChartLayers {
    pub(super) fn new() -> Self {
        Self {
            grid: GroupPrimitive::layer(LayerKind::Grid),
            axis: GroupPrimitive::layer(LayerKind::Axis),
            legend: GroupPrimitive::layer(LayerKind::Legend),
            series: GroupPrimitive::layer(LayerKind::Series),
            labels: GroupPrimitive::layer(LayerKind::Labels),
        }
    }

    pub(super) fn into_frame(self, viewport: Viewport, aria_label: &str) -> RenderFrame {
        let mut frame = RenderFrame::new(viewport, aria_label);
        for group in [self.grid, self.axis, self.legend, self.series, self.labels] {
            frame.push_layer(group);
        }
        frame
    }
}
