use tracing::trace;

use crate::core::{
    MonthRow, PlotArea, Viewport, max_cumulative, project_cumulative_points, shows_x_label,
};
use crate::render::{CirclePrimitive, PolylinePrimitive, RenderFrame};

use super::chart_axes::{ChartLayers, ChartStyle, ValueAxis, month_label, plot_area, x_axis_line};

pub const CUMULATIVE_CHART_LABEL: &str = "Cumulative costs";

/// Cumulative cost line: one marker per month joined by straight segments.
#[derive(Debug, Clone, Copy)]
pub struct LineChartRenderer<'a> {
    style: ChartStyle<'a>,
}

impl<'a> LineChartRenderer<'a> {
    #[must_use]
    pub fn new(style: ChartStyle<'a>) -> Self {
        Self { style }
    }

    /// Builds the drawing tree for `rows` at `width_px` (0 uses the default width).
    ///
    /// With no rows only the gridlines, value labels and x-axis are drawn. A single
    /// row yields a marker without a connecting polyline.
    #[must_use]
    pub fn render(&self, rows: &[MonthRow], currency: &str, width_px: u32) -> RenderFrame {
        let config = self.style.config;
        let theme = self.style.theme;
        let (viewport, axis, plot) = self.layout(rows, currency, width_px);
        let scale = axis.scale(plot);

        let mut layers = ChartLayers::new();
        axis.draw(plot, scale, &self.style, &mut layers);
        layers.axis.push(x_axis_line(plot, &self.style));

        let points = project_cumulative_points(rows, plot, scale, config.band_gap_px);
        if points.len() >= 2 {
            layers.series.push(PolylinePrimitive::new(
                points.iter().map(|point| (point.x, point.y)).collect(),
                config.line_stroke_width_px,
                theme.secondary_accent,
            ));
        }
        for point in &points {
            let month = rows[point.index].month.as_str();
            let title = format!(
                "{month}\nCumulative: {}",
                self.style.money.format(currency, point.value)
            );
            layers.series.push(
                CirclePrimitive::new(
                    point.x,
                    point.y,
                    config.marker_radius_px,
                    theme.secondary_accent,
                )
                .with_title(title),
            );
            if shows_x_label(point.index, rows.len(), config.max_unthinned_labels) {
                layers
                    .labels
                    .push(month_label(month, point.x, plot, &self.style));
            }
        }

        trace!(
            rows = rows.len(),
            width = viewport.width,
            "cumulative chart built"
        );
        layers.into_frame(viewport, CUMULATIVE_CHART_LABEL)
    }

    /// Plot rectangle `render` would use for the same inputs.
    #[must_use]
    pub fn plot_area(&self, rows: &[MonthRow], currency: &str, width_px: u32) -> PlotArea {
        self.layout(rows, currency, width_px).2
    }

    fn layout(&self, rows: &[MonthRow], currency: &str, width_px: u32) -> (Viewport, ValueAxis, PlotArea) {
        let config = self.style.config;
        let viewport = Viewport::new(config.resolve_width(width_px), config.line_chart_height_px);
        let axis = ValueAxis::new(max_cumulative(rows), currency, &self.style);
        let plot = plot_area(viewport, axis.plot_left(&self.style), config.margins.top, config);
        (viewport, axis, plot)
    }
}
