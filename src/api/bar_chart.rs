use tracing::trace;

use crate::core::{
    BarSegment, BarStack, CategoryTotal, LegendLayout, MonthRow, PlotArea, ViewMode, Viewport,
    layout_legend, max_category_sum, max_total, project_category_stacks, project_total_bars,
    rank_categories, shows_x_label,
};
use crate::render::{
    Color, CornerRadii, GroupPrimitive, RectPrimitive, RenderFrame, Stroke, TextHAlign,
    TextPrimitive,
};

use super::CategoryColors;
use super::chart_axes::{ChartLayers, ChartStyle, ValueAxis, month_label, plot_area, x_axis_line};

pub const MONTHLY_CHART_LABEL: &str = "Monthly costs";

const CATEGORY_SEGMENT_STROKE: Color = Color::from_rgba8(0, 0, 0, 0.12);
const TOTAL_BAR_STROKE: Color = Color::from_rgba8(0, 0, 0, 0.10);
const LEGEND_LABEL_LIFT_PX: f64 = 2.0;

struct MonthlyLayout {
    viewport: Viewport,
    categories: Vec<CategoryTotal>,
    axis: ValueAxis,
    legend_labels: Vec<String>,
    legend: LegendLayout,
    plot: PlotArea,
}

/// Monthly bar chart: one accent bar per month, or per-category stacks with a legend.
#[derive(Debug, Clone, Copy)]
pub struct BarChartRenderer<'a> {
    style: ChartStyle<'a>,
    colors: CategoryColors,
}

impl<'a> BarChartRenderer<'a> {
    #[must_use]
    pub fn new(style: ChartStyle<'a>) -> Self {
        Self {
            style,
            colors: CategoryColors::new(style.theme),
        }
    }

    /// Builds the drawing tree for `rows` at `width_px` (0 uses the default width).
    #[must_use]
    pub fn render(
        &self,
        rows: &[MonthRow],
        currency: &str,
        view: ViewMode,
        width_px: u32,
    ) -> RenderFrame {
        let config = self.style.config;
        let layout = self.layout(rows, currency, view, width_px);
        let plot = layout.plot;
        let scale = layout.axis.scale(plot);

        let mut layers = ChartLayers::new();
        layout.axis.draw(plot, scale, &self.style, &mut layers);
        layers.axis.push(x_axis_line(plot, &self.style));
        self.draw_legend(&layout.legend_labels, &layout.legend, &mut layers.legend);

        let stacks = match view {
            ViewMode::Category => {
                project_category_stacks(rows, &layout.categories, plot, scale, config.band_gap_px)
            }
            ViewMode::Total => project_total_bars(rows, plot, scale, config.band_gap_px),
        };
        for stack in &stacks {
            let month = rows[stack.index].month.as_str();
            self.draw_stack(stack, month, currency, &mut layers.series);
            if shows_x_label(stack.index, rows.len(), config.max_unthinned_labels) {
                layers
                    .labels
                    .push(month_label(month, stack.band.center(), plot, &self.style));
            }
        }

        trace!(
            rows = rows.len(),
            view = view.as_attribute(),
            width = layout.viewport.width,
            legend_rows = layout.legend.rows,
            "monthly chart built"
        );
        layers.into_frame(layout.viewport, MONTHLY_CHART_LABEL)
    }

    /// Plot rectangle `render` would use for the same inputs.
    #[must_use]
    pub fn plot_area(
        &self,
        rows: &[MonthRow],
        currency: &str,
        view: ViewMode,
        width_px: u32,
    ) -> PlotArea {
        self.layout(rows, currency, view, width_px).plot
    }

    fn layout(&self, rows: &[MonthRow], currency: &str, view: ViewMode, width_px: u32) -> MonthlyLayout {
        let config = self.style.config;
        let viewport = Viewport::new(config.resolve_width(width_px), config.bar_chart_height_px);

        let categories = rank_categories(rows);
        let max_value = match view {
            ViewMode::Category => max_category_sum(rows),
            ViewMode::Total => max_total(rows),
        };
        let axis = ValueAxis::new(max_value, currency, &self.style);
        let x0 = axis.plot_left(&self.style);
        let x1 = (f64::from(viewport.width) - config.margins.right).max(x0);

        let legend_labels = match view {
            ViewMode::Category => legend_entries(&categories),
            ViewMode::Total => Vec::new(),
        };
        let legend = layout_legend(&legend_labels, x0, x1, config.legend);
        let plot = plot_area(viewport, x0, config.margins.top + legend.height, config);

        MonthlyLayout {
            viewport,
            categories,
            axis,
            legend_labels,
            legend,
            plot,
        }
    }

    fn draw_legend(&self, labels: &[String], legend: &LegendLayout, group: &mut GroupPrimitive) {
        let config = self.style.config;
        let metrics = config.legend;
        for (label, placement) in labels.iter().zip(&legend.items) {
            let baseline = config.margins.top
                + metrics.first_baseline_px
                + placement.row as f64 * metrics.row_height_px;
            let swatch = RectPrimitive::new(
                placement.x,
                baseline - metrics.swatch_size_px,
                metrics.swatch_size_px,
                metrics.swatch_size_px,
                self.colors.color_for(label),
            )
            .with_corners(CornerRadii::uniform(config.legend_swatch_radius_px))
            .with_opacity(config.legend_swatch_opacity);
            let text = TextPrimitive::new(
                label.as_str(),
                placement.x + metrics.label_offset_px,
                baseline - LEGEND_LABEL_LIFT_PX,
                config.font_size_px,
                self.style.theme.muted_text,
                TextHAlign::Left,
            )
            .with_font_family(self.style.theme.mono_font_family.clone());
            group.push(GroupPrimitive::new().with(swatch).with(text));
        }
    }

    fn draw_stack(&self, stack: &BarStack, month: &str, currency: &str, group: &mut GroupPrimitive) {
        let config = self.style.config;
        for segment in &stack.segments {
            let (fill, stroke, heading) = match &segment.category {
                Some(category) => (
                    self.colors.color_for(category),
                    CATEGORY_SEGMENT_STROKE,
                    category.as_str(),
                ),
                None => (self.style.theme.accent, TOTAL_BAR_STROKE, "Total"),
            };
            let title = format!(
                "{month}\n{heading}: {}",
                self.style.money.format(currency, segment.value)
            );
            let rect = RectPrimitive::new(stack.band.x, segment.y, stack.band.width, segment.height, fill)
                .with_opacity(config.bar_opacity)
                .with_stroke(Stroke::new(stroke, config.axis_line_width_px))
                .with_corners(segment_corners(segment, config.bar_corner_radius_px))
                .with_title(title);
            group.push(rect);
        }
    }
}

/// Categories shown in the legend: the ranked universe minus zero totals.
fn legend_entries(categories: &[CategoryTotal]) -> Vec<String> {
    categories
        .iter()
        .filter(|category| category.total.is_finite() && category.total != 0.0)
        .map(|category| category.name.clone())
        .collect()
}

/// Rounds only the outer edges of a stack.
fn segment_corners(segment: &BarSegment, radius: f64) -> CornerRadii {
    match (segment.is_bottom, segment.is_top) {
        (true, true) => CornerRadii::uniform(radius),
        (true, false) => CornerRadii::bottom_only(radius),
        (false, true) => CornerRadii::top_only(radius),
        (false, false) => CornerRadii::default(),
    }
}
