pub mod aggregate;
pub mod bar_stack;
pub mod category;
pub mod dataset;
pub mod layout;
pub mod legend;
pub mod line_points;
pub mod scale;
pub mod ticks;
pub mod types;
pub mod view_state;

pub use aggregate::{PaymentEntry, aggregate_monthly, categorize};
pub use bar_stack::{
    BarSegment, BarStack, SegmentStack, project_category_stacks, project_total_bars,
};
pub use category::{CategoryTotal, max_category_sum, max_cumulative, max_total, rank_categories};
pub use dataset::{DEFAULT_CURRENCY, Dataset, MonthRow};
pub use layout::{
    AxisLabelMetrics, Margins, PlotArea, band, left_margin_for_labels, shows_x_label,
};
pub use legend::{LegendItemPlacement, LegendLayout, LegendMetrics, layout_legend};
pub use line_points::{LinePoint, project_cumulative_points};
pub use scale::ValueScale;
pub use ticks::{MAX_TICK_COUNT, axis_max, compute_ticks, nice_step};
pub use types::{Band, Viewport};
pub use view_state::{RECENT_MONTHS, RangeFilter, ViewMode, ViewState};
