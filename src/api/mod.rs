mod bar_chart;
mod category_colors;
mod chart_axes;
mod config;
mod controller;
mod host;
mod line_chart;
mod money;
mod theme;
mod validation;

pub use bar_chart::{BarChartRenderer, MONTHLY_CHART_LABEL};
pub use category_colors::{
    CATEGORY_PALETTE, CategoryColors, ColorRule, NEUTRAL_CATEGORY_COLOR, fnv1a_32,
};
pub use chart_axes::ChartStyle;
pub use config::ChartsConfig;
pub use controller::{
    ChartController, ChartEvent, ChartHost, DATA_PAYLOAD_ID, MountPoint, THEME_ATTRIBUTE, Toggle,
};
pub use host::HeadlessHost;
pub use line_chart::{CUMULATIVE_CHART_LABEL, LineChartRenderer};
pub use money::{
    FixedMoneyFormatter, LocaleMoneyFormatter, MoneyFormat, MoneyFormatKind, MoneyFormatter,
};
pub use theme::{
    ACCENT_PROPERTY, AXIS_LINE_PROPERTY, MONO_FONT_PROPERTY, MUTED_TEXT_PROPERTY,
    SECONDARY_ACCENT_PROPERTY, TEXT_PROPERTY, ThemeConfig,
};
