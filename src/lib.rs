//! cost-charts: procedural monthly and cumulative cost charts.
//!
//! Data flows one way: a lenient JSON payload becomes `core::Dataset` rows, the
//! `api` renderers turn filtered rows into backend-agnostic `render::RenderFrame`
//! trees, and `api::ChartController` redraws both charts on every trigger.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChartRenderer, ChartController, ChartHost, ChartStyle, ChartsConfig, HeadlessHost,
    LineChartRenderer, ThemeConfig,
};
pub use error::{ChartError, ChartResult};
