use approx::assert_relative_eq;
use cost_charts::api::{
    CUMULATIVE_CHART_LABEL, ChartStyle, ChartsConfig, LineChartRenderer, MoneyFormat, ThemeConfig,
};
use cost_charts::core::MonthRow;
use cost_charts::render::{LayerKind, NullRenderer, RenderFrame, Renderer, TextHAlign};

fn render(rows: &[MonthRow], width: u32) -> RenderFrame {
    let config = ChartsConfig::default();
    let theme = ThemeConfig::default();
    let money = MoneyFormat::default();
    LineChartRenderer::new(ChartStyle::new(&config, &theme, &money)).render(rows, "CAD", width)
}

#[test]
fn empty_rows_render_axes_and_gridlines_only() {
    let frame = render(&[], 900);
    assert_eq!(frame.aria_label, CUMULATIVE_CHART_LABEL);
    assert!(frame.polylines().is_empty());
    assert!(frame.circles().is_empty());
    assert!(frame.layer(LayerKind::Series).is_none());

    // One gridline at zero plus the x-axis line.
    assert_eq!(frame.lines().len(), 2);
    let labels: Vec<&str> = frame.texts().iter().map(|text| text.text.as_str()).collect();
    assert_eq!(labels, vec!["$0.00"]);

    NullRenderer::default().render(&frame).expect("valid frame");
}

#[test]
fn points_follow_cumulative_values_at_band_centers() {
    let rows = vec![
        MonthRow::new("Jan", 100.0, 100.0),
        MonthRow::new("Feb", 50.0, 150.0),
    ];
    let frame = render(&rows, 900);
    assert_eq!(frame.viewport.height, 240);

    let polylines = frame.polylines();
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].segment_count(), 1);
    assert_relative_eq!(polylines[0].stroke_width, 2.2);
    assert_eq!(polylines[0].color, ThemeConfig::default().secondary_accent);

    // Ticks 0..150 step 50; plot x 73..884, y 18..184.
    let circles = frame.circles();
    assert_eq!(circles.len(), 2);
    assert_relative_eq!(circles[0].cx, 275.75, epsilon = 1e-9);
    assert_relative_eq!(circles[0].cy, 184.0 - (100.0 / 150.0) * 166.0, epsilon = 1e-9);
    assert_relative_eq!(circles[1].cx, 681.25, epsilon = 1e-9);
    assert_relative_eq!(circles[1].cy, 18.0, epsilon = 1e-9);
    assert_relative_eq!(circles[0].radius, 3.4);

    assert_eq!(polylines[0].points[0], (circles[0].cx, circles[0].cy));
    assert_eq!(polylines[0].points[1], (circles[1].cx, circles[1].cy));
}

#[test]
fn highest_cumulative_sits_on_plot_top_when_maximum_is_between_ticks() {
    let config = ChartsConfig::default();
    let theme = ThemeConfig::default();
    let money = MoneyFormat::default();
    let renderer = LineChartRenderer::new(ChartStyle::new(&config, &theme, &money));
    let rows = vec![
        MonthRow::new("Jan", 100.0, 100.0),
        MonthRow::new("Feb", 60.0, 160.0),
    ];
    let frame = renderer.render(&rows, "CAD", 900);
    let plot = renderer.plot_area(&rows, "CAD", 900);
    let plot_height = plot.y_bottom - plot.y_top;

    let circles = frame.circles();
    assert_relative_eq!(circles[1].cy, plot.y_top, epsilon = 1e-9);
    assert_relative_eq!(
        circles[0].cy,
        plot.y_bottom - (100.0 / 160.0) * plot_height,
        epsilon = 1e-9
    );
}

#[test]
fn markers_carry_cumulative_annotations() {
    let rows = vec![
        MonthRow::new("Jan", 100.0, 100.0),
        MonthRow::new("Feb", 50.0, 1_150.0),
    ];
    let frame = render(&rows, 900);
    let titles: Vec<Option<&str>> = frame
        .circles()
        .iter()
        .map(|circle| circle.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![Some("Jan\nCumulative: $100.00"), Some("Feb\nCumulative: $1,150.00")]
    );
}

#[test]
fn axis_uses_cumulative_not_total() {
    let rows = vec![MonthRow::new("Jan", 5_000.0, 40.0)];
    let frame = render(&rows, 900);
    let last_label = frame
        .texts()
        .into_iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .last()
        .map(|text| text.text.clone());
    assert_eq!(last_label.as_deref(), Some("$40.00"));
}

#[test]
fn single_row_draws_a_marker_without_a_line() {
    let frame = render(&[MonthRow::new("Jan", 40.0, 40.0)], 900);
    assert!(frame.polylines().is_empty());
    assert_eq!(frame.circles().len(), 1);
}

#[test]
fn dense_rows_thin_month_labels() {
    let rows: Vec<MonthRow> = (0..12)
        .map(|index| MonthRow::new(format!("M{index}"), 1.0, f64::from(index + 1)))
        .collect();
    let frame = render(&rows, 900);
    let shown = frame
        .texts()
        .into_iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .count();
    assert_eq!(shown, 6);
    assert_eq!(frame.circles().len(), 12);
}

#[test]
fn zero_width_uses_default_and_all_cumulative_zero_stays_finite() {
    let rows = vec![MonthRow::new("Jan", 0.0, 0.0), MonthRow::new("Feb", 0.0, 0.0)];
    let frame = render(&rows, 0);
    assert_eq!(frame.viewport.width, 900);
    for circle in frame.circles() {
        assert_relative_eq!(circle.cy, 184.0);
    }
    NullRenderer::default().render(&frame).expect("valid frame");
}
