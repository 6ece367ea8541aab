use cost_charts::api::{BarChartRenderer, ChartStyle, ChartsConfig, MoneyFormat, ThemeConfig};
use cost_charts::core::{MonthRow, ViewMode, Viewport};
use cost_charts::render::{
    Color, NullRenderer, RectPrimitive, RenderFrame, Renderer, SvgRenderer, TextHAlign,
    TextPrimitive,
};

fn category_frame() -> RenderFrame {
    let config = ChartsConfig::default();
    let theme = ThemeConfig::default();
    let money = MoneyFormat::default();
    let rows = vec![
        MonthRow::new("Jan", 100.0, 100.0)
            .with_category("Legal", 60.0)
            .with_category("Mediation", 40.0),
        MonthRow::new("Feb", 30.0, 130.0).with_category("Legal", 30.0),
    ];
    BarChartRenderer::new(ChartStyle::new(&config, &theme, &money)).render(
        &rows,
        "CAD",
        ViewMode::Category,
        900,
    )
}

#[test]
fn document_carries_accessibility_and_tooltips() {
    let mut renderer = SvgRenderer::new();
    let document = renderer
        .render_to_string(&category_frame())
        .expect("svg document");

    assert!(document.starts_with("<svg "));
    assert!(document.ends_with("</svg>"));
    assert!(document.contains(r#"viewBox="0 0 900 260""#));
    assert!(document.contains(r#"role="img""#));
    assert!(document.contains(r#"aria-label="Monthly costs""#));
    assert!(document.contains("<title>Jan\nLegal: $60.00</title>"));
    assert!(document.contains(r#"<g class="legend">"#));
    assert_eq!(renderer.backend_name(), "svg");
}

#[test]
fn stacked_segments_use_paths_and_single_segments_use_rounded_rects() {
    let mut renderer = SvgRenderer::new();
    let document = renderer
        .render_to_string(&category_frame())
        .expect("svg document");

    // Jan stacks two segments with one rounded edge each.
    assert_eq!(document.matches("<path d=").count(), 2);
    assert!(document.contains(r#"rx="8""#));
    assert!(document.contains(r#"rx="3""#));

    let stats = renderer.last_stats();
    assert_eq!(stats.rects_drawn, 5);
    assert_eq!(stats.circles_drawn, 0);
    assert_eq!(stats.polylines_drawn, 0);
    assert_eq!(renderer.last_document(), document);
}

#[test]
fn text_content_is_escaped() {
    let frame = RenderFrame::new(Viewport::new(100, 50), "Fees & <costs>").with_node(
        TextPrimitive::new(
            "A & B \"C\"",
            10.0,
            20.0,
            11.0,
            Color::from_rgb8(0, 0, 0),
            TextHAlign::Left,
        ),
    );
    let document = SvgRenderer::new()
        .render_to_string(&frame)
        .expect("svg document");
    assert!(document.contains(r#"aria-label="Fees &amp; &lt;costs&gt;""#));
    assert!(document.contains("A &amp; B &quot;C&quot;</text>"));
    assert!(document.contains(r#"text-anchor="start""#));
}

#[test]
fn invalid_frames_are_rejected() {
    let bad_rect = RenderFrame::new(Viewport::new(100, 50), "bad").with_node(RectPrimitive::new(
        f64::NAN,
        0.0,
        10.0,
        10.0,
        Color::from_rgb8(0, 0, 0),
    ));
    assert!(SvgRenderer::new().render(&bad_rect).is_err());

    let zero_viewport = RenderFrame::new(Viewport::new(0, 50), "empty");
    assert!(SvgRenderer::new().render(&zero_viewport).is_err());
    assert!(NullRenderer::default().render(&zero_viewport).is_err());
}

#[test]
fn null_renderer_counts_primitives() {
    let frame = category_frame();
    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("valid frame");
    renderer.render(&frame).expect("valid frame");

    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_rect_count, 5);
    assert_eq!(renderer.last_line_count, frame.lines().len());
    assert_eq!(renderer.last_text_count, frame.texts().len());
}
