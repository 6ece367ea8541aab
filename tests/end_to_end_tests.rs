use cost_charts::api::{ChartController, ChartsConfig, HeadlessHost, MountPoint, Toggle};
use cost_charts::core::ViewMode;
use cost_charts::render::{LayerKind, Node, NullRenderer, Renderer, SvgRenderer};

const PAYLOAD: &str = r#"{
  "currency": "CAD",
  "monthly": [
    {"month": "Jan", "total": 100, "byCategory": {"Legal": 60, "Mediation": 40}, "cumulative": 100},
    {"month": "Feb", "total": 50, "byCategory": {"Legal": 50}, "cumulative": 150}
  ]
}"#;

#[test]
fn category_view_renders_stacked_bars_legend_and_cumulative_line() {
    let mut controller = ChartController::start(
        HeadlessHost::with_mounts(900).with_payload(PAYLOAD),
        ChartsConfig::default(),
    )
    .expect("valid config");
    controller.on_toggle(Toggle::View(ViewMode::Category));

    let host = controller.into_host();
    let monthly = host.frame(MountPoint::MonthlyChart).expect("monthly frame");
    let cumulative = host
        .frame(MountPoint::CumulativeChart)
        .expect("cumulative frame");
    assert_eq!(host.replacement_count(MountPoint::MonthlyChart), 2);

    let legend = monthly.layer(LayerKind::Legend).expect("legend layer");
    let legend_labels: Vec<&str> = legend
        .children
        .iter()
        .filter_map(|item| match item {
            Node::Group(group) => group.children.iter().find_map(|child| match child {
                Node::Text(text) => Some(text.text.as_str()),
                _ => None,
            }),
            _ => None,
        })
        .collect();
    assert_eq!(legend_labels, vec!["Legal", "Mediation"]);

    let segments: Vec<_> = monthly
        .layer(LayerKind::Series)
        .expect("series layer")
        .children
        .iter()
        .filter_map(|node| match node {
            Node::Rect(rect) => Some(rect),
            _ => None,
        })
        .collect();
    assert_eq!(segments.len(), 3);

    let (legal, mediation, february) = (segments[0], segments[1], segments[2]);
    assert_eq!(legal.title.as_deref(), Some("Jan\nLegal: $60.00"));
    assert!(legal.corners.top == 0.0 && legal.corners.bottom > 0.0);
    assert_eq!(mediation.title.as_deref(), Some("Jan\nMediation: $40.00"));
    assert!(mediation.corners.top > 0.0 && mediation.corners.bottom == 0.0);
    assert!((mediation.bottom() - legal.y).abs() < 1e-9);
    assert!(february.corners.is_uniform() && !february.corners.is_square());

    assert_eq!(cumulative.circles().len(), 2);
    let polylines = cumulative.polylines();
    assert_eq!(polylines.len(), 1);
    assert_eq!(polylines[0].segment_count(), 1);

    NullRenderer::default().render(monthly).expect("valid monthly frame");
    let document = SvgRenderer::new()
        .render_to_string(cumulative)
        .expect("svg document");
    assert!(document.contains("<title>Feb\nCumulative: $150.00</title>"));
}
