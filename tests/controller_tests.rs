use cost_charts::api::{
    ChartController, ChartEvent, ChartsConfig, HeadlessHost, MountPoint, SECONDARY_ACCENT_PROPERTY,
    THEME_ATTRIBUTE, Toggle,
};
use cost_charts::core::{RangeFilter, ViewMode, ViewState};
use cost_charts::render::{Color, LayerKind, NullRenderer, Renderer};

fn payload(months: usize) -> String {
    let rows: Vec<String> = (1..=months)
        .map(|index| {
            format!(
                r#"{{"month": "m{index}", "total": {index}, "byCategory": {{"Legal": {index}}}, "cumulative": {}}}"#,
                index * (index + 1) / 2
            )
        })
        .collect();
    format!(r#"{{"currency": "CAD", "monthly": [{}]}}"#, rows.join(","))
}

fn start(host: HeadlessHost) -> ChartController<HeadlessHost> {
    ChartController::start(host, ChartsConfig::default()).expect("valid config")
}

fn marker_count(controller: &ChartController<HeadlessHost>) -> usize {
    controller
        .host()
        .frame(MountPoint::CumulativeChart)
        .map(|frame| frame.circles().len())
        .unwrap_or(0)
}

#[test]
fn initial_render_happens_once_at_startup() {
    let controller = start(HeadlessHost::with_mounts(900).with_payload(payload(3)));

    assert_eq!(controller.state(), ViewState::default());
    assert_eq!(controller.render_passes(), 1);
    for mount in MountPoint::ALL {
        assert_eq!(controller.host().replacement_count(mount), 1);
        assert!(controller.host().frame(mount).is_some());
    }
    assert_eq!(marker_count(&controller), 3);
}

#[test]
fn missing_mount_point_makes_render_a_no_op() {
    let host = HeadlessHost::new()
        .with_payload(payload(3))
        .with_mount(MountPoint::MonthlyChart, 900);
    let mut controller = start(host);

    assert_eq!(controller.render_passes(), 0);
    assert!(controller.host().frame(MountPoint::MonthlyChart).is_none());
    assert!(!controller.render_all());

    controller
        .host_mut()
        .set_mount_width(MountPoint::CumulativeChart, 600);
    controller.on_resize();
    assert_eq!(controller.render_passes(), 1);
    assert!(controller.host().frame(MountPoint::CumulativeChart).is_some());
}

#[test]
fn range_toggle_keeps_last_twelve_rows() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(15)));
    assert_eq!(marker_count(&controller), 15);

    controller.on_toggle(Toggle::Range(RangeFilter::LastTwelve));
    assert_eq!(marker_count(&controller), 12);
    let first_title = controller
        .host()
        .frame(MountPoint::CumulativeChart)
        .and_then(|frame| frame.circles().first().and_then(|circle| circle.title.clone()));
    assert_eq!(first_title.as_deref(), Some("m4\nCumulative: $10.00"));

    controller.on_toggle(Toggle::Range(RangeFilter::All));
    assert_eq!(marker_count(&controller), 15);
}

#[test]
fn pressed_flags_derive_from_state() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));
    assert!(controller.is_pressed(Toggle::Range(RangeFilter::All)));
    assert!(!controller.is_pressed(Toggle::Range(RangeFilter::LastTwelve)));
    assert!(controller.is_pressed(Toggle::View(ViewMode::Total)));

    controller.on_button_click(Some("12"), None);
    controller.on_button_click(None, Some("category"));
    assert!(controller.is_pressed(Toggle::Range(RangeFilter::LastTwelve)));
    assert!(!controller.is_pressed(Toggle::Range(RangeFilter::All)));
    assert!(controller.is_pressed(Toggle::View(ViewMode::Category)));
    assert!(!controller.is_pressed(Toggle::View(ViewMode::Total)));
}

#[test]
fn unknown_button_values_leave_state_alone_but_redraw() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));
    controller.on_button_click(Some("24"), Some("pie"));
    assert_eq!(controller.state(), ViewState::default());
    assert_eq!(controller.render_passes(), 2);
}

#[test]
fn view_toggle_switches_to_stacked_bars_with_legend() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));
    let monthly = |controller: &ChartController<HeadlessHost>| {
        controller
            .host()
            .frame(MountPoint::MonthlyChart)
            .cloned()
            .expect("monthly frame")
    };
    assert!(monthly(&controller).layer(LayerKind::Legend).is_none());

    controller.handle(ChartEvent::Toggle(Toggle::View(ViewMode::Category)));
    assert!(monthly(&controller).layer(LayerKind::Legend).is_some());
}

#[test]
fn only_theme_attribute_mutations_trigger_redraw() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));

    controller.on_root_attribute_changed("class");
    assert_eq!(controller.render_passes(), 1);

    controller
        .host_mut()
        .set_theme_property(SECONDARY_ACCENT_PROPERTY, "#ff0000");
    controller.handle(ChartEvent::RootAttributeChanged(THEME_ATTRIBUTE.to_owned()));
    assert_eq!(controller.render_passes(), 2);

    let polyline_color = controller
        .host()
        .frame(MountPoint::CumulativeChart)
        .and_then(|frame| frame.polylines().first().map(|polyline| polyline.color));
    assert_eq!(polyline_color, Some(Color::from_rgb8(255, 0, 0)));
}

#[test]
fn resize_redraws_at_new_width() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));
    controller
        .host_mut()
        .set_mount_width(MountPoint::MonthlyChart, 480);
    controller.handle(ChartEvent::Resize);

    let width = controller
        .host()
        .frame(MountPoint::MonthlyChart)
        .map(|frame| frame.viewport.width);
    assert_eq!(width, Some(480));
    assert_eq!(controller.host().replacement_count(MountPoint::MonthlyChart), 2);
}

#[test]
fn zero_width_container_falls_back_to_default_width() {
    let controller = start(HeadlessHost::with_mounts(0).with_payload(payload(1)));
    let width = controller
        .host()
        .frame(MountPoint::CumulativeChart)
        .map(|frame| frame.viewport.width);
    assert_eq!(width, Some(900));
}

#[test]
fn missing_payload_renders_empty_charts() {
    let controller = start(HeadlessHost::with_mounts(900));
    let frame = controller
        .host()
        .frame(MountPoint::CumulativeChart)
        .expect("cumulative frame");
    assert!(frame.circles().is_empty());
    assert!(frame.polylines().is_empty());
    assert!(!frame.lines().is_empty());
}

#[test]
fn payload_is_reparsed_on_every_pass() {
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload(2)));
    controller.host_mut().set_payload(Some(payload(5)));
    controller.on_resize();
    assert_eq!(marker_count(&controller), 5);
}

#[test]
fn near_max_amounts_render_finite_frames() {
    let payload = r#"{"currency": "CAD", "monthly": [
        {"month": "Jan", "total": 1.7e308, "byCategory": {"Legal": 1.7e308}, "cumulative": 1.7e308},
        {"month": "Feb", "total": 10, "byCategory": {"Legal": 10}, "cumulative": 1.7e308}
    ]}"#;
    let mut controller = start(HeadlessHost::with_mounts(900).with_payload(payload));
    controller.on_toggle(Toggle::View(ViewMode::Category));
    assert_eq!(controller.render_passes(), 2);

    let mut renderer = NullRenderer::default();
    for mount in MountPoint::ALL {
        let frame = controller.host().frame(mount).expect("frame");
        renderer.render(frame).expect("finite frame");
    }
    assert_eq!(marker_count(&controller), 2);
}

#[test]
fn invalid_config_is_rejected_before_rendering() {
    let config = ChartsConfig::default().with_tick_count(0);
    assert!(ChartController::start(HeadlessHost::with_mounts(900), config).is_err());
}

#[test]
fn toggles_parse_from_button_attributes() {
    let toggles: Vec<Toggle> = Toggle::from_attributes(Some("12"), Some("category")).collect();
    assert_eq!(
        toggles,
        vec![
            Toggle::Range(RangeFilter::LastTwelve),
            Toggle::View(ViewMode::Category)
        ]
    );
    assert_eq!(Toggle::from_attributes(Some("bogus"), None).count(), 0);
    assert_eq!(MountPoint::from_id("lc_chart_cumulative"), Some(MountPoint::CumulativeChart));
    assert_eq!(MountPoint::MonthlyChart.id(), "lc_chart_monthly");
}
