use crate::core::MAX_TICK_COUNT;
use crate::error::{ChartError, ChartResult};

use super::ChartsConfig;

fn require_non_negative(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and >= 0"
        )));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be finite and > 0"
        )));
    }
    Ok(())
}

fn require_unit_interval(name: &str, value: f64) -> ChartResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ChartError::InvalidConfig(format!(
            "`{name}` must be in [0, 1]"
        )));
    }
    Ok(())
}

pub(super) fn validate_charts_config(config: ChartsConfig) -> ChartResult<ChartsConfig> {
    if config.default_width_px == 0 {
        return Err(ChartError::InvalidConfig(
            "`default_width_px` must be > 0".to_owned(),
        ));
    }
    if config.bar_chart_height_px == 0 || config.line_chart_height_px == 0 {
        return Err(ChartError::InvalidViewport {
            width: config.default_width_px,
            height: config.bar_chart_height_px.min(config.line_chart_height_px),
        });
    }
    if !(1..=MAX_TICK_COUNT).contains(&config.tick_count) {
        return Err(ChartError::InvalidConfig(format!(
            "`tick_count` must be between 1 and {MAX_TICK_COUNT}"
        )));
    }

    let margins = config.margins;
    for (name, value) in [
        ("margins.left", margins.left),
        ("margins.right", margins.right),
        ("margins.top", margins.top),
        ("margins.bottom", margins.bottom),
        ("band_gap_px", config.band_gap_px),
        ("value_label_offset_px", config.value_label_offset_px),
        ("value_label_baseline_px", config.value_label_baseline_px),
        ("month_label_offset_px", config.month_label_offset_px),
        ("axis_labels.padding_px", config.axis_labels.padding_px),
        ("axis_labels.char_width_px", config.axis_labels.char_width_px),
        ("axis_labels.extra_padding_px", config.axis_labels.extra_padding_px),
        ("legend.swatch_size_px", config.legend.swatch_size_px),
        ("legend.label_offset_px", config.legend.label_offset_px),
        ("legend.char_width_px", config.legend.char_width_px),
        ("legend.label_padding_px", config.legend.label_padding_px),
        ("legend.max_label_width_px", config.legend.max_label_width_px),
        ("legend.bottom_padding_px", config.legend.bottom_padding_px),
        ("legend.first_baseline_px", config.legend.first_baseline_px),
        ("bar_corner_radius_px", config.bar_corner_radius_px),
        ("legend_swatch_radius_px", config.legend_swatch_radius_px),
        ("marker_radius_px", config.marker_radius_px),
    ] {
        require_non_negative(name, value)?;
    }

    for (name, value) in [
        ("font_size_px", config.font_size_px),
        ("legend.row_height_px", config.legend.row_height_px),
        ("axis_line_width_px", config.axis_line_width_px),
        ("line_stroke_width_px", config.line_stroke_width_px),
    ] {
        require_positive(name, value)?;
    }

    require_unit_interval("bar_opacity", config.bar_opacity)?;
    require_unit_interval("legend_swatch_opacity", config.legend_swatch_opacity)?;

    Ok(config)
}
