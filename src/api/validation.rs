use std::fmt::Write as _;

use chrono::NaiveDateTime;
use chrono::format::{Item, StrftimeItems};

use crate::core::{LabelFormat, Viewport};
use crate::error::{RulerError, RulerResult};
use crate::render::Color;

use super::{
    ClickRecenterScale, HighlightInterval, IndicatorHeight, RulerStyle, ScaleLineHeight,
    TimeRulerConfig,
};

pub(super) fn validate_viewport(viewport: Viewport) -> RulerResult<()> {
    if !viewport.is_valid() {
        return Err(RulerError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}

pub(super) fn validate_config(config: &TimeRulerConfig) -> RulerResult<()> {
    validate_viewport(config.viewport)?;
    config.ladder.validate()?;
    config.unit_sizes.validate()?;
    if !config.unit_sizes.contains(config.unit_size) {
        return Err(RulerError::InvalidUnitSize {
            value: config.unit_size,
        });
    }
    validate_label_format(&config.label_format)?;
    validate_style(config.style)?;
    if !config.click_threshold_px.is_finite() || config.click_threshold_px < 0.0 {
        return Err(RulerError::InvalidData(
            "click threshold must be finite and >= 0".to_owned(),
        ));
    }
    if let ClickRecenterScale::FixedPixelsPerUnit(px) = config.click_recenter_scale {
        validate_positive("click recenter pixels per unit", px)?;
    }
    Ok(())
}

pub(super) fn validate_style(style: RulerStyle) -> RulerResult<()> {
    for color in [
        style.background_color,
        style.scale_band_color,
        style.tick_color,
        style.text_color,
        style.highlight_color,
        style.center_line_color,
        style.hover_line_color,
    ] {
        color.validate()?;
    }

    if let ScaleLineHeight::Fixed(px) = style.scale_line_height {
        validate_positive("scale line height", px)?;
    }
    if !style.minor_tick_ratio.is_finite() || !(0.0..=1.0).contains(&style.minor_tick_ratio) {
        return Err(RulerError::InvalidData(
            "minor tick ratio must be finite and in [0, 1]".to_owned(),
        ));
    }
    validate_positive("tick width", style.tick_width_px)?;
    validate_positive("center line width", style.center_line_width_px)?;
    match style.center_triangle_height {
        IndicatorHeight::Fixed(px) => validate_positive("center triangle height", px)?,
        IndicatorHeight::ScaleLineRatio(ratio) => validate_positive("center triangle ratio", ratio)?,
    }
    validate_positive("hover line width", style.hover_line_width_px)?;
    for (name, value) in [
        ("label baseline offset", style.label_baseline_offset_px),
        ("label x offset", style.label_offset_x_px),
        ("minimum text interval", style.minimum_text_interval_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(RulerError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_label_format(format: &LabelFormat) -> RulerResult<()> {
    for pattern in [&format.fine, &format.coarse] {
        if pattern.is_empty() {
            return Err(RulerError::InvalidData(
                "label format must not be empty".to_owned(),
            ));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(RulerError::InvalidData(format!(
                "label format `{pattern}` is not a valid strftime pattern"
            )));
        }
        let mut sample = String::new();
        if write!(sample, "{}", NaiveDateTime::default().format(pattern)).is_err() {
            return Err(RulerError::InvalidData(format!(
                "label format `{pattern}` needs time zone data a wall-clock time lacks"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_intervals(
    intervals: &[HighlightInterval],
    default_color: Option<Color>,
) -> RulerResult<()> {
    if let Some(color) = default_color {
        color.validate()?;
    }
    for interval in intervals {
        if interval.end < interval.start {
            return Err(RulerError::InvalidInterval {
                start: interval.start,
                end: interval.end,
            });
        }
        if let Some(color) = interval.color {
            color.validate()?;
        }
    }
    Ok(())
}

fn validate_positive(name: &str, value: f64) -> RulerResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RulerError::InvalidData(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
