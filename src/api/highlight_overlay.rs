use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::CoordinateMapper;
use crate::render::Color;

/// Externally supplied time span painted over the scale strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<Color>,
}

impl HighlightInterval {
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Pixel span of one highlight. `width_px` is negative when the interval is
/// reversed; nothing is clipped to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighlightSpan {
    pub start_px: f64,
    pub width_px: f64,
    pub color: Color,
}

#[must_use]
pub fn project_highlights(
    intervals: &[HighlightInterval],
    mapper: CoordinateMapper,
    default_color: Color,
) -> Vec<HighlightSpan> {
    intervals
        .iter()
        .map(|interval| {
            let start_px = mapper.pixel_of(interval.start);
            let end_px = mapper.pixel_of(interval.end);
            HighlightSpan {
                start_px,
                width_px: end_px - start_px,
                color: interval.color.unwrap_or(default_color),
            }
        })
        .collect()
}
