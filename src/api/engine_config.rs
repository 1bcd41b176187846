use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::{LabelFormat, RulerPreset, StepLadder, TimeUnit, UnitSizeSet, Viewport};
use crate::interaction::DEFAULT_CLICK_THRESHOLD_PX;
use crate::render::Color;

/// Height of the full-length tick, which also sizes the scale strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScaleLineHeight {
    Fixed(f64),
    /// Half of the current viewport height, recomputed on resize.
    HalfViewport,
}

impl ScaleLineHeight {
    #[must_use]
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::Fixed(px) => px,
            Self::HalfViewport => f64::from(viewport.height) / 2.0,
        }
    }
}

/// Height of the inverted triangle on top of the center line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IndicatorHeight {
    Fixed(f64),
    /// Fraction of the resolved scale line height.
    ScaleLineRatio(f64),
}

impl IndicatorHeight {
    #[must_use]
    pub fn resolve(self, scale_line_height: f64) -> f64 {
        match self {
            Self::Fixed(px) => px,
            Self::ScaleLineRatio(ratio) => scale_line_height * ratio,
        }
    }
}

/// Region of the surface where an unpressed pointer shows the hover indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverBand {
    FullSurface,
    /// Only below the scale strip (`y > scale line height`).
    BelowScale,
}

/// Pixel scale used to turn a click position into a recenter offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ClickRecenterScale {
    /// Pixels per unit of the active granularity.
    ActiveGranularity,
    /// A fixed pixels-per-unit value regardless of granularity.
    FixedPixelsPerUnit(f64),
}

/// Colors and metrics of the painted ruler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RulerStyle {
    pub background_color: Color,
    pub scale_band_color: Color,
    pub tick_color: Color,
    pub text_color: Color,
    pub highlight_color: Color,
    pub center_line_color: Color,
    pub hover_line_color: Color,
    pub scale_line_height: ScaleLineHeight,
    /// Minor tick length as a fraction of the scale line height.
    pub minor_tick_ratio: f64,
    pub tick_width_px: f64,
    pub center_line_width_px: f64,
    pub center_triangle_height: IndicatorHeight,
    pub hover_line_width_px: f64,
    /// Label baseline distance below the scale line height.
    pub label_baseline_offset_px: f64,
    /// Label start distance left of its tick.
    pub label_offset_x_px: f64,
    /// Minimum accumulated major-tick span between two labels.
    pub minimum_text_interval_px: f64,
}

impl Default for RulerStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_rgba8(17, 19, 21, 1.0),
            scale_band_color: Color::from_rgba8(24, 28, 33, 1.0),
            tick_color: Color::from_rgba8(176, 187, 197, 1.0),
            text_color: Color::from_rgba8(176, 187, 197, 1.0),
            highlight_color: Color::from_rgba8(132, 244, 180, 0.6),
            center_line_color: Color::from_rgba8(58, 241, 251, 1.0),
            hover_line_color: Color::WHITE,
            scale_line_height: ScaleLineHeight::Fixed(14.0),
            minor_tick_ratio: 0.6,
            tick_width_px: 1.0,
            center_line_width_px: 2.0,
            center_triangle_height: IndicatorHeight::Fixed(6.0),
            hover_line_width_px: 0.5,
            label_baseline_offset_px: 13.0,
            label_offset_x_px: 14.0,
            minimum_text_interval_px: 60.0,
        }
    }
}

impl RulerStyle {
    /// Look of the second-based media ruler: the scale strip fills the top
    /// half of the surface, and the center line and its triangle scale with it.
    #[must_use]
    pub fn media() -> Self {
        Self {
            tick_color: Color::from_rgba8(109, 120, 145, 1.0),
            scale_line_height: ScaleLineHeight::HalfViewport,
            center_line_width_px: 1.0,
            center_triangle_height: IndicatorHeight::ScaleLineRatio(0.3),
            label_offset_x_px: 12.0,
            ..Self::default()
        }
    }
}

/// Everything needed to initialize a [`TimeRuler`](super::TimeRuler).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRulerConfig {
    pub viewport: Viewport,
    pub time_unit: TimeUnit,
    pub ladder: StepLadder,
    pub unit_sizes: UnitSizeSet,
    pub unit_size: u32,
    pub label_format: LabelFormat,
    /// Initial reference time; the local wall clock when absent.
    pub reference_time: Option<NaiveDateTime>,
    pub style: RulerStyle,
    pub hover_band: HoverBand,
    pub click_threshold_px: f64,
    pub click_recenter_scale: ClickRecenterScale,
}

impl TimeRulerConfig {
    /// Minute-based ruler with the default look.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::from_preset(viewport, RulerPreset::Minutes)
    }

    #[must_use]
    pub fn from_preset(viewport: Viewport, preset: RulerPreset) -> Self {
        let (style, hover_band) = match preset {
            RulerPreset::Minutes => (RulerStyle::default(), HoverBand::FullSurface),
            RulerPreset::Seconds => (RulerStyle::media(), HoverBand::BelowScale),
        };
        Self {
            viewport,
            time_unit: preset.time_unit(),
            ladder: preset.ladder(),
            unit_sizes: preset.unit_sizes(),
            unit_size: preset.default_unit_size(),
            label_format: preset.label_format(),
            reference_time: None,
            style,
            hover_band,
            click_threshold_px: DEFAULT_CLICK_THRESHOLD_PX,
            click_recenter_scale: ClickRecenterScale::ActiveGranularity,
        }
    }

    #[must_use]
    pub fn with_ladder(mut self, ladder: StepLadder) -> Self {
        self.ladder = ladder;
        self
    }

    #[must_use]
    pub fn with_unit_sizes(mut self, unit_sizes: UnitSizeSet) -> Self {
        self.unit_sizes = unit_sizes;
        self
    }

    #[must_use]
    pub fn with_unit_size(mut self, unit_size: u32) -> Self {
        self.unit_size = unit_size;
        self
    }

    #[must_use]
    pub fn with_label_format(mut self, label_format: LabelFormat) -> Self {
        self.label_format = label_format;
        self
    }

    #[must_use]
    pub fn with_reference_time(mut self, reference_time: NaiveDateTime) -> Self {
        self.reference_time = Some(reference_time);
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RulerStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_hover_band(mut self, hover_band: HoverBand) -> Self {
        self.hover_band = hover_band;
        self
    }

    #[must_use]
    pub fn with_click_threshold_px(mut self, click_threshold_px: f64) -> Self {
        self.click_threshold_px = click_threshold_px;
        self
    }

    #[must_use]
    pub fn with_click_recenter_scale(mut self, scale: ClickRecenterScale) -> Self {
        self.click_recenter_scale = scale;
        self
    }
}
