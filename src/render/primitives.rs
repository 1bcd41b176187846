use serde::{Deserialize, Serialize};

use crate::error::{RulerError, RulerResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// CSS-style `rgba(r, g, b, a)` with 0..=255 channels and 0..=1 alpha.
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha,
        )
    }

    pub fn validate(self) -> RulerResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RulerError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    /// Vertical segment from `y1` to `y2` at column `x`.
    #[must_use]
    pub const fn vertical(x: f64, y1: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x, y1, x, y2, stroke_width, color)
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(RulerError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RulerError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Filled axis-aligned rectangle; `width` may be negative and is not clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64, fill_color: Color) -> Self {
        Self {
            x,
            y,
            width,
            height,
            fill_color,
        }
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(RulerError::InvalidData(
                "rect geometry must be finite".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Filled isosceles triangle pointing down, apex `height` px below `(apex_x, top_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrianglePrimitive {
    pub apex_x: f64,
    pub top_y: f64,
    pub height: f64,
    pub fill_color: Color,
}

impl TrianglePrimitive {
    #[must_use]
    pub const fn inverted(apex_x: f64, top_y: f64, height: f64, fill_color: Color) -> Self {
        Self {
            apex_x,
            top_y,
            height,
            fill_color,
        }
    }

    /// Corner points: top-left, apex, top-right.
    #[must_use]
    pub fn vertices(self) -> [(f64, f64); 3] {
        [
            (self.apex_x - self.height, self.top_y),
            (self.apex_x, self.top_y + self.height),
            (self.apex_x + self.height, self.top_y),
        ]
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.apex_x.is_finite() || !self.top_y.is_finite() {
            return Err(RulerError::InvalidData(
                "triangle coordinates must be finite".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(RulerError::InvalidData(
                "triangle height must be finite and > 0".to_owned(),
            ));
        }
        self.fill_color.validate()
    }
}

/// Draw command for one label; `(x, y)` is the left end of the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(text: impl Into<String>, x: f64, y: f64, color: Color) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            color,
        }
    }

    pub fn validate(&self) -> RulerResult<()> {
        if self.text.is_empty() {
            return Err(RulerError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(RulerError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.color.validate()
    }
}
