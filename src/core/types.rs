use serde::{Deserialize, Serialize};

/// Drawing surface size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel column of the center indicator, `floor(width / 2)`.
    #[must_use]
    pub fn center_x(self) -> f64 {
        f64::from(self.width / 2)
    }
}

/// Base unit in which unit sizes, boundary nodes and offsets are counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Minute,
    Second,
}

impl TimeUnit {
    #[must_use]
    pub const fn millis(self) -> i64 {
        match self {
            Self::Minute => 60_000,
            Self::Second => 1_000,
        }
    }
}
