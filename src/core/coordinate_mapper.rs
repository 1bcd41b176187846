use chrono::NaiveDateTime;

use crate::core::primitives::{shift_by_units, units_between};
use crate::core::step_ladder::Granularity;
use crate::core::TimeUnit;
use crate::error::{RulerError, RulerResult};

/// Center-relative pixel/time transform for one render pass.
///
/// The reference time sits at `floor(viewport_width / 2)`. Pixel offsets map to
/// whole base units, truncated toward the past, so
/// `|pixel_of(time_at(x)) - x| < px_per_unit` holds for every `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    reference: NaiveDateTime,
    granularity: Granularity,
    unit_size: u32,
    unit: TimeUnit,
    viewport_width: u32,
}

impl CoordinateMapper {
    #[must_use]
    pub fn new(
        reference: NaiveDateTime,
        granularity: Granularity,
        unit_size: u32,
        unit: TimeUnit,
        viewport_width: u32,
    ) -> Self {
        Self {
            reference,
            granularity,
            unit_size,
            unit,
            viewport_width,
        }
    }

    #[must_use]
    pub fn reference(self) -> NaiveDateTime {
        self.reference
    }

    #[must_use]
    pub fn granularity(self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn unit_size(self) -> u32 {
        self.unit_size
    }

    #[must_use]
    pub fn unit(self) -> TimeUnit {
        self.unit
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        f64::from(self.viewport_width / 2)
    }

    #[must_use]
    pub fn with_reference(mut self, reference: NaiveDateTime) -> Self {
        self.reference = reference;
        self
    }

    /// Whole base units covered by `pixel_offset` at `px_per_unit` pixels per step.
    pub fn offset_units_at_scale(self, pixel_offset: f64, px_per_unit: f64) -> RulerResult<i64> {
        if !pixel_offset.is_finite() {
            return Err(RulerError::InvalidData(
                "pixel offset must be finite".to_owned(),
            ));
        }
        if !px_per_unit.is_finite() || px_per_unit <= 0.0 {
            return Err(RulerError::InvalidData(
                "pixels per unit must be finite and > 0".to_owned(),
            ));
        }
        let units = (pixel_offset / px_per_unit * f64::from(self.unit_size)).floor();
        Ok(units as i64)
    }

    /// Whole base units covered by `pixel_offset` at the active granularity.
    pub fn offset_units(self, pixel_offset: f64) -> RulerResult<i64> {
        self.offset_units_at_scale(pixel_offset, self.granularity.px_per_unit)
    }

    pub fn time_at(self, pixel_x: f64) -> RulerResult<NaiveDateTime> {
        let offset = self.offset_units(pixel_x - self.center_x())?;
        Ok(shift_by_units(self.reference, self.unit, offset))
    }

    #[must_use]
    pub fn pixel_of(self, instant: NaiveDateTime) -> f64 {
        let offset = units_between(self.reference, instant, self.unit);
        self.center_x() + offset as f64 * self.granularity.px_per_unit / f64::from(self.unit_size)
    }
}
