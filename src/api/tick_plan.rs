use std::fmt::Write as _;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{shift_by_units, units_since_midnight};
use crate::core::{CoordinateMapper, Granularity, LabelFormat, StepLadder, TimeUnit, Viewport};
use crate::error::{RulerError, RulerResult};

use super::ScaleLineHeight;

/// The finest rung anchors its divide point on three major groups.
const FINE_GROUP_INTERVAL: u32 = 5;
const FINE_GROUP_CORRECTION: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickKind {
    /// Anchor tick at the divide point; always full height and labeled.
    Divide,
    Minor,
    Major,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    pub x: f64,
    pub time: NaiveDateTime,
    pub kind: TickKind,
    pub height: f64,
    pub label: Option<String>,
}

/// Ordered ticks for one pass: the divide point first, then the walk to the
/// left edge, then the walk to the right edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub granularity: Granularity,
    pub unit_size: u32,
    pub ticks: Vec<TickMark>,
}

impl TickPlan {
    #[must_use]
    pub fn divide_point(&self) -> Option<&TickMark> {
        self.ticks.first()
    }

    pub fn labels(&self) -> impl Iterator<Item = (f64, &str)> {
        self.ticks
            .iter()
            .filter_map(|tick| tick.label.as_deref().map(|label| (tick.x, label)))
    }
}

/// Pixel metrics the planner needs from the style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickLayout {
    pub scale_line_height: ScaleLineHeight,
    pub minor_tick_ratio: f64,
    pub minimum_text_interval_px: f64,
}

/// Tick/label generator holding the ladder and the sticky granularity.
#[derive(Debug, Clone, PartialEq)]
pub struct TickPlanner {
    ladder: StepLadder,
    unit: TimeUnit,
    unit_size: u32,
    granularity: Granularity,
    label_format: LabelFormat,
    layout: TickLayout,
}

impl TickPlanner {
    pub fn new(
        ladder: StepLadder,
        unit: TimeUnit,
        unit_size: u32,
        label_format: LabelFormat,
        layout: TickLayout,
    ) -> RulerResult<Self> {
        if unit_size == 0 {
            return Err(RulerError::InvalidUnitSize { value: unit_size });
        }
        let granularity = ladder
            .resolve(unit_size)
            .or_else(|| ladder.coarsest())
            .ok_or_else(|| {
                RulerError::InvalidData("step ladder must not be empty".to_owned())
            })?;
        Ok(Self {
            ladder,
            unit,
            unit_size,
            granularity,
            label_format,
            layout,
        })
    }

    #[must_use]
    pub fn ladder(&self) -> &StepLadder {
        &self.ladder
    }

    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    #[must_use]
    pub fn unit_size(&self) -> u32 {
        self.unit_size
    }

    /// Granularity of the latest successful resolution.
    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    #[must_use]
    pub fn layout(&self) -> TickLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: TickLayout) {
        self.layout = layout;
    }

    /// Switches unit size; keeps the previous granularity when the ladder
    /// has no match for the new size.
    pub fn set_unit_size(&mut self, unit_size: u32) -> RulerResult<()> {
        if unit_size == 0 {
            return Err(RulerError::InvalidUnitSize { value: unit_size });
        }
        self.unit_size = unit_size;
        if let Some(granularity) = self.ladder.resolve(unit_size) {
            self.granularity = granularity;
        }
        Ok(())
    }

    #[must_use]
    pub fn mapper(&self, reference: NaiveDateTime, viewport: Viewport) -> CoordinateMapper {
        CoordinateMapper::new(
            reference,
            self.granularity,
            self.unit_size,
            self.unit,
            viewport.width,
        )
    }

    /// Label text for `time`, or `None` when the pattern needs data a wall-clock
    /// time does not carry (e.g. an offset).
    #[must_use]
    pub fn format_label(&self, time: NaiveDateTime) -> Option<String> {
        let pattern = if self.unit_size <= self.ladder.first_boundary() {
            &self.label_format.fine
        } else {
            &self.label_format.coarse
        };
        let mut label = String::new();
        write!(label, "{}", time.format(pattern)).ok()?;
        Some(label)
    }

    #[must_use]
    pub fn plan(&self, reference: NaiveDateTime, viewport: Viewport) -> TickPlan {
        let granularity = self.granularity;
        let mapper = self.mapper(reference, viewport);
        let full_height = self.layout.scale_line_height.resolve(viewport);
        let minor_height = full_height * self.layout.minor_tick_ratio;

        let correction = if granularity.group_interval == FINE_GROUP_INTERVAL {
            FINE_GROUP_CORRECTION
        } else {
            1
        };
        let group_span =
            i64::from(self.unit_size) * i64::from(granularity.group_interval) * correction;
        let offset = units_since_midnight(reference, self.unit).rem_euclid(group_span);
        let divide_time = shift_by_units(reference, self.unit, -offset);
        let divide_x = mapper.center_x()
            - offset as f64 * granularity.px_per_unit / f64::from(self.unit_size);

        let mut ticks = vec![TickMark {
            x: divide_x,
            time: divide_time,
            kind: TickKind::Divide,
            height: full_height,
            label: self.format_label(divide_time),
        }];

        let width = f64::from(viewport.width);
        let step_units = i64::from(self.unit_size);
        for direction in [-1.0_f64, 1.0] {
            let mut x = divide_x;
            let mut time = divide_time;
            let mut count = 0_u32;
            let mut text_interval = 0.0_f64;
            loop {
                x += direction * granularity.px_per_unit;
                time = shift_by_units(time, self.unit, direction as i64 * step_units);
                if x < 0.0 || x > width {
                    break;
                }

                if count + 1 < granularity.group_interval {
                    ticks.push(TickMark {
                        x,
                        time,
                        kind: TickKind::Minor,
                        height: minor_height,
                        label: None,
                    });
                } else {
                    text_interval += f64::from(granularity.group_interval) * granularity.px_per_unit;
                    let label = if text_interval >= self.layout.minimum_text_interval_px {
                        text_interval = 0.0;
                        self.format_label(time)
                    } else {
                        None
                    };
                    ticks.push(TickMark {
                        x,
                        time,
                        kind: TickKind::Major,
                        height: full_height,
                        label,
                    });
                }
                count = if count + 1 == granularity.group_interval {
                    0
                } else {
                    count + 1
                };
            }
        }

        TickPlan {
            granularity,
            unit_size: self.unit_size,
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::{TickKind, TickLayout, TickPlanner};
    use crate::api::ScaleLineHeight;
    use crate::core::{RulerPreset, Viewport};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .expect("valid time")
    }

    fn planner(unit_size: u32) -> TickPlanner {
        let preset = RulerPreset::Minutes;
        TickPlanner::new(
            preset.ladder(),
            preset.time_unit(),
            unit_size,
            preset.label_format(),
            TickLayout {
                scale_line_height: ScaleLineHeight::Fixed(14.0),
                minor_tick_ratio: 0.6,
                minimum_text_interval_px: 60.0,
            },
        )
        .expect("planner")
    }

    #[test]
    fn fine_granularity_anchors_on_triple_group_span() {
        // unit 1 min, 5 px, group 5 -> modulus 15 minutes.
        let plan = planner(1).plan(at(12, 7), Viewport::new(600, 40));
        let divide = plan.divide_point().expect("divide point");
        assert_eq!(divide.time, at(12, 0));
        assert_eq!(divide.x, 300.0 - 5.0 * 7.0);
    }

    #[test]
    fn minor_and_major_ticks_cycle_with_group_interval() {
        // unit 60 resolves to 20 px groups of 3.
        let plan = planner(60).plan(at(12, 0), Viewport::new(600, 40));
        let right: Vec<TickKind> = plan
            .ticks
            .iter()
            .filter(|tick| tick.x > 300.0)
            .take(6)
            .map(|tick| tick.kind)
            .collect();
        assert_eq!(
            right,
            vec![
                TickKind::Minor,
                TickKind::Minor,
                TickKind::Major,
                TickKind::Minor,
                TickKind::Minor,
                TickKind::Major,
            ]
        );
        let first_major = plan
            .ticks
            .iter()
            .find(|tick| tick.kind == TickKind::Major && tick.x > 300.0)
            .expect("major tick");
        assert_eq!(first_major.label.as_deref(), Some("15:00"));
    }

    #[test]
    fn zero_width_viewport_yields_only_the_divide_tick() {
        let plan = planner(60).plan(at(12, 0), Viewport::new(0, 40));
        assert_eq!(plan.ticks.len(), 1);
        assert_eq!(plan.ticks[0].kind, TickKind::Divide);
    }

    #[test]
    fn label_patterns_needing_an_offset_leave_ticks_unlabeled() {
        let preset = RulerPreset::Minutes;
        let planner = TickPlanner::new(
            preset.ladder(),
            preset.time_unit(),
            60,
            crate::core::LabelFormat::new("%H:%M %z", "%m/%d"),
            planner(60).layout(),
        )
        .expect("planner");

        let plan = planner.plan(at(12, 0), Viewport::new(600, 40));
        assert_eq!(plan.labels().count(), 0);
        assert!(plan.ticks.len() > 1);
    }

    #[test]
    fn unresolvable_unit_size_keeps_previous_granularity() {
        let mut planner = planner(60);
        let before = planner.granularity();
        planner.set_unit_size(7).expect("non-zero unit size");
        assert_eq!(planner.granularity(), before);
        assert_eq!(planner.unit_size(), 7);
    }
}
