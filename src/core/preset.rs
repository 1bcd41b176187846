use serde::{Deserialize, Serialize};

use crate::core::step_ladder::{Granularity, GranularityName, StepLadder, UnitSizeSet};
use crate::core::TimeUnit;

/// `strftime` patterns for tick labels.
///
/// `fine` is used while the unit size is at most the first boundary node,
/// `coarse` beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelFormat {
    pub fine: String,
    pub coarse: String,
}

impl LabelFormat {
    #[must_use]
    pub fn new(fine: impl Into<String>, coarse: impl Into<String>) -> Self {
        Self {
            fine: fine.into(),
            coarse: coarse.into(),
        }
    }
}

/// Built-in ladder configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulerPreset {
    /// Minute-based ruler spanning one minute to one hour per step.
    Minutes,
    /// Second-based media ruler, five pixels per second at the finest zoom.
    Seconds,
}

const SHORT: Granularity = Granularity {
    name: GranularityName::Short,
    px_per_unit: 5.0,
    group_interval: 5,
};
const MEDIUM: Granularity = Granularity {
    name: GranularityName::Medium,
    px_per_unit: 20.0,
    group_interval: 3,
};
const LONG: Granularity = Granularity {
    name: GranularityName::Long,
    px_per_unit: 30.0,
    group_interval: 2,
};

impl RulerPreset {
    #[must_use]
    pub fn time_unit(self) -> TimeUnit {
        match self {
            Self::Minutes => TimeUnit::Minute,
            Self::Seconds => TimeUnit::Second,
        }
    }

    #[must_use]
    pub fn ladder(self) -> StepLadder {
        let nodes: [u32; 2] = match self {
            Self::Minutes => [60, 1440],
            Self::Seconds => [60, 3600],
        };
        StepLadder::from_parts_unchecked([SHORT, MEDIUM, LONG], nodes)
    }

    #[must_use]
    pub fn unit_sizes(self) -> UnitSizeSet {
        UnitSizeSet::from_sizes_unchecked([1, 5, 10, 15, 20, 30, 60])
    }

    #[must_use]
    pub fn default_unit_size(self) -> u32 {
        match self {
            Self::Minutes => 60,
            Self::Seconds => 1,
        }
    }

    #[must_use]
    pub fn label_format(self) -> LabelFormat {
        match self {
            Self::Minutes => LabelFormat::new("%H:%M", "%m/%d"),
            Self::Seconds => LabelFormat::new("%H:%M:%S", "%H:%M"),
        }
    }
}
