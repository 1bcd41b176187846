use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{RulerError, RulerResult};

/// Identifier of one rung of the ladder, finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GranularityName {
    Short,
    Medium,
    Long,
}

/// Smallest step width; bounds the tick count of one pass by the viewport width.
pub const MIN_PX_PER_UNIT: f64 = 0.5;

/// Pixel scale of one step plus how many steps form a major tick group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Granularity {
    pub name: GranularityName,
    pub px_per_unit: f64,
    pub group_interval: u32,
}

impl Granularity {
    pub fn new(name: GranularityName, px_per_unit: f64, group_interval: u32) -> RulerResult<Self> {
        let granularity = Self {
            name,
            px_per_unit,
            group_interval,
        };
        granularity.validate()?;
        Ok(granularity)
    }

    pub fn validate(self) -> RulerResult<()> {
        if !self.px_per_unit.is_finite() || self.px_per_unit < MIN_PX_PER_UNIT {
            return Err(RulerError::InvalidData(format!(
                "granularity `{:?}` pixels per unit must be finite and >= {MIN_PX_PER_UNIT}",
                self.name
            )));
        }
        if self.group_interval == 0 {
            return Err(RulerError::InvalidData(format!(
                "granularity `{:?}` group interval must be >= 1",
                self.name
            )));
        }
        Ok(())
    }
}

/// Wheel-driven movement through the unit-size set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    /// Finer unit size, lower set index.
    In,
    /// Coarser unit size, higher set index.
    Out,
}

impl ZoomDirection {
    /// Negative wheel deltas zoom in; zero and positive deltas zoom out.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }
}

/// Ordered set of unit sizes the ruler may step through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSizeSet {
    sizes: SmallVec<[u32; 8]>,
}

impl UnitSizeSet {
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> RulerResult<Self> {
        let set = Self {
            sizes: sizes.into_iter().collect(),
        };
        set.validate()?;
        Ok(set)
    }

    pub(crate) fn from_sizes_unchecked(sizes: impl IntoIterator<Item = u32>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
        }
    }

    pub fn validate(&self) -> RulerResult<()> {
        if self.sizes.is_empty() {
            return Err(RulerError::InvalidData(
                "unit-size set must not be empty".to_owned(),
            ));
        }
        if self.sizes.contains(&0) {
            return Err(RulerError::InvalidData(
                "unit sizes must be > 0".to_owned(),
            ));
        }
        if self.sizes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(RulerError::InvalidData(
                "unit sizes must be strictly ascending".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.sizes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, unit_size: u32) -> bool {
        self.sizes.contains(&unit_size)
    }

    #[must_use]
    pub fn index_of(&self, unit_size: u32) -> Option<usize> {
        self.sizes.iter().position(|size| *size == unit_size)
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.sizes.get(index).copied()
    }

    /// Moves one index in `direction`, clamped to the set bounds.
    ///
    /// Returns `None` when the clamp leaves the index where it was.
    #[must_use]
    pub fn step(&self, index: usize, direction: ZoomDirection) -> Option<usize> {
        let last_index = self.sizes.len().saturating_sub(1);
        let next = match direction {
            ZoomDirection::In => index.saturating_sub(1),
            ZoomDirection::Out => (index + 1).min(last_index),
        };
        (next != index).then_some(next)
    }
}

/// Granularities in priority order plus the unit boundaries major ticks
/// should land on (e.g. minute-to-hour and minute-to-day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepLadder {
    steps: SmallVec<[Granularity; 4]>,
    boundary_nodes: SmallVec<[u32; 4]>,
}

impl StepLadder {
    pub fn new(
        steps: impl IntoIterator<Item = Granularity>,
        boundary_nodes: impl IntoIterator<Item = u32>,
    ) -> RulerResult<Self> {
        let ladder = Self {
            steps: steps.into_iter().collect(),
            boundary_nodes: boundary_nodes.into_iter().collect(),
        };
        ladder.validate()?;
        Ok(ladder)
    }

    pub(crate) fn from_parts_unchecked(
        steps: impl IntoIterator<Item = Granularity>,
        boundary_nodes: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            steps: steps.into_iter().collect(),
            boundary_nodes: boundary_nodes.into_iter().collect(),
        }
    }

    pub fn validate(&self) -> RulerResult<()> {
        if self.steps.is_empty() {
            return Err(RulerError::InvalidData(
                "step ladder must contain at least one granularity".to_owned(),
            ));
        }
        for step in &self.steps {
            step.validate()?;
        }
        if self.boundary_nodes.is_empty() {
            return Err(RulerError::InvalidData(
                "step ladder must contain at least one boundary node".to_owned(),
            ));
        }
        if self.boundary_nodes.contains(&0)
            || self.boundary_nodes.windows(2).any(|pair| pair[0] >= pair[1])
        {
            return Err(RulerError::InvalidData(
                "boundary nodes must be > 0 and strictly ascending".to_owned(),
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn steps(&self) -> &[Granularity] {
        &self.steps
    }

    #[must_use]
    pub fn boundary_nodes(&self) -> &[u32] {
        &self.boundary_nodes
    }

    /// Smallest boundary node; unit sizes up to it are labeled with time of day.
    #[must_use]
    pub fn first_boundary(&self) -> u32 {
        self.boundary_nodes.first().copied().unwrap_or(0)
    }

    #[must_use]
    pub fn coarsest(&self) -> Option<Granularity> {
        self.steps.last().copied()
    }

    /// Picks the finest granularity whose major-tick span divides evenly into
    /// the next boundary node.
    #[must_use]
    pub fn resolve(&self, unit_size: u32) -> Option<Granularity> {
        if self.boundary_nodes.last() == Some(&unit_size) {
            return self.coarsest();
        }

        self.steps.iter().copied().find(|step| {
            let divisor = u64::from(step.group_interval) * u64::from(unit_size);
            if divisor == 0 {
                return false;
            }
            self.boundary_nodes
                .iter()
                .map(|node| u64::from(*node))
                .find(|node| *node >= divisor)
                .is_some_and(|node| node % divisor == 0)
        })
    }
}
