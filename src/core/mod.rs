pub mod coordinate_mapper;
pub mod preset;
pub mod primitives;
pub mod step_ladder;
pub mod types;

pub use coordinate_mapper::CoordinateMapper;
pub use preset::{LabelFormat, RulerPreset};
pub use step_ladder::{
    Granularity, GranularityName, MIN_PX_PER_UNIT, StepLadder, UnitSizeSet, ZoomDirection,
};
pub use types::{TimeUnit, Viewport};
