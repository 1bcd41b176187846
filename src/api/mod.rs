mod engine;
mod engine_config;
mod highlight_overlay;
mod interaction_controller;
mod json_contract;
mod render_frame_builder;
mod tick_plan;
mod validation;

pub use engine::TimeRuler;
pub use engine_config::{
    ClickRecenterScale, HoverBand, IndicatorHeight, RulerStyle, ScaleLineHeight, TimeRulerConfig,
};
pub use highlight_overlay::{HighlightInterval, HighlightSpan, project_highlights};
pub use interaction_controller::Transition;
pub use json_contract::{RULER_CONFIG_JSON_SCHEMA_V1, RulerConfigJsonContractV1};
pub use render_frame_builder::{FrameInputs, build_ruler_frame};
pub use tick_plan::{TickKind, TickLayout, TickMark, TickPlan, TickPlanner};
