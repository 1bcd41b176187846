use chrono::{Local, NaiveDateTime};
use tracing::{debug, trace, warn};

use crate::core::{CoordinateMapper, Granularity, UnitSizeSet, Viewport};
use crate::error::{RulerError, RulerResult};
use crate::extensions::RulerNotifications;
use crate::interaction::{InteractionMode, InteractionState};
use crate::render::{Color, NullRenderer, RenderFrame, Renderer};

use super::render_frame_builder::{FrameInputs, build_ruler_frame};
use super::validation::{validate_config, validate_intervals, validate_style};
use super::{
    ClickRecenterScale, HighlightInterval, HoverBand, RulerStyle, TickLayout, TickPlan,
    TickPlanner, TimeRulerConfig, project_highlights,
};

/// Drawing surface lifecycle. Frames are always built; they are only handed
/// to a backend while attached.
#[derive(Debug)]
pub(super) enum Surface<R> {
    Detached,
    Attached(R),
}

/// Main facade consumed by host shells.
///
/// `TimeRuler` owns the step ladder, reference time, active unit size and
/// pointer session. Every state change builds a fresh [`RenderFrame`] and
/// publishes notifications after the frame exists.
#[derive(Debug)]
pub struct TimeRuler<R: Renderer = NullRenderer> {
    pub(super) surface: Surface<R>,
    pub(super) viewport: Viewport,
    pub(super) unit_sizes: UnitSizeSet,
    pub(super) planner: TickPlanner,
    pub(super) reference_time: NaiveDateTime,
    pub(super) transient_drag_time: Option<NaiveDateTime>,
    pub(super) interaction: InteractionState,
    pub(super) highlights: Vec<HighlightInterval>,
    pub(super) style: RulerStyle,
    pub(super) hover_band: HoverBand,
    pub(super) click_recenter_scale: ClickRecenterScale,
    pub(super) notifications: RulerNotifications,
    pub(super) last_frame: Option<RenderFrame>,
    pub(super) render_count: u64,
}

fn tick_layout(style: RulerStyle) -> TickLayout {
    TickLayout {
        scale_line_height: style.scale_line_height,
        minor_tick_ratio: style.minor_tick_ratio,
        minimum_text_interval_px: style.minimum_text_interval_px,
    }
}

impl<R: Renderer> TimeRuler<R> {
    /// Creates a ruler with no drawing surface attached yet.
    pub fn new(config: TimeRulerConfig) -> RulerResult<Self> {
        validate_config(&config)?;

        let planner = TickPlanner::new(
            config.ladder,
            config.time_unit,
            config.unit_size,
            config.label_format,
            tick_layout(config.style),
        )?;
        let reference_time = config
            .reference_time
            .unwrap_or_else(|| Local::now().naive_local());
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            unit_size = config.unit_size,
            %reference_time,
            "initialize time ruler"
        );

        Ok(Self {
            surface: Surface::Detached,
            viewport: config.viewport,
            unit_sizes: config.unit_sizes,
            planner,
            reference_time,
            transient_drag_time: None,
            interaction: InteractionState::new(config.click_threshold_px),
            highlights: Vec::new(),
            style: config.style,
            hover_band: config.hover_band,
            click_recenter_scale: config.click_recenter_scale,
            notifications: RulerNotifications::default(),
            last_frame: None,
            render_count: 0,
        })
    }

    /// Creates a ruler and attaches `renderer` without drawing yet.
    pub fn with_renderer(renderer: R, config: TimeRulerConfig) -> RulerResult<Self> {
        let mut ruler = Self::new(config)?;
        ruler.surface = Surface::Attached(renderer);
        Ok(ruler)
    }

    /// Attaches a backend and draws the current state onto it.
    ///
    /// Returns the previously attached backend, if any.
    pub fn attach(&mut self, renderer: R) -> RulerResult<Option<R>> {
        let previous = self.detach();
        self.surface = Surface::Attached(renderer);
        self.render()?;
        Ok(previous)
    }

    pub fn detach(&mut self) -> Option<R> {
        match std::mem::replace(&mut self.surface, Surface::Detached) {
            Surface::Attached(renderer) => Some(renderer),
            Surface::Detached => None,
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        matches!(self.surface, Surface::Attached(_))
    }

    #[must_use]
    pub fn renderer(&self) -> Option<&R> {
        match &self.surface {
            Surface::Attached(renderer) => Some(renderer),
            Surface::Detached => None,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn reference_time(&self) -> NaiveDateTime {
        self.reference_time
    }

    /// Provisional reference time of an active drag.
    #[must_use]
    pub fn transient_drag_time(&self) -> Option<NaiveDateTime> {
        self.transient_drag_time
    }

    #[must_use]
    pub fn unit_size(&self) -> u32 {
        self.planner.unit_size()
    }

    #[must_use]
    pub fn unit_sizes(&self) -> &UnitSizeSet {
        &self.unit_sizes
    }

    #[must_use]
    pub fn granularity(&self) -> Granularity {
        self.planner.granularity()
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover_x(&self) -> Option<f64> {
        self.interaction.hover_x()
    }

    #[must_use]
    pub fn style(&self) -> RulerStyle {
        self.style
    }

    #[must_use]
    pub fn highlighted_intervals(&self) -> &[HighlightInterval] {
        &self.highlights
    }

    /// Frame of the latest render pass, attached or not.
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    #[must_use]
    pub fn notifications(&self) -> &RulerNotifications {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut RulerNotifications {
        &mut self.notifications
    }

    /// Mapper centered on the committed reference time.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.planner.mapper(self.reference_time, self.viewport)
    }

    pub fn time_at(&self, pixel_x: f64) -> RulerResult<NaiveDateTime> {
        self.mapper().time_at(pixel_x)
    }

    #[must_use]
    pub fn pixel_of(&self, instant: NaiveDateTime) -> f64 {
        self.mapper().pixel_of(instant)
    }

    #[must_use]
    pub fn tick_plan(&self, reference: NaiveDateTime) -> TickPlan {
        self.planner.plan(reference, self.viewport)
    }

    pub fn set_reference_time(&mut self, instant: NaiveDateTime) -> RulerResult<()> {
        debug!(%instant, "set reference time");
        self.reference_time = instant;
        self.render_at(instant)
    }

    /// Replaces the highlight set wholesale. `default_color`, when given,
    /// becomes the fill of intervals without their own color.
    pub fn set_highlighted_intervals(
        &mut self,
        intervals: Vec<HighlightInterval>,
        default_color: Option<Color>,
    ) -> RulerResult<()> {
        validate_intervals(&intervals, default_color)?;
        debug!(count = intervals.len(), "set highlighted intervals");
        self.highlights = intervals;
        if let Some(color) = default_color {
            self.style.highlight_color = color;
        }
        self.render_at(self.reference_time)
    }

    pub fn set_unit_size(&mut self, unit_size: u32) -> RulerResult<()> {
        if !self.unit_sizes.contains(unit_size) {
            return Err(RulerError::InvalidUnitSize { value: unit_size });
        }
        debug!(unit_size, "set unit size");
        self.planner.set_unit_size(unit_size)?;
        self.render_at(self.reference_time)
    }

    pub fn set_style(&mut self, style: RulerStyle) -> RulerResult<()> {
        validate_style(style)?;
        self.style = style;
        self.planner.set_layout(tick_layout(style));
        self.render()
    }

    /// Redraws the current state: the transient drag time while dragging,
    /// the reference time otherwise.
    pub fn render(&mut self) -> RulerResult<()> {
        let at = self.transient_drag_time.unwrap_or(self.reference_time);
        self.render_at(at)
    }

    pub(super) fn render_at(&mut self, at: NaiveDateTime) -> RulerResult<()> {
        let ticks = self.planner.plan(at, self.viewport);
        let mapper = self.planner.mapper(at, self.viewport);
        let spans = project_highlights(&self.highlights, mapper, self.style.highlight_color);
        let frame = build_ruler_frame(FrameInputs {
            viewport: self.viewport,
            style: &self.style,
            ticks: &ticks,
            highlights: &spans,
            hover_x: self.interaction.hover_x(),
        });
        self.render_count += 1;
        trace!(
            %at,
            ticks = ticks.ticks.len(),
            commands = frame.commands.len(),
            attached = self.is_attached(),
            "render pass"
        );

        let result = match &mut self.surface {
            Surface::Attached(renderer) => renderer.render(&frame),
            Surface::Detached => Ok(()),
        };
        self.last_frame = Some(frame);
        if let Err(err) = &result {
            warn!(error = %err, "renderer rejected ruler frame");
        }
        result
    }
}
