use tracing::{debug, trace};

use crate::core::{Viewport, ZoomDirection};
use crate::core::primitives::shift_by_units;
use crate::error::{RulerError, RulerResult};
use crate::extensions::RulerNotification;
use crate::interaction::{Gesture, InteractionMode, PointerEvent, PointerStatus};
use crate::render::Renderer;

use super::{ClickRecenterScale, HoverBand, TimeRuler};

/// Observable result of one handled input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub mode: InteractionMode,
    pub rendered: bool,
    pub status: Option<PointerStatus>,
    pub notification: Option<RulerNotification>,
}

impl Transition {
    fn unchanged(mode: InteractionMode) -> Self {
        Self {
            mode,
            rendered: false,
            status: None,
            notification: None,
        }
    }
}

impl<R: Renderer> TimeRuler<R> {
    /// Feeds one pointer event through the state machine.
    ///
    /// The frame is rendered first; the status and time notifications are
    /// published afterwards, in that order. A backend error is returned after
    /// the notifications went out.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> RulerResult<Transition> {
        if !event.x.is_finite() || !event.y.is_finite() {
            return Err(RulerError::InvalidData(
                "pointer coordinates must be finite".to_owned(),
            ));
        }

        let inside_band = self.is_inside_hover_band(event.y);
        let gesture = self.interaction.apply(event, inside_band);
        trace!(?gesture, kind = ?event.kind, x = event.x, "pointer event");

        let (status, notification, at) = match gesture {
            Gesture::Ignored => return Ok(Transition::unchanged(self.interaction.mode())),
            Gesture::Pressed => {
                self.transient_drag_time = None;
                (Some(PointerStatus::MouseDown), None, self.reference_time)
            }
            Gesture::DragMoved { pixel_offset } => {
                let offset = self.mapper().offset_units(pixel_offset)?;
                let transient = shift_by_units(self.reference_time, self.planner.unit(), offset);
                self.transient_drag_time = Some(transient);
                (
                    Some(PointerStatus::MouseMove),
                    Some(RulerNotification::Hovered(transient)),
                    transient,
                )
            }
            Gesture::Clicked { x } => {
                self.transient_drag_time = None;
                let mapper = self.mapper();
                let px_per_unit = match self.click_recenter_scale {
                    ClickRecenterScale::ActiveGranularity => mapper.granularity().px_per_unit,
                    ClickRecenterScale::FixedPixelsPerUnit(px) => px,
                };
                let offset = mapper.offset_units_at_scale(x - mapper.center_x(), px_per_unit)?;
                self.reference_time =
                    shift_by_units(self.reference_time, self.planner.unit(), offset);
                (
                    Some(PointerStatus::Click),
                    Some(RulerNotification::TimeChanged(self.reference_time)),
                    self.reference_time,
                )
            }
            Gesture::Released { pixel_offset } => {
                let committed = match self.transient_drag_time.take() {
                    Some(transient) => transient,
                    None => {
                        let offset = self.mapper().offset_units(pixel_offset)?;
                        shift_by_units(self.reference_time, self.planner.unit(), offset)
                    }
                };
                self.reference_time = committed;
                (
                    Some(PointerStatus::MouseUp),
                    Some(RulerNotification::TimeChanged(committed)),
                    committed,
                )
            }
            Gesture::Cancelled => {
                self.transient_drag_time = None;
                (Some(PointerStatus::MouseOut), None, self.reference_time)
            }
            Gesture::LeftSurface => (Some(PointerStatus::MouseOut), None, self.reference_time),
            Gesture::Hovered { x } => {
                let hovered = self.time_at(x)?;
                (
                    None,
                    Some(RulerNotification::Hovered(hovered)),
                    self.reference_time,
                )
            }
            Gesture::HoverLeft => (None, None, self.reference_time),
        };

        // State is already committed; observers hear about it even when the
        // backend rejects the frame.
        let rendered = self.render_at(at);
        self.notifications.publish(status, notification);
        rendered?;
        Ok(Transition {
            mode: self.interaction.mode(),
            rendered: true,
            status,
            notification,
        })
    }

    /// Steps the unit size one index per wheel event; negative deltas zoom in.
    pub fn on_wheel_event(&mut self, delta_y: f64) -> RulerResult<Transition> {
        if !delta_y.is_finite() {
            return Err(RulerError::InvalidData(
                "wheel delta must be finite".to_owned(),
            ));
        }

        let mode = self.interaction.mode();
        let direction = ZoomDirection::from_wheel_delta(delta_y);
        let Some(old_index) = self.unit_sizes.index_of(self.unit_size()) else {
            return Ok(Transition::unchanged(mode));
        };
        let Some(unit_size) = self
            .unit_sizes
            .step(old_index, direction)
            .and_then(|index| self.unit_sizes.get(index))
        else {
            return Ok(Transition::unchanged(mode));
        };

        debug!(
            from = self.unit_size(),
            to = unit_size,
            ?direction,
            "wheel zoom"
        );
        self.planner.set_unit_size(unit_size)?;
        let rendered = self.render_at(self.reference_time);

        let status = Some(PointerStatus::Wheel);
        self.notifications.publish(status, None);
        rendered?;
        Ok(Transition {
            mode,
            rendered: true,
            status,
            notification: None,
        })
    }

    /// Adopts the host surface size and redraws. Zero sizes are accepted and
    /// degrade to a frame without visible ticks.
    pub fn on_resize(&mut self, viewport: Viewport) -> RulerResult<()> {
        trace!(
            width = viewport.width,
            height = viewport.height,
            "resize"
        );
        self.viewport = viewport;
        self.render()
    }

    fn is_inside_hover_band(&self, y: f64) -> bool {
        match self.hover_band {
            HoverBand::FullSurface => true,
            HoverBand::BelowScale => y > self.style.scale_line_height.resolve(self.viewport),
        }
    }
}
