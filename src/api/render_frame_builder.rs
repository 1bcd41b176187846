use crate::core::Viewport;
use crate::render::{LinePrimitive, RectPrimitive, RenderFrame, TextPrimitive, TrianglePrimitive};

use super::{HighlightSpan, RulerStyle, TickPlan};

/// Inputs of one draw pass, already laid out in pixel space.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub viewport: Viewport,
    pub style: &'a RulerStyle,
    pub ticks: &'a TickPlan,
    pub highlights: &'a [HighlightSpan],
    pub hover_x: Option<f64>,
}

/// Paints, back to front: background, scale strip, ticks and labels,
/// highlight spans, center indicator, hover indicator.
#[must_use]
pub fn build_ruler_frame(inputs: FrameInputs<'_>) -> RenderFrame {
    let FrameInputs {
        viewport,
        style,
        ticks,
        highlights,
        hover_x,
    } = inputs;
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let scale_line_height = style.scale_line_height.resolve(viewport);
    let label_baseline = scale_line_height + style.label_baseline_offset_px;

    let mut frame = RenderFrame::new(viewport);
    frame.push_rect(RectPrimitive::new(0.0, 0.0, width, height, style.background_color));
    frame.push_rect(RectPrimitive::new(
        0.0,
        0.0,
        width,
        scale_line_height,
        style.scale_band_color,
    ));

    for tick in &ticks.ticks {
        frame.push_line(LinePrimitive::vertical(
            tick.x,
            0.0,
            tick.height,
            style.tick_width_px,
            style.tick_color,
        ));
        if let Some(label) = &tick.label {
            frame.push_text(TextPrimitive::new(
                label.clone(),
                tick.x - style.label_offset_x_px,
                label_baseline,
                style.text_color,
            ));
        }
    }

    for span in highlights {
        frame.push_rect(RectPrimitive::new(
            span.start_px,
            0.0,
            span.width_px,
            scale_line_height,
            span.color,
        ));
    }

    let center_x = viewport.center_x();
    frame.push_line(LinePrimitive::vertical(
        center_x,
        0.0,
        scale_line_height * 2.0,
        style.center_line_width_px,
        style.center_line_color,
    ));
    let triangle_height = style.center_triangle_height.resolve(scale_line_height);
    if triangle_height > 0.0 {
        frame.push_triangle(TrianglePrimitive::inverted(
            center_x,
            0.0,
            triangle_height,
            style.center_line_color,
        ));
    }

    if let Some(x) = hover_x {
        frame.push_line(LinePrimitive::vertical(
            x,
            0.0,
            height,
            style.hover_line_width_px,
            style.hover_line_color,
        ));
    }

    frame
}
