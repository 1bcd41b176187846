mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DrawCommand, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextPrimitive, TrianglePrimitive};

use crate::error::RulerResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from ruler layout and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()>;
}
