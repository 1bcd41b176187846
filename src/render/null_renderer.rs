use crate::error::RulerResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> RulerResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.commands.len();
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
