use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::RulerResult;
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive, TrianglePrimitive};

/// One draw instruction; backends execute them in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Triangle(TrianglePrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> RulerResult<()> {
        match self {
            Self::Rect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Triangle(triangle) => triangle.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one ruler draw pass.
///
/// Commands are ordered back to front: later commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_triangle(&mut self, triangle: TrianglePrimitive) {
        self.commands.push(DrawCommand::Triangle(triangle));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Rect(rect) => Some(rect),
            _ => None,
        })
    }

    pub fn triangles(&self) -> impl Iterator<Item = &TrianglePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Triangle(triangle) => Some(triangle),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    /// Checks every command. A zero-sized viewport is allowed and simply
    /// draws nothing visible.
    pub fn validate(&self) -> RulerResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
