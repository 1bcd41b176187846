use serde::{Deserialize, Serialize};

/// Pointer-distance threshold under which a press/release pair is a click.
pub const DEFAULT_CLICK_THRESHOLD_PX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// Pointer inside the interactive band with no button pressed.
    Hovering,
    /// Button pressed, tracking the horizontal delta since the press.
    Dragging,
}

/// Status broadcast after each handled gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerStatus {
    MouseDown,
    MouseUp,
    MouseOut,
    MouseMove,
    Wheel,
    Click,
}

impl PointerStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::MouseOut => "mouseout",
            Self::MouseMove => "mousemove",
            Self::Wheel => "wheel",
            Self::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Out,
}

/// Raw pointer input in surface-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: f64,
}

impl PointerEvent {
    #[must_use]
    pub fn new(kind: PointerEventKind, x: f64, y: f64, timestamp_ms: f64) -> Self {
        Self {
            kind,
            x,
            y,
            timestamp_ms,
        }
    }

    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Down, x, y, 0.0)
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Move, x, y, 0.0)
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Up, x, y, 0.0)
    }

    #[must_use]
    pub fn out(x: f64, y: f64) -> Self {
        Self::new(PointerEventKind::Out, x, y, 0.0)
    }

    #[must_use]
    pub fn at_timestamp(mut self, timestamp_ms: f64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }
}

/// Per-gesture state between a press and its release or cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSession {
    pub down_x: f64,
    pub down_y: f64,
    pub down_timestamp_ms: f64,
    pub inside_band: bool,
}

/// What a pointer event means for the ruler, before any time math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Pressed,
    /// `pixel_offset` is `down_x - x`: positive when dragged to the left.
    DragMoved { pixel_offset: f64 },
    Clicked { x: f64 },
    /// `pixel_offset` is `down_x - x` at release.
    Released { pixel_offset: f64 },
    Cancelled,
    Hovered { x: f64 },
    HoverLeft,
    LeftSurface,
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    session: Option<PointerSession>,
    hover_x: Option<f64>,
    click_threshold_px: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(DEFAULT_CLICK_THRESHOLD_PX)
    }
}

impl InteractionState {
    #[must_use]
    pub fn new(click_threshold_px: f64) -> Self {
        Self {
            mode: InteractionMode::Idle,
            session: None,
            hover_x: None,
            click_threshold_px,
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn session(self) -> Option<PointerSession> {
        self.session
    }

    /// Column of the hover indicator, present only while hovering.
    #[must_use]
    pub fn hover_x(self) -> Option<f64> {
        self.hover_x
    }

    #[must_use]
    pub fn click_threshold_px(self) -> f64 {
        self.click_threshold_px
    }

    /// Advances the state machine. `inside_band` tells whether the event
    /// position lies in the hover-sensitive band of the surface.
    pub fn apply(&mut self, event: PointerEvent, inside_band: bool) -> Gesture {
        match event.kind {
            PointerEventKind::Down => self.on_down(event, inside_band),
            PointerEventKind::Move => self.on_move(event, inside_band),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Out => self.on_out(),
        }
    }

    fn on_down(&mut self, event: PointerEvent, inside_band: bool) -> Gesture {
        self.session = Some(PointerSession {
            down_x: event.x,
            down_y: event.y,
            down_timestamp_ms: event.timestamp_ms,
            inside_band,
        });
        self.hover_x = None;
        self.mode = InteractionMode::Dragging;
        Gesture::Pressed
    }

    fn on_move(&mut self, event: PointerEvent, inside_band: bool) -> Gesture {
        if let Some(session) = self.session {
            return Gesture::DragMoved {
                pixel_offset: session.down_x - event.x,
            };
        }

        if inside_band {
            self.mode = InteractionMode::Hovering;
            self.hover_x = Some(event.x);
            Gesture::Hovered { x: event.x }
        } else {
            self.mode = InteractionMode::Idle;
            self.hover_x = None;
            Gesture::HoverLeft
        }
    }

    fn on_up(&mut self, event: PointerEvent) -> Gesture {
        let Some(session) = self.session.take() else {
            return Gesture::Ignored;
        };
        self.mode = InteractionMode::Idle;
        if (event.x - session.down_x).abs() < self.click_threshold_px {
            Gesture::Clicked { x: event.x }
        } else {
            Gesture::Released {
                pixel_offset: session.down_x - event.x,
            }
        }
    }

    fn on_out(&mut self) -> Gesture {
        self.mode = InteractionMode::Idle;
        self.hover_x = None;
        if self.session.take().is_some() {
            Gesture::Cancelled
        } else {
            Gesture::LeftSurface
        }
    }
}
