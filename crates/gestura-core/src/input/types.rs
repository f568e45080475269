use gestura_math::Vec2;
use smallvec::SmallVec;
use web_time::Instant;

use crate::gesture_constants::{WHEEL_LINE_HEIGHT, WHEEL_PAGE_HEIGHT};

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerType {
    #[default]
    Mouse,
    Touch,
    Pen,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
    Back = 3,
    Forward = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const PRIMARY: Self = Self(1);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn remove(&mut self, button: PointerButton) {
        self.0 &= !(1 << (button as u8));
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bitset, bit `n` set for button `n`.
    pub fn bits(&self) -> u8 {
        self.0
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Keyboard modifier state captured with each input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// A pointer sample delivered by the host, either on the element or on the
/// window while a drag is tracked there.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub pointer_type: PointerType,
    pub position: Vec2,
    pub buttons: PointerButtons,
    pub modifiers: Modifiers,
    pub time: Instant,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Vec2, time: Instant) -> Self {
        Self {
            id: 0,
            kind,
            pointer_type: PointerType::Mouse,
            position,
            buttons: match kind {
                PointerEventKind::Down | PointerEventKind::Move => PointerButtons::PRIMARY,
                _ => PointerButtons::NONE,
            },
            modifiers: Modifiers::NONE,
            time,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_pointer_type(mut self, pointer_type: PointerType) -> Self {
        self.pointer_type = pointer_type;
        self
    }

    /// Set the buttons state for this event
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// Unit of the deltas carried by a [`WheelEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaMode {
    pub fn scale(self) -> f32 {
        match self {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => WHEEL_LINE_HEIGHT,
            DeltaMode::Page => WHEEL_PAGE_HEIGHT,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WheelEvent {
    pub position: Vec2,
    pub delta: Vec2,
    pub delta_mode: DeltaMode,
    pub buttons: PointerButtons,
    pub modifiers: Modifiers,
    pub time: Instant,
}

impl WheelEvent {
    pub fn new(delta: Vec2, time: Instant) -> Self {
        Self {
            position: Vec2::ZERO,
            delta,
            delta_mode: DeltaMode::Pixel,
            buttons: PointerButtons::NONE,
            modifiers: Modifiers::NONE,
            time,
        }
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_delta_mode(mut self, delta_mode: DeltaMode) -> Self {
        self.delta_mode = delta_mode;
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Delta converted to pixels.
    pub fn pixel_delta(&self) -> Vec2 {
        self.delta * self.delta_mode.scale()
    }
}

/// Scroll position of the element after the host scrolled it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollEvent {
    pub scroll: Vec2,
    pub modifiers: Modifiers,
    pub time: Instant,
}

impl ScrollEvent {
    pub fn new(scroll: Vec2, time: Instant) -> Self {
        Self {
            scroll,
            modifiers: Modifiers::NONE,
            time,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: PointerId,
    pub position: Vec2,
}

impl TouchPoint {
    pub const fn new(id: PointerId, position: Vec2) -> Self {
        Self { id, position }
    }
}

/// Multi-touch sample. `touches` lists every contact still on the element,
/// `changed` the contacts this event is about.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    pub phase: TouchPhase,
    pub touches: SmallVec<[TouchPoint; 4]>,
    pub changed: SmallVec<[PointerId; 4]>,
    pub modifiers: Modifiers,
    pub time: Instant,
}

impl TouchEvent {
    pub fn new(phase: TouchPhase, touches: &[TouchPoint], time: Instant) -> Self {
        Self {
            phase,
            touches: touches.iter().copied().collect(),
            changed: touches.iter().map(|t| t.id).collect(),
            modifiers: Modifiers::NONE,
            time,
        }
    }

    pub fn with_changed(mut self, changed: &[PointerId]) -> Self {
        self.changed = changed.iter().copied().collect();
        self
    }

    pub fn touch(&self, id: PointerId) -> Option<&TouchPoint> {
        self.touches.iter().find(|t| t.id == id)
    }
}

/// The raw event a gesture state was last updated from.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Wheel(WheelEvent),
    Scroll(ScrollEvent),
    Touch(TouchEvent),
}

impl InputEvent {
    pub fn time(&self) -> Instant {
        match self {
            InputEvent::Pointer(e) => e.time,
            InputEvent::Wheel(e) => e.time,
            InputEvent::Scroll(e) => e.time,
            InputEvent::Touch(e) => e.time,
        }
    }

    pub fn modifiers(&self) -> Modifiers {
        match self {
            InputEvent::Pointer(e) => e.modifiers,
            InputEvent::Wheel(e) => e.modifiers,
            InputEvent::Scroll(e) => e.modifiers,
            InputEvent::Touch(e) => e.modifiers,
        }
    }
}
