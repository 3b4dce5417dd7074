//! Input event types delivered by the embedding shell.
//!
//! The crate has no windowing dependency; the rendering surface translates
//! its native pointer/keyboard/wheel events into these structs and feeds
//! them to the [`crate::app::Editor`] handlers. Positions are screen pixels
//! relative to the canvas area's top-left corner.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Modifier keys held during an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    /// Cmd on macOS, Win on Windows
    pub platform: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }

    pub fn platform() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    /// Left-drag on empty canvas pans instead of marquee-selecting.
    pub fn pans(&self) -> bool {
        self.shift
    }

    /// Clicking and marquee-dragging toggle membership instead of
    /// replacing the selection.
    pub fn toggles_selection(&self) -> bool {
        self.platform || self.control
    }

    /// Wheel zooms instead of scrolling.
    pub fn zooms(&self) -> bool {
        self.platform || self.control
    }

    /// Shortcut chords (undo, copy, paste).
    pub fn command(&self) -> bool {
        self.platform || self.control
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MouseDownEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
    /// 1 for a plain press, 2 for the press of a double-click
    pub click_count: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct MouseMoveEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

#[derive(Clone, Copy, Debug)]
pub struct MouseUpEvent {
    pub position: Point,
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

/// A completed click (down + up without dragging), delivered after the
/// corresponding [`MouseUpEvent`].
#[derive(Clone, Copy, Debug)]
pub struct ClickEvent {
    pub position: Point,
    pub modifiers: Modifiers,
}

/// Wheel movement, either precise pixels (trackpads) or lines (wheels).
#[derive(Clone, Copy, Debug)]
pub enum ScrollDelta {
    Pixels(Point),
    Lines(Point),
}

#[derive(Clone, Copy, Debug)]
pub struct ScrollWheelEvent {
    pub position: Point,
    pub delta: ScrollDelta,
    pub modifiers: Modifiers,
}

/// Keys the editor reacts to. Printable input arrives as `Character`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Delete,
    Escape,
    Enter,
    Character(char),
}

#[derive(Clone, Copy, Debug)]
pub struct KeyDownEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}
