//! Input state machine - unified state management for all interactions.
//!
//! A single explicit state machine instead of scattered boolean flags,
//! making impossible states unrepresentable: the editor is never both
//! panning and resizing, and entering a mode discards any residue of the
//! previous one.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Panning           (middle button, or left button + pan modifier)
//! Idle -> DraggingItems     (left button on an item body)
//! Idle -> ResizingItem      (left button on the sole selected item's handle)
//! Idle -> MarqueeSelecting  (left button on empty canvas)
//! Idle -> EditingLabel      (double-click on an item body)
//!
//! Any but EditingLabel -> Idle   (mouse up / mouse leave)
//! EditingLabel -> Idle           (commit or cancel)
//! ```

use crate::types::Point;
use std::collections::HashSet;

/// The editor's current interaction mode.
#[derive(Clone, Debug, Default)]
pub enum InputState {
    /// No active input operation
    #[default]
    Idle,

    /// Canvas panning (middle button or pan-modifier drag)
    Panning {
        /// Last pointer position, for per-event movement deltas
        last_pos: Point,
    },

    /// Dragging every selected item
    DraggingItems {
        /// The item under the cursor when the drag started
        primary_item: u64,
        /// Last pointer position in canvas space; each move applies the
        /// incremental delta so group spacing stays exact
        last_canvas_pos: Point,
    },

    /// Resizing the sole selected item from its bottom-right handle
    ResizingItem { item_id: u64 },

    /// Rubber-band selection
    MarqueeSelecting {
        /// Fixed drag-start position (screen space)
        start: Point,
        /// Current pointer position (screen space)
        current: Point,
        /// Selection as it stood when the drag started, the baseline for
        /// additive (toggling) recomputes
        prev_selection: HashSet<u64>,
    },

    /// Inline label editing on one item
    EditingLabel { item_id: u64, buffer: String },
}

impl InputState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_marquee_selecting(&self) -> bool {
        matches!(self, Self::MarqueeSelecting { .. })
    }

    pub fn is_editing_label(&self) -> bool {
        matches!(self, Self::EditingLabel { .. })
    }

    /// The item being dragged, if any
    pub fn dragging_item(&self) -> Option<u64> {
        match self {
            Self::DraggingItems { primary_item, .. } => Some(*primary_item),
            _ => None,
        }
    }

    /// The item being resized, if any
    pub fn resizing_item(&self) -> Option<u64> {
        match self {
            Self::ResizingItem { item_id } => Some(*item_id),
            _ => None,
        }
    }

    /// The item whose label is being edited, if any
    pub fn editing_label_item(&self) -> Option<u64> {
        match self {
            Self::EditingLabel { item_id, .. } => Some(*item_id),
            _ => None,
        }
    }

    /// Reset to Idle
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    pub fn start_panning(&mut self, last_pos: Point) {
        *self = Self::Panning { last_pos };
    }

    pub fn start_dragging(&mut self, primary_item: u64, last_canvas_pos: Point) {
        *self = Self::DraggingItems {
            primary_item,
            last_canvas_pos,
        };
    }

    pub fn start_resizing(&mut self, item_id: u64) {
        *self = Self::ResizingItem { item_id };
    }

    pub fn start_marquee(&mut self, start: Point, prev_selection: HashSet<u64>) {
        *self = Self::MarqueeSelecting {
            start,
            current: start,
            prev_selection,
        };
    }

    pub fn start_editing_label(&mut self, item_id: u64, buffer: String) {
        *self = Self::EditingLabel { item_id, buffer };
    }

    // ------------------------------------------------------------------
    // In-mode updates
    // ------------------------------------------------------------------

    pub fn last_mouse_pos(&self) -> Option<Point> {
        match self {
            Self::Panning { last_pos } => Some(*last_pos),
            _ => None,
        }
    }

    pub fn update_last_mouse_pos(&mut self, pos: Point) {
        if let Self::Panning { last_pos } = self {
            *last_pos = pos;
        }
    }

    pub fn drag_last_canvas_pos(&self) -> Option<Point> {
        match self {
            Self::DraggingItems { last_canvas_pos, .. } => Some(*last_canvas_pos),
            _ => None,
        }
    }

    pub fn update_drag_canvas_pos(&mut self, pos: Point) {
        if let Self::DraggingItems { last_canvas_pos, .. } = self {
            *last_canvas_pos = pos;
        }
    }

    pub fn marquee_start(&self) -> Option<Point> {
        match self {
            Self::MarqueeSelecting { start, .. } => Some(*start),
            _ => None,
        }
    }

    pub fn marquee_current(&self) -> Option<Point> {
        match self {
            Self::MarqueeSelecting { current, .. } => Some(*current),
            _ => None,
        }
    }

    pub fn set_marquee_current(&mut self, pos: Point) {
        if let Self::MarqueeSelecting { current, .. } = self {
            *current = pos;
        }
    }

    pub fn marquee_prev_selection(&self) -> Option<&HashSet<u64>> {
        match self {
            Self::MarqueeSelecting { prev_selection, .. } => Some(prev_selection),
            _ => None,
        }
    }

    pub fn label_buffer(&self) -> Option<&str> {
        match self {
            Self::EditingLabel { buffer, .. } => Some(buffer),
            _ => None,
        }
    }

    pub fn label_buffer_push(&mut self, ch: char) {
        if let Self::EditingLabel { buffer, .. } = self {
            buffer.push(ch);
        }
    }

    pub fn label_buffer_backspace(&mut self) {
        if let Self::EditingLabel { buffer, .. } = self {
            buffer.pop();
        }
    }
}
