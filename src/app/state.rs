//! Application state - the Editor struct definition and sub-structs.

use crate::app::clipboard::ClipboardItem;
use crate::chart::Chart;
use crate::input::InputState;
use crate::notifications::ToastManager;
use crate::selection::SelectionManager;
use crate::types::Rect;

/// Canvas interaction state - the chart, the selection, and the input mode.
pub struct CanvasState {
    /// Chart data (None until a chart is created or opened)
    pub chart: Option<Chart>,
    /// Selected item ids
    pub selection: SelectionManager,
    /// Input state machine
    pub input_state: InputState,
    /// Set when a marquee drag just finished, so the click that terminated
    /// the drag does not clear the selection it created
    pub suppress_next_click: bool,
}

/// UI-facing state the embedding shell reads each frame.
pub struct UiState {
    /// Toast notification manager
    pub toast_manager: ToastManager,
}

/// Main editor state - composed of focused sub-structs.
pub struct Editor {
    /// Canvas interaction state
    pub canvas: CanvasState,
    /// Copied items awaiting paste (identity stripped)
    pub clipboard: Vec<ClipboardItem>,
    /// UI state
    pub ui: UiState,
}

impl Editor {
    /// The active chart, if one is open.
    pub fn chart(&self) -> Option<&Chart> {
        self.canvas.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut Chart> {
        self.canvas.chart.as_mut()
    }

    /// Reset pan and zoom on the active chart.
    pub fn reset_view(&mut self) {
        if let Some(chart) = self.canvas.chart.as_mut() {
            chart.reset_view();
        }
    }

    /// Replace the selection with every item overlapping the canvas-space
    /// rectangle. The programmatic counterpart of a plain marquee drag.
    pub fn select_within_rect(&mut self, rect: Rect) {
        if let Some(chart) = self.canvas.chart.as_ref() {
            let hits = chart.items_in_rect(&rect);
            self.canvas.selection.set(hits);
        }
    }
}
