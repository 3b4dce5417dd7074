//! Mouse up handling - finalize the active gesture and return to Idle.

use crate::app::Editor;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::drag::marquee_exceeds_threshold;
use crate::input::events::{ClickEvent, Modifiers, MouseUpEvent};

impl Editor {
    pub fn handle_mouse_up(&mut self, event: &MouseUpEvent) {
        self.finish_interaction(event.modifiers);
    }

    /// The pointer left the canvas: abandon the gesture exactly as a
    /// release would.
    pub fn handle_mouse_leave(&mut self) {
        self.finish_interaction(Modifiers::none());
    }

    /// A completed click, delivered after mouse up. Clicking empty canvas
    /// without a modifier clears the selection - unless this click is the
    /// tail end of a marquee drag, which already set the selection it
    /// should keep.
    pub fn handle_click(&mut self, event: &ClickEvent) {
        if self.canvas.suppress_next_click {
            self.canvas.suppress_next_click = false;
            return;
        }
        if self.canvas.input_state.is_editing_label() {
            return;
        }
        let Some(chart) = self.canvas.chart.as_ref() else {
            return;
        };

        let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
        let canvas_pos = CoordinateConverter::screen_to_canvas(event.position, &ctx);
        let on_empty = chart.topmost_item_at(canvas_pos.x, canvas_pos.y).is_none();

        if on_empty && !event.modifiers.toggles_selection() {
            self.canvas.selection.clear();
        }
    }

    fn finish_interaction(&mut self, modifiers: Modifiers) {
        // Label editing is exited through commit/cancel, not pointer-up
        if self.canvas.input_state.is_editing_label() {
            return;
        }

        // A completed drag moved the selection without re-indexing each
        // intermediate step; sync the spatial index now, then autosave
        if self.canvas.input_state.dragging_item().is_some() {
            if let Some(chart) = self.canvas.chart.as_mut() {
                for id in self.canvas.selection.sorted_ids() {
                    chart.refresh_spatial_index(id);
                }
            }
            self.flush_chart();
        } else if self.canvas.input_state.resizing_item().is_some() {
            self.flush_chart();
        } else if self.canvas.input_state.is_marquee_selecting() {
            self.recompute_marquee_selection(modifiers.toggles_selection());

            // Arm the click guard only when the marquee actually selected;
            // a sub-threshold drag is a click and should behave like one
            let exceeded = self.marquee_was_drag();
            self.canvas.suppress_next_click = exceeded;
        }

        self.canvas.input_state.reset();
    }

    fn marquee_was_drag(&self) -> bool {
        let (Some(start), Some(current), Some(chart)) = (
            self.canvas.input_state.marquee_start(),
            self.canvas.input_state.marquee_current(),
            self.canvas.chart.as_ref(),
        ) else {
            return false;
        };
        let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
        let rect = CoordinateConverter::rect_screen_to_canvas(start, current, &ctx);
        marquee_exceeds_threshold(&rect)
    }
}
