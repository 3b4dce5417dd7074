//! Mouse move handling - item dragging, resizing, panning, and the live
//! marquee recompute.
//!
//! Mouse move fires continuously during a gesture, so every branch exits
//! early when its mode is not active and touches only the state it owns.

use crate::app::Editor;
use crate::constants::{MIN_ITEM_HEIGHT, MIN_ITEM_WIDTH, MIN_MARQUEE_SIZE};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::events::MouseMoveEvent;
use crate::types::Rect;

impl Editor {
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) {
        if self.canvas.input_state.is_panning() {
            if let (Some(last), Some(chart)) = (
                self.canvas.input_state.last_mouse_pos(),
                self.canvas.chart.as_mut(),
            ) {
                chart.pan_by(event.position.x - last.x, event.position.y - last.y);
                self.canvas.input_state.update_last_mouse_pos(event.position);
            }
            return;
        }

        if let Some(item_id) = self.canvas.input_state.resizing_item() {
            let Some(chart) = self.canvas.chart.as_mut() else {
                return;
            };
            let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
            let canvas_pos = CoordinateConverter::screen_to_canvas(event.position, &ctx);

            // Top-left corner stays fixed; the new size is the span from it
            // to the pointer, clamped to the minimums
            chart.update_item(item_id, |item| {
                item.size = (
                    (canvas_pos.x - item.position.0).max(MIN_ITEM_WIDTH),
                    (canvas_pos.y - item.position.1).max(MIN_ITEM_HEIGHT),
                );
            });
            return;
        }

        if self.canvas.input_state.dragging_item().is_some() {
            let Some(chart) = self.canvas.chart.as_mut() else {
                return;
            };
            let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
            let canvas_pos = CoordinateConverter::screen_to_canvas(event.position, &ctx);
            let Some(last) = self.canvas.input_state.drag_last_canvas_pos() else {
                return;
            };

            // Incremental delta applied to the whole selection, so relative
            // spacing inside a group drag never drifts
            let dx = canvas_pos.x - last.x;
            let dy = canvas_pos.y - last.y;
            for id in self.canvas.selection.sorted_ids() {
                if let Some(item) = chart.get_item_mut(id) {
                    item.position.0 += dx;
                    item.position.1 += dy;
                }
            }
            chart.mark_dirty();
            self.canvas.input_state.update_drag_canvas_pos(canvas_pos);
            return;
        }

        if self.canvas.input_state.is_marquee_selecting() {
            self.canvas.input_state.set_marquee_current(event.position);
            self.recompute_marquee_selection(event.modifiers.toggles_selection());
        }
    }

    /// Re-derive the live selection from the current marquee rectangle.
    ///
    /// Below the minimum marquee size the drag still counts as a click, so
    /// the drag-start selection is left in place.
    pub(crate) fn recompute_marquee_selection(&mut self, additive: bool) {
        let (Some(start), Some(current), Some(prev)) = (
            self.canvas.input_state.marquee_start(),
            self.canvas.input_state.marquee_current(),
            self.canvas.input_state.marquee_prev_selection().cloned(),
        ) else {
            return;
        };
        let Some(chart) = self.canvas.chart.as_ref() else {
            return;
        };

        let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
        let rect = CoordinateConverter::rect_screen_to_canvas(start, current, &ctx);

        if marquee_exceeds_threshold(&rect) {
            let hits = chart.items_in_rect(&rect);
            self.canvas.selection.apply_marquee(&prev, &hits, additive);
        } else {
            self.canvas.selection.set(prev);
        }
    }
}

/// A marquee counts as a drag once either axis passes the threshold.
pub(crate) fn marquee_exceeds_threshold(rect: &Rect) -> bool {
    rect.width() > MIN_MARQUEE_SIZE || rect.height() > MIN_MARQUEE_SIZE
}
