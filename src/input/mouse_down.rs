//! Mouse down handling - selection, drag/resize initiation, panning,
//! marquee start, and the double-click entries (add seat, edit label).
//!
//! Hit testing goes through the chart's R-tree, so a press costs
//! O(log n) even on large charts.

use crate::app::Editor;
use crate::constants::RESIZE_HANDLE_SIZE;
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::events::{MouseButton, MouseDownEvent};
use crate::types::{ItemKind, Point};

impl Editor {
    pub fn handle_mouse_down(&mut self, event: &MouseDownEvent) {
        // A press anywhere else commits a pending label edit (blur)
        if self.canvas.input_state.is_editing_label() {
            self.commit_label_edit();
        }

        if self.canvas.chart.is_none() {
            return;
        }

        // Pan: middle button, or left button with the pan modifier held
        if event.button == MouseButton::Middle
            || (event.button == MouseButton::Left && event.modifiers.pans())
        {
            self.canvas.input_state.start_panning(event.position);
            return;
        }

        let Some((canvas_pos, hit)) = self.canvas.chart.as_ref().map(|chart| {
            let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
            let canvas_pos = CoordinateConverter::screen_to_canvas(event.position, &ctx);
            (canvas_pos, chart.topmost_item_at(canvas_pos.x, canvas_pos.y))
        }) else {
            return;
        };

        if event.button == MouseButton::Right {
            // Context delete on the item under the cursor
            if let Some(item_id) = hit {
                self.delete_item(item_id);
            }
            return;
        }

        if event.button != MouseButton::Left {
            return;
        }

        match hit {
            Some(item_id) => {
                if event.click_count == 2 {
                    self.start_label_edit(item_id);
                    return;
                }

                // Resize handle is only live when this is the sole selection
                if self.canvas.selection.len() == 1
                    && self.canvas.selection.contains(item_id)
                    && self.hit_resize_handle(item_id, canvas_pos)
                {
                    self.canvas.selection.select_only(item_id);
                    self.canvas.input_state.start_resizing(item_id);
                    return;
                }

                if event.modifiers.toggles_selection() {
                    // Toggle membership; no drag starts from a toggle press
                    self.canvas.selection.toggle(item_id);
                    return;
                }

                // Keep a larger selection intact when grabbing one of its
                // members, so the whole group drags together
                if !self.canvas.selection.contains(item_id) {
                    self.canvas.selection.select_only(item_id);
                }
                self.canvas.input_state.start_dragging(item_id, canvas_pos);
            }
            None => {
                if event.click_count == 2 {
                    // Double-click on empty canvas drops a new seat there
                    if let Some(chart) = self.canvas.chart.as_mut() {
                        chart.add_item((canvas_pos.x, canvas_pos.y), ItemKind::Seat);
                        self.flush_chart();
                    }
                    return;
                }

                self.canvas
                    .input_state
                    .start_marquee(event.position, self.canvas.selection.ids().clone());
            }
        }
    }

    /// True when the canvas-space point falls inside the item's
    /// bottom-right resize handle.
    fn hit_resize_handle(&self, item_id: u64, canvas_pos: Point) -> bool {
        let Some(item) = self.canvas.chart.as_ref().and_then(|c| c.get_item(item_id)) else {
            return false;
        };
        let corner_x = item.position.0 + item.size.0;
        let corner_y = item.position.1 + item.size.1;
        let half = RESIZE_HANDLE_SIZE / 2.0;

        canvas_pos.x >= corner_x - half
            && canvas_pos.x <= corner_x + half
            && canvas_pos.y >= corner_y - half
            && canvas_pos.y <= corner_y + half
    }
}
