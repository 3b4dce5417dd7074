//! Canvas transformations - scroll, zoom, coordinate conversion.

use crate::app::Editor;
use crate::constants::{LINE_SCROLL_PIXELS, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use crate::input::coords::{CoordinateContext, CoordinateConverter};
use crate::input::events::{ScrollDelta, ScrollWheelEvent};
use crate::types::Point;

impl Editor {
    /// Convert a screen position to a canvas position under the active
    /// chart's viewport. Identity when no chart is open.
    pub fn screen_to_canvas(&self, pos: Point) -> Point {
        match self.canvas.chart.as_ref() {
            Some(chart) => {
                let ctx = CoordinateContext::new(chart.canvas_offset, chart.zoom);
                CoordinateConverter::screen_to_canvas(pos, &ctx)
            }
            None => pos,
        }
    }

    pub fn handle_scroll(&mut self, event: &ScrollWheelEvent) {
        let Some(chart) = self.canvas.chart.as_mut() else {
            return;
        };

        // Zoom with the platform or control key held: one fixed factor per
        // tick, toward or away from the cursor
        if event.modifiers.zooms() {
            let delta_y = match event.delta {
                ScrollDelta::Pixels(delta) => delta.y,
                ScrollDelta::Lines(delta) => delta.y,
            };
            if delta_y == 0.0 {
                return;
            }
            let factor = if delta_y > 0.0 {
                ZOOM_OUT_FACTOR
            } else {
                ZOOM_IN_FACTOR
            };
            chart.zoom_around(factor, event.position);
            return;
        }

        // Plain wheel: two-dimensional pan, subtracting the wheel delta
        match event.delta {
            ScrollDelta::Pixels(delta) => chart.pan_by(-delta.x, -delta.y),
            ScrollDelta::Lines(delta) => chart.pan_by(
                -delta.x * LINE_SCROLL_PIXELS,
                -delta.y * LINE_SCROLL_PIXELS,
            ),
        }
    }
}
