//! Layout generators - deterministic batch constructors for common
//! arrangements.
//!
//! Each generator derives its placement from the current store contents
//! and fixed constants only, so the same chart always produces the same
//! layout. Ids come from the chart's counter and are unique even within a
//! single call.

use crate::chart::Chart;
use crate::constants::{
    CIRCLE_CENTER, CIRCLE_RADIUS, CIRCLE_SEAT_COUNT, COLUMN_SEAT_PITCH, GENERATOR_MARGIN,
    GENERATOR_ORIGIN, GENERATOR_SEAT_COUNT, ROW_SEAT_SPACING,
};
use crate::types::ItemKind;
use std::f32::consts::TAU;

impl Chart {
    /// A horizontal row of seats below everything currently placed.
    pub fn add_seat_row(&mut self) -> Vec<u64> {
        let (seat_w, _) = ItemKind::Seat.default_size();
        let start_x = GENERATOR_ORIGIN.0;
        let start_y = self
            .items
            .iter()
            .map(|item| item.position.1)
            .fold(f32::NEG_INFINITY, f32::max);
        let start_y = if start_y.is_finite() {
            start_y + GENERATOR_MARGIN
        } else {
            GENERATOR_ORIGIN.1
        };

        self.add_items((0..GENERATOR_SEAT_COUNT).map(|i| {
            let x = start_x + i as f32 * (seat_w + ROW_SEAT_SPACING);
            ((x, start_y), ItemKind::Seat)
        }))
    }

    /// A vertical column of seats to the right of everything currently
    /// placed.
    pub fn add_seat_column(&mut self) -> Vec<u64> {
        let start_x = self
            .items
            .iter()
            .map(|item| item.position.0 + item.size.0)
            .fold(f32::NEG_INFINITY, f32::max);
        let start_x = if start_x.is_finite() {
            start_x + GENERATOR_MARGIN
        } else {
            GENERATOR_ORIGIN.0
        };
        let start_y = 60.0;

        self.add_items((0..GENERATOR_SEAT_COUNT).map(|i| {
            let y = start_y + i as f32 * COLUMN_SEAT_PITCH;
            ((start_x, y), ItemKind::Seat)
        }))
    }

    /// Seats evenly spaced around a circle, each centered on its point.
    pub fn add_seat_circle(&mut self) -> Vec<u64> {
        let (seat_w, seat_h) = ItemKind::Seat.default_size();
        let (cx, cy) = CIRCLE_CENTER;

        self.add_items((0..CIRCLE_SEAT_COUNT).map(|i| {
            let angle = i as f32 * TAU / CIRCLE_SEAT_COUNT as f32;
            let x = cx + CIRCLE_RADIUS * angle.cos() - seat_w / 2.0;
            let y = cy + CIRCLE_RADIUS * angle.sin() - seat_h / 2.0;
            ((x, y), ItemKind::Seat)
        }))
    }

    /// Load the classic meeting-room floor plan, replacing the current
    /// store (the outgoing state is pushed to history first).
    pub fn load_classic_template(&mut self) {
        let items = classic_template_positions()
            .into_iter()
            .map(|position| {
                let id = self.next_item_id;
                self.next_item_id += 1;
                crate::types::Item::new(id, position, ItemKind::Seat)
            })
            .collect();
        self.replace_all(items);
    }

    /// Append the classic floor plan rotated 180° about its own
    /// bounding-box center, for rooms laid out the other way around.
    pub fn add_classic_template_rotated(&mut self) -> Vec<u64> {
        let positions = classic_template_positions();
        let (seat_w, seat_h) = ItemKind::Seat.default_size();

        let (min_x, max_x, min_y, max_y) = positions.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY, f32::INFINITY, f32::NEG_INFINITY),
            |(lx, hx, ly, hy), (x, y)| {
                (
                    lx.min(*x),
                    hx.max(*x + seat_w),
                    ly.min(*y),
                    hy.max(*y + seat_h),
                )
            },
        );
        let cx = (min_x + max_x) / 2.0;
        let cy = (min_y + max_y) / 2.0;

        // 180° about (cx, cy): a box's top-left maps to the reflection of
        // its bottom-right
        self.add_items(positions.into_iter().map(|(x, y)| {
            let rx = 2.0 * cx - x - seat_w;
            let ry = 2.0 * cy - y - seat_h;
            ((rx, ry), ItemKind::Seat)
        }))
    }
}

/// Seat positions of the classic floor plan: nine alternating rows of 7/6
/// seats, a 12-seat column along the right wall, and six scattered seats
/// at the back.
fn classic_template_positions() -> Vec<(f32, f32)> {
    let mut positions = Vec::new();

    for row in 0..9 {
        let (seats_in_row, offset_x) = if row % 2 == 0 { (7, 50.0) } else { (6, 75.0) };
        for i in 0..seats_in_row {
            positions.push((offset_x + i as f32 * 50.0, 60.0 + row as f32 * 40.0));
        }
    }

    for i in 0..12 {
        positions.push((450.0, 60.0 + i as f32 * 30.0));
    }

    positions.extend([
        (100.0, 430.0),
        (150.0, 450.0),
        (200.0, 430.0),
        (250.0, 450.0),
        (300.0, 430.0),
        (350.0, 450.0),
    ]);

    positions
}
