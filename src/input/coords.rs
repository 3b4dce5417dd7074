//! Coordinate conversion between screen space and canvas space.
//!
//! One pair of formulas shared by every input handler:
//! `canvas = (screen - offset) / zoom` and `screen = canvas * zoom + offset`.

use crate::types::{Point, Rect, point};

/// Context needed for coordinate conversions
#[derive(Clone, Copy, Debug)]
pub struct CoordinateContext {
    pub canvas_offset: (f32, f32),
    pub zoom: f32,
}

impl CoordinateContext {
    #[inline]
    pub fn new(canvas_offset: (f32, f32), zoom: f32) -> Self {
        Self {
            canvas_offset,
            zoom,
        }
    }
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a screen position to a canvas position
    #[inline]
    pub fn screen_to_canvas(screen_pos: Point, ctx: &CoordinateContext) -> Point {
        point(
            (screen_pos.x - ctx.canvas_offset.0) / ctx.zoom,
            (screen_pos.y - ctx.canvas_offset.1) / ctx.zoom,
        )
    }

    /// Convert a canvas position to a screen position
    #[inline]
    pub fn canvas_to_screen(canvas_pos: Point, ctx: &CoordinateContext) -> Point {
        point(
            canvas_pos.x * ctx.zoom + ctx.canvas_offset.0,
            canvas_pos.y * ctx.zoom + ctx.canvas_offset.1,
        )
    }

    /// Convert a screen-space delta to canvas units (drag operations)
    #[inline]
    pub fn delta_screen_to_canvas(delta: Point, zoom: f32) -> Point {
        point(delta.x / zoom, delta.y / zoom)
    }

    /// Convert a screen-space rectangle (e.g. the marquee) to canvas space
    pub fn rect_screen_to_canvas(a: Point, b: Point, ctx: &CoordinateContext) -> Rect {
        Rect::from_corners(
            Self::screen_to_canvas(a, ctx),
            Self::screen_to_canvas(b, ctx),
        )
    }
}
