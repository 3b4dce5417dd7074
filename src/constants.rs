//! Application-wide constants.
//!
//! Centralizes magic numbers so the geometry engine, the generators, and
//! the export renderer agree on one set of defaults.

// ============================================================================
// Zoom & Pan
// ============================================================================

/// Minimum zoom level
pub const MIN_ZOOM: f32 = 0.1;

/// Maximum zoom level
pub const MAX_ZOOM: f32 = 3.0;

/// Default zoom level
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Zoom factor applied per wheel tick toward the cursor
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Zoom factor applied per wheel tick away from the cursor
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

/// Pixels of pan applied per scroll line when the wheel reports lines
pub const LINE_SCROLL_PIXELS: f32 = 20.0;

// ============================================================================
// Item Geometry
// ============================================================================

/// Minimum item width after a resize
pub const MIN_ITEM_WIDTH: f32 = 20.0;

/// Minimum item height after a resize
pub const MIN_ITEM_HEIGHT: f32 = 15.0;

/// Side length of the square resize handle anchored at an item's
/// bottom-right corner, in canvas units
pub const RESIZE_HANDLE_SIZE: f32 = 10.0;

/// Offset applied to pasted items relative to the copied originals
pub const PASTE_OFFSET: f32 = 20.0;

// ============================================================================
// Selection
// ============================================================================

/// Minimum marquee extent (either axis, canvas units) for a rubber-band
/// drag to update the selection. Anything smaller is treated as a click.
pub const MIN_MARQUEE_SIZE: f32 = 5.0;

// ============================================================================
// History
// ============================================================================

/// Maximum undo snapshots to keep
pub const MAX_HISTORY_STATES: usize = 10;

// ============================================================================
// Generators
// ============================================================================

/// Seats produced by the row and column generators
pub const GENERATOR_SEAT_COUNT: usize = 8;

/// Horizontal gap between seats in a generated row
pub const ROW_SEAT_SPACING: f32 = 10.0;

/// Vertical pitch between seats in a generated column
pub const COLUMN_SEAT_PITCH: f32 = 30.0;

/// Gap left between existing content and a newly generated row or column
pub const GENERATOR_MARGIN: f32 = 40.0;

/// Fallback origin for generators on an empty chart
pub const GENERATOR_ORIGIN: (f32, f32) = (50.0, 50.0);

/// Seats produced by the circle generator
pub const CIRCLE_SEAT_COUNT: usize = 12;

/// Center of the generated circle
pub const CIRCLE_CENTER: (f32, f32) = (300.0, 200.0);

/// Radius of the generated circle
pub const CIRCLE_RADIUS: f32 = 100.0;

// ============================================================================
// Export
// ============================================================================

/// Padding around the item bounding box in the printable document
pub const EXPORT_PADDING: f32 = 50.0;

/// Minimum number of lines on the printed attendance list
pub const EXPORT_MIN_ATTENDANCE_LINES: usize = 20;
