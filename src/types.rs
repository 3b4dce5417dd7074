//! Core types for the seating chart canvas.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: placed items, item kinds, and the small geometry helpers shared by
//! the input pipeline and the selection engine.

use serde::{Deserialize, Serialize};

/// A point in either screen or canvas space.
///
/// The input pipeline carries screen-space points (window pixels relative to
/// the canvas area); [`crate::input::coords`] converts between the two
/// spaces. Item geometry itself is stored as plain `(f32, f32)` tuples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor mirroring the call sites in the input handlers.
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

/// An axis-aligned rectangle, normalized so `min_* <= max_*`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl Rect {
    /// Build a normalized rectangle from two arbitrary corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min_x: a.x.min(b.x),
            min_y: a.y.min(b.y),
            max_x: a.x.max(b.x),
            max_y: a.y.max(b.y),
        }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// True when `self` and an item's bounding box overlap with positive
    /// area. Boxes that merely touch edges do not count as overlapping.
    pub fn intersects_box(&self, position: (f32, f32), size: (f32, f32)) -> bool {
        position.0 < self.max_x
            && position.0 + size.0 > self.min_x
            && position.1 < self.max_y
            && position.1 + size.1 > self.min_y
    }
}

/// The kind of a placed item.
///
/// Determines the default footprint, the render/export color, and whether
/// the auto-number fallback applies (seats only).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    #[default]
    Seat,
    Couch,
    Table,
    CoffeeTable,
}

impl ItemKind {
    pub fn default_size(&self) -> (f32, f32) {
        match self {
            ItemKind::Seat => (40.0, 20.0),
            ItemKind::Couch => (120.0, 40.0),
            ItemKind::Table => (80.0, 60.0),
            ItemKind::CoffeeTable => (60.0, 40.0),
        }
    }

    /// Label assigned at creation time. Seats start unlabeled and fall back
    /// to their position number; furniture is born with its kind name.
    pub fn default_label(&self) -> &'static str {
        match self {
            ItemKind::Seat => "",
            ItemKind::Couch => "Couch",
            ItemKind::Table => "Table",
            ItemKind::CoffeeTable => "Coffee Table",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::Seat => "Seat",
            ItemKind::Couch => "Couch",
            ItemKind::Table => "Table",
            ItemKind::CoffeeTable => "Coffee Table",
        }
    }

    /// Fill color used by the export renderer (and suggested to embedders).
    pub fn fill_color(&self) -> &'static str {
        match self {
            ItemKind::Seat => "#e5e7eb",
            ItemKind::Couch => "#8b5cf6",
            ItemKind::Table => "#10b981",
            ItemKind::CoffeeTable => "#f59e0b",
        }
    }

    pub fn is_seat(&self) -> bool {
        matches!(self, ItemKind::Seat)
    }

    pub fn all() -> &'static [ItemKind] {
        &[
            ItemKind::Seat,
            ItemKind::Couch,
            ItemKind::Table,
            ItemKind::CoffeeTable,
        ]
    }
}

/// An item placed on the chart canvas.
///
/// Each item has a unique ID, a top-left position and size in canvas units,
/// a free-text label, and a kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for this item
    pub id: u64,
    /// Top-left corner in canvas coordinates (x, y)
    pub position: (f32, f32),
    /// Size in canvas units (width, height)
    pub size: (f32, f32),
    /// Free-text label, empty by default for seats
    pub label: String,
    /// What this item represents
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: u64, position: (f32, f32), kind: ItemKind) -> Self {
        Self {
            id,
            position,
            size: kind.default_size(),
            label: kind.default_label().to_string(),
            kind,
        }
    }

    /// Center of the item's bounding box.
    pub fn center(&self) -> (f32, f32) {
        (
            self.position.0 + self.size.0 / 2.0,
            self.position.1 + self.size.1 / 2.0,
        )
    }

    /// True when the canvas-space point lies inside the item's box.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.position.0
            && x <= self.position.0 + self.size.0
            && y >= self.position.1
            && y <= self.position.1 + self.size.1
    }

    /// The text drawn on the item.
    ///
    /// `store_index` is the item's 0-based position in the whole chart
    /// order. Unlabeled seats display that position 1-based; the number is
    /// the position among all items, not the seat-only rank. Unlabeled
    /// furniture displays its kind name.
    pub fn display_label(&self, store_index: usize) -> String {
        if !self.label.is_empty() {
            self.label.clone()
        } else if self.kind.is_seat() {
            (store_index + 1).to_string()
        } else {
            self.kind.display_name().to_string()
        }
    }
}
