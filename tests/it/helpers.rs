//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestChartBuilder` - builder pattern for charts with items
//! - `editor_with` - wrap a chart in a ready-to-drive Editor
//! - event constructors (`press`, `move_to`, `release`, ...) so
//!   interaction tests read like gesture scripts

use seatplan::app::Editor;
use seatplan::chart::Chart;
use seatplan::input::events::{
    ClickEvent, Key, KeyDownEvent, Modifiers, MouseButton, MouseDownEvent, MouseMoveEvent,
    MouseUpEvent, ScrollDelta, ScrollWheelEvent,
};
use seatplan::types::{ItemKind, point};

// ============================================================================
// TestChartBuilder
// ============================================================================

/// Builder for test charts.
///
/// # Example
/// ```ignore
/// let chart = TestChartBuilder::new()
///     .with_seat((0.0, 0.0))
///     .with_item(ItemKind::Couch, (200.0, 0.0))
///     .with_zoom(1.5)
///     .build();
/// ```
pub struct TestChartBuilder {
    items: Vec<((f32, f32), ItemKind)>,
    zoom: f32,
    offset: (f32, f32),
}

impl Default for TestChartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestChartBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            zoom: 1.0,
            offset: (0.0, 0.0),
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn with_seat(mut self, pos: (f32, f32)) -> Self {
        self.items.push((pos, ItemKind::Seat));
        self
    }

    pub fn with_item(mut self, kind: ItemKind, pos: (f32, f32)) -> Self {
        self.items.push((pos, kind));
        self
    }

    /// N seats at (i * spacing, 0).
    pub fn with_n_seats_spaced(mut self, count: usize, spacing: f32) -> Self {
        for i in 0..count {
            self.items.push(((i as f32 * spacing, 0.0), ItemKind::Seat));
        }
        self
    }

    pub fn build(self) -> Chart {
        let mut chart = Chart::new_for_test();
        chart.canvas_offset = self.offset;
        chart.zoom = self.zoom;
        for (pos, kind) in self.items {
            chart.add_item(pos, kind);
        }
        chart
    }
}

/// An empty in-memory chart.
pub fn empty_chart() -> Chart {
    Chart::new_for_test()
}

/// An editor driving the given chart.
pub fn editor_with(chart: Chart) -> Editor {
    let mut editor = Editor::new();
    editor.canvas.chart = Some(chart);
    editor
}

// ============================================================================
// Event constructors
// ============================================================================

pub fn press(x: f32, y: f32) -> MouseDownEvent {
    MouseDownEvent {
        position: point(x, y),
        button: MouseButton::Left,
        modifiers: Modifiers::none(),
        click_count: 1,
    }
}

pub fn press_with(x: f32, y: f32, modifiers: Modifiers) -> MouseDownEvent {
    MouseDownEvent {
        modifiers,
        ..press(x, y)
    }
}

pub fn double_press(x: f32, y: f32) -> MouseDownEvent {
    MouseDownEvent {
        click_count: 2,
        ..press(x, y)
    }
}

pub fn middle_press(x: f32, y: f32) -> MouseDownEvent {
    MouseDownEvent {
        button: MouseButton::Middle,
        ..press(x, y)
    }
}

pub fn right_press(x: f32, y: f32) -> MouseDownEvent {
    MouseDownEvent {
        button: MouseButton::Right,
        ..press(x, y)
    }
}

pub fn move_to(x: f32, y: f32) -> MouseMoveEvent {
    MouseMoveEvent {
        position: point(x, y),
        modifiers: Modifiers::none(),
    }
}

pub fn move_with(x: f32, y: f32, modifiers: Modifiers) -> MouseMoveEvent {
    MouseMoveEvent {
        position: point(x, y),
        modifiers,
    }
}

pub fn release(x: f32, y: f32) -> MouseUpEvent {
    MouseUpEvent {
        position: point(x, y),
        button: MouseButton::Left,
        modifiers: Modifiers::none(),
    }
}

pub fn release_with(x: f32, y: f32, modifiers: Modifiers) -> MouseUpEvent {
    MouseUpEvent {
        modifiers,
        ..release(x, y)
    }
}

pub fn click_at(x: f32, y: f32) -> ClickEvent {
    ClickEvent {
        position: point(x, y),
        modifiers: Modifiers::none(),
    }
}

pub fn click_with(x: f32, y: f32, modifiers: Modifiers) -> ClickEvent {
    ClickEvent {
        position: point(x, y),
        modifiers,
    }
}

pub fn wheel_lines(x: f32, y: f32, dx: f32, dy: f32, modifiers: Modifiers) -> ScrollWheelEvent {
    ScrollWheelEvent {
        position: point(x, y),
        delta: ScrollDelta::Lines(point(dx, dy)),
        modifiers,
    }
}

pub fn key(k: Key) -> KeyDownEvent {
    KeyDownEvent {
        key: k,
        modifiers: Modifiers::none(),
    }
}

pub fn key_with(k: Key, modifiers: Modifiers) -> KeyDownEvent {
    KeyDownEvent { key: k, modifiers }
}

// ============================================================================
// Gesture scripts
// ============================================================================

/// Press at `from`, move through `to`, release. No click event follows - a
/// shell only synthesizes clicks for stationary presses.
pub fn drag(editor: &mut Editor, from: (f32, f32), to: (f32, f32)) {
    editor.handle_mouse_down(&press(from.0, from.1));
    editor.handle_mouse_move(&move_to(to.0, to.1));
    editor.handle_mouse_up(&release(to.0, to.1));
}

/// A stationary click: press, release, click.
pub fn click(editor: &mut Editor, at: (f32, f32)) {
    editor.handle_mouse_down(&press(at.0, at.1));
    editor.handle_mouse_up(&release(at.0, at.1));
    editor.handle_click(&click_at(at.0, at.1));
}

// ============================================================================
// Assertion helpers
// ============================================================================

pub fn assert_item_count(chart: &Chart, expected: usize) {
    assert_eq!(
        chart.items.len(),
        expected,
        "Expected {} items, found {}",
        expected,
        chart.items.len()
    );
}

/// Position of the item with the given id, panicking when absent.
pub fn item_position(editor: &Editor, id: u64) -> (f32, f32) {
    editor
        .chart()
        .and_then(|chart| chart.get_item(id))
        .map(|item| item.position)
        .unwrap_or_else(|| panic!("item {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_empty_chart() {
        let chart = TestChartBuilder::new().build();
        assert!(chart.items.is_empty());
        assert_eq!(chart.zoom, 1.0);
    }

    #[test]
    fn test_builder_with_items() {
        let chart = TestChartBuilder::new()
            .with_seat((0.0, 0.0))
            .with_item(ItemKind::Table, (100.0, 0.0))
            .build();
        assert_eq!(chart.items.len(), 2);
        assert_eq!(chart.items[1].kind, ItemKind::Table);
    }

    #[test]
    fn test_builder_viewport() {
        let chart = TestChartBuilder::new()
            .with_zoom(2.0)
            .with_offset(50.0, 75.0)
            .build();
        assert_eq!(chart.zoom, 2.0);
        assert_eq!(chart.canvas_offset, (50.0, 75.0));
    }
}
