//! Destructive edit commands - delete, clear, undo.
//!
//! These are the operations that push undo history: each one snapshots the
//! item list (inside the chart primitives) before mutating it. Moves,
//! resizes, and paste do not.

use super::state::Editor;

impl Editor {
    /// Delete every selected item, then clear the selection.
    pub fn delete_selection(&mut self) {
        if self.canvas.selection.is_empty() {
            return;
        }
        let ids = self.canvas.selection.sorted_ids();
        if let Some(chart) = self.canvas.chart.as_mut() {
            chart.remove_items(&ids);
        }
        self.canvas.selection.clear();
        self.flush_chart();
    }

    /// Delete one item (context-menu path). No-op for unknown ids.
    pub fn delete_item(&mut self, id: u64) {
        let removed = match self.canvas.chart.as_mut() {
            Some(chart) => chart.remove_item(id),
            None => false,
        };
        if removed {
            self.canvas.selection.remove(id);
            self.flush_chart();
        }
    }

    /// Remove every item from the chart.
    pub fn clear_chart(&mut self) {
        if let Some(chart) = self.canvas.chart.as_mut() {
            chart.clear();
        }
        self.canvas.selection.clear();
        self.flush_chart();
    }

    /// Restore the most recent history snapshot. The restored item set may
    /// not contain what is currently selected, so the selection is cleared.
    pub fn undo(&mut self) {
        let undone = match self.canvas.chart.as_mut() {
            Some(chart) => chart.undo(),
            None => false,
        };
        if undone {
            self.canvas.selection.clear();
            self.flush_chart();
        }
    }
}
