//! Inline label editing on a single item.

use super::state::Editor;

impl Editor {
    /// Begin editing an item's label, seeding the buffer with the current
    /// text. Replaces whatever interaction was in flight.
    pub fn start_label_edit(&mut self, item_id: u64) {
        let Some(label) = self
            .canvas
            .chart
            .as_ref()
            .and_then(|chart| chart.get_item(item_id))
            .map(|item| item.label.clone())
        else {
            return;
        };
        self.canvas.selection.select_only(item_id);
        self.canvas.input_state.start_editing_label(item_id, label);
    }

    /// Write the buffer back to the item (Enter or blur) and return to Idle.
    pub fn commit_label_edit(&mut self) {
        let Some(item_id) = self.canvas.input_state.editing_label_item() else {
            return;
        };
        let buffer = self
            .canvas
            .input_state
            .label_buffer()
            .unwrap_or_default()
            .to_string();

        if let Some(chart) = self.canvas.chart.as_mut() {
            chart.update_item(item_id, |item| item.label = buffer);
        }
        self.canvas.input_state.reset();
        self.flush_chart();
    }

    /// Discard the buffer (Escape) and return to Idle.
    pub fn cancel_label_edit(&mut self) {
        if self.canvas.input_state.is_editing_label() {
            self.canvas.input_state.reset();
        }
    }
}
