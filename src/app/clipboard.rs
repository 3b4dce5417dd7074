//! Copy/paste over the selection.

use super::state::Editor;
use crate::constants::PASTE_OFFSET;
use crate::types::ItemKind;

/// A copied item: geometry, label, and kind with identity stripped. Paste
/// materializes fresh ids, so copies never alias their originals.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipboardItem {
    pub position: (f32, f32),
    pub size: (f32, f32),
    pub label: String,
    pub kind: ItemKind,
}

impl Editor {
    /// Snapshot the selected items into the clipboard, in store order.
    /// An empty selection leaves the clipboard untouched.
    pub fn copy_selection(&mut self) {
        if self.canvas.selection.is_empty() {
            return;
        }
        let Some(chart) = self.canvas.chart.as_ref() else {
            return;
        };
        self.clipboard = chart
            .items
            .iter()
            .filter(|item| self.canvas.selection.contains(item.id))
            .map(|item| ClipboardItem {
                position: item.position,
                size: item.size,
                label: item.label.clone(),
                kind: item.kind,
            })
            .collect();
    }

    /// Materialize the clipboard at a fixed offset from the originals and
    /// select exactly the pasted items.
    pub fn paste_clipboard(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        let Some(chart) = self.canvas.chart.as_mut() else {
            return;
        };

        let mut pasted = Vec::with_capacity(self.clipboard.len());
        for entry in &self.clipboard {
            let position = (
                entry.position.0 + PASTE_OFFSET,
                entry.position.1 + PASTE_OFFSET,
            );
            pasted.push(chart.add_item_with(
                position,
                entry.size,
                entry.label.clone(),
                entry.kind,
            ));
        }

        self.canvas.selection.set(pasted);
        self.flush_chart();
    }
}
