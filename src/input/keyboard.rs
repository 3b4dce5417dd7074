//! Keyboard shortcuts and inline label-edit input.

use crate::app::Editor;
use crate::input::events::{Key, KeyDownEvent};

impl Editor {
    pub fn handle_key_down(&mut self, event: &KeyDownEvent) {
        // While a label edit is active, keys go to the buffer
        if self.canvas.input_state.is_editing_label() {
            match event.key {
                Key::Enter => self.commit_label_edit(),
                Key::Escape => self.cancel_label_edit(),
                Key::Backspace => self.canvas.input_state.label_buffer_backspace(),
                Key::Character(ch) if !event.modifiers.command() => {
                    self.canvas.input_state.label_buffer_push(ch);
                }
                _ => {}
            }
            return;
        }

        match event.key {
            Key::Delete | Key::Backspace => self.delete_selection(),
            Key::Escape => self.canvas.selection.clear(),
            Key::Character('z') if event.modifiers.command() => self.undo(),
            Key::Character('c') if event.modifiers.command() => self.copy_selection(),
            Key::Character('v') if event.modifiers.command() => self.paste_clipboard(),
            _ => {}
        }
    }
}
