//! Application module - the Editor state and its commands.
//!
//! This module is organized into several submodules:
//! - `state` - the Editor struct definition and sub-structs
//! - `lifecycle` - construction and tracing setup
//! - `chart_management` - chart files and snapshot import/export
//! - `editing` - destructive commands (delete, clear, undo)
//! - `clipboard` - copy/paste over the selection
//! - `arrange` - the orient (align + distribute) command
//! - `label_editing` - inline label edit begin/commit/cancel
//!
//! The pointer/wheel/keyboard entry points (`handle_mouse_down` and
//! friends) are implemented on `Editor` in [`crate::input`].

mod state;
mod lifecycle;
mod chart_management;
mod editing;
mod clipboard;
mod arrange;
mod label_editing;

pub use clipboard::ClipboardItem;
pub use lifecycle::init_tracing;
pub use state::{CanvasState, Editor, UiState};
