//! Editor lifecycle - construction and tracing setup.

use super::state::{CanvasState, Editor, UiState};
use crate::input::InputState;
use crate::notifications::ToastManager;
use crate::selection::SelectionManager;
use tracing_subscriber::EnvFilter;

impl Editor {
    /// An editor with no chart open yet.
    pub fn new() -> Self {
        Self {
            canvas: CanvasState {
                chart: None,
                selection: SelectionManager::new(),
                input_state: InputState::default(),
                suppress_next_click: false,
            },
            clipboard: Vec::new(),
            ui: UiState {
                toast_manager: ToastManager::new(),
            },
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global tracing subscriber. The embedding shell calls this
/// once at startup; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
