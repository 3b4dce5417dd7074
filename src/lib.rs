//! seatplan - the interaction engine behind a seating-chart editor.
//!
//! Items (seats and furniture) live on a pannable, zoomable canvas. The
//! [`app::Editor`] owns the chart, the selection, and the input state
//! machine; the embedding shell feeds it pointer/wheel/keyboard events
//! (see [`input::events`]) and reads the state back each frame to draw.

pub mod app;
pub mod chart;
pub mod constants;
pub mod export;
pub mod generators;
pub mod input;
pub mod notifications;
pub mod selection;
pub mod snapshot;
pub mod spatial_index;
pub mod types;

pub use app::Editor;
pub use chart::Chart;
