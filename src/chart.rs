//! The chart - a flat, ordered store of placed items plus viewport state.
//!
//! Store order is meaningful twice over: it is the z-order used for hit
//! testing (later items sit on top) and it drives the auto-number fallback
//! for unlabeled seats. The chart also owns the bounded undo history and an
//! R-tree spatial index kept in sync with every mutation.

use crate::constants::{DEFAULT_ZOOM, MAX_HISTORY_STATES, MAX_ZOOM, MIN_ZOOM};
use crate::spatial_index::SpatialIndex;
use crate::types::{Item, ItemKind, Point, Rect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

/// Errors from loading or saving a chart file.
#[derive(Debug, Error)]
pub enum ChartStoreError {
    #[error("failed to access chart file: {0}")]
    Io(#[from] std::io::Error),
    #[error("chart file is not a valid chart: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serializable mirror of a [`Chart`], the on-disk format.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartState {
    pub id: String,
    pub name: String,
    pub canvas_offset: (f32, f32),
    pub zoom: f32,
    pub items: Vec<Item>,
    pub next_item_id: u64,
}

/// A seating chart being edited.
pub struct Chart {
    /// Stable chart identifier (UUID v4 string)
    pub id: String,
    /// Human-readable chart name
    pub name: String,
    /// Placed items in insertion order (also z-order, back to front)
    pub items: Vec<Item>,
    /// Pan offset in screen pixels
    pub canvas_offset: (f32, f32),
    /// Zoom factor, clamped to [`MIN_ZOOM`]..=[`MAX_ZOOM`]
    pub zoom: f32,
    /// Next item id to hand out; never reused within a session
    pub next_item_id: u64,
    history: Vec<Vec<Item>>,
    spatial: SpatialIndex,
    storage_path: Option<PathBuf>,
    dirty: bool,
}

impl Chart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            items: Vec::new(),
            canvas_offset: (0.0, 0.0),
            zoom: DEFAULT_ZOOM,
            next_item_id: 0,
            history: Vec::new(),
            spatial: SpatialIndex::new(),
            storage_path: None,
            dirty: false,
        }
    }

    /// An in-memory chart that never touches the filesystem.
    pub fn new_for_test() -> Self {
        Self::new("Test Chart")
    }

    // ========================================================================
    // Store operations
    // ========================================================================

    /// Append a new item of `kind` at `position` with its default size and
    /// label. Returns the fresh id.
    pub fn add_item(&mut self, position: (f32, f32), kind: ItemKind) -> u64 {
        let id = self.take_id();
        let item = Item::new(id, position, kind);
        self.spatial.upsert(&item);
        self.items.push(item);
        self.mark_dirty();
        id
    }

    /// Append a new item with explicit geometry and label (paste, loaders).
    pub fn add_item_with(
        &mut self,
        position: (f32, f32),
        size: (f32, f32),
        label: impl Into<String>,
        kind: ItemKind,
    ) -> u64 {
        let id = self.take_id();
        let item = Item {
            id,
            position,
            size,
            label: label.into(),
            kind,
        };
        self.spatial.upsert(&item);
        self.items.push(item);
        self.mark_dirty();
        id
    }

    /// Append a batch of items, ids assigned in order. All ids are unique
    /// even within a single call.
    pub fn add_items<I>(&mut self, batch: I) -> Vec<u64>
    where
        I: IntoIterator<Item = ((f32, f32), ItemKind)>,
    {
        batch
            .into_iter()
            .map(|(position, kind)| self.add_item(position, kind))
            .collect()
    }

    pub fn get_item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Mutable access to one item. The caller must follow up with
    /// [`Chart::refresh_spatial_index`] if the mutation moved or resized it.
    pub fn get_item_mut(&mut self, id: u64) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Apply `patch` to the item and re-index its bounding box.
    pub fn update_item(&mut self, id: u64, patch: impl FnOnce(&mut Item)) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        patch(item);
        let snapshot = item.clone();
        self.spatial.upsert(&snapshot);
        self.mark_dirty();
        true
    }

    /// Remove one item. A no-op (returning false) for unknown ids; a
    /// history snapshot is pushed only when something is actually removed.
    pub fn remove_item(&mut self, id: u64) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        self.push_history();
        self.items.retain(|item| item.id != id);
        self.spatial.remove(id);
        self.mark_dirty();
        true
    }

    /// Remove every listed item that exists. Unknown ids are ignored;
    /// one history snapshot covers the whole batch.
    pub fn remove_items(&mut self, ids: &[u64]) -> usize {
        let doomed: HashSet<u64> = ids
            .iter()
            .copied()
            .filter(|id| self.items.iter().any(|item| item.id == *id))
            .collect();
        if doomed.is_empty() {
            return 0;
        }
        self.push_history();
        self.items.retain(|item| !doomed.contains(&item.id));
        for id in &doomed {
            self.spatial.remove(*id);
        }
        self.mark_dirty();
        doomed.len()
    }

    /// Replace the whole store (template load, snapshot load). Pushes a
    /// history snapshot of the outgoing state and re-derives the id counter
    /// so fresh ids never collide with the incoming items.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.push_history();
        self.next_item_id = items
            .iter()
            .map(|item| item.id + 1)
            .max()
            .unwrap_or(0)
            .max(self.next_item_id);
        self.items = items;
        self.spatial.rebuild(self.items.iter());
        self.mark_dirty();
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.push_history();
        self.items.clear();
        self.spatial.clear();
        self.mark_dirty();
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_item_id;
        self.next_item_id += 1;
        id
    }

    pub fn seat_count(&self) -> usize {
        self.items.iter().filter(|item| item.kind.is_seat()).count()
    }

    pub fn furniture_count(&self) -> usize {
        self.items.len() - self.seat_count()
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// Re-index one item after external mutation through `get_item_mut`.
    pub fn refresh_spatial_index(&mut self, id: u64) {
        if let Some(item) = self.items.iter().find(|item| item.id == id) {
            let snapshot = item.clone();
            self.spatial.upsert(&snapshot);
        }
    }

    /// The topmost item under a canvas-space point, resolved by reverse
    /// store order so later items win.
    pub fn topmost_item_at(&self, x: f32, y: f32) -> Option<u64> {
        let candidates: HashSet<u64> = self.spatial.query_point(x, y).into_iter().collect();
        self.items
            .iter()
            .rev()
            .find(|item| candidates.contains(&item.id))
            .map(|item| item.id)
    }

    /// Ids of all items overlapping a canvas-space rectangle.
    pub fn items_in_rect(&self, rect: &Rect) -> Vec<u64> {
        self.spatial.query_rect(rect)
    }

    // ========================================================================
    // Viewport
    // ========================================================================

    /// Scale the zoom by `factor` about a screen-space cursor position, so
    /// the canvas point under the cursor stays put. Returns false when the
    /// clamp left the zoom unchanged.
    pub fn zoom_around(&mut self, factor: f32, cursor: Point) -> bool {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        if (new_zoom - self.zoom).abs() < f32::EPSILON {
            return false;
        }
        let change = new_zoom / self.zoom;
        self.canvas_offset = (
            cursor.x - (cursor.x - self.canvas_offset.0) * change,
            cursor.y - (cursor.y - self.canvas_offset.1) * change,
        );
        self.zoom = new_zoom;
        self.mark_dirty();
        true
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.canvas_offset.0 += dx;
        self.canvas_offset.1 += dy;
        self.mark_dirty();
    }

    pub fn reset_view(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.canvas_offset = (0.0, 0.0);
        self.mark_dirty();
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Snapshot the current item list onto the bounded undo stack.
    pub fn push_history(&mut self) {
        self.history.push(self.items.clone());
        if self.history.len() > MAX_HISTORY_STATES {
            let overflow = self.history.len() - MAX_HISTORY_STATES;
            self.history.drain(..overflow);
        }
    }

    /// Restore the most recent snapshot verbatim. Returns false when the
    /// stack is empty. Callers are responsible for clearing the selection.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.pop() else {
            return false;
        };
        self.items = snapshot;
        self.spatial.rebuild(self.items.iter());
        self.mark_dirty();
        true
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> ChartState {
        ChartState {
            id: self.id.clone(),
            name: self.name.clone(),
            canvas_offset: self.canvas_offset,
            zoom: self.zoom,
            items: self.items.clone(),
            next_item_id: self.next_item_id,
        }
    }

    pub fn from_state(state: ChartState) -> Self {
        let spatial = SpatialIndex::from_items(state.items.iter());
        Self {
            id: state.id,
            name: state.name,
            items: state.items,
            canvas_offset: state.canvas_offset,
            zoom: state.zoom.clamp(MIN_ZOOM, MAX_ZOOM),
            next_item_id: state.next_item_id,
            history: Vec::new(),
            spatial,
            storage_path: None,
            dirty: false,
        }
    }

    /// Read a chart from disk. Failures leave no partial state behind.
    pub fn load(path: &Path) -> Result<Self, ChartStoreError> {
        let text = fs::read_to_string(path)?;
        let state: ChartState = serde_json::from_str(&text)?;
        let mut chart = Self::from_state(state);
        chart.storage_path = Some(path.to_path_buf());
        Ok(chart)
    }

    pub fn set_storage_path(&mut self, path: PathBuf) {
        self.storage_path = Some(path);
    }

    pub fn storage_path(&self) -> Option<&Path> {
        self.storage_path.as_deref()
    }

    /// Write the chart to its storage path if it has unsaved changes.
    ///
    /// The write goes through a temp file in the target directory and an
    /// atomic rename, so a crash mid-write cannot corrupt the previous
    /// save. In-memory charts (no storage path) are a quiet no-op.
    pub fn flush_save(&mut self) -> Result<(), ChartStoreError> {
        if !self.dirty {
            return Ok(());
        }
        let Some(path) = self.storage_path.clone() else {
            tracing::trace!(chart = %self.id, "skipping save for in-memory chart");
            return Ok(());
        };
        self.save_to(&path)?;
        self.dirty = false;
        Ok(())
    }

    /// Write the chart state to an explicit path, atomically.
    pub fn save_to(&self, path: &Path) -> Result<(), ChartStoreError> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;
        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut tmp, &self.state())?;
        tmp.persist(path).map_err(|e| ChartStoreError::Io(e.error))?;
        tracing::debug!(chart = %self.id, path = %path.display(), "chart saved");
        Ok(())
    }
}

/// Directory where charts are stored by default.
pub fn charts_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("seatplan")
        .join("charts")
}
