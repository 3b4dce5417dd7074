//! Chart management - create, open, save, and snapshot import/export.
//!
//! The one fallible boundary in the system lives here: loading chart files
//! and snapshots. Failures are logged, surfaced as error toasts, and never
//! touch the in-memory chart.

use super::state::Editor;
use crate::chart::{Chart, charts_dir};
use crate::notifications::Toast;
use crate::snapshot::ChartSnapshot;
use anyhow::Context as _;
use std::fs;
use std::path::Path;

impl Editor {
    /// Create a fresh chart and make it active, storage-backed under the
    /// default charts directory.
    pub fn new_chart(&mut self, name: impl Into<String>) {
        let mut chart = Chart::new(name);
        let path = charts_dir().join(format!("{}.json", chart.id));
        chart.set_storage_path(path);

        self.canvas.chart = Some(chart);
        self.canvas.selection.clear();
        self.canvas.input_state.reset();
    }

    /// Open a chart file. On failure the current chart (if any) stays
    /// active and untouched.
    pub fn open_chart(&mut self, path: &Path) -> bool {
        match Chart::load(path) {
            Ok(chart) => {
                tracing::info!(chart = %chart.id, path = %path.display(), "chart opened");
                self.canvas.chart = Some(chart);
                self.canvas.selection.clear();
                self.canvas.input_state.reset();
                true
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to open chart");
                self.ui
                    .toast_manager
                    .push(Toast::error(format!("Could not open chart: {}", e)));
                false
            }
        }
    }

    /// Persist the active chart if it has unsaved changes, surfacing any
    /// failure as a toast. Called after every mutating gesture.
    pub fn flush_chart(&mut self) {
        let Some(chart) = self.canvas.chart.as_mut() else {
            return;
        };
        if let Err(e) = chart.flush_save() {
            tracing::error!(chart = %chart.id, error = %e, "autosave failed");
            self.ui
                .toast_manager
                .push(Toast::error(format!("Save failed: {}", e)));
        }
    }

    // ========================================================================
    // Snapshots (the user-facing save/load template format)
    // ========================================================================

    /// Serialize the active chart as a named, timestamped snapshot. The
    /// embedding shell hands the text to its download/file collaborator.
    pub fn export_snapshot(&self) -> Option<String> {
        let chart = self.canvas.chart.as_ref()?;
        let snapshot = ChartSnapshot::capture(chart);
        match snapshot.to_json() {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::error!(chart = %chart.id, error = %e, "snapshot serialization failed");
                None
            }
        }
    }

    /// Write a snapshot of the active chart to a file.
    pub fn export_snapshot_to(&mut self, path: &Path) -> anyhow::Result<()> {
        let text = self
            .export_snapshot()
            .context("no chart open to snapshot")?;
        fs::write(path, text)
            .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
        self.ui
            .toast_manager
            .push(Toast::success("Snapshot saved"));
        Ok(())
    }

    /// Apply snapshot text to the active chart: replace the whole item
    /// store (history is pushed first, so the load is undoable) and clear
    /// the selection. Malformed input changes nothing.
    pub fn load_snapshot(&mut self, text: &str) -> bool {
        let Some(chart) = self.canvas.chart.as_mut() else {
            return false;
        };
        match ChartSnapshot::from_json(text) {
            Ok(snapshot) => {
                chart.replace_all(snapshot.seats);
                chart.name = snapshot.name;
                self.canvas.selection.clear();
                self.canvas.input_state.reset();
                self.flush_chart();
                self.ui
                    .toast_manager
                    .push(Toast::success("Snapshot loaded"));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "rejected snapshot");
                self.ui
                    .toast_manager
                    .push(Toast::error(format!("Could not load snapshot: {}", e)));
                false
            }
        }
    }

    /// Read a snapshot file and apply it.
    pub fn load_snapshot_from(&mut self, path: &Path) -> bool {
        match fs::read_to_string(path) {
            Ok(text) => self.load_snapshot(&text),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to read snapshot");
                self.ui
                    .toast_manager
                    .push(Toast::error(format!("Could not read snapshot: {}", e)));
                false
            }
        }
    }
}
