//! Orient - align and evenly distribute a multi-item selection.
//!
//! The selection's dominant axis is the one with the larger spread of item
//! centers. Along it, items are redistributed to equal center spacing
//! between the current extremes (the span does not change); across it,
//! every center is pinned to the mean.

use super::state::Editor;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Editor {
    /// Align and evenly space the current selection. Requires at least two
    /// selected items; returns false when there is nothing to do.
    pub fn orient_selection(&mut self) -> bool {
        let Some(chart) = self.canvas.chart.as_mut() else {
            return false;
        };

        // Selected items in store order, as (id, center, size)
        let picked: Vec<(u64, (f32, f32), (f32, f32))> = chart
            .items
            .iter()
            .filter(|item| self.canvas.selection.contains(item.id))
            .map(|item| (item.id, item.center(), item.size))
            .collect();
        if picked.len() < 2 {
            return false;
        }

        let xs = picked.iter().map(|(_, c, _)| c.0);
        let ys = picked.iter().map(|(_, c, _)| c.1);
        let (min_x, max_x) = min_max(xs);
        let (min_y, max_y) = min_max(ys);

        // Ties go to X, matching reading order for square-ish selections
        let axis = if (max_x - min_x) >= (max_y - min_y) {
            Axis::X
        } else {
            Axis::Y
        };

        let n = picked.len() as f32;
        let mean_perp = match axis {
            Axis::X => picked.iter().map(|(_, c, _)| c.1).sum::<f32>() / n,
            Axis::Y => picked.iter().map(|(_, c, _)| c.0).sum::<f32>() / n,
        };
        let (lo, hi) = match axis {
            Axis::X => (min_x, max_x),
            Axis::Y => (min_y, max_y),
        };

        // Stable sort by existing center keeps equal-center items in store
        // order, so redistribution never swaps neighbors arbitrarily
        let mut ordered = picked;
        ordered.sort_by(|a, b| {
            let (ka, kb) = match axis {
                Axis::X => (a.1.0, b.1.0),
                Axis::Y => (a.1.1, b.1.1),
            };
            ka.total_cmp(&kb)
        });

        let step = (hi - lo) / (ordered.len() as f32 - 1.0);
        for (k, (id, _, size)) in ordered.iter().enumerate() {
            let target = lo + step * k as f32;
            let (w, h) = *size;
            let position = match axis {
                Axis::X => (target - w / 2.0, mean_perp - h / 2.0),
                Axis::Y => (mean_perp - w / 2.0, target - h / 2.0),
            };
            chart.update_item(*id, |item| item.position = position);
        }

        self.flush_chart();
        true
    }
}

fn min_max(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}
