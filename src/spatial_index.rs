//! R-tree spatial index over placed items.
//!
//! Hit testing runs on every mouse-down and on every marquee update, so
//! point and rectangle queries go through an R-tree instead of a linear
//! scan over the item list.

use crate::types::{Item, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Bounding box of one item as stored in the tree.
#[derive(Debug, Clone, Copy)]
pub struct ItemEntry {
    pub item_id: u64,
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl ItemEntry {
    fn of(item: &Item) -> Self {
        Self {
            item_id: item.id,
            min_x: item.position.0,
            min_y: item.position.1,
            max_x: item.position.0 + item.size.0,
            max_y: item.position.1 + item.size.1,
        }
    }

    #[inline]
    fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Positive-area overlap with a marquee rectangle. Envelope
    /// intersection alone would also admit edge contact.
    #[inline]
    fn overlaps(&self, rect: &Rect) -> bool {
        self.min_x < rect.max_x
            && self.max_x > rect.min_x
            && self.min_y < rect.max_y
            && self.max_y > rect.min_y
    }
}

impl RTreeObject for ItemEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

impl PartialEq for ItemEntry {
    fn eq(&self, other: &Self) -> bool {
        self.item_id == other.item_id
    }
}

/// Spatial index over chart items, kept in sync by [`crate::chart::Chart`].
pub struct SpatialIndex {
    tree: RTree<ItemEntry>,
    entries: HashMap<u64, ItemEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Bulk-load the index from a full item list.
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: Iterator<Item = &'a Item>,
    {
        let entries: Vec<ItemEntry> = items.map(ItemEntry::of).collect();
        let map = entries.iter().map(|e| (e.item_id, *e)).collect();
        Self {
            tree: RTree::bulk_load(entries),
            entries: map,
        }
    }

    /// Insert or refresh one item's bounding box.
    pub fn upsert(&mut self, item: &Item) {
        if let Some(old) = self.entries.remove(&item.id) {
            self.tree.remove(&old);
        }
        let entry = ItemEntry::of(item);
        self.tree.insert(entry);
        self.entries.insert(item.id, entry);
    }

    pub fn remove(&mut self, item_id: u64) -> bool {
        match self.entries.remove(&item_id) {
            Some(entry) => {
                self.tree.remove(&entry);
                true
            }
            None => false,
        }
    }

    /// Ids of all items whose box contains the canvas-space point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<u64> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.item_id)
            .collect()
    }

    /// Ids of all items whose box overlaps the rectangle with positive area.
    pub fn query_rect(&self, rect: &Rect) -> Vec<u64> {
        let envelope = AABB::from_corners([rect.min_x, rect.min_y], [rect.max_x, rect.max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|entry| entry.overlaps(rect))
            .map(|entry| entry.item_id)
            .collect()
    }

    pub fn rebuild<'a, I>(&mut self, items: I)
    where
        I: Iterator<Item = &'a Item>,
    {
        *self = Self::from_items(items);
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
