//! Item store tests - ordering, ids, updates, removal idempotence.

use crate::helpers::{TestChartBuilder, assert_item_count, empty_chart};
use seatplan::types::{ItemKind, Rect, point};

#[test]
fn test_new_chart_is_empty() {
    let chart = empty_chart();
    assert!(chart.items.is_empty());
    assert_eq!(chart.zoom, 1.0);
    assert_eq!(chart.next_item_id, 0);
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut chart = empty_chart();
    let a = chart.add_item((0.0, 0.0), ItemKind::Seat);
    let b = chart.add_item((50.0, 0.0), ItemKind::Couch);
    let c = chart.add_item((100.0, 0.0), ItemKind::Seat);

    let order: Vec<u64> = chart.items.iter().map(|item| item.id).collect();
    assert_eq!(order, vec![a, b, c]);
}

#[test]
fn test_new_items_get_kind_defaults() {
    let mut chart = empty_chart();
    let id = chart.add_item((10.0, 20.0), ItemKind::Couch);

    let couch = chart.get_item(id).unwrap();
    assert_eq!(couch.size, (120.0, 40.0));
    assert_eq!(couch.label, "Couch");

    let id = chart.add_item((10.0, 80.0), ItemKind::Seat);
    assert_eq!(chart.get_item(id).unwrap().label, "");
}

#[test]
fn test_update_item_patches_and_reindexes() {
    let mut chart = empty_chart();
    let id = chart.add_item((0.0, 0.0), ItemKind::Seat);

    assert!(chart.update_item(id, |item| item.position = (500.0, 500.0)));

    // Hit testing sees the new location immediately
    assert_eq!(chart.topmost_item_at(510.0, 505.0), Some(id));
    assert_eq!(chart.topmost_item_at(5.0, 5.0), None);

    assert!(!chart.update_item(999, |item| item.label = "ghost".into()));
}

#[test]
fn test_remove_is_idempotent() {
    let mut chart = empty_chart();
    let id = chart.add_item((0.0, 0.0), ItemKind::Seat);

    assert!(chart.remove_item(id));
    assert!(!chart.remove_item(id));
    assert_item_count(&chart, 0);
}

#[test]
fn test_clear_empties_store_and_index() {
    let mut chart = TestChartBuilder::new().with_n_seats_spaced(5, 60.0).build();
    chart.clear();
    assert_item_count(&chart, 0);
    assert_eq!(chart.topmost_item_at(10.0, 10.0), None);

    // Clearing an empty chart is a no-op and pushes no history
    let history = chart.history_len();
    chart.clear();
    assert_eq!(chart.history_len(), history);
}

#[test]
fn test_ids_survive_removal_without_reuse() {
    let mut chart = empty_chart();
    let a = chart.add_item((0.0, 0.0), ItemKind::Seat);
    chart.remove_item(a);
    let b = chart.add_item((0.0, 0.0), ItemKind::Seat);
    assert_ne!(a, b);
}

#[test]
fn test_display_numbering_follows_store_order() {
    // The displayed seat number is the item's position in the whole list,
    // not its seat-only rank: furniture occupies a slot too
    let mut chart = empty_chart();
    chart.add_item((0.0, 0.0), ItemKind::Seat);
    chart.add_item((60.0, 0.0), ItemKind::Table);
    chart.add_item((160.0, 0.0), ItemKind::Seat);

    let labels: Vec<String> = chart
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| item.display_label(i))
        .collect();
    assert_eq!(labels, vec!["1", "Table", "3"]);
}

#[test]
fn test_counts() {
    let chart = TestChartBuilder::new()
        .with_seat((0.0, 0.0))
        .with_seat((60.0, 0.0))
        .with_item(ItemKind::CoffeeTable, (0.0, 100.0))
        .build();
    assert_eq!(chart.seat_count(), 2);
    assert_eq!(chart.furniture_count(), 1);
}

#[test]
fn test_items_in_rect_uses_overlap_not_containment() {
    let chart = TestChartBuilder::new()
        .with_seat((0.0, 0.0)) // 40x20
        .with_seat((100.0, 0.0))
        .build();

    // Rectangle clips only the first seat's right half
    let rect = Rect::from_corners(point(20.0, 5.0), point(60.0, 15.0));
    let hits = chart.items_in_rect(&rect);
    assert_eq!(hits, vec![chart.items[0].id]);
}
