//! Undo history tests.
//!
//! History snapshots are pushed by destructive operations only (delete,
//! clear, replace); moves and additions are not individually undoable.

use crate::helpers::{TestChartBuilder, assert_item_count, empty_chart};
use seatplan::constants::MAX_HISTORY_STATES;
use seatplan::types::{Item, ItemKind};

#[test]
fn test_undo_restores_deleted_item_verbatim() {
    let mut chart = empty_chart();
    let id = chart.add_item((25.0, 75.0), ItemKind::Seat);
    chart.update_item(id, |item| item.label = "Speaker".to_string());
    let before = chart.items.clone();

    chart.remove_item(id);
    assert_item_count(&chart, 0);

    assert!(chart.undo());
    assert_eq!(chart.items, before);
}

#[test]
fn test_undo_restores_batch_removal_in_one_step() {
    let mut chart = TestChartBuilder::new().with_n_seats_spaced(5, 60.0).build();
    let ids: Vec<u64> = chart.items.iter().map(|item| item.id).collect();

    chart.remove_items(&ids[1..4]);
    assert_item_count(&chart, 2);

    assert!(chart.undo());
    assert_item_count(&chart, 5);
}

#[test]
fn test_undo_restores_cleared_chart() {
    let mut chart = TestChartBuilder::new().with_n_seats_spaced(3, 60.0).build();
    chart.clear();
    assert!(chart.undo());
    assert_item_count(&chart, 3);
}

#[test]
fn test_undo_restores_replaced_store() {
    let mut chart = TestChartBuilder::new()
        .with_item(ItemKind::Couch, (0.0, 0.0))
        .build();
    chart.replace_all(vec![Item::new(100, (0.0, 0.0), ItemKind::Seat)]);
    assert_eq!(chart.items[0].kind, ItemKind::Seat);

    assert!(chart.undo());
    assert_eq!(chart.items[0].kind, ItemKind::Couch);
}

#[test]
fn test_undo_at_boundary_is_idempotent() {
    let mut chart = empty_chart();
    for _ in 0..10 {
        assert!(!chart.undo());
        assert_item_count(&chart, 0);
    }
}

#[test]
fn test_history_respects_limit() {
    let mut chart = empty_chart();
    for i in 0..(MAX_HISTORY_STATES + 15) {
        let id = chart.add_item((i as f32 * 10.0, 0.0), ItemKind::Seat);
        chart.remove_item(id); // each removal pushes one snapshot
    }
    assert!(chart.history_len() <= MAX_HISTORY_STATES);
}

#[test]
fn test_fresh_ids_after_undo_do_not_collide() {
    let mut chart = empty_chart();
    let a = chart.add_item((0.0, 0.0), ItemKind::Seat);
    chart.remove_item(a);
    chart.undo();

    let b = chart.add_item((50.0, 0.0), ItemKind::Seat);
    assert_ne!(a, b);
}
