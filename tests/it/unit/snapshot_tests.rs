//! Snapshot tests using the insta crate.
//!
//! Inline snapshots pin down the item-kind catalog and display-label
//! behavior, so an accidental change to a default or a color shows up as
//! a reviewable diff.
//!
//! To update after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use seatplan::types::{Item, ItemKind};

#[test]
fn snapshot_kind_catalog() {
    let output: String = ItemKind::all()
        .iter()
        .map(|kind| {
            let (w, h) = kind.default_size();
            format!("{}: {}x{} {}", kind.display_name(), w, h, kind.fill_color())
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @r"
    Seat: 40x20 #e5e7eb
    Couch: 120x40 #8b5cf6
    Table: 80x60 #10b981
    Coffee Table: 60x40 #f59e0b
    ");
}

#[test]
fn snapshot_default_labels() {
    let output: String = ItemKind::all()
        .iter()
        .map(|kind| format!("{:?}: {:?}", kind, kind.default_label()))
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @r#"
    Seat: ""
    Couch: "Couch"
    Table: "Table"
    CoffeeTable: "Coffee Table"
    "#);
}

#[test]
fn snapshot_display_labels() {
    let items = vec![
        Item::new(0, (0.0, 0.0), ItemKind::Seat),
        Item::new(1, (60.0, 0.0), ItemKind::Couch),
        Item::new(2, (120.0, 0.0), ItemKind::Seat),
    ];

    let output: String = items
        .iter()
        .enumerate()
        .map(|(i, item)| item.display_label(i))
        .collect::<Vec<_>>()
        .join(", ");

    insta::assert_snapshot!(output, @"1, Couch, 3");
}

#[test]
fn snapshot_kind_wire_names() {
    let output: String = ItemKind::all()
        .iter()
        .map(|kind| serde_json::to_string(kind).unwrap())
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(output, @r#"
    "seat"
    "couch"
    "table"
    "coffee_table"
    "#);
}
