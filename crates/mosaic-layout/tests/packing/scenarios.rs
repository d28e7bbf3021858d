//! Hand-checked packing scenarios.

use mosaic_layout::{capacity, grid_width_px, overlay_columns, pack, LayoutError, Strategy};

use crate::support::{assert_rows_packed, entries, ids, init_tracing};

#[test]
fn test_capacity_drives_packing() {
    init_tracing();

    let list = entries("..FF.");
    let items_per_row = capacity(100.0, 400.0, 120.0, false);
    // ((400 - 7 + 5) - 24) / 125 = 2.99
    assert_eq!(items_per_row, 2);

    // Even rows keep input order.
    let run = pack(&list, items_per_row).unwrap();
    assert_eq!(run.strategy(), Strategy::KeepOrder);
    assert_eq!(ids(run), ["A", "B", "C", "D", "E"]);

    // A wider container gives odd rows.
    let items_per_row = capacity(100.0, 500.0, 120.0, false);
    assert_eq!(items_per_row, 3);
    let run = pack(&list, items_per_row).unwrap();
    assert_eq!(run.strategy(), Strategy::BestFit);
    assert_eq!(ids(run), ["A", "B", "E", "C", "D"]);
}

#[test]
fn test_unmeasured_container_is_not_ready() {
    let list = entries("F..");
    let items_per_row = capacity(100.0, 0.0, 120.0, false);
    assert_eq!(items_per_row, 0);
    assert!(matches!(
        pack(&list, items_per_row),
        Err(LayoutError::NoCapacity)
    ));
}

#[test]
fn test_no_featured_unchanged() {
    let list = entries("....");
    assert_eq!(ids(pack(&list, 3).unwrap()), ["A", "B", "C", "D"]);
}

#[test]
fn test_sparse_featured_unchanged() {
    let list = entries("F....");
    let rows = pack(&list, 3).unwrap().rows();

    assert_eq!(rows.len(), 2);
    assert_eq!(ids(rows[0].entries.iter().copied()), ["A", "B"]);
    assert_eq!(ids(rows[1].entries.iter().copied()), ["C", "D", "E"]);
    assert!(rows.iter().all(|row| row.is_full()));
}

#[test]
fn test_featured_never_gets_single_slot() {
    init_tracing();

    // After A and B one slot is left; C and D must wait for a new row.
    let list = entries("..FF...");
    let run = pack(&list, 3).unwrap();
    assert_eq!(run.strategy(), Strategy::BestFit);

    let rows = run.rows();
    assert_eq!(ids(rows[0].entries.iter().copied()), ["A", "B", "E"]);
    assert_eq!(ids(rows[1].entries.iter().copied()), ["C", "F", "G"]);
    assert_eq!(ids(rows[2].entries.iter().copied()), ["D"]);
    assert_rows_packed(&rows, Strategy::BestFit);
}

#[test]
fn test_interleaved_featured_rows_stay_full() {
    let list = entries(".F.F.F..F...");
    let run = pack(&list, 5).unwrap();
    assert_eq!(run.strategy(), Strategy::BestFit);

    let rows = run.rows();
    assert_rows_packed(&rows, Strategy::BestFit);
    for row in &rows[..rows.len() - 1] {
        assert!(row.is_full(), "row {} has {} filled", row.index, row.filled);
    }
}

#[test]
fn test_empty_catalog() {
    let list = entries("");
    for items_per_row in [0, 1, 3, 8] {
        assert_eq!(pack(&list, items_per_row).unwrap().count(), 0);
    }
}

#[test]
fn test_zoom_overlay_width() {
    // Zoom view: no container chrome, odd column count, centered block.
    let slots = capacity(100.0, 1000.0, 120.0, true);
    assert_eq!(slots, 8);
    let columns = overlay_columns(slots);
    assert_eq!(columns, 7);
    assert_eq!(grid_width_px(columns, 120.0), "899px");
}
