//! Randomized packing properties.

use mosaic_layout::metrics::{GAP, OUTER_PADDING};
use mosaic_layout::{capacity, grid_width_px, pack, Strategy as PackStrategy, Tile};
use proptest::prelude::*;

use crate::support::{assert_rows_packed, assert_same_entries, entries_from_flags, ids};

fn catalog() -> impl Strategy<Value = Vec<bool>> {
    prop::collection::vec(prop::bool::weighted(0.3), 0..60)
}

proptest! {
    #[test]
    fn prop_every_entry_yielded_once(flags in catalog(), items_per_row in 2usize..12) {
        let list = entries_from_flags(&flags);
        let packed: Vec<_> = pack(&list, items_per_row).unwrap().collect();
        assert_same_entries(&list, &packed);
    }

    #[test]
    fn prop_rows_accounted(flags in catalog(), items_per_row in 2usize..12) {
        let list = entries_from_flags(&flags);
        let run = pack(&list, items_per_row).unwrap();
        let strategy = run.strategy();
        assert_rows_packed(&run.rows(), strategy);
    }

    #[test]
    fn prop_runs_are_deterministic(flags in catalog(), items_per_row in 2usize..12) {
        let list = entries_from_flags(&flags);
        let first = ids(pack(&list, items_per_row).unwrap());
        let second = ids(pack(&list, items_per_row).unwrap());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_same_kind_keeps_relative_order(flags in catalog(), items_per_row in 2usize..12) {
        let list = entries_from_flags(&flags);
        let packed: Vec<_> = pack(&list, items_per_row).unwrap().collect();

        for featured in [true, false] {
            let expected: Vec<&str> = list
                .iter()
                .filter(|entry| entry.is_featured() == featured)
                .map(|entry| entry.id.as_str())
                .collect();
            let actual: Vec<&str> = packed
                .iter()
                .filter(|entry| entry.is_featured() == featured)
                .map(|entry| entry.id.as_str())
                .collect();
            prop_assert_eq!(actual, expected);
        }
    }

    #[test]
    fn prop_no_featured_keeps_input_order(len in 0usize..40, items_per_row in 1usize..12) {
        let list = entries_from_flags(&vec![false; len]);
        let run = pack(&list, items_per_row).unwrap();
        prop_assert_eq!(run.strategy(), PackStrategy::KeepOrder);
        let expected: Vec<&str> = list.iter().map(|entry| entry.id.as_str()).collect();
        prop_assert_eq!(ids(run), expected);
    }

    #[test]
    fn prop_capacity_monotonic(
        narrow in 0.0f64..4000.0,
        extra in 0.0f64..4000.0,
        percentage in 1.0f64..=100.0,
        item_width in 20.0f64..400.0,
        no_padding in any::<bool>(),
    ) {
        let wide = narrow + extra;
        prop_assert!(
            capacity(percentage, narrow, item_width, no_padding)
                <= capacity(percentage, wide, item_width, no_padding)
        );
    }

    #[test]
    fn prop_capacity_zero_below_one_item(item_width in 20.0f64..400.0) {
        prop_assert_eq!(capacity(100.0, item_width - 1.0, item_width, true), 0);
    }

    #[test]
    fn prop_grid_width_parses_back(columns in 0usize..50, item_width in 1u32..500) {
        let item_width = f64::from(item_width);
        let css = grid_width_px(columns, item_width);
        let value: f64 = css.strip_suffix("px").unwrap().parse().unwrap();
        prop_assert_eq!(value, columns as f64 * (item_width + GAP) + OUTER_PADDING);
    }
}
