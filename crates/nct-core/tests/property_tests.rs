use nct_core::{parse_csv, parse_csv_line, parse_kr_number, parse_nct_rows, NctParser, ParserConfig};
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("O".to_string()),
        Just("Narratives".to_string()),
        Just("Commitments".to_string()),
        Just("Tasks".to_string()),
        Just("Name".to_string()),
        Just("Narrative".to_string()),
        Just("Commitment".to_string()),
        Just("Task 1".to_string()),
        Just("Done".to_string()),
        Just("KR".to_string()),
        "[a-zA-Z0-9 $,.%]{0,12}",
    ]
}

fn grid_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(proptest::collection::vec(cell_strategy(), 0..6), 0..30)
}

proptest! {
    #[test]
    fn prop_parse_is_deterministic(grid in grid_strategy()) {
        let parser = NctParser::new(ParserConfig::default());
        let first = parser.parse(&grid);
        let second = parser.parse(&grid);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_targets_are_finite(grid in grid_strategy()) {
        let data = parse_nct_rows(&grid, None);
        for narrative in &data.narratives {
            prop_assert!(narrative.target.is_finite());
        }
    }

    #[test]
    fn prop_sort_orders_are_dense(grid in grid_strategy()) {
        let data = parse_nct_rows(&grid, None);
        let mut commitment_orders = Vec::new();
        for (idx, narrative) in data.narratives.iter().enumerate() {
            prop_assert_eq!(narrative.sort_order, idx);
            let orders: Vec<usize> = narrative.commitments.iter().map(|c| c.sort_order).collect();
            prop_assert!(orders.windows(2).all(|w| w[0] < w[1]));
            commitment_orders.extend(orders);
            for task in narrative.commitments.iter().flat_map(|c| &c.tasks) {
                prop_assert!(!task.text.is_empty());
            }
        }
        commitment_orders.sort_unstable();
        let expected: Vec<usize> = (0..commitment_orders.len()).collect();
        prop_assert_eq!(commitment_orders, expected);
    }

    #[test]
    fn prop_kr_plain_integers(n in 0u32..1_000_000) {
        prop_assert_eq!(parse_kr_number(&n.to_string()), Some(f64::from(n)));
    }

    #[test]
    fn prop_kr_thousands_suffix(n in 0u32..100_000) {
        prop_assert_eq!(parse_kr_number(&format!("{n}k leads")), Some(f64::from(n) * 1_000.0));
    }

    #[test]
    fn prop_kr_without_digits_is_none(text in "[a-zA-Z %]{0,20}") {
        prop_assert_eq!(parse_kr_number(&text), None);
    }

    #[test]
    fn prop_csv_row_count_matches_lines(lines in proptest::collection::vec("[a-z,]{0,10}", 1..10)) {
        let text = lines.join("\n");
        prop_assert_eq!(parse_csv(&text).len(), lines.len());
    }

    #[test]
    fn prop_unquoted_cells_split_on_commas(cells in proptest::collection::vec("[a-z]{0,6}", 1..8)) {
        let line = cells.join(",");
        prop_assert_eq!(parse_csv_line(&line), cells);
    }
}
