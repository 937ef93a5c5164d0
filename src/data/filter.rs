use std::collections::BTreeSet;

use super::model::{Column, Dataset};

// ---------------------------------------------------------------------------
// Grouping-column filter
// ---------------------------------------------------------------------------

/// Sorted distinct non-missing values of the grouping column. These are
/// the multiselect options, all pre-selected on load.
pub fn distinct_group_values(column: &Column) -> Vec<String> {
    let mut values = BTreeSet::new();
    for row in 0..column.len() {
        if let Some(v) = column.text_value(row) {
            values.insert(v);
        }
    }
    values.into_iter().collect()
}

/// Row indices passing the current group selection.
///
/// * No grouping column → every row passes (no control is shown).
/// * Empty selection → every row passes. This mirrors the original
///   tool, where deselecting everything falls back to the unfiltered
///   view rather than showing nothing.
/// * Otherwise a row passes when its group value is in the selection;
///   rows with a missing group value drop out.
pub fn filtered_rows(
    dataset: &Dataset,
    group_idx: Option<usize>,
    selection: &BTreeSet<String>,
) -> Vec<usize> {
    let all = || (0..dataset.len()).collect();

    let Some(idx) = group_idx else {
        return all();
    };
    if selection.is_empty() {
        return all();
    }

    let column = &dataset.columns[idx];
    (0..dataset.len())
        .filter(|&row| {
            column
                .text_value(row)
                .is_some_and(|v| selection.contains(&v))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    fn dataset() -> Dataset {
        let csv = "state,renewable_score\nTX,50\nCA,70\nTX,90\n,40\n";
        read_csv(csv.as_bytes()).unwrap()
    }

    #[test]
    fn distinct_values_are_sorted_and_skip_missing() {
        let ds = dataset();
        assert_eq!(
            distinct_group_values(&ds.columns[0]),
            vec!["CA".to_string(), "TX".to_string()]
        );
    }

    #[test]
    fn no_grouping_column_passes_everything() {
        let ds = dataset();
        let selection = BTreeSet::from(["TX".to_string()]);
        assert_eq!(filtered_rows(&ds, None, &selection), vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_selection_means_no_filter() {
        let ds = dataset();
        assert_eq!(
            filtered_rows(&ds, Some(0), &BTreeSet::new()),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn selection_keeps_matching_rows_only() {
        let ds = dataset();
        let selection = BTreeSet::from(["TX".to_string()]);
        assert_eq!(filtered_rows(&ds, Some(0), &selection), vec![0, 2]);
    }

    #[test]
    fn full_selection_still_drops_missing_group_values() {
        let ds = dataset();
        let selection = BTreeSet::from(["CA".to_string(), "TX".to_string()]);
        assert_eq!(filtered_rows(&ds, Some(0), &selection), vec![0, 1, 2]);
    }
}
