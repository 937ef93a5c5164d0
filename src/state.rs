use std::collections::BTreeSet;

use crate::data::features::FeatureMap;
use crate::data::filter::{distinct_group_values, filtered_rows};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The dashboard body is
/// a pure function of this struct, re-run every frame.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Column indices of the well-known features, resolved on load.
    pub features: FeatureMap,

    /// Sorted distinct values of the `state` column.
    pub all_states: Vec<String>,

    /// Currently selected states. Empty means "no filter".
    pub state_filter: BTreeSet<String>,

    /// Row indices passing the current filter (cached).
    pub visible_rows: Vec<usize>,

    /// Numeric column chosen for the distribution histogram.
    pub histogram_column: Option<String>,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            features: FeatureMap::default(),
            all_states: Vec::new(),
            state_filter: BTreeSet::new(),
            visible_rows: Vec::new(),
            histogram_column: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: resolve features, pre-select all
    /// states, and reset the per-dataset controls.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.features = FeatureMap::resolve(&dataset);
        self.all_states = self
            .features
            .state
            .map(|i| distinct_group_values(&dataset.columns[i]))
            .unwrap_or_default();
        self.state_filter = self.all_states.iter().cloned().collect();
        self.visible_rows = filtered_rows(&dataset, self.features.state, &self.state_filter);
        self.histogram_column = None;

        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }

    /// Recompute `visible_rows` after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_rows = filtered_rows(ds, self.features.state, &self.state_filter);
        }
    }

    /// Toggle one state value in the filter.
    pub fn toggle_state(&mut self, value: &str) {
        if !self.state_filter.remove(value) {
            self.state_filter.insert(value.to_string());
        }
        self.refilter();
    }

    /// Select every state.
    pub fn select_all_states(&mut self) {
        self.state_filter = self.all_states.iter().cloned().collect();
        self.refilter();
    }

    /// Clear the selection. Note this shows all rows, not none.
    pub fn select_no_states(&mut self) {
        self.state_filter.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;
    use crate::stats::top_rows_by_score;

    fn loaded_state() -> AppState {
        let csv = "state,city,renewable_score\nTX,Austin,50\nTX,Dallas,90\nCA,Fresno,70\n";
        let mut state = AppState::default();
        state.set_dataset(read_csv(csv.as_bytes()).unwrap());
        state
    }

    #[test]
    fn load_preselects_all_states() {
        let state = loaded_state();
        assert_eq!(state.all_states, vec!["CA".to_string(), "TX".to_string()]);
        assert_eq!(state.state_filter.len(), 2);
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
    }

    #[test]
    fn filtering_to_tx_ranks_scores_descending() {
        let mut state = loaded_state();
        state.state_filter = BTreeSet::from(["TX".to_string()]);
        state.refilter();
        assert_eq!(state.visible_rows, vec![0, 1]);

        let ds = state.dataset.as_ref().unwrap();
        let score = ds.columns[state.features.score.unwrap()].numeric().unwrap();
        assert_eq!(
            top_rows_by_score(score, &state.visible_rows, 10),
            vec![1, 0]
        );
    }

    #[test]
    fn clearing_the_selection_shows_everything() {
        let mut state = loaded_state();
        state.select_no_states();
        assert!(state.state_filter.is_empty());
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
    }

    #[test]
    fn toggling_a_state_updates_the_view() {
        let mut state = loaded_state();
        state.toggle_state("TX");
        assert_eq!(state.visible_rows, vec![2]);
        state.toggle_state("TX");
        assert_eq!(state.visible_rows, vec![0, 1, 2]);
    }
}
