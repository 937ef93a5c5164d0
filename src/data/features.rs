use super::model::Dataset;

// ---------------------------------------------------------------------------
// Well-known column names
// ---------------------------------------------------------------------------

/// Categorical column used for multi-select filtering.
pub const GROUPING_COLUMN: &str = "state";

/// Secondary locality column shown in the top-10 table when present.
pub const LOCALITY_COLUMN: &str = "city";

/// Composite renewable-potential score, 0-100.
pub const SCORE_COLUMN: &str = "renewable_score";

/// Wind speed measured at three hub heights. The comparison chart
/// needs at least two of them to be worth drawing.
pub const WIND_COLUMNS: [&str; 3] = ["wind_speed_50m", "wind_speed_100m", "wind_speed_150m"];

/// Annual solar radiation metrics. One present column is enough for
/// the comparison chart.
pub const SOLAR_COLUMNS: [&str; 3] = ["annual_dni_value", "annual_ghi_value", "annual_tilt_value"];

/// Physically meaningful features eligible for the correlation heatmap.
pub const CORRELATION_FEATURES: [&str; 10] = [
    "avg_wind_speed",
    "wind_speed_50m",
    "wind_speed_100m",
    "wind_speed_150m",
    "annual_dni_value",
    "annual_ghi_value",
    "annual_tilt_value",
    "solar_potential_index",
    "wind_speed_increase_rate",
    "renewable_score",
];

// ---------------------------------------------------------------------------
// FeatureMap – optional-column lookup, resolved once per load
// ---------------------------------------------------------------------------

/// Column indices of every feature the dashboard knows about, resolved
/// once when a dataset is loaded. Sections consult this map instead of
/// doing ad hoc name lookups on every frame. Numeric features only
/// resolve to numeric columns; a text column with a matching name is
/// treated as absent.
#[derive(Debug, Clone, Default)]
pub struct FeatureMap {
    pub state: Option<usize>,
    pub city: Option<usize>,
    pub score: Option<usize>,
    pub wind: Vec<usize>,
    pub solar: Vec<usize>,
    pub correlation: Vec<usize>,
}

impl FeatureMap {
    pub fn resolve(dataset: &Dataset) -> Self {
        let numeric_index = |name: &str| {
            dataset
                .column_index(name)
                .filter(|&i| dataset.columns[i].is_numeric())
        };
        let numeric_subset = |names: &[&str]| -> Vec<usize> {
            names.iter().filter_map(|n| numeric_index(n)).collect()
        };

        FeatureMap {
            state: dataset.column_index(GROUPING_COLUMN),
            city: dataset.column_index(LOCALITY_COLUMN),
            score: numeric_index(SCORE_COLUMN),
            wind: numeric_subset(&WIND_COLUMNS),
            solar: numeric_subset(&SOLAR_COLUMNS),
            correlation: numeric_subset(&CORRELATION_FEATURES),
        }
    }

    /// The wind comparison chart needs at least two hub heights to
    /// compare; with fewer it is silently skipped.
    pub fn wind_chart_enabled(&self) -> bool {
        self.wind.len() >= 2
    }

    /// One solar metric is enough for its chart. The asymmetry with
    /// the wind gate is intentional.
    pub fn solar_chart_enabled(&self) -> bool {
        !self.solar.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv;

    #[test]
    fn resolves_present_columns_only() {
        let csv = "state,city,wind_speed_50m,wind_speed_100m,renewable_score\n\
                   TX,Austin,6.1,7.0,80\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let map = FeatureMap::resolve(&ds);

        assert_eq!(map.state, Some(0));
        assert_eq!(map.city, Some(1));
        assert_eq!(map.score, Some(4));
        assert_eq!(map.wind, vec![2, 3]);
        assert!(map.solar.is_empty());
        // wind_speed_50m, wind_speed_100m, renewable_score
        assert_eq!(map.correlation.len(), 3);
    }

    #[test]
    fn text_column_does_not_count_as_numeric_feature() {
        let csv = "wind_speed_50m,wind_speed_100m\n6.1,low\n5.9,high\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let map = FeatureMap::resolve(&ds);
        assert_eq!(map.wind, vec![0]);
    }

    #[test]
    fn wind_chart_needs_two_heights_solar_needs_one() {
        let resolve = |csv: &str| FeatureMap::resolve(&read_csv(csv.as_bytes()).unwrap());

        let none = resolve("state\nTX\n");
        assert!(!none.wind_chart_enabled());
        assert!(!none.solar_chart_enabled());

        let one_each = resolve("wind_speed_50m,annual_dni_value\n6.1,5.2\n");
        assert!(!one_each.wind_chart_enabled());
        assert!(one_each.solar_chart_enabled());

        let two_wind = resolve("wind_speed_50m,wind_speed_150m\n6.1,7.9\n");
        assert!(two_wind.wind_chart_enabled());

        let all = resolve(
            "wind_speed_50m,wind_speed_100m,wind_speed_150m,annual_ghi_value\n6.1,7.0,7.9,4.8\n",
        );
        assert!(all.wind_chart_enabled());
        assert!(all.solar_chart_enabled());
    }

    #[test]
    fn empty_map_when_nothing_matches() {
        let csv = "region,value\nnorth,1\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let map = FeatureMap::resolve(&ds);
        assert!(map.state.is_none());
        assert!(map.score.is_none());
        assert!(map.correlation.is_empty());
    }
}
