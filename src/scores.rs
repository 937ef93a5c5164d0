// ---------------------------------------------------------------------------
// Static model-score table
// ---------------------------------------------------------------------------

/// Accuracy of one offline-trained model. The values come from the
/// analysis notebook that produced the dataset; nothing here is
/// computed at runtime.
#[derive(Debug, Clone, Copy)]
pub struct ModelScore {
    pub name: &'static str,
    pub accuracy: f64,
}

pub const MODEL_SCORES: &[ModelScore] = &[
    ModelScore {
        name: "Linear Regression",
        accuracy: 0.81,
    },
    ModelScore {
        name: "Random Forest",
        accuracy: 0.82,
    },
];

/// Highest accuracy in the table.
pub fn best_accuracy() -> f64 {
    MODEL_SCORES
        .iter()
        .map(|m| m.accuracy)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Name of the best model; ties go to the first entry in table order.
pub fn best_model() -> &'static str {
    let best = best_accuracy();
    MODEL_SCORES
        .iter()
        .find(|m| m.accuracy >= best)
        .map(|m| m.name)
        .unwrap_or("")
}

/// Render an accuracy as a percentage with one decimal, e.g. "82.0%".
pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.1}%", accuracy * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_forest_is_the_single_best_model() {
        assert_eq!(best_model(), "Random Forest");
        let best = best_accuracy();
        let tagged: Vec<&str> = MODEL_SCORES
            .iter()
            .filter(|m| m.accuracy >= best)
            .map(|m| m.name)
            .collect();
        assert_eq!(tagged, vec!["Random Forest"]);
    }

    #[test]
    fn accuracy_formats_to_one_decimal_percent() {
        assert_eq!(format_accuracy(0.82), "82.0%");
        assert_eq!(format_accuracy(0.815), "81.5%");
    }
}
