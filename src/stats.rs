use std::cmp::Ordering;

// ---------------------------------------------------------------------------
// Value collection over a row view
// ---------------------------------------------------------------------------

/// Non-missing values of a numeric column restricted to the given rows.
/// NaN cells count as missing.
pub fn collect_present(column: &[Option<f64>], rows: &[usize]) -> Vec<f64> {
    rows.iter()
        .filter_map(|&r| column.get(r).copied().flatten())
        .filter(|v| !v.is_nan())
        .collect()
}

/// Mean over the given rows, `None` when no value is present.
pub fn mean_of(column: &[Option<f64>], rows: &[usize]) -> Option<f64> {
    let values = collect_present(column, rows);
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// Standard describe() output for one numeric column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Count, mean, sample standard deviation, min, quartiles and max over
/// the given values. An empty input yields count 0 and NaN statistics
/// rather than an error, so an empty filter result renders as NaNs.
pub fn describe(values: &[f64]) -> ColumnSummary {
    let n = values.len();
    if n == 0 {
        return ColumnSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    };

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    ColumnSummary {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q75: quantile(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Linear-interpolation quantile over an already sorted slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Equal-width histogram: `bins + 1` edges and one count per bin.
#[derive(Debug, Clone)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin values into `bins` equal-width bins spanning [min, max]; the
/// maximum lands in the last bin. When every value is equal the range
/// widens to value ± 0.5. `None` when there is nothing to bin.
pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let edges = (0..=bins).map(|i| lo + i as f64 * width).collect();

    Some(Histogram { edges, counts })
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlation matrix over the given columns and row
/// view. Each pair uses the rows where both values are present; the
/// diagonal is fixed at 1.0. Degenerate pairs (fewer than two shared
/// observations, or zero variance) yield NaN.
pub fn correlation_matrix(columns: &[&[Option<f64>]], rows: &[usize]) -> Vec<Vec<f64>> {
    let k = columns.len();
    let mut matrix = vec![vec![f64::NAN; k]; k];

    for i in 0..k {
        matrix[i][i] = 1.0;
        for j in (i + 1)..k {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for &r in rows {
                let a = columns[i].get(r).copied().flatten();
                let b = columns[j].get(r).copied().flatten();
                if let (Some(a), Some(b)) = (a, b) {
                    if !a.is_nan() && !b.is_nan() {
                        xs.push(a);
                        ys.push(b);
                    }
                }
            }
            let r = pearson(&xs, &ys);
            matrix[i][j] = r;
            matrix[j][i] = r;
        }
    }
    matrix
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return f64::NAN;
    }
    let mx = xs.iter().sum::<f64>() / n as f64;
    let my = ys.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }
    let denom = (vx * vy).sqrt();
    if denom == 0.0 {
        f64::NAN
    } else {
        cov / denom
    }
}

// ---------------------------------------------------------------------------
// Top-N ranking
// ---------------------------------------------------------------------------

/// The `n` highest-scoring rows of the view, descending. The sort is
/// stable, so ties keep their original relative order; rows with a
/// missing score sort last.
pub fn top_rows_by_score(column: &[Option<f64>], rows: &[usize], n: usize) -> Vec<usize> {
    let score = |r: usize| {
        column
            .get(r)
            .copied()
            .flatten()
            .filter(|v| !v.is_nan())
    };

    let mut ranked: Vec<usize> = rows.to_vec();
    ranked.sort_by(|&a, &b| match (score(a), score(b)) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn describe_matches_known_values() {
        let s = describe(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(s.count, 4);
        approx(s.mean, 2.5);
        approx(s.std, 1.2909944487358056);
        approx(s.min, 1.0);
        approx(s.q25, 1.75);
        approx(s.median, 2.5);
        approx(s.q75, 3.25);
        approx(s.max, 4.0);
    }

    #[test]
    fn describe_empty_yields_nans_not_panic() {
        let s = describe(&[]);
        assert_eq!(s.count, 0);
        assert!(s.mean.is_nan());
        assert!(s.max.is_nan());
    }

    #[test]
    fn histogram_mass_equals_value_count() {
        let values: Vec<f64> = (0..30).map(|i| i as f64).collect();
        let hist = histogram(&values, 30).unwrap();
        assert_eq!(hist.edges.len(), 31);
        assert_eq!(hist.total(), 30);
        assert!(hist.counts.iter().all(|&c| c == 1));
    }

    #[test]
    fn histogram_handles_constant_values() {
        let hist = histogram(&[5.0, 5.0, 5.0, 5.0], 30).unwrap();
        assert_eq!(hist.total(), 4);
        approx(hist.edges[0], 4.5);
        approx(hist.edges[30], 5.5);
    }

    #[test]
    fn histogram_of_nothing_is_none() {
        assert!(histogram(&[], 30).is_none());
    }

    #[test]
    fn correlation_diagonal_is_one_and_signs_match() {
        let a: Vec<Option<f64>> = (0..10).map(|i| Some(i as f64)).collect();
        let b: Vec<Option<f64>> = (0..10).map(|i| Some(2.0 * i as f64 + 1.0)).collect();
        let c: Vec<Option<f64>> = (0..10).map(|i| Some(-(i as f64))).collect();
        let rows: Vec<usize> = (0..10).collect();

        let m = correlation_matrix(&[&a, &b, &c], &rows);
        for (i, row) in m.iter().enumerate() {
            approx(row[i], 1.0);
        }
        approx(m[0][1], 1.0);
        approx(m[0][2], -1.0);
        approx(m[1][2], -1.0);
    }

    #[test]
    fn constant_column_correlates_as_nan_off_diagonal() {
        let a: Vec<Option<f64>> = (0..5).map(|i| Some(i as f64)).collect();
        let flat: Vec<Option<f64>> = vec![Some(3.0); 5];
        let rows: Vec<usize> = (0..5).collect();

        let m = correlation_matrix(&[&a, &flat], &rows);
        approx(m[1][1], 1.0);
        assert!(m[0][1].is_nan());
    }

    #[test]
    fn correlation_pairs_skip_missing_cells() {
        let a = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let b = vec![Some(2.0), Some(9.0), Some(6.0), Some(8.0)];
        let rows: Vec<usize> = (0..4).collect();

        let m = correlation_matrix(&[&a, &b], &rows);
        approx(m[0][1], 1.0); // remaining pairs are perfectly linear
    }

    #[test]
    fn top_rows_sorted_descending_with_stable_ties() {
        let scores = vec![Some(5.0), Some(9.0), Some(9.0), Some(1.0), None];
        let rows: Vec<usize> = (0..5).collect();

        assert_eq!(top_rows_by_score(&scores, &rows, 10), vec![1, 2, 0, 3, 4]);
        assert_eq!(top_rows_by_score(&scores, &rows, 2), vec![1, 2]);
    }

    #[test]
    fn top_rows_respects_row_view() {
        let scores = vec![Some(50.0), Some(90.0), Some(70.0)];
        // Pre-filtered view: only the TX rows.
        assert_eq!(top_rows_by_score(&scores, &[0, 1], 10), vec![1, 0]);
    }
}
