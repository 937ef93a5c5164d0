use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::features::FeatureMap;
use crate::data::model::Dataset;
use crate::scores::{self, MODEL_SCORES};
use crate::state::AppState;
use crate::stats;
use crate::ui::charts;

const SUCCESS_GREEN: Color32 = Color32::from_rgb(60, 160, 60);

// ---------------------------------------------------------------------------
// Dashboard body – the full section sequence
// ---------------------------------------------------------------------------

/// Render the dashboard for the current state. With no dataset loaded
/// this is only the upload prompt; otherwise every section runs in a
/// fixed order, each gated by the columns actually present.
pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        dataset,
        features,
        visible_rows,
        histogram_column,
        ..
    } = state;

    let Some(ds) = dataset.as_ref() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Upload a renewable-energy CSV to continue  (File → Open…)");
        });
        return;
    };
    let rows = visible_rows.as_slice();

    ui.heading("Renewable Energy Potential Dashboard");
    ui.label(
        "Insights from a renewable-energy data analysis project: data exploration, \
         model results and visual analytics in one interactive view.",
    );
    ui.separator();

    overview(ui, ds, rows);
    model_performance(ui);
    summary_statistics(ui, ds, rows);
    distribution(ui, ds, rows, histogram_column);
    wind_comparison(ui, ds, rows, features);
    solar_comparison(ui, ds, rows, features);
    renewable_potential(ui, ds, rows, features);
    correlation(ui, ds, rows, features);

    ui.add_space(10.0);
    ui.label(RichText::new("Dashboard loaded successfully.").color(SUCCESS_GREEN));
}

fn section_header(ui: &mut Ui, title: &str) {
    ui.add_space(14.0);
    ui.heading(title);
    ui.add_space(4.0);
}

/// Small labelled figure, optionally tagged below the value.
fn metric(ui: &mut Ui, label: &str, value: String, tag: Option<&str>) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).size(22.0).strong());
        if let Some(tag) = tag {
            ui.label(RichText::new(tag).small().color(SUCCESS_GREEN));
        }
    });
}

// ---------------------------------------------------------------------------
// Dataset overview
// ---------------------------------------------------------------------------

fn overview(ui: &mut Ui, ds: &Dataset, rows: &[usize]) {
    section_header(ui, "Dataset Overview");

    let numeric = ds.numeric_column_names().len();
    ui.columns(3, |cols| {
        metric(&mut cols[0], "Rows", rows.len().to_string(), None);
        metric(&mut cols[1], "Columns", ds.columns.len().to_string(), None);
        metric(&mut cols[2], "Numeric Features", numeric.to_string(), None);
    });
    ui.add_space(6.0);

    let head: Vec<usize> = rows.iter().copied().take(5).collect();
    TableBuilder::new(ui)
        .id_salt("preview_table")
        .striped(true)
        .vscroll(false)
        .columns(TableColumn::auto().at_least(60.0), ds.columns.len())
        .header(20.0, |mut header| {
            for col in &ds.columns {
                header.col(|ui| {
                    ui.strong(&col.name);
                });
            }
        })
        .body(|mut body| {
            for &r in &head {
                body.row(18.0, |mut row| {
                    for col in &ds.columns {
                        row.col(|ui| {
                            ui.label(col.display(r));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Model performance (static score table)
// ---------------------------------------------------------------------------

fn model_performance(ui: &mut Ui) {
    section_header(ui, "Machine Learning Model Performance");

    let best = scores::best_accuracy();
    ui.columns(MODEL_SCORES.len(), |cols| {
        for (col, model) in cols.iter_mut().zip(MODEL_SCORES) {
            let tag = (model.accuracy >= best).then_some("Best Model");
            metric(col, model.name, scores::format_accuracy(model.accuracy), tag);
        }
    });
    ui.label(
        RichText::new(format!("Best performing model: {}", scores::best_model()))
            .color(SUCCESS_GREEN),
    );
}

// ---------------------------------------------------------------------------
// Summary statistics
// ---------------------------------------------------------------------------

fn fmt_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.3}")
    }
}

fn summary_statistics(ui: &mut Ui, ds: &Dataset, rows: &[usize]) {
    section_header(ui, "Summary Statistics");

    let numeric: Vec<&crate::data::model::Column> =
        ds.columns.iter().filter(|c| c.is_numeric()).collect();
    if numeric.is_empty() {
        ui.label("No numeric columns in the dataset.");
        return;
    }

    let headers = [
        "feature", "count", "mean", "std", "min", "25%", "50%", "75%", "max",
    ];
    TableBuilder::new(ui)
        .id_salt("summary_table")
        .striped(true)
        .vscroll(false)
        .columns(TableColumn::auto().at_least(56.0), headers.len())
        .header(20.0, |mut header| {
            for h in headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for col in &numeric {
                let values = stats::collect_present(col.numeric().unwrap_or(&[]), rows);
                let s = stats::describe(&values);
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&col.name);
                    });
                    row.col(|ui| {
                        ui.label(s.count.to_string());
                    });
                    for v in [s.mean, s.std, s.min, s.q25, s.median, s.q75, s.max] {
                        row.col(|ui| {
                            ui.label(fmt_stat(v));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution analysis
// ---------------------------------------------------------------------------

fn distribution(ui: &mut Ui, ds: &Dataset, rows: &[usize], selection: &mut Option<String>) {
    section_header(ui, "Distribution Analysis");

    let numeric_cols = ds.numeric_column_names();
    if numeric_cols.is_empty() {
        ui.label("No numeric columns to plot.");
        return;
    }

    // Fall back to the first numeric column when nothing valid is
    // selected (fresh load, or the column vanished with a new file).
    if selection
        .as_deref()
        .map_or(true, |s| !numeric_cols.iter().any(|c| c == s))
    {
        *selection = Some(numeric_cols[0].clone());
    }
    let mut current = selection.clone().unwrap_or_default();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Column:");
        egui::ComboBox::from_id_salt("distribution_column")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for col in &numeric_cols {
                    if ui.selectable_label(current == *col, col).clicked() {
                        current = col.clone();
                    }
                }
            });
    });
    *selection = Some(current.clone());

    let Some(col) = ds.column(&current) else {
        return;
    };
    let values = stats::collect_present(col.numeric().unwrap_or(&[]), rows);
    match stats::histogram(&values, 30) {
        Some(hist) => charts::histogram_plot(ui, "distribution_hist", &hist, &current),
        None => {
            ui.label("No data to plot for the current filter.");
        }
    }
}

// ---------------------------------------------------------------------------
// Wind / solar comparisons
// ---------------------------------------------------------------------------

fn mean_entries(ds: &Dataset, rows: &[usize], indices: &[usize]) -> Vec<(String, f64)> {
    indices
        .iter()
        .map(|&i| {
            let col = &ds.columns[i];
            let mean = stats::mean_of(col.numeric().unwrap_or(&[]), rows).unwrap_or(f64::NAN);
            (col.name.clone(), mean)
        })
        .collect()
}

/// Skipped entirely unless at least two hub heights are present.
fn wind_comparison(ui: &mut Ui, ds: &Dataset, rows: &[usize], features: &FeatureMap) {
    if !features.wind_chart_enabled() {
        return;
    }
    section_header(ui, "Wind Speed Comparison");
    let entries = mean_entries(ds, rows, &features.wind);
    charts::mean_bars_plot(ui, "wind_means", &entries, "Average Wind Speed (m/s)");
}

/// A single present solar metric is enough to draw the chart.
fn solar_comparison(ui: &mut Ui, ds: &Dataset, rows: &[usize], features: &FeatureMap) {
    if !features.solar_chart_enabled() {
        return;
    }
    section_header(ui, "Solar Energy Comparison");
    let entries = mean_entries(ds, rows, &features.solar);
    charts::mean_bars_plot(
        ui,
        "solar_means",
        &entries,
        "Average Solar Radiation (kWh/m²/day)",
    );
}

// ---------------------------------------------------------------------------
// Renewable potential (score histogram + top-10 table)
// ---------------------------------------------------------------------------

fn renewable_potential(ui: &mut Ui, ds: &Dataset, rows: &[usize], features: &FeatureMap) {
    let Some(score_idx) = features.score else {
        return;
    };
    section_header(ui, "Renewable Energy Potential");

    let score_col = &ds.columns[score_idx];
    let values = stats::collect_present(score_col.numeric().unwrap_or(&[]), rows);
    match stats::histogram(&values, 30) {
        Some(hist) => charts::histogram_plot(ui, "score_hist", &hist, "Renewable Score (0-100)"),
        None => {
            ui.label("No score values for the current filter.");
        }
    }

    section_header(ui, "Top 10 Locations by Renewable Potential");
    let top = stats::top_rows_by_score(score_col.numeric().unwrap_or(&[]), rows, 10);
    let display_cols: Vec<usize> = [features.state, features.city, Some(score_idx)]
        .into_iter()
        .flatten()
        .collect();

    TableBuilder::new(ui)
        .id_salt("top10_table")
        .striped(true)
        .vscroll(false)
        .columns(TableColumn::auto().at_least(80.0), display_cols.len())
        .header(20.0, |mut header| {
            for &i in &display_cols {
                header.col(|ui| {
                    ui.strong(&ds.columns[i].name);
                });
            }
        })
        .body(|mut body| {
            for &r in &top {
                body.row(18.0, |mut row| {
                    for &i in &display_cols {
                        row.col(|ui| {
                            ui.label(ds.columns[i].display(r));
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Correlation analysis
// ---------------------------------------------------------------------------

/// A one-column matrix carries no information, so anything below two
/// present allow-listed features skips the section.
fn correlation(ui: &mut Ui, ds: &Dataset, rows: &[usize], features: &FeatureMap) {
    if features.correlation.len() < 2 {
        return;
    }
    section_header(ui, "Correlation Analysis");

    let labels: Vec<String> = features
        .correlation
        .iter()
        .map(|&i| ds.columns[i].name.clone())
        .collect();
    let cols: Vec<&[Option<f64>]> = features
        .correlation
        .iter()
        .map(|&i| ds.columns[i].numeric().unwrap_or(&[]))
        .collect();
    let matrix = stats::correlation_matrix(&cols, rows);
    charts::correlation_heatmap(ui, &labels, &matrix);
}
