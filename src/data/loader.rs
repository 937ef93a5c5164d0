use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Column, ColumnData, Dataset};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("CSV file has no header row")]
    MissingHeader,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a dataset from a file. Only comma-separated text is accepted;
/// a malformed file fails the load with no recovery.
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

fn load_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).context("opening CSV file")?;
    read_csv(file)
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse CSV from any byte stream: header row with column names, one
/// record per row. Cell values are collected per column and each column
/// is typed afterwards: numeric iff every non-empty cell parses as a
/// float, text otherwise. Empty cells become missing values.
pub fn read_csv(input: impl Read) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() {
        return Err(LoadError::MissingHeader.into());
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, cells) in raw.iter_mut().enumerate() {
            cells.push(record.get(col_idx).unwrap_or("").trim().to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| Column {
            name,
            data: infer_column(cells),
        })
        .collect();

    Ok(Dataset::new(columns))
}

/// Type a column from its raw cells. A column with no non-empty cells
/// stays text so it never enters numeric aggregates.
fn infer_column(cells: Vec<String>) -> ColumnData {
    let mut any_number = false;
    let all_numeric = cells.iter().all(|s| {
        if s.is_empty() {
            true
        } else if s.parse::<f64>().is_ok() {
            any_number = true;
            true
        } else {
            false
        }
    });

    if all_numeric && any_number {
        ColumnData::Numeric(
            cells
                .into_iter()
                .map(|s| if s.is_empty() { None } else { s.parse().ok() })
                .collect(),
        )
    } else {
        ColumnData::Text(
            cells
                .into_iter()
                .map(|s| if s.is_empty() { None } else { Some(s) })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_column_types_and_missing_cells() {
        let csv = "state,renewable_score,note\nTX,50,hot\nCA,,windy\nAZ,70.5,\n";
        let ds = read_csv(csv.as_bytes()).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.columns.len(), 3);
        assert!(!ds.columns[0].is_numeric());
        assert!(ds.columns[1].is_numeric());
        assert_eq!(
            ds.columns[1].numeric().unwrap(),
            &[Some(50.0), None, Some(70.5)]
        );
        assert_eq!(ds.columns[2].text_value(2), None);
        assert_eq!(ds.numeric_column_names(), vec!["renewable_score".to_string()]);
    }

    #[test]
    fn mixed_column_stays_text() {
        let csv = "v\n1\nfoo\n2\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(!ds.columns[0].is_numeric());
    }

    #[test]
    fn all_empty_column_stays_text() {
        let csv = "a,b\n1,\n2,\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert!(ds.columns[0].is_numeric());
        assert!(!ds.columns[1].is_numeric());
    }

    #[test]
    fn ragged_row_is_fatal() {
        let csv = "a,b\n1,2\n3\n";
        assert!(read_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = load_file(Path::new("data.parquet")).unwrap_err();
        assert!(err.to_string().contains("unsupported file extension"));
    }
}
