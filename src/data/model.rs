// ---------------------------------------------------------------------------
// Column – one named column of the loaded table
// ---------------------------------------------------------------------------

/// Typed storage for a column's cells. Missing cells are `None`.
///
/// A column is `Numeric` when every non-empty cell in the source file
/// parsed as a float; otherwise the raw strings are kept as `Text`.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self.data, ColumnData::Numeric(_))
    }

    /// The full cell vector when this is a numeric column.
    pub fn numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// One cell rendered as text, `None` when the cell is missing.
    /// Numeric cells use the shortest float representation.
    pub fn text_value(&self, row: usize) -> Option<String> {
        match &self.data {
            ColumnData::Numeric(v) => v.get(row).copied().flatten().map(|f| format!("{f}")),
            ColumnData::Text(v) => v.get(row).cloned().flatten(),
        }
    }

    /// One cell for table display; missing cells render as empty.
    pub fn display(&self, row: usize) -> String {
        self.text_value(row).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset for one session: rows × typed named columns.
/// Read-only after loading; filtering produces row-index views.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub columns: Vec<Column>,
    n_rows: usize,
}

impl Dataset {
    pub fn new(columns: Vec<Column>) -> Self {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        Dataset { columns, n_rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.n_rows
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index(name).map(|i| &self.columns[i])
    }

    /// Names of all numeric columns, in file order.
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter(|c| c.is_numeric())
            .map(|c| c.name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(name: &str, cells: Vec<Option<f64>>) -> Column {
        Column {
            name: name.to_string(),
            data: ColumnData::Numeric(cells),
        }
    }

    #[test]
    fn numeric_cells_render_shortest_form() {
        let col = numeric("score", vec![Some(90.0), Some(70.5), None]);
        assert_eq!(col.display(0), "90");
        assert_eq!(col.display(1), "70.5");
        assert_eq!(col.display(2), "");
    }

    #[test]
    fn dataset_counts_and_lookup() {
        let ds = Dataset::new(vec![
            numeric("a", vec![Some(1.0), Some(2.0)]),
            Column {
                name: "b".to_string(),
                data: ColumnData::Text(vec![Some("x".into()), None]),
            },
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.column_index("b"), Some(1));
        assert_eq!(ds.column_index("missing"), None);
        assert_eq!(ds.numeric_column_names(), vec!["a".to_string()]);
    }
}
