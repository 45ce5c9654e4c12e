//! In-memory tables: ordered, uniquely named columns over ordered rows of
//! [`Cell`]s, plus CSV and LaTeX persistence.

pub mod cell;
pub mod csv_io;
pub mod latex;
pub mod sort;

use std::collections::HashSet;

use crate::error::{ArtifactError, Result};
pub use cell::Cell;
pub use sort::SortKey;

/// How the numbers of a column are written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnFormat {
    /// Every cell is a present, integral number
    Integer,
    /// Numbers carry a fractional part; text is written verbatim
    Float,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Create an empty table. Column names must be unique.
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Result<Self> {
        let name = name.into();
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ArtifactError::Schema {
                    table: name,
                    message: format!("duplicate column '{}'", column),
                });
            }
        }
        Ok(Self { name, columns, rows: Vec::new() })
    }

    pub fn push_row(&mut self, row: Vec<Cell>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ArtifactError::Schema {
                table: self.name.clone(),
                message: format!(
                    "row has {} cells but table has {} columns",
                    row.len(),
                    self.columns.len()
                ),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize> {
        self.columns.iter().position(|c| c == column).ok_or_else(|| {
            ArtifactError::MissingColumn { table: self.name.clone(), column: column.to_string() }
        })
    }

    /// Cells of one column in row order.
    pub fn column(&self, column: &str) -> Result<Vec<&Cell>> {
        let idx = self.column_index(column)?;
        Ok(self.rows.iter().map(|row| &row[idx]).collect())
    }

    /// Replace every cell of a column with `f(cell)`.
    pub fn map_column<F>(&mut self, column: &str, f: F) -> Result<()>
    where
        F: Fn(&Cell) -> Cell,
    {
        let idx = self.column_index(column)?;
        for row in &mut self.rows {
            row[idx] = f(&row[idx]);
        }
        Ok(())
    }

    /// Coerce a column to numbers; unparseable cells become missing.
    pub fn coerce_numeric(&mut self, column: &str) -> Result<()> {
        self.map_column(column, Cell::to_numeric)
    }

    /// Append a column computed per row.
    pub fn add_column<F>(&mut self, column: &str, f: F) -> Result<()>
    where
        F: Fn(&[Cell]) -> Cell,
    {
        if self.columns.iter().any(|c| c == column) {
            return Err(ArtifactError::Schema {
                table: self.name.clone(),
                message: format!("duplicate column '{}'", column),
            });
        }
        for row in &mut self.rows {
            let cell = f(row);
            row.push(cell);
        }
        self.columns.push(column.to_string());
        Ok(())
    }

    pub fn drop_column(&mut self, column: &str) -> Result<()> {
        let idx = self.column_index(column)?;
        self.columns.remove(idx);
        for row in &mut self.rows {
            row.remove(idx);
        }
        Ok(())
    }

    /// Stable sort by the given keys, first key most significant.
    pub fn sort_by_keys(&mut self, keys: &[SortKey]) -> Result<()> {
        let resolved = keys
            .iter()
            .map(|k| -> Result<(usize, bool)> { Ok((self.column_index(&k.column)?, k.descending)) })
            .collect::<Result<Vec<_>>>()?;
        self.rows.sort_by(|a, b| sort::compare_rows(a, b, &resolved));
        Ok(())
    }

    /// A column is numeric when it holds at least one number and no text.
    pub fn is_numeric_column(&self, idx: usize) -> bool {
        let mut any_number = false;
        for row in &self.rows {
            match &row[idx] {
                Cell::Text(_) => return false,
                Cell::Number(_) => any_number = true,
                Cell::Missing => {}
            }
        }
        any_number
    }

    pub fn column_format(&self, idx: usize) -> ColumnFormat {
        if !self.rows.is_empty() && self.rows.iter().all(|row| row[idx].is_integral()) {
            ColumnFormat::Integer
        } else {
            ColumnFormat::Float
        }
    }

    /// Cell text for output, with `na_rep` standing in for missing values.
    pub fn render_cell(value: &Cell, format: ColumnFormat, na_rep: &str) -> String {
        match (value, format) {
            (Cell::Text(s), _) => s.clone(),
            (Cell::Number(v), ColumnFormat::Integer) => cell::format_integer(*v),
            (Cell::Number(v), ColumnFormat::Float) => cell::format_float(*v),
            (Cell::Missing, _) => na_rep.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut t = Table::new(
            "t",
            vec!["Dataset".to_string(), "Accuracy (%)".to_string()],
        )
        .unwrap();
        for (d, a) in [("WM-811K", "97.1"), ("MixedWM38", "bad"), ("WM-811K", "99.2")] {
            t.push_row(vec![Cell::from_field(d), Cell::from_field(a)]).unwrap();
        }
        t
    }

    #[test]
    fn test_duplicate_columns_rejected() {
        let result = Table::new("t", vec!["a".into(), "a".into()]);
        assert!(matches!(result, Err(ArtifactError::Schema { .. })));
    }

    #[test]
    fn test_missing_column_is_named() {
        let t = sample();
        match t.column_index("Year") {
            Err(ArtifactError::MissingColumn { table, column }) => {
                assert_eq!(table, "t");
                assert_eq!(column, "Year");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_sort_keeps_every_row() {
        let mut t = sample();
        t.coerce_numeric("Accuracy (%)").unwrap();
        t.sort_by_keys(&[SortKey::asc("Dataset"), SortKey::desc("Accuracy (%)")]).unwrap();
        assert_eq!(t.len(), 3);
        let acc: Vec<_> = t.column("Accuracy (%)").unwrap().into_iter().cloned().collect();
        assert_eq!(acc, vec![Cell::Missing, Cell::Number(99.2), Cell::Number(97.1)]);
    }

    #[test]
    fn test_add_and_drop_column() {
        let mut t = sample();
        t.add_column("helper", |_| Cell::Number(1.0)).unwrap();
        assert_eq!(t.columns().len(), 3);
        assert!(t.add_column("helper", |_| Cell::Missing).is_err());
        t.drop_column("helper").unwrap();
        assert_eq!(t.columns(), &["Dataset".to_string(), "Accuracy (%)".to_string()]);
        assert!(t.rows().iter().all(|r| r.len() == 2));
    }

    #[test]
    fn test_column_format() {
        let mut t = Table::new("t", vec!["Year".into()]).unwrap();
        t.push_row(vec![Cell::Number(2019.0)]).unwrap();
        t.push_row(vec![Cell::Number(2021.0)]).unwrap();
        assert_eq!(t.column_format(0), ColumnFormat::Integer);
        t.push_row(vec![Cell::Missing]).unwrap();
        assert_eq!(t.column_format(0), ColumnFormat::Float);
        assert!(t.is_numeric_column(0));
    }
}
