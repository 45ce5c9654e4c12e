use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::debug;

use super::{Cell, Table};
use crate::error::{ArtifactError, Result};

/// Read a headed CSV file. The table is named after the file stem.
pub fn read_csv(path: &Path) -> Result<Table> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("table")
        .to_string();
    let file = File::open(path)?;
    let table = read_csv_from(name, file)?;
    debug!(path = %path.display(), rows = table.len(), "Loaded table");
    Ok(table)
}

/// Read a headed CSV from any reader. Short rows are padded with missing cells.
pub fn read_csv_from<R: Read>(name: String, reader: R) -> Result<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    let width = headers.len();
    let mut table = Table::new(name, headers)?;

    for record in rdr.records() {
        let record = record?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            return Err(ArtifactError::Schema {
                table: table.name().to_string(),
                message: format!(
                    "line {} has {} fields, expected at most {}",
                    line,
                    record.len(),
                    width
                ),
            });
        }
        let mut row: Vec<Cell> = record.iter().map(Cell::from_field).collect();
        row.resize(width, Cell::Missing);
        table.push_row(row)?;
    }

    Ok(table)
}

/// Write the table with a header row, all columns in order.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_csv_to(table, file)
}

pub fn write_csv_to<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(table.columns())?;

    let formats: Vec<_> = (0..table.columns().len()).map(|i| table.column_format(i)).collect();
    for row in table.rows() {
        let fields = row
            .iter()
            .zip(&formats)
            .map(|(cell, format)| Table::render_cell(cell, *format, ""));
        wtr.write_record(fields)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Table> {
        read_csv_from("t".to_string(), text.as_bytes())
    }

    #[test]
    fn test_quoted_fields_and_padding() {
        let t = read("Dataset,Total Samples,Classes\n\"WM-811K\",\"811,457\",9\nMixedWM38,38015\n")
            .unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows()[0][1], Cell::Text("811,457".into()));
        assert_eq!(t.rows()[1][2], Cell::Missing);
    }

    #[test]
    fn test_long_row_is_schema_error() {
        let result = read("a,b\n1,2,3\n");
        assert!(matches!(result, Err(ArtifactError::Schema { .. })));
    }

    #[test]
    fn test_write_formats_numeric_columns() {
        let mut t = read("Dataset,Year,Accuracy (%)\nA,2019,97.5\nB,2020,x\n").unwrap();
        t.coerce_numeric("Year").unwrap();
        t.coerce_numeric("Accuracy (%)").unwrap();

        let mut out = Vec::new();
        write_csv_to(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Dataset,Year,Accuracy (%)\nA,2019,97.5\nB,2020,\n");
    }

    #[test]
    fn test_write_quotes_when_needed() {
        let t = read("Challenge,Impact\n\"Class imbalance, rare defects\",High\n").unwrap();
        let mut out = Vec::new();
        write_csv_to(&t, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Class imbalance, rare defects\",High"));
    }
}
