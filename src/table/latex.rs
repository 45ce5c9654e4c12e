use std::fmt::Write as FmtWrite;

use super::Table;
use crate::error::{ArtifactError, Result};

/// Render a booktabs `tabular` for the table, escaping LaTeX specials.
///
/// Fails when a header or cell holds a control character (other than tab),
/// since a tabular row cannot carry embedded line breaks.
pub fn render_latex(table: &Table, na_rep: &str) -> Result<String> {
    let ncols = table.columns().len();
    let numeric: Vec<bool> = (0..ncols).map(|i| table.is_numeric_column(i)).collect();
    let formats: Vec<_> = (0..ncols).map(|i| table.column_format(i)).collect();

    let spec: String = numeric.iter().map(|&n| if n { 'r' } else { 'l' }).collect();

    let mut out = String::new();
    writeln!(out, "\\begin{{tabular}}{{{}}}", spec).unwrap();
    out.push_str("\\toprule\n");
    write_row(&mut out, table.columns().iter().map(String::as_str))?;
    out.push_str("\\midrule\n");

    for row in table.rows() {
        let cells: Vec<String> = row
            .iter()
            .zip(&formats)
            .map(|(cell, format)| Table::render_cell(cell, *format, na_rep))
            .collect();
        write_row(&mut out, cells.iter().map(String::as_str))?;
    }

    out.push_str("\\bottomrule\n");
    out.push_str("\\end{tabular}\n");
    Ok(out)
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) -> Result<()> {
    let escaped = cells.map(escape_latex).collect::<Result<Vec<_>>>()?;
    out.push_str(&escaped.join(" & "));
    out.push_str(" \\\\\n");
    Ok(())
}

/// Escape the characters LaTeX treats specially.
pub fn escape_latex(text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash "),
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '$' => out.push_str("\\$"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            '{' => out.push_str("\\{"),
            '}' => out.push_str("\\}"),
            '~' => out.push_str("\\textasciitilde "),
            '^' => out.push_str("\\textasciicircum "),
            '\t' => out.push(' '),
            c if c.is_control() => {
                return Err(ArtifactError::Latex(format!(
                    "unsupported control character U+{:04X} in {:?}",
                    c as u32, text
                )))
            }
            c => out.push(c),
        }
    }
    Ok(out)
}
