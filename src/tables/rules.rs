use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::*;
use crate::error::Result;
use crate::table::{Cell, SortKey, Table};

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]{4})").expect("year pattern is valid"));

/// A per-table cleaning rule. Rules may coerce and reorder but never drop rows.
pub trait TableRule: Send + Sync {
    fn describe(&self) -> &'static str;
    fn apply(&self, table: &mut Table) -> Result<()>;
}

/// Coerce some columns to numbers, then sort.
pub struct NumericSort {
    numeric: Vec<&'static str>,
    keys: Vec<SortKey>,
}

impl NumericSort {
    pub fn new(numeric: Vec<&'static str>, keys: Vec<SortKey>) -> Self {
        Self { numeric, keys }
    }

    /// Dataset ascending, accuracy descending.
    pub fn model_performance() -> Self {
        Self::new(
            vec![COL_ACCURACY],
            vec![SortKey::asc(COL_DATASET), SortKey::desc(COL_ACCURACY)],
        )
    }

    /// Hardware ascending, inference speed descending.
    pub fn hardware_speeds() -> Self {
        Self::new(
            vec![COL_INFERENCE_SPEED],
            vec![SortKey::asc(COL_HARDWARE), SortKey::desc(COL_INFERENCE_SPEED)],
        )
    }

    /// Year ascending.
    pub fn datasets() -> Self {
        Self::new(vec![COL_YEAR], vec![SortKey::asc(COL_YEAR)])
    }
}

impl TableRule for NumericSort {
    fn describe(&self) -> &'static str {
        "coerce numeric columns and sort"
    }

    fn apply(&self, table: &mut Table) -> Result<()> {
        for column in &self.numeric {
            table.coerce_numeric(column)?;
        }
        table.sort_by_keys(&self.keys)
    }
}

/// Persist the table as read.
pub struct Passthrough;

impl TableRule for Passthrough {
    fn describe(&self) -> &'static str {
        "unchanged"
    }

    fn apply(&self, _table: &mut Table) -> Result<()> {
        Ok(())
    }
}

/// Sort by the first four-digit year found in the `Era` text.
pub struct EraYearSort;

impl TableRule for EraYearSort {
    fn describe(&self) -> &'static str {
        "sort by year extracted from era"
    }

    fn apply(&self, table: &mut Table) -> Result<()> {
        let era_idx = table.column_index(COL_ERA)?;
        table.add_column(COL_ERA_NUMERIC, |row| match row[era_idx].as_text() {
            Some(era) => Cell::number(extract_year(&era)),
            None => Cell::Missing,
        })?;
        table.sort_by_keys(&[SortKey::asc(COL_ERA_NUMERIC)])?;
        table.drop_column(COL_ERA_NUMERIC)
    }
}

/// First run of four digits in `text`, as a number.
pub fn extract_year(text: &str) -> Option<f64> {
    YEAR_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::csv_io::read_csv_from;

    #[test]
    fn test_extract_year_first_match_only() {
        assert_eq!(extract_year("1990s-2005: Rule-based"), Some(1990.0));
        assert_eq!(extract_year("Early era (2012-2016)"), Some(2012.0));
        assert_eq!(extract_year("Pre-digital"), None);
        assert_eq!(extract_year("'90s"), None);
    }

    #[test]
    fn test_extract_year_ascii_digits_only() {
        assert_eq!(extract_year("\u{0662}\u{0660}\u{0661}\u{0665}"), None);
        assert_eq!(extract_year("\u{FF12}\u{FF10}\u{FF11}\u{FF15} era"), None);
        assert_eq!(extract_year("\u{0662}\u{0660}\u{0661}\u{0665} / 2015"), Some(2015.0));
    }

    #[test]
    fn test_era_sort_keeps_unmatched_rows_last() {
        let mut t = read_csv_from(
            "t7".to_string(),
            "Era,Technology\n2015-2020,CNN\nFuture,Foundation models\n1980s,Optical\n".as_bytes(),
        )
        .unwrap();
        EraYearSort.apply(&mut t).unwrap();

        let eras: Vec<_> = t.column(COL_ERA).unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(eras, vec!["1980s", "2015-2020", "Future"]);
        assert!(t.column_index(COL_ERA_NUMERIC).is_err());
    }

    #[test]
    fn test_hardware_rule_sorts_speed_descending_within_hardware() {
        let mut t = read_csv_from(
            "t2".to_string(),
            "Hardware,Model,Inference Speed (img/s)\nGPU,A,120\nCPU,B,15\nGPU,C,900\nGPU,D,n/a\n"
                .as_bytes(),
        )
        .unwrap();
        NumericSort::hardware_speeds().apply(&mut t).unwrap();

        let models: Vec<_> = t.column("Model").unwrap().iter().map(|c| c.to_string()).collect();
        assert_eq!(models, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_missing_column_propagates() {
        let mut t = read_csv_from("t3".to_string(), "Dataset\nWM-811K\n".as_bytes()).unwrap();
        assert!(NumericSort::datasets().apply(&mut t).is_err());
    }
}
