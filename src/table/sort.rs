use std::cmp::Ordering;

use super::cell::Cell;

/// One sort criterion: a column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub descending: bool,
}

impl SortKey {
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), descending: false }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), descending: true }
    }
}

/// Compare two cells for one key. Missing values sort last in either direction.
pub fn compare_cells(a: &Cell, b: &Cell, descending: bool) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ord = compare_present(a, b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        }
    }
}

fn compare_present(a: &Cell, b: &Cell) -> Ordering {
    match (a, b) {
        (Cell::Number(x), Cell::Number(y)) => x.total_cmp(y),
        (Cell::Text(x), Cell::Text(y)) => x.cmp(y),
        (Cell::Number(_), Cell::Text(_)) => Ordering::Less,
        (Cell::Text(_), Cell::Number(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

/// Stable multi-key ordering of rows given resolved `(column index, descending)` keys.
pub fn compare_rows(a: &[Cell], b: &[Cell], keys: &[(usize, bool)]) -> Ordering {
    keys.iter().fold(Ordering::Equal, |acc, &(idx, descending)| {
        acc.then_with(|| compare_cells(&a[idx], &b[idx], descending))
    })
}
