// src/specs/attrs.rs
//
// The `dataset` sheet's name → attributes lookup. Columns B..G carry
// name, affiliation, year, size, size_precise, link.

use std::collections::HashMap;

use serde::Serialize;

use crate::core::cell::Grid;
use crate::params::ATTR_START_ROW;

/// External attributes of one dataset. `size` is display-only;
/// `size_precise` alone feeds efficiency normalization.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DatasetAttrs {
    pub affiliation: String,
    pub year: String,
    pub size: String,
    pub size_precise: String,
    pub link: String,
}

/// Immutable by-name lookup, passed into the assembler explicitly so the
/// core stays testable without file I/O.
#[derive(Clone, Debug, Default)]
pub struct AttrTable {
    by_name: HashMap<String, DatasetAttrs>,
}

/// Build the table from the attribute sheet's grid. Rows with a blank name
/// cell are skipped; a name seen twice keeps the later row.
pub fn parse(grid: &Grid) -> AttrTable {
    let mut by_name = HashMap::new();
    for row in ATTR_START_ROW..grid.row_count() {
        let name = grid.cell(row, 1).text();
        if name.is_empty() {
            continue;
        }
        by_name.insert(
            name,
            DatasetAttrs {
                affiliation: grid.cell(row, 2).text(),
                year: grid.cell(row, 3).text(),
                size: grid.cell(row, 4).text(),
                size_precise: grid.cell(row, 5).text(),
                link: grid.cell(row, 6).text(),
            },
        );
    }
    AttrTable { by_name }
}

impl AttrTable {
    /// Exact trimmed-name lookup; misses get empty-string defaults so the
    /// pipeline never fails on an unlisted dataset.
    pub fn get(&self, name: &str) -> DatasetAttrs {
        self.by_name.get(name.trim()).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Cell;

    fn attr_row(name: &str, vals: [&str; 5]) -> Vec<Cell> {
        let mut row = vec![Cell::Empty, Cell::Text(name.into())];
        row.extend(vals.iter().map(|v| {
            if v.is_empty() {
                Cell::Empty
            } else {
                Cell::Text((*v).into())
            }
        }));
        row
    }

    #[test]
    fn rows_above_the_start_offset_are_ignored() {
        let rows = vec![
            attr_row("header-noise", ["", "", "", "", ""]),
            Vec::new(),
            Vec::new(),
            attr_row("alpaca", ["Stanford", "2023", "52k", "52k", "http://x"]),
        ];
        let table = parse(&Grid::from_rows(rows));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("alpaca").affiliation, "Stanford");
        assert_eq!(table.get("alpaca").size_precise, "52k");
    }

    #[test]
    fn miss_yields_empty_defaults() {
        let table = AttrTable::default();
        let a = table.get("nonexistent");
        assert_eq!(a, DatasetAttrs::default());
        assert!(a.size_precise.is_empty());
    }

    #[test]
    fn lookup_trims_the_query_but_is_case_sensitive() {
        let rows = vec![
            Vec::new(),
            Vec::new(),
            Vec::new(),
            attr_row("OpenOrca", ["", "2023", "", "4.2m", ""]),
        ];
        let table = parse(&Grid::from_rows(rows));
        assert_eq!(table.get("  OpenOrca ").year, "2023");
        assert_eq!(table.get("openorca"), DatasetAttrs::default());
    }
}
