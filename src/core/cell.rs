// src/core/cell.rs
//
// Untyped spreadsheet cells as a small tagged variant, so the
// numeric-parse-or-skip policy is explicit and exhaustively handled.

/// One spreadsheet cell.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    #[default]
    Empty,
}

impl Cell {
    /// Numeric view. Text that parses as a number counts ("12.3" → 12.3);
    /// anything else is absent, never zero-filled.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => s.trim().parse::<f64>().ok(),
            Cell::Empty => None,
        }
    }

    /// Trimmed textual view, used for label and stopword matching.
    pub fn text(&self) -> String {
        match self {
            Cell::Number(n) => n.to_string(),
            Cell::Text(s) => s.trim().to_string(),
            Cell::Empty => String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Number(_) => false,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Empty => true,
        }
    }
}

static EMPTY: Cell = Cell::Empty;

/// Row-major grid of cells, immutable once built. Indices are absolute sheet
/// coordinates; rows are never trimmed and may have ragged widths.
#[derive(Clone, Debug, Default)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, col); out-of-bounds reads are empty, not errors.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows.get(row).and_then(|r| r.get(col)).unwrap_or(&EMPTY)
    }
}
