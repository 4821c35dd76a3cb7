// src/grid.rs
//
// Workbook loading. Calamine gives each sheet as a used-area range with a
// start offset; we pad that offset back with empty cells so grid indices
// equal absolute sheet coordinates.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};

use crate::core::cell::{Cell, Grid};
use crate::error::ExtractError;

pub type Workbook = Xlsx<BufReader<File>>;

pub fn open(path: &Path) -> Result<Workbook, ExtractError> {
    open_workbook(path).map_err(|e| ExtractError::Workbook {
        path: path.to_path_buf(),
        source: e,
    })
}

pub fn sheet_names(wb: &Workbook) -> Vec<String> {
    wb.sheet_names()
}

pub fn sheet_grid(wb: &mut Workbook, name: &str) -> Result<Grid, ExtractError> {
    if !wb.sheet_names().iter().any(|s| s == name) {
        return Err(ExtractError::SheetNotFound(s!(name)));
    }
    let range = wb.worksheet_range(name).map_err(|e| ExtractError::Sheet {
        sheet: s!(name),
        source: e,
    })?;
    Ok(grid_from_range(&range))
}

fn grid_from_range(range: &Range<Data>) -> Grid {
    let (row0, col0) = range.start().unwrap_or((0, 0));
    let (row0, col0) = (row0 as usize, col0 as usize);

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(row0 + range.height());
    rows.resize_with(row0, Vec::new);

    for src in range.rows() {
        let mut row = Vec::with_capacity(col0 + src.len());
        row.resize(col0, Cell::Empty);
        row.extend(src.iter().map(convert));
        rows.push(row);
    }
    Grid::from_rows(rows)
}

fn convert(d: &Data) -> Cell {
    match d {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Number(if *b { 1.0 } else { 0.0 }),
        Data::String(s) => {
            if s.trim().is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        // Dates and durations only ever appear in attribute columns; the
        // display form is what the lookup table wants.
        other => Cell::Text(other.to_string()),
    }
}
