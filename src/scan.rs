// src/scan.rs
//
// Block discovery: walk the label column, grouping rows into fixed four-row
// dataset blocks and tagging each with its domain.

use crate::core::cell::Grid;
use crate::params::STOPWORDS;
use crate::specs::columns::SheetLayout;
use crate::specs::domains::DomainRanges;

/// Every dataset repeats its trials over exactly this many rows.
pub const BLOCK_ROWS: usize = 4;

/// One discovered dataset block. Rows are `start_row .. start_row + BLOCK_ROWS`.
#[derive(Clone, Debug)]
pub struct Block {
    pub name: String,
    pub domain: String,
    pub start_row: usize,
}

/// Scan from the data start row. Blank or stopword labels advance by one
/// (header/separator rows); any other label starts a block and advances by
/// four. A start row with fewer than four rows left is malformed input: the
/// scan stops there, discarding the partial block but keeping everything
/// accumulated so far.
pub fn scan_blocks(grid: &Grid, layout: &SheetLayout, ranges: &DomainRanges) -> Vec<Block> {
    let mut blocks = Vec::new();
    let total = grid.row_count();
    let mut row = layout.data_start_row;

    while row < total {
        let name = grid.cell(row, layout.label_col).text();
        if name.is_empty() || STOPWORDS.contains(&name.to_ascii_lowercase().as_str()) {
            row += 1;
            continue;
        }
        if row + BLOCK_ROWS > total {
            loge!(
                "dataset {name} at row {} has fewer than {BLOCK_ROWS} rows; stopping scan",
                row + 1
            );
            break;
        }
        blocks.push(Block {
            domain: s!(ranges.domain_at(row)),
            name,
            start_row: row,
        });
        row += BLOCK_ROWS;
    }
    blocks
}
