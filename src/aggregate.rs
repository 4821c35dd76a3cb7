// src/aggregate.rs
//
// Score aggregation over a block's rows × a domain's columns. Two views:
// a flat list feeding the domain average, and per-column task means.

use std::ops::Range;

use crate::core::cell::Grid;
use crate::core::num::{mean, round2};
use crate::specs::domains::{Domain, DomainMap};

/// Every numeric cell across rows × cols, in row-major order. Empty and
/// non-numeric cells are skipped, never zero-filled.
pub fn flat_scores(grid: &Grid, rows: Range<usize>, cols: &[usize]) -> Vec<f64> {
    let mut out = Vec::new();
    for row in rows {
        for &col in cols {
            if let Some(v) = grid.cell(row, col).as_number() {
                out.push(v);
            }
        }
    }
    out
}

/// Per-column mean over the rows, rounded to 2 decimal places. A column with
/// no numeric values yields `None` — "no data", which downstream must treat
/// as absent, not zero.
pub fn task_scores(grid: &Grid, rows: Range<usize>, cols: &[usize]) -> Vec<Option<f64>> {
    cols.iter()
        .map(|&col| {
            let vals: Vec<f64> = rows
                .clone()
                .filter_map(|row| grid.cell(row, col).as_number())
                .collect();
            if vals.is_empty() {
                None
            } else {
                Some(round2(mean(&vals)))
            }
        })
        .collect()
}

/// Overall average: a zero domain average means "domain absent for this
/// block" and is excluded; if all four are excluded, overall is 0.
pub fn overall_avg(avgs: &DomainMap<f64>) -> f64 {
    let valid: Vec<f64> = Domain::ALL
        .iter()
        .map(|&d| *avgs.get(d))
        .filter(|&a| a > 0.0)
        .collect();
    mean(&valid)
}
