// src/specs/columns.rs
//
// Column layout resolution: fixed per-domain column groups, task names from
// the merged header row, metric names from the row below it.

use std::ops::Range;

use crate::core::cell::Grid;
use crate::params;
use crate::specs::domains::{Domain, DomainMap};

/// Fixed positional conventions for one model sheet. Everything is plain
/// configuration so tests can shrink the geometry.
#[derive(Clone, Debug)]
pub struct SheetLayout {
    pub marker_col: usize,
    pub label_col: usize,
    pub task_name_row: usize,
    pub metric_name_row: usize,
    pub data_start_row: usize,
    pub base_row: usize,
    pub domain_cols: DomainMap<Range<usize>>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        Self {
            marker_col: params::MARKER_COL,
            label_col: params::LABEL_COL,
            task_name_row: params::TASK_NAME_ROW,
            metric_name_row: params::METRIC_NAME_ROW,
            data_start_row: params::DATA_START_ROW,
            base_row: params::BASE_ROW,
            domain_cols: DomainMap {
                general: params::GENERAL_COLS,
                math: params::MATH_COLS,
                code: params::CODE_COLS,
                reasoning: params::REASONING_COLS,
            },
        }
    }
}

/// Resolved columns for one domain. The three vectors run in parallel.
#[derive(Clone, Debug, Default)]
pub struct ColumnLayout {
    pub columns: Vec<usize>,
    pub task_names: Vec<String>,
    pub metric_names: Vec<String>,
}

/// Resolve every domain's column layout from the header rows.
pub fn resolve(grid: &Grid, layout: &SheetLayout) -> DomainMap<ColumnLayout> {
    log_header_probe(grid);
    DomainMap::from_fn(|d| resolve_domain(grid, layout, layout.domain_cols.get(d).clone()))
}

fn resolve_domain(grid: &Grid, layout: &SheetLayout, cols: Range<usize>) -> ColumnLayout {
    let mut out = ColumnLayout::default();
    // Carry the last seen task name rightwards: a horizontally merged header
    // cell only materializes in its leftmost column.
    let mut carried: Option<String> = None;

    for col in cols {
        let task = grid.cell(layout.task_name_row, col).text();
        let task = if !task.is_empty() {
            carried = Some(task.clone());
            task
        } else if let Some(prev) = &carried {
            prev.clone()
        } else {
            format!("Task_{col}")
        };

        let metric = grid.cell(layout.metric_name_row, col).text();
        let metric = if metric.is_empty() { format!("Metric_{col}") } else { metric };

        out.columns.push(col);
        out.task_names.push(task);
        out.metric_names.push(metric);
    }
    out
}

/// Look for a header row in the first few rows and log the hit. Diagnostic
/// only: the configured column groups are authoritative either way.
fn log_header_probe(grid: &Grid) {
    const HEADER_KEYWORDS: [&str; 6] = ["general", "math", "code", "reasoning", "dataset", "model"];
    const PROBE_ROWS: usize = 5;
    const PROBE_COLS: usize = 30;

    for row in 0..grid.row_count().min(PROBE_ROWS) {
        let mut text = s!();
        for col in 0..PROBE_COLS {
            let t = grid.cell(row, col).text();
            if !t.is_empty() {
                text.push_str(&t.to_ascii_lowercase());
                text.push(' ');
            }
        }
        if HEADER_KEYWORDS.iter().any(|kw| text.contains(kw)) {
            logd!("header probe: row {} looks like a header row", row + 1);
            return;
        }
    }
    logd!("header probe: no header row in the first {PROBE_ROWS} rows");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Cell;

    fn header_grid(tasks: &[&str], metrics: &[&str]) -> Grid {
        let to_row = |xs: &[&str]| {
            xs.iter()
                .map(|x| {
                    if x.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text((*x).into())
                    }
                })
                .collect::<Vec<_>>()
        };
        Grid::from_rows(vec![Vec::new(), to_row(tasks), to_row(metrics)])
    }

    fn layout_over(cols: Range<usize>) -> SheetLayout {
        SheetLayout {
            domain_cols: DomainMap {
                general: cols,
                math: 0..0,
                code: 0..0,
                reasoning: 0..0,
            },
            ..SheetLayout::default()
        }
    }

    #[test]
    fn merged_task_headers_carry_forward() {
        let g = header_grid(&["Acc", "", "F1"], &["em", "f1", "em"]);
        let resolved = resolve(&g, &layout_over(0..3));
        assert_eq!(resolved.general.task_names, vec!["Acc", "Acc", "F1"]);
        assert_eq!(resolved.general.metric_names, vec!["em", "f1", "em"]);
        assert_eq!(resolved.general.columns, vec![0, 1, 2]);
    }

    #[test]
    fn missing_names_become_synthetic() {
        let g = header_grid(&["", "", "BBH"], &["", "acc", ""]);
        let resolved = resolve(&g, &layout_over(0..3));
        assert_eq!(resolved.general.task_names, vec!["Task_0", "Task_1", "BBH"]);
        assert_eq!(resolved.general.metric_names, vec!["Metric_0", "acc", "Metric_2"]);
    }

    #[test]
    fn carry_does_not_leak_across_domains() {
        // Same grid, two domains: the second domain starts with a blank task
        // cell and must not inherit the first domain's trailing name.
        let g = header_grid(&["Acc", "", "", "F1"], &["em", "em", "em", "em"]);
        let layout = SheetLayout {
            domain_cols: DomainMap {
                general: 0..2,
                math: 2..4,
                code: 0..0,
                reasoning: 0..0,
            },
            ..SheetLayout::default()
        };
        let resolved = resolve(&g, &layout);
        assert_eq!(resolved.general.task_names, vec!["Acc", "Acc"]);
        assert_eq!(resolved.math.task_names, vec!["Task_2", "F1"]);
    }
}
