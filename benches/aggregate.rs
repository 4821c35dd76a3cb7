// benches/aggregate.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lb_extract::aggregate;
use lb_extract::assemble;
use lb_extract::core::cell::{Cell, Grid};
use lb_extract::scan;
use lb_extract::specs::attrs::AttrTable;
use lb_extract::specs::columns::{self, SheetLayout};
use lb_extract::specs::domains;

/// Synthetic sheet at real-workbook scale: ~100 four-row blocks over the
/// default 25-column layout, markers and headers included.
fn sample_grid() -> Grid {
    let layout = SheetLayout::default();
    let total_rows = 420;
    let mut rows = vec![vec![Cell::Empty; 25]; total_rows];

    for col in 3..25 {
        rows[1][col] = if col % 2 == 1 {
            Cell::Text(format!("Task{col}"))
        } else {
            Cell::Empty // merged header, carried forward
        };
        rows[2][col] = Cell::Text(format!("m{col}"));
    }
    rows[4][0] = Cell::Text("general".into());
    rows[120][0] = Cell::Text("math".into());
    rows[240][0] = Cell::Text("code".into());
    rows[330][0] = Cell::Text("reasoning".into());

    let mut row = layout.data_start_row + 1;
    let mut i = 0usize;
    while row + 4 <= total_rows - 2 {
        rows[row][1] = Cell::Text(format!("dataset_{i}"));
        for r in row..row + 4 {
            for col in 3..25 {
                if (r + col) % 5 != 0 {
                    rows[r][col] = Cell::Number(((r * col) % 100) as f64 + 0.5);
                }
            }
        }
        row += 4;
        i += 1;
    }

    rows[layout.base_row][1] = Cell::Text("base".into());
    for col in 3..25 {
        rows[layout.base_row][col] = Cell::Number((col * 3 % 90) as f64);
    }
    Grid::from_rows(rows)
}

fn bench_extraction(c: &mut Criterion) {
    let grid = sample_grid();
    let layout = SheetLayout::default();
    let ranges = domains::detect(&grid, layout.marker_col);
    let cols = columns::resolve(&grid, &layout);
    let blocks = scan::scan_blocks(&grid, &layout, &ranges);
    let attrs = AttrTable::default();
    let base = assemble::baseline(&grid, &cols, layout.base_row, "base");

    c.bench_function("flat_scores_block", |b| {
        let general = &cols.general.columns;
        b.iter(|| {
            let rows = blocks[0].start_row..blocks[0].start_row + scan::BLOCK_ROWS;
            black_box(aggregate::flat_scores(black_box(&grid), rows, general).len())
        })
    });

    c.bench_function("scan_blocks", |b| {
        b.iter(|| black_box(scan::scan_blocks(black_box(&grid), &layout, &ranges).len()))
    });

    c.bench_function("assemble_sheet", |b| {
        b.iter(|| {
            let entries =
                assemble::assemble_sheet(black_box(&grid), &cols, &blocks, &attrs, &base);
            black_box(entries.len())
        })
    });
}

criterion_group!(benches, bench_extraction);
criterion_main!(benches);
