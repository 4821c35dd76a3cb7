// src/runner.rs
use std::collections::BTreeMap;
use std::error::Error;
use std::path::PathBuf;

use crate::{
    assemble::{self, LeaderboardEntry},
    error::ExtractError,
    grid, scan, specs, store,
    params::{base_model_name, Params, ATTR_SHEET, DEFAULT_OUT_FILE},
    specs::attrs::AttrTable,
    specs::columns::SheetLayout,
};

/// Optional progress sink for the CLI (or any other frontend).
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn sheet_done(&mut self, _sheet: &str, _entries: usize) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Summary of what was produced.
pub struct RunSummary {
    pub out_path: PathBuf,
    pub sheets: Vec<(String, usize)>,
}

/// Top-level runner: open the workbook, build the attribute lookup, extract
/// every requested sheet, write the JSON artifact. A failing sheet is logged
/// and skipped; it never corrupts the other sheets' output.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let mut wb = grid::open(&params.input)?;

    let attrs = match grid::sheet_grid(&mut wb, ATTR_SHEET) {
        Ok(g) => specs::attrs::parse(&g),
        Err(e) => {
            loge!("attribute sheet unavailable: {e}");
            AttrTable::default()
        }
    };
    logf!("attribute table: {} datasets", attrs.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(params.sheets.len());
    }

    let mut out: BTreeMap<String, Vec<LeaderboardEntry>> = BTreeMap::new();
    for sheet in &params.sheets {
        match extract_sheet(&mut wb, sheet, params, &attrs) {
            Ok(entries) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.sheet_done(sheet, entries.len());
                }
                out.insert(sheet.clone(), entries);
            }
            Err(e) => {
                loge!("sheet {sheet}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&format!("Skipping sheet {sheet}: {e}"));
                }
            }
        }
    }

    let out_path = params
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_FILE));
    store::write_json(&out_path, &out, params.pretty)?;

    Ok(RunSummary {
        out_path,
        sheets: out.iter().map(|(k, v)| (k.clone(), v.len())).collect(),
    })
}

fn extract_sheet(
    wb: &mut grid::Workbook,
    sheet: &str,
    params: &Params,
    attrs: &AttrTable,
) -> Result<Vec<LeaderboardEntry>, ExtractError> {
    let g = grid::sheet_grid(wb, sheet)?;
    logf!("{sheet}: {} rows", g.row_count());

    let layout = SheetLayout {
        base_row: params.base_row,
        ..SheetLayout::default()
    };

    let ranges = specs::domains::detect(&g, layout.marker_col);
    if ranges.is_empty() {
        logf!("{sheet}: no domain markers; all blocks will tag as unknown");
    }
    let cols = specs::columns::resolve(&g, &layout);

    let base = assemble::baseline(&g, &cols, layout.base_row, base_model_name(sheet));
    let blocks = scan::scan_blocks(&g, &layout, &ranges);
    logf!("{sheet}: {} blocks found", blocks.len());

    Ok(assemble::assemble_sheet(&g, &cols, &blocks, attrs, &base))
}
