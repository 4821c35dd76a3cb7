// src/params.rs
use std::ops::Range;
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "new.xlsx";
pub const DEFAULT_OUT_FILE: &str = "out/leaderboard.json";

/// Sheet carrying the dataset attribute table (name, affiliation, ...).
pub const ATTR_SHEET: &str = "dataset";
/// First attribute row; everything above is the table's own header block.
pub const ATTR_START_ROW: usize = 3;

/// Model sheets processed when --sheets is not given.
pub const DEFAULT_SHEETS: [&str; 2] = ["llama", "qwen"];

/// Column A holds domain markers, column B dataset names.
pub const MARKER_COL: usize = 0;
pub const LABEL_COL: usize = 1;

/// Row 2 holds task names (merged across metric columns), row 3 metric names.
pub const TASK_NAME_ROW: usize = 1;
pub const METRIC_NAME_ROW: usize = 2;

/// First row that can start a dataset block (B4).
pub const DATA_START_ROW: usize = 3;

/// Row of the un-finetuned base model (row 388 in the source workbook).
pub const BASE_ROW: usize = 387;

/// Fixed column group per domain. The sheet convention pins these positions;
/// header text is probed for diagnostics only and never changes them.
pub const GENERAL_COLS: Range<usize> = 3..7; // D..G
pub const MATH_COLS: Range<usize> = 7..12; // H..L
pub const CODE_COLS: Range<usize> = 12..20; // M..T
pub const REASONING_COLS: Range<usize> = 20..25; // U..Y

/// Label-column values that mark header/separator rows, never dataset names.
pub const STOPWORDS: [&str; 9] = [
    "model", "dataset", "accuracy", "general", "math", "code", "reasoning", "base", "",
];

/// Display name of the base model row, per sheet.
pub fn base_model_name(sheet: &str) -> &'static str {
    match sheet {
        "llama" => "meta-llama/Llama-3.1-8B",
        "qwen" => "Qwen/Qwen2.5-7B",
        _ => "base",
    }
}

#[derive(Clone)]
pub struct Params {
    pub input: PathBuf,          // workbook path
    pub sheets: Vec<String>,     // model sheets to extract
    pub out: Option<PathBuf>,    // output JSON path
    pub base_row: usize,         // 0-based row of the baseline model
    pub pretty: bool,            // pretty-print the JSON output
    pub list_sheets: bool,       // list workbook sheets then exit
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            sheets: DEFAULT_SHEETS.iter().map(|s| s!(*s)).collect(),
            out: None,
            base_row: BASE_ROW,
            pretty: true,
            list_sheets: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
