// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Fatal extraction failures. Per-cell and per-block irregularities
/// (unparsable cells, missing attributes, empty domains, short trailing
/// blocks) are policies handled locally and never surface here.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to open workbook {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("worksheet not found: {0}")]
    SheetNotFound(String),

    #[error("failed to read worksheet {sheet}: {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
