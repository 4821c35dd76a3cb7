// src/specs/mod.rs
//! # Sheet-convention specs
//!
//! This module hosts the **layout-specific knowledge** of the source
//! workbook. Each spec encodes *where the ground truth lives in the sheet*
//! and *how to read it robustly*.
//!
//! ## What lives here
//! - **Domain row-range detection** (`domains`) — marker cells in column A
//!   partition the sheet into general/math/code/reasoning bands.
//! - **Column layout resolution** (`columns`) — fixed per-domain column
//!   groups, task names from row 2 (carry-forward across merged headers),
//!   metric names from row 3.
//! - **Attribute table parsing** (`attrs`) — the `dataset` sheet's
//!   name → (affiliation, year, size, size_precise, link) lookup.
//!
//! ## What does **not** live here
//! - Block scanning, aggregation, efficiency and assembly — those consume
//!   the structures produced here but live in their own modules.
//! - File I/O — grids arrive preloaded (`grid::sheet_grid`).
//!
//! ## Conventions & invariants
//! - Marker and stopword matching is **case-insensitive after trim**.
//! - Column groups are **fixed configuration**, never derived from header
//!   text; the header probe in `columns` logs only.
//! - Absent cells degrade to synthetic names (`Task_<col>`, `Metric_<col>`)
//!   or empty-string attributes — specs have no failure modes.
//!
//! In short: **`specs` knows how to read the workbook.** Other layers decide
//! what to aggregate and how to emit it.

pub mod attrs;
pub mod columns;
pub mod domains;
