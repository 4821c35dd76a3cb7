// src/core/mod.rs
//
// Domain-agnostic building blocks: the cell/grid model and small numeric
// helpers. Nothing here knows about sheets, domains or leaderboards.

pub mod cell;
pub mod num;
