// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod params;
pub mod specs;

pub mod aggregate;
pub mod assemble;
pub mod efficiency;
pub mod error;
pub mod grid;
pub mod runner;
pub mod scan;
pub mod store;
