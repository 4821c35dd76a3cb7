// src/cli.rs
use std::{env, path::PathBuf};

use crate::params::Params;
use crate::runner::{self, Progress};
use crate::grid;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    if params.list_sheets {
        let wb = grid::open(&params.input)?;
        for name in grid::sheet_names(&wb) {
            println!("{name}");
        }
        return Ok(());
    }

    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, Some(&mut progress))?;
    println!("Wrote {}", summary.out_path.display());
    Ok(())
}

struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Processing {total} sheet(s)");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn sheet_done(&mut self, sheet: &str, entries: usize) {
        println!("  {sheet}: {entries} entries");
    }
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-i" | "--input" => {
                params.input = PathBuf::from(args.next().ok_or("Missing value for --input")?);}
            "--sheets" => {
                let v = args.next().ok_or("Missing value for --sheets")?;
                params.sheets = v
                    .split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect();
                if params.sheets.is_empty() { return Err("Empty sheet list".into()); }}
            "-o" | "--out" => params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--base-row" => {
                // 1-based, as shown in a spreadsheet UI
                let v: usize = args.next().ok_or("Missing value for --base-row")?.parse()?;
                if v == 0 { return Err("Base row is 1-based".into()); }
                params.base_row = v - 1;}
            "--compact" => params.pretty = false,
            "--list-sheets" => params.list_sheets = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}
