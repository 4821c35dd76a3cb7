// src/store.rs
use std::collections::BTreeMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::assemble::LeaderboardEntry;

/// Write the full artifact: {sheet name → ordered entry list}. One file,
/// one write; deterministic bytes for unchanged input.
pub fn write_json(
    path: &Path,
    data: &BTreeMap<String, Vec<LeaderboardEntry>>,
    pretty: bool,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = if pretty {
        serde_json::to_string_pretty(data)?
    } else {
        serde_json::to_string(data)?
    };
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
