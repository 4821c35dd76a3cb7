// src/specs/domains.rs
//
// Domain row-range detection, plus the fixed domain set the whole pipeline
// indexes by.

use crate::core::cell::Grid;

pub const UNKNOWN_DOMAIN: &str = "unknown";

/// The four benchmark categories, in canonical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Domain {
    General,
    Math,
    Code,
    Reasoning,
}

impl Domain {
    pub const ALL: [Domain; 4] = [Domain::General, Domain::Math, Domain::Code, Domain::Reasoning];

    pub fn key(self) -> &'static str {
        match self {
            Domain::General => "general",
            Domain::Math => "math",
            Domain::Code => "code",
            Domain::Reasoning => "reasoning",
        }
    }
}

/// One value per domain, indexable by `Domain`.
#[derive(Clone, Debug, Default)]
pub struct DomainMap<T> {
    pub general: T,
    pub math: T,
    pub code: T,
    pub reasoning: T,
}

impl<T> DomainMap<T> {
    pub fn from_fn(mut f: impl FnMut(Domain) -> T) -> Self {
        Self {
            general: f(Domain::General),
            math: f(Domain::Math),
            code: f(Domain::Code),
            reasoning: f(Domain::Reasoning),
        }
    }

    pub fn get(&self, d: Domain) -> &T {
        match d {
            Domain::General => &self.general,
            Domain::Math => &self.math,
            Domain::Code => &self.code,
            Domain::Reasoning => &self.reasoning,
        }
    }
}

/// Inclusive row span per detected domain, sorted by start row. Spans are
/// contiguous and non-overlapping; each runs from its marker row to one row
/// before the next marker (the last runs to the end of the grid).
#[derive(Clone, Debug, Default)]
pub struct DomainRanges {
    spans: Vec<(String, usize, usize)>,
}

/// Scan the marker column for domain keywords (case-insensitive exact match
/// after trim). A keyword that appears more than once keeps its last row,
/// matching the source convention.
pub fn detect(grid: &Grid, marker_col: usize) -> DomainRanges {
    let mut starts: Vec<(String, usize)> = Vec::new();
    for row in 0..grid.row_count() {
        let label = grid.cell(row, marker_col).text().to_ascii_lowercase();
        if Domain::ALL.iter().any(|d| d.key() == label) {
            match starts.iter_mut().find(|(k, _)| *k == label) {
                Some(entry) => entry.1 = row,
                None => starts.push((label, row)),
            }
        }
    }
    starts.sort_by_key(|&(_, row)| row);

    let last = grid.row_count().saturating_sub(1);
    let spans = starts
        .iter()
        .enumerate()
        .map(|(i, (domain, start))| {
            let end = match starts.get(i + 1) {
                Some((_, next)) => next - 1,
                None => last,
            };
            (domain.clone(), *start, end)
        })
        .collect();
    DomainRanges { spans }
}

impl DomainRanges {
    /// Domain owning `row`; rows outside every span are `"unknown"`.
    pub fn domain_at(&self, row: usize) -> &str {
        self.spans
            .iter()
            .find(|(_, start, end)| *start <= row && row <= *end)
            .map(|(domain, _, _)| domain.as_str())
            .unwrap_or(UNKNOWN_DOMAIN)
    }

    pub fn spans(&self) -> &[(String, usize, usize)] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
