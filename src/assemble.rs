// src/assemble.rs
//
// Final record assembly: one LeaderboardEntry per dataset block plus the
// baseline entry, with attribute merge, efficiency deltas and the
// improvement sub-record.

use serde::Serialize;

use crate::aggregate::{flat_scores, overall_avg, task_scores};
use crate::core::cell::Grid;
use crate::core::num::{mean, round2};
use crate::efficiency::efficiency_delta;
use crate::scan::{Block, BLOCK_ROWS};
use crate::specs::attrs::{AttrTable, DatasetAttrs};
use crate::specs::columns::ColumnLayout;
use crate::specs::domains::{Domain, DomainMap};

/// One metric under a task ("em": 81.2).
#[derive(Clone, Debug, Serialize)]
pub struct MetricScore {
    pub metric: String,
    pub score: f64,
}

/// All metrics of one named task, in column order.
#[derive(Clone, Debug, Serialize)]
pub struct TaskDetail {
    pub task_name: String,
    pub metrics: Vec<MetricScore>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct TaskDetails {
    pub general_tasks: Vec<TaskDetail>,
    pub math_tasks: Vec<TaskDetail>,
    pub code_tasks: Vec<TaskDetail>,
    pub reasoning_tasks: Vec<TaskDetail>,
}

/// Deltas versus the baseline row. Efficiency fields are already
/// baseline-relative, so they appear here unchanged.
#[derive(Clone, Debug, Serialize)]
pub struct Improvement {
    pub general_avg: f64,
    pub math_avg: f64,
    pub code_avg: f64,
    pub reasoning_avg: f64,
    pub overall_avg: f64,
    pub overall_efficiency: f64,
    pub general_efficiency: f64,
    pub math_efficiency: f64,
    pub code_efficiency: f64,
    pub reasoning_efficiency: f64,
    pub general_task_scores: Vec<f64>,
    pub math_task_scores: Vec<f64>,
    pub code_task_scores: Vec<f64>,
    pub reasoning_task_scores: Vec<f64>,
}

/// The durable output record. The baseline entry (id 0, domain "base")
/// carries no task details, improvement or attributes.
#[derive(Clone, Debug, Serialize)]
pub struct LeaderboardEntry {
    pub id: u32,
    pub name: String,
    pub domain: String,
    pub general_avg: f64,
    pub math_avg: f64,
    pub code_avg: f64,
    pub reasoning_avg: f64,
    pub overall_avg: f64,
    pub overall_efficiency: f64,
    pub general_efficiency: f64,
    pub math_efficiency: f64,
    pub code_efficiency: f64,
    pub reasoning_efficiency: f64,
    pub general_scores: Vec<f64>,
    pub math_scores: Vec<f64>,
    pub code_scores: Vec<f64>,
    pub reasoning_scores: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_details: Option<TaskDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub improvement: Option<Improvement>,
    #[serde(flatten)]
    pub attrs: Option<DatasetAttrs>,
}

/// Everything aggregation produces for one block (or the baseline row).
/// Averages stay unrounded here; rounding happens at the output boundary.
#[derive(Clone, Debug)]
struct DomainStats {
    flat: DomainMap<Vec<f64>>,
    avgs: DomainMap<f64>,
    tasks: DomainMap<Vec<Option<f64>>>,
    overall: f64,
}

fn collect_stats(
    grid: &Grid,
    cols: &DomainMap<ColumnLayout>,
    rows: std::ops::Range<usize>,
) -> DomainStats {
    let flat = DomainMap::from_fn(|d| flat_scores(grid, rows.clone(), &cols.get(d).columns));
    let avgs = DomainMap::from_fn(|d| mean(flat.get(d)));
    let tasks = DomainMap::from_fn(|d| task_scores(grid, rows.clone(), &cols.get(d).columns));
    let overall = overall_avg(&avgs);
    DomainStats { flat, avgs, tasks, overall }
}

/// The designated baseline row, aggregated with the same machinery at a
/// row count of 1.
#[derive(Clone, Debug)]
pub struct Baseline {
    pub name: String,
    stats: DomainStats,
}

pub fn baseline(
    grid: &Grid,
    cols: &DomainMap<ColumnLayout>,
    base_row: usize,
    name: &str,
) -> Baseline {
    if base_row >= grid.row_count() {
        loge!("baseline row {} beyond grid ({} rows)", base_row + 1, grid.row_count());
    }
    Baseline {
        name: s!(name),
        stats: collect_stats(grid, cols, base_row..base_row + 1),
    }
}

fn baseline_entry(base: &Baseline) -> LeaderboardEntry {
    let stats = &base.stats;
    LeaderboardEntry {
        id: 0,
        name: base.name.clone(),
        domain: s!("base"),
        general_avg: round2(stats.avgs.general),
        math_avg: round2(stats.avgs.math),
        code_avg: round2(stats.avgs.code),
        reasoning_avg: round2(stats.avgs.reasoning),
        overall_avg: round2(stats.overall),
        // No size attribute exists for the base model itself.
        overall_efficiency: 0.0,
        general_efficiency: 0.0,
        math_efficiency: 0.0,
        code_efficiency: 0.0,
        reasoning_efficiency: 0.0,
        general_scores: stats.flat.general.clone(),
        math_scores: stats.flat.math.clone(),
        code_scores: stats.flat.code.clone(),
        reasoning_scores: stats.flat.reasoning.clone(),
        task_details: None,
        improvement: None,
        attrs: None,
    }
}

/// Assemble one sheet: baseline first (always, id 0), then every block whose
/// overall average is positive, with dense 1-based ids in scan order.
pub fn assemble_sheet(
    grid: &Grid,
    cols: &DomainMap<ColumnLayout>,
    blocks: &[Block],
    attrs: &AttrTable,
    base: &Baseline,
) -> Vec<LeaderboardEntry> {
    let mut entries = vec![baseline_entry(base)];
    let mut next_id = 1u32;

    for block in blocks {
        let rows = block.start_row..block.start_row + BLOCK_ROWS;
        let stats = collect_stats(grid, cols, rows);
        if stats.overall <= 0.0 {
            logd!("skipping {}: no valid data", block.name);
            continue;
        }
        entries.push(block_entry(next_id, block, &stats, cols, attrs.get(&block.name), base));
        next_id += 1;
    }
    entries
}

fn block_entry(
    id: u32,
    block: &Block,
    stats: &DomainStats,
    cols: &DomainMap<ColumnLayout>,
    attrs: DatasetAttrs,
    base: &Baseline,
) -> LeaderboardEntry {
    let sp = attrs.size_precise.clone();
    let bstats = &base.stats;

    let eff = DomainMap::from_fn(|d| efficiency_delta(*stats.avgs.get(d), *bstats.avgs.get(d), &sp));
    let overall_eff = efficiency_delta(stats.overall, bstats.overall, &sp);

    let improvement = Improvement {
        general_avg: round2(stats.avgs.general - bstats.avgs.general),
        math_avg: round2(stats.avgs.math - bstats.avgs.math),
        code_avg: round2(stats.avgs.code - bstats.avgs.code),
        reasoning_avg: round2(stats.avgs.reasoning - bstats.avgs.reasoning),
        overall_avg: round2(stats.overall - bstats.overall),
        overall_efficiency: overall_eff,
        general_efficiency: eff.general,
        math_efficiency: eff.math,
        code_efficiency: eff.code,
        reasoning_efficiency: eff.reasoning,
        general_task_scores: paired_deltas(&stats.tasks.general, &bstats.tasks.general),
        math_task_scores: paired_deltas(&stats.tasks.math, &bstats.tasks.math),
        code_task_scores: paired_deltas(&stats.tasks.code, &bstats.tasks.code),
        reasoning_task_scores: paired_deltas(&stats.tasks.reasoning, &bstats.tasks.reasoning),
    };

    let task_details = TaskDetails {
        general_tasks: organize_tasks(cols.get(Domain::General), &stats.tasks.general),
        math_tasks: organize_tasks(cols.get(Domain::Math), &stats.tasks.math),
        code_tasks: organize_tasks(cols.get(Domain::Code), &stats.tasks.code),
        reasoning_tasks: organize_tasks(cols.get(Domain::Reasoning), &stats.tasks.reasoning),
    };

    LeaderboardEntry {
        id,
        name: block.name.clone(),
        domain: block.domain.clone(),
        general_avg: round2(stats.avgs.general),
        math_avg: round2(stats.avgs.math),
        code_avg: round2(stats.avgs.code),
        reasoning_avg: round2(stats.avgs.reasoning),
        overall_avg: round2(stats.overall),
        overall_efficiency: overall_eff,
        general_efficiency: eff.general,
        math_efficiency: eff.math,
        code_efficiency: eff.code,
        reasoning_efficiency: eff.reasoning,
        general_scores: stats.flat.general.clone(),
        math_scores: stats.flat.math.clone(),
        code_scores: stats.flat.code.clone(),
        reasoning_scores: stats.flat.reasoning.clone(),
        task_details: Some(task_details),
        improvement: Some(improvement),
        attrs: Some(attrs),
    }
}

/// Positional task-score deltas. Both sides are per-column lists; positions
/// where either side has no data are skipped, never zeroed.
fn paired_deltas(ours: &[Option<f64>], base: &[Option<f64>]) -> Vec<f64> {
    ours.iter()
        .zip(base)
        .filter_map(|(a, b)| match (a, b) {
            (Some(x), Some(y)) => Some(round2(x - y)),
            _ => None,
        })
        .collect()
}

/// Group per-column scores under their task names in first-appearance order,
/// dropping no-data columns. Columns sharing a task name (merged header)
/// become multiple metrics under one task.
fn organize_tasks(layout: &ColumnLayout, scores: &[Option<f64>]) -> Vec<TaskDetail> {
    let mut out: Vec<TaskDetail> = Vec::new();
    let named = layout.task_names.iter().zip(&layout.metric_names).zip(scores);
    for ((task, metric), score) in named {
        let Some(score) = *score else { continue };
        let metric = MetricScore { metric: metric.clone(), score };
        match out.iter_mut().find(|t| t.task_name == *task) {
            Some(t) => t.metrics.push(metric),
            None => out.push(TaskDetail { task_name: task.clone(), metrics: vec![metric] }),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_deltas_skip_no_data_positions() {
        let ours = [Some(80.0), None, Some(60.0)];
        let base = [Some(70.0), Some(50.0), None];
        assert_eq!(paired_deltas(&ours, &base), vec![10.0]);
    }

    #[test]
    fn organize_groups_metrics_under_merged_task_names() {
        let layout = ColumnLayout {
            columns: vec![3, 4, 5],
            task_names: vec![s!("Acc"), s!("Acc"), s!("F1")],
            metric_names: vec![s!("em"), s!("f1"), s!("em")],
        };
        let tasks = organize_tasks(&layout, &[Some(80.0), Some(75.0), None]);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_name, "Acc");
        assert_eq!(tasks[0].metrics.len(), 2);
        assert_eq!(tasks[0].metrics[1].metric, "f1");
        assert_eq!(tasks[0].metrics[1].score, 75.0);
    }
}
