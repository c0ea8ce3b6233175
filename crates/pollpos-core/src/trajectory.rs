//! Per-school trajectory extraction and final-week top-set selection.

use crate::model::{NormalizedRow, Trajectory, TrajectoryPoint};
use indexmap::IndexMap;
use rustc_hash::FxHashSet;

/// Number of schools emphasized from the final week's standings.
pub const DEFAULT_TOP_N: usize = 12;

/// Line/point color for rows that carry no team color.
pub const NEUTRAL_COLOR: &str = "#ccc";

/// The maximum week present in the dataset, or 0 for an empty one.
pub fn final_week(rows: &[NormalizedRow]) -> u32 {
    rows.iter().map(|r| r.week).max().unwrap_or(0)
}

/// The schools ranked best in the final week, in rank order.
///
/// Ties on the published rank are broken by ascending school name, the same
/// rule normalization uses. The result has `min(n, rows in final week)`
/// entries.
pub fn top_set(rows: &[NormalizedRow], n: usize) -> Vec<String> {
    let last = final_week(rows);
    let mut finalists: Vec<&NormalizedRow> = rows.iter().filter(|r| r.week == last).collect();
    finalists.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.school.cmp(&b.school)));
    finalists
        .into_iter()
        .take(n)
        .map(|r| r.school.clone())
        .collect()
}

/// Groups normalized rows into per-school trajectories.
///
/// Trajectory order is the schools' first-appearance order in `rows` (stable
/// for snapshot tests, not otherwise meaningful). A school seen in a single
/// week still yields a valid one-point trajectory.
pub fn build_trajectories(rows: &[NormalizedRow], top_n: usize) -> Vec<Trajectory> {
    let top: FxHashSet<String> = top_set(rows, top_n).into_iter().collect();

    let mut by_school: IndexMap<&str, Vec<&NormalizedRow>> = IndexMap::new();
    for row in rows {
        by_school.entry(row.school.as_str()).or_default().push(row);
    }

    let mut out = Vec::with_capacity(by_school.len());
    for (school, mut school_rows) in by_school {
        school_rows.sort_by_key(|r| r.week);
        let color = school_rows
            .first()
            .and_then(|r| r.color.clone())
            .unwrap_or_else(|| NEUTRAL_COLOR.to_string());
        let points = school_rows
            .iter()
            .map(|r| TrajectoryPoint {
                week: r.week,
                rank: r.rank,
                visual_rank: r.visual_rank,
            })
            .collect();
        out.push(Trajectory {
            school: school.to_string(),
            color,
            points,
            is_top: top.contains(school),
        });
    }
    out
}
