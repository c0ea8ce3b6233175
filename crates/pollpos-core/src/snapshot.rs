//! The once-built, read-only dataset a session renders from.

use crate::model::{NormalizedRow, PollRow, Trajectory};
use crate::normalize::normalize_rows;
use crate::trajectory::{DEFAULT_TOP_N, build_trajectories, final_week};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Immutable snapshot of one poll season.
///
/// Construction runs normalization and trajectory extraction exactly once;
/// viewport-driven re-layout passes read the cached results by reference.
/// The snapshot is never mutated, so concurrent layout passes over the same
/// snapshot cannot race.
#[derive(Debug, Clone)]
pub struct PollSnapshot {
    rows: Vec<NormalizedRow>,
    trajectories: Vec<Trajectory>,
    final_week: u32,
    week_count: usize,
}

impl PollSnapshot {
    /// Builds a snapshot with the default top-N emphasis count.
    pub fn new(rows: Vec<PollRow>) -> Self {
        Self::with_top_n(rows, DEFAULT_TOP_N)
    }

    pub fn with_top_n(rows: Vec<PollRow>, top_n: usize) -> Self {
        let normalized = normalize_rows(&rows);
        let trajectories = build_trajectories(&normalized, top_n);
        let final_week = final_week(&normalized);
        let weeks: FxHashSet<u32> = normalized.iter().map(|r| r.week).collect();
        debug!(
            rows = normalized.len(),
            schools = trajectories.len(),
            final_week,
            "built poll snapshot"
        );
        Self {
            rows: normalized,
            trajectories,
            final_week,
            week_count: weeks.len(),
        }
    }

    /// Normalized rows, ordered by week then visual rank.
    pub fn rows(&self) -> &[NormalizedRow] {
        &self.rows
    }

    /// Per-school trajectories in first-appearance order.
    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    /// Maximum week in the dataset (0 when empty).
    pub fn final_week(&self) -> u32 {
        self.final_week
    }

    /// Number of distinct weeks; also the x-axis tick count.
    pub fn week_count(&self) -> usize {
        self.week_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
