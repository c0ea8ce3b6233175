//! Row normalization: week-local visual rank assignment.

use crate::model::{NormalizedRow, PollRow};
use indexmap::IndexMap;

/// How published ties are turned into distinct vertical positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TiePresentation {
    /// Dense integer visual ranks, ties broken by ascending school name.
    /// This is the canonical behavior; everything downstream assumes it.
    #[default]
    Dense,
    /// Fans a tied group of size `m` at published rank `r` into fractional
    /// positions `r + i/m` (lexicographic order within the group). Offered as
    /// an alternative presentation only; never feeds the canonical pipeline.
    Spread,
}

/// A school's resolved vertical position for one week under a
/// [`TiePresentation`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisualPosition {
    pub week: u32,
    pub school: String,
    pub rank: u32,
    pub position: f64,
}

fn rows_by_week(rows: &[PollRow]) -> IndexMap<u32, Vec<&PollRow>> {
    let mut by_week: IndexMap<u32, Vec<&PollRow>> = IndexMap::new();
    for row in rows {
        by_week.entry(row.week).or_default().push(row);
    }
    by_week.sort_unstable_keys();
    for week_rows in by_week.values_mut() {
        week_rows.sort_by(|a, b| a.rank.cmp(&b.rank).then_with(|| a.school.cmp(&b.school)));
    }
    by_week
}

/// Assigns each row its week-local dense visual rank.
///
/// Within a week, rows are ordered by (published rank asc, school asc) and
/// the counter runs 1..k with no gaps or repeats. Output is ordered by week,
/// then visual rank; callers re-group by week or school as needed. Missing
/// colors are NOT defaulted here.
pub fn normalize_rows(rows: &[PollRow]) -> Vec<NormalizedRow> {
    let mut out = Vec::with_capacity(rows.len());
    for week_rows in rows_by_week(rows).values() {
        for (i, row) in week_rows.iter().enumerate() {
            out.push(NormalizedRow::from_row(row, i as u32 + 1));
        }
    }
    out
}

/// Resolves per-week vertical positions under the requested tie presentation.
///
/// `Dense` yields the visual rank of [`normalize_rows`] as a float; `Spread`
/// keeps each tied group anchored at its published rank and fans members into
/// fractional offsets instead.
pub fn visual_positions(rows: &[PollRow], presentation: TiePresentation) -> Vec<VisualPosition> {
    match presentation {
        TiePresentation::Dense => normalize_rows(rows)
            .into_iter()
            .map(|r| VisualPosition {
                week: r.week,
                school: r.school,
                rank: r.rank,
                position: f64::from(r.visual_rank),
            })
            .collect(),
        TiePresentation::Spread => {
            let mut out = Vec::with_capacity(rows.len());
            for week_rows in rows_by_week(rows).values() {
                let mut i = 0;
                while i < week_rows.len() {
                    let rank = week_rows[i].rank;
                    let mut j = i;
                    while j < week_rows.len() && week_rows[j].rank == rank {
                        j += 1;
                    }
                    let group = &week_rows[i..j];
                    for (offset, row) in group.iter().enumerate() {
                        out.push(VisualPosition {
                            week: row.week,
                            school: row.school.clone(),
                            rank: row.rank,
                            position: f64::from(rank) + offset as f64 / group.len() as f64,
                        });
                    }
                    i = j;
                }
            }
            out
        }
    }
}
