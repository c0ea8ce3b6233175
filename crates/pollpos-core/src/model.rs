use serde::{Deserialize, Serialize};

/// One school's published rank in one week of one named poll.
///
/// Within a single (week, poll) group, `school` values are unique; `rank`
/// values may repeat (published ties).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollRow {
    pub week: u32,
    pub poll: String,
    pub rank: u32,
    pub school: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logos: Vec<String>,
}

/// A [`PollRow`] plus its week-local dense visual rank.
///
/// `visual_rank` is distinct from the published `rank`: ties are broken by
/// ascending school name, so for a fixed week the assigned values are exactly
/// `{1, …, k}` for `k` rows that week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRow {
    pub week: u32,
    pub poll: String,
    pub rank: u32,
    pub school: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub logos: Vec<String>,
    #[serde(rename = "visualRank")]
    pub visual_rank: u32,
}

impl NormalizedRow {
    pub(crate) fn from_row(row: &PollRow, visual_rank: u32) -> Self {
        Self {
            week: row.week,
            poll: row.poll.clone(),
            rank: row.rank,
            school: row.school.clone(),
            color: row.color.clone(),
            logos: row.logos.clone(),
            visual_rank,
        }
    }
}

/// One rank observation on a school's trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub week: u32,
    pub rank: u32,
    #[serde(rename = "visualRank")]
    pub visual_rank: u32,
}

/// A school's ordered sequence of rank observations across weeks.
///
/// `points` is strictly ascending by week (per-week uniqueness per school is
/// an input invariant). `is_top` marks membership in the final week's top set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub school: String,
    pub color: String,
    pub points: Vec<TrajectoryPoint>,
    #[serde(rename = "isTop")]
    pub is_top: bool,
}

impl Trajectory {
    pub fn first_point(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last_point(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }
}
