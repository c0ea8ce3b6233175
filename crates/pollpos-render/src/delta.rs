//! Net rank-change annotation for schools present in the final week.

use pollpos_core::Trajectory;

/// Sign convention: the published rank grows downward, so a positive delta
/// means the school declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaDirection {
    Improved,
    Declined,
    Steady,
}

impl DeltaDirection {
    pub fn from_delta(delta: i64) -> Self {
        match delta {
            d if d > 0 => Self::Declined,
            d if d < 0 => Self::Improved,
            _ => Self::Steady,
        }
    }

    /// Indicator glyph shown next to the magnitude.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Improved => "▲",
            Self::Declined => "▼",
            Self::Steady => "–",
        }
    }
}

/// One school's net change between its first observed rank and its final
/// rank, plus its resolved vertical label slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaEntry {
    pub school: String,
    pub final_week: u32,
    pub final_rank: u32,
    /// `final_rank - first_rank`; negative = improved.
    pub delta: i64,
    /// Vertical offset in pixels from the final rank's nominal y-coordinate.
    /// Non-zero only when several schools share a final rank.
    pub slot_offset: f64,
}

impl DeltaEntry {
    pub fn direction(&self) -> DeltaDirection {
        DeltaDirection::from_delta(self.delta)
    }

    /// Label text, e.g. `"7 ▲"`.
    pub fn label_text(&self) -> String {
        format!("{} {}", self.delta.unsigned_abs(), self.direction().symbol())
    }

    /// Tooltip text for the drawing adapter.
    pub fn tooltip(&self) -> String {
        let n = self.delta.unsigned_abs();
        let places = if n == 1 { "place" } else { "places" };
        match self.direction() {
            DeltaDirection::Improved => {
                format!("{} rose {n} {places} since entering the poll", self.school)
            }
            DeltaDirection::Declined => {
                format!("{} fell {n} {places} since entering the poll", self.school)
            }
            DeltaDirection::Steady => {
                format!("{} held steady since entering the poll", self.school)
            }
        }
    }
}

/// Computes delta entries for every trajectory ending in `final_week` and
/// assigns non-overlapping vertical slots among entries sharing a final rank.
///
/// Slots of a group of size `k` are `{-((k-1)/2)·S, …, +((k-1)/2)·S}` in
/// ascending-delta order (school name breaks equal deltas), centering the
/// stack on the rank's nominal y-coordinate. Schools that dropped out before
/// the final week receive no entry.
pub fn annotate_deltas(trajectories: &[Trajectory], final_week: u32, spacing: f64) -> Vec<DeltaEntry> {
    let mut entries: Vec<DeltaEntry> = Vec::new();
    for trajectory in trajectories {
        let (Some(first), Some(last)) = (trajectory.first_point(), trajectory.last_point()) else {
            continue;
        };
        if last.week != final_week {
            continue;
        }
        entries.push(DeltaEntry {
            school: trajectory.school.clone(),
            final_week,
            final_rank: last.rank,
            delta: i64::from(last.rank) - i64::from(first.rank),
            slot_offset: 0.0,
        });
    }

    // Group by final rank, then spread each group around its anchor.
    entries.sort_by(|a, b| {
        a.final_rank
            .cmp(&b.final_rank)
            .then(a.delta.cmp(&b.delta))
            .then_with(|| a.school.cmp(&b.school))
    });

    let mut i = 0;
    while i < entries.len() {
        let rank = entries[i].final_rank;
        let mut j = i;
        while j < entries.len() && entries[j].final_rank == rank {
            j += 1;
        }
        let k = j - i;
        for (slot, entry) in entries[i..j].iter_mut().enumerate() {
            entry.slot_offset = (slot as f64 - (k as f64 - 1.0) / 2.0) * spacing;
        }
        i = j;
    }

    entries
}
