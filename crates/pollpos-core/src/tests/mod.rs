mod snapshot;
mod trajectory;

use crate::model::PollRow;

/// Shorthand for rows of a single named poll.
pub(crate) fn row(week: u32, rank: u32, school: &str) -> PollRow {
    PollRow {
        week,
        poll: "AP Top 25".to_string(),
        rank,
        school: school.to_string(),
        color: None,
        logos: Vec::new(),
    }
}

pub(crate) fn colored_row(week: u32, rank: u32, school: &str, color: &str) -> PollRow {
    PollRow {
        color: Some(color.to_string()),
        ..row(week, rank, school)
    }
}
