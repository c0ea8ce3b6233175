use super::{colored_row, row};
use crate::normalize::normalize_rows;
use crate::trajectory::{NEUTRAL_COLOR, build_trajectories, final_week, top_set};

#[test]
fn final_week_is_zero_for_empty_input() {
    assert_eq!(final_week(&[]), 0);
}

#[test]
fn final_week_is_max_week() {
    let rows = normalize_rows(&[row(1, 1, "A"), row(5, 1, "A"), row(3, 2, "B")]);
    assert_eq!(final_week(&rows), 5);
}

#[test]
fn top_set_takes_best_final_week_ranks() {
    let rows = normalize_rows(&[
        row(1, 1, "Fresno State"),
        row(2, 1, "Georgia"),
        row(2, 2, "Michigan"),
        row(2, 3, "Texas"),
        row(2, 4, "Alabama"),
    ]);
    let top = top_set(&rows, 3);
    assert_eq!(top, vec!["Georgia", "Michigan", "Texas"]);
}

#[test]
fn top_set_is_capped_by_final_week_size() {
    let rows = normalize_rows(&[row(1, 1, "A"), row(1, 2, "B")]);
    assert_eq!(top_set(&rows, 12).len(), 2);
}

#[test]
fn top_set_boundary_ties_break_lexicographically() {
    let rows = normalize_rows(&[
        row(1, 1, "A"),
        row(1, 2, "Zebra Tech"),
        row(1, 2, "Mid State"),
    ]);
    // Rank-2 tie at the cutoff: the lexicographically smaller school wins.
    assert_eq!(top_set(&rows, 2), vec!["A", "Mid State"]);
}

#[test]
fn no_better_ranked_school_is_excluded_from_top_set() {
    let rows = normalize_rows(&[
        row(3, 5, "E"),
        row(3, 1, "A"),
        row(3, 9, "F"),
        row(3, 2, "B"),
        row(3, 7, "C"),
    ]);
    let top = top_set(&rows, 3);
    let worst_in = rows
        .iter()
        .filter(|r| top.contains(&r.school))
        .map(|r| r.rank)
        .max()
        .unwrap();
    let best_out = rows
        .iter()
        .filter(|r| !top.contains(&r.school))
        .map(|r| r.rank)
        .min()
        .unwrap();
    assert!(worst_in <= best_out);
}

#[test]
fn trajectories_sort_points_by_week() {
    let rows = normalize_rows(&[row(4, 3, "Ohio State"), row(1, 5, "Ohio State"), row(2, 4, "Ohio State")]);
    let trajectories = build_trajectories(&rows, 12);
    assert_eq!(trajectories.len(), 1);
    let weeks: Vec<u32> = trajectories[0].points.iter().map(|p| p.week).collect();
    assert_eq!(weeks, vec![1, 2, 4]);
    for pair in trajectories[0].points.windows(2) {
        assert!(pair[0].week < pair[1].week);
    }
}

#[test]
fn single_point_trajectory_is_valid() {
    let rows = normalize_rows(&[row(1, 25, "Tulane")]);
    let trajectories = build_trajectories(&rows, 12);
    assert_eq!(trajectories[0].points.len(), 1);
    assert!(trajectories[0].is_top);
}

#[test]
fn color_defaults_to_neutral_gray() {
    let rows = normalize_rows(&[row(1, 1, "A"), colored_row(1, 2, "B", "#bb0000")]);
    let trajectories = build_trajectories(&rows, 12);
    let a = trajectories.iter().find(|t| t.school == "A").unwrap();
    let b = trajectories.iter().find(|t| t.school == "B").unwrap();
    assert_eq!(a.color, NEUTRAL_COLOR);
    assert_eq!(b.color, "#bb0000");
}

#[test]
fn is_top_reflects_final_week_membership() {
    let rows = normalize_rows(&[
        // Ranked well early, gone by the final week.
        row(1, 1, "Dropout U"),
        row(2, 1, "Georgia"),
        row(2, 2, "Texas"),
    ]);
    let trajectories = build_trajectories(&rows, 12);
    let dropout = trajectories.iter().find(|t| t.school == "Dropout U").unwrap();
    let georgia = trajectories.iter().find(|t| t.school == "Georgia").unwrap();
    assert!(!dropout.is_top);
    assert!(georgia.is_top);
}

#[test]
fn trajectory_order_is_first_appearance_order() {
    let rows = normalize_rows(&[row(1, 2, "B"), row(1, 1, "A"), row(2, 1, "C")]);
    let trajectories = build_trajectories(&rows, 12);
    let schools: Vec<&str> = trajectories.iter().map(|t| t.school.as_str()).collect();
    // Normalized rows order week 1 by rank, so A precedes B.
    assert_eq!(schools, vec!["A", "B", "C"]);
}
