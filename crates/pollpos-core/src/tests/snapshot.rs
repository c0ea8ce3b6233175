use super::row;
use crate::snapshot::PollSnapshot;

#[test]
fn empty_snapshot() {
    let snapshot = PollSnapshot::new(Vec::new());
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.final_week(), 0);
    assert_eq!(snapshot.week_count(), 0);
    assert!(snapshot.trajectories().is_empty());
}

#[test]
fn snapshot_precomputes_normalization_and_trajectories() {
    let snapshot = PollSnapshot::new(vec![
        row(1, 1, "B"),
        row(1, 1, "A"),
        row(2, 1, "A"),
        row(2, 2, "B"),
    ]);
    assert_eq!(snapshot.final_week(), 2);
    assert_eq!(snapshot.week_count(), 2);
    assert_eq!(snapshot.rows().len(), 4);
    assert_eq!(snapshot.trajectories().len(), 2);

    // Week-1 tie resolved once, at construction.
    let a = snapshot
        .rows()
        .iter()
        .find(|r| r.week == 1 && r.school == "A")
        .unwrap();
    assert_eq!(a.visual_rank, 1);
}

#[test]
fn top_n_is_a_construction_parameter() {
    let rows = vec![row(1, 1, "A"), row(1, 2, "B"), row(1, 3, "C")];
    let snapshot = PollSnapshot::with_top_n(rows, 1);
    let tops: Vec<&str> = snapshot
        .trajectories()
        .iter()
        .filter(|t| t.is_top)
        .map(|t| t.school.as_str())
        .collect();
    assert_eq!(tops, vec!["A"]);
}
