#![forbid(unsafe_code)]

//! `pollpos` is a headless rank-trajectory chart engine.
//!
//! It turns a season of poll rows (week, rank, school) into a fully
//! positioned, serializable scene: one polyline per school, top-N emphasis
//! from the final week's standings, tie-broken vertical placement, and net
//! rank-change labels with collision-avoided slots. Data fetching and pixel
//! drawing are left to the caller; see [`render::layout_payload`] for the
//! one-call path from a decoded JSON payload to a scene.

pub use pollpos_core::*;

pub mod render {
    pub use pollpos_render::model::{
        PollChartScene, SceneAxisTick, SceneDeltaLabel, SceneMarker, ScenePoint, ScenePolyline,
    };
    pub use pollpos_render::{
        ChartConfig, ChartScales, DeltaDirection, DeltaEntry, LinearScale, Margins, Viewport,
        annotate_deltas, layout_poll_chart,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Decode(#[from] pollpos_core::Error),
        #[error(transparent)]
        Layout(#[from] pollpos_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Decodes a nested week-rankings payload, builds a snapshot and lays out
    /// the scene in one call.
    ///
    /// Callers that re-layout on resize should instead build the
    /// [`pollpos_core::PollSnapshot`] once and call [`layout_poll_chart`] per
    /// viewport change; this helper rebuilds the snapshot every time.
    pub fn layout_payload(
        payload: &serde_json::Value,
        poll: &str,
        viewport: &Viewport,
        config: &ChartConfig,
    ) -> Result<PollChartScene> {
        let rows = pollpos_core::flatten_rankings(payload, poll)?;
        let snapshot = pollpos_core::PollSnapshot::new(rows);
        Ok(layout_poll_chart(&snapshot, viewport, config)?)
    }

    /// As [`layout_payload`] but for a flat array of poll-row objects,
    /// optionally filtered to one poll name.
    pub fn layout_rows_payload(
        payload: &serde_json::Value,
        poll: Option<&str>,
        viewport: &Viewport,
        config: &ChartConfig,
    ) -> Result<PollChartScene> {
        let mut rows = pollpos_core::decode_poll_rows(payload)?;
        if let Some(poll) = poll {
            rows.retain(|r| r.poll == poll);
        }
        let snapshot = pollpos_core::PollSnapshot::new(rows);
        Ok(layout_poll_chart(&snapshot, viewport, config)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::render::{ChartConfig, Viewport, layout_payload, layout_rows_payload};
    use serde_json::json;

    #[test]
    fn payload_to_scene_in_one_call() {
        let payload = json!([
            {
                "week": 1,
                "polls": [
                    { "poll": "AP Top 25", "ranks": [
                        { "rank": 1, "school": "Georgia", "color": "#ba0c2f" },
                        { "rank": 2, "school": "Texas" }
                    ] }
                ]
            },
            {
                "week": 2,
                "polls": [
                    { "poll": "AP Top 25", "ranks": [
                        { "rank": 1, "school": "Texas" },
                        { "rank": 2, "school": "Georgia" }
                    ] }
                ]
            }
        ]);
        let scene = layout_payload(
            &payload,
            "AP Top 25",
            &Viewport::new(800.0, 520.0),
            &ChartConfig::default(),
        )
        .expect("scene");
        assert_eq!(scene.polylines.len(), 2);
        assert_eq!(scene.markers.len(), 4);
        assert_eq!(scene.x_ticks.len(), 2);
    }

    #[test]
    fn flat_rows_payload_to_scene_with_poll_filter() {
        let payload = json!([
            { "week": 1, "poll": "AP Top 25", "rank": 1, "school": "Georgia" },
            { "week": 1, "poll": "AP Top 25", "rank": 2, "school": "Texas" },
            { "week": 1, "poll": "Coaches Poll", "rank": 1, "school": "Texas" },
            { "week": 2, "poll": "AP Top 25", "rank": 1, "school": "Texas" },
            { "week": 2, "poll": "AP Top 25", "rank": 2, "school": "Georgia" }
        ]);
        let viewport = Viewport::new(800.0, 520.0);
        let config = ChartConfig::default();

        let filtered = layout_rows_payload(&payload, Some("AP Top 25"), &viewport, &config)
            .expect("scene");
        // The Coaches Poll row is filtered out, so Texas keeps two markers.
        assert_eq!(filtered.polylines.len(), 2);
        assert_eq!(filtered.markers.len(), 4);
        assert_eq!(filtered.x_ticks.len(), 2);

        let unfiltered = layout_rows_payload(&payload, None, &viewport, &config).expect("scene");
        assert_eq!(unfiltered.markers.len(), 5);
    }

    #[test]
    fn shape_errors_surface_through_the_facade() {
        let err = layout_payload(
            &json!({}),
            "AP Top 25",
            &Viewport::new(800.0, 520.0),
            &ChartConfig::default(),
        )
        .expect_err("should fail");
        assert!(err.to_string().contains("array"));
    }
}
