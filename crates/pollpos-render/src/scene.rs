//! Scene assembly: composes scales, trajectories and delta annotations into
//! one renderable description.

use crate::config::{ChartConfig, Viewport};
use crate::delta::annotate_deltas;
use crate::model::{
    PollChartScene, SceneAxisTick, SceneDeltaLabel, SceneMargins, SceneMarker, ScenePoint,
    ScenePolyline,
};
use crate::scale::ChartScales;
use crate::{Error, Result};
use pollpos_core::PollSnapshot;
use pollpos_core::geom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Stroke/fill for schools outside the top set.
const MUTED_COLOR: &str = "#444";

const TOP_LINE_WIDTH: f64 = 2.0;
const MUTED_LINE_WIDTH: f64 = 1.0;
const TOP_LINE_OPACITY: f64 = 0.7;
const MUTED_OPACITY: f64 = 0.3;
const TOP_MARKER_OPACITY: f64 = 0.95;

fn marker_radius(viewport: &Viewport) -> f64 {
    (viewport.width / 120.0).max(4.0)
}

fn font_size(viewport: &Viewport) -> f64 {
    (viewport.width / 80.0).max(8.0)
}

/// Lays out the full chart scene for one snapshot/viewport pair.
///
/// Pure: no hidden state survives the call, and an empty snapshot yields an
/// empty scene (no lines, no points, no ticks) rather than an error. Resize
/// handling is just calling this again with a new viewport; the snapshot's
/// cached normalization is reused untouched.
pub fn layout_poll_chart(
    snapshot: &PollSnapshot,
    viewport: &Viewport,
    config: &ChartConfig,
) -> Result<PollChartScene> {
    if !config.label_spacing.is_finite() || config.label_spacing <= 0.0 {
        return Err(Error::InvalidConfig {
            message: format!("label spacing must be positive, got {}", config.label_spacing),
        });
    }
    if !config.delta_label_gap.is_finite() {
        return Err(Error::InvalidConfig {
            message: "delta label gap must be finite".to_string(),
        });
    }

    let rows = snapshot.rows();
    let scales = ChartScales::derive(rows, viewport, config)?;

    let margins = SceneMargins {
        top: config.margins.top,
        right: config.margins.right,
        bottom: config.margins.bottom,
        left: config.margins.left,
    };

    let mut scene = PollChartScene {
        width: viewport.width,
        height: viewport.height,
        inner_width: scales.inner_width,
        inner_height: scales.inner_height,
        margins,
        x_axis_title: config.x_axis_title.clone(),
        y_axis_title: config.y_axis_title.clone(),
        x_ticks: Vec::new(),
        y_ticks: Vec::new(),
        polylines: Vec::new(),
        markers: Vec::new(),
        delta_labels: Vec::new(),
        marker_radius: marker_radius(viewport),
        font_size: font_size(viewport),
    };
    if snapshot.is_empty() {
        return Ok(scene);
    }

    let trajectories = snapshot.trajectories();
    let top_schools: FxHashSet<&str> = trajectories
        .iter()
        .filter(|t| t.is_top)
        .map(|t| t.school.as_str())
        .collect();
    let school_colors: FxHashMap<&str, &str> = trajectories
        .iter()
        .map(|t| (t.school.as_str(), t.color.as_str()))
        .collect();

    for trajectory in trajectories {
        let points = trajectory
            .points
            .iter()
            .map(|p| {
                let pos = geom::point(
                    scales.x.map(f64::from(p.week)),
                    scales.y.map(f64::from(p.visual_rank)),
                );
                ScenePoint { x: pos.x, y: pos.y }
            })
            .collect();
        scene.polylines.push(ScenePolyline {
            school: trajectory.school.clone(),
            color: if trajectory.is_top {
                trajectory.color.clone()
            } else {
                MUTED_COLOR.to_string()
            },
            is_top: trajectory.is_top,
            points,
            stroke_width: if trajectory.is_top { TOP_LINE_WIDTH } else { MUTED_LINE_WIDTH },
            opacity: if trajectory.is_top { TOP_LINE_OPACITY } else { MUTED_OPACITY },
        });
    }

    for row in rows {
        let is_top = top_schools.contains(row.school.as_str());
        let color = if is_top {
            school_colors
                .get(row.school.as_str())
                .copied()
                .unwrap_or(MUTED_COLOR)
                .to_string()
        } else {
            MUTED_COLOR.to_string()
        };
        let pos = geom::point(
            scales.x.map(f64::from(row.week)),
            scales.y.map(f64::from(row.visual_rank)),
        );
        scene.markers.push(SceneMarker {
            school: row.school.clone(),
            week: row.week,
            rank: row.rank,
            visual_rank: row.visual_rank,
            x: pos.x,
            y: pos.y,
            label: row.rank.to_string(),
            color,
            is_top,
            logo: row.logos.first().cloned(),
            opacity: if is_top { TOP_MARKER_OPACITY } else { MUTED_OPACITY },
            tooltip: format!("{}: Rank {}", row.school, row.rank),
        });
    }

    // Labels anchor on the published final rank, not the tie-broken visual
    // placement; slot offsets already separate schools sharing a rank.
    let final_week = snapshot.final_week();
    let label_x = scales.x.map(f64::from(final_week)) + config.delta_label_gap;
    for entry in annotate_deltas(trajectories, final_week, config.label_spacing) {
        scene.delta_labels.push(SceneDeltaLabel {
            x: label_x,
            y: scales.y.map(f64::from(entry.final_rank)) + entry.slot_offset,
            delta: entry.delta,
            final_rank: entry.final_rank,
            text: entry.label_text(),
            tooltip: entry.tooltip(),
            school: entry.school,
        });
    }

    // Rows are ordered by week, so dedup yields one tick per distinct week.
    let mut weeks: Vec<u32> = rows.iter().map(|r| r.week).collect();
    weeks.dedup();
    for week in weeks {
        scene.x_ticks.push(SceneAxisTick {
            value: f64::from(week),
            position: scales.x.map(f64::from(week)),
            label: week.to_string(),
        });
    }

    let vr_min = rows.iter().map(|r| r.visual_rank).min().unwrap_or(1);
    let vr_max = rows.iter().map(|r| r.visual_rank).max().unwrap_or(1);
    for rank in vr_min..=vr_max {
        scene.y_ticks.push(SceneAxisTick {
            value: f64::from(rank),
            position: scales.y.map(f64::from(rank)),
            label: rank.to_string(),
        });
    }

    Ok(scene)
}
