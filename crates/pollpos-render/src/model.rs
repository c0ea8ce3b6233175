//! Serializable scene structs consumed by the drawing adapter.
//!
//! Everything here is plain data: positions are already resolved to pixels
//! relative to the plot origin (the adapter translates by the margins), and
//! no field is mutated after assembly.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
}

/// One school's connected line across weeks. Single-point trajectories carry
/// one coordinate and draw as a marker only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePolyline {
    pub school: String,
    /// Resolved stroke color (team color for top schools, muted otherwise).
    pub color: String,
    #[serde(rename = "isTop")]
    pub is_top: bool,
    pub points: Vec<ScenePoint>,
    #[serde(rename = "strokeWidth")]
    pub stroke_width: f64,
    pub opacity: f64,
}

/// One marker per normalized row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneMarker {
    pub school: String,
    pub week: u32,
    pub rank: u32,
    #[serde(rename = "visualRank")]
    pub visual_rank: u32,
    pub x: f64,
    pub y: f64,
    /// Rank number drawn inside the marker.
    pub label: String,
    pub color: String,
    #[serde(rename = "isTop")]
    pub is_top: bool,
    #[serde(default)]
    pub logo: Option<String>,
    pub opacity: f64,
    /// `"<school>: Rank <rank>"`.
    pub tooltip: String,
}

/// A positioned net rank-change label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDeltaLabel {
    pub school: String,
    pub x: f64,
    pub y: f64,
    pub delta: i64,
    #[serde(rename = "finalRank")]
    pub final_rank: u32,
    /// `"<abs(delta)> <▲|▼|–>"`.
    pub text: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAxisTick {
    pub value: f64,
    /// Pixel position along the axis.
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneMargins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// The assembled, immutable output of one layout pass.
///
/// Re-created on every pass; identical inputs produce structurally identical
/// scenes (and byte-identical JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollChartScene {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "innerWidth")]
    pub inner_width: f64,
    #[serde(rename = "innerHeight")]
    pub inner_height: f64,
    pub margins: SceneMargins,
    #[serde(rename = "xAxisTitle")]
    pub x_axis_title: String,
    #[serde(rename = "yAxisTitle")]
    pub y_axis_title: String,
    #[serde(rename = "xTicks")]
    pub x_ticks: Vec<SceneAxisTick>,
    #[serde(rename = "yTicks")]
    pub y_ticks: Vec<SceneAxisTick>,
    pub polylines: Vec<ScenePolyline>,
    pub markers: Vec<SceneMarker>,
    #[serde(rename = "deltaLabels")]
    pub delta_labels: Vec<SceneDeltaLabel>,
    /// Responsive base radius for markers.
    #[serde(rename = "markerRadius")]
    pub marker_radius: f64,
    /// Responsive base font size for labels.
    #[serde(rename = "fontSize")]
    pub font_size: f64,
}
