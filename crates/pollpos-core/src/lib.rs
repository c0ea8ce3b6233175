#![forbid(unsafe_code)]

//! Poll payload decoding + rank-trajectory semantic model (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (layout snapshot goldens downstream)
//! - pure transformation chain: no I/O, no hidden mutable state
//! - tie handling is explicit: the published rank is never used for vertical
//!   placement, a week-local dense "visual rank" is
//!
//! The crate consumes an already-fetched poll payload (a `serde_json::Value`)
//! and produces normalized rows, per-school trajectories and an immutable
//! [`PollSnapshot`] that the layout crate turns into a drawable scene.

pub mod decode;
pub mod error;
pub mod geom;
pub mod model;
pub mod normalize;
pub mod snapshot;
pub mod trajectory;

pub use decode::{decode_poll_rows, flatten_rankings};
pub use error::{Error, Result};
pub use model::{NormalizedRow, PollRow, Trajectory, TrajectoryPoint};
pub use normalize::{TiePresentation, VisualPosition, normalize_rows, visual_positions};
pub use snapshot::PollSnapshot;
pub use trajectory::{DEFAULT_TOP_N, NEUTRAL_COLOR, build_trajectories, final_week, top_set};

#[cfg(test)]
mod tests;
