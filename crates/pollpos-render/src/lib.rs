#![forbid(unsafe_code)]

//! Headless layout for pollpos rank-trajectory charts.
//!
//! Takes an immutable [`pollpos_core::PollSnapshot`] plus a viewport and
//! produces a fully positioned, serializable [`model::PollChartScene`]. The
//! whole pass is synchronous and pure: calling it twice with identical
//! inputs yields structurally identical output, which is what the visual
//! regression tests rely on.

pub mod config;
pub mod delta;
pub mod model;
pub mod scale;
pub mod scene;

pub use config::{ChartConfig, Margins, Viewport};
pub use delta::{DeltaDirection, DeltaEntry, annotate_deltas};
pub use scale::{ChartScales, LinearScale};
pub use scene::layout_poll_chart;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid viewport: {message}")]
    InvalidViewport { message: String },
    #[error("invalid chart config: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
