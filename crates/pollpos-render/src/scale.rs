//! Linear coordinate scales derived from the normalized data's domain.

use crate::config::{ChartConfig, Viewport};
use crate::{Error, Result};
use pollpos_core::NormalizedRow;

/// A linear `domain → range` mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a domain value into the range. A zero-width domain maps every
    /// input to range start so a single-week dataset still lays out.
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// The x/y scales of one layout pass plus the inner plot size.
///
/// Derivation reads only the immutable normalized rows, so re-deriving for a
/// new viewport never perturbs visual rank assignments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl ChartScales {
    /// Derives week→x and visual-rank→y scales for the given viewport.
    ///
    /// The y domain is padded by half a rank unit on both ends so the
    /// topmost/bottommost markers do not touch the plot edge.
    pub fn derive(rows: &[NormalizedRow], viewport: &Viewport, config: &ChartConfig) -> Result<Self> {
        if !viewport.width.is_finite() || !viewport.height.is_finite() {
            return Err(Error::InvalidViewport {
                message: format!("dimensions must be finite, got {}x{}", viewport.width, viewport.height),
            });
        }
        let inner_width = viewport.width - config.margins.horizontal();
        let inner_height = viewport.height - config.margins.vertical();
        if inner_width <= 0.0 || inner_height <= 0.0 {
            return Err(Error::InvalidViewport {
                message: format!(
                    "viewport {}x{} leaves no plot area inside the margins",
                    viewport.width, viewport.height
                ),
            });
        }

        let week_min = rows.iter().map(|r| r.week).min().unwrap_or(0);
        let week_max = rows.iter().map(|r| r.week).max().unwrap_or(0);
        let vr_min = rows.iter().map(|r| r.visual_rank).min().unwrap_or(1);
        let vr_max = rows.iter().map(|r| r.visual_rank).max().unwrap_or(1);

        Ok(Self {
            x: LinearScale::new((f64::from(week_min), f64::from(week_max)), (0.0, inner_width)),
            y: LinearScale::new(
                (f64::from(vr_min) - 0.5, f64::from(vr_max) + 0.5),
                (0.0, inner_height),
            ),
            inner_width,
            inner_height,
        })
    }
}
