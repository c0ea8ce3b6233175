//! Layout configuration surface.

/// Plot margins in pixels, subtracted from the viewport before scales are
/// derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 30.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

impl Margins {
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Knobs of one layout pass. `Default` carries the documented constants; the
/// top-N emphasis count lives on snapshot construction, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    /// Vertical spacing between stacked delta labels sharing a final rank.
    pub label_spacing: f64,
    /// Horizontal gap between a trajectory's final point and its delta label.
    pub delta_label_gap: f64,
    pub margins: Margins,
    /// Responsive width cap applied by [`Viewport::from_container_width`].
    pub max_width: f64,
    /// Height/width ratio used when height is derived from container width.
    pub aspect_ratio: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            label_spacing: 14.0,
            delta_label_gap: 20.0,
            margins: Margins::default(),
            max_width: 1200.0,
            aspect_ratio: 0.65,
            x_axis_title: "Week".to_string(),
            y_axis_title: "Rank".to_string(),
        }
    }
}

/// Target drawing surface size for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Derives the viewport from an observed container width, capping it and
    /// applying the fixed aspect ratio. This is the resize-observer path: the
    /// event source calls this per notification and requests a fresh layout.
    pub fn from_container_width(container_width: f64, config: &ChartConfig) -> Self {
        let width = container_width.min(config.max_width);
        Self {
            width,
            height: width * config.aspect_ratio,
        }
    }
}
