use serde::{Deserialize, Serialize};

/// Vertical value scale mapping `[0, axis_max]` onto `[y_bottom, y_top]` pixels.
///
/// A non-positive or non-finite `axis_max` maps every value to `y_bottom`, so
/// downstream geometry stays finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    axis_max: f64,
    y_top: f64,
    y_bottom: f64,
}

impl ValueScale {
    #[must_use]
    pub fn new(axis_max: f64, y_top: f64, y_bottom: f64) -> Self {
        Self {
            axis_max,
            y_top,
            y_bottom,
        }
    }

    #[must_use]
    pub fn axis_max(self) -> f64 {
        self.axis_max
    }

    #[must_use]
    pub fn y_top(self) -> f64 {
        self.y_top
    }

    #[must_use]
    pub fn y_bottom(self) -> f64 {
        self.y_bottom
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        (self.y_bottom - self.y_top).max(0.0)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        !self.axis_max.is_finite() || self.axis_max <= 0.0
    }

    /// `y(value) = y_bottom - (value / axis_max) * (y_bottom - y_top)`.
    #[must_use]
    pub fn to_pixel(self, value: f64) -> f64 {
        if self.is_degenerate() || !value.is_finite() {
            return self.y_bottom;
        }
        self.y_bottom - (value / self.axis_max) * self.plot_height()
    }

    /// Vertical extent of `value` measured up from `y_bottom`, clamped to `>= 0`.
    #[must_use]
    pub fn extent(self, value: f64) -> f64 {
        (self.y_bottom - self.to_pixel(value)).max(0.0)
    }
}
