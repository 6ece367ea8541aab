use serde::{Deserialize, Serialize};

/// Pixel size of one drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Horizontal slot reserved for one row's visual mark.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub x: f64,
    pub width: f64,
}

impl Band {
    #[must_use]
    pub fn center(self) -> f64 {
        self.x + self.width * 0.5
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }
}
