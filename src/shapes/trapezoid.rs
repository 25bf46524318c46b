//! Concrete trapezoid, symmetric about a vertical axis

use serde::{Deserialize, Serialize};

/// Concrete trapezoid defined by its bottom and top widths, height and
/// the coordinates of the center of its bottom edge. The shape is
/// assumed symmetric about the vertical axis through that center.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Trapezoid {
    /// Bottom width
    pub bottom_width: f64,
    /// Top width
    pub top_width: f64,
    /// Height
    pub height: f64,
    /// X of the center of the bottom edge
    pub bottom_center_x: f64,
    /// Y level of the bottom edge
    pub bottom_center_y: f64,
}

impl Trapezoid {
    /// Create a trapezoid. Height must be positive; widths must be
    /// non-negative.
    pub fn new(
        bottom_width: f64,
        top_width: f64,
        height: f64,
        bottom_center_x: f64,
        bottom_center_y: f64,
    ) -> Self {
        Self {
            bottom_width,
            top_width,
            height,
            bottom_center_x,
            bottom_center_y,
        }
    }

    pub fn area(&self) -> f64 {
        (self.bottom_width + self.top_width) / 2.0 * self.height
    }

    /// Height of the centroid above the bottom edge.
    /// Degenerates to `h/2` when both widths are zero.
    fn cg_height(&self) -> f64 {
        let sum_b = self.bottom_width + self.top_width;
        if sum_b.abs() < 1e-9 {
            return self.height / 2.0;
        }
        (self.height / 3.0) * (self.bottom_width + 2.0 * self.top_width) / sum_b
    }

    pub fn cg_x(&self) -> f64 {
        // Centroid sits on the axis of symmetry
        self.bottom_center_x
    }

    pub fn cg_y(&self) -> f64 {
        self.bottom_center_y + self.cg_height()
    }

    /// Inertia about the horizontal axis through the trapezoid's centroid
    pub fn inertia_x_local(&self) -> f64 {
        let b1 = self.bottom_width;
        let b2 = self.top_width;
        let sum_b = b1 + b2;
        if sum_b.abs() < 1e-9 {
            return 0.0;
        }
        (self.height.powi(3) / 36.0) * (b1 * b1 + 4.0 * b1 * b2 + b2 * b2) / sum_b
    }

    /// Inertia about the vertical axis through the centroid.
    /// Closed-form expression for the isosceles case; an approximation
    /// for general trapezoids.
    pub fn inertia_y_local(&self) -> f64 {
        let b1 = self.bottom_width;
        let b2 = self.top_width;
        if (b1 + b2).abs() < 1e-9 || self.height == 0.0 {
            return 0.0;
        }
        self.height * (b1 + b2) * (b1 * b1 + b2 * b2) / 48.0
    }

    pub fn y_min(&self) -> f64 {
        self.bottom_center_y
    }

    pub fn y_max(&self) -> f64 {
        self.bottom_center_y + self.height
    }

    fn max_half_width(&self) -> f64 {
        (self.bottom_width / 2.0).max(self.top_width / 2.0)
    }

    pub fn x_min(&self) -> f64 {
        self.bottom_center_x - self.max_half_width()
    }

    pub fn x_max(&self) -> f64 {
        self.bottom_center_x + self.max_half_width()
    }
}
