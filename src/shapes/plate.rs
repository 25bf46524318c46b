//! Axis-aligned rectangular steel plate

use serde::{Deserialize, Serialize};

/// Rectangular steel plate aligned with the global X/Y axes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plate {
    /// Dimension parallel to the global X axis
    pub width: f64,
    /// Dimension parallel to the global Y axis
    pub height: f64,
    /// Centroid X coordinate
    pub cg_x: f64,
    /// Centroid Y coordinate
    pub cg_y: f64,
}

impl Plate {
    /// Create a plate from its dimensions and centroid position.
    /// Width and height must be positive.
    pub fn new(width: f64, height: f64, cg_x: f64, cg_y: f64) -> Self {
        Self {
            width,
            height,
            cg_x,
            cg_y,
        }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Inertia about the horizontal axis through the plate's own centroid
    pub fn inertia_x_local(&self) -> f64 {
        self.width * self.height.powi(3) / 12.0
    }

    /// Inertia about the vertical axis through the plate's own centroid
    pub fn inertia_y_local(&self) -> f64 {
        self.height * self.width.powi(3) / 12.0
    }

    pub fn y_min(&self) -> f64 {
        self.cg_y - self.height / 2.0
    }

    pub fn y_max(&self) -> f64 {
        self.cg_y + self.height / 2.0
    }

    pub fn x_min(&self) -> f64 {
        self.cg_x - self.width / 2.0
    }

    pub fn x_max(&self) -> f64 {
        self.cg_x + self.width / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plate_properties() {
        let plate = Plate::new(200.0, 20.0, 0.0, 0.0);
        assert!((plate.area() - 4000.0).abs() < 1e-10);
        assert!((plate.inertia_x_local() - 200.0 * 20.0_f64.powi(3) / 12.0).abs() < 1e-10);
        assert!((plate.inertia_y_local() - 20.0 * 200.0_f64.powi(3) / 12.0).abs() < 1e-10);
    }

    #[test]
    fn test_plate_extremes() {
        let plate = Plate::new(100.0, 40.0, 10.0, -5.0);
        assert_eq!(plate.y_min(), -25.0);
        assert_eq!(plate.y_max(), 15.0);
        assert_eq!(plate.x_min(), -40.0);
        assert_eq!(plate.x_max(), 60.0);
    }
}
