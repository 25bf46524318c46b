//! Steel plate of arbitrary orientation in the XY plane

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Thin rectangular steel plate defined by its two end points and a
/// thickness. The plate may be rotated at any angle in the XY plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrientedPlate {
    /// Start point of the plate midline
    pub p1: Point2<f64>,
    /// End point of the plate midline
    pub p2: Point2<f64>,
    /// Plate thickness, measured perpendicular to the midline
    pub thickness: f64,
}

impl OrientedPlate {
    /// Create a plate from the two end points of its midline.
    /// The points must not coincide and the thickness must be positive.
    pub fn from_points(p1: Point2<f64>, p2: Point2<f64>, thickness: f64) -> Self {
        Self { p1, p2, thickness }
    }

    /// Create a plate from a start point, a direction vector and a length.
    /// The direction is normalized; only its orientation matters.
    pub fn from_vector(
        p1: Point2<f64>,
        direction: Vector2<f64>,
        length: f64,
        thickness: f64,
    ) -> Self {
        let p2 = p1 + direction.normalize() * length;
        Self { p1, p2, thickness }
    }

    /// Length of the plate midline
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }

    /// Angle of the midline measured from the global X axis, in radians
    pub fn angle(&self) -> f64 {
        let d = self.p2 - self.p1;
        d.y.atan2(d.x)
    }

    pub fn area(&self) -> f64 {
        self.length() * self.thickness
    }

    pub fn cg_x(&self) -> f64 {
        (self.p1.x + self.p2.x) / 2.0
    }

    pub fn cg_y(&self) -> f64 {
        (self.p1.y + self.p2.y) / 2.0
    }

    /// Inertia about the horizontal axis through the plate's own centroid.
    ///
    /// Rotation transform of the rectangle inertias: with `Iu = L*t^3/12`
    /// about the midline and `Iv = t*L^3/12` across it, the product of
    /// inertia vanishes on the principal axes and
    /// `Ix = Iu*cos^2(a) + Iv*sin^2(a)`.
    pub fn inertia_x_local(&self) -> f64 {
        let (sin, cos) = self.angle().sin_cos();
        let l = self.length();
        let t = self.thickness;
        let iu = l * t.powi(3) / 12.0;
        let iv = t * l.powi(3) / 12.0;
        iu * cos.powi(2) + iv * sin.powi(2)
    }

    /// Inertia about the vertical axis through the plate's own centroid
    pub fn inertia_y_local(&self) -> f64 {
        let (sin, cos) = self.angle().sin_cos();
        let l = self.length();
        let t = self.thickness;
        let iu = l * t.powi(3) / 12.0;
        let iv = t * l.powi(3) / 12.0;
        iu * sin.powi(2) + iv * cos.powi(2)
    }

    // Bounding half-extents of the rotated rectangle.
    fn half_extents(&self) -> (f64, f64) {
        let (sin, cos) = self.angle().sin_cos();
        let l = self.length();
        let t = self.thickness;
        let hx = (l * cos.abs() + t * sin.abs()) / 2.0;
        let hy = (l * sin.abs() + t * cos.abs()) / 2.0;
        (hx, hy)
    }

    pub fn y_min(&self) -> f64 {
        self.cg_y() - self.half_extents().1
    }

    pub fn y_max(&self) -> f64 {
        self.cg_y() + self.half_extents().1
    }

    pub fn x_min(&self) -> f64 {
        self.cg_x() - self.half_extents().0
    }

    pub fn x_max(&self) -> f64 {
        self.cg_x() + self.half_extents().0
    }
}
