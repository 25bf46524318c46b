//! Cross-section shapes module
//!
//! The analysis engines consume shapes only through the accessor
//! contract on [`Shape`]: area, centroid, local inertias about the
//! centroidal axes, axis-aligned bounding extremes and a material tag.
//! `Shape` is a closed set of variants; the EC3 classifier additionally
//! branches on the variant to pick a web/flange idealization.

mod oriented;
mod plate;
mod trapezoid;

pub use oriented::OrientedPlate;
pub use plate::Plate;
pub use trapezoid::Trapezoid;

use serde::{Deserialize, Serialize};

use crate::materials::Material;

/// A shape of the composite cross-section
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangular steel plate
    Plate(Plate),
    /// Steel plate of arbitrary orientation
    OrientedPlate(OrientedPlate),
    /// Concrete trapezoid
    Trapezoid(Trapezoid),
}

impl Shape {
    pub fn area(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.area(),
            Shape::OrientedPlate(p) => p.area(),
            Shape::Trapezoid(t) => t.area(),
        }
    }

    pub fn cg_x(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.cg_x,
            Shape::OrientedPlate(p) => p.cg_x(),
            Shape::Trapezoid(t) => t.cg_x(),
        }
    }

    pub fn cg_y(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.cg_y,
            Shape::OrientedPlate(p) => p.cg_y(),
            Shape::Trapezoid(t) => t.cg_y(),
        }
    }

    /// Second moment of area about the horizontal axis through the
    /// shape's own centroid
    pub fn inertia_x_local(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.inertia_x_local(),
            Shape::OrientedPlate(p) => p.inertia_x_local(),
            Shape::Trapezoid(t) => t.inertia_x_local(),
        }
    }

    /// Second moment of area about the vertical axis through the
    /// shape's own centroid
    pub fn inertia_y_local(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.inertia_y_local(),
            Shape::OrientedPlate(p) => p.inertia_y_local(),
            Shape::Trapezoid(t) => t.inertia_y_local(),
        }
    }

    pub fn y_min(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.y_min(),
            Shape::OrientedPlate(p) => p.y_min(),
            Shape::Trapezoid(t) => t.y_min(),
        }
    }

    pub fn y_max(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.y_max(),
            Shape::OrientedPlate(p) => p.y_max(),
            Shape::Trapezoid(t) => t.y_max(),
        }
    }

    pub fn x_min(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.x_min(),
            Shape::OrientedPlate(p) => p.x_min(),
            Shape::Trapezoid(t) => t.x_min(),
        }
    }

    pub fn x_max(&self) -> f64 {
        match self {
            Shape::Plate(p) => p.x_max(),
            Shape::OrientedPlate(p) => p.x_max(),
            Shape::Trapezoid(t) => t.x_max(),
        }
    }

    pub fn material(&self) -> Material {
        match self {
            Shape::Plate(_) | Shape::OrientedPlate(_) => Material::Steel,
            Shape::Trapezoid(_) => Material::Concrete,
        }
    }
}

impl From<Plate> for Shape {
    fn from(plate: Plate) -> Self {
        Shape::Plate(plate)
    }
}

impl From<OrientedPlate> for Shape {
    fn from(plate: OrientedPlate) -> Self {
        Shape::OrientedPlate(plate)
    }
}

impl From<Trapezoid> for Shape {
    fn from(trapezoid: Trapezoid) -> Self {
        Shape::Trapezoid(trapezoid)
    }
}
