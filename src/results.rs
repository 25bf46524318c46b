//! Result types for section analysis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::materials::Material;

/// Aggregated geometric properties of a cross-section.
///
/// All fields are in consistent length units (e.g. mm and mm^4). A
/// degenerate section (total area within tolerance of zero) is reported
/// as the all-zero value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Total (possibly homogenized) area
    pub total_area: f64,
    /// Centroid X coordinate
    pub centroid_x: f64,
    /// Centroid Y coordinate
    pub centroid_y: f64,
    /// Second moment of area about the horizontal centroidal axis
    pub inertia_x: f64,
    /// Second moment of area about the vertical centroidal axis
    pub inertia_y: f64,
}

impl SectionProperties {
    /// All-zero properties of a degenerate (zero-area) section
    pub fn degenerate() -> Self {
        Self {
            total_area: 0.0,
            centroid_x: 0.0,
            centroid_y: 0.0,
            inertia_x: 0.0,
            inertia_y: 0.0,
        }
    }

    /// Whether the section has no effective area
    pub fn is_degenerate(&self) -> bool {
        self.total_area.abs() < 1e-9
    }
}

/// Position of the neutral axis under combined loading
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NeutralAxis {
    /// Finite Y coordinate where the combined stress is zero
    At(f64),
    /// Pure axial load: the section is uniformly stressed and the
    /// neutral axis lies at infinity
    Infinite,
    /// No load at all: the stress field is uniformly zero and no
    /// neutral axis is meaningful
    Absent,
}

impl NeutralAxis {
    /// Finite position, if the neutral axis crosses the section plane
    pub fn position(&self) -> Option<f64> {
        match self {
            NeutralAxis::At(y) => Some(*y),
            _ => None,
        }
    }
}

/// Which extreme fiber of a shape a stress value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fiber {
    /// The shape's lowest fiber (`y_min`)
    Bottom,
    /// The shape's highest fiber (`y_max`)
    Top,
}

/// Equivalent-steel stress at one extreme fiber of one shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FiberStress {
    /// Index of the shape in the input list
    pub shape: usize,
    /// Which extreme fiber of that shape
    pub fiber: Fiber,
    /// Global Y coordinate of the fiber
    pub y: f64,
    /// Equivalent stress (tension positive)
    pub stress: f64,
    /// Material of the shape the fiber belongs to
    pub material: Material,
}

/// Outcome of a Navier stress analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressResult {
    /// Neutral axis position
    pub neutral_axis: NeutralAxis,
    /// Extreme-fiber stresses, ordered by shape index, bottom then top
    pub fibers: Vec<FiberStress>,
}

impl StressResult {
    /// Look up the stress at one extreme fiber of one shape
    pub fn fiber_stress(&self, shape: usize, fiber: Fiber) -> Option<&FiberStress> {
        self.fibers
            .iter()
            .find(|f| f.shape == shape && f.fiber == fiber)
    }

    /// Largest tensile stress over all fibers, if any fiber was computed
    pub fn max_stress(&self) -> Option<f64> {
        self.fibers.iter().map(|f| f.stress).reduce(f64::max)
    }

    /// Largest compressive (most negative) stress over all fibers
    pub fn min_stress(&self) -> Option<f64> {
        self.fibers.iter().map(|f| f.stress).reduce(f64::min)
    }
}

/// EC3 cross-section class of a plate element
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementClass {
    Class1,
    Class2,
    Class3,
    Class4,
}

impl ElementClass {
    pub fn as_u8(&self) -> u8 {
        match self {
            ElementClass::Class1 => 1,
            ElementClass::Class2 => 2,
            ElementClass::Class3 => 3,
            ElementClass::Class4 => 4,
        }
    }
}

impl std::fmt::Display for ElementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Class {}", self.as_u8())
    }
}

/// Outcome of the simplified EC3 classification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Class of each steel element, keyed by shape index in the input
    /// list. Non-steel shapes receive no entry.
    pub element_classes: BTreeMap<usize, ElementClass>,
    /// Governing (highest) class over all steel elements
    pub overall_class: ElementClass,
    /// Advisories accumulated during classification
    pub warnings: Vec<String>,
}
