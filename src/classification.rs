//! Simplified EC3 classification of steel plate elements
//!
//! Classes follow EC3 Table 5.2 with the pure-compression c/t limits.
//! The compressed depth of each element is taken as its full relevant
//! dimension even under partial compression, which keeps the result on
//! the conservative side throughout.

use std::collections::BTreeMap;

use crate::materials::Material;
use crate::results::{ClassificationResult, ElementClass, NeutralAxis};
use crate::shapes::{Plate, Shape};

/// c/t limits for internal (web-like) parts in pure compression,
/// classes 1 to 3, to be multiplied by epsilon
const LIMITS_INTERNAL: [f64; 3] = [33.0, 38.0, 42.0];

/// c/t limits for outstand (flange-like) parts in pure compression
const LIMITS_OUTSTAND: [f64; 3] = [9.0, 10.0, 14.0];

/// Thicknesses at or below this carry no meaningful slenderness
const THICKNESS_TOL: f64 = 1e-6;

/// Structural idealization of a plate element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    /// Restrained on both edges (web)
    Internal,
    /// One free edge (flange)
    Outstand,
}

/// Class of a single element from its slenderness ratio.
/// Ties resolve to the lower, more restrictive class.
fn element_class(ratio_ct: f64, epsilon: f64, kind: ElementKind) -> ElementClass {
    let limits = match kind {
        ElementKind::Internal => &LIMITS_INTERNAL,
        ElementKind::Outstand => &LIMITS_OUTSTAND,
    };
    if ratio_ct <= limits[0] * epsilon {
        ElementClass::Class1
    } else if ratio_ct <= limits[1] * epsilon {
        ElementClass::Class2
    } else if ratio_ct <= limits[2] * epsilon {
        ElementClass::Class3
    } else {
        ElementClass::Class4
    }
}

/// Web/flange idealization of an axis-aligned plate: taller than wide is
/// treated as an internal web over its full height, otherwise as an
/// outstand flange over half its width.
fn idealize_plate(plate: &Plate) -> (f64, f64, ElementKind) {
    if plate.height > plate.width {
        (plate.width, plate.height, ElementKind::Internal)
    } else {
        (plate.height, plate.width / 2.0, ElementKind::Outstand)
    }
}

/// Perform a simplified EC3 classification of the steel elements of a
/// section.
///
/// `neutral_axis` comes from a preceding stress analysis; `fy` is the
/// steel yield strength in MPa. Non-steel shapes are skipped and
/// receive no class. Elements not reached by compression default to
/// class 1; the overall class is the worst element class.
pub fn classify(shapes: &[Shape], neutral_axis: NeutralAxis, fy: f64) -> ClassificationResult {
    let mut result = ClassificationResult {
        element_classes: BTreeMap::new(),
        overall_class: ElementClass::Class1,
        warnings: Vec::new(),
    };

    if fy <= 0.0 {
        result
            .warnings
            .push("invalid fy, epsilon cannot be computed; classification skipped".into());
        return result;
    }

    let epsilon = (235.0 / fy).sqrt();
    let mut max_class = ElementClass::Class1;

    for (index, shape) in shapes.iter().enumerate() {
        if shape.material() != Material::Steel {
            continue;
        }

        let y_min = shape.y_min();
        let y_max = shape.y_max();

        // Compression reaches the element when the neutral axis cuts it
        // (partial) or lies at or below its bottom fiber (taken as full
        // compression, conservatively). Anything else, including the
        // pure-axial and no-load cases, is left unclassified at class 1.
        let compressed = match neutral_axis {
            NeutralAxis::At(y_na) => (y_na > y_min && y_na < y_max) || y_na <= y_min,
            NeutralAxis::Infinite | NeutralAxis::Absent => false,
        };

        let shape_class = if compressed {
            let (t, c, kind) = match shape {
                Shape::Plate(plate) => idealize_plate(plate),
                Shape::OrientedPlate(plate) => {
                    result.warnings.push(format!(
                        "oriented plate {} classified conservatively as an outstand over its full length",
                        index + 1
                    ));
                    (plate.thickness, plate.length(), ElementKind::Outstand)
                }
                // Steel shapes are plates by construction
                Shape::Trapezoid(_) => unreachable!("trapezoids are concrete"),
            };

            if t > THICKNESS_TOL {
                element_class(c / t, epsilon, kind)
            } else {
                ElementClass::Class1
            }
        } else {
            ElementClass::Class1
        };

        result.element_classes.insert(index, shape_class);
        max_class = max_class.max(shape_class);
    }

    result.overall_class = max_class;

    result
        .warnings
        .push("EC4 rule (flange connected to concrete upgrades to class 1) not implemented".into());
    result.warnings.push(
        "classification uses a simple web/flange heuristic with full compressed dimensions (conservative)"
            .into(),
    );

    result
}
