//! Linear-elastic (Navier) stress analysis of a composite section

use crate::error::{SectionError, SectionResult};
use crate::results::{Fiber, FiberStress, NeutralAxis, SectionProperties, StressResult};
use crate::shapes::Shape;

const TOL: f64 = 1e-9;

/// Compute extreme-fiber stresses and the neutral-axis position under
/// combined axial force and bending.
///
/// `shapes` are the original (non-homogenized) shapes; `props` the
/// homogenized section properties. `n` is the axial force, tension
/// positive. `m` is the bending moment about the horizontal centroidal
/// axis; positive moment compresses fibers above the centroid.
///
/// Stresses follow Navier: `sigma = N/A - M*(y - y_G)/Ix`, evaluated at
/// each shape's `y_min` and `y_max` and tagged with that shape's
/// material. An error aborts the analysis; no partial result is
/// produced.
pub fn analyze_stress(
    shapes: &[Shape],
    props: &SectionProperties,
    n: f64,
    m: f64,
) -> SectionResult<StressResult> {
    let a_h = props.total_area;
    let iy_h = props.inertia_x;
    let y_g = props.centroid_y;

    // NaN models an absent property
    if !a_h.is_finite() || !iy_h.is_finite() || !y_g.is_finite() {
        return Err(SectionError::MissingProperties);
    }
    if a_h.abs() < TOL {
        return Err(SectionError::DegenerateArea);
    }
    if iy_h.abs() < TOL && m.abs() > TOL {
        return Err(SectionError::ZeroStiffnessWithMoment);
    }

    let sigma_axial = n / a_h;

    let neutral_axis = if m.abs() > TOL {
        let denom = m * a_h;
        if denom == 0.0 {
            return Err(SectionError::NeutralAxisUndefined);
        }
        NeutralAxis::At(y_g + (n * iy_h) / denom)
    } else if n.abs() < TOL {
        // No load at all: uniformly zero stress, no meaningful axis
        NeutralAxis::Absent
    } else {
        // Pure axial: uniform stress, the axis never crosses the section
        NeutralAxis::Infinite
    };

    let mut fibers = Vec::with_capacity(2 * shapes.len());
    for (index, shape) in shapes.iter().enumerate() {
        let material = shape.material();
        for (fiber, y) in [(Fiber::Bottom, shape.y_min()), (Fiber::Top, shape.y_max())] {
            let mut stress = sigma_axial;
            // Bending term only when the section has bending stiffness
            if iy_h.abs() > TOL {
                stress -= (m / iy_h) * (y - y_g);
            }
            fibers.push(FiberStress {
                shape: index,
                fiber,
                y,
                stress,
                material,
            });
        }
    }

    Ok(StressResult {
        neutral_axis,
        fibers,
    })
}
