//! Aggregation of shape properties into composite section properties

use crate::error::{SectionError, SectionResult};
use crate::materials::Material;
use crate::results::SectionProperties;
use crate::shapes::Shape;

/// Contributions with area magnitude at or below this are treated as
/// degenerate and skipped.
const AREA_TOL: f64 = 1e-9;

/// Possibly-homogenized contribution of one shape, kept between the
/// centroid pass and the inertia pass.
struct ProcessedShape {
    area: f64,
    x: f64,
    y: f64,
    inertia_x: f64,
    inertia_y: f64,
}

/// Computes the geometric properties of a composite section.
///
/// With homogenization enabled, concrete contributions are divided by
/// the modular ratio so the result is an equivalent all-steel section.
/// The same scalar is applied to the area and to both local inertias;
/// for the inertia about a non-principal axis this is an approximation,
/// not an exact stiffness transform.
pub struct SectionAggregator<'a> {
    shapes: &'a [Shape],
    homogenize: bool,
    modular_ratio: Option<f64>,
}

impl<'a> SectionAggregator<'a> {
    /// Set up an aggregation over `shapes`.
    ///
    /// Fails with [`SectionError::Configuration`] when homogenization is
    /// requested without a positive modular ratio.
    pub fn new(
        shapes: &'a [Shape],
        homogenize: bool,
        modular_ratio: Option<f64>,
    ) -> SectionResult<Self> {
        if homogenize {
            match modular_ratio {
                None => {
                    return Err(SectionError::Configuration(
                        "a modular ratio is required to homogenize".into(),
                    ))
                }
                Some(n) if n <= 0.0 => {
                    return Err(SectionError::Configuration(
                        "the modular ratio must be positive to homogenize".into(),
                    ))
                }
                Some(_) => {}
            }
        }
        Ok(Self {
            shapes,
            homogenize,
            modular_ratio,
        })
    }

    fn process_shape(&self, shape: &Shape) -> ProcessedShape {
        let mut area = shape.area();
        let mut inertia_x = shape.inertia_x_local();
        let mut inertia_y = shape.inertia_y_local();

        if self.homogenize && shape.material() == Material::Concrete {
            // Constructor guarantees a positive ratio when homogenizing
            let n = self.modular_ratio.unwrap_or(f64::INFINITY);
            area /= n;
            inertia_x /= n;
            inertia_y /= n;
        }

        ProcessedShape {
            area,
            x: shape.cg_x(),
            y: shape.cg_y(),
            inertia_x,
            inertia_y,
        }
    }

    /// Run the two-pass aggregation.
    ///
    /// The first pass accumulates area and first moments to locate the
    /// centroid; the second applies the parallel-axis theorem about it.
    /// Two passes are required because the global inertia needs the
    /// centroid, which depends on every shape.
    pub fn compute(&self) -> SectionProperties {
        let mut processed = Vec::with_capacity(self.shapes.len());
        let mut total_area = 0.0;
        let mut moment_x = 0.0;
        let mut moment_y = 0.0;

        for shape in self.shapes {
            let entry = self.process_shape(shape);
            // Zero-size contributions would pollute the centroid
            if entry.area.abs() > AREA_TOL {
                total_area += entry.area;
                moment_x += entry.area * entry.y;
                moment_y += entry.area * entry.x;
                processed.push(entry);
            }
        }

        if total_area.abs() < AREA_TOL {
            return SectionProperties::degenerate();
        }

        let centroid_x = moment_y / total_area;
        let centroid_y = moment_x / total_area;

        let mut inertia_x = 0.0;
        let mut inertia_y = 0.0;
        for entry in &processed {
            let dy = entry.y - centroid_y;
            let dx = entry.x - centroid_x;
            inertia_x += entry.inertia_x + entry.area * dy * dy;
            inertia_y += entry.inertia_y + entry.area * dx * dx;
        }

        SectionProperties {
            total_area,
            centroid_x,
            centroid_y,
            inertia_x,
            inertia_y,
        }
    }
}

/// Aggregate a collection of shapes into composite section properties.
///
/// Convenience wrapper around [`SectionAggregator`].
pub fn aggregate(
    shapes: &[Shape],
    homogenize: bool,
    modular_ratio: Option<f64>,
) -> SectionResult<SectionProperties> {
    Ok(SectionAggregator::new(shapes, homogenize, modular_ratio)?.compute())
}
