//! Section Solver - elastic analysis of composite steel-concrete cross-sections
//!
//! This library computes mechanical properties and stress distributions
//! for cross-sections built from an arbitrary collection of simple
//! shapes, and performs a simplified EC3 classification:
//! - Section property aggregation (area, centroid, inertias via the
//!   parallel-axis theorem), with optional homogenization of concrete to
//!   an equivalent steel section
//! - Linear-elastic (Navier) stress and neutral-axis computation under
//!   combined axial force and bending moment
//! - EC3 slenderness classification (classes 1-4) of the compressed
//!   steel plate elements
//!
//! All engines are pure, stateless functions over in-memory shape lists.
//! Units are the caller's responsibility and only need to be consistent
//! (e.g. mm, N, MPa).
//!
//! ## Example
//! ```rust
//! use section_solver::prelude::*;
//!
//! // Steel I-girder with a concrete slab on top
//! let shapes = vec![
//!     Shape::from(Plate::new(300.0, 15.0, 0.0, -507.5)),
//!     Shape::from(Plate::new(10.0, 1000.0, 0.0, 0.0)),
//!     Shape::from(Plate::new(300.0, 15.0, 0.0, 507.5)),
//!     Shape::from(Trapezoid::new(2000.0, 2000.0, 250.0, 0.0, 515.0)),
//! ];
//!
//! // Homogenize the concrete to equivalent steel
//! let n = modular_ratio(25.0, DEFAULT_E_STEEL);
//! let props = aggregate(&shapes, true, Some(n))?;
//!
//! // Combined compression and sagging moment
//! let stress = analyze_stress(&shapes, &props, -1.0e6, 2.5e9)?;
//!
//! // Classify the steel plates
//! let classes = classify(&shapes, stress.neutral_axis, 355.0);
//! println!("section is {}", classes.overall_class);
//! # Ok::<(), section_solver::SectionError>(())
//! ```

pub mod classification;
pub mod error;
pub mod materials;
pub mod results;
pub mod section;
pub mod shapes;
pub mod stress;

pub use error::{SectionError, SectionResult};

// Re-export common types
pub mod prelude {
    pub use crate::classification::classify;
    pub use crate::error::{SectionError, SectionResult};
    pub use crate::materials::{
        concrete_secant_modulus, modular_ratio, Material, DEFAULT_E_STEEL,
    };
    pub use crate::results::{
        ClassificationResult, ElementClass, Fiber, FiberStress, NeutralAxis, SectionProperties,
        StressResult,
    };
    pub use crate::section::{aggregate, SectionAggregator};
    pub use crate::shapes::{OrientedPlate, Plate, Shape, Trapezoid};
    pub use crate::stress::analyze_stress;
}
