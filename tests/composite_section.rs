use approx::{assert_abs_diff_eq, assert_relative_eq};
use section_solver::prelude::*;

/// Welded I-girder: 300x15 flanges, 10x1000 web, bottom fiber at y = 0.
fn steel_girder() -> Vec<Shape> {
    vec![
        Shape::from(Plate::new(300.0, 15.0, 0.0, 7.5)),
        Shape::from(Plate::new(10.0, 1000.0, 0.0, 515.0)),
        Shape::from(Plate::new(300.0, 15.0, 0.0, 1022.5)),
    ]
}

/// The same girder with a 2000x250 concrete slab sitting on the top flange.
fn composite_girder() -> Vec<Shape> {
    let mut shapes = steel_girder();
    shapes.push(Shape::from(Trapezoid::new(
        2000.0, 2000.0, 250.0, 0.0, 1030.0,
    )));
    shapes
}

#[test]
fn steel_girder_properties_match_hand_calculation() {
    let props = aggregate(&steel_girder(), false, None).unwrap();

    let flange_area = 300.0 * 15.0;
    let web_area = 10.0 * 1000.0;
    assert_relative_eq!(props.total_area, 2.0 * flange_area + web_area, epsilon = 1e-9);
    // Doubly symmetric: centroid at mid-depth
    assert_abs_diff_eq!(props.centroid_y, 515.0, epsilon = 1e-9);
    assert_abs_diff_eq!(props.centroid_x, 0.0, epsilon = 1e-9);

    let flange_local = 300.0 * 15.0_f64.powi(3) / 12.0;
    let expected_ix = 2.0 * (flange_local + flange_area * 507.5_f64.powi(2))
        + 10.0 * 1000.0_f64.powi(3) / 12.0;
    assert_relative_eq!(props.inertia_x, expected_ix, epsilon = 1e-9);
}

#[test]
fn homogenized_composite_pulls_centroid_toward_slab() {
    let shapes = composite_girder();
    let n = modular_ratio(25.0, DEFAULT_E_STEEL);
    assert!(n > 6.0 && n < 7.0);

    let props = aggregate(&shapes, true, Some(n)).unwrap();
    let slab_equivalent = 2000.0 * 250.0 / n;
    assert_relative_eq!(
        props.total_area,
        19_000.0 + slab_equivalent,
        epsilon = 1e-9
    );
    // Between the bare girder centroid and the slab centroid
    assert!(props.centroid_y > 515.0);
    assert!(props.centroid_y < 1155.0);
    // Composite action stiffens the section
    let bare = aggregate(&steel_girder(), false, None).unwrap();
    assert!(props.inertia_x > bare.inertia_x);
}

#[test]
fn pure_bending_on_symmetric_girder() {
    let shapes = steel_girder();
    let props = aggregate(&shapes, false, None).unwrap();
    let m = 500.0e6; // N*mm, compresses fibers above the centroid

    let result = analyze_stress(&shapes, &props, 0.0, m).unwrap();
    assert_eq!(result.neutral_axis, NeutralAxis::At(props.centroid_y));

    // Extreme fibers of the whole section sit on the outer flanges
    let bottom = result.fiber_stress(0, Fiber::Bottom).unwrap();
    let top = result.fiber_stress(2, Fiber::Top).unwrap();
    assert!(bottom.stress > 0.0);
    assert!(top.stress < 0.0);
    assert_abs_diff_eq!(bottom.stress, -top.stress, epsilon = 1e-9);
    assert_relative_eq!(
        bottom.stress,
        m * 515.0 / props.inertia_x,
        epsilon = 1e-12
    );
}

#[test]
fn bending_classification_of_girder_elements() {
    let shapes = steel_girder();
    let props = aggregate(&shapes, false, None).unwrap();
    let result = analyze_stress(&shapes, &props, 0.0, 500.0e6).unwrap();

    let classes = classify(&shapes, result.neutral_axis, 235.0);

    // Bottom flange is fully in tension: class 1 by default
    assert_eq!(classes.element_classes[&0], ElementClass::Class1);
    // Web is cut by the neutral axis, c/t = 1000/10 = 100: class 4
    assert_eq!(classes.element_classes[&1], ElementClass::Class4);
    // Top flange fully compressed, outstand c/t = 150/15 = 10: class 2
    assert_eq!(classes.element_classes[&2], ElementClass::Class2);
    assert_eq!(classes.overall_class, ElementClass::Class4);
}

#[test]
fn composite_pipeline_with_combined_loading() {
    let shapes = composite_girder();
    let n = modular_ratio(25.0, DEFAULT_E_STEEL);
    let props = aggregate(&shapes, true, Some(n)).unwrap();

    let n_ed = -2.0e6; // compression
    let m_ed = 800.0e6;
    let result = analyze_stress(&shapes, &props, n_ed, m_ed).unwrap();

    // Compression shifts the neutral axis below the centroid for M > 0
    let y_na = result.neutral_axis.position().unwrap();
    assert!(y_na < props.centroid_y);

    // Navier stress vanishes at the neutral axis
    let sigma_at_na =
        n_ed / props.total_area - (m_ed / props.inertia_x) * (y_na - props.centroid_y);
    assert_abs_diff_eq!(sigma_at_na, 0.0, epsilon = 1e-9);

    // Every shape contributes a bottom and a top fiber
    assert_eq!(result.fibers.len(), 2 * shapes.len());
    let slab_top = result.fiber_stress(3, Fiber::Top).unwrap();
    assert_eq!(slab_top.material, Material::Concrete);
    assert!(slab_top.stress < 0.0);

    let classes = classify(&shapes, result.neutral_axis, 355.0);
    // Concrete slab receives no class
    assert!(!classes.element_classes.contains_key(&3));
    assert_eq!(classes.element_classes.len(), 3);
    assert_eq!(classes.overall_class, ElementClass::Class4);
}

#[test]
fn results_serialize_to_json() {
    let shapes = composite_girder();
    let props = aggregate(&shapes, false, None).unwrap();
    let result = analyze_stress(&shapes, &props, -1.0e6, 300.0e6).unwrap();
    let classes = classify(&shapes, result.neutral_axis, 275.0);

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("neutral_axis"));
    let back: StressResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back.fibers.len(), result.fibers.len());

    let json = serde_json::to_string(&classes).unwrap();
    assert!(json.contains("overall_class"));
}
