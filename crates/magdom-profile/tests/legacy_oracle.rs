//! Regression oracle: the retired monolithic damping formula against the
//! composable profile chain.
//!
//! The predecessor of the profile chain was a single callable that
//! special-cased the driven region, applied an exponential ramp measured
//! against the domain's outer faces, and returned bulk otherwise. It
//! survives here only as an oracle: the composite
//! `[RegionGated(driven), AbsorbingRamp(domain, w, bulk, Exponential)]`
//! must agree with it at every cell centre.

use magdom_core::Point3;
use magdom_profile::{Composite, RampShape, ScalarProfile};
use magdom_region::Region;
use magdom_test_utils::{cell_centres, strip, thin_film, CELL};

/// The legacy formula, straight-line port: driven short-circuit, then
/// exponential edge scaling against the domain's outer x faces, then bulk.
fn legacy_damping(
    domain: &Region,
    driven: &Region,
    width: f64,
    alpha_bulk: f64,
    alpha_driven: f64,
    pos: Point3,
) -> f64 {
    if driven.contains(pos) {
        return alpha_driven;
    }
    let xmin = domain.pmin()[0];
    let xmax = domain.pmax()[0];
    let xa = xmin + width;
    let xb = xmax - width;
    let x = pos[0];
    if x < xa {
        return ((xmin - x) * alpha_bulk.ln() / (xmin - xa)).exp();
    }
    if x > xb {
        return ((xmax - x) * alpha_bulk.ln() / (xmax - xb)).exp();
    }
    alpha_bulk
}

fn composite_damping(
    domain: &Region,
    driven: &Region,
    width: f64,
    alpha_bulk: f64,
    alpha_driven: f64,
) -> Composite<ScalarProfile> {
    Composite::with_profiles(
        [
            ScalarProfile::region_gated(driven.clone(), alpha_driven),
            ScalarProfile::absorbing_ramp(
                domain.clone(),
                magdom_core::Axis::X,
                width,
                alpha_bulk,
                RampShape::Exponential,
                false,
            )
            .expect("valid ramp parameters"),
        ],
        alpha_bulk,
    )
}

fn assert_agreement(domain: &Region, driven: &Region, width: f64, bulk: f64, driven_value: f64) {
    let chain = composite_damping(domain, driven, width, bulk, driven_value);
    for pos in cell_centres(domain, CELL) {
        let want = legacy_damping(domain, driven, width, bulk, driven_value, pos);
        let got = chain.evaluate(pos);
        assert!(
            (got - want).abs() <= 1e-12 * want.abs().max(1.0),
            "disagreement at {pos:?}: composite {got} vs legacy {want}"
        );
    }
}

#[test]
fn agrees_with_interior_driven_region() {
    let domain = thin_film();
    let driven = strip(40e-9, 60e-9);
    assert_agreement(&domain, &driven, 20e-9, 0.01, 0.5);
}

#[test]
fn agrees_when_driven_region_overlaps_a_ramp() {
    // Driven strip sits inside the left ramp zone; both implementations
    // give the driven value precedence there.
    let domain = thin_film();
    let driven = strip(0.0, 20e-9);
    assert_agreement(&domain, &driven, 30e-9, 0.01, 0.5);
}

#[test]
fn agrees_across_bulk_levels() {
    let domain = thin_film();
    let driven = strip(48e-9, 52e-9);
    for bulk in [0.5, 0.1, 0.004] {
        assert_agreement(&domain, &driven, 10e-9, bulk, 1.0);
    }
}

#[test]
fn ramp_zone_values_exceed_bulk() {
    // The whole point of the absorbing boundary: damping climbs from bulk
    // toward 1.0 as the wave approaches the domain edge.
    let domain = thin_film();
    let driven = strip(40e-9, 60e-9);
    let chain = composite_damping(&domain, &driven, 20e-9, 0.01, 0.5);
    let edge = chain.evaluate([1e-9, 5e-9, 6e-9]);
    let interior = chain.evaluate([30e-9, 5e-9, 6e-9]);
    assert!(edge > interior);
    assert_eq!(interior, 0.01);
}
